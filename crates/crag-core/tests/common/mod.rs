#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use crag_core::photo::commons::{Feature, OsmType};
use crag_core::photo::PhotoKey;
use crag_core::route::{PathPoint, Route};
use crag_core::session::config::SessionConfig;
use crag_core::session::providers::{
    ListenerId, Navigator, PhotoDataProvider, PhotoRelatedData, WindowEventKind,
    WindowEventSource,
};
use crag_core::session::Session;
use crag_core::viewport::ViewportState;

pub fn key(name: &str) -> PhotoKey {
    PhotoKey::new(name).unwrap()
}

/// Route drawn on the given photos, one short line each.
pub fn route(id: &str, photos: &[&str]) -> Route {
    photos.iter().fold(Route::new(id), |r, p| {
        r.with_path(key(p), vec![PathPoint::new(0.5, 0.9), PathPoint::new(0.5, 0.1)])
    })
}

pub fn feature(photos: &[&str]) -> Feature {
    let mut feature = Feature::new(OsmType::Node, 42);
    for (i, p) in photos.iter().enumerate() {
        let tag = if i == 0 {
            "wikimedia_commons".to_string()
        } else {
            format!("wikimedia_commons:{}", i + 1)
        };
        feature = feature.with_tag(tag, format!("File:{p}"));
    }
    feature
}

/// Calls observed by the recording collaborators.
#[derive(Default, Debug)]
pub struct Log {
    pub navigations: Vec<String>,
    pub prepared: Vec<PhotoKey>,
    pub related_data: Vec<PhotoRelatedData>,
    pub listeners_added: Vec<ListenerId>,
    pub listeners_removed: Vec<ListenerId>,
}

pub type SharedLog = Rc<RefCell<Log>>;

pub struct RecordingNavigator(pub SharedLog);

impl Navigator for RecordingNavigator {
    fn replace(&mut self, url: &str) {
        self.0.borrow_mut().navigations.push(url.to_string());
    }
}

pub struct RecordingPhotos(pub SharedLog);

impl PhotoDataProvider for RecordingPhotos {
    fn prepare_photos(&mut self, keys: &[PhotoKey]) {
        self.0.borrow_mut().prepared.extend_from_slice(keys);
    }

    fn load_photo_related_data(&mut self, data: &PhotoRelatedData) {
        self.0.borrow_mut().related_data.push(data.clone());
    }
}

pub struct RecordingWindow {
    pub log: SharedLog,
    next: RefCell<u64>,
}

impl RecordingWindow {
    pub fn new(log: SharedLog) -> Self {
        Self {
            log,
            next: RefCell::new(1),
        }
    }
}

impl WindowEventSource for RecordingWindow {
    fn add_listener(&self, _kinds: &[WindowEventKind]) -> ListenerId {
        let mut next = self.next.borrow_mut();
        let id = ListenerId(*next);
        *next += 1;
        self.log.borrow_mut().listeners_added.push(id);
        id
    }

    fn remove_listener(&self, id: ListenerId) {
        self.log.borrow_mut().listeners_removed.push(id);
    }
}

/// Session on a 1000x800 window, editor at y=100, with recording
/// collaborators.
pub fn session_with(config: SessionConfig, photos: &[&str], current: Option<&str>) -> (Session, SharedLog) {
    let log = SharedLog::default();
    let mut viewport = ViewportState::new(1000.0, 800.0);
    viewport.set_editor_y(100.0);
    let session = Session::new(
        config,
        feature(photos),
        current.map(key),
        viewport,
        Box::new(RecordingPhotos(log.clone())),
        Box::new(RecordingNavigator(log.clone())),
    )
    .unwrap();
    (session, log)
}

pub fn session(photos: &[&str], current: Option<&str>) -> (Session, SharedLog) {
    session_with(SessionConfig::default(), photos, current)
}
