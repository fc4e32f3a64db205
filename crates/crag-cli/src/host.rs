use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use crag_core::photo::PhotoKey;
use crag_core::session::providers::{Navigator, PhotoDataProvider, PhotoRelatedData};
use tracing::info;

/// URLs requested by the session, waiting for the replay loop to "route" them.
pub type NavigationQueue = Rc<RefCell<VecDeque<String>>>;

pub struct QueueNavigator {
    queue: NavigationQueue,
}

impl QueueNavigator {
    pub fn new(queue: NavigationQueue) -> Self {
        Self { queue }
    }
}

impl Navigator for QueueNavigator {
    fn replace(&mut self, url: &str) {
        info!(url, "Navigation requested");
        self.queue.borrow_mut().push_back(url.to_string());
    }
}

/// Photo provider that only logs what a renderer would do.
pub struct LoggingPhotos;

impl PhotoDataProvider for LoggingPhotos {
    fn prepare_photos(&mut self, keys: &[PhotoKey]) {
        info!(count = keys.len(), "Preparing crag photos");
    }

    fn load_photo_related_data(&mut self, data: &PhotoRelatedData) {
        info!(
            photo = ?data.photo.as_ref().map(PhotoKey::as_str),
            resolution = data.resolution.display,
            selected = ?data.selected_index,
            pane_height = data.pane_height,
            "Photo related data reloaded"
        );
    }
}

/// Photo key addressed by a `/…/climbing/photo/{key}` URL.
pub fn photo_from_url(url: &str) -> Option<PhotoKey> {
    let (_, name) = url.rsplit_once("/climbing/photo/")?;
    PhotoKey::new(name).ok()
}
