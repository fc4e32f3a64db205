use std::rc::Rc;

use crate::photo::{PhotoKey, ResolutionChoice};
use crate::viewport::ViewportState;

/// Everything the renderer needs to rebuild the photo display geometry.
#[derive(Clone, Debug, PartialEq)]
pub struct PhotoRelatedData {
    pub photo: Option<PhotoKey>,
    pub resolution: ResolutionChoice,
    pub selected_index: Option<usize>,
    pub pane_height: f32,
    pub viewport: ViewportState,
}

/// Photo loading collaborator.
///
/// Implementors fetch images and rebuild overlay geometry. Loaded
/// resolutions are reported back through `Session::photo_loaded`.
pub trait PhotoDataProvider {
    /// The feature's crag photos are known; start preparing them.
    fn prepare_photos(&mut self, _keys: &[PhotoKey]) {}

    /// Re-derive display geometry for the current photo and resolution.
    fn load_photo_related_data(&mut self, _data: &PhotoRelatedData) {}
}

/// Switches the active photo by replacing the current URL (no history entry).
pub trait Navigator {
    fn replace(&mut self, url: &str);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WindowEventKind {
    Resize,
    OrientationChange,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ListenerId(pub u64);

/// Host window that delivers resize/orientation events to the session.
pub trait WindowEventSource {
    fn add_listener(&self, kinds: &[WindowEventKind]) -> ListenerId;
    fn remove_listener(&self, id: ListenerId);
}

/// Registration of the session's window listener. Dropping it deregisters.
pub struct ListenerGuard {
    source: Rc<dyn WindowEventSource>,
    id: ListenerId,
}

impl ListenerGuard {
    pub fn register(source: Rc<dyn WindowEventSource>, kinds: &[WindowEventKind]) -> Self {
        let id = source.add_listener(kinds);
        Self { source, id }
    }

    pub fn id(&self) -> ListenerId {
        self.id
    }
}

impl Drop for ListenerGuard {
    fn drop(&mut self) {
        self.source.remove_listener(self.id);
    }
}

/// A navigator that drops every request, for hosts without routing.
pub struct NoOpNavigator;
impl Navigator for NoOpNavigator {
    fn replace(&mut self, _url: &str) {}
}

/// A photo provider that ignores every call.
pub struct NoOpPhotoProvider;
impl PhotoDataProvider for NoOpPhotoProvider {}
