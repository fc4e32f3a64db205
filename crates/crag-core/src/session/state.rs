use crate::photo::{PhotoKey, PhotoSet};
use crate::route::Route;
use crate::viewport::ViewportState;

/// Shared session data read by every component.
///
/// Each field group has one writer: routes come from the route data
/// provider, `photos` from the photo loader, `viewport` from window events.
#[derive(Clone, Debug, Default)]
pub struct SessionState {
    pub routes: Vec<Route>,
    /// Row tops in the route list, parallel to `routes`.
    pub route_offsets: Vec<f32>,
    pub routes_loading: bool,
    pub photos: PhotoSet,
    pub photo_path: Option<PhotoKey>,
    pub viewport: ViewportState,
}

impl SessionState {
    pub fn route(&self, index: usize) -> Option<&Route> {
        self.routes.get(index)
    }

    /// Photos the route at `index` is drawn on, empty for a missing route.
    pub fn route_photos(&self, index: usize) -> Vec<PhotoKey> {
        self.route(index).map(Route::photo_keys).unwrap_or_default()
    }
}
