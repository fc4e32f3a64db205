use crate::layout::Expander;
use crate::machine::SessionMode;

/// Scroll position of the route list.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollEvent {
    pub scroll_top: f32,
    pub client_height: f32,
    pub scroll_height: f32,
}

impl ScrollEvent {
    pub fn at(scroll_top: f32) -> Self {
        Self {
            scroll_top,
            ..Self::default()
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum WindowEvent {
    Resize { width: f32, height: f32 },
    OrientationChange { width: f32, height: f32 },
}

/// Snapshot of everything the UI layer renders from.
#[derive(Clone, Debug, PartialEq)]
pub struct SessionView {
    pub mode: SessionMode,
    pub selected_index: Option<usize>,
    pub resolution: u32,
    pub target_resolution: u32,
    pub image_url: Option<String>,
    /// Set when the target resolution still has to be fetched.
    pub fetch_url: Option<String>,
    pub background_image_url: Option<String>,
    pub pane_height: f32,
    pub expander: Option<Expander>,
    pub is_photo_loading: bool,
    pub show_mini_loading: bool,
    pub show_full_loading: bool,
    pub routes_layer_visible: bool,
    pub show_edit_controls: bool,
    pub is_map_visible: bool,
    pub shadow_top: bool,
    pub shadow_bottom: bool,
}
