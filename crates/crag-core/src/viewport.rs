use serde::{Deserialize, Serialize};

/// Window size, photo zoom and editor offset, refreshed on resize events.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ViewportState {
    pub width: f32,
    pub height: f32,
    /// Zoom/pan scale of the photo (1.0 = fit).
    pub zoom_scale: f32,
    /// Top of the photo editor within the window.
    pub editor_y: f32,
}

impl Default for ViewportState {
    fn default() -> Self {
        Self {
            width: 0.0,
            height: 0.0,
            zoom_scale: 1.0,
            editor_y: 0.0,
        }
    }
}

impl ViewportState {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width: sanitize(width),
            height: sanitize(height),
            ..Self::default()
        }
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        self.width = sanitize(width);
        self.height = sanitize(height);
    }

    pub fn set_zoom(&mut self, scale: f32) {
        self.zoom_scale = if scale.is_finite() && scale > 0.0 {
            scale
        } else {
            1.0
        };
    }

    pub fn set_editor_y(&mut self, y: f32) {
        self.editor_y = sanitize(y);
    }

    /// Height available to the split pane below the editor top.
    pub fn container_height(&self) -> f32 {
        (self.height - self.editor_y).max(0.0)
    }

    pub fn longest_side(&self) -> f32 {
        self.width.max(self.height)
    }
}

fn sanitize(v: f32) -> f32 {
    if v.is_finite() {
        v.max(0.0)
    } else {
        0.0
    }
}
