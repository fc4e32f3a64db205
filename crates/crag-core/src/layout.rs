use tracing::debug;

/// One-tap control shown when the divider sits at a snap position.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Expander {
    /// Photo pane collapsed to the top; the control pulls it down.
    Down,
    /// Photo pane fills the container; the control pushes it up.
    Up,
}

/// Resizable photo/route-list split.
#[derive(Clone, Debug, PartialEq)]
pub struct SplitLayout {
    /// Dragged height, `None` while the default applies.
    height: Option<f32>,
    dragging: bool,
    container_height: f32,
    default_height: f32,
}

impl SplitLayout {
    pub fn new(container_height: f32, default_height: f32) -> Self {
        Self {
            height: None,
            dragging: false,
            container_height: container_height.max(0.0),
            default_height: default_height.max(0.0),
        }
    }

    pub fn height(&self) -> Option<f32> {
        self.height
    }

    pub fn container_height(&self) -> f32 {
        self.container_height
    }

    /// Height to lay out with: the dragged one, else the default.
    pub fn effective_height(&self) -> f32 {
        self.height
            .unwrap_or_else(|| self.default_height.min(self.container_height))
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    pub fn on_drag_start(&mut self) {
        self.dragging = true;
    }

    /// Store the dropped height, clamped to the container. Returns whether the
    /// stored height changed.
    pub fn on_drag_finish(&mut self, new_height: f32) -> bool {
        self.dragging = false;
        let clamped = self.clamp(new_height);
        if clamped != new_height {
            debug!(requested = new_height, clamped, "Split height clamped");
        }
        self.set_height(Some(clamped))
    }

    /// Go back to the default height. Returns whether anything changed.
    pub fn reset(&mut self) -> bool {
        self.set_height(None)
    }

    /// New container size after a resize; the stored height follows it down.
    pub fn set_container_height(&mut self, container_height: f32) -> bool {
        self.container_height = if container_height.is_finite() {
            container_height.max(0.0)
        } else {
            0.0
        };
        let reclamped = self.height.map(|h| self.clamp(h));
        self.set_height(reclamped)
    }

    pub fn at_top(&self) -> bool {
        self.height == Some(0.0)
    }

    pub fn at_bottom(&self) -> bool {
        self.height == Some(self.container_height)
    }

    pub fn expander(&self) -> Option<Expander> {
        if self.at_top() {
            Some(Expander::Down)
        } else if self.at_bottom() {
            Some(Expander::Up)
        } else {
            None
        }
    }

    fn clamp(&self, h: f32) -> f32 {
        if h.is_nan() {
            return 0.0;
        }
        h.clamp(0.0, self.container_height)
    }

    fn set_height(&mut self, height: Option<f32>) -> bool {
        let changed = self.height != height;
        self.height = height;
        changed
    }
}
