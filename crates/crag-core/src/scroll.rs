//! Route list scrolling: which route sits under the detection line, and
//! whether the photo has to change to show it.

use crate::photo::PhotoKey;

/// Position of the detection line for a given scroll offset.
pub fn detection_line(scroll_offset: f32, row_height: f32, margin: f32) -> f32 {
    scroll_offset + margin + row_height
}

/// Index of the first route whose row spans the detection line.
///
/// `offsets` are the row tops of the route list, ascending. Rows are closed
/// intervals `[top, top + row_height]`, so a line exactly on a shared
/// boundary picks the upper row.
pub fn route_index_at_scroll(
    scroll_offset: f32,
    row_height: f32,
    margin: f32,
    offsets: &[f32],
) -> Option<usize> {
    let line = detection_line(scroll_offset, row_height, margin);
    offsets
        .iter()
        .position(|&top| top <= line && line <= top + row_height)
}

/// Photo to navigate to so the newly selected route is visible.
///
/// Returns the route's first photo when the current one is not among its
/// photos, unless a swap is already in flight.
pub fn photo_replacement<'a>(
    route_photos: &'a [PhotoKey],
    current: Option<&PhotoKey>,
    swap_pending: bool,
) -> Option<&'a PhotoKey> {
    if swap_pending {
        return None;
    }
    if current.is_some_and(|c| route_photos.contains(c)) {
        return None;
    }
    route_photos.first()
}

/// Whether the route list has hidden content above or below.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScrollShadow {
    pub top: bool,
    pub bottom: bool,
}

impl ScrollShadow {
    pub fn update(&mut self, scroll_top: f32, client_height: f32, scroll_height: f32) {
        self.top = scroll_top > 0.0;
        self.bottom = scroll_top + client_height < scroll_height;
    }
}
