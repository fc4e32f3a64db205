use approx::assert_relative_eq;
use crag_core::layout::{Expander, SplitLayout};

const CONTAINER: f32 = 700.0;

#[test]
fn test_default_height() {
    let layout = SplitLayout::new(CONTAINER, 500.0);
    assert_eq!(layout.height(), None);
    assert_relative_eq!(layout.effective_height(), 500.0);
    assert!(!layout.at_top());
    assert!(!layout.at_bottom());
    assert_eq!(layout.expander(), None);
}

#[test]
fn test_default_height_limited_by_container() {
    let layout = SplitLayout::new(300.0, 500.0);
    assert_relative_eq!(layout.effective_height(), 300.0);
}

#[test]
fn test_drag_lifecycle() {
    let mut layout = SplitLayout::new(CONTAINER, 500.0);
    layout.on_drag_start();
    assert!(layout.is_dragging());
    assert!(layout.on_drag_finish(320.0));
    assert!(!layout.is_dragging());
    assert_eq!(layout.height(), Some(320.0));
}

#[test]
fn test_drag_below_zero_clamps_to_top() {
    let mut layout = SplitLayout::new(CONTAINER, 500.0);
    layout.on_drag_finish(-50.0);
    assert_eq!(layout.height(), Some(0.0));
    assert!(layout.at_top());
    assert!(!layout.at_bottom());
    assert_eq!(layout.expander(), Some(Expander::Down));
}

#[test]
fn test_drag_past_container_clamps_to_bottom() {
    let mut layout = SplitLayout::new(CONTAINER, 500.0);
    layout.on_drag_finish(CONTAINER + 50.0);
    assert_eq!(layout.height(), Some(CONTAINER));
    assert!(layout.at_bottom());
    assert!(!layout.at_top());
    assert_eq!(layout.expander(), Some(Expander::Up));
}

#[test]
fn test_same_height_reports_no_change() {
    let mut layout = SplitLayout::new(CONTAINER, 500.0);
    assert!(layout.on_drag_finish(200.0));
    assert!(!layout.on_drag_finish(200.0));
}

#[test]
fn test_reset_returns_to_default() {
    let mut layout = SplitLayout::new(CONTAINER, 500.0);
    layout.on_drag_finish(0.0);
    assert!(layout.reset());
    assert_eq!(layout.height(), None);
    assert!(!layout.at_top());
    assert!(!layout.reset());
}

#[test]
fn test_nan_height_clamps_to_top() {
    let mut layout = SplitLayout::new(CONTAINER, 500.0);
    layout.on_drag_finish(f32::NAN);
    assert!(layout.at_top());
}

#[test]
fn test_shrinking_container_reclamps() {
    let mut layout = SplitLayout::new(CONTAINER, 500.0);
    layout.on_drag_finish(CONTAINER);
    assert!(layout.set_container_height(400.0));
    assert_eq!(layout.height(), Some(400.0));
    assert!(layout.at_bottom());
}

#[test]
fn test_growing_container_keeps_height() {
    let mut layout = SplitLayout::new(CONTAINER, 500.0);
    layout.on_drag_finish(CONTAINER);
    assert!(!layout.set_container_height(900.0));
    assert_eq!(layout.height(), Some(CONTAINER));
    assert!(!layout.at_bottom());
}
