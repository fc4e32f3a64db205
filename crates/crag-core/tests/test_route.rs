use crag_core::error::CragError;
use crag_core::photo::PhotoKey;
use crag_core::route::{PathPoint, Route};

fn key(name: &str) -> PhotoKey {
    PhotoKey::new(name).unwrap()
}

#[test]
fn test_photo_keys_keep_attach_order() {
    let route = Route::new("r1")
        .with_path(key("z.jpg"), vec![])
        .with_path(key("a.jpg"), vec![]);
    assert_eq!(route.photo_keys(), vec![key("z.jpg"), key("a.jpg")]);
    assert!(route.is_on_photo(&key("a.jpg")));
    assert!(!route.is_on_photo(&key("b.jpg")));
}

#[test]
fn test_point_is_clamped_to_image() {
    let p = PathPoint::new(-0.2, 1.4);
    assert_eq!(p, PathPoint { x: 0.0, y: 1.0 });
}

#[test]
fn test_push_point_creates_path() {
    let mut route = Route::new("r1");
    route.push_point(&key("a.jpg"), PathPoint::new(0.1, 0.2));
    route.push_point(&key("a.jpg"), PathPoint::new(0.3, 0.4));
    assert_eq!(route.path_on(&key("a.jpg")).map(<[PathPoint]>::len), Some(2));
}

#[test]
fn test_move_point() {
    let mut route = Route::new("r1").with_path(key("a.jpg"), vec![PathPoint::new(0.0, 0.0)]);
    route.move_point(&key("a.jpg"), 0, PathPoint::new(0.5, 0.5)).unwrap();
    assert_eq!(route.path_on(&key("a.jpg")).unwrap()[0], PathPoint::new(0.5, 0.5));

    let err = route.move_point(&key("a.jpg"), 3, PathPoint::new(0.5, 0.5));
    assert_eq!(err, Err(CragError::PointIndexOutOfRange { index: 3, total: 1 }));

    let err = route.move_point(&key("b.jpg"), 0, PathPoint::new(0.5, 0.5));
    assert_eq!(err, Err(CragError::NoPathOnPhoto("r1".into())));
}

#[test]
fn test_remove_last_point_drops_empty_path() {
    let mut route = Route::new("r1").with_path(key("a.jpg"), vec![PathPoint::new(0.2, 0.2)]);
    let removed = route.remove_last_point(&key("a.jpg")).unwrap();
    assert_eq!(removed, Some(PathPoint::new(0.2, 0.2)));
    assert!(route.photo_keys().is_empty());
}
