use reverse_ui::{Point, Rect};

#[test]
fn interior_points_hit() {
    let r = Rect::from_ltrb(20.0, 20.0, 150.0, 50.0);
    assert!(r.contains(21.0, 21.0));
    assert!(r.contains(149.5, 49.5));
    assert!(r.contains_point(Point::new(85.0, 35.0)));
}

#[test]
fn edges_are_outside() {
    let r = Rect::from_ltrb(20.0, 20.0, 150.0, 50.0);
    assert!(!r.contains(20.0, 35.0));
    assert!(!r.contains(150.0, 35.0));
    assert!(!r.contains(85.0, 20.0));
    assert!(!r.contains(85.0, 50.0));
    assert!(!r.contains(20.0, 20.0));
}

#[test]
fn far_points_miss() {
    let r = Rect::new(0.0, 0.0, 10.0, 10.0);
    assert!(!r.contains(-1.0, 5.0));
    assert!(!r.contains(5.0, 11.0));
}

#[test]
fn degenerate_rect_never_hits() {
    let r = Rect::new(5.0, 5.0, 0.0, 0.0);
    assert!(!r.contains(5.0, 5.0));
}

#[test]
fn center_keeps_midpoint() {
    let r = Rect::new(0.0, 0.0, 100.0, 40.0);
    assert_eq!(r.center(20.0, 10.0), Rect::new(40.0, 15.0, 20.0, 10.0));
}
