use sprite_explosion::entities::*;

#[test]
fn rect_overlap_is_strict() {
    let a = Rect::from_center(0.0, 0.0, 10.0, 10.0);
    let touching = Rect::from_center(10.0, 0.0, 10.0, 10.0);
    let overlapping = Rect::from_center(9.0, 9.0, 10.0, 10.0);
    let apart = Rect::from_center(50.0, 0.0, 10.0, 10.0);

    assert!(a.overlaps(&overlapping));
    assert!(overlapping.overlaps(&a));
    assert!(!a.overlaps(&touching));
    assert!(!a.overlaps(&apart));
}

#[test]
fn rotated_body_swaps_extent() {
    let mut body = Body::new(0.0, 0.0, 40.0, 8.0);
    let flat = body.bounds();
    assert!((flat.width() - 40.0).abs() < 1e-3);
    assert!((flat.height() - 8.0).abs() < 1e-3);

    body.angle = 90.0;
    let upright = body.bounds();
    assert!((upright.width() - 8.0).abs() < 1e-3);
    assert!((upright.height() - 40.0).abs() < 1e-3);
}

#[test]
fn set_bottom_moves_centre() {
    let mut body = Body::new(5.0, 0.0, 10.0, 20.0);
    body.set_bottom(100.0);
    assert!((body.bottom() - 100.0).abs() < 1e-3);
    assert!((body.center_y - 110.0).abs() < 1e-3);
    assert_eq!(body.center_x, 5.0);
}

#[test]
fn advance_applies_velocity() {
    let mut body = Body::new(1.0, 2.0, 4.0, 4.0);
    body.change_x = -3.0;
    body.change_y = 5.0;
    body.advance();
    assert_eq!((body.center_x, body.center_y), (-2.0, 7.0));
    assert!(body.is_moving());
}

#[test]
fn entity_ids_are_unique_and_increasing() {
    let mut ids = EntityIds::default();
    let a = ids.next_id();
    let b = ids.next_id();
    let c = ids.next_id();
    assert!(a < b && b < c);
}
