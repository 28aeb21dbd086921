use sprite_explosion::camera::*;
use sprite_explosion::entities::Rect;
use sprite_explosion::lighting::LightLayer;

// ── Viewport ──────────────────────────────────────────────────────────────────

#[test]
fn viewport_is_centred_with_fixed_half_extents() {
    let v = Viewport::centered_on(10.0, -20.0);
    assert_eq!(v.left, -390.0);
    assert_eq!(v.right, 410.0);
    assert_eq!(v.bottom, -320.0);
    assert_eq!(v.top, 280.0);
}

#[test]
fn projection_maps_world_to_cells() {
    let p = Projection::new(Viewport::centered_on(0.0, 0.0), 80, 30);
    assert_eq!(p.cell_size(), (10.0, 20.0));
    assert_eq!(p.to_cell(-400.0, 300.0), Some((0, 0)));
    assert_eq!(p.to_cell(0.0, 0.0), Some((40, 15)));
    assert_eq!(p.to_cell(399.0, -299.0), Some((79, 29)));
    assert_eq!(p.to_cell(400.0, 0.0), None);
    assert_eq!(p.to_cell(0.0, 301.0), None);
    assert_eq!(p.cell_center(40, 15), (5.0, -10.0));
}

#[test]
fn small_rect_covers_one_cell_large_rect_many() {
    let p = Projection::new(Viewport::centered_on(0.0, 0.0), 80, 30);
    assert_eq!(p.cells_covering(&Rect::from_center(3.0, -3.0, 2.0, 2.0)), vec![(40, 15)]);

    let big = p.cells_covering(&Rect::from_center(0.0, 0.0, 40.0, 40.0));
    assert_eq!(big.len(), 4 * 2);
    assert!(p.cells_covering(&Rect::from_center(5000.0, 0.0, 10.0, 10.0)).is_empty());
}

// ── Lighting ──────────────────────────────────────────────────────────────────

#[test]
fn light_is_full_at_centre_and_ambient_outside() {
    let mut light = LightLayer::new(100.0, 0.2);
    light.follow(50.0, 50.0);

    assert!((light.brightness(50.0, 50.0) - 1.0).abs() < 1e-6);
    assert_eq!(light.brightness(150.0, 50.0), 0.2);
    assert_eq!(light.brightness(1000.0, 1000.0), 0.2);

    let mid = light.brightness(100.0, 50.0);
    assert!(mid > 0.2 && mid < 1.0);
    assert!(light.brightness(75.0, 50.0) > mid);
}

#[test]
fn shade_scales_colour() {
    let light = LightLayer::new(100.0, 0.5);
    assert_eq!(light.shade((200, 100, 50), 0.0, 0.0), (200, 100, 50));
    assert_eq!(light.shade((200, 100, 50), 500.0, 0.0), (100, 50, 25));
}
