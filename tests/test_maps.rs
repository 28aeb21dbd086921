use sprite_explosion::entities::*;
use sprite_explosion::maps::*;

#[test]
fn default_arena_is_only_perimeter() {
    let mut ids = EntityIds::default();
    let walls = create_walls(&mut ids);

    // 32 tiles per run, four runs
    assert_eq!(walls.len(), 128);
    assert!(walls.is_spatially_hashed());

    for wall in walls.iter() {
        let (x, y) = (wall.body.center_x, wall.body.center_y);
        assert!(
            x.abs() == 1000.0 || y.abs() == 1000.0,
            "interior tile at ({x}, {y})"
        );
        assert!((-1000.0..=1000.0).contains(&x));
        assert!((-1000.0..=1000.0).contains(&y));
    }
}

#[test]
fn tiles_are_spaced_by_scaled_size() {
    let mut ids = EntityIds::default();
    let walls = create_walls(&mut ids);

    let mut bottom_row: Vec<f32> = walls
        .iter()
        .filter(|w| w.body.center_y == -1000.0)
        .map(|w| w.body.center_x)
        .collect();
    bottom_row.sort_by(|a, b| a.partial_cmp(b).unwrap());
    bottom_row.dedup();

    assert_eq!(bottom_row.first(), Some(&-1000.0));
    for pair in bottom_row.windows(2) {
        assert_eq!(pair[1] - pair[0], 64.0);
    }
    for wall in walls.iter() {
        assert_eq!(wall.body.width, 64.0);
        assert_eq!(wall.body.height, 64.0);
    }
}

#[test]
fn custom_bounds_and_pitch() {
    let mut ids = EntityIds::default();
    let bounds = Bounds {
        left: 0,
        right: 100,
        bottom: 0,
        top: 50,
    };
    let walls = create_walls_within(bounds, 50.0, 0.5, &mut ids);

    // x runs: 0,25,50,75 on two rows; y runs: 0,25 on two columns
    assert_eq!(walls.len(), 12);
    assert!(walls
        .iter()
        .all(|w| matches!(w.body.center_x as i32, 0 | 100) || matches!(w.body.center_y as i32, 0 | 50)));
}

#[test]
fn interior_is_empty_for_overlap_queries() {
    let mut ids = EntityIds::default();
    let walls = create_walls(&mut ids);
    assert!(walls
        .overlapping(&Rect::from_center(0.0, 0.0, 1800.0, 1800.0))
        .is_empty());
    assert!(!walls
        .overlapping(&Rect::from_center(1000.0, 24.0, 4.0, 4.0))
        .is_empty());
}
