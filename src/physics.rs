/// Simple kinematic movement against static obstacles.
///
/// Each axis is integrated separately.  If the step on an axis lands the
/// body inside a wall, the body is pushed back until its edge sits flush
/// with the nearest blocking wall and that axis' velocity is zeroed, so it
/// slides along walls instead of bouncing.

use crate::container::SpriteList;
use crate::entities::{Body, Rect, Sprite};

/// Move `body` by its velocity, stopping at anything in `obstacles`.
pub fn move_and_slide<T: Sprite>(body: &mut Body, obstacles: &SpriteList<T>) {
    if body.change_x != 0.0 {
        body.center_x += body.change_x;
        let blockers = blocking(body, obstacles);
        if !blockers.is_empty() {
            let half = body.bounds().width() / 2.0;
            body.center_x = if body.change_x > 0.0 {
                nearest(blockers.iter().map(|r| r.left), f32::min) - half
            } else {
                nearest(blockers.iter().map(|r| r.right), f32::max) + half
            };
            body.change_x = 0.0;
        }
    }

    if body.change_y != 0.0 {
        body.center_y += body.change_y;
        let blockers = blocking(body, obstacles);
        if !blockers.is_empty() {
            let half = body.bounds().height() / 2.0;
            body.center_y = if body.change_y > 0.0 {
                nearest(blockers.iter().map(|r| r.bottom), f32::min) - half
            } else {
                nearest(blockers.iter().map(|r| r.top), f32::max) + half
            };
            body.change_y = 0.0;
        }
    }
}

fn blocking<T: Sprite>(body: &Body, obstacles: &SpriteList<T>) -> Vec<Rect> {
    obstacles
        .overlapping(&body.bounds())
        .into_iter()
        .filter_map(|id| obstacles.get(id).map(Sprite::bounds))
        .collect()
}

fn nearest(edges: impl Iterator<Item = f32>, pick: fn(f32, f32) -> f32) -> f32 {
    edges.reduce(pick).unwrap_or(0.0)
}
