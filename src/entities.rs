/// Game entity types.
///
/// Entities are plain data: a `Body` (position, velocity, extent, rotation)
/// composed with whatever behaviour data the kind needs.  Game logic lives
/// in `compute`, `physics` and `effects`.

use std::rc::Rc;

use crate::assets::TextureSequence;
use crate::audio::SoundCue;
use crate::camera::Viewport;
use crate::container::SpriteList;
use crate::effects::Explosion;

/// Process-unique entity identity.  Ids are never reused.
pub type EntityId = u64;

/// Hands out entity ids in increasing order.
#[derive(Clone, Debug, Default)]
pub struct EntityIds {
    next: EntityId,
}

impl EntityIds {
    pub fn next_id(&mut self) -> EntityId {
        let id = self.next;
        self.next += 1;
        id
    }
}

// ── Geometry ──────────────────────────────────────────────────────────────────

/// Axis-aligned bounding box.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub left: f32,
    pub right: f32,
    pub bottom: f32,
    pub top: f32,
}

impl Rect {
    pub fn from_center(x: f32, y: f32, width: f32, height: f32) -> Self {
        Rect {
            left: x - width / 2.0,
            right: x + width / 2.0,
            bottom: y - height / 2.0,
            top: y + height / 2.0,
        }
    }

    /// Strict overlap: rectangles that only share an edge do not collide.
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.left < other.right
            && other.left < self.right
            && self.bottom < other.top
            && other.bottom < self.top
    }

    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    pub fn height(&self) -> f32 {
        self.top - self.bottom
    }
}

/// Kinematic state shared by every entity kind.
#[derive(Clone, Debug, PartialEq)]
pub struct Body {
    pub center_x: f32,
    pub center_y: f32,
    pub change_x: f32,
    pub change_y: f32,
    /// Unrotated extent.
    pub width: f32,
    pub height: f32,
    /// Rotation in degrees, counter-clockwise.
    pub angle: f32,
}

impl Body {
    pub fn new(center_x: f32, center_y: f32, width: f32, height: f32) -> Self {
        Body {
            center_x,
            center_y,
            change_x: 0.0,
            change_y: 0.0,
            width,
            height,
            angle: 0.0,
        }
    }

    /// Scaled body from a source image size.
    pub fn scaled(center_x: f32, center_y: f32, image: (f32, f32), scale: f32) -> Self {
        Body::new(center_x, center_y, image.0 * scale, image.1 * scale)
    }

    /// Bounding box of the rotated extent.
    pub fn bounds(&self) -> Rect {
        let (sin, cos) = self.angle.to_radians().sin_cos();
        let w = (self.width * cos).abs() + (self.height * sin).abs();
        let h = (self.width * sin).abs() + (self.height * cos).abs();
        Rect::from_center(self.center_x, self.center_y, w, h)
    }

    pub fn top(&self) -> f32 {
        self.bounds().top
    }

    pub fn bottom(&self) -> f32 {
        self.bounds().bottom
    }

    /// Move the body so its bounding box bottom sits at `y`.
    pub fn set_bottom(&mut self, y: f32) {
        let half = self.bounds().height() / 2.0;
        self.center_y = y + half;
    }

    /// Advance by one tick of velocity.
    pub fn advance(&mut self) {
        self.center_x += self.change_x;
        self.center_y += self.change_y;
    }

    pub fn is_moving(&self) -> bool {
        self.change_x != 0.0 || self.change_y != 0.0
    }
}

/// What a container needs from its members.
pub trait Sprite {
    fn id(&self) -> EntityId;
    fn body(&self) -> &Body;

    fn bounds(&self) -> Rect {
        self.body().bounds()
    }
}

// ── Player ────────────────────────────────────────────────────────────────────

/// Which direction keys are currently held.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct HeldKeys {
    pub left: bool,
    pub right: bool,
    pub down: bool,
    pub up: bool,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Facing {
    Left,
    Right,
}

/// Idle/walk animation cursor.
#[derive(Clone, Debug, PartialEq)]
pub struct WalkCycle {
    /// 0 is the idle frame; 1 and 2 alternate while walking.
    pub frame: usize,
    pub ticks: u32,
    pub facing: Facing,
}

impl Default for WalkCycle {
    fn default() -> Self {
        WalkCycle {
            frame: 0,
            ticks: 0,
            facing: Facing::Right,
        }
    }
}

#[derive(Clone, Debug)]
pub struct Player {
    pub id: EntityId,
    pub body: Body,
    pub keys: HeldKeys,
    /// While false, velocity is pinned to zero and presses are ignored.
    pub can_move: bool,
    pub walk: WalkCycle,
}

impl Sprite for Player {
    fn id(&self) -> EntityId {
        self.id
    }
    fn body(&self) -> &Body {
        &self.body
    }
}

// ── Projectiles, targets, walls ───────────────────────────────────────────────

#[derive(Clone, Debug)]
pub struct Bullet {
    pub id: EntityId,
    pub body: Body,
}

impl Sprite for Bullet {
    fn id(&self) -> EntityId {
        self.id
    }
    fn body(&self) -> &Body {
        &self.body
    }
}

/// A stationary collectible target.
#[derive(Clone, Debug)]
pub struct Coin {
    pub id: EntityId,
    pub body: Body,
}

impl Sprite for Coin {
    fn id(&self) -> EntityId {
        self.id
    }
    fn body(&self) -> &Body {
        &self.body
    }
}

#[derive(Clone, Debug)]
pub struct Wall {
    pub id: EntityId,
    pub body: Body,
}

impl Sprite for Wall {
    fn id(&self) -> EntityId {
        self.id
    }
    fn body(&self) -> &Body {
        &self.body
    }
}

// ── Session state ─────────────────────────────────────────────────────────────

/// Everything one play session owns.  The game loop is its only mutator.
pub struct World {
    pub ids: EntityIds,
    pub player: Player,
    pub coins: SpriteList<Coin>,
    pub bullets: SpriteList<Bullet>,
    pub explosions: SpriteList<Explosion>,
    pub walls: SpriteList<Wall>,
    pub explosion_textures: Rc<TextureSequence>,
    /// Incremented exactly once per destroyed coin.
    pub score: u32,
    pub viewport: Viewport,
    /// Sound cues raised since the host last drained them.
    pub sounds: Vec<SoundCue>,
    pub frame: u64,
}
