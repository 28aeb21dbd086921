/// Gameplay tuning.  All distances are in world units (pixels of the
/// nominal window), y pointing up.

// ── Window ────────────────────────────────────────────────────────────────────

pub const SCREEN_WIDTH: f32 = 800.0;
pub const SCREEN_HEIGHT: f32 = 600.0;

/// Offsets from the player's centre to the viewport's left/bottom edges.
pub const VIEW_LEFT: f32 = -(SCREEN_WIDTH / 2.0);
pub const VIEW_BOT: f32 = -(SCREEN_HEIGHT / 2.0);

// ── Sprites ───────────────────────────────────────────────────────────────────

pub const SPRITE_SCALING_PLAYER: f32 = 0.5;
pub const SPRITE_SCALING_COIN: f32 = 0.2;
pub const SPRITE_SCALING_LASER: f32 = 0.8;

/// Source image sizes before scaling.
pub const PLAYER_IMAGE: (f32, f32) = (96.0, 128.0);
pub const COIN_IMAGE: (f32, f32) = (128.0, 128.0);
/// The laser image points to the right.
pub const LASER_IMAGE: (f32, f32) = (54.0, 9.0);

// ── Gameplay ──────────────────────────────────────────────────────────────────

pub const COIN_COUNT: usize = 100;
/// Coins never spawn below this height, keeping the player's spawn clear.
pub const COIN_MIN_Y: i32 = 150;

pub const BULLET_SPEED: f32 = 5.0;
pub const PLAYER_SPEED: f32 = 4.0;

/// Ticks between walk-cycle frames while the player is moving.
pub const WALK_FRAME_TICKS: u32 = 8;

// ── Explosion sprite sheet ────────────────────────────────────────────────────

/// Bundled asset directory, used unless `SHOOTER_ASSETS` points elsewhere.
pub const ASSET_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/assets");
pub const EXPLOSION_SHEET: &str = "explosion.png";
pub const EXPLOSION_TEXTURE_COUNT: usize = 60;
pub const EXPLOSION_COLUMNS: u32 = 16;
pub const EXPLOSION_FRAME_SIZE: u32 = 256;

// ── Arena ─────────────────────────────────────────────────────────────────────

pub const WALL_LEFT: i32 = -1000;
pub const WALL_RIGHT: i32 = 1000;
pub const WALL_BOT: i32 = -1000;
pub const WALL_TOP: i32 = 1000;
pub const WALL_TILE_SIZE: f32 = 128.0;
pub const WALL_SCALING: f32 = 0.5;

/// Bucket size of the wall set's spatial hash.
pub const SPATIAL_CELL_SIZE: f32 = 128.0;

// ── Lighting ──────────────────────────────────────────────────────────────────

pub const LIGHT_RADIUS: f32 = 300.0;
pub const LIGHT_AMBIENT: f32 = 0.15;
