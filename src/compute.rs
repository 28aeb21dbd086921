/// Game logic.
///
/// Apart from the one-off sprite sheet load, every function here mutates a
/// `World` in place and performs no I/O.
/// Randomness is injected so tests can seed it, and sounds are queued on
/// the world for the host to play after the tick.

use std::path::Path;
use std::rc::Rc;

use anyhow::Result;
use rand::Rng;
use tracing::{debug, info, trace};

use crate::assets::{SpriteSheet, TextureSequence};
use crate::audio::SoundCue;
use crate::camera::Viewport;
use crate::container::SpriteList;
use crate::effects::{Explosion, ExplosionState};
use crate::entities::{
    Body, Bullet, Coin, EntityId, EntityIds, Facing, HeldKeys, Player, Sprite, WalkCycle, World,
};
use crate::maps::create_walls;
use crate::physics::move_and_slide;
use crate::tuning::{
    ASSET_DIR, BULLET_SPEED, COIN_COUNT, COIN_IMAGE, COIN_MIN_Y, EXPLOSION_COLUMNS,
    EXPLOSION_FRAME_SIZE, EXPLOSION_SHEET, EXPLOSION_TEXTURE_COUNT, LASER_IMAGE, PLAYER_IMAGE,
    SCREEN_HEIGHT, SCREEN_WIDTH, SPRITE_SCALING_COIN, SPRITE_SCALING_LASER,
    SPRITE_SCALING_PLAYER, WALK_FRAME_TICKS,
};

// ── Setup ─────────────────────────────────────────────────────────────────────

/// Slice the bundled explosion sprite sheet.
pub fn load_explosion_textures() -> Result<TextureSequence> {
    load_explosion_textures_from(Path::new(ASSET_DIR))
}

/// Slice the explosion sprite sheet found in `asset_dir`.  Done once, up
/// front, so spawning an explosion never has to touch assets.
pub fn load_explosion_textures_from(asset_dir: &Path) -> Result<TextureSequence> {
    SpriteSheet {
        path: asset_dir.join(EXPLOSION_SHEET),
        frame_width: EXPLOSION_FRAME_SIZE,
        frame_height: EXPLOSION_FRAME_SIZE,
        columns: EXPLOSION_COLUMNS,
        count: EXPLOSION_TEXTURE_COUNT,
    }
    .load()
}

/// Build a fresh session: walls, the player at the origin and
/// `COIN_COUNT` coins scattered above the player's spawn.
pub fn setup(textures: Rc<TextureSequence>, rng: &mut impl Rng) -> World {
    let mut ids = EntityIds::default();
    let walls = create_walls(&mut ids);

    let player = Player {
        id: ids.next_id(),
        body: Body::scaled(0.0, 0.0, PLAYER_IMAGE, SPRITE_SCALING_PLAYER),
        keys: HeldKeys::default(),
        can_move: true,
        walk: WalkCycle::default(),
    };

    let mut coins = SpriteList::new();
    for _ in 0..COIN_COUNT {
        let x = rng.gen_range(0..SCREEN_WIDTH as i32) as f32;
        let y = rng.gen_range(COIN_MIN_Y..SCREEN_HEIGHT as i32) as f32;
        coins.push(Coin {
            id: ids.next_id(),
            body: Body::scaled(x, y, COIN_IMAGE, SPRITE_SCALING_COIN),
        });
    }

    info!(coins = coins.len(), walls = walls.len(), "session set up");

    World {
        viewport: Viewport::centered_on(player.body.center_x, player.body.center_y),
        ids,
        player,
        coins,
        bullets: SpriteList::new(),
        explosions: SpriteList::new(),
        walls,
        explosion_textures: textures,
        score: 0,
        sounds: Vec::new(),
        frame: 0,
    }
}

// ── Player actions ────────────────────────────────────────────────────────────

/// Fire one bullet straight up from the top centre of the player.
pub fn shoot(world: &mut World) -> EntityId {
    world.sounds.push(SoundCue::Gun);

    let mut body = Body::scaled(
        world.player.body.center_x,
        world.player.body.center_y,
        LASER_IMAGE,
        SPRITE_SCALING_LASER,
    );
    // The image points right; turn it to face up.
    body.angle = 90.0;
    body.change_y = BULLET_SPEED;
    body.set_bottom(world.player.body.top());

    let id = world.ids.next_id();
    debug!(bullet = id, x = body.center_x, y = body.center_y, "shot fired");
    world.bullets.push(Bullet { id, body });
    id
}

/// Place an explosion at `(x, y)`, already advanced one frame.
pub fn spawn_explosion(world: &mut World, x: f32, y: f32) -> EntityId {
    let id = world.ids.next_id();
    let mut explosion = Explosion::new(id, x, y, Rc::clone(&world.explosion_textures));
    // Advanced once before it is ever drawn, so the first visible frame is 1.
    explosion.update();
    world.explosions.push(explosion);
    debug!(explosion = id, x, y, "explosion spawned");
    id
}

// ── Per-tick steps ────────────────────────────────────────────────────────────

/// Walk-cycle bookkeeping: idle frame when still, alternating walk
/// frames every `WALK_FRAME_TICKS` ticks when moving.
pub fn update_player_animation(player: &mut Player) {
    let walk = &mut player.walk;
    if player.body.change_x < 0.0 {
        walk.facing = Facing::Left;
    } else if player.body.change_x > 0.0 {
        walk.facing = Facing::Right;
    }

    if !player.body.is_moving() {
        walk.frame = 0;
        walk.ticks = 0;
        return;
    }

    walk.ticks += 1;
    if walk.ticks >= WALK_FRAME_TICKS {
        walk.ticks = 0;
        walk.frame = if walk.frame == 1 { 2 } else { 1 };
    }
}

/// Advance every explosion one frame and drop the finished ones.
pub fn update_explosions(world: &mut World) {
    let expired: Vec<EntityId> = world
        .explosions
        .iter_mut()
        .filter_map(|e| (e.update() == ExplosionState::Removed).then_some(e.id))
        .collect();
    for id in expired {
        world.explosions.remove(id);
    }
}

/// Bullet-vs-coin collisions.  Returns how many coins were destroyed.
///
/// A bullet touching any coins spawns a single explosion on the first coin
/// it touches and disappears; every coin it touches is destroyed and
/// scores a point.
pub fn resolve_hits(world: &mut World) -> u32 {
    let mut destroyed = 0;

    for bullet_id in world.bullets.ids() {
        let Some(bounds) = world.bullets.get(bullet_id).map(Sprite::bounds) else {
            continue;
        };
        let hit_list = world.coins.overlapping(&bounds);
        let Some(&first) = hit_list.first() else {
            continue;
        };

        if let Some(coin) = world.coins.get(first) {
            let (x, y) = (coin.body.center_x, coin.body.center_y);
            spawn_explosion(world, x, y);
        }
        world.bullets.remove(bullet_id);

        for coin_id in &hit_list {
            if world.coins.remove(*coin_id).is_some() {
                world.score += 1;
                destroyed += 1;
                world.sounds.push(SoundCue::Hit);
            }
        }
        info!(
            bullet = bullet_id,
            coins = hit_list.len(),
            score = world.score,
            "coin hit"
        );
    }

    destroyed
}

/// Drop bullets whose bottom edge has passed the top of the screen.
pub fn remove_offscreen_bullets(world: &mut World) {
    let gone: Vec<EntityId> = world
        .bullets
        .iter()
        .filter(|b| b.body.bottom() > SCREEN_HEIGHT)
        .map(|b| b.id)
        .collect();
    for id in gone {
        world.bullets.remove(id);
    }
}

/// Advance the simulation one tick.  The order of the steps matters:
/// explosions spawned by this tick's hits are not advanced until the next
/// tick, and a bullet that leaves the screen still gets one last chance to
/// hit something.
pub fn tick(world: &mut World, delta_time: f32) {
    world.frame += 1;

    // 1. Player movement against the walls.
    if !world.player.can_move {
        world.player.body.change_x = 0.0;
        world.player.body.change_y = 0.0;
    }
    move_and_slide(&mut world.player.body, &world.walls);

    // 2. Player animation.
    update_player_animation(&mut world.player);

    // 3. Bullets.
    for bullet in world.bullets.iter_mut() {
        bullet.body.advance();
    }

    // 4. Explosions.
    update_explosions(world);

    // 5. Camera follows the player.
    world.viewport = Viewport::centered_on(world.player.body.center_x, world.player.body.center_y);

    // 6. Collisions and scoring.
    resolve_hits(world);

    // 7. Off-screen bullets.
    remove_offscreen_bullets(world);

    trace!(
        frame = world.frame,
        delta_time,
        bullets = world.bullets.len(),
        explosions = world.explosions.len(),
        "tick"
    );
}

/// Hand the queued sound cues to the host.
pub fn drain_sounds(world: &mut World) -> Vec<SoundCue> {
    std::mem::take(&mut world.sounds)
}
