/// Rendering layer — all terminal output lives here.
///
/// A frame is composed into an in-memory canvas first (so the lighting
/// pass can shade whole cells), then written row by row.  No game logic is
/// performed; this module only translates state into terminal commands.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Colors, Print},
    QueueableCommand,
};
use sprite_explosion::camera::Projection;
use sprite_explosion::entities::{Facing, Player, Rect, Sprite, World};
use sprite_explosion::lighting::LightLayer;

type Rgb = (u8, u8, u8);

// ── Colour palette ────────────────────────────────────────────────────────────

const C_BACKGROUND: Rgb = (59, 68, 75); // arsenic
const C_COIN: Rgb = (255, 215, 0);
const C_BULLET: Rgb = (90, 170, 255);
const C_PLAYER: Rgb = (255, 255, 255);
const C_WALL: Rgb = (150, 150, 160);
const C_SCORE: Rgb = (255, 255, 255);
const C_BLAST_HOT: Rgb = (255, 250, 200);
const C_BLAST_COLD: Rgb = (120, 30, 10);

// ── Canvas ────────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, PartialEq)]
struct Cell {
    glyph: char,
    fg: Rgb,
    bg: Rgb,
}

struct Canvas {
    cols: u16,
    rows: u16,
    cells: Vec<Cell>,
}

impl Canvas {
    fn new(cols: u16, rows: u16) -> Self {
        let blank = Cell {
            glyph: ' ',
            fg: C_SCORE,
            bg: C_BACKGROUND,
        };
        Canvas {
            cols,
            rows,
            cells: vec![blank; cols as usize * rows as usize],
        }
    }

    fn cell(&self, col: u16, row: u16) -> Option<&Cell> {
        if col >= self.cols || row >= self.rows {
            return None;
        }
        self.cells.get(row as usize * self.cols as usize + col as usize)
    }

    fn cell_mut(&mut self, col: u16, row: u16) -> Option<&mut Cell> {
        if col >= self.cols || row >= self.rows {
            return None;
        }
        self.cells.get_mut(row as usize * self.cols as usize + col as usize)
    }

    fn put(&mut self, col: u16, row: u16, glyph: char, fg: Rgb) {
        if let Some(cell) = self.cell_mut(col, row) {
            cell.glyph = glyph;
            cell.fg = fg;
        }
    }

    fn text(&mut self, col: u16, row: u16, s: &str, fg: Rgb) {
        for (i, ch) in s.chars().enumerate() {
            self.put(col + i as u16, row, ch, fg);
        }
    }

    fn flush<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        let mut colors: Option<(Rgb, Rgb)> = None;
        for row in 0..self.rows {
            out.queue(cursor::MoveTo(0, row))?;
            let start = row as usize * self.cols as usize;
            for cell in &self.cells[start..start + self.cols as usize] {
                if colors != Some((cell.fg, cell.bg)) {
                    out.queue(style::SetColors(Colors::new(rgb(cell.fg), rgb(cell.bg))))?;
                    colors = Some((cell.fg, cell.bg));
                }
                out.queue(Print(cell.glyph))?;
            }
        }
        Ok(())
    }
}

fn rgb((r, g, b): Rgb) -> Color {
    Color::Rgb { r, g, b }
}

fn lerp(a: Rgb, b: Rgb, t: f32) -> Rgb {
    let mix = |x: u8, y: u8| (x as f32 + (y as f32 - x as f32) * t).round() as u8;
    (mix(a.0, b.0), mix(a.1, b.1), mix(a.2, b.2))
}

// ── Public entry point ────────────────────────────────────────────────────────

/// Render one complete frame.
pub fn render<W: Write>(
    out: &mut W,
    world: &World,
    cols: u16,
    rows: u16,
    light: Option<&LightLayer>,
) -> std::io::Result<()> {
    compose(world, cols, rows, light).flush(out)?;
    out.queue(style::ResetColor)?;
    out.flush()?;
    Ok(())
}

/// The bottom row is the HUD; the rest shows the viewport.
fn projection(world: &World, cols: u16, rows: u16) -> Projection {
    Projection::new(world.viewport, cols, rows.saturating_sub(1).max(1))
}

/// Lay out a frame without writing it.  With `light`, coins, bullets and
/// the player are lit by it; explosions, walls and the score are always
/// drawn unlit, in that order, on top.
fn compose(world: &World, cols: u16, rows: u16, light: Option<&LightLayer>) -> Canvas {
    let proj = projection(world, cols, rows);
    let mut canvas = Canvas::new(cols.max(1), rows.max(1));

    // Lit layer
    if let Some(light) = light {
        shade_background(&mut canvas, &proj, light);
    }
    for coin in world.coins.iter() {
        draw_sprite(&mut canvas, &proj, &coin.bounds(), 'o', C_COIN, light);
    }
    for bullet in world.bullets.iter() {
        let glyph = bullet_glyph(bullet.body.angle);
        draw_sprite(&mut canvas, &proj, &bullet.bounds(), glyph, C_BULLET, light);
    }
    draw_sprite(
        &mut canvas,
        &proj,
        &world.player.bounds(),
        player_glyph(&world.player),
        C_PLAYER,
        light,
    );

    // Unlit layer
    for explosion in world.explosions.iter() {
        if let Some(frame) = explosion.current_frame() {
            let color = lerp(C_BLAST_COLD, C_BLAST_HOT, frame.heat);
            draw_sprite(&mut canvas, &proj, &explosion.bounds(), frame.glyph, color, None);
        }
    }
    for wall in world.walls.iter() {
        draw_sprite(&mut canvas, &proj, &wall.bounds(), '█', C_WALL, None);
    }

    draw_hud(&mut canvas, world, rows.saturating_sub(1));
    canvas
}

// ── Layers ────────────────────────────────────────────────────────────────────

fn shade_background(canvas: &mut Canvas, proj: &Projection, light: &LightLayer) {
    for row in 0..proj.rows {
        for col in 0..proj.cols {
            let (x, y) = proj.cell_center(col, row);
            if let Some(cell) = canvas.cell_mut(col, row) {
                cell.bg = light.shade(C_BACKGROUND, x, y);
            }
        }
    }
}

fn draw_sprite(
    canvas: &mut Canvas,
    proj: &Projection,
    bounds: &Rect,
    glyph: char,
    color: Rgb,
    light: Option<&LightLayer>,
) {
    for (col, row) in proj.cells_covering(bounds) {
        let fg = match light {
            Some(light) => {
                let (x, y) = proj.cell_center(col, row);
                light.shade(color, x, y)
            }
            None => color,
        };
        canvas.put(col, row, glyph, fg);
    }
}

fn draw_hud(canvas: &mut Canvas, world: &World, row: u16) {
    canvas.text(1, row, &format!("Score: {}", world.score), C_SCORE);
}

// ── Glyphs ────────────────────────────────────────────────────────────────────

fn bullet_glyph(angle: f32) -> char {
    let a = angle.rem_euclid(180.0);
    match a {
        a if !(22.5..157.5).contains(&a) => '-',
        a if a < 67.5 => '/',
        a if a < 112.5 => '|',
        _ => '\\',
    }
}

fn player_glyph(player: &Player) -> char {
    match (player.walk.frame, player.walk.facing) {
        (0, _) => '@',
        (1, Facing::Right) => '>',
        (_, Facing::Right) => '»',
        (1, Facing::Left) => '<',
        (_, Facing::Left) => '«',
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use sprite_explosion::camera::Viewport;
    use sprite_explosion::compute::{load_explosion_textures, setup, spawn_explosion};
    use sprite_explosion::container::SpriteList;
    use sprite_explosion::entities::{Body, Coin};
    use sprite_explosion::tuning::{COIN_IMAGE, SPRITE_SCALING_COIN};

    use super::*;

    fn add_coin(world: &mut World, x: f32, y: f32) {
        let id = world.ids.next_id();
        world.coins.push(Coin {
            id,
            body: Body::scaled(x, y, COIN_IMAGE, SPRITE_SCALING_COIN),
        });
    }

    #[test]
    fn bullet_glyph_follows_rotation() {
        assert_eq!(bullet_glyph(90.0), '|');
        assert_eq!(bullet_glyph(0.0), '-');
        assert_eq!(bullet_glyph(270.0), '|');
        assert_eq!(bullet_glyph(45.0), '/');
        assert_eq!(bullet_glyph(135.0), '\\');
    }

    #[test]
    fn walls_and_explosions_are_drawn_unlit_over_lit_sprites() {
        let textures = Rc::new(load_explosion_textures().unwrap());
        let mut world = setup(textures, &mut StdRng::seed_from_u64(7));
        world.coins = SpriteList::new();
        world.player.body.center_x = 900.0;
        world.player.body.center_y = 24.0;
        world.viewport = Viewport::centered_on(900.0, 24.0);

        // One coin hidden under the right-hand wall, one in the light.
        add_coin(&mut world, 1000.0, 24.0);
        add_coin(&mut world, 900.0, 200.0);
        // Outside the light's radius.
        spawn_explosion(&mut world, 600.0, 300.0);

        let mut light = LightLayer::default();
        light.follow(900.0, 24.0);
        let canvas = compose(&world, 80, 31, Some(&light));
        let proj = projection(&world, 80, 31);

        let (col, row) = proj.to_cell(1000.0, 24.0).unwrap();
        let cell = canvas.cell(col, row).unwrap();
        assert_eq!(cell.glyph, '█');
        assert_eq!(cell.fg, C_WALL);

        let frame = world.explosions.iter().next().unwrap().current_frame().unwrap();
        let (col, row) = proj.to_cell(600.0, 300.0).unwrap();
        let cell = canvas.cell(col, row).unwrap();
        assert_eq!(cell.glyph, frame.glyph);
        assert_eq!(cell.fg, lerp(C_BLAST_COLD, C_BLAST_HOT, frame.heat));

        let (col, row) = proj.to_cell(900.0, 200.0).unwrap();
        let (x, y) = proj.cell_center(col, row);
        let cell = canvas.cell(col, row).unwrap();
        assert_eq!(cell.glyph, 'o');
        assert_eq!(cell.fg, light.shade(C_COIN, x, y));
        assert_ne!(cell.fg, C_COIN);
    }
}
