/// Sprite-sheet slicing.
///
/// A sheet image is cut into equal-size frames laid out row by row.  The
/// terminal frontend cannot draw bitmaps, so each frame is reduced to a
/// glyph and a "heat" taken from its mean pixel brightness (1.0 for the
/// brightest frame of the sheet).

use std::path::PathBuf;

use anyhow::{ensure, Context, Result};
use image::RgbImage;
use tracing::info;

/// Glyph ramp from a fresh blast to dying embers.
const EXPLOSION_RAMP: &[char] = &['@', '#', '%', '*', '+', '=', '-', ':', '.'];

/// Source rectangle of one frame within its sheet, in sheet pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SheetRect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Frame {
    pub index: usize,
    pub source: SheetRect,
    pub glyph: char,
    pub heat: f32,
}

/// An ordered, immutable sequence of frames.
#[derive(Clone, Debug, PartialEq)]
pub struct TextureSequence {
    frames: Vec<Frame>,
}

impl TextureSequence {
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Frame> {
        self.frames.get(index)
    }

    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }
}

#[derive(Clone, Debug)]
pub struct SpriteSheet {
    pub path: PathBuf,
    pub frame_width: u32,
    pub frame_height: u32,
    pub columns: u32,
    pub count: usize,
}

impl SpriteSheet {
    /// Decode the sheet and cut it into `count` frames.  A missing or
    /// undecodable file, or geometry the image cannot hold, is an error.
    pub fn load(&self) -> Result<TextureSequence> {
        ensure!(
            self.frame_width > 0 && self.frame_height > 0,
            "sprite sheet {}: frame size {}x{} is empty",
            self.path.display(),
            self.frame_width,
            self.frame_height
        );
        ensure!(self.columns > 0, "sprite sheet {}: zero columns", self.path.display());
        ensure!(self.count > 0, "sprite sheet {}: zero frames", self.path.display());

        let image = image::open(&self.path)
            .with_context(|| format!("opening sprite sheet {}", self.path.display()))?
            .to_rgb8();

        let rows = (self.count as u32).div_ceil(self.columns);
        let (need_w, need_h) = (self.columns * self.frame_width, rows * self.frame_height);
        ensure!(
            image.width() >= need_w && image.height() >= need_h,
            "sprite sheet {}: {}x{} image is smaller than {}x{} frames of {}x{}",
            self.path.display(),
            image.width(),
            image.height(),
            self.columns,
            rows,
            self.frame_width,
            self.frame_height
        );

        let sources: Vec<SheetRect> = (0..self.count as u32)
            .map(|index| SheetRect {
                x: (index % self.columns) * self.frame_width,
                y: (index / self.columns) * self.frame_height,
                width: self.frame_width,
                height: self.frame_height,
            })
            .collect();
        let brightness: Vec<f64> = sources.iter().map(|r| mean_luma(&image, r)).collect();
        let brightest = brightness.iter().copied().fold(0.0, f64::max);

        let frames = sources
            .into_iter()
            .zip(brightness)
            .enumerate()
            .map(|(index, (source, luma))| {
                let heat = if brightest > 0.0 { (luma / brightest) as f32 } else { 0.0 };
                Frame {
                    index,
                    source,
                    glyph: glyph_for(heat),
                    heat,
                }
            })
            .collect();

        info!(sheet = %self.path.display(), frames = self.count, "sprite sheet loaded");
        Ok(TextureSequence { frames })
    }
}

/// Mean perceived brightness of a region, 0..=255.
fn mean_luma(image: &RgbImage, rect: &SheetRect) -> f64 {
    let mut total = 0.0;
    for y in rect.y..rect.y + rect.height {
        for x in rect.x..rect.x + rect.width {
            let [r, g, b] = image.get_pixel(x, y).0;
            total += 0.299 * r as f64 + 0.587 * g as f64 + 0.114 * b as f64;
        }
    }
    total / (rect.width as f64 * rect.height as f64)
}

fn glyph_for(heat: f32) -> char {
    let ramp = ((1.0 - heat.clamp(0.0, 1.0)) * EXPLOSION_RAMP.len() as f32) as usize;
    EXPLOSION_RAMP[ramp.min(EXPLOSION_RAMP.len() - 1)]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn glyph_ramp_runs_hot_to_cold() {
        assert_eq!(glyph_for(1.0), '@');
        assert_eq!(glyph_for(0.0), '.');
        assert_eq!(glyph_for(-3.0), '.');
    }

    #[test]
    fn mean_luma_of_a_region() {
        let mut image = RgbImage::new(4, 2);
        image.put_pixel(2, 0, image::Rgb([255, 255, 255]));
        let left = SheetRect { x: 0, y: 0, width: 2, height: 2 };
        let right = SheetRect { x: 2, y: 0, width: 2, height: 2 };
        assert_eq!(mean_luma(&image, &left), 0.0);
        assert!((mean_luma(&image, &right) - 255.0 / 4.0).abs() < 1e-6);
    }
}
