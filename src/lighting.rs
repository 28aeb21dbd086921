/// Soft radial light that follows the player.

use crate::tuning::{LIGHT_AMBIENT, LIGHT_RADIUS};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LightLayer {
    pub x: f32,
    pub y: f32,
    pub radius: f32,
    /// Brightness floor outside the light.
    pub ambient: f32,
}

impl Default for LightLayer {
    fn default() -> Self {
        LightLayer::new(LIGHT_RADIUS, LIGHT_AMBIENT)
    }
}

impl LightLayer {
    pub fn new(radius: f32, ambient: f32) -> Self {
        LightLayer {
            x: 0.0,
            y: 0.0,
            radius,
            ambient: ambient.clamp(0.0, 1.0),
        }
    }

    /// Re-centre the light.
    pub fn follow(&mut self, x: f32, y: f32) {
        self.x = x;
        self.y = y;
    }

    /// Brightness in `[ambient, 1]` at a world point, quadratic falloff.
    pub fn brightness(&self, x: f32, y: f32) -> f32 {
        if self.radius <= 0.0 {
            return self.ambient;
        }
        let d = ((x - self.x).powi(2) + (y - self.y).powi(2)).sqrt();
        let falloff = (1.0 - d / self.radius).max(0.0).powi(2);
        (self.ambient + (1.0 - self.ambient) * falloff).clamp(self.ambient, 1.0)
    }

    /// Scale an RGB colour by the brightness at `(x, y)`.
    pub fn shade(&self, rgb: (u8, u8, u8), x: f32, y: f32) -> (u8, u8, u8) {
        let k = self.brightness(x, y);
        let scale = |c: u8| (c as f32 * k).round() as u8;
        (scale(rgb.0), scale(rgb.1), scale(rgb.2))
    }
}
