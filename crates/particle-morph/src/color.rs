//! Particle colors and the band palette

use particle_geometry::easing::{lerp_f32, smoothstep};

/// Linear RGB color with values in [0, 1]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color {
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Convert an opaque sRGB color (0-255) to linear space
    #[inline]
    pub const fn from_srgb(r: u8, g: u8, b: u8) -> Self {
        const fn srgb_to_linear(c: u8) -> f32 {
            let x = c as f32 / 255.0;
            if x <= 0.04045 {
                x / 12.92
            } else {
                // Approximate ((x + 0.055) / 1.055)^2.4
                let t = (x + 0.055) / 1.055;
                t * t * (0.5870 * t + 0.4130)
            }
        }

        Self::rgb(srgb_to_linear(r), srgb_to_linear(g), srgb_to_linear(b))
    }

    pub fn lerp(self, other: Color, t: f32) -> Color {
        Color {
            r: lerp_f32(self.r, other.r, t),
            g: lerp_f32(self.g, other.g, t),
            b: lerp_f32(self.b, other.b, t),
        }
    }

    pub fn clamped(self) -> Color {
        Color::rgb(
            self.r.clamp(0.0, 1.0),
            self.g.clamp(0.0, 1.0),
            self.b.clamp(0.0, 1.0),
        )
    }

    pub fn to_array(self) -> [f32; 3] {
        [self.r, self.g, self.b]
    }
}

/// Band palette (Catppuccin Mocha accents)
pub mod palette {
    use super::Color;

    pub const HEX: Color = Color::from_srgb(249, 226, 175);
    pub const FLOWER: Color = Color::from_srgb(245, 194, 231);
    pub const INTERLOCKING: Color = Color::from_srgb(137, 220, 235);
    pub const SACRED: Color = Color::from_srgb(203, 166, 247);
    pub const SPIRAL: Color = Color::from_srgb(148, 226, 213);
    pub const ORBS: Color = Color::from_srgb(250, 179, 135);

    /// Default base particle color (Lavender)
    pub const BASE: Color = Color::from_srgb(180, 190, 254);

    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);

    /// Indexed by band tag
    pub const BANDS: [Color; 6] = [HEX, FLOWER, INTERLOCKING, SACRED, SPIRAL, ORBS];
}

/// Radial glow weight for a fragment at `distance` from the point center
///
/// `distance` is in point-radius units (0 center, 1 rim). Returns 1 at the
/// center falling to 0 at the rim.
///
/// This is the renderer's per-fragment term: the point-sprite fragment stage
/// multiplies a vertex's color and alpha by it across the sprite. It varies
/// within a point rather than per particle, so `ParticleVertex` carries no
/// glow field.
pub fn glow_falloff(distance: f32) -> f32 {
    let d = distance.clamp(0.0, 1.0);
    let core = 1.0 - smoothstep(0.0, 1.0, d);
    core * core.sqrt()
}

/// White flash weight while crossing the transition (peaks at magic = 0.5)
pub fn transition_flash(magic: f32) -> f32 {
    (std::f32::consts::PI * magic.clamp(0.0, 1.0)).sin().max(0.0).powi(4)
}
