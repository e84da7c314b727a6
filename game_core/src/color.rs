//! 8-bit RGBA colors and the game palette

use serde::Deserialize;

/// RGBA color with 8 bits per channel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    #[serde(default = "opaque")]
    pub a: u8,
}

fn opaque() -> u8 {
    u8::MAX
}

impl Rgb {
    pub const WHITE: Rgb = Rgb::rgb(255, 255, 255);
    pub const BLACK: Rgb = Rgb::rgb(0, 0, 0);
    pub const TRANSPARENT: Rgb = Rgb::rgba(0, 0, 0, 0);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: u8::MAX }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Accepts `0xRRGGBB` (opaque) or `0xRRGGBBAA`
    pub const fn from_hex(hex: u32) -> Self {
        let hex = if hex <= 0x00FF_FFFF {
            (hex << 8) | 0xFF
        } else {
            hex
        };
        Self {
            r: (hex >> 24) as u8,
            g: (hex >> 16) as u8,
            b: (hex >> 8) as u8,
            a: hex as u8,
        }
    }

    /// Invert the color channels, alpha is kept
    pub fn inverted(self) -> Self {
        Self {
            r: 255 - self.r,
            g: 255 - self.g,
            b: 255 - self.b,
            a: self.a,
        }
    }

    pub fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    /// Linear blend towards `other`; `strength` is clamped to [0, 1]
    pub fn interpolated(self, other: Rgb, strength: f32) -> Self {
        let t = strength.clamp(0.0, 1.0);
        let mix = |a: u8, b: u8| (a as f32 * (1.0 - t) + b as f32 * t) as u8;
        Self {
            r: mix(self.r, other.r),
            g: mix(self.g, other.g),
            b: mix(self.b, other.b),
            a: mix(self.a, other.a),
        }
    }

    /// Sample a multi-stop gradient at `strength` in [0, 1]
    pub fn interpolation(stops: &[Rgb], strength: f32) -> Rgb {
        match stops {
            [] => Rgb::TRANSPARENT,
            [only] => *only,
            _ => {
                let t = strength.clamp(0.0, 1.0);
                if t >= 1.0 {
                    return stops[stops.len() - 1];
                }
                let scaled = t * (stops.len() - 1) as f32;
                let index = scaled as usize;
                stops[index].interpolated(stops[index + 1], scaled - index as f32)
            }
        }
    }

    /// Normalized channels for the GPU
    pub fn to_f32(self) -> [f32; 4] {
        [
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
            self.a as f32 / 255.0,
        ]
    }
}

impl Default for Rgb {
    fn default() -> Self {
        Self::WHITE
    }
}

/// Colors used by the entities, HUD and menu
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Palette {
    pub entity: Rgb,
    pub background: Rgb,
    pub center_line: Rgb,
    pub menu_entity: Rgb,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            entity: Rgb::rgb(220, 220, 220),
            background: Rgb::rgb(40, 40, 40),
            center_line: Rgb::rgb(50, 50, 50),
            menu_entity: Rgb::rgb(100, 100, 100),
        }
    }
}
