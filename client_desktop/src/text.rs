//! Font loading, text measurement and rasterization

use std::path::PathBuf;

use fontdue::layout::{CoordinateSystem, Layout, LayoutSettings, TextStyle};
use glam::Vec2;
use thiserror::Error;
use tracing::{debug, info};

use crate::settings::FontSettings;

/// Fatal problems loading the UI font
#[derive(Debug, Error)]
pub enum AssetError {
    #[error("failed to read font file {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse font {name}: {reason}")]
    Parse { name: String, reason: &'static str },
    #[error("no system font matches family {family:?}")]
    NoSystemFont { family: String },
}

/// Size of the glyph bounds a string would cover
pub trait TextMeasure {
    fn measure(&self, text: &str, size: f32) -> Vec2;
}

/// Single-channel coverage bitmap of a rendered string
#[derive(Debug, Clone, PartialEq)]
pub struct TextBitmap {
    pub width: u32,
    pub height: u32,
    pub coverage: Vec<u8>,
}

/// A parsed font used for every label in the game
pub struct GlyphFont {
    font: fontdue::Font,
}

impl GlyphFont {
    /// Load the configured font file, or look the family up among system fonts
    pub fn load(settings: &FontSettings) -> Result<Self, AssetError> {
        match &settings.path {
            Some(path) => {
                let bytes = std::fs::read(path).map_err(|source| AssetError::Io {
                    path: path.clone(),
                    source,
                })?;
                info!(path = %path.display(), "loaded font file");
                Self::from_bytes(&bytes, 0, &path.display().to_string())
            }
            None => Self::from_system(&settings.family),
        }
    }

    pub fn from_bytes(bytes: &[u8], collection_index: u32, name: &str) -> Result<Self, AssetError> {
        let settings = fontdue::FontSettings {
            collection_index,
            ..fontdue::FontSettings::default()
        };
        let font = fontdue::Font::from_bytes(bytes, settings).map_err(|reason| {
            AssetError::Parse {
                name: name.to_string(),
                reason,
            }
        })?;
        Ok(Self { font })
    }

    /// First match for `family`, falling back to any sans-serif face
    pub fn from_system(family: &str) -> Result<Self, AssetError> {
        use fontdb::{Family, Query};

        let mut db = fontdb::Database::new();
        db.load_system_fonts();
        debug!(faces = db.len(), "scanned system fonts");

        let query = Query {
            families: &[Family::Name(family), Family::SansSerif],
            ..Query::default()
        };
        let not_found = || AssetError::NoSystemFont {
            family: family.to_string(),
        };
        let id = db.query(&query).ok_or_else(not_found)?;
        let (bytes, index) = db
            .with_face_data(id, |data, index| (data.to_vec(), index))
            .ok_or_else(not_found)?;

        let name = db
            .face(id)
            .and_then(|face| face.families.first().map(|(name, _)| name.clone()))
            .unwrap_or_else(|| family.to_string());
        info!(requested = family, found = %name, "loaded system font");
        Self::from_bytes(&bytes, index, &name)
    }

    fn layout(&self, text: &str, size: f32) -> Layout {
        let mut layout = Layout::new(CoordinateSystem::PositiveYDown);
        layout.reset(&LayoutSettings::default());
        layout.append(&[&self.font], &TextStyle::new(text, size, 0));
        layout
    }

    /// Rasterize `text` cropped to its glyph bounds
    pub fn rasterize(&self, text: &str, size: f32) -> TextBitmap {
        let layout = self.layout(text, size);
        let Some((min, max)) = glyph_bounds(&layout) else {
            return TextBitmap {
                width: 0,
                height: 0,
                coverage: Vec::new(),
            };
        };

        let width = (max.x - min.x).ceil().max(1.0) as u32;
        let height = (max.y - min.y).ceil().max(1.0) as u32;
        let mut coverage = vec![0u8; (width * height) as usize];

        for glyph in layout.glyphs() {
            if glyph.width == 0 || glyph.height == 0 {
                continue;
            }
            let (metrics, bitmap) = self.font.rasterize_config(glyph.key);
            let start_x = (glyph.x - min.x).round() as i32;
            let start_y = (glyph.y - min.y).round() as i32;

            for y in 0..metrics.height as i32 {
                let dst_y = start_y + y;
                if dst_y < 0 || dst_y >= height as i32 {
                    continue;
                }
                for x in 0..metrics.width as i32 {
                    let dst_x = start_x + x;
                    if dst_x < 0 || dst_x >= width as i32 {
                        continue;
                    }
                    let src = bitmap[y as usize * metrics.width + x as usize];
                    let dst = &mut coverage[dst_y as usize * width as usize + dst_x as usize];
                    *dst = (*dst).max(src);
                }
            }
        }

        TextBitmap {
            width,
            height,
            coverage,
        }
    }
}

impl TextMeasure for GlyphFont {
    fn measure(&self, text: &str, size: f32) -> Vec2 {
        glyph_bounds(&self.layout(text, size))
            .map(|(min, max)| max - min)
            .unwrap_or(Vec2::ZERO)
    }
}

/// Bounds of the visible glyphs (whitespace excluded)
fn glyph_bounds(layout: &Layout) -> Option<(Vec2, Vec2)> {
    layout
        .glyphs()
        .iter()
        .filter(|g| g.width > 0 && g.height > 0)
        .fold(None, |bounds, g| {
            let min = Vec2::new(g.x, g.y);
            let max = min + Vec2::new(g.width as f32, g.height as f32);
            Some(match bounds {
                None => (min, max),
                Some((lo, hi)) => (lo.min(min), hi.max(max)),
            })
        })
}

/// Monospace stand-in: every char is half the font size wide and `size` tall
#[cfg(test)]
pub(crate) struct FixedMeasure;

#[cfg(test)]
impl TextMeasure for FixedMeasure {
    fn measure(&self, text: &str, size: f32) -> Vec2 {
        Vec2::new(text.chars().count() as f32 * size * 0.5, size)
    }
}
