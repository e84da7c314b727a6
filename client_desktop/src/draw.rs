//! Backend-agnostic list of shapes and text for one frame

use game_core::Rgb;
use glam::Vec2;

/// One thing to draw, in pixels with a top-left origin
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    Rect {
        pos: Vec2,
        size: Vec2,
        color: Rgb,
    },
    Circle {
        center: Vec2,
        radius: f32,
        color: Rgb,
    },
    /// `pos` is the top-left of the text's glyph bounds
    Text {
        text: String,
        pos: Vec2,
        size: f32,
        color: Rgb,
    },
}

/// Primitives in painter's order plus the frame's clear color
#[derive(Debug, Clone, Default)]
pub struct DrawList {
    clear_color: Rgb,
    items: Vec<Primitive>,
}

impl DrawList {
    pub fn new(clear_color: Rgb) -> Self {
        Self {
            clear_color,
            items: Vec::new(),
        }
    }

    pub fn clear_color(&self) -> Rgb {
        self.clear_color
    }

    pub fn rect(&mut self, pos: Vec2, size: Vec2, color: Rgb) {
        self.items.push(Primitive::Rect { pos, size, color });
    }

    /// Filled rect with an outline of `thickness` growing outwards
    pub fn outlined_rect(&mut self, pos: Vec2, size: Vec2, fill: Rgb, outline: Rgb, thickness: f32) {
        if thickness > 0.0 {
            let t = Vec2::splat(thickness);
            self.rect(pos - t, size + t * 2.0, outline);
        }
        self.rect(pos, size, fill);
    }

    pub fn circle(&mut self, center: Vec2, radius: f32, color: Rgb) {
        self.items.push(Primitive::Circle {
            center,
            radius,
            color,
        });
    }

    pub fn text(&mut self, text: impl Into<String>, pos: Vec2, size: f32, color: Rgb) {
        self.items.push(Primitive::Text {
            text: text.into(),
            pos,
            size,
            color,
        });
    }

    pub fn items(&self) -> &[Primitive] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outline_grows_outwards() {
        let mut list = DrawList::new(Rgb::BLACK);
        list.outlined_rect(
            Vec2::new(440.0, 200.0),
            Vec2::new(400.0, 100.0),
            Rgb::BLACK,
            Rgb::WHITE,
            5.0,
        );

        assert_eq!(
            list.items(),
            &[
                Primitive::Rect {
                    pos: Vec2::new(435.0, 195.0),
                    size: Vec2::new(410.0, 110.0),
                    color: Rgb::WHITE,
                },
                Primitive::Rect {
                    pos: Vec2::new(440.0, 200.0),
                    size: Vec2::new(400.0, 100.0),
                    color: Rgb::BLACK,
                },
            ]
        );
    }

    #[test]
    fn test_zero_outline_is_a_single_rect() {
        let mut list = DrawList::new(Rgb::BLACK);
        list.outlined_rect(Vec2::ZERO, Vec2::ONE, Rgb::BLACK, Rgb::WHITE, 0.0);
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_items_keep_painter_order() {
        let mut list = DrawList::new(Rgb::rgb(40, 40, 40));
        assert!(list.is_empty());
        list.circle(Vec2::new(5.0, 5.0), 2.0, Rgb::WHITE);
        list.text("0", Vec2::new(120.0, 30.0), 28.0, Rgb::WHITE);

        assert_eq!(list.clear_color(), Rgb::rgb(40, 40, 40));
        assert!(matches!(list.items()[0], Primitive::Circle { .. }));
        assert!(matches!(&list.items()[1], Primitive::Text { text, .. } if text == "0"));
    }
}
