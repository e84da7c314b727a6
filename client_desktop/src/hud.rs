use game_core::{Arena, Palette, Rgb, Score, Side};
use glam::Vec2;

use crate::draw::DrawList;
use crate::text::TextMeasure;

pub const SCORE_TEXT_SIZE: f32 = 28.0;
const SCORE_INSET: Vec2 = Vec2::new(120.0, 30.0);
const CENTER_LINE_WIDTH: f32 = 10.0;

#[derive(Debug, Clone)]
struct Label {
    text: String,
    pos: Vec2,
}

/// Score labels and the center divider.
///
/// The right label is right-aligned so its distance to the right edge
/// matches the left label's distance to the left edge.
#[derive(Debug, Clone)]
pub struct Hud {
    left: Label,
    right: Label,
    line_pos: Vec2,
    line_size: Vec2,
    text_color: Rgb,
    line_color: Rgb,
}

impl Hud {
    pub fn new(palette: &Palette, arena: Arena, measure: &dyn TextMeasure) -> Self {
        let mut hud = Self {
            left: Label {
                text: "0".to_string(),
                pos: SCORE_INSET,
            },
            right: Label {
                text: "0".to_string(),
                pos: SCORE_INSET,
            },
            line_pos: Vec2::ZERO,
            line_size: Vec2::ZERO,
            text_color: palette.entity,
            line_color: palette.center_line,
        };
        hud.layout(arena, measure);
        hud
    }

    /// Refresh the labels; re-layout only when a score changed
    pub fn set_scores(&mut self, score: &Score, arena: Arena, measure: &dyn TextMeasure) -> bool {
        let left = score.get(Side::Left).to_string();
        let right = score.get(Side::Right).to_string();
        if left == self.left.text && right == self.right.text {
            return false;
        }
        self.left.text = left;
        self.right.text = right;
        self.layout(arena, measure);
        true
    }

    pub fn layout(&mut self, arena: Arena, measure: &dyn TextMeasure) {
        let width = measure.measure(&self.right.text, SCORE_TEXT_SIZE).x;
        self.right.pos = Vec2::new(arena.width - self.left.pos.x - width, SCORE_INSET.y);

        self.line_size = Vec2::new(CENTER_LINE_WIDTH, arena.height);
        self.line_pos = Vec2::new((arena.width - CENTER_LINE_WIDTH) / 2.0, 0.0);
    }

    pub fn draw(&self, list: &mut DrawList) {
        list.text(&self.left.text, self.left.pos, SCORE_TEXT_SIZE, self.text_color);
        list.text(&self.right.text, self.right.pos, SCORE_TEXT_SIZE, self.text_color);
        list.rect(self.line_pos, self.line_size, self.line_color);
    }

    pub fn right_label_pos(&self) -> Vec2 {
        self.right.pos
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::Primitive;
    use crate::text::FixedMeasure;

    #[test]
    fn test_right_label_mirrors_left_margin() {
        let hud = Hud::new(&Palette::default(), Arena::default(), &FixedMeasure);
        // "0" at size 28 is 14 px wide
        assert_eq!(hud.right_label_pos(), Vec2::new(1280.0 - 120.0 - 14.0, 30.0));
    }

    #[test]
    fn test_wider_score_moves_right_label_left() {
        let arena = Arena::default();
        let mut hud = Hud::new(&Palette::default(), arena, &FixedMeasure);

        let score = Score { left: 0, right: 10 };
        assert!(hud.set_scores(&score, arena, &FixedMeasure));
        assert_eq!(hud.right_label_pos().x, 1280.0 - 120.0 - 28.0);
        assert!(!hud.set_scores(&score, arena, &FixedMeasure), "Unchanged score");
    }

    #[test]
    fn test_draw_and_center_line_follow_resize() {
        let palette = Palette::default();
        let mut hud = Hud::new(&palette, Arena::default(), &FixedMeasure);
        hud.layout(Arena::new(800.0, 600.0), &FixedMeasure);

        let mut list = DrawList::default();
        hud.draw(&mut list);

        assert_eq!(list.len(), 3);
        assert_eq!(
            list.items()[0],
            Primitive::Text {
                text: "0".to_string(),
                pos: Vec2::new(120.0, 30.0),
                size: 28.0,
                color: palette.entity,
            }
        );
        assert_eq!(
            list.items()[2],
            Primitive::Rect {
                pos: Vec2::new(395.0, 0.0),
                size: Vec2::new(10.0, 600.0),
                color: palette.center_line,
            }
        );
        assert_eq!(hud.right_label_pos().x, 800.0 - 120.0 - 14.0);
    }
}
