use game_core::{Arena, Palette, Rgb};
use glam::Vec2;

use crate::draw::DrawList;
use crate::input::InputState;
use crate::text::TextMeasure;

pub const BUTTON_SIZE: Vec2 = Vec2::new(400.0, 100.0);
pub const BUTTON_OUTLINE: f32 = 5.0;
pub const BUTTON_TEXT_SIZE: f32 = 40.0;

/// Clickable menu button, horizontally centered at a fixed `y`
#[derive(Debug, Clone)]
pub struct Button {
    label: String,
    y: f32,
    pos: Vec2,
    text_pos: Vec2,
    text_color: Rgb,
    fill: Rgb,
    hovering: bool,
    clicked: bool,
}

impl Button {
    pub fn new(
        label: impl Into<String>,
        y: f32,
        palette: &Palette,
        arena: Arena,
        measure: &dyn TextMeasure,
    ) -> Self {
        let mut button = Self {
            label: label.into(),
            y,
            pos: Vec2::ZERO,
            text_pos: Vec2::ZERO,
            text_color: palette.entity,
            fill: palette.background,
            hovering: false,
            clicked: false,
        };
        button.layout(arena, measure);
        button
    }

    /// Center the box on the arena and the label on the box
    pub fn layout(&mut self, arena: Arena, measure: &dyn TextMeasure) {
        self.pos = Vec2::new((arena.width - BUTTON_SIZE.x) / 2.0, self.y);
        let center = self.pos + BUTTON_SIZE / 2.0;
        let text = measure.measure(&self.label, BUTTON_TEXT_SIZE);
        self.text_pos = center - text / 2.0;
    }

    pub fn update(&mut self, input: &InputState) {
        let mouse = input.mouse_position();
        let max = self.pos + BUTTON_SIZE;
        self.hovering =
            mouse.x > self.pos.x && mouse.x < max.x && mouse.y > self.pos.y && mouse.y < max.y;
        self.clicked = self.hovering && input.left_mouse_clicked();
    }

    pub fn hovering(&self) -> bool {
        self.hovering
    }

    pub fn clicked(&self) -> bool {
        self.clicked
    }

    pub fn pos(&self) -> Vec2 {
        self.pos
    }

    pub fn draw(&self, list: &mut DrawList) {
        let (text, fill, outline) = if self.hovering {
            (
                self.text_color.inverted(),
                self.fill.inverted(),
                self.text_color.inverted(),
            )
        } else {
            (self.text_color, self.fill, self.text_color)
        };
        list.outlined_rect(self.pos, BUTTON_SIZE, fill, outline, BUTTON_OUTLINE);
        list.text(&self.label, self.text_pos, BUTTON_TEXT_SIZE, text);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::Primitive;
    use crate::text::FixedMeasure;
    use winit::event::MouseButton;

    fn play_button() -> Button {
        Button::new("PLAY", 200.0, &Palette::default(), Arena::default(), &FixedMeasure)
    }

    #[test]
    fn test_button_is_centered() {
        let button = play_button();
        assert_eq!(button.pos(), Vec2::new(440.0, 200.0));

        let mut list = DrawList::default();
        button.draw(&mut list);
        // "PLAY" at size 40 measures 80 x 40
        assert!(matches!(
            &list.items()[2],
            Primitive::Text { pos, .. } if *pos == Vec2::new(600.0, 230.0)
        ));
    }

    #[test]
    fn test_hover_is_strictly_inside() {
        let mut button = play_button();
        let mut input = InputState::new();

        input.move_mouse(Vec2::new(440.0, 250.0));
        button.update(&input);
        assert!(!button.hovering(), "Edge does not count");

        input.move_mouse(Vec2::new(441.0, 250.0));
        button.update(&input);
        assert!(button.hovering());
        assert!(!button.clicked());
    }

    #[test]
    fn test_click_needs_hover() {
        let mut button = play_button();
        let mut input = InputState::new();
        input.press_mouse(MouseButton::Left);

        input.move_mouse(Vec2::new(10.0, 10.0));
        button.update(&input);
        assert!(!button.clicked());

        input.move_mouse(Vec2::new(640.0, 250.0));
        button.update(&input);
        assert!(button.clicked());

        input.begin_frame();
        button.update(&input);
        assert!(!button.clicked(), "Holding the button is not a new click");
    }

    #[test]
    fn test_hover_inverts_colors() {
        let palette = Palette::default();
        let mut button = play_button();
        let mut input = InputState::new();
        input.move_mouse(Vec2::new(640.0, 250.0));
        button.update(&input);

        let mut list = DrawList::default();
        button.draw(&mut list);
        let colors: Vec<Rgb> = list
            .items()
            .iter()
            .map(|item| match item {
                Primitive::Rect { color, .. } | Primitive::Text { color, .. } => *color,
                Primitive::Circle { color, .. } => *color,
            })
            .collect();
        assert_eq!(
            colors,
            vec![
                palette.entity.inverted(),
                palette.background.inverted(),
                palette.entity.inverted(),
            ]
        );
    }

    #[test]
    fn test_layout_recenters_after_resize() {
        let mut button = play_button();
        button.layout(Arena::new(800.0, 600.0), &FixedMeasure);
        assert_eq!(button.pos(), Vec2::new(200.0, 200.0));
    }
}
