use game_core::{Arena, Config, Controller, GameRng, Rgb, Rules, Side};
use rand::Rng;
use tracing::debug;

use super::{GameScreen, Rally};
use crate::button::Button;
use crate::draw::DrawList;
use crate::stack::{Context, Screen, Transition};
use crate::text::TextMeasure;

const PLAY_Y: f32 = 200.0;
const EXIT_Y: f32 = 400.0;

/// Title screen: PLAY / EXIT over a CPU-vs-CPU demo rally
pub struct MenuScreen {
    play: Button,
    exit: Button,
    demo: Rally,
    config: Config,
    rng: GameRng,
}

impl MenuScreen {
    pub fn new(arena: Arena, config: Config, mut rng: GameRng, measure: &dyn TextMeasure) -> Self {
        let palette = config.palette;
        let demo_rng = GameRng::new(rng.0.gen());
        let mut demo = Rally::new(arena, config.clone(), Rules { scoring: false }, demo_rng);

        for side in [Side::Left, Side::Right] {
            let speed = rng.range(config.menu_paddle_speed_min, config.menu_paddle_speed_max);
            debug!(?side, speed, "demo paddle");
            demo.add_paddle(side, Controller::TrackBall, speed, palette.menu_entity);
        }
        demo.add_ball(palette.menu_entity);

        Self {
            play: Button::new("PLAY", PLAY_Y, &palette, arena, measure),
            exit: Button::new("EXIT", EXIT_Y, &palette, arena, measure),
            demo,
            config,
            rng,
        }
    }

    pub fn demo(&self) -> &Rally {
        &self.demo
    }
}

impl Screen for MenuScreen {
    fn name(&self) -> &'static str {
        "menu"
    }

    fn update(&mut self, ctx: &Context) -> Transition {
        self.play.update(ctx.input);
        self.exit.update(ctx.input);

        self.demo.advance(ctx.frame_time);

        if self.exit.clicked() {
            return Transition::Pop;
        }
        if self.play.clicked() {
            let rng = GameRng::new(self.rng.0.gen());
            let game = GameScreen::new(ctx.arena, self.config.clone(), rng, ctx.measure);
            return Transition::Push(Box::new(game));
        }
        Transition::None
    }

    fn draw(&self, list: &mut DrawList) {
        self.demo.draw(list);
        self.play.draw(list);
        self.exit.draw(list);
    }

    fn on_resize(&mut self, arena: Arena, measure: &dyn TextMeasure) {
        self.demo.resize(arena);
        self.play.layout(arena, measure);
        self.exit.layout(arena, measure);
    }

    fn clear_color(&self) -> Rgb {
        Rgb::BLACK
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::InputState;
    use crate::text::FixedMeasure;
    use glam::Vec2;
    use winit::event::MouseButton;

    fn menu() -> MenuScreen {
        MenuScreen::new(Arena::default(), Config::new(), GameRng::new(8), &FixedMeasure)
    }

    fn click_at(pos: Vec2) -> InputState {
        let mut input = InputState::new();
        input.move_mouse(pos);
        input.press_mouse(MouseButton::Left);
        input
    }

    fn context(input: &InputState) -> Context<'_> {
        Context {
            input,
            frame_time: 1.0 / 60.0,
            arena: Arena::default(),
            measure: &FixedMeasure,
        }
    }

    #[test]
    fn test_play_pushes_game() {
        let mut menu = menu();
        let input = click_at(Vec2::new(640.0, 250.0));
        match menu.update(&context(&input)) {
            Transition::Push(screen) => assert_eq!(screen.name(), "game"),
            _ => panic!("PLAY should push the game screen"),
        }
    }

    #[test]
    fn test_exit_pops_menu() {
        let mut menu = menu();
        let input = click_at(Vec2::new(640.0, 450.0));
        assert!(matches!(menu.update(&context(&input)), Transition::Pop));
    }

    #[test]
    fn test_click_outside_buttons_does_nothing() {
        let mut menu = menu();
        let input = click_at(Vec2::new(50.0, 650.0));
        assert!(matches!(menu.update(&context(&input)), Transition::None));
    }

    #[test]
    fn test_demo_uses_menu_colors_and_random_speeds() {
        let menu = menu();
        let config = Config::new();
        for side in [Side::Left, Side::Right] {
            let paddle = menu.demo().paddle(side).unwrap();
            assert_eq!(paddle.color, config.palette.menu_entity);
            assert!((100.0..=400.0).contains(&paddle.speed));
        }
        assert!(!menu.demo().rules.scoring);
    }

    #[test]
    fn test_demo_never_scores() {
        let mut menu = menu();
        let input = InputState::new();
        for _ in 0..1200 {
            menu.update(&context(&input));
        }
        assert_eq!(menu.demo().score, game_core::Score::new());
    }

    #[test]
    fn test_draws_demo_then_buttons() {
        let menu = menu();
        let mut list = DrawList::default();
        menu.draw(&mut list);
        // 3 demo shapes, then 2 x (outline, fill, label)
        assert_eq!(list.len(), 9);
        assert_eq!(menu.clear_color(), Rgb::BLACK);
    }
}
