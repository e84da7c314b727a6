use game_core::{Arena, Config, Controller, GameRng, Rgb, Rules, Side};
use tracing::{debug, info};
use winit::keyboard::KeyCode;

use super::Rally;
use crate::draw::DrawList;
use crate::hud::Hud;
use crate::input::paddle_direction;
use crate::stack::{Context, Screen, Transition};
use crate::text::TextMeasure;

/// Player (left) against the CPU (right)
pub struct GameScreen {
    rally: Rally,
    hud: Hud,
    clear_color: Rgb,
}

impl GameScreen {
    /// A fresh match; scores start at zero
    pub fn new(arena: Arena, config: Config, rng: GameRng, measure: &dyn TextMeasure) -> Self {
        let palette = config.palette;
        let speed = config.paddle_speed;
        let mut rally = Rally::new(arena, config, Rules::default(), rng);
        rally.add_paddle(Side::Left, Controller::Keyboard, speed, palette.entity);
        rally.add_paddle(Side::Right, Controller::TrackBall, speed, palette.entity);
        rally.add_ball(palette.entity);
        info!("new match");

        Self {
            rally,
            hud: Hud::new(&palette, arena, measure),
            clear_color: palette.background,
        }
    }

    pub fn rally(&self) -> &Rally {
        &self.rally
    }
}

impl Screen for GameScreen {
    fn name(&self) -> &'static str {
        "game"
    }

    fn update(&mut self, ctx: &Context) -> Transition {
        if ctx.input.key_released(KeyCode::Escape) {
            return Transition::Pop;
        }

        self.rally.push_input(Side::Left, paddle_direction(ctx.input));
        self.rally.advance(ctx.frame_time);

        if self.rally.events.scored() {
            let score = self.rally.score;
            debug!(left = score.left, right = score.right, "score changed");
            self.hud.set_scores(&score, self.rally.arena, ctx.measure);
        }
        Transition::None
    }

    /// The ball goes over the HUD so the center line never hides it
    fn draw(&self, list: &mut DrawList) {
        self.rally.draw_paddles(list);
        self.hud.draw(list);
        self.rally.draw_ball(list);
    }

    fn on_resize(&mut self, arena: Arena, measure: &dyn TextMeasure) {
        self.rally.resize(arena);
        self.hud.layout(arena, measure);
    }

    fn clear_color(&self) -> Rgb {
        self.clear_color
    }
}
