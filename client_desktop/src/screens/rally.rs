use game_core::{
    create_ball, create_paddle_with, step, systems::anchor_paddles, Arena, Ball, Config,
    Controller, Events, GameRng, InputQueue, Paddle, Rgb, Rules, Score, Side, Time,
};
use hecs::World;

use crate::draw::DrawList;

/// Paddles and a ball plus the resources `game_core::step` needs
pub struct Rally {
    pub world: World,
    pub time: Time,
    pub arena: Arena,
    pub config: Config,
    pub rules: Rules,
    pub score: Score,
    pub events: Events,
    pub input: InputQueue,
    pub rng: GameRng,
}

impl Rally {
    pub fn new(arena: Arena, config: Config, rules: Rules, rng: GameRng) -> Self {
        Self {
            world: World::new(),
            time: Time::new(0.0, 0.0),
            arena,
            config,
            rules,
            score: Score::new(),
            events: Events::new(),
            input: InputQueue::new(),
            rng,
        }
    }

    /// Spawn a paddle at its starting spot on `side`
    pub fn add_paddle(&mut self, side: Side, controller: Controller, speed: f32, color: Rgb) {
        create_paddle_with(
            &mut self.world,
            side,
            controller,
            &self.arena,
            &self.config,
            speed,
            color,
        );
    }

    pub fn add_ball(&mut self, color: Rgb) {
        create_ball(&mut self.world, &self.arena, &self.config, color);
    }

    /// Queue a keyboard direction for the paddle on `side`
    pub fn push_input(&mut self, side: Side, dir: i8) {
        self.input.push_input(side, dir);
    }

    /// Run the simulation for one frame
    pub fn advance(&mut self, frame_time: f32) {
        self.time.dt = frame_time;
        step(
            &mut self.world,
            &mut self.time,
            &self.arena,
            &self.config,
            &self.rules,
            &mut self.score,
            &mut self.events,
            &mut self.input,
            &mut self.rng,
        );
    }

    pub fn resize(&mut self, arena: Arena) {
        self.arena = arena;
        anchor_paddles(&mut self.world, &self.arena, &self.config);
    }

    pub fn paddle(&self, side: Side) -> Option<Paddle> {
        let mut query = self.world.query::<&Paddle>();
        query
            .iter()
            .map(|(_e, paddle)| *paddle)
            .find(|paddle| paddle.side == side)
    }

    pub fn ball(&self) -> Option<Ball> {
        let mut query = self.world.query::<&Ball>();
        query.iter().next().map(|(_e, ball)| *ball)
    }

    /// Paddles first, left to right, then the ball
    pub fn draw(&self, list: &mut DrawList) {
        self.draw_paddles(list);
        self.draw_ball(list);
    }

    pub fn draw_paddles(&self, list: &mut DrawList) {
        for side in [Side::Left, Side::Right] {
            if let Some(paddle) = self.paddle(side) {
                list.rect(paddle.pos, paddle.size, paddle.color);
            }
        }
    }

    pub fn draw_ball(&self, list: &mut DrawList) {
        if let Some(ball) = self.ball() {
            list.circle(ball.pos, ball.radius, ball.color);
        }
    }
}
