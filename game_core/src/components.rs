use glam::Vec2;
use rand::Rng;

use crate::color::Rgb;
use crate::config::Config;
use crate::timer::Cooldown;
use crate::GameRng;

/// Which side of the arena a paddle defends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Side {
    Left,  // Player
    Right, // Opponent
}

impl Side {
    pub fn opponent(self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

/// The single axis on which the ball overlapped a paddle last frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ContactAxis {
    X,
    Y,
    #[default]
    None,
}

/// Axis-aligned bounds as (min, max) corners
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min: Vec2,
    pub max: Vec2,
}

impl Bounds {
    /// Strict overlap on the X axis
    pub fn overlaps_x(&self, other: &Bounds) -> bool {
        self.max.x > other.min.x && self.min.x < other.max.x
    }

    /// Strict overlap on the Y axis
    pub fn overlaps_y(&self, other: &Bounds) -> bool {
        self.max.y > other.min.y && self.min.y < other.max.y
    }
}

/// Paddle component - a rectangle anchored at its top-left corner
#[derive(Debug, Clone, Copy)]
pub struct Paddle {
    pub side: Side,
    pub pos: Vec2,
    pub size: Vec2,
    pub speed: f32, // Pixels per second
    pub last_contact: ContactAxis,
    pub color: Rgb,
}

impl Paddle {
    pub fn new(side: Side, pos: Vec2, size: Vec2, speed: f32, color: Rgb) -> Self {
        Self {
            side,
            pos,
            size,
            speed,
            last_contact: ContactAxis::None,
            color,
        }
    }

    pub fn center_y(&self) -> f32 {
        self.pos.y + self.size.y / 2.0
    }

    pub fn bounds(&self) -> Bounds {
        Bounds {
            min: self.pos,
            max: self.pos + self.size,
        }
    }
}

/// Ball component - the pong ball, positioned by its center
#[derive(Debug, Clone, Copy)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    pub speed_over_time: f32, // Horizontal speed, ramps up for the whole match
    pub respawn: Cooldown,
    pub bounce_x: Cooldown,
    pub bounce_y: Cooldown,
    pub color: Rgb,
}

impl Ball {
    /// A ball that fades in at `pos` and is then served with `vel`
    pub fn new(pos: Vec2, vel: Vec2, radius: f32, config: &Config, color: Rgb) -> Self {
        Self {
            pos,
            vel,
            radius,
            speed_over_time: vel.x.abs(),
            respawn: Cooldown::new(config.ball_respawn_delay),
            bounce_x: Cooldown::new(config.ball_bounce_cooldown),
            bounce_y: Cooldown::new(config.ball_bounce_cooldown),
            color: color.with_alpha(0),
        }
    }

    pub fn bounds(&self) -> Bounds {
        let half = Vec2::splat(self.radius);
        Bounds {
            min: self.pos - half,
            max: self.pos + half,
        }
    }

    /// The ball stays still while it fades in after a respawn
    pub fn is_moving(&self) -> bool {
        self.respawn.ready()
    }

    /// Reverse horizontal direction, optionally nudging the vertical speed
    pub fn bounce_x(&mut self, jitter: Option<f32>) -> bool {
        if !self.bounce_x.ready() {
            return false;
        }
        self.bounce_x.reset();
        self.vel.x = -self.vel.x;
        if let Some(jitter) = jitter {
            self.vel.y += jitter;
        }
        true
    }

    /// Reverse vertical direction
    pub fn bounce_y(&mut self) -> bool {
        if !self.bounce_y.ready() {
            return false;
        }
        self.bounce_y.reset();
        self.vel.y = -self.vel.y;
        true
    }

    /// Reset ball to `center` with a random vertical speed and a coin-flip direction
    pub fn respawn(&mut self, center: Vec2, rng: &mut GameRng, config: &Config) {
        self.pos = center;
        self.respawn.reset();

        let vy = rng.range(-config.ball_respawn_vy, config.ball_respawn_vy);
        let vx = if rng.0.gen_bool(0.5) {
            -self.speed_over_time
        } else {
            self.speed_over_time
        };
        self.vel = Vec2::new(vx, vy);
        self.color = self.color.with_alpha(0);
    }
}

/// Movement intent for paddle
#[derive(Debug, Clone, Copy, Default)]
pub struct PaddleIntent {
    pub dir: i8, // -1 = up, 0 = stop, 1 = down
}

impl PaddleIntent {
    pub fn new() -> Self {
        Self::default()
    }
}

/// What drives a paddle's intent
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Controller {
    Keyboard,  // Fed from the input queue
    TrackBall, // CPU: follows the ball vertically
}

#[cfg(test)]
mod tests {
    use super::*;

    fn moving_ball(vel: Vec2) -> Ball {
        let config = Config::new();
        let mut ball = Ball::new(Vec2::new(640.0, 360.0), vel, 15.0, &config, Rgb::WHITE);
        ball.bounce_x = Cooldown::expired(config.ball_bounce_cooldown);
        ball.bounce_y = Cooldown::expired(config.ball_bounce_cooldown);
        ball
    }

    #[test]
    fn test_bounce_x_respects_cooldown() {
        let mut ball = moving_ball(Vec2::new(500.0, 0.0));
        assert!(ball.bounce_x(None));
        assert_eq!(ball.vel.x, -500.0);
        assert!(!ball.bounce_x(None), "Second bounce inside cooldown is ignored");
        assert_eq!(ball.vel.x, -500.0);

        ball.bounce_x.tick(0.06);
        assert!(ball.bounce_x(Some(40.0)));
        assert_eq!(ball.vel, Vec2::new(500.0, 40.0));
    }

    #[test]
    fn test_bounce_axes_have_independent_cooldowns() {
        let mut ball = moving_ball(Vec2::new(500.0, 250.0));
        assert!(ball.bounce_x(None));
        assert!(ball.bounce_y(), "Y cooldown is not affected by an X bounce");
        assert_eq!(ball.vel, Vec2::new(-500.0, -250.0));
    }

    #[test]
    fn test_respawn_centers_and_uses_ramped_speed() {
        let config = Config::new();
        let mut rng = GameRng::new(7);
        let mut ball = moving_ball(Vec2::new(500.0, 0.0));
        ball.speed_over_time = 612.0;
        ball.pos = Vec2::new(-20.0, 10.0);

        ball.respawn(Vec2::new(640.0, 360.0), &mut rng, &config);

        assert_eq!(ball.pos, Vec2::new(640.0, 360.0));
        assert_eq!(ball.vel.x.abs(), 612.0);
        assert!(ball.vel.y.abs() <= config.ball_respawn_vy);
        assert!(!ball.is_moving(), "Ball waits for the fade-in");
        assert_eq!(ball.color.a, 0);
    }

    #[test]
    fn test_respawn_direction_is_a_coin_flip() {
        let config = Config::new();
        let mut rng = GameRng::new(99);
        let mut ball = moving_ball(Vec2::new(500.0, 0.0));
        let mut lefts = 0;
        for _ in 0..200 {
            ball.respawn(Vec2::ZERO, &mut rng, &config);
            if ball.vel.x < 0.0 {
                lefts += 1;
            }
        }
        assert!(lefts > 50 && lefts < 150, "Got {} left serves", lefts);
    }

    #[test]
    fn test_bounds_overlap_is_strict() {
        let a = Bounds {
            min: Vec2::ZERO,
            max: Vec2::new(10.0, 10.0),
        };
        let touching = Bounds {
            min: Vec2::new(10.0, 10.0),
            max: Vec2::new(20.0, 20.0),
        };
        assert!(!a.overlaps_x(&touching));
        assert!(!a.overlaps_y(&touching));

        let inside = Bounds {
            min: Vec2::new(5.0, 5.0),
            max: Vec2::new(6.0, 6.0),
        };
        assert!(a.overlaps_x(&inside) && a.overlaps_y(&inside));
    }

    #[test]
    fn test_paddle_center_y() {
        let paddle = Paddle::new(
            Side::Left,
            Vec2::new(30.0, 30.0),
            Vec2::new(30.0, 250.0),
            300.0,
            Rgb::WHITE,
        );
        assert_eq!(paddle.center_y(), 155.0);
        assert_eq!(Side::Left.opponent(), Side::Right);
    }
}
