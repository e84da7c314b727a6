use glam::Vec2;

use crate::components::Side;
use crate::params::Params;

/// Time resource for tracking simulation time
#[derive(Debug, Clone, Copy)]
pub struct Time {
    pub dt: f32,  // Delta time for this step
    pub now: f32, // Total elapsed time
}

impl Time {
    pub fn new(dt: f32, now: f32) -> Self {
        Self { dt, now }
    }
}

impl Default for Time {
    fn default() -> Self {
        Self {
            dt: 1.0 / 60.0,
            now: 0.0,
        }
    }
}

/// Playing field size in pixels (follows the window)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Arena {
    pub width: f32,
    pub height: f32,
}

impl Arena {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    pub fn center(&self) -> Vec2 {
        self.size() / 2.0
    }
}

impl Default for Arena {
    fn default() -> Self {
        Self::new(Params::ARENA_WIDTH, Params::ARENA_HEIGHT)
    }
}

/// Game score tracking
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    pub left: u32,  // Player score
    pub right: u32, // Opponent score
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment(&mut self, side: Side) {
        match side {
            Side::Left => self.left += 1,
            Side::Right => self.right += 1,
        }
    }

    pub fn get(&self, side: Side) -> u32 {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }
}

/// Match rules that differ between the menu demo and a real game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rules {
    pub scoring: bool,
}

impl Default for Rules {
    fn default() -> Self {
        Self { scoring: true }
    }
}

/// Random number generator
pub struct GameRng(pub rand::rngs::StdRng);

impl GameRng {
    pub fn new(seed: u64) -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::from_entropy())
    }

    /// Seeded when `seed` is given, otherwise from OS entropy
    pub fn seeded_or_entropy(seed: Option<u64>) -> Self {
        seed.map_or_else(Self::from_entropy, Self::new)
    }

    /// Uniform sample from `[min, max]`, `min` when the range is empty
    pub fn range(&mut self, min: f32, max: f32) -> f32 {
        use rand::Rng;
        if max > min {
            self.0.gen_range(min..=max)
        } else {
            min
        }
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::new(12345)
    }
}

/// Events that occurred during this frame
#[derive(Debug, Clone, Default)]
pub struct Events {
    pub left_scored: bool,
    pub right_scored: bool,
    pub ball_hit_paddle: bool,
    pub ball_hit_wall: bool,
    pub ball_respawned: bool,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.left_scored = false;
        self.right_scored = false;
        self.ball_hit_paddle = false;
        self.ball_hit_wall = false;
        self.ball_respawned = false;
    }

    pub fn scored(&self) -> bool {
        self.left_scored || self.right_scored
    }
}

/// Keyboard input queue
#[derive(Debug, Clone, Default)]
pub struct InputQueue {
    pub inputs: Vec<(Side, i8)>, // (paddle side, direction)
}

impl InputQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.inputs.clear();
    }

    pub fn push_input(&mut self, side: Side, dir: i8) {
        self.inputs.push((side, dir.signum()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_increment() {
        let mut score = Score::new();
        score.increment(Side::Left);
        score.increment(Side::Left);
        score.increment(Side::Right);
        assert_eq!(score.left, 2);
        assert_eq!(score.right, 1);
        assert_eq!(score.get(Side::Right), 1);
    }

    #[test]
    fn test_events_clear() {
        let mut events = Events::new();
        events.left_scored = true;
        events.right_scored = true;
        events.ball_hit_paddle = true;
        events.ball_hit_wall = true;
        events.ball_respawned = true;

        events.clear();

        assert!(!events.scored());
        assert!(!events.ball_hit_paddle);
        assert!(!events.ball_hit_wall);
        assert!(!events.ball_respawned);
    }

    #[test]
    fn test_input_queue_normalizes_direction() {
        let mut queue = InputQueue::new();
        queue.push_input(Side::Left, -3);
        queue.push_input(Side::Right, 1);

        assert_eq!(queue.inputs, vec![(Side::Left, -1), (Side::Right, 1)]);
        queue.clear();
        assert!(queue.inputs.is_empty());
    }

    #[test]
    fn test_arena_center() {
        assert_eq!(Arena::default().center(), Vec2::new(640.0, 360.0));
    }

    #[test]
    fn test_rng_range() {
        let mut rng = GameRng::new(1);
        for _ in 0..100 {
            let value = rng.range(100.0, 400.0);
            assert!((100.0..=400.0).contains(&value));
        }
        assert_eq!(rng.range(5.0, 5.0), 5.0);
    }
}
