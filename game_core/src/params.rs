/// Game tuning parameters for Pong (pixels and seconds)
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Arena
    pub const ARENA_WIDTH: f32 = 1280.0;
    pub const ARENA_HEIGHT: f32 = 720.0;

    // Paddle
    pub const PADDLE_WIDTH: f32 = 30.0;
    pub const PADDLE_HEIGHT: f32 = 250.0;
    pub const PADDLE_MARGIN: f32 = 30.0; // Gap between paddle and side/top edge at spawn
    pub const PADDLE_SPEED: f32 = 300.0;

    // CPU paddles on the menu get a random speed in this range
    pub const MENU_PADDLE_SPEED_MIN: f32 = 100.0;
    pub const MENU_PADDLE_SPEED_MAX: f32 = 400.0;

    // Ball
    pub const BALL_RADIUS: f32 = 15.0;
    pub const BALL_SPEED_INITIAL: f32 = 500.0;
    pub const BALL_SPEED_RAMP: f32 = 5.0; // Added to horizontal speed every second
    pub const BALL_SERVE_VY: f32 = 250.0; // Vertical speed of the very first serve
    pub const BALL_RESPAWN_VY: f32 = 300.0; // Respawn picks vy in [-this, this]
    pub const BALL_BOUNCE_JITTER: f32 = 100.0; // Paddle hits add vy in [-this, this]
    pub const BALL_BOUNCE_COOLDOWN: f32 = 0.05;
    pub const BALL_RESPAWN_DELAY: f32 = 1.0; // Fade-in before the ball moves again

    // Physics
    pub const FIXED_DT: f32 = 1.0 / 120.0;
    pub const MAX_DT: f32 = 0.1; // Clamp to prevent large jumps
}
