pub mod color;
pub mod components;
pub mod config;
pub mod params;
pub mod resources;
pub mod systems;
pub mod timer;

pub use color::*;
pub use components::*;
pub use config::*;
pub use params::*;
pub use resources::*;
pub use timer::*;

use glam::Vec2;
use hecs::World;
use systems::*;

/// Run the deterministic Pong simulation for one frame
#[allow(clippy::too_many_arguments)]
pub fn step(
    world: &mut World,
    time: &mut Time,
    arena: &Arena,
    config: &Config,
    rules: &Rules,
    score: &mut Score,
    events: &mut Events,
    input: &mut InputQueue,
    rng: &mut GameRng,
) {
    // Clamp dt to prevent large jumps
    let clamped_dt = time.dt.clamp(0.0, config.max_dt);

    // Events describe the whole frame, not just the last sub-step
    events.clear();

    // Fixed micro-steps for stable physics
    let mut remaining_dt = clamped_dt;
    while remaining_dt > 0.0 {
        let step_dt = remaining_dt.min(config.fixed_dt);
        remaining_dt -= step_dt;

        let step_time = Time {
            dt: step_dt,
            now: time.now + (clamped_dt - remaining_dt),
        };

        // 1. Intents: keyboard queue, then CPU tracking
        ingest_inputs(world, input);
        track_ball(world);

        // 2. Move paddles based on intents
        move_paddles(world, &step_time, arena);

        // 3. Ball timers, speed ramp and motion
        update_ball_timers(world, &step_time);
        ramp_ball_speed(world, &step_time, config);
        move_ball(world, &step_time);

        // 4. Walls, goal lines, then paddles
        check_walls(world, arena, events);
        check_scoring(world, arena, rules, score, events, rng, config);
        check_paddles(world, config, events, rng);
    }

    // Update time
    time.now += clamped_dt;
}

/// Spawn a paddle with the given controller
pub fn spawn_paddle(world: &mut World, paddle: Paddle, controller: Controller) -> hecs::Entity {
    world.spawn((paddle, PaddleIntent::new(), controller))
}

/// Helper to create a paddle entity at its starting spot on `side`
pub fn create_paddle(
    world: &mut World,
    side: Side,
    controller: Controller,
    arena: &Arena,
    config: &Config,
) -> hecs::Entity {
    create_paddle_with(
        world,
        side,
        controller,
        arena,
        config,
        config.paddle_speed,
        config.palette.entity,
    )
}

/// Like [`create_paddle`] with an explicit speed and color
pub fn create_paddle_with(
    world: &mut World,
    side: Side,
    controller: Controller,
    arena: &Arena,
    config: &Config,
    speed: f32,
    color: Rgb,
) -> hecs::Entity {
    let paddle = Paddle::new(
        side,
        Vec2::new(config.paddle_x(side, arena.width), config.paddle_margin),
        Vec2::new(config.paddle_width, config.paddle_height),
        speed,
        color,
    );
    spawn_paddle(world, paddle, controller)
}

/// Helper to create the ball entity, served up and towards the left paddle
pub fn create_ball(world: &mut World, arena: &Arena, config: &Config, color: Rgb) -> hecs::Entity {
    let vel = Vec2::new(-config.ball_speed_initial, -config.ball_serve_vy);
    let ball = Ball::new(arena.center(), vel, config.ball_radius, config, color);
    world.spawn((ball,))
}
