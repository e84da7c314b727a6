use crate::{Arena, Ball, Config, Paddle, PaddleIntent, Time};
use hecs::World;

/// Apply paddle movement based on intents
pub fn move_paddles(world: &mut World, time: &Time, arena: &Arena) {
    for (_entity, (paddle, intent)) in world.query_mut::<(&mut Paddle, &PaddleIntent)>() {
        if intent.dir != 0 {
            paddle.pos.y += intent.dir as f32 * paddle.speed * time.dt;
        }

        // Clamp to arena bounds (also after a resize shrank the arena)
        let max_y = (arena.height - paddle.size.y).max(0.0);
        paddle.pos.y = paddle.pos.y.clamp(0.0, max_y);
    }
}

/// Re-place paddles against their side walls after the arena changed size
pub fn anchor_paddles(world: &mut World, arena: &Arena, config: &Config) {
    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        paddle.pos.x = config.paddle_x(paddle.side, arena.width);
        let max_y = (arena.height - paddle.size.y).max(0.0);
        paddle.pos.y = paddle.pos.y.clamp(0.0, max_y);
    }
}

/// Advance the ball's cooldowns and fade it in after a respawn
pub fn update_ball_timers(world: &mut World, time: &Time) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        ball.respawn.tick(time.dt);
        ball.bounce_x.tick(time.dt);
        ball.bounce_y.tick(time.dt);

        let alpha = if ball.is_moving() {
            u8::MAX
        } else {
            (ball.respawn.progress() * 255.0) as u8
        };
        ball.color = ball.color.with_alpha(alpha);
    }
}

/// Horizontal speed keeps growing for the whole match
pub fn ramp_ball_speed(world: &mut World, time: &Time, config: &Config) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        ball.speed_over_time += config.ball_speed_ramp * time.dt;
        ball.vel.x = ball.speed_over_time.copysign(ball.vel.x);
    }
}

/// Move ball based on velocity
pub fn move_ball(world: &mut World, time: &Time) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        if ball.is_moving() {
            ball.pos += ball.vel * time.dt;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{create_paddle, Controller, Rgb, Side};
    use glam::Vec2;

    fn setup_world() -> (World, Config, Arena) {
        (World::new(), Config::new(), Arena::default())
    }

    #[test]
    fn test_paddle_moves_by_speed_and_dt() {
        let (mut world, config, arena) = setup_world();
        let paddle = create_paddle(&mut world, Side::Left, Controller::Keyboard, &arena, &config);
        world.get::<&mut PaddleIntent>(paddle).unwrap().dir = 1;

        move_paddles(&mut world, &Time::new(0.1, 0.0), &arena);

        let y = world.get::<&Paddle>(paddle).unwrap().pos.y;
        assert!((y - (30.0 + 30.0)).abs() < 1e-4, "Moved 300 px/s for 0.1 s, got {}", y);
    }

    #[test]
    fn test_paddle_clamped_to_top() {
        let (mut world, config, arena) = setup_world();
        let paddle = create_paddle(&mut world, Side::Left, Controller::Keyboard, &arena, &config);
        world.get::<&mut PaddleIntent>(paddle).unwrap().dir = -1;

        for _ in 0..100 {
            move_paddles(&mut world, &Time::new(0.05, 0.0), &arena);
        }

        assert_eq!(world.get::<&Paddle>(paddle).unwrap().pos.y, 0.0);
    }

    #[test]
    fn test_paddle_clamped_to_bottom() {
        let (mut world, config, arena) = setup_world();
        let paddle = create_paddle(&mut world, Side::Right, Controller::Keyboard, &arena, &config);
        world.get::<&mut PaddleIntent>(paddle).unwrap().dir = 1;

        for _ in 0..100 {
            move_paddles(&mut world, &Time::new(0.05, 0.0), &arena);
        }

        let paddle = world.get::<&Paddle>(paddle).unwrap();
        assert_eq!(paddle.pos.y, arena.height - paddle.size.y);
    }

    #[test]
    fn test_ball_waits_for_fade_in() {
        let (mut world, config, _arena) = setup_world();
        let start = Vec2::new(640.0, 360.0);
        let ball = world.spawn((Ball::new(
            start,
            Vec2::new(-500.0, 0.0),
            15.0,
            &config,
            Rgb::WHITE,
        ),));
        let time = Time::new(0.5, 0.0);

        update_ball_timers(&mut world, &time);
        move_ball(&mut world, &time);
        {
            let ball = world.get::<&Ball>(ball).unwrap();
            assert_eq!(ball.pos, start, "Ball does not move while fading in");
            assert_eq!(ball.color.a, 127);
        }

        let time = Time::new(0.6, 0.5);
        update_ball_timers(&mut world, &time);
        move_ball(&mut world, &time);
        let ball = world.get::<&Ball>(ball).unwrap();
        assert_eq!(ball.color.a, 255);
        assert!(ball.pos.x < start.x, "Ball moves once the fade-in is over");
    }

    #[test]
    fn test_speed_ramp_keeps_direction() {
        let (mut world, config, _arena) = setup_world();
        let ball = world.spawn((Ball::new(
            Vec2::ZERO,
            Vec2::new(-500.0, 100.0),
            15.0,
            &config,
            Rgb::WHITE,
        ),));

        ramp_ball_speed(&mut world, &Time::new(2.0, 0.0), &config);

        let ball = world.get::<&Ball>(ball).unwrap();
        assert_eq!(ball.speed_over_time, 510.0);
        assert_eq!(ball.vel, Vec2::new(-510.0, 100.0));
    }

    #[test]
    fn test_anchor_paddles_after_resize() {
        let (mut world, config, arena) = setup_world();
        let left = create_paddle(&mut world, Side::Left, Controller::Keyboard, &arena, &config);
        let right = create_paddle(&mut world, Side::Right, Controller::TrackBall, &arena, &config);
        world.get::<&mut Paddle>(right).unwrap().pos.y = 400.0;

        let smaller = Arena::new(800.0, 500.0);
        anchor_paddles(&mut world, &smaller, &config);

        assert_eq!(world.get::<&Paddle>(left).unwrap().pos, Vec2::new(30.0, 30.0));
        let right = world.get::<&Paddle>(right).unwrap();
        assert_eq!(right.pos.x, 800.0 - 30.0 - 30.0, "Right paddle follows the right edge");
        assert_eq!(right.pos.y, 250.0, "Re-clamped into the shorter arena");
    }
}
