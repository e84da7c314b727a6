use hecs::World;

use crate::components::*;

/// Steer CPU paddles so their center follows the ball vertically
pub fn track_ball(world: &mut World) {
    let ball_y = {
        let mut query = world.query::<&Ball>();
        match query.iter().next() {
            Some((_e, ball)) => ball.pos.y,
            None => return, // No ball in world
        }
    };

    for (_entity, (paddle, intent, controller)) in
        world.query_mut::<(&Paddle, &mut PaddleIntent, &Controller)>()
    {
        if *controller != Controller::TrackBall {
            continue;
        }

        let center_y = paddle.center_y();
        intent.dir = if center_y < ball_y {
            1
        } else if center_y > ball_y {
            -1
        } else {
            0
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{create_paddle, Arena, Config, Rgb};
    use glam::Vec2;

    fn world_with_cpu(ball_y: f32) -> (World, hecs::Entity) {
        let mut world = World::new();
        let config = Config::new();
        let arena = Arena::default();
        let cpu = create_paddle(&mut world, Side::Right, Controller::TrackBall, &arena, &config);
        // Paddle spawns at y = 30, so its center is at 155
        let ball = Ball::new(
            Vec2::new(640.0, ball_y),
            Vec2::new(500.0, 0.0),
            15.0,
            &config,
            Rgb::WHITE,
        );
        world.spawn((ball,));
        (world, cpu)
    }

    #[test]
    fn test_cpu_moves_down_towards_lower_ball() {
        let (mut world, cpu) = world_with_cpu(500.0);
        track_ball(&mut world);
        assert_eq!(world.get::<&PaddleIntent>(cpu).unwrap().dir, 1);
    }

    #[test]
    fn test_cpu_moves_up_towards_higher_ball() {
        let (mut world, cpu) = world_with_cpu(20.0);
        track_ball(&mut world);
        assert_eq!(world.get::<&PaddleIntent>(cpu).unwrap().dir, -1);
    }

    #[test]
    fn test_cpu_holds_when_centered() {
        let (mut world, cpu) = world_with_cpu(155.0);
        track_ball(&mut world);
        assert_eq!(world.get::<&PaddleIntent>(cpu).unwrap().dir, 0);
    }

    #[test]
    fn test_keyboard_paddles_are_not_steered() {
        let mut world = World::new();
        let config = Config::new();
        let arena = Arena::default();
        let player = create_paddle(&mut world, Side::Left, Controller::Keyboard, &arena, &config);
        let ball = Ball::new(Vec2::new(640.0, 700.0), Vec2::ZERO, 15.0, &config, Rgb::WHITE);
        world.spawn((ball,));

        track_ball(&mut world);
        assert_eq!(world.get::<&PaddleIntent>(player).unwrap().dir, 0);
    }
}
