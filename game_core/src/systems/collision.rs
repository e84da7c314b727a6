use crate::{Arena, Ball, Config, ContactAxis, Events, GameRng, Paddle};
use hecs::World;
use tracing::trace;

/// Bounce the ball off the top and bottom walls
pub fn check_walls(world: &mut World, arena: &Arena, events: &mut Events) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        let bounds = ball.bounds();
        let hit_top = bounds.min.y < 0.0 && ball.vel.y < 0.0;
        let hit_bottom = bounds.max.y > arena.height && ball.vel.y > 0.0;

        if (hit_top || hit_bottom) && ball.bounce_y() {
            events.ball_hit_wall = true;
        }

        // Clamp position to prevent getting stuck outside
        let max_y = (arena.height - ball.radius).max(ball.radius);
        ball.pos.y = ball.pos.y.clamp(ball.radius, max_y);
    }
}

/// Check ball collisions with paddles
///
/// A hit needs overlap on both axes. The bounce axis comes from the overlap
/// that existed on the previous frame: entering from the side (Y overlap
/// first) reverses X, entering over the top or bottom edge (X overlap first)
/// reverses Y. Entering on both axes at once does nothing.
pub fn check_paddles(
    world: &mut World,
    config: &Config,
    events: &mut Events,
    rng: &mut GameRng,
) {
    // First, collect ball data without holding borrows
    let ball_data = {
        let mut ball_query = world.query::<&Ball>();
        ball_query.iter().next().map(|(e, ball)| (e, *ball))
    };

    let (ball_entity, mut ball) = match ball_data {
        Some(data) => data,
        None => return, // No ball in world
    };

    // Deterministic order: left paddle first
    let mut paddles: Vec<_> = world
        .query::<&Paddle>()
        .iter()
        .map(|(e, paddle)| (paddle.side, e))
        .collect();
    paddles.sort_by_key(|(side, _)| *side);

    let ball_bounds = ball.bounds();
    for (side, entity) in paddles {
        let Ok(mut paddle) = world.get::<&mut Paddle>(entity) else {
            continue;
        };
        let paddle_bounds = paddle.bounds();
        let overlap_x = ball_bounds.overlaps_x(&paddle_bounds);
        let overlap_y = ball_bounds.overlaps_y(&paddle_bounds);

        paddle.last_contact = match (overlap_x, overlap_y) {
            (true, true) => {
                let bounced = match paddle.last_contact {
                    ContactAxis::Y => {
                        let jitter = config.ball_bounce_jitter;
                        let jitter = rng.range(-jitter, jitter);
                        ball.bounce_x(Some(jitter))
                    }
                    ContactAxis::X => ball.bounce_y(),
                    ContactAxis::None => false,
                };
                if bounced {
                    trace!(?side, "ball hit paddle");
                    events.ball_hit_paddle = true;
                }
                ContactAxis::None
            }
            (false, true) => ContactAxis::Y,
            (true, false) => ContactAxis::X,
            (false, false) => ContactAxis::None,
        };
    }

    if let Ok(mut stored) = world.get::<&mut Ball>(ball_entity) {
        *stored = ball;
    }
}
