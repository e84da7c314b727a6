use crate::{Arena, Ball, Config, Events, GameRng, Rules, Score, Side};
use hecs::World;
use tracing::debug;

/// Check if ball left the arena (end of a rally)
#[allow(clippy::too_many_arguments)]
pub fn check_scoring(
    world: &mut World,
    arena: &Arena,
    rules: &Rules,
    score: &mut Score,
    events: &mut Events,
    rng: &mut GameRng,
    config: &Config,
) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        let bounds = ball.bounds();

        // Side whose goal line the ball crossed
        let conceded = if bounds.max.x > arena.width {
            Some(Side::Right)
        } else if bounds.min.x < 0.0 {
            Some(Side::Left)
        } else {
            None
        };

        let Some(conceded) = conceded else {
            continue;
        };

        if rules.scoring {
            let scorer = conceded.opponent();
            score.increment(scorer);
            match scorer {
                Side::Left => events.left_scored = true,
                Side::Right => events.right_scored = true,
            }
            debug!(?scorer, left = score.left, right = score.right, "point scored");
        }

        ball.respawn(arena.center(), rng, config);
        events.ball_respawned = true;
    }
}
