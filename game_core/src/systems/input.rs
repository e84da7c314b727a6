use hecs::World;

use crate::components::*;
use crate::resources::*;

/// Apply queued keyboard inputs to the intents of keyboard-driven paddles
pub fn ingest_inputs(world: &mut World, input: &mut InputQueue) {
    if input.inputs.is_empty() {
        return;
    }

    for (_entity, (paddle, intent, controller)) in
        world.query_mut::<(&Paddle, &mut PaddleIntent, &Controller)>()
    {
        if *controller != Controller::Keyboard {
            continue;
        }

        // Later inputs for the same side win
        if let Some((_, dir)) = input
            .inputs
            .iter()
            .rev()
            .find(|(side, _)| *side == paddle.side)
        {
            intent.dir = *dir;
        }
    }

    // Clear processed inputs
    input.clear();
}
