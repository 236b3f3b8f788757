use hecs::World;

use crate::components::*;
use crate::config::Config;

/// Move the player paddle to the latest pointer sample. Last sample wins.
pub fn apply_pointer(world: &mut World, config: &Config, pointer_y: f32) {
    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        if paddle.side == Side::Player {
            paddle.y = config.clamp_paddle_y(pointer_y);
        }
    }
}
