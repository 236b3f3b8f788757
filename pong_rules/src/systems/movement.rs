use hecs::World;

use crate::components::*;
use crate::config::Config;

/// Advance in-flight paddle moves, keeping paddles inside the arena
pub fn move_paddles(world: &mut World, dt: f32, config: &Config) {
    for (_entity, (paddle, motion)) in world.query_mut::<(&mut Paddle, &mut PaddleMotion)>() {
        if let Some(current) = motion.current.as_mut() {
            paddle.y = config.clamp_paddle_y(current.advance(dt));
            if current.is_finished() {
                motion.current = None;
            }
        }
    }
}

/// Move ball based on velocity
pub fn move_ball(world: &mut World, dt: f32) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        ball.pos += ball.vel * dt;
    }
}
