pub mod arena;
pub mod components;
pub mod config;
pub mod difficulty;
pub mod game;
pub mod params;
pub mod resources;
pub mod systems;

pub use arena::*;
pub use components::*;
pub use config::*;
pub use difficulty::*;
pub use game::*;
pub use params::*;
pub use resources::*;

use glam::Vec2;
use hecs::World;
use systems::*;

/// Run one frame of game rules: enemy AI, then goal checks and serves
pub fn step(
    world: &mut World,
    config: &Config,
    score: &mut Score,
    difficulty: &mut Difficulty,
    events: &mut Events,
    rng: &mut GameRng,
) {
    // Clear events at start of frame
    events.clear();

    // 1. Reissue the enemy paddle's timed move
    drive_enemy_paddle(world, difficulty, rng, events);

    // 2. Goal lines, scoring, difficulty and serve
    check_goals(world, config, score, difficulty, events, rng);
}

/// Reference physics for hosts without an engine of their own.
///
/// Goal lines are checked after every micro-step, before contacts, so a ball
/// that crosses a line during a long frame scores instead of bouncing back
/// off the edge loop behind it.
#[allow(clippy::too_many_arguments)]
pub fn simulate(
    world: &mut World,
    dt: f32,
    config: &Config,
    arena: &Arena,
    score: &mut Score,
    difficulty: &mut Difficulty,
    events: &mut Events,
    rng: &mut GameRng,
) {
    // Clamp dt to prevent large jumps
    let clamped_dt = dt.min(Params::MAX_DT);

    // Fixed micro-steps for stable physics
    let mut remaining_dt = clamped_dt;
    while remaining_dt > 0.0 {
        let step_dt = remaining_dt.min(Params::FIXED_DT);
        remaining_dt -= step_dt;

        move_paddles(world, step_dt, config);
        move_ball(world, step_dt);
        check_goals(world, config, score, difficulty, events, rng);
        check_collisions(world, arena, events);
    }
}

/// Helper to create a paddle entity
pub fn create_paddle(world: &mut World, side: Side, y: f32) -> hecs::Entity {
    world.spawn((Paddle::new(side, y), PaddleMotion::new()))
}

/// Helper to create the ball entity
pub fn create_ball(world: &mut World, pos: Vec2, vel: Vec2, mass: f32) -> hecs::Entity {
    world.spawn((Ball::new(pos, vel, mass),))
}

/// Position and velocity of the ball, if one exists
pub fn ball_state(world: &World) -> Option<(Vec2, Vec2)> {
    world
        .query::<&Ball>()
        .iter()
        .next()
        .map(|(_e, ball)| (ball.position(), ball.velocity()))
}

/// Y of the paddle on `side`, if one exists
pub fn paddle_y(world: &World, side: Side) -> Option<f32> {
    world
        .query::<&Paddle>()
        .iter()
        .find(|(_e, paddle)| paddle.side == side)
        .map(|(_e, paddle)| paddle.y)
}
