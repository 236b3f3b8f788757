use hecs::World;

use crate::arena::Arena;
use crate::components::*;
use crate::resources::Events;

/// Reference contact resolution for the ball against the edges and paddles.
///
/// Hosts driving their own physics engine skip this entirely.
pub fn check_collisions(world: &mut World, arena: &Arena, events: &mut Events) {
    // Collect paddle data without holding a borrow on the world
    let paddles: Vec<(Side, f32)> = world
        .query::<&Paddle>()
        .iter()
        .map(|(_e, paddle)| (paddle.side, paddle.y))
        .collect();

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        if bounce_off_edges(ball, arena) {
            events.ball_hit_wall = true;
        }

        for &(side, paddle_y) in &paddles {
            if bounce_off_paddle(ball, arena, side, paddle_y) {
                events.ball_hit_paddle = true;
                break;
            }
        }
    }
}

/// Reflect off the edge loop around the arena
fn bounce_off_edges(ball: &mut Ball, arena: &Arena) -> bool {
    let half = arena.ball_size * 0.5;
    let min = arena.bounds.min + half;
    let max = arena.bounds.max - half;
    let restitution = BodyMaterial::BALL.restitution;
    let mut hit = false;

    if (ball.pos.y <= min.y && ball.vel.y < 0.0) || (ball.pos.y >= max.y && ball.vel.y > 0.0) {
        ball.vel.y = -ball.vel.y * restitution;
        hit = true;
    }
    if (ball.pos.x <= min.x && ball.vel.x < 0.0) || (ball.pos.x >= max.x && ball.vel.x > 0.0) {
        ball.vel.x = -ball.vel.x * restitution;
        hit = true;
    }

    if hit {
        // Clamp position to prevent stuck
        ball.pos = ball.pos.clamp(min, max);
    }
    hit
}

/// Reflect off a paddle face when the ball overlaps it while heading toward it
fn bounce_off_paddle(ball: &mut Ball, arena: &Arena, side: Side, paddle_y: f32) -> bool {
    let paddle = arena.paddle_box(side, paddle_y);
    if !paddle.intersects(&arena.ball_box(ball.pos)) {
        return false;
    }

    let approaching = match side {
        Side::Player => ball.vel.x < 0.0,
        Side::Enemy => ball.vel.x > 0.0,
    };
    if !approaching {
        return false;
    }

    ball.vel.x = -ball.vel.x * BodyMaterial::BALL.restitution;

    // Push ball out of paddle
    let half_width = arena.ball_size.x * 0.5;
    ball.pos.x = match side {
        Side::Player => paddle.max.x + half_width,
        Side::Enemy => paddle.min.x - half_width,
    };
    true
}
