use hecs::World;
use rand::Rng;

use crate::components::*;
use crate::difficulty::{Difficulty, DifficultyTier};
use crate::params::Params;
use crate::resources::{Events, GameRng};

/// Timed move issued to the enemy paddle for one tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnemyMove {
    pub target_y: f32,
    pub duration: f32,
}

/// Pick the enemy paddle's next target.
///
/// Medium and High track the ball exactly. Low holds position while the ball
/// is within the deadzone and otherwise aims at a jittered point near it. The
/// target is not clamped here.
pub fn plan_enemy_move(
    tier: DifficultyTier,
    ball_y: f32,
    enemy_y: f32,
    rng: &mut GameRng,
) -> EnemyMove {
    let target_y = match tier {
        DifficultyTier::Low => {
            if (ball_y - enemy_y).abs() > Params::LOW_TRACKING_DEADZONE {
                let jitter = Params::LOW_TRACKING_JITTER;
                ball_y + rng.0.gen_range(-jitter..=jitter)
            } else {
                enemy_y
            }
        }
        DifficultyTier::Medium | DifficultyTier::High => ball_y,
    };

    EnemyMove {
        target_y,
        duration: tier.move_duration(),
    }
}

/// Reissue the enemy paddle's timed move, replacing any move still in flight
pub fn drive_enemy_paddle(
    world: &mut World,
    difficulty: &Difficulty,
    rng: &mut GameRng,
    events: &mut Events,
) {
    let ball_y = {
        let mut ball_query = world.query::<&Ball>();
        ball_query.iter().next().map(|(_e, ball)| ball.pos.y)
    };

    let ball_y = match ball_y {
        Some(y) => y,
        None => return, // No ball in world
    };

    for (_entity, (paddle, motion)) in world.query_mut::<(&Paddle, &mut PaddleMotion)>() {
        if paddle.side != Side::Enemy {
            continue;
        }

        let planned = plan_enemy_move(difficulty.tier(), ball_y, paddle.y, rng);
        tracing::trace!(
            "Enemy paddle {} -> {} over {}s",
            paddle.y,
            planned.target_y,
            planned.duration
        );

        motion.move_to(paddle.y, planned.target_y, planned.duration);
        events.enemy_move = Some(planned);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{create_ball, create_paddle};
    use glam::Vec2;
    use proptest::prelude::*;

    #[test]
    fn test_high_tier_tracks_ball_exactly() {
        let mut rng = GameRng::new(1);
        let planned = plan_enemy_move(DifficultyTier::High, 612.5, 100.0, &mut rng);
        assert_eq!(planned.target_y, 612.5);
        assert_eq!(planned.duration, 0.08);
    }

    #[test]
    fn test_medium_tier_tracks_ball_exactly() {
        let mut rng = GameRng::new(1);
        let planned = plan_enemy_move(DifficultyTier::Medium, 42.0, 700.0, &mut rng);
        assert_eq!(planned.target_y, 42.0);
        assert_eq!(planned.duration, 0.085);
    }

    #[test]
    fn test_low_tier_holds_inside_deadzone() {
        let mut rng = GameRng::new(1);
        let planned = plan_enemy_move(DifficultyTier::Low, 430.0, 375.0, &mut rng);
        assert_eq!(planned.target_y, 375.0, "Exactly 55 away is still inside");
        assert_eq!(planned.duration, 0.12);
    }

    #[test]
    fn test_low_tier_jitter_is_seeded() {
        let a = plan_enemy_move(DifficultyTier::Low, 600.0, 375.0, &mut GameRng::new(9));
        let b = plan_enemy_move(DifficultyTier::Low, 600.0, 375.0, &mut GameRng::new(9));
        assert_eq!(a, b, "Same seed, same wobble");
    }

    #[test]
    fn test_drive_replaces_enemy_move_every_tick() {
        let mut world = World::new();
        let mut rng = GameRng::new(3);
        let mut events = Events::new();
        let mut difficulty = Difficulty::new();
        difficulty.recompute(5, Vec2::ZERO, &mut events);

        create_paddle(&mut world, Side::Player, 375.0);
        let enemy = create_paddle(&mut world, Side::Enemy, 375.0);
        create_ball(&mut world, Vec2::new(600.0, 500.0), Vec2::ZERO, 1.0);

        drive_enemy_paddle(&mut world, &difficulty, &mut rng, &mut events);
        for (_e, ball) in world.query_mut::<&mut Ball>() {
            ball.pos.y = 120.0;
        }
        drive_enemy_paddle(&mut world, &difficulty, &mut rng, &mut events);

        let motion = *world.get::<&PaddleMotion>(enemy).expect("enemy motion");
        let current = motion.current.expect("move in flight");
        assert_eq!(current.to, 120.0, "Latest target supersedes the previous one");
        assert_eq!(current.elapsed, 0.0);
        assert_eq!(
            events.enemy_move,
            Some(EnemyMove {
                target_y: 120.0,
                duration: 0.08
            })
        );
    }

    #[test]
    fn test_player_paddle_is_never_driven() {
        let mut world = World::new();
        let mut rng = GameRng::new(3);
        let mut events = Events::new();
        let player = create_paddle(&mut world, Side::Player, 375.0);
        create_ball(&mut world, Vec2::new(600.0, 500.0), Vec2::ZERO, 1.0);

        drive_enemy_paddle(&mut world, &Difficulty::new(), &mut rng, &mut events);

        let motion = *world.get::<&PaddleMotion>(player).expect("player motion");
        assert!(motion.current.is_none());
        assert!(events.enemy_move.is_none());
    }

    proptest! {
        #[test]
        fn prop_high_tier_target_is_ball(ball_y in -1_000.0f32..2_000.0, enemy_y in 0.0f32..750.0, seed: u64) {
            let planned = plan_enemy_move(DifficultyTier::High, ball_y, enemy_y, &mut GameRng::new(seed));
            prop_assert_eq!(planned.target_y, ball_y);
        }

        #[test]
        fn prop_low_tier_target_bounds(ball_y in 0.0f32..750.0, enemy_y in 50.0f32..700.0, seed: u64) {
            let planned = plan_enemy_move(DifficultyTier::Low, ball_y, enemy_y, &mut GameRng::new(seed));
            if (ball_y - enemy_y).abs() <= 55.0 {
                prop_assert_eq!(planned.target_y, enemy_y);
            } else {
                prop_assert!((planned.target_y - ball_y).abs() <= 40.0 + 1e-3);
            }
        }
    }
}
