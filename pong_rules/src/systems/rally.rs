use glam::Vec2;
use hecs::World;
use rand::Rng;

use crate::components::*;
use crate::config::Config;
use crate::difficulty::Difficulty;
use crate::resources::{Events, GameRng, Score, Serve};

/// Which side scores when the ball sits at `ball_x`, if any.
///
/// Each goal line is `margin` behind its paddle's center; reaching it counts.
pub fn goal_scored(
    ball_x: f32,
    player_paddle_x: f32,
    enemy_paddle_x: f32,
    margin: f32,
) -> Option<Side> {
    if ball_x <= player_paddle_x - margin {
        Some(Side::Enemy)
    } else if ball_x >= enemy_paddle_x + margin {
        Some(Side::Player)
    } else {
        None
    }
}

/// Recenter the ball, kill its momentum and serve it toward a random side
pub fn reset_ball<B: BallBody>(
    body: &mut B,
    center: Vec2,
    config: &Config,
    rng: &mut GameRng,
) -> Serve {
    body.set_position(center);
    body.set_velocity(Vec2::ZERO);

    let dx = if rng.0.gen_bool(0.5) {
        config.serve_impulse_x
    } else {
        -config.serve_impulse_x
    };
    let dy = rng
        .0
        .gen_range(-config.serve_impulse_y..=config.serve_impulse_y);
    let impulse = Vec2::new(dx, dy);

    body.apply_impulse(impulse);
    tracing::debug!("Serve from {} with impulse {}", center, impulse);

    Serve {
        position: center,
        impulse,
    }
}

/// Check the ball against both goal lines, score, and serve again
pub fn check_goals(
    world: &mut World,
    config: &Config,
    score: &mut Score,
    difficulty: &mut Difficulty,
    events: &mut Events,
    rng: &mut GameRng,
) {
    let player_x = config.paddle_x(Side::Player);
    let enemy_x = config.paddle_x(Side::Enemy);

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        let scorer = match goal_scored(
            ball.position().x,
            player_x,
            enemy_x,
            config.goal_line_margin,
        ) {
            Some(side) => side,
            None => continue,
        };

        score.record_point(scorer);
        tracing::info!(
            "{:?} scored: player {} - enemy {} (streak {})",
            scorer,
            score.player,
            score.enemy,
            score.streak
        );
        events.scored = Some(scorer);

        difficulty.recompute(score.streak, config.center(), events);
        events.serve = Some(reset_ball(ball, config.center(), config, rng));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ball_state, create_ball, DifficultyTier};
    use proptest::prelude::*;

    fn setup_world() -> (World, Config, Score, Difficulty, Events, GameRng) {
        let world = World::new();
        let config = Config::new();
        let score = Score::new();
        let difficulty = Difficulty::new();
        let events = Events::new();
        let rng = GameRng::new(12345); // Fixed seed for deterministic tests
        (world, config, score, difficulty, events, rng)
    }

    #[test]
    fn test_goal_line_boundaries() {
        assert_eq!(goal_scored(54.0, 75.0, 1284.0, 20.0), Some(Side::Enemy));
        assert_eq!(goal_scored(55.0, 75.0, 1284.0, 20.0), Some(Side::Enemy));
        assert_eq!(goal_scored(56.0, 75.0, 1284.0, 20.0), None);
        assert_eq!(goal_scored(1303.0, 75.0, 1284.0, 20.0), None);
        assert_eq!(goal_scored(1304.0, 75.0, 1284.0, 20.0), Some(Side::Player));
    }

    #[test]
    fn test_enemy_scores_when_ball_passes_player_goal_line() {
        let (mut world, config, mut score, mut difficulty, mut events, mut rng) = setup_world();
        create_ball(
            &mut world,
            Vec2::new(54.0, 300.0),
            Vec2::new(-500.0, 0.0),
            config.ball_mass,
        );

        check_goals(&mut world, &config, &mut score, &mut difficulty, &mut events, &mut rng);

        assert_eq!(score.enemy, 1, "Enemy should score");
        assert_eq!(score.player, 0, "Player should not score");
        assert_eq!(events.scored, Some(Side::Enemy));
        assert_eq!(difficulty.tier(), DifficultyTier::Low);
        assert_eq!(events.banner.map(|b| b.text), Some("Low difficulty"));
    }

    #[test]
    fn test_player_scores_when_ball_passes_enemy_goal_line() {
        let (mut world, config, mut score, mut difficulty, mut events, mut rng) = setup_world();
        create_ball(
            &mut world,
            Vec2::new(1310.0, 300.0),
            Vec2::new(500.0, 0.0),
            config.ball_mass,
        );

        check_goals(&mut world, &config, &mut score, &mut difficulty, &mut events, &mut rng);

        assert_eq!(score.player, 1);
        assert_eq!(score.streak, 1);
        assert_eq!(events.scored, Some(Side::Player));
        assert_eq!(difficulty.tier(), DifficultyTier::Medium);
    }

    #[test]
    fn test_no_scoring_when_ball_in_play() {
        let (mut world, config, mut score, mut difficulty, mut events, mut rng) = setup_world();
        create_ball(
            &mut world,
            Vec2::new(56.0, 300.0),
            Vec2::new(-500.0, 0.0),
            config.ball_mass,
        );

        check_goals(&mut world, &config, &mut score, &mut difficulty, &mut events, &mut rng);

        assert_eq!(score, Score::new(), "No score when ball in play");
        assert!(events.scored.is_none());
        assert!(events.serve.is_none());
        assert!(events.banner.is_none(), "No banner without a point");
        assert_eq!(ball_state(&world), Some((Vec2::new(56.0, 300.0), Vec2::new(-500.0, 0.0))));
    }

    #[test]
    fn test_ball_resets_to_center_after_scoring() {
        let (mut world, config, mut score, mut difficulty, mut events, mut rng) = setup_world();
        create_ball(
            &mut world,
            Vec2::new(10.0, 700.0),
            Vec2::new(-900.0, 300.0),
            config.ball_mass,
        );

        check_goals(&mut world, &config, &mut score, &mut difficulty, &mut events, &mut rng);

        let (pos, vel) = ball_state(&world).expect("ball");
        let serve = events.serve.expect("serve issued");
        assert_eq!(pos, config.center(), "Ball should reset to center");
        assert_eq!(serve.position, config.center());
        // Old momentum is gone: velocity comes from the serve impulse alone
        let expected = serve.impulse / config.ball_mass;
        assert!((vel - expected).length() < 1e-3);
    }

    #[test]
    fn test_reset_zeroes_velocity_before_impulse() {
        #[derive(Default)]
        struct Recorder {
            calls: Vec<&'static str>,
            pos: Vec2,
            vel: Vec2,
        }

        impl BallBody for Recorder {
            fn position(&self) -> Vec2 {
                self.pos
            }
            fn velocity(&self) -> Vec2 {
                self.vel
            }
            fn set_position(&mut self, pos: Vec2) {
                self.calls.push("set_position");
                self.pos = pos;
            }
            fn set_velocity(&mut self, vel: Vec2) {
                self.calls.push("set_velocity");
                self.vel = vel;
            }
            fn apply_impulse(&mut self, impulse: Vec2) {
                self.calls.push("apply_impulse");
                assert_eq!(self.vel, Vec2::ZERO, "Impulse must land on a stopped ball");
                self.vel += impulse;
            }
        }

        let config = Config::new();
        let mut body = Recorder {
            vel: Vec2::new(123.0, -45.0),
            ..Default::default()
        };

        reset_ball(&mut body, config.center(), &config, &mut GameRng::new(7));

        assert_eq!(body.calls, ["set_position", "set_velocity", "apply_impulse"]);
    }

    #[test]
    fn test_successive_points_accumulate() {
        let (mut world, config, mut score, mut difficulty, mut events, mut rng) = setup_world();
        create_ball(&mut world, Vec2::ZERO, Vec2::ZERO, config.ball_mass);

        for _ in 0..3 {
            for (_e, ball) in world.query_mut::<&mut Ball>() {
                ball.pos.x = 1320.0;
            }
            events.clear();
            check_goals(&mut world, &config, &mut score, &mut difficulty, &mut events, &mut rng);
        }

        assert_eq!(score.player, 3, "Scores should accumulate");
        assert_eq!(score.streak, 3);
        assert_eq!(score.enemy, 0);
    }

    proptest! {
        #[test]
        fn prop_serve_is_fair_and_bounded(seed: u64) {
            let config = Config::new();
            let mut ball = Ball::new(Vec2::new(3.0, 4.0), Vec2::new(800.0, 800.0), config.ball_mass);
            let serve = reset_ball(&mut ball, config.center(), &config, &mut GameRng::new(seed));

            prop_assert!(serve.impulse.x == 10.0 || serve.impulse.x == -10.0);
            prop_assert!((-10.0..=10.0).contains(&serve.impulse.y));
            prop_assert_eq!(ball.pos, config.center());
        }

        #[test]
        fn prop_goal_lines_split_the_field(ball_x in -100.0f32..1500.0) {
            let scored = goal_scored(ball_x, 75.0, 1284.0, 20.0);
            let expected = if ball_x <= 55.0 {
                Some(Side::Enemy)
            } else if ball_x >= 1304.0 {
                Some(Side::Player)
            } else {
                None
            };
            prop_assert_eq!(scored, expected);
        }
    }
}
