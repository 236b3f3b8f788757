//! Single-player match: the state a host engine drives each frame.
//!
//! `Game` owns every piece of gameplay truth. Renderers read it through
//! [`Game::snapshot`] and the per-frame [`Events`]; they never hold it.

use glam::Vec2;
use hecs::World;
use serde::{Deserialize, Serialize};

use crate::arena::Arena;
use crate::components::*;
use crate::config::{Config, ConfigError};
use crate::difficulty::{Difficulty, DifficultyTier};
use crate::resources::*;
use crate::systems::*;
use crate::{ball_state, create_ball, create_paddle, paddle_y, simulate, step};

/// Who moves the ball and the enemy paddle between rule ticks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PhysicsMode {
    /// Built-in integrator advances the ball and paddle moves
    #[default]
    Reference,
    /// Host engine applies `Events::serve` / `Events::enemy_move` and syncs state back
    External,
}

/// Read-only view of a frame for the rendering side
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub ball_x: f32,
    pub ball_y: f32,
    pub ball_vx: f32,
    pub ball_vy: f32,
    pub player_paddle_y: f32,
    pub enemy_paddle_y: f32,
    pub player_score: u64,
    pub enemy_score: u64,
    pub streak: u64,
    pub tier: DifficultyTier,
}

pub struct Game {
    world: World,
    time: Time,
    config: Config,
    arena: Arena,
    score: Score,
    difficulty: Difficulty,
    events: Events,
    rng: GameRng,
    physics: PhysicsMode,
    last_serve: Serve,
}

impl Game {
    /// Build a match and serve the first ball. An invalid config is fatal for the host.
    ///
    /// The opening serve sits in [`Game::events`] only until the first
    /// `update` clears it. External engines should mirror it from
    /// [`Game::last_serve`], which always holds the most recent serve.
    pub fn new(config: Config, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;

        let arena = Arena::new(&config);
        let mut world = World::new();
        let mut rng = GameRng::new(seed);
        let mut events = Events::new();

        // Create paddles
        create_paddle(&mut world, Side::Player, arena.paddle_spawn(Side::Player).y);
        create_paddle(&mut world, Side::Enemy, arena.paddle_spawn(Side::Enemy).y);

        // Create ball
        let mut ball = Ball::new(arena.center(), Vec2::ZERO, config.ball_mass);
        let serve = reset_ball(&mut ball, arena.center(), &config, &mut rng);
        events.serve = Some(serve);
        create_ball(&mut world, ball.pos, ball.vel, ball.mass);

        tracing::debug!(
            "New game on {}x{} arena (seed {})",
            arena.width(),
            arena.height(),
            seed
        );

        Ok(Self {
            world,
            time: Time::new(),
            config,
            arena,
            score: Score::new(),
            difficulty: Difficulty::new(),
            events,
            rng,
            physics: PhysicsMode::default(),
            last_serve: serve,
        })
    }

    pub fn with_physics(mut self, physics: PhysicsMode) -> Self {
        self.physics = physics;
        self
    }

    /// Per-frame entry point, `current_time` in seconds on the host clock
    pub fn update(&mut self, current_time: f64) -> &Events {
        let dt = self.time.advance_to(current_time);

        step(
            &mut self.world,
            &self.config,
            &mut self.score,
            &mut self.difficulty,
            &mut self.events,
            &mut self.rng,
        );

        if self.physics == PhysicsMode::Reference {
            simulate(
                &mut self.world,
                dt,
                &self.config,
                &self.arena,
                &mut self.score,
                &mut self.difficulty,
                &mut self.events,
                &mut self.rng,
            );
        }

        if let Some(serve) = self.events.serve {
            self.last_serve = serve;
        }
        &self.events
    }

    /// Per-sample pointer entry point
    pub fn on_pointer_moved(&mut self, position: Vec2) {
        apply_pointer(&mut self.world, &self.config, position.y);
    }

    /// Mirror the host engine's ball body into the rules
    pub fn sync_ball(&mut self, pos: Vec2, vel: Vec2) {
        for (_entity, ball) in self.world.query_mut::<&mut Ball>() {
            ball.set_position(pos);
            ball.set_velocity(vel);
        }
    }

    /// Mirror the host engine's enemy paddle into the rules
    pub fn sync_enemy_paddle(&mut self, y: f32) {
        for (_entity, paddle) in self.world.query_mut::<&mut Paddle>() {
            if paddle.side == Side::Enemy {
                paddle.y = self.config.clamp_paddle_y(y);
            }
        }
    }

    /// Zero the scores, drop back to Low without a banner and serve again
    pub fn new_game(&mut self) -> &Events {
        self.score.reset();
        self.difficulty.reset();
        self.events.clear();

        for (_entity, (paddle, motion)) in self
            .world
            .query_mut::<(&mut Paddle, &mut PaddleMotion)>()
        {
            paddle.y = self.arena.paddle_spawn(paddle.side).y;
            motion.cancel();
        }

        let center = self.arena.center();
        for (_entity, ball) in self.world.query_mut::<&mut Ball>() {
            let serve = reset_ball(ball, center, &self.config, &mut self.rng);
            self.events.serve = Some(serve);
            self.last_serve = serve;
        }

        tracing::debug!("Scores reset for a new game");
        &self.events
    }

    pub fn snapshot(&self) -> Snapshot {
        let center = self.arena.center();
        let (ball_pos, ball_vel) = ball_state(&self.world).unwrap_or((center, Vec2::ZERO));

        Snapshot {
            ball_x: ball_pos.x,
            ball_y: ball_pos.y,
            ball_vx: ball_vel.x,
            ball_vy: ball_vel.y,
            player_paddle_y: paddle_y(&self.world, Side::Player).unwrap_or(center.y),
            enemy_paddle_y: paddle_y(&self.world, Side::Enemy).unwrap_or(center.y),
            player_score: self.score.player,
            enemy_score: self.score.enemy,
            streak: self.score.streak,
            tier: self.difficulty.tier(),
        }
    }

    pub fn events(&self) -> &Events {
        &self.events
    }

    /// Most recent serve, including the opening one
    pub fn last_serve(&self) -> Serve {
        self.last_serve
    }

    pub fn score(&self) -> Score {
        self.score
    }

    pub fn tier(&self) -> DifficultyTier {
        self.difficulty.tier()
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn arena(&self) -> &Arena {
        &self.arena
    }

    pub fn world(&self) -> &World {
        &self.world
    }
}
