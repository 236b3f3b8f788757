use glam::Vec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::components::Side;
use crate::params::Params;

/// Reasons a [`Config`] cannot host a game.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("{field} must be a positive finite number, got {value}")]
    NonPositive { field: &'static str, value: f32 },

    #[error("{field} must be a non-negative finite number, got {value}")]
    Negative { field: &'static str, value: f32 },

    #[error("paddle height {paddle_height} does not fit in arena height {arena_height}")]
    PaddleTallerThanArena {
        paddle_height: f32,
        arena_height: f32,
    },

    #[error("player paddle x {player_x} must be left of enemy paddle x {enemy_x}")]
    PaddlesCrossed { player_x: f32, enemy_x: f32 },

    #[error("{side:?} goal line at x={x} lies outside the arena (width {width})")]
    GoalLineOutsideArena { side: Side, x: f32, width: f32 },
}

/// Game configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub arena_width: f32,
    pub arena_height: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub player_paddle_x: f32,
    pub enemy_paddle_inset: f32,
    pub ball_size: f32,
    pub ball_mass: f32,
    pub serve_impulse_x: f32,
    pub serve_impulse_y: f32,
    pub goal_line_margin: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            arena_width: Params::ARENA_WIDTH,
            arena_height: Params::ARENA_HEIGHT,
            paddle_width: Params::PADDLE_WIDTH,
            paddle_height: Params::PADDLE_HEIGHT,
            player_paddle_x: Params::PLAYER_PADDLE_X,
            enemy_paddle_inset: Params::ENEMY_PADDLE_INSET,
            ball_size: Params::BALL_SIZE,
            ball_mass: Params::BALL_MASS,
            serve_impulse_x: Params::SERVE_IMPULSE_X,
            serve_impulse_y: Params::SERVE_IMPULSE_Y,
            goal_line_margin: Params::GOAL_LINE_MARGIN,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get X position for a paddle's center
    pub fn paddle_x(&self, side: Side) -> f32 {
        match side {
            Side::Player => self.player_paddle_x,
            Side::Enemy => self.arena_width - self.enemy_paddle_inset,
        }
    }

    /// X coordinate the ball must reach for the opponent of `side` to score
    pub fn goal_line_x(&self, side: Side) -> f32 {
        match side {
            Side::Player => self.paddle_x(Side::Player) - self.goal_line_margin,
            Side::Enemy => self.paddle_x(Side::Enemy) + self.goal_line_margin,
        }
    }

    /// Clamp paddle Y to arena bounds
    pub fn clamp_paddle_y(&self, y: f32) -> f32 {
        let half_height = self.paddle_height / 2.0;
        y.clamp(half_height, self.arena_height - half_height)
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.arena_width / 2.0, self.arena_height / 2.0)
    }

    /// Check that the geometry can hold a game. Hosts treat an error as fatal.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [
            ("arena_width", self.arena_width),
            ("arena_height", self.arena_height),
            ("paddle_width", self.paddle_width),
            ("paddle_height", self.paddle_height),
            ("ball_size", self.ball_size),
            ("ball_mass", self.ball_mass),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::NonPositive { field, value });
            }
        }

        for (field, value) in [
            ("player_paddle_x", self.player_paddle_x),
            ("enemy_paddle_inset", self.enemy_paddle_inset),
            ("serve_impulse_x", self.serve_impulse_x),
            ("serve_impulse_y", self.serve_impulse_y),
            ("goal_line_margin", self.goal_line_margin),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::Negative { field, value });
            }
        }

        // clamp() panics when min > max
        if self.paddle_height > self.arena_height {
            return Err(ConfigError::PaddleTallerThanArena {
                paddle_height: self.paddle_height,
                arena_height: self.arena_height,
            });
        }

        let player_x = self.paddle_x(Side::Player);
        let enemy_x = self.paddle_x(Side::Enemy);
        if player_x >= enemy_x {
            return Err(ConfigError::PaddlesCrossed { player_x, enemy_x });
        }

        for side in [Side::Player, Side::Enemy] {
            let x = self.goal_line_x(side);
            if !(0.0..=self.arena_width).contains(&x) {
                return Err(ConfigError::GoalLineOutsideArena {
                    side,
                    x,
                    width: self.arena_width,
                });
            }
        }

        Ok(())
    }
}
