use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::components::Side;
use crate::params::Params;
use crate::systems::ai::EnemyMove;

/// Time resource fed from the host's frame clock
#[derive(Debug, Clone, Copy, Default)]
pub struct Time {
    pub dt: f32,  // Delta time for this frame
    pub now: f64, // Host clock at the last update
    started: bool,
}

impl Time {
    pub fn new() -> Self {
        Self::default()
    }

    /// Move to `current_time`. The first frame and clock regressions yield dt = 0.
    pub fn advance_to(&mut self, current_time: f64) -> f32 {
        self.dt = if self.started {
            (current_time - self.now).max(0.0) as f32
        } else {
            0.0
        };
        self.now = current_time;
        self.started = true;
        self.dt
    }
}

/// Score tracking with the player's consecutive-points streak
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    pub player: u64,
    pub enemy: u64,
    pub streak: u64, // player points since the last enemy point
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_point(&mut self, scorer: Side) {
        match scorer {
            Side::Player => {
                self.player += 1;
                self.streak += 1;
            }
            Side::Enemy => {
                self.enemy += 1;
                self.streak = 0;
            }
        }
    }

    pub fn get(&self, side: Side) -> u64 {
        match side {
            Side::Player => self.player,
            Side::Enemy => self.enemy,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Random number generator
pub struct GameRng(pub rand::rngs::StdRng);

impl GameRng {
    pub fn new(seed: u64) -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::seed_from_u64(seed))
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::new(12345)
    }
}

/// Fade timing of the difficulty banner, in seconds
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BannerTiming {
    pub fade_in: f32,
    pub hold: f32,
    pub fade_out: f32,
}

impl BannerTiming {
    pub fn total(&self) -> f32 {
        self.fade_in + self.hold + self.fade_out
    }
}

impl Default for BannerTiming {
    fn default() -> Self {
        Self {
            fade_in: Params::BANNER_FADE_IN,
            hold: Params::BANNER_HOLD,
            fade_out: Params::BANNER_FADE_OUT,
        }
    }
}

/// One-shot request to show the difficulty banner
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Banner {
    pub text: &'static str,
    pub position: Vec2,
    pub timing: BannerTiming,
}

impl Banner {
    pub fn new(text: &'static str, position: Vec2) -> Self {
        Self {
            text,
            position,
            timing: BannerTiming::default(),
        }
    }
}

/// Ball reset issued after a point: move to `position`, zero velocity, then push with `impulse`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Serve {
    pub position: Vec2,
    pub impulse: Vec2,
}

/// Events that occurred during this frame
#[derive(Debug, Clone, Default)]
pub struct Events {
    pub scored: Option<Side>,
    pub serve: Option<Serve>,
    pub banner: Option<Banner>,
    pub enemy_move: Option<EnemyMove>,
    pub ball_hit_paddle: bool,
    pub ball_hit_wall: bool,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
