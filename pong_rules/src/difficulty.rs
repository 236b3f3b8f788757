//! Difficulty ladder driven by the player's scoring streak.
//!
//! The tier is a pure function of the streak and is recomputed after every
//! point. Each recomputation requests the banner, whether or not the tier
//! moved.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::params::Params;
use crate::resources::{Banner, Events};

/// AI difficulty tier, ordered by severity
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum DifficultyTier {
    Low,
    Medium,
    High,
}

/// Map a consecutive-player-points streak to a tier
pub fn tier_for(streak: u64) -> DifficultyTier {
    if streak >= Params::HIGH_STREAK {
        DifficultyTier::High
    } else if streak >= Params::MEDIUM_STREAK {
        DifficultyTier::Medium
    } else {
        DifficultyTier::Low
    }
}

impl DifficultyTier {
    /// Seconds the enemy paddle takes to reach each new target
    pub fn move_duration(self) -> f32 {
        match self {
            DifficultyTier::Low => Params::LOW_MOVE_DURATION,
            DifficultyTier::Medium => Params::MEDIUM_MOVE_DURATION,
            DifficultyTier::High => Params::HIGH_MOVE_DURATION,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            DifficultyTier::Low => "Low difficulty",
            DifficultyTier::Medium => "Medium difficulty",
            DifficultyTier::High => "High difficulty",
        }
    }
}

/// Current tier plus the banner side effect of recomputing it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Difficulty {
    tier: DifficultyTier,
}

impl Default for Difficulty {
    fn default() -> Self {
        Self {
            tier: DifficultyTier::Low,
        }
    }
}

impl Difficulty {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tier(&self) -> DifficultyTier {
        self.tier
    }

    /// Recompute the tier from `streak` and request the banner at `anchor`
    pub fn recompute(&mut self, streak: u64, anchor: Vec2, events: &mut Events) -> DifficultyTier {
        let previous = self.tier;
        self.tier = tier_for(streak);

        tracing::info!(
            "Difficulty recomputed: {:?} -> {:?} (streak {}, changed: {})",
            previous,
            self.tier,
            streak,
            previous != self.tier
        );

        events.banner = Some(Banner::new(self.tier.label(), anchor));
        self.tier
    }

    /// Back to Low without showing the banner
    pub fn reset(&mut self) {
        self.tier = DifficultyTier::Low;
    }
}
