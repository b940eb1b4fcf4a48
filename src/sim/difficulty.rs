//! Difficulty profile and wave-clear scaler
//!
//! One value owned by the game state; components read it by reference and
//! the wave-clear scaler is the only mutation path.

use serde::{Deserialize, Serialize};

use super::state::ProjectileKind;
use crate::consts::*;

/// Movement speeds, projectile speeds and scoring values in effect right now.
///
/// Compounds across waves within a session; reset to base values on
/// session (re)start.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DifficultyProfile {
    /// Ship horizontal speed (px/sec)
    pub ship_speed: f32,
    /// Primary projectile speed (px/sec, magnitude)
    pub primary_speed: f32,
    /// Heavy projectile speed (px/sec, magnitude)
    pub heavy_speed: f32,
    /// Formation horizontal speed (px/sec)
    pub formation_speed: f32,
    /// Points awarded per destroyed alien
    pub alien_points: u64,
    /// Speed multiplier applied on wave clear
    pub speedup_scale: f32,
    /// Score multiplier applied on wave clear
    pub score_scale: f32,
}

impl Default for DifficultyProfile {
    fn default() -> Self {
        Self::base()
    }
}

impl DifficultyProfile {
    /// First-wave values
    pub fn base() -> Self {
        Self {
            ship_speed: BASE_SHIP_SPEED,
            primary_speed: BASE_PRIMARY_SPEED,
            heavy_speed: BASE_HEAVY_SPEED,
            formation_speed: BASE_FORMATION_SPEED,
            alien_points: BASE_ALIEN_POINTS,
            speedup_scale: SPEEDUP_SCALE,
            score_scale: SCORE_SCALE,
        }
    }

    /// Apply the wave-clear scaler: speeds compound, point value truncates
    /// to an integer
    pub fn increase(&mut self) {
        self.ship_speed *= self.speedup_scale;
        self.primary_speed *= self.speedup_scale;
        self.heavy_speed *= self.speedup_scale;
        self.formation_speed *= self.speedup_scale;
        self.alien_points = (self.alien_points as f32 * self.score_scale) as u64;
    }

    /// Current launch speed for a projectile kind
    pub fn projectile_speed(&self, kind: ProjectileKind) -> f32 {
        match kind {
            ProjectileKind::Primary => self.primary_speed,
            ProjectileKind::Heavy => self.heavy_speed,
        }
    }
}
