//! Retro Invaders - a fixed-timestep alien invasion arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, formation, collisions, game state)
//! - `highscores`: Single-integer high score persistence
//!
//! Rendering, raw input devices and audio playback are external collaborators:
//! the library exposes read-only state snapshots and drains discrete events,
//! nothing else.

pub mod highscores;
pub mod sim;

pub use highscores::{HighScoreStore, JsonFileStore};
pub use sim::{GameEvent, GamePhase, GameState, TickInput, tick};

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (60 Hz)
    pub const SIM_DT: f32 = 1.0 / 60.0;

    /// Default screen dimensions
    pub const SCREEN_WIDTH: f32 = 1200.0;
    pub const SCREEN_HEIGHT: f32 = 800.0;

    /// Ship dimensions
    pub const SHIP_WIDTH: f32 = 60.0;
    pub const SHIP_HEIGHT: f32 = 48.0;
    /// Ships per session
    pub const SHIP_LIMIT: u8 = 3;

    /// Primary projectile (light, high capacity)
    pub const PRIMARY_WIDTH: f32 = 3.0;
    pub const PRIMARY_HEIGHT: f32 = 15.0;
    pub const PRIMARY_ALLOWED: usize = 20;

    /// Heavy projectile (big, one in flight)
    pub const HEAVY_WIDTH: f32 = 30.0;
    pub const HEAVY_HEIGHT: f32 = 20.0;
    pub const HEAVY_ALLOWED: usize = 1;

    /// Alien dimensions
    pub const ALIEN_WIDTH: f32 = 40.0;
    pub const ALIEN_HEIGHT: f32 = 24.0;
    /// Vertical distance the whole formation drops on edge contact
    pub const FORMATION_DROP: f32 = 10.0;

    /// Base dynamic values (px/sec); the difficulty scaler compounds from these
    pub const BASE_SHIP_SPEED: f32 = 120.0;
    pub const BASE_PRIMARY_SPEED: f32 = 480.0;
    pub const BASE_HEAVY_SPEED: f32 = 600.0;
    pub const BASE_FORMATION_SPEED: f32 = 60.0;
    pub const BASE_ALIEN_POINTS: u64 = 50;

    /// Speed multiplier applied on every wave clear
    pub const SPEEDUP_SCALE: f32 = 1.1;
    /// Per-alien score multiplier applied on every wave clear
    pub const SCORE_SCALE: f32 = 1.5;

    /// Life-lost pause duration in ticks (0.5 seconds at 60 Hz)
    pub const LIFE_LOST_PAUSE_TICKS: u32 = 30;
}
