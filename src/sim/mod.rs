//! Deterministic simulation module
//!
//! All gameplay rules live here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Stable iteration order (spawn order)
//! - No rendering, input-device or file-system dependencies
//!
//! Coordinates are screen pixels, y grows downward; the formation descends
//! toward the ship at the bottom edge.

pub mod collision;
pub mod difficulty;
pub mod formation;
pub mod projectile;
pub mod state;
pub mod tick;

pub use collision::{formation_reached_bottom, resolve_projectile_hits, ship_struck};
pub use difficulty::DifficultyProfile;
pub use formation::Formation;
pub use projectile::ProjectilePool;
pub use state::{Alien, GameEvent, GamePhase, GameState, Projectile, ProjectileKind, Rect, Ship};
pub use tick::{TickInput, tick};
