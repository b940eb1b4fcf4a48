//! Alien formation: layout, collective movement and boundary rules

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::state::Alien;
use crate::consts::*;

/// The collective group of aliens sharing one direction and speed.
///
/// Instantiated fresh at session start and after every wave clear or life
/// loss; the previous instance is discarded, never reused.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Formation {
    aliens: Vec<Alien>,
    /// +1.0 moving right, -1.0 moving left; uniform across all members
    direction: f32,
}

impl Formation {
    /// Lay out a fresh wave in a grid.
    ///
    /// Starts at (alien_width, alien_height) and advances by two widths per
    /// column and two heights per row (one alien of gap each way), filling
    /// columns while there is room before the right margin and rows while
    /// there is room above the ship's zone. The spacing is a fixed design
    /// constant, not configurable.
    pub fn spawn(screen: Vec2) -> Self {
        let mut aliens = Vec::new();
        let mut y = ALIEN_HEIGHT;
        while y < screen.y - 3.0 * ALIEN_HEIGHT {
            let mut x = ALIEN_WIDTH;
            while x < screen.x - 2.0 * ALIEN_WIDTH {
                aliens.push(Alien::new(Vec2::new(x, y)));
                x += 2.0 * ALIEN_WIDTH;
            }
            y += 2.0 * ALIEN_HEIGHT;
        }

        Self {
            aliens,
            direction: 1.0,
        }
    }

    /// An empty formation, for the frozen game-over screen
    pub fn empty() -> Self {
        Self {
            aliens: Vec::new(),
            direction: 1.0,
        }
    }

    /// Advance every member horizontally by the shared direction and speed
    pub fn update(&mut self, speed: f32, dt: f32) {
        let dx = self.direction * speed * dt;
        for alien in &mut self.aliens {
            alien.rect.pos.x += dx;
        }
    }

    /// True if any member's leading edge has reached the screen boundary
    /// on the side the formation is moving toward
    pub fn reached_edge(&self, screen_width: f32) -> bool {
        if self.direction > 0.0 {
            self.aliens.iter().any(|a| a.rect.right() >= screen_width)
        } else {
            self.aliens.iter().any(|a| a.rect.left() <= 0.0)
        }
    }

    /// Drop the entire formation and flip its direction.
    ///
    /// A single atomic formation-wide event: the caller evaluates
    /// `reached_edge` once per tick, so one edge contact produces exactly
    /// one drop regardless of how many members touch the boundary.
    pub fn drop_and_turn(&mut self) {
        for alien in &mut self.aliens {
            alien.rect.pos.y += FORMATION_DROP;
        }
        self.direction = -self.direction;
    }

    /// Wave-clear query: all members removed by collisions
    pub fn is_cleared(&self) -> bool {
        self.aliens.is_empty()
    }

    /// True if any member's bottom edge has reached the bottom of the screen
    pub fn reached_bottom(&self, screen_height: f32) -> bool {
        self.aliens.iter().any(|a| a.rect.bottom() >= screen_height)
    }

    pub fn direction(&self) -> f32 {
        self.direction
    }

    pub fn aliens(&self) -> &[Alien] {
        &self.aliens
    }

    pub fn len(&self) -> usize {
        self.aliens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.aliens.is_empty()
    }

    /// Remove the member at `index`, preserving spawn order
    pub(crate) fn remove(&mut self, index: usize) -> Alien {
        self.aliens.remove(index)
    }
}
