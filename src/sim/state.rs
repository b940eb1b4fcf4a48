//! Game state and core simulation types
//!
//! Everything the renderer needs to draw a frame lives here as plain data.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::difficulty::DifficultyProfile;
use super::formation::Formation;
use super::projectile::ProjectilePool;
use crate::consts::*;

/// Axis-aligned rectangle in screen coordinates (y grows downward).
///
/// Embedded by value in every entity; entities share no behavior beyond
/// having bounds, so there is no entity base type.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(pos: Vec2, size: Vec2) -> Self {
        Self { pos, size }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.pos.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    /// Overlap test; rects that merely touch along an edge do not collide
    pub fn intersects(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && self.right() > other.left()
            && self.top() < other.bottom()
            && self.bottom() > other.top()
    }
}

/// The player's ship
///
/// Created once per session; repositioned (not recreated) on life loss.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ship {
    pub rect: Rect,
}

impl Ship {
    /// Create a ship at bottom-center of the screen
    pub fn new(screen: Vec2) -> Self {
        let mut ship = Self {
            rect: Rect::new(Vec2::ZERO, Vec2::new(SHIP_WIDTH, SHIP_HEIGHT)),
        };
        ship.recenter(screen);
        ship
    }

    /// Advance horizontally per the held movement intents.
    ///
    /// Moves that would leave the screen are clamped, never errored; holding
    /// both directions cancels out.
    pub fn update(&mut self, move_left: bool, move_right: bool, speed: f32, dt: f32, screen_width: f32) {
        let mut dx = 0.0;
        if move_right {
            dx += speed * dt;
        }
        if move_left {
            dx -= speed * dt;
        }
        let max_x = screen_width - self.rect.size.x;
        self.rect.pos.x = (self.rect.pos.x + dx).clamp(0.0, max_x);
    }

    /// Reset to bottom-center (session start and after a life loss)
    pub fn recenter(&mut self, screen: Vec2) {
        self.rect.pos.x = (screen.x - self.rect.size.x) / 2.0;
        self.rect.pos.y = screen.y - self.rect.size.y;
    }

    /// Muzzle position; projectiles spawn centered on the ship's nose
    pub fn midtop(&self) -> Vec2 {
        Vec2::new(self.rect.pos.x + self.rect.size.x / 2.0, self.rect.pos.y)
    }
}

/// Armament kinds with independent pools
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProjectileKind {
    /// Light shot, high capacity
    Primary,
    /// Heavy shot, one in flight at a time
    Heavy,
}

impl ProjectileKind {
    pub fn size(&self) -> Vec2 {
        match self {
            ProjectileKind::Primary => Vec2::new(PRIMARY_WIDTH, PRIMARY_HEIGHT),
            ProjectileKind::Heavy => Vec2::new(HEAVY_WIDTH, HEAVY_HEIGHT),
        }
    }

    /// Maximum simultaneously in-flight projectiles of this kind
    pub fn cap(&self) -> usize {
        match self {
            ProjectileKind::Primary => PRIMARY_ALLOWED,
            ProjectileKind::Heavy => HEAVY_ALLOWED,
        }
    }
}

/// An in-flight projectile
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Projectile {
    pub kind: ProjectileKind,
    pub rect: Rect,
    /// Signed vertical speed in px/sec; negative travels up, toward the formation
    pub vel_y: f32,
}

impl Projectile {
    pub fn advance(&mut self, dt: f32) {
        self.rect.pos.y += self.vel_y * dt;
    }

    /// True once the trailing edge has crossed the off-screen threshold
    /// in the direction of travel
    pub fn offscreen(&self, screen_height: f32) -> bool {
        if self.vel_y < 0.0 {
            self.rect.bottom() <= 0.0
        } else {
            self.rect.top() >= screen_height
        }
    }
}

/// A single formation member; velocity is derived from the formation's
/// shared direction and speed
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Alien {
    pub rect: Rect,
}

impl Alien {
    pub fn new(pos: Vec2) -> Self {
        Self {
            rect: Rect::new(pos, Vec2::new(ALIEN_WIDTH, ALIEN_HEIGHT)),
        }
    }
}

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Waiting for the start control; simulation paused
    Attract,
    /// Full simulation running
    Active,
    /// Brief non-interactive pause after a hit, before resuming Active
    LifeLostPause,
    /// Run ended; terminal until the start control is activated again
    GameOver,
}

/// Discrete events emitted by the simulation for external collaborators
/// (audio, UI); drained once per frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A projectile was actually spawned (fire intents at cap emit nothing)
    Fired(ProjectileKind),
    AlienDestroyed,
    ShipHit,
    WaveCleared,
    GameOver,
}

/// Complete simulation state for one session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Screen dimensions, fixed at session start
    pub screen: Vec2,
    pub phase: GamePhase,
    /// Lives remaining, in [0, SHIP_LIMIT]
    pub lives: u8,
    pub score: u64,
    /// Wave counter, starts at 1
    pub level: u32,
    /// Monotonically non-decreasing; seeded from the persistence collaborator
    pub high_score: u64,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Ticks remaining in LifeLostPause
    pub pause_ticks: u32,
    pub difficulty: DifficultyProfile,
    pub ship: Ship,
    pub formation: Formation,
    pub projectiles: ProjectilePool,
    /// Set when the quit intent is consumed; the driver saves and exits
    pub quit_requested: bool,
    /// Events pending drain by the frontend
    #[serde(skip)]
    events: Vec<GameEvent>,
}

impl GameState {
    /// Create a session in the attract phase.
    ///
    /// The formation is spawned immediately so the attract screen has
    /// something to show, matching in-game layout.
    pub fn new(screen_width: f32, screen_height: f32, high_score: u64) -> Self {
        let screen = Vec2::new(screen_width, screen_height);
        Self {
            screen,
            phase: GamePhase::Attract,
            lives: SHIP_LIMIT,
            score: 0,
            level: 1,
            high_score,
            time_ticks: 0,
            pause_ticks: 0,
            difficulty: DifficultyProfile::base(),
            ship: Ship::new(screen),
            formation: Formation::spawn(screen),
            projectiles: ProjectilePool::default(),
            quit_requested: false,
            events: Vec::new(),
        }
    }

    /// Queue an event for the frontend
    pub fn push_event(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Drain all events queued since the last call
    pub fn take_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_intersects_overlap() {
        let a = Rect::new(Vec2::new(0.0, 0.0), Vec2::new(10.0, 10.0));
        let b = Rect::new(Vec2::new(5.0, 5.0), Vec2::new(10.0, 10.0));
        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
    }

    #[test]
    fn test_rect_touching_edges_do_not_intersect() {
        let a = Rect::new(Vec2::new(0.0, 0.0), Vec2::new(10.0, 10.0));
        let b = Rect::new(Vec2::new(10.0, 0.0), Vec2::new(10.0, 10.0));
        assert!(!a.intersects(&b));
    }

    #[test]
    fn test_ship_starts_bottom_center() {
        let ship = Ship::new(Vec2::new(1200.0, 800.0));
        assert_eq!(ship.rect.pos.x, (1200.0 - SHIP_WIDTH) / 2.0);
        assert_eq!(ship.rect.bottom(), 800.0);
    }

    #[test]
    fn test_ship_clamps_at_edges() {
        let mut ship = Ship::new(Vec2::new(1200.0, 800.0));
        // Hold right long enough to cross the whole screen
        for _ in 0..10_000 {
            ship.update(false, true, 120.0, SIM_DT, 1200.0);
        }
        assert_eq!(ship.rect.right(), 1200.0);

        for _ in 0..10_000 {
            ship.update(true, false, 120.0, SIM_DT, 1200.0);
        }
        assert_eq!(ship.rect.left(), 0.0);
    }

    #[test]
    fn test_ship_both_directions_cancel() {
        let mut ship = Ship::new(Vec2::new(1200.0, 800.0));
        let x = ship.rect.pos.x;
        ship.update(true, true, 120.0, SIM_DT, 1200.0);
        assert_eq!(ship.rect.pos.x, x);
    }

    #[test]
    fn test_projectile_offscreen_upward() {
        let mut shot = Projectile {
            kind: ProjectileKind::Primary,
            rect: Rect::new(Vec2::new(100.0, 10.0), ProjectileKind::Primary.size()),
            vel_y: -480.0,
        };
        assert!(!shot.offscreen(800.0));
        // Advance until the bottom edge clears the top of the screen
        for _ in 0..10 {
            shot.advance(SIM_DT);
        }
        assert!(shot.offscreen(800.0));
    }
}
