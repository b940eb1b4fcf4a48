//! Projectile pool: spawn caps, per-tick advance, off-screen expiry

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::state::{Projectile, ProjectileKind, Rect};

/// Owner of every in-flight projectile.
///
/// Both kinds live in one collection in spawn order; caps are tracked per
/// kind so a full primary magazine never blocks the heavy shot.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProjectilePool {
    shots: Vec<Projectile>,
}

impl ProjectilePool {
    /// Spawn a projectile of `kind` at the given muzzle position, traveling
    /// upward at `speed` px/sec.
    ///
    /// A no-op returning false when the kind is already at its cap.
    pub fn fire(&mut self, kind: ProjectileKind, muzzle: Vec2, speed: f32) -> bool {
        if self.count(kind) >= kind.cap() {
            return false;
        }

        let size = kind.size();
        // Centered on the muzzle, nose flush with it
        let pos = Vec2::new(muzzle.x - size.x / 2.0, muzzle.y - size.y);
        self.shots.push(Projectile {
            kind,
            rect: Rect::new(pos, size),
            vel_y: -speed,
        });
        true
    }

    /// Advance every projectile and drop the ones that left the screen
    pub fn update(&mut self, dt: f32, screen_height: f32) {
        for shot in &mut self.shots {
            shot.advance(dt);
        }
        self.shots.retain(|s| !s.offscreen(screen_height));
    }

    /// In-flight count for one kind
    pub fn count(&self, kind: ProjectileKind) -> usize {
        self.shots.iter().filter(|s| s.kind == kind).count()
    }

    pub fn shots(&self) -> &[Projectile] {
        &self.shots
    }

    pub fn is_empty(&self) -> bool {
        self.shots.is_empty()
    }

    pub fn clear(&mut self) {
        self.shots.clear();
    }

    /// Remove the projectile at `index`, preserving spawn order
    pub(crate) fn remove(&mut self, index: usize) -> Projectile {
        self.shots.remove(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;

    fn muzzle() -> Vec2 {
        Vec2::new(600.0, 752.0)
    }

    #[test]
    fn test_fire_respects_primary_cap() {
        let mut pool = ProjectilePool::default();
        for _ in 0..PRIMARY_ALLOWED {
            assert!(pool.fire(ProjectileKind::Primary, muzzle(), BASE_PRIMARY_SPEED));
        }
        // At cap: silently refused, count unchanged
        assert!(!pool.fire(ProjectileKind::Primary, muzzle(), BASE_PRIMARY_SPEED));
        assert_eq!(pool.count(ProjectileKind::Primary), PRIMARY_ALLOWED);
    }

    #[test]
    fn test_caps_are_independent() {
        let mut pool = ProjectilePool::default();
        for _ in 0..PRIMARY_ALLOWED {
            pool.fire(ProjectileKind::Primary, muzzle(), BASE_PRIMARY_SPEED);
        }
        // Primary being full must not block the heavy shot
        assert!(pool.fire(ProjectileKind::Heavy, muzzle(), BASE_HEAVY_SPEED));
        assert!(!pool.fire(ProjectileKind::Heavy, muzzle(), BASE_HEAVY_SPEED));
        assert_eq!(pool.count(ProjectileKind::Heavy), HEAVY_ALLOWED);
    }

    #[test]
    fn test_spawn_is_centered_on_muzzle() {
        let mut pool = ProjectilePool::default();
        pool.fire(ProjectileKind::Primary, muzzle(), BASE_PRIMARY_SPEED);

        let shot = &pool.shots()[0];
        assert_eq!(shot.rect.left(), muzzle().x - PRIMARY_WIDTH / 2.0);
        assert_eq!(shot.rect.bottom(), muzzle().y);
        assert!(shot.vel_y < 0.0);
    }

    #[test]
    fn test_update_expires_offscreen_shots() {
        let mut pool = ProjectilePool::default();
        pool.fire(ProjectileKind::Primary, Vec2::new(600.0, 20.0), BASE_PRIMARY_SPEED);

        // One second of travel takes the shot far above the screen
        for _ in 0..60 {
            pool.update(SIM_DT, 800.0);
        }
        assert!(pool.is_empty());
    }

    #[test]
    fn test_expiry_frees_cap_slot() {
        let mut pool = ProjectilePool::default();
        pool.fire(ProjectileKind::Heavy, Vec2::new(600.0, 20.0), BASE_HEAVY_SPEED);
        assert!(!pool.fire(ProjectileKind::Heavy, muzzle(), BASE_HEAVY_SPEED));

        for _ in 0..60 {
            pool.update(SIM_DT, 800.0);
        }
        assert!(pool.fire(ProjectileKind::Heavy, muzzle(), BASE_HEAVY_SPEED));
    }
}
