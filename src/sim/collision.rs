//! Collision detection and response
//!
//! Pairwise AABB tests between the projectile pool, the formation and the
//! ship. Evaluation order is fixed (projectile-alien, then ship-alien, then
//! alien-bottom) so scoring stays deterministic; `tick` drives it.

use super::formation::Formation;
use super::projectile::ProjectilePool;
use super::state::Ship;

/// Remove every colliding (projectile, alien) pair and return how many
/// aliens were destroyed.
///
/// Projectiles are visited in pool order and each removes at most one
/// alien per tick; ties go to the earliest-spawned alien.
pub fn resolve_projectile_hits(pool: &mut ProjectilePool, formation: &mut Formation) -> u32 {
    let mut destroyed = 0;

    let mut i = 0;
    while i < pool.shots().len() {
        let shot_rect = pool.shots()[i].rect;
        let hit = formation
            .aliens()
            .iter()
            .position(|a| a.rect.intersects(&shot_rect));

        match hit {
            Some(j) => {
                formation.remove(j);
                pool.remove(i);
                destroyed += 1;
                // The next shot shifted into slot i
            }
            None => i += 1,
        }
    }

    destroyed
}

/// True if any formation member overlaps the ship
pub fn ship_struck(ship: &Ship, formation: &Formation) -> bool {
    formation.aliens().iter().any(|a| a.rect.intersects(&ship.rect))
}

/// True if the formation has descended to the bottom of the screen;
/// treated identically to a ship strike
pub fn formation_reached_bottom(formation: &Formation, screen_height: f32) -> bool {
    formation.reached_bottom(screen_height)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::sim::state::ProjectileKind;
    use glam::Vec2;

    const SCREEN: Vec2 = Vec2::new(1200.0, 800.0);

    /// A shot aimed dead-center at the alien at grid position (col, row)
    fn shot_at(pool: &mut ProjectilePool, col: f32, row: f32) {
        let x = ALIEN_WIDTH + col * 2.0 * ALIEN_WIDTH + ALIEN_WIDTH / 2.0;
        let y = ALIEN_HEIGHT + row * 2.0 * ALIEN_HEIGHT + ALIEN_HEIGHT;
        pool.fire(ProjectileKind::Primary, Vec2::new(x, y), BASE_PRIMARY_SPEED);
    }

    #[test]
    fn test_hit_removes_both() {
        let mut formation = Formation::spawn(SCREEN);
        let mut pool = ProjectilePool::default();
        let count = formation.len();

        shot_at(&mut pool, 0.0, 0.0);
        let destroyed = resolve_projectile_hits(&mut pool, &mut formation);

        assert_eq!(destroyed, 1);
        assert_eq!(formation.len(), count - 1);
        assert!(pool.is_empty());
    }

    #[test]
    fn test_one_alien_per_projectile() {
        let mut formation = Formation::spawn(SCREEN);
        let mut pool = ProjectilePool::default();
        let count = formation.len();

        // A heavy shot destroys exactly one alien and is consumed with it
        pool.fire(
            ProjectileKind::Heavy,
            Vec2::new(ALIEN_WIDTH + ALIEN_WIDTH / 2.0, 2.0 * ALIEN_HEIGHT),
            BASE_HEAVY_SPEED,
        );
        let destroyed = resolve_projectile_hits(&mut pool, &mut formation);

        assert_eq!(destroyed, 1);
        assert_eq!(formation.len(), count - 1);
    }

    #[test]
    fn test_independent_shots_all_score() {
        let mut formation = Formation::spawn(SCREEN);
        let mut pool = ProjectilePool::default();

        shot_at(&mut pool, 0.0, 0.0);
        shot_at(&mut pool, 1.0, 0.0);
        shot_at(&mut pool, 2.0, 1.0);
        let destroyed = resolve_projectile_hits(&mut pool, &mut formation);

        assert_eq!(destroyed, 3);
        assert!(pool.is_empty());
    }

    #[test]
    fn test_miss_leaves_everything() {
        let mut formation = Formation::spawn(SCREEN);
        let mut pool = ProjectilePool::default();
        let count = formation.len();

        // Fired from the ship's row, far below the formation
        pool.fire(ProjectileKind::Primary, Vec2::new(600.0, 752.0), BASE_PRIMARY_SPEED);
        let destroyed = resolve_projectile_hits(&mut pool, &mut formation);

        assert_eq!(destroyed, 0);
        assert_eq!(formation.len(), count);
        assert_eq!(pool.count(ProjectileKind::Primary), 1);
    }

    #[test]
    fn test_ship_struck_detects_overlap() {
        let mut formation = Formation::spawn(SCREEN);
        let ship = Ship::new(SCREEN);
        assert!(!ship_struck(&ship, &formation));

        // Drop the formation onto the ship's row
        while !formation.reached_bottom(SCREEN.y) {
            formation.drop_and_turn();
        }
        assert!(ship_struck(&ship, &formation));
    }

    #[test]
    fn test_bottom_contact() {
        let mut formation = Formation::spawn(SCREEN);
        assert!(!formation_reached_bottom(&formation, SCREEN.y));
        while !formation.reached_bottom(SCREEN.y) {
            formation.drop_and_turn();
        }
        assert!(formation_reached_bottom(&formation, SCREEN.y));
    }
}
