//! Fixed timestep simulation tick
//!
//! One logical tick: consume intents, update entities, resolve collisions
//! in a fixed order, advance the game-state machine.

use super::collision;
use super::difficulty::DifficultyProfile;
use super::formation::Formation;
use super::state::{GameEvent, GamePhase, GameState, ProjectileKind};
use crate::consts::*;

/// Input intents for a single tick (already debounced by the frontend).
///
/// Movement intents are held flags; fire/start/quit are one-shots the
/// frontend clears after each tick.
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    pub move_left: bool,
    pub move_right: bool,
    pub fire_primary: bool,
    pub fire_heavy: bool,
    /// Start control: begins a session from Attract or GameOver
    pub start: bool,
    /// Quit request; the driver saves the high score and exits
    pub quit: bool,
}

/// Advance the game state by one fixed timestep
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    if input.quit {
        state.quit_requested = true;
    }

    match state.phase {
        GamePhase::Attract | GamePhase::GameOver => {
            // Only the start control is live
            if input.start {
                start_session(state);
            }
            return;
        }
        GamePhase::LifeLostPause => {
            // Entity updates are suspended; the deadline is held in state
            // and checked here so input and rendering stay responsive
            state.pause_ticks = state.pause_ticks.saturating_sub(1);
            if state.pause_ticks == 0 {
                state.phase = GamePhase::Active;
            }
            return;
        }
        GamePhase::Active => {}
    }

    state.time_ticks += 1;

    let ship_speed = state.difficulty.ship_speed;
    state
        .ship
        .update(input.move_left, input.move_right, ship_speed, dt, state.screen.x);

    // Fire intents; at-cap requests are silently dropped
    if input.fire_primary {
        fire(state, ProjectileKind::Primary);
    }
    if input.fire_heavy {
        fire(state, ProjectileKind::Heavy);
    }

    state.projectiles.update(dt, state.screen.y);

    // Edge contact is evaluated once, on last tick's positions: one contact
    // produces exactly one formation-wide drop-and-turn
    if state.formation.reached_edge(state.screen.x) {
        state.formation.drop_and_turn();
    }
    state.formation.update(state.difficulty.formation_speed, dt);

    // 1. Projectile-alien: score with the point value in effect this wave
    let destroyed = collision::resolve_projectile_hits(&mut state.projectiles, &mut state.formation);
    if destroyed > 0 {
        state.score += state.difficulty.alien_points * u64::from(destroyed);
        if state.score > state.high_score {
            state.high_score = state.score;
        }
        for _ in 0..destroyed {
            state.push_event(GameEvent::AlienDestroyed);
        }
    }

    // 2 + 3. Ship strike and formation landing are treated identically and
    // share one life-loss transition per tick
    if collision::ship_struck(&state.ship, &state.formation)
        || collision::formation_reached_bottom(&state.formation, state.screen.y)
    {
        life_lost(state);
        return;
    }

    // Wave clear: fresh formation, harder profile; the ship keeps its place
    if state.formation.is_cleared() {
        state.projectiles.clear();
        state.formation = Formation::spawn(state.screen);
        state.difficulty.increase();
        state.level += 1;
        state.push_event(GameEvent::WaveCleared);
        log::info!("wave cleared, level {} score {}", state.level, state.score);
    }
}

fn fire(state: &mut GameState, kind: ProjectileKind) {
    let speed = state.difficulty.projectile_speed(kind);
    if state.projectiles.fire(kind, state.ship.midtop(), speed) {
        state.push_event(GameEvent::Fired(kind));
    }
}

/// Attract/GameOver -> Active: reset session state and difficulty, rebuild
/// the field, recenter the ship. Hiding the cursor is the renderer's job;
/// it watches the phase tag.
fn start_session(state: &mut GameState) {
    state.lives = SHIP_LIMIT;
    state.score = 0;
    state.level = 1;
    state.difficulty = DifficultyProfile::base();
    state.projectiles.clear();
    state.formation = Formation::spawn(state.screen);
    state.ship.recenter(state.screen);
    state.pause_ticks = 0;
    state.phase = GamePhase::Active;
    log::info!("session started with {} lives", state.lives);
}

/// Ship struck by an alien, or the formation reached the bottom edge
fn life_lost(state: &mut GameState) {
    state.lives = state.lives.saturating_sub(1);
    state.push_event(GameEvent::ShipHit);

    if state.lives > 0 {
        state.projectiles.clear();
        state.formation = Formation::spawn(state.screen);
        state.ship.recenter(state.screen);
        state.pause_ticks = LIFE_LOST_PAUSE_TICKS;
        state.phase = GamePhase::LifeLostPause;
        log::info!("ship lost, {} lives remain", state.lives);
    } else {
        // Terminal: the field is cleared but the ship keeps its final
        // position for the game-over screen
        state.projectiles.clear();
        state.formation = Formation::empty();
        state.phase = GamePhase::GameOver;
        state.push_event(GameEvent::GameOver);
        log::info!("game over, final score {}", state.score);
    }
}
