//! Retro Invaders entry point
//!
//! Headless demo driver: runs the simulation at its fixed rate with a small
//! autopilot standing in for the input collaborator and log lines standing
//! in for the audio and rendering collaborators.

use std::thread;
use std::time::{Duration, Instant};

use retro_invaders::consts::*;
use retro_invaders::highscores::{HighScoreStore, JsonFileStore};
use retro_invaders::sim::{GameEvent, GamePhase, GameState, ProjectileKind, TickInput, tick};

/// Demo session cap: two minutes of simulated time
const MAX_TICKS: u64 = 60 * 120;

fn main() {
    env_logger::init();

    let store = JsonFileStore::new("highest_score.json");
    let mut state = GameState::new(SCREEN_WIDTH, SCREEN_HEIGHT, store.load());

    log::info!("demo session starting, high score to beat: {}", state.high_score);

    let tick_duration = Duration::from_secs_f32(SIM_DT);
    let mut ticks: u64 = 0;
    loop {
        let frame_start = Instant::now();

        let input = autopilot(&state, ticks);
        tick(&mut state, &input, SIM_DT);

        for event in state.take_events() {
            match event {
                GameEvent::Fired(ProjectileKind::Heavy) => log::debug!("heavy shot away"),
                GameEvent::Fired(ProjectileKind::Primary) => {}
                GameEvent::AlienDestroyed => log::trace!("alien down"),
                GameEvent::ShipHit => log::info!("ship hit, {} lives left", state.lives),
                GameEvent::WaveCleared => {
                    log::info!("entering wave {}, score {}", state.level, state.score);
                }
                GameEvent::GameOver => {}
            }
        }

        ticks += 1;
        if state.phase == GamePhase::GameOver || state.quit_requested || ticks >= MAX_TICKS {
            break;
        }

        // Hold the fixed rate; a renderer would draw the snapshot here
        if let Some(rest) = tick_duration.checked_sub(frame_start.elapsed()) {
            thread::sleep(rest);
        }
    }

    store.save(state.high_score);
    log::info!(
        "session over: score {}, level {}, high score {}",
        state.score,
        state.level,
        state.high_score
    );
}

/// Steer toward the alien closest to the bottom and keep firing
fn autopilot(state: &GameState, ticks: u64) -> TickInput {
    let mut input = TickInput::default();

    match state.phase {
        GamePhase::Attract => {
            input.start = true;
            return input;
        }
        GamePhase::LifeLostPause | GamePhase::GameOver => return input,
        GamePhase::Active => {}
    }

    let target = state
        .formation
        .aliens()
        .iter()
        .max_by(|a, b| a.rect.bottom().total_cmp(&b.rect.bottom()))
        .map(|a| a.rect.pos.x + a.rect.size.x / 2.0);

    if let Some(target_x) = target {
        let ship_x = state.ship.midtop().x;
        if target_x < ship_x - 4.0 {
            input.move_left = true;
        } else if target_x > ship_x + 4.0 {
            input.move_right = true;
        }
    }

    input.fire_primary = ticks % 6 == 0;
    input.fire_heavy = ticks % 300 == 0;

    input
}
