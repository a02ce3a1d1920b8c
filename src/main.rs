//! Fractured Forest headless driver
//!
//! Plays scripted runs against the sim at the nominal frame cadence and
//! dumps the terminal snapshot as JSON. Stands in for the presentation
//! layer: it owns the clock, samples input once per frame, and only reads
//! the sim back through snapshots.

use fractured_forest::consts::FRAME_RATE;
use fractured_forest::sim::{Outcome, RunState, TickInput, tick};
use fractured_forest::tuning::Tuning;

/// Milliseconds of simulated time per logical frame
const FRAME_MS: i64 = 1000 / FRAME_RATE as i64;

/// Hard cap so a stuck bot cannot spin forever
const MAX_FRAMES: u64 = 60 * 60 * FRAME_RATE as u64;

/// A simple scripted pilot: walk right, hop when stuck against something,
/// and nudge the season wheel whenever hazards are currently lethal.
fn pilot(state: &RunState, frame: u64, last_x: i32) -> TickInput {
    let room = state.current_room();
    let hazards_lethal =
        room.hazard_active(state.season(), state.modifiers.brittle_thorns);
    let stuck = state.actor.rect.left() == last_x;
    TickInput {
        right: true,
        left: false,
        jump: state.actor.on_ground && (stuck || frame % 45 == 0),
        cycle_season: hazards_lethal,
    }
}

fn play_run(seed: u64) -> RunState {
    let mut state = RunState::new(seed, 0, Tuning::default());
    let mut now_ms = 0;
    let mut last_x = state.actor.rect.left();

    for frame in 0..MAX_FRAMES {
        now_ms += FRAME_MS;
        let input = pilot(&state, frame, last_x);
        last_x = state.actor.rect.left();
        tick(&mut state, &input, now_ms);
        if state.is_terminal() {
            break;
        }
    }

    let snapshot = state.snapshot(now_ms);
    match serde_json::to_string_pretty(&snapshot) {
        Ok(json) => println!("{json}"),
        Err(e) => log::error!("snapshot serialization failed: {e}"),
    }
    state
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let seed = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or_else(|| {
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .map(|d| d.as_millis() as u64)
                .unwrap_or(0)
        });

    log::info!("piloting seed {seed}");
    let state = play_run(seed);
    match state.outcome {
        Outcome::Won => log::info!("cleared all {} rooms", state.rooms.len()),
        Outcome::Failed => log::info!(
            "run ended in room {}/{}",
            state.room_index + 1,
            state.rooms.len()
        ),
        Outcome::InProgress => log::warn!("frame cap reached before a terminal outcome"),
    }
}
