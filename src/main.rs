//! Desk Dash entry point
//!
//! Headless demo: runs a few scripted sessions with a naive keep-alive flap
//! policy and prints a JSON summary. The shipped game embeds `sim` behind a
//! renderer and an input layer instead.

use desk_dash::sim::{GamePhase, GameState, TickInput, tick};
use serde::Serialize;

/// Frame duration at a 60 Hz display
const FRAME_MS: f32 = 1000.0 / 60.0;
/// Hard cap per run so a lucky policy cannot loop forever
const MAX_TICKS_PER_RUN: u32 = 36_000;

#[derive(Serialize)]
struct RunSummary {
    seed: u64,
    runs: u32,
    best_score: Option<u32>,
    total_ticks: u64,
}

fn main() {
    env_logger::init();

    let seed = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(0xD0D6E);
    let runs = 3;

    let mut state = GameState::new(seed);
    state.set_board_size(800.0, 480.0);

    let mut input = TickInput::default();
    for run in 0..runs {
        for _ in 0..MAX_TICKS_PER_RUN {
            if state.phase == GamePhase::GameOver {
                break;
            }
            // Flap whenever falling through the lower half of the board
            input.jump = state.player.velocity > 0.0
                && state.player.pos.y + state.player.size.y > state.board.y * 0.6;
            tick(&mut state, &input, FRAME_MS);
        }
        log::info!("run {} ended with score {}", run + 1, state.score);

        // Jump doubles as restart once the run has ended
        input.jump = true;
        tick(&mut state, &input, FRAME_MS);
        input.jump = false;
    }

    let summary = RunSummary {
        seed,
        runs,
        best_score: state.best_score(),
        total_ticks: state.time_ticks,
    };
    match serde_json::to_string_pretty(&summary) {
        Ok(json) => println!("{json}"),
        Err(err) => log::error!("summary serialization failed: {err}"),
    }
}
