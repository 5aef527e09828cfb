use std::thread;
use std::time::{Duration, Instant};

use ratatui::backend::Backend;
use ratatui::Terminal;
use tracing::{info, trace};

use crate::error::Result;
use crate::game::{Flow, GameState, TickEvent};
use crate::input::InputSource;
use crate::renderer::Renderer;

/// Runs poll → update → render once per `tick_interval` until the player exits.
///
/// Each cycle consumes at most one input and applies at most one tick.
/// The remainder of the interval is slept away after drawing.
pub fn run<B, I>(
    terminal: &mut Terminal<B>,
    input: &mut I,
    state: &mut GameState,
    renderer: &Renderer,
    tick_interval: Duration,
) -> Result<()>
where
    B: Backend,
    I: InputSource,
{
    let mut last_status = state.status;

    loop {
        let cycle_started = Instant::now();

        if let Some(game_input) = input.poll_input()? {
            if state.apply_input(game_input) == Flow::Exit {
                info!(?game_input, score = state.score, "leaving game loop");
                break;
            }
        }

        let event = state.tick();
        if event != TickEvent::Idle {
            trace!(?event, tick = state.tick_count, "tick");
        }

        if state.status != last_status {
            info!(from = ?last_status, to = ?state.status, "status changed");
            last_status = state.status;
        }

        terminal.draw(|frame| renderer.render(frame, state))?;

        pace(cycle_started, tick_interval);
    }

    Ok(())
}

/// Sleeps for whatever is left of the tick after this cycle's work.
fn pace(cycle_started: Instant, tick_interval: Duration) {
    let remaining = tick_interval.saturating_sub(cycle_started.elapsed());
    if !remaining.is_zero() {
        thread::sleep(remaining);
    }
}
