use std::io::{self, BufRead, Write};
use std::panic;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tick_snake::config::{GameConfig, DEFAULT_TICK_INTERVAL_MS, MIN_TICK_INTERVAL_MS};
use tick_snake::error::Result;
use tick_snake::game::GameState;
use tick_snake::game_loop;
use tick_snake::input::KeyboardInput;
use tick_snake::logging::init_file_logging;
use tick_snake::renderer::Renderer;
use tick_snake::terminal_runtime::{
    cleanup_terminal_best_effort, ensure_terminal_fits, playable_bounds, TerminalSession,
};
use tracing::info;

#[derive(Debug, Parser)]
#[command(version, about = "Classic Snake in the terminal")]
struct Cli {
    /// Milliseconds between ticks.
    #[arg(
        long = "tick-ms",
        default_value_t = DEFAULT_TICK_INTERVAL_MS,
        value_parser = clap::value_parser!(u64).range(MIN_TICK_INTERVAL_MS..)
    )]
    tick_ms: u64,

    /// Seed for food placement, for reproducible games.
    #[arg(long)]
    seed: Option<u64>,

    /// Draw with the terminal's default colors only.
    #[arg(long)]
    monochrome: bool,

    /// Write tracing output to this file (filter with RUST_LOG).
    #[arg(long = "log-file", value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Start immediately instead of waiting for Enter.
    #[arg(long = "no-prompt")]
    no_prompt: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("{error}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    if let Some(path) = &cli.log_file {
        init_file_logging(path)?;
    }

    ensure_terminal_fits()?;

    let config = GameConfig::new(cli.tick_ms, cli.seed, cli.monochrome);
    info!(?config, "starting");

    if !cli.no_prompt {
        prompt_to_start()?;
    }

    install_panic_hook();

    let mut session = TerminalSession::enter()?;
    // The terminal may have been resized while the prompt waited.
    let bounds = playable_bounds(session.area()?)?;
    let mut state = match config.seed {
        Some(seed) => GameState::new_with_seed(bounds, seed),
        None => GameState::new(bounds),
    };
    info!(height = bounds.height, width = bounds.width, "board ready");

    game_loop::run(
        session.terminal_mut(),
        &mut KeyboardInput::new(),
        &mut state,
        &Renderer::new(config.theme),
        config.tick_interval,
    )?;
    drop(session);

    info!(score = state.score, reason = ?state.game_over_reason, "finished");
    println!("Final score: {}", state.score);
    Ok(())
}

fn prompt_to_start() -> io::Result<()> {
    let mut stdout = io::stdout();
    writeln!(stdout, "Starting Snake Game...")?;
    writeln!(stdout, "Use arrow keys or WASD to move, P to pause, Q to quit.")?;
    write!(stdout, "Press Enter to start...")?;
    stdout.flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(())
}

fn install_panic_hook() {
    let default_hook = panic::take_hook();

    panic::set_hook(Box::new(move |panic_info| {
        let _ = cleanup_terminal_best_effort();
        default_hook(panic_info);
    }));
}
