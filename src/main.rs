use std::path::PathBuf;
use std::time::Instant;

use clap::Parser;
use grid_snake::config::{Board, THEME_CLASSIC, TICK_INTERVAL};
use grid_snake::driver::{Control, Driver};
use grid_snake::error::AppError;
use grid_snake::game::GameState;
use grid_snake::input::TerminalEvents;
use grid_snake::logging::{self, LogLevel};
use grid_snake::terminal_runtime::GameScreen;
use log::info;

#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Seed food placement for a reproducible game.
    #[arg(long)]
    seed: Option<u64>,

    /// Write log records to this file.
    #[arg(long = "log-file", value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Minimum level of records written to the log file.
    #[arg(long = "log-level", value_enum, default_value_t)]
    log_level: LogLevel,
}

fn main() -> Result<(), AppError> {
    let cli = Cli::parse();
    logging::init(cli.log_file.as_deref(), cli.log_level)?;

    let board = Board::STANDARD;
    let state = match cli.seed {
        Some(seed) => GameState::new_with_seed(board, seed),
        None => GameState::new(board),
    };

    run(Driver::new(state, TICK_INTERVAL))
}

fn run(mut driver: Driver) -> Result<(), AppError> {
    let mut screen = GameScreen::enter()?;
    let mut events = TerminalEvents;

    driver.start(Instant::now());
    let mut redraw = true;

    loop {
        if redraw {
            let state = driver.state();
            screen.draw(&state.snapshot(), state.board(), &THEME_CLASSIC)?;
        }

        let event = driver.next_event(&mut events)?;
        match driver.handle(event, Instant::now()) {
            Control::Redraw => redraw = true,
            Control::Idle => redraw = false,
            Control::Quit => break,
        }
    }

    info!("exiting");
    Ok(())
}
