use std::path::PathBuf;
use std::thread;
use std::time::Instant;

use canvas_snake::clock::TickClock;
use canvas_snake::config::{FRAME_INTERVAL, INPUT_POLL_TIMEOUT, PALETTE, TICK_INTERVAL};
use canvas_snake::error::AppError;
use canvas_snake::game::{GamePhase, GameState, TickOutcome};
use canvas_snake::input::{GameInput, InputHandler};
use canvas_snake::logging;
use canvas_snake::sound::{Silent, SoundPlayer, TerminalBell, play_best_effort};
use canvas_snake::terminal_runtime::{TerminalSession, install_panic_hook};
use clap::Parser;
use log::{LevelFilter, debug, info};

#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Do not ring the terminal bell when food is eaten.
    #[arg(long)]
    mute: bool,

    /// Seed food placement for a reproducible session.
    #[arg(long)]
    seed: Option<u64>,

    /// Write log records to this file.
    #[arg(long = "log-file", value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Lowest level written to the log file.
    #[arg(long = "log-level", value_name = "LEVEL", default_value = "info")]
    log_level: LevelFilter,
}

fn main() -> Result<(), AppError> {
    let cli = Cli::parse();
    logging::init(cli.log_file.as_deref(), cli.log_level)?;
    install_panic_hook();

    let state = match cli.seed {
        Some(seed) => GameState::new_with_seed(seed),
        None => GameState::new(),
    };
    let mut sound: Box<dyn SoundPlayer> = if cli.mute {
        Box::new(Silent)
    } else {
        Box::new(TerminalBell::stdout())
    };

    info!("Starting canvas-snake (seed: {:?}, mute: {})", cli.seed, cli.mute);

    let mut session = TerminalSession::enter()?;
    run(&mut session, state, sound.as_mut())?;

    info!("Quit");
    Ok(())
}

fn run(
    session: &mut TerminalSession,
    mut state: GameState,
    sound: &mut dyn SoundPlayer,
) -> Result<(), AppError> {
    let mut input = InputHandler::new(INPUT_POLL_TIMEOUT);
    let mut clock = TickClock::new(TICK_INTERVAL, Instant::now());

    loop {
        session.draw(&state, &PALETTE)?;

        for game_input in input.poll_inputs()? {
            match game_input {
                GameInput::Quit => return Ok(()),
                GameInput::Restart => {
                    if state.phase != GamePhase::NotStarted {
                        info!("Restart after score {}", state.score);
                        state.reset();
                        clock.restart(Instant::now());
                    }
                }
                GameInput::Direction(direction) => {
                    if !state.handle_direction_input(direction) {
                        debug!("Ignored turn {direction:?}");
                    }
                }
            }
        }

        if clock.should_tick(Instant::now()) {
            handle_tick(state.tick(), &state, sound);
        }

        thread::sleep(FRAME_INTERVAL);
    }
}

fn handle_tick(outcome: TickOutcome, state: &GameState, sound: &mut dyn SoundPlayer) {
    match outcome {
        TickOutcome::Ate => {
            debug!("Food eaten, score {}", state.score);
            play_best_effort(sound);
        }
        TickOutcome::Collided(collision) => {
            info!("Game over: {collision:?}, score {}", state.score);
        }
        TickOutcome::BoardFilled => {
            play_best_effort(sound);
            info!("Board filled, score {}", state.score);
        }
        TickOutcome::Idle | TickOutcome::Moved => {}
    }
}
