use std::panic;
use std::path::PathBuf;
use std::process::ExitCode;
use std::thread;
use std::time::{Duration, Instant};

use clap::Parser;
use grid_snake::config::{GameConfig, THEME_CLASSIC};
use grid_snake::engine::{GameEngine, GameStatus};
use grid_snake::error::{AppError, ConfigError};
use grid_snake::input::InputHandler;
use grid_snake::logging;
use grid_snake::terminal_runtime::{TerminalSession, restore_terminal};
use grid_snake::ui::hud::HudInfo;
use tracing::{info, warn};

#[derive(Debug, Parser)]
#[command(name = "grid-snake", version, about = "Grid snake in the terminal")]
struct Cli {
    /// JSON config file; flags below override its values.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Grid width in cells.
    #[arg(long)]
    width: Option<u16>,

    /// Grid height in cells.
    #[arg(long)]
    height: Option<u16>,

    /// Frames per grid step.
    #[arg(long = "move-delay")]
    move_delay: Option<u32>,

    /// Starting body length.
    #[arg(long = "initial-length")]
    initial_length: Option<u16>,

    /// Milliseconds per frame.
    #[arg(long = "frame-ms")]
    frame_ms: Option<u64>,

    /// Seed for fruit placement.
    #[arg(long)]
    seed: Option<u64>,

    /// Eating scores but does not lengthen the snake.
    #[arg(long = "no-growth")]
    no_growth: bool,

    /// Write tracing output to this file.
    #[arg(long = "log-file")]
    log_file: Option<PathBuf>,

    /// Tracing filter directives, e.g. `grid_snake=debug`.
    #[arg(long = "log-filter")]
    log_filter: Option<String>,
}

impl Cli {
    /// Defaults, then the config file, then flags.
    fn game_config(&self) -> Result<GameConfig, ConfigError> {
        let mut config = match &self.config {
            Some(path) => GameConfig::from_file(path)?,
            None => GameConfig::default(),
        };

        if let Some(width) = self.width {
            config.grid_width = width;
        }
        if let Some(height) = self.height {
            config.grid_height = height;
        }
        if let Some(delay) = self.move_delay {
            config.move_delay_frames = delay;
        }
        if let Some(length) = self.initial_length {
            config.initial_length = length;
        }
        if let Some(frame_ms) = self.frame_ms {
            config.frame_interval_ms = frame_ms;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        if self.no_growth {
            config.grows_on_eat = false;
        }

        Ok(config)
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("grid-snake: {error}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), AppError> {
    logging::init(cli.log_file.as_deref(), cli.log_filter.as_deref())?;

    let config = cli.game_config()?;
    let frame_interval = Duration::from_millis(config.frame_interval_ms);
    let mut engine = GameEngine::new(config)?;

    install_panic_hook();
    let mut session = TerminalSession::enter()?;
    warn_if_grid_is_clipped(&session, &engine)?;

    let mut input = InputHandler::new();
    let mut best_score = 0;

    loop {
        let frame_started = Instant::now();
        best_score = best_score.max(engine.score());

        session.draw(
            &engine.snapshot(),
            &HudInfo {
                best_score,
                theme: &THEME_CLASSIC,
            },
        )?;

        let frame_input = input.poll_frame()?;
        if frame_input.quit {
            break;
        }

        if frame_input.reset && engine.status() == GameStatus::Over {
            engine.reset();
        } else {
            let _ = engine.update(frame_input.direction);
        }

        thread::sleep(frame_interval.saturating_sub(frame_started.elapsed()));
    }

    info!(best_score, "quit");
    Ok(())
}

fn warn_if_grid_is_clipped(session: &TerminalSession, engine: &GameEngine) -> Result<(), AppError> {
    let (columns, rows) = session.size()?;
    let bounds = engine.bounds();

    // Two border cells on each axis plus one HUD row.
    if bounds.width.saturating_add(2) > columns || bounds.height.saturating_add(3) > rows {
        warn!(
            columns,
            rows,
            width = bounds.width,
            height = bounds.height,
            "terminal is smaller than the grid, play field will be clipped"
        );
    }

    Ok(())
}

fn install_panic_hook() {
    let default_hook = panic::take_hook();

    panic::set_hook(Box::new(move |panic_info| {
        let _ = restore_terminal();
        default_hook(panic_info);
    }));
}
