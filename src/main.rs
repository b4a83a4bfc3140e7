use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use grid_games::AppConfig;
use grid_games::modes::{SnakeMode, TicTacToeMode};
use std::fs::File;
use std::path::{Path, PathBuf};
use std::time::Duration;

#[derive(Parser)]
#[command(name = "grid_games")]
#[command(version, about = "Tic-tac-toe and snake in the terminal")]
struct Cli {
    /// Game to play
    #[arg(value_enum)]
    game: Game,

    /// JSON config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Snake grid size (cells per side)
    #[arg(long)]
    grid_size: Option<usize>,

    /// Milliseconds between snake ticks
    #[arg(long)]
    tick_ms: Option<u64>,

    /// Seed for food placement
    #[arg(long)]
    seed: Option<u64>,

    /// Write logs to this file (level from RUST_LOG, default info)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

#[derive(Clone, ValueEnum)]
enum Game {
    /// Two players share the keyboard or mouse
    TicTacToe,
    /// Steer with arrow keys or WASD
    Snake,
}

/// The terminal belongs to the TUI, so logs only go to a file
fn init_logging(path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create log file {:?}", path))?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .try_init()
        .context("Failed to initialise logger")?;
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(path) = &cli.log_file {
        init_logging(path)?;
    }

    let mut config = AppConfig::load(cli.config.as_deref()).context("Failed to load config")?;
    if let Some(grid_size) = cli.grid_size {
        config.snake.grid_size = grid_size;
    }
    if let Some(tick_ms) = cli.tick_ms {
        config.snake.tick_interval_ms = tick_ms;
    }
    if let Some(seed) = cli.seed {
        config.snake.seed = Some(seed);
    }
    config.validate().context("Invalid configuration")?;

    let render_interval = Duration::from_millis(config.render_interval_ms);

    match cli.game {
        Game::TicTacToe => {
            let mut mode = TicTacToeMode::new(render_interval);
            mode.run().await?;
        }
        Game::Snake => {
            let mut mode = SnakeMode::new(config.snake, render_interval);
            mode.run().await?;
        }
    }

    Ok(())
}
