use std::io;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use connect_four::config::{AppConfig, DEFAULT_CONFIG_PATH};
use connect_four::error::ConfigError;
use connect_four::game::GameState;
use connect_four::ui::Session;

/// Exit status when the game settings are rejected.
const CONFIG_ERROR_EXIT: u8 = 2;

/// Play Connect Four in the terminal.
#[derive(Parser, Debug)]
#[command(name = "connect-four", about = "Connect Four game configuration", version)]
struct Cli {
    /// The height of the game board
    #[arg(long, allow_negative_numbers = true)]
    height: Option<i64>,

    /// The width of the game board
    #[arg(long, allow_negative_numbers = true)]
    width: Option<i64>,

    /// The number of players in the game
    #[arg(long, allow_negative_numbers = true)]
    players: Option<i64>,

    /// Path to a TOML settings file (defaults to connect_four.toml if present)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print the default settings file and exit
    #[arg(long)]
    print_config: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing();

    if cli.print_config {
        print!("{}", AppConfig::default_toml());
        return ExitCode::SUCCESS;
    }

    let game_state = match load_game(&cli) {
        Ok(state) => state,
        Err(err) => {
            tracing::error!(%err, "game settings rejected");
            eprintln!("{}", err.to_json());
            return ExitCode::from(CONFIG_ERROR_EXIT);
        }
    };

    if let Err(err) = run(game_state) {
        eprintln!("Error: {err:#}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

/// Logs go to stderr so they never interleave with the board on stdout.
fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();
}

fn load_game(cli: &Cli) -> Result<GameState, ConfigError> {
    let config = match &cli.config {
        Some(path) => AppConfig::load(path)?,
        None => AppConfig::load_or_default(Path::new(DEFAULT_CONFIG_PATH))?,
    }
    .with_overrides(cli.height, cli.width, cli.players);

    tracing::info!(
        height = config.game.height,
        width = config.game.width,
        players = config.game.players,
        "starting game"
    );
    config.game.new_game()
}

fn run(game_state: GameState) -> Result<()> {
    let stdin = io::stdin();
    let mut session = Session::new(game_state, stdin.lock(), io::stdout());
    session.run().context("running game session")?;
    Ok(())
}
