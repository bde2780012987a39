mod config;
mod terminal_runner;

use std::io;
use std::path::PathBuf;

use clap::Parser;
use common::games::SessionRng;
use common::games::tictactoe::{FirstPlayerMode, TicTacToeGameState};
use common::{log, logger};

use config::{CONFIG_FILE, Config, get_config_manager};
use terminal_runner::{RunnerError, TerminalRunner};

#[derive(Parser, Debug)]
#[command(name = "tictactoe", about = "Play tic-tac-toe against an alpha-beta search")]
struct Args {
    /// YAML config file; missing means defaults
    #[arg(long, default_value = CONFIG_FILE)]
    config: PathBuf,

    /// human, ai or random
    #[arg(long)]
    first_player: Option<FirstPlayerMode>,

    /// Seed for the random first-player draw
    #[arg(long)]
    seed: Option<u64>,

    /// Print the AI's score after each of its moves
    #[arg(long)]
    show_scores: bool,

    /// Log game events to stderr
    #[arg(long)]
    verbose: bool,

    #[arg(long)]
    use_log_prefix: bool,
}

/// Command-line flags win over the config file.
fn apply_args(mut config: Config, args: &Args) -> Config {
    if let Some(first_player) = args.first_player {
        config.game.first_player = first_player;
    }
    if args.show_scores {
        config.game.show_scores = true;
    }
    if args.verbose {
        config.log.enabled = true;
    }
    if args.use_log_prefix {
        config.log.prefix = Some("TicTacToe".to_string());
    }
    config
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let config = get_config_manager(&args.config).get_config()?;
    let config = apply_args(config, &args);

    if config.log.enabled {
        logger::init_logger(config.log.prefix.clone());
    }

    let mut rng = match args.seed {
        Some(seed) => SessionRng::new(seed),
        None => SessionRng::from_random(),
    };
    let mut state = TicTacToeGameState::with_mode(config.game.first_player, &mut rng);
    log!(
        "New game: {} moves first (mode {:?}, seed {})",
        state.current_player,
        config.game.first_player,
        rng.seed()
    );

    let stdin = io::stdin();
    let mut runner = TerminalRunner::new(stdin.lock(), io::stdout(), config.game.show_scores);

    match runner.run(&mut state) {
        Ok(_) => Ok(()),
        Err(RunnerError::InputClosed) => {
            println!();
            println!("Goodbye.");
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}
