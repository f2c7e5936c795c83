//! Droids CLI - play, script, and review runs.

// Allow print in the CLI binary, and unwrap in tests
#![allow(clippy::print_stdout, clippy::print_stderr)]
#![cfg_attr(test, allow(clippy::unwrap_used))]

mod cli;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

use droids::highscore::HIGHSCORE_FILE;

/// Droids - a deterministic terminal grid-pursuit game
#[derive(Parser, Debug)]
#[command(name = "droids")]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Play interactively in the terminal
    Play {
        /// Board size (default: 20, minimum 5)
        #[arg(short, long, default_value = "20")]
        board_size: u16,

        /// Random seed (default: from the clock)
        #[arg(short, long)]
        seed: Option<u64>,

        /// Safe teleports per run (default: 3)
        #[arg(short = 't', long, default_value = "3")]
        safe_teleports: u32,

        /// Highscore file
        #[arg(long, default_value = HIGHSCORE_FILE)]
        scores_file: PathBuf,
    },

    /// Run a scripted action sequence without a UI
    Run {
        /// Action keys: q w e / a . d / z s c to move, t/r to teleport,
        /// x to stop early
        actions: String,

        /// Board size (default: 20, minimum 5)
        #[arg(short, long, default_value = "20")]
        board_size: u16,

        /// Random seed (default: from the clock)
        #[arg(short, long)]
        seed: Option<u64>,

        /// Safe teleports per run (default: 3)
        #[arg(short = 't', long, default_value = "3")]
        safe_teleports: u32,

        /// Output format: text or json
        #[arg(short, long, default_value = "text")]
        format: cli::OutputFormat,

        /// Print the final board (text format only)
        #[arg(long)]
        show_board: bool,
    },

    /// Print the highscore table
    Scores {
        /// Highscore file
        #[arg(long, default_value = HIGHSCORE_FILE)]
        scores_file: PathBuf,
    },
}

fn main() -> ExitCode {
    let args = Args::parse();

    let result = match args.command {
        Commands::Play {
            board_size,
            seed,
            safe_teleports,
            scores_file,
        } => cli::play::execute(board_size, seed, safe_teleports, scores_file),

        Commands::Run {
            actions,
            board_size,
            seed,
            safe_teleports,
            format,
            show_board,
        } => cli::run::execute(&actions, board_size, seed, safe_teleports, format, show_board),

        Commands::Scores { scores_file } => cli::scores::execute(&scores_file),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
