//! Tablero CLI
//!
//! Leaderboard viewer for model evaluation scores.
//!
//! # Usage
//!
//! ```bash
//! # Summary table
//! tablero show leaderboard.json
//!
//! # Filtered and sorted
//! tablero show leaderboard.json --family qwen --tag math --sort math --baseline base
//!
//! # Detailed per-task table
//! tablero tasks leaderboard.json --domain math
//!
//! # Dataset overview
//! tablero info leaderboard.json
//! ```

use clap::Parser;
use std::process::ExitCode;
use tablero::cli::{run_command, Cli};

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run_command(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
