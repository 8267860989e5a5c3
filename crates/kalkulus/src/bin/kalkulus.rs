//! Command line front end: every subcommand prints JSON on stdout.

use clap::{Parser, Subcommand};
use kalkulus::{Endpoint, KalkulusError};
use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "kalkulus")]
#[command(about = "Drive interactive proof calculi over sealed JSON states")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List the available calculi
    Calculi,

    /// Parse a formula into a sealed initial state
    Parse {
        #[arg(long)]
        calculus: String,

        /// Clause set, e.g. "a,!b;b"
        #[arg(long)]
        formula: String,

        /// Calculus options as JSON
        #[arg(long)]
        params: Option<String>,
    },

    /// Apply a move to a sealed state
    Move {
        #[arg(long)]
        calculus: String,

        /// State file, or "-" for stdin
        #[arg(long, default_value = "-")]
        state: PathBuf,

        /// Move descriptor as JSON
        #[arg(long = "move")]
        mv: String,
    },

    /// Check whether a sealed state is a closed proof
    Close {
        #[arg(long)]
        calculus: String,

        /// State file, or "-" for stdin
        #[arg(long, default_value = "-")]
        state: PathBuf,
    },
}

fn read_state(path: &Path) -> Result<String, KalkulusError> {
    let read = if path.as_os_str() == "-" {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf).map(|_| buf)
    } else {
        std::fs::read_to_string(path)
    };
    read.map_err(|e| {
        KalkulusError::ApiMisuse(format!("could not read state from {}: {}", path.display(), e))
    })
}

fn run(cli: Cli) -> Result<String, KalkulusError> {
    let endpoint = Endpoint::new();
    match cli.command {
        Command::Calculi => serde_json::to_string(&Endpoint::identifiers()).map_err(Into::into),
        Command::Parse {
            calculus,
            formula,
            params,
        } => endpoint.parse(&calculus, &formula, params.as_deref()),
        Command::Move { calculus, state, mv } => {
            let state = read_state(&state)?;
            endpoint.apply_move(&calculus, &state, &mv)
        }
        Command::Close { calculus, state } => {
            let state = read_state(&state)?;
            endpoint.check_close(&calculus, &state)
        }
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match run(Cli::parse()) {
        Ok(output) => {
            println!("{}", output);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{}: {}", e.kind(), e);
            ExitCode::FAILURE
        }
    }
}
