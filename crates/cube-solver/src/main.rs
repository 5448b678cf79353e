//! CLI entry point for the cube solver.
//!
//! Usage:
//!   cube-solver solve [settings.json] [options]
//!   cube-solver solve --stdin [options]
//!   cube-solver render <state>
//!
//! Options for `solve`:
//!   --algorithm <bfs|dfs>   Override the settings file's algorithm
//!   --timeout <seconds>     Stop the search after this long
//!
//! Logs go to stderr (`RUST_LOG` or `--verbose` to see more); results are
//! printed as JSON on stdout.

use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use cube_solver::settings::{validate, SettingsError, SolveSettings};
use cube_solver::{render, solve, Algorithm, SolverResult};

#[derive(Parser)]
#[command(name = "cube-solver")]
#[command(about = "Enumerates move sequences that solve a 2x2x3 cube")]
#[command(version)]
struct Cli {
    /// Log at debug level
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Enumerate solving sequences for a settings file
    Solve {
        /// Path to the settings JSON file
        #[arg(value_name = "FILE", default_value = "settings.json")]
        file: PathBuf,

        /// Read settings from stdin instead of a file
        #[arg(long)]
        stdin: bool,

        /// Search algorithm, overriding the settings file
        #[arg(long)]
        algorithm: Option<Algorithm>,

        /// Maximum search time in seconds
        #[arg(long)]
        timeout: Option<u64>,
    },

    /// Print the cube net of a packed state
    Render {
        /// Packed state, decimal (may be negative) or 0x-prefixed hex
        #[arg(value_name = "STATE", value_parser = parse_state, allow_hyphen_values = true)]
        state: u32,
    },
}

/// Output format for a solve run
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SolveOutput {
    algorithm: Algorithm,
    count: usize,
    search_exhausted: bool,
    nodes_visited: usize,
    time_elapsed_ms: u64,
    solutions: Vec<SolutionOutput>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SolutionOutput {
    length: usize,
    moves: String,
    serials: Vec<u8>,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Solve {
            file,
            stdin,
            algorithm,
            timeout,
        } => {
            let source = if stdin { None } else { Some(file.as_path()) };
            let mut settings = match load_settings(source) {
                Ok(s) => s,
                Err(e) => fail(format!("Error loading settings: {e}")),
            };
            if timeout.is_some() {
                settings.timeout_secs = timeout;
            }

            let (problem, mut config) = match settings.build() {
                Ok(built) => built,
                Err(e) => fail(format!("Invalid settings: {e}")),
            };
            if let Some(algorithm) = algorithm {
                config.algorithm = algorithm;
                if let Err(e) = validate(&problem, &config) {
                    fail(format!("Invalid settings: {e}"));
                }
            }
            debug!("initial state\n{}", render(problem.initial.state));

            let result = solve(&problem, &config);
            print_json(&format_result(&result));
        }

        Commands::Render { state } => {
            print!("{}", render(state));
        }
    }
}

/// Read settings from `file`, or from stdin when no file is given
fn load_settings(file: Option<&Path>) -> Result<SolveSettings, SettingsError> {
    match file {
        Some(path) => SolveSettings::from_file(path),
        None => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            SolveSettings::from_json(&buffer)
        }
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn parse_state(s: &str) -> Result<u32, String> {
    let parsed = if let Some(hex) = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        u32::from_str_radix(hex, 16).map_err(|e| e.to_string())
    } else if s.starts_with('-') {
        s.parse::<i32>().map(|v| v as u32).map_err(|e| e.to_string())
    } else {
        s.parse::<u32>().map_err(|e| e.to_string())
    };
    parsed.map_err(|e| format!("invalid state `{s}`: {e}"))
}

fn format_result(result: &SolverResult) -> SolveOutput {
    SolveOutput {
        algorithm: result.algorithm,
        count: result.solutions.len(),
        search_exhausted: result.search_exhausted,
        nodes_visited: result.nodes_visited,
        time_elapsed_ms: result.time_elapsed_ms,
        solutions: result
            .solutions
            .iter()
            .map(|s| SolutionOutput {
                length: s.len(),
                moves: s.to_string(),
                serials: s.serials(),
            })
            .collect(),
    }
}

fn print_json<T: Serialize + ?Sized>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{json}"),
        Err(e) => fail(format!("Failed to serialize output: {e}")),
    }
}

fn fail(message: String) -> ! {
    eprintln!("Error: {message}");
    process::exit(1);
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_settings_from_file() {
        let sample = Path::new(env!("CARGO_MANIFEST_DIR")).join("settings.json");
        let settings = load_settings(Some(sample.as_path())).unwrap();
        assert_eq!(settings.max_depth, 2);

        let missing = Path::new(env!("CARGO_MANIFEST_DIR")).join("missing-settings.json");
        assert!(matches!(load_settings(Some(missing.as_path())), Err(SettingsError::Io(_))));
    }

    #[test]
    fn test_parse_state() {
        assert_eq!(parse_state("87652123"), Ok(87652123));
        assert_eq!(parse_state("-87652124"), Ok(-87652124i32 as u32));
        assert_eq!(parse_state("0x60af2e00"), Ok(0x60af_2e00));
        assert!(parse_state("cube").is_err());
    }
}
