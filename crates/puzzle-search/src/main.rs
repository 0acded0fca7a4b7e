//! CLI entry point for the puzzle solver.
//!
//! Usage:
//!   puzzle-search solve <puzzle.json> [options]
//!   puzzle-search solve --stdin [options]
//!
//! Options:
//!   --strategy <s>      depth-first or breadth-first (default: breadth-first)
//!   --timeout <secs>    Give up after this many seconds
//!   --max-nodes <n>     Give up after creating this many search nodes
//!   -v, -vv, -vvv       Log to stderr at info, debug or trace level
//!
//! The puzzle file holds one definition tagged by `kind`, for example
//! `{"kind": "word_ladder", "from": "cold", "to": "warm", "dictionary": [...]}`.

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use clap::{Parser, Subcommand};
use log::{error, LevelFilter};
use serde::Serialize;

use puzzle_search::{
    solve, AnyPuzzle, Puzzle, PuzzleDefinition, SearchConfig, SearchReport, SearchStatus, Strategy,
};

#[derive(Parser)]
#[command(name = "puzzle-search")]
#[command(about = "Depth-first and breadth-first solver for state-space puzzles")]
#[command(version)]
struct Cli {
    /// Increase log verbosity (repeatable)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search for a solution to one puzzle
    Solve {
        /// Path to puzzle JSON file (use --stdin to read from stdin)
        #[arg(value_name = "FILE")]
        file: Option<PathBuf>,

        /// Read puzzle from stdin instead of file
        #[arg(long)]
        stdin: bool,

        /// Traversal order
        #[arg(long, value_enum, default_value = "breadth-first")]
        strategy: Strategy,

        /// Maximum search time in seconds
        #[arg(long)]
        timeout: Option<u64>,

        /// Maximum number of search nodes to create
        #[arg(long)]
        max_nodes: Option<usize>,
    },
}

/// Output format for a search
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SolveOutput<'a, P> {
    kind: &'static str,
    strategy: Strategy,
    solved: bool,
    status: SearchStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    moves: Option<usize>,
    nodes_created: usize,
    states_expanded: usize,
    time_elapsed_ms: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    path: Option<Vec<&'a P>>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(match cli.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        })
        .init();

    match cli.command {
        Commands::Solve {
            file,
            stdin,
            strategy,
            timeout,
            max_nodes,
        } => {
            // Read puzzle JSON
            let json_content = if stdin {
                let mut buffer = String::new();
                if let Err(e) = io::stdin().read_to_string(&mut buffer) {
                    error!("Failed to read from stdin: {}", e);
                    return ExitCode::from(2);
                }
                buffer
            } else if let Some(path) = file {
                match fs::read_to_string(&path) {
                    Ok(content) => content,
                    Err(e) => {
                        error!("Failed to read file {:?}: {}", path, e);
                        return ExitCode::from(2);
                    }
                }
            } else {
                error!("Must provide either a file path or --stdin");
                return ExitCode::from(2);
            };

            // Parse and validate puzzle
            let definition: PuzzleDefinition = match serde_json::from_str(&json_content) {
                Ok(d) => d,
                Err(e) => {
                    error!("Error parsing puzzle JSON: {}", e);
                    return ExitCode::from(2);
                }
            };
            let puzzle = match definition.build() {
                Ok(p) => p,
                Err(e) => {
                    error!("Invalid {} puzzle: {}", definition.kind(), e);
                    return ExitCode::from(2);
                }
            };

            let config = SearchConfig {
                max_nodes,
                timeout: timeout.map(Duration::from_secs),
            };

            let rendered = match puzzle {
                AnyPuzzle::SlidingTile(p) => run(definition.kind(), p, strategy, &config),
                AnyPuzzle::PegSolitaire(p) => run(definition.kind(), p, strategy, &config),
                AnyPuzzle::WordLadder(p) => run(definition.kind(), p, strategy, &config),
                AnyPuzzle::Sudoku(p) => run(definition.kind(), p, strategy, &config),
            };

            match rendered {
                Ok((json, solved)) => {
                    println!("{}", json);
                    if solved {
                        ExitCode::SUCCESS
                    } else {
                        ExitCode::from(1)
                    }
                }
                Err(e) => {
                    error!("Failed to serialize result: {}", e);
                    ExitCode::from(2)
                }
            }
        }
    }
}

/// Search one puzzle and render the report as pretty JSON.
fn run<P: Puzzle + Serialize>(
    kind: &'static str,
    puzzle: P,
    strategy: Strategy,
    config: &SearchConfig,
) -> serde_json::Result<(String, bool)> {
    let report = solve(puzzle, strategy, config);
    let output = format_result(kind, strategy, &report);
    Ok((serde_json::to_string_pretty(&output)?, report.is_solved()))
}

fn format_result<'a, P>(
    kind: &'static str,
    strategy: Strategy,
    report: &'a SearchReport<P>,
) -> SolveOutput<'a, P> {
    SolveOutput {
        kind,
        strategy,
        solved: report.is_solved(),
        status: report.status,
        moves: report.solution.as_ref().map(|s| s.transitions()),
        nodes_created: report.nodes_created,
        states_expanded: report.states_expanded,
        time_elapsed_ms: report.time_elapsed_ms,
        path: report.solution.as_ref().map(|s| s.puzzles().collect()),
    }
}
