use clap::Parser;
use std::path::PathBuf;

/// Computes a near-optimal Wordle decision tree and either dumps it in
/// full or traverses it for a single target solution.
#[derive(Parser)]
#[clap(version, about)]
pub struct CmdArgs {
    /// Path to the newline-delimited list of valid guesses.
    pub valid_guesses_path: PathBuf,

    /// Path to the newline-delimited list of solutions. Every solution
    /// must also appear in the valid guesses list.
    pub solutions_path: PathBuf,

    /// If given, print only the guess sequence for this solution.
    pub target_solution: Option<String>,

    /// Maximum number of candidate guesses considered at each search node.
    #[clap(short, long, default_value_t = 8)]
    pub prune_limit: usize,

    /// Raise the log level to show per-node search progress.
    #[clap(short, long)]
    pub verbose: bool,
}
