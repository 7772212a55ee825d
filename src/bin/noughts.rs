//! noughts CLI - analysis and demonstration tools for the engine
//!
//! Subcommands:
//! - solve a position and report the best move
//! - analyze every legal move in a position
//! - self-play games against an optimal or random opponent
//! - exhaustively verify that the engine never loses

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "noughts")]
#[command(version, about = "Unbeatable noughts-and-crosses engine", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate a position and report the best move
    Solve(noughts::cli::commands::solve::SolveArgs),

    /// Evaluate every legal move in a position
    Analyze(noughts::cli::commands::analyze::AnalyzeArgs),

    /// Play the engine against itself or a random opponent
    Selfplay(noughts::cli::commands::selfplay::SelfplayArgs),

    /// Exhaustively check that the engine never loses
    Verify(noughts::cli::commands::verify::VerifyArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Solve(args) => noughts::cli::commands::solve::execute(args),
        Commands::Analyze(args) => noughts::cli::commands::analyze::execute(args),
        Commands::Selfplay(args) => noughts::cli::commands::selfplay::execute(args),
        Commands::Verify(args) => noughts::cli::commands::verify::execute(args),
    }
}
