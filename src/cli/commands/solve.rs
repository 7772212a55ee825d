//! `solve` command: evaluate a position and report the best move

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use crate::board::Board;
use crate::cli::output;
use crate::search::{self, Verdict, plain};

#[derive(Args, Debug)]
pub struct SolveArgs {
    /// Board as nine cells ('X', 'O', '.'), row-major from the top left
    #[arg(default_value = ".........")]
    pub position: String,

    /// Also run the unpruned reference search and report both node counts
    #[arg(long)]
    pub compare: bool,

    /// Emit the result as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Serialize)]
struct SolveReport {
    position: String,
    to_move: String,
    best_move: usize,
    score: i32,
    verdict: Verdict,
    nodes: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    unpruned_nodes: Option<u64>,
}

pub fn execute(args: SolveArgs) -> Result<()> {
    let board = Board::from_string(&args.position)?;
    let analysis = search::solve(&board)?;
    let unpruned = if args.compare {
        Some(plain::solve(&board)?)
    } else {
        None
    };

    if args.json {
        let report = SolveReport {
            position: board.encode(),
            to_move: board.current_player().to_string(),
            best_move: analysis.best_move,
            score: analysis.score,
            verdict: analysis.verdict(),
            nodes: analysis.nodes,
            unpruned_nodes: unpruned.map(|a| a.nodes),
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    print!("{}", output::render_board(&board));
    println!("{} to move", board.current_player());
    println!("best move: {}", analysis.best_move);
    println!(
        "value:     {} ({})",
        analysis.score,
        output::describe_score(analysis.score)
    );
    println!("nodes:     {}", analysis.nodes);
    if let Some(reference) = unpruned {
        println!(
            "unpruned:  {} nodes for the same result (value {}, move {})",
            reference.nodes, reference.score, reference.best_move
        );
    }
    Ok(())
}
