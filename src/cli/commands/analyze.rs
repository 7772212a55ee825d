//! `analyze` command: exact value of every legal move in a position

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use crate::board::Board;
use crate::cli::output;
use crate::search::{self, Verdict};

#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    /// Board as nine cells ('X', 'O', '.'), row-major from the top left.
    /// Defaults to the empty board, which yields the opening table.
    #[arg(default_value = ".........")]
    pub position: String,

    /// Emit the table as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Serialize)]
struct MoveReport {
    position: usize,
    score: i32,
    verdict: Verdict,
}

pub fn execute(args: AnalyzeArgs) -> Result<()> {
    let board = Board::from_string(&args.position)?;
    let evaluations = search::evaluate_moves(&board)?;

    if args.json {
        let reports: Vec<MoveReport> = evaluations
            .iter()
            .map(|&(position, score)| MoveReport {
                position,
                score,
                verdict: Verdict::from_score(score),
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&reports)?);
        return Ok(());
    }

    print!("{}", output::render_board(&board));
    println!("{} to move\n", board.current_player());
    println!("move  value  assessment");
    for (position, score) in evaluations {
        println!(
            "{position:>4}  {score:>5}  {}",
            output::describe_score(score)
        );
    }
    Ok(())
}
