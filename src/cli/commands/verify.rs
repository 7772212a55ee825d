//! `verify` command: exhaustive proof that the engine never loses
//!
//! Plays the engine against every possible opponent move sequence, for one
//! or both sides, and fails if any terminal position is an engine loss.

use anyhow::{Result, bail};
use clap::Args;
use indicatif::{ProgressBar, ProgressStyle};

use crate::board::{Board, Outcome, Player};
use crate::cli::commands::SideArg;
use crate::search;

#[derive(Args, Debug)]
pub struct VerifyArgs {
    /// Restrict the sweep to one engine side (default: both)
    #[arg(long, value_enum)]
    pub engine: Option<SideArg>,
}

#[derive(Default)]
struct Tally {
    wins: u64,
    draws: u64,
    losses: u64,
}

impl Tally {
    fn games(&self) -> u64 {
        self.wins + self.draws + self.losses
    }
}

pub fn execute(args: VerifyArgs) -> Result<()> {
    let sides: Vec<Player> = match args.engine {
        Some(side) => vec![side.into()],
        None => vec![Player::X, Player::O],
    };

    for engine_side in sides {
        let bar = ProgressBar::new_spinner();
        bar.set_style(ProgressStyle::with_template("{spinner} {msg}")?);

        let mut tally = Tally::default();
        sweep(Board::new(), engine_side, &mut tally, &bar)?;

        bar.finish_with_message(format!(
            "engine as {engine_side}: {} games, {} wins, {} draws, {} losses",
            tally.games(),
            tally.wins,
            tally.draws,
            tally.losses
        ));

        if tally.losses > 0 {
            bail!("engine lost {} games as {engine_side}", tally.losses);
        }
    }
    Ok(())
}

fn sweep(board: Board, engine_side: Player, tally: &mut Tally, bar: &ProgressBar) -> Result<()> {
    match board.outcome() {
        Outcome::Win(player) if player == engine_side => tally.wins += 1,
        Outcome::Win(_) => tally.losses += 1,
        Outcome::Draw => tally.draws += 1,
        Outcome::InProgress => {
            if board.current_player() == engine_side {
                let best = search::solve(&board)?.best_move;
                sweep(board.make_move(best)?, engine_side, tally, bar)?;
            } else {
                for position in board.legal_moves() {
                    sweep(board.make_move(position)?, engine_side, tally, bar)?;
                }
            }
            return Ok(());
        }
    }

    bar.inc(1);
    bar.set_message(format!(
        "engine as {engine_side}: {} games checked",
        tally.games()
    ));
    Ok(())
}
