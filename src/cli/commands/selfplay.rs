//! `selfplay` command: engine vs. itself or a random opponent

use anyhow::{Context, Result, bail};
use clap::{Args, ValueEnum};
use rand::SeedableRng;
use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;

use crate::board::{Outcome, Player};
use crate::cli::commands::SideArg;
use crate::cli::output;
use crate::game::Game;
use crate::search;

/// Policy for the non-engine side
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OpponentPolicy {
    /// The opponent also plays the engine's optimal moves
    Optimal,
    /// The opponent plays uniformly random legal moves
    Random,
}

#[derive(Args, Debug)]
pub struct SelfplayArgs {
    /// Number of games to play
    #[arg(long, default_value_t = 1)]
    pub games: u32,

    /// Policy for the non-engine side
    #[arg(long, value_enum, default_value_t = OpponentPolicy::Optimal)]
    pub opponent: OpponentPolicy,

    /// Side played by the engine
    #[arg(long, value_enum, default_value_t = SideArg::X)]
    pub engine: SideArg,

    /// Seed for the random opponent
    #[arg(long, default_value_t = 42)]
    pub seed: u64,
}

pub fn execute(args: SelfplayArgs) -> Result<()> {
    let engine_side = Player::from(args.engine);
    let mut rng = StdRng::seed_from_u64(args.seed);
    // A single game gets a full trace; batches get a tally.
    let trace = args.games == 1;

    let mut wins = 0u32;
    let mut draws = 0u32;
    let mut losses = 0u32;

    for _ in 0..args.games {
        match play_one(engine_side, args.opponent, &mut rng, trace)? {
            Outcome::Win(player) if player == engine_side => wins += 1,
            Outcome::Win(_) => losses += 1,
            Outcome::Draw => draws += 1,
            Outcome::InProgress => bail!("game ended without a terminal outcome"),
        }
    }

    if !trace {
        println!(
            "{} games as {engine_side}: {wins} wins, {draws} draws, {losses} losses",
            args.games
        );
    }
    Ok(())
}

fn play_one(
    engine_side: Player,
    opponent: OpponentPolicy,
    rng: &mut StdRng,
    trace: bool,
) -> Result<Outcome> {
    let mut game = Game::new();

    loop {
        if trace {
            println!("{}", output::render_board(game.board()));
        }

        match game.outcome() {
            Outcome::InProgress => {}
            outcome => {
                if trace {
                    match outcome {
                        Outcome::Win(player) => println!("{player} wins"),
                        Outcome::Draw => println!("draw"),
                        Outcome::InProgress => {}
                    }
                }
                return Ok(outcome);
            }
        }

        let to_move = game.board().current_player();
        let position = if to_move == engine_side || opponent == OpponentPolicy::Optimal {
            search::solve(game.board())?.best_move
        } else {
            game.board()
                .legal_moves()
                .choose(rng)
                .copied()
                .context("live position has no legal moves")?
        };

        if trace {
            println!("{to_move} plays {position}\n");
        }
        game.play(position)?;
    }
}
