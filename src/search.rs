//! Game-tree search: exhaustive minimax over the board model
//!
//! Two interchangeable evaluators live here. [`alphabeta`] is the engine
//! proper: depth-first minimax with alpha-beta pruning. [`plain`] is the
//! same recursion without pruning, kept as a reference so the pruned
//! search can be checked against it and its node savings demonstrated.
//!
//! Scores are taken from the perspective of the player to move at the
//! search root (the maximizer). A forced win at ply `d` scores
//! `WIN_BASE - d` and a forced loss `-(WIN_BASE - d)`, so the sign alone
//! classifies a position while quicker wins and longer defenses rank
//! higher. A draw scores 0.

pub mod alphabeta;
pub mod plain;

use std::fmt;

use serde::Serialize;

use crate::board::{Board, Outcome, Player};
use crate::error::{Error, Result};

pub use alphabeta::{evaluate_moves, solve};

/// Base for depth-adjusted terminal scores. The game lasts at most 9 plies,
/// so every reachable score has magnitude strictly below this.
pub(crate) const WIN_BASE: i32 = 10;

/// Infinite bound for the alpha-beta window
pub(crate) const INF: i32 = WIN_BASE;

/// Result of solving a position: the position's value, one move that
/// achieves it, and the number of nodes the search visited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Analysis {
    pub score: i32,
    pub best_move: usize,
    pub nodes: u64,
}

impl Analysis {
    /// Classify the score as a win, draw, or loss for the side to move
    pub fn verdict(&self) -> Verdict {
        Verdict::from_score(self.score)
    }
}

/// Win/draw/loss classification of a score, from the perspective of the
/// player to move at the search root
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    Win,
    Draw,
    Loss,
}

impl Verdict {
    pub fn from_score(score: i32) -> Verdict {
        match score.cmp(&0) {
            std::cmp::Ordering::Greater => Verdict::Win,
            std::cmp::Ordering::Equal => Verdict::Draw,
            std::cmp::Ordering::Less => Verdict::Loss,
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Win => write!(f, "win"),
            Verdict::Draw => write!(f, "draw"),
            Verdict::Loss => write!(f, "loss"),
        }
    }
}

/// Score of a decided game seen from `maximizer`, `depth` plies below the root
pub(crate) fn terminal_score(winner: Player, maximizer: Player, depth: i32) -> i32 {
    if winner == maximizer {
        WIN_BASE - depth
    } else {
        depth - WIN_BASE
    }
}

/// Reject boards the engine must not be asked to search: invariant
/// violations fail fast, and terminal positions have no move to choose.
pub(crate) fn ensure_searchable(board: &Board) -> Result<()> {
    if !board.is_valid() {
        return Err(Error::InconsistentBoard {
            message: format!("'{}' could not arise from a legal game", board.encode()),
        });
    }
    if board.outcome() != Outcome::InProgress {
        return Err(Error::TerminalPosition {
            board: board.encode(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminal_score_prefers_faster_wins() {
        let win_now = terminal_score(Player::X, Player::X, 1);
        let win_later = terminal_score(Player::X, Player::X, 5);
        assert!(win_now > win_later);
        assert!(win_later > 0);
    }

    #[test]
    fn test_terminal_score_prefers_deferred_losses() {
        let loss_now = terminal_score(Player::O, Player::X, 2);
        let loss_later = terminal_score(Player::O, Player::X, 6);
        assert!(loss_later > loss_now);
        assert!(loss_later < 0);
    }

    #[test]
    fn test_verdict_from_score() {
        assert_eq!(Verdict::from_score(9), Verdict::Win);
        assert_eq!(Verdict::from_score(0), Verdict::Draw);
        assert_eq!(Verdict::from_score(-6), Verdict::Loss);
    }
}
