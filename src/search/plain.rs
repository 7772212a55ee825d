//! Plain minimax without pruning
//!
//! Reference evaluator with the same contract as
//! [`alphabeta`](super::alphabeta): identical scores, identical tie-break,
//! no pruning. It visits every node of the subtree (roughly half a million
//! from the empty board), which makes it the ground truth the pruned
//! search is tested against and a useful baseline when demonstrating how
//! much work the cutoffs save.

use crate::board::{Board, Outcome, Player};
use crate::error::{Error, Result};

use super::{Analysis, INF, ensure_searchable, terminal_score};

/// Solve a position by exhaustive minimax, without pruning.
///
/// # Errors
///
/// Same failure conditions as [`alphabeta::solve`](super::alphabeta::solve).
pub fn solve(board: &Board) -> Result<Analysis> {
    ensure_searchable(board)?;

    let maximizer = board.current_player();
    let mut nodes = 0u64;
    let mut best_score = -INF;
    let mut best_move = None;

    for pos in board.legal_moves() {
        let child = board.make_move(pos)?;
        let score = minimax(&child, maximizer, 1, &mut nodes)?;
        if score > best_score {
            best_score = score;
            best_move = Some(pos);
        }
    }

    let best_move = best_move.ok_or(Error::NoValidMoves)?;
    Ok(Analysis {
        score: best_score,
        best_move,
        nodes,
    })
}

/// Evaluate every legal move by exhaustive minimax, in ascending move order
pub fn evaluate_moves(board: &Board) -> Result<Vec<(usize, i32)>> {
    ensure_searchable(board)?;

    let maximizer = board.current_player();
    let mut nodes = 0u64;
    let mut evaluations = Vec::new();

    for pos in board.legal_moves() {
        let child = board.make_move(pos)?;
        let score = minimax(&child, maximizer, 1, &mut nodes)?;
        evaluations.push((pos, score));
    }

    Ok(evaluations)
}

fn minimax(board: &Board, maximizer: Player, depth: i32, nodes: &mut u64) -> Result<i32> {
    *nodes += 1;

    match board.outcome() {
        Outcome::Win(winner) => return Ok(terminal_score(winner, maximizer, depth)),
        Outcome::Draw => return Ok(0),
        Outcome::InProgress => {}
    }

    let maximizing = board.current_player() == maximizer;
    let mut best = if maximizing { -INF } else { INF };

    for pos in board.legal_moves() {
        let child = board.make_move(pos)?;
        let score = minimax(&child, maximizer, depth + 1, nodes)?;
        best = if maximizing {
            best.max(score)
        } else {
            best.min(score)
        };
    }

    Ok(best)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_board_is_a_draw() {
        let analysis = solve(&Board::new()).unwrap();
        assert_eq!(analysis.score, 0);
        assert!([0, 2, 4, 6, 8].contains(&analysis.best_move));
    }

    #[test]
    fn test_immediate_win_is_taken() {
        let board = Board::from_string("XOO.X....").unwrap();
        let analysis = solve(&board).unwrap();
        assert_eq!(analysis.best_move, 8);
        assert_eq!(analysis.score, super::super::WIN_BASE - 1);
    }

    #[test]
    fn test_visits_more_nodes_than_alpha_beta() {
        let board = Board::from_string("X...O....").unwrap();
        let unpruned = solve(&board).unwrap();
        let pruned = super::super::alphabeta::solve(&board).unwrap();
        assert!(unpruned.nodes > pruned.nodes);
    }
}
