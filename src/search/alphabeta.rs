//! Alpha-beta pruned minimax search
//!
//! Depth-first recursion over the full game tree. Alpha tracks the best
//! score the maximizer can already force on the current path, beta the best
//! the minimizer can; once `alpha >= beta` the remaining siblings of a node
//! are provably irrelevant and are skipped. Pruning only skips work — the
//! returned score and move are identical to [`plain`](super::plain).
//!
//! Every call re-explores the subtree beneath the given board; there is no
//! transposition table or other caching.

use crate::board::{Board, Outcome, Player};
use crate::error::{Error, Result};

use super::{Analysis, INF, ensure_searchable, terminal_score};

/// Solve a position: the game-theoretic score for the player to move and
/// the first move in ascending cell order that achieves it.
///
/// The fixed tie-break makes the result fully deterministic: identical
/// boards always produce identical analyses.
///
/// # Errors
///
/// Returns [`Error::TerminalPosition`] when the game is already over and
/// [`Error::InconsistentBoard`] when the board violates the mark-count
/// rules.
pub fn solve(board: &Board) -> Result<Analysis> {
    ensure_searchable(board)?;

    let maximizer = board.current_player();
    let mut nodes = 0u64;
    let mut alpha = -INF;
    let mut best_score = -INF;
    let mut best_move = None;

    for pos in board.legal_moves() {
        let child = board.make_move(pos)?;
        let score = alpha_beta(&child, maximizer, 1, alpha, INF, &mut nodes)?;
        if score > best_score {
            best_score = score;
            best_move = Some(pos);
        }
        alpha = alpha.max(best_score);
    }

    let best_move = best_move.ok_or(Error::NoValidMoves)?;
    Ok(Analysis {
        score: best_score,
        best_move,
        nodes,
    })
}

/// Evaluate every legal move and return its exact score, in ascending
/// move order.
///
/// Each child is searched with the full window, so the reported values are
/// exact rather than the bounds a shared window would produce.
///
/// # Errors
///
/// Same failure conditions as [`solve`].
pub fn evaluate_moves(board: &Board) -> Result<Vec<(usize, i32)>> {
    ensure_searchable(board)?;

    let maximizer = board.current_player();
    let mut nodes = 0u64;
    let mut evaluations = Vec::new();

    for pos in board.legal_moves() {
        let child = board.make_move(pos)?;
        let score = alpha_beta(&child, maximizer, 1, -INF, INF, &mut nodes)?;
        evaluations.push((pos, score));
    }

    Ok(evaluations)
}

fn alpha_beta(
    board: &Board,
    maximizer: Player,
    depth: i32,
    mut alpha: i32,
    mut beta: i32,
    nodes: &mut u64,
) -> Result<i32> {
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
        let score = alpha_beta(&child, maximizer, depth + 1, alpha, beta, nodes)?;

        if maximizing {
            best = best.max(score);
            alpha = alpha.max(best);
        } else {
            best = best.min(score);
            beta = beta.min(best);
        }

        if alpha >= beta {
            // The opposing player will never allow this branch; the
            // remaining siblings cannot change the result.
            break;
        }
    }

    Ok(best)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    fn board(s: &str) -> Board {
        Board::from_string(s).expect("test position must parse")
    }

    #[test]
    fn test_empty_board_is_a_draw() {
        let analysis = solve(&Board::new()).unwrap();
        assert_eq!(analysis.score, 0);
        // Symmetric optimal first moves: centre or a corner
        assert!([0, 2, 4, 6, 8].contains(&analysis.best_move));
    }

    #[test]
    fn test_immediate_win_is_taken() {
        // X O O
        // . X .
        // . . .    X to move, 0-4-8 completes at 8
        let analysis = solve(&board("XOO.X....")).unwrap();
        assert_eq!(analysis.best_move, 8);
        assert_eq!(analysis.score, super::super::WIN_BASE - 1);
    }

    #[test]
    fn test_fastest_win_beats_slower_winning_lines() {
        // X . .
        // O X O
        // . . .    X to move; several moves win eventually, only 8 wins now
        let analysis = solve(&board("X..OXO...")).unwrap();
        assert_eq!(analysis.best_move, 8);
        assert_eq!(analysis.score, super::super::WIN_BASE - 1);
    }

    #[test]
    fn test_must_block_is_found() {
        // X X .
        // . O .
        // . . .    O to move and must block at 2
        let analysis = solve(&board("XX..O....")).unwrap();
        assert_eq!(analysis.best_move, 2);
        assert_eq!(analysis.score, 0);
    }

    #[test]
    fn test_forced_loss_is_deferred() {
        // X O .
        // . X .
        // . . .    O to move; every reply loses, blocking at 8 lasts longest
        let analysis = solve(&board("XO..X....")).unwrap();
        assert_eq!(analysis.best_move, 8);
        assert_eq!(analysis.score, -(super::super::WIN_BASE - 4));
    }

    #[test]
    fn test_terminal_position_is_rejected() {
        let finished = board("XXXOO....");
        let result = solve(&finished);
        assert!(matches!(result, Err(Error::TerminalPosition { .. })));

        let result = evaluate_moves(&finished);
        assert!(matches!(result, Err(Error::TerminalPosition { .. })));
    }

    #[test]
    fn test_inconsistent_board_is_rejected() {
        let mut bad = Board::new();
        bad.cells[0] = crate::board::Cell::X;
        bad.cells[1] = crate::board::Cell::X;

        let result = solve(&bad);
        assert!(matches!(result, Err(Error::InconsistentBoard { .. })));
    }

    #[test]
    fn test_evaluate_moves_covers_all_legal_moves() {
        let evaluations = evaluate_moves(&Board::new()).unwrap();
        let positions: Vec<usize> = evaluations.iter().map(|&(pos, _)| pos).collect();
        assert_eq!(positions, (0..9).collect::<Vec<_>>());
    }

    #[test]
    fn test_solve_agrees_with_evaluate_moves() {
        let b = board("X...O....");
        let analysis = solve(&b).unwrap();
        let evaluations = evaluate_moves(&b).unwrap();

        let best = evaluations
            .iter()
            .map(|&(_, score)| score)
            .max()
            .expect("position has moves");
        assert_eq!(analysis.score, best);

        let first_best = evaluations
            .iter()
            .find(|&&(_, score)| score == best)
            .map(|&(pos, _)| pos)
            .expect("a move achieves the best score");
        assert_eq!(analysis.best_move, first_best);
    }
}
