//! Game records for drivers and tests

use serde::{Deserialize, Serialize};

use crate::board::{Board, Outcome, Player};
use crate::error::{Error, Result};

/// A move in the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub position: usize,
    pub player: Player,
}

/// A game in progress: the current board plus the move history that
/// produced it.
///
/// The driver owns the record, applies one move per turn (its own or one
/// chosen by the search engine), and reads the outcome back after each
/// move.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Game {
    board: Board,
    moves: Vec<Move>,
}

impl Game {
    /// Start a new game on an empty board, X to move
    pub fn new() -> Self {
        Game {
            board: Board::new(),
            moves: Vec::new(),
        }
    }

    /// Current board state
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Moves played so far, in order
    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    /// Outcome of the current board
    pub fn outcome(&self) -> Outcome {
        self.board.outcome()
    }

    /// Play a move for the current player and return the new outcome.
    ///
    /// # Errors
    ///
    /// Returns [`Error::GameOver`] once the game has ended, or the move
    /// errors from [`Board::make_move`]; the record is unchanged on error.
    pub fn play(&mut self, position: usize) -> Result<Outcome> {
        if self.board.is_terminal() {
            return Err(Error::GameOver);
        }

        let player = self.board.current_player();
        self.board = self.board.make_move(position)?;
        self.moves.push(Move { position, player });

        Ok(self.board.outcome())
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_game() {
        let game = Game::new();
        assert_eq!(game.outcome(), Outcome::InProgress);
        assert!(game.moves().is_empty());
        assert_eq!(game.board().current_player(), Player::X);
    }

    #[test]
    fn test_play_records_moves() {
        let mut game = Game::new();
        game.play(4).unwrap();
        game.play(0).unwrap();

        assert_eq!(
            game.moves(),
            &[
                Move {
                    position: 4,
                    player: Player::X
                },
                Move {
                    position: 0,
                    player: Player::O
                },
            ]
        );
    }

    #[test]
    fn test_play_to_a_win() {
        let mut game = Game::new();
        for pos in [0, 3, 1, 4] {
            assert_eq!(game.play(pos).unwrap(), Outcome::InProgress);
        }
        assert_eq!(game.play(2).unwrap(), Outcome::Win(Player::X));
        assert_eq!(game.outcome(), Outcome::Win(Player::X));
    }

    #[test]
    fn test_play_after_game_over_fails() {
        let mut game = Game::new();
        for pos in [0, 3, 1, 4, 2] {
            game.play(pos).unwrap();
        }
        assert!(matches!(game.play(5), Err(Error::GameOver)));
        assert_eq!(game.moves().len(), 5);
    }

    #[test]
    fn test_invalid_move_leaves_record_unchanged() {
        let mut game = Game::new();
        game.play(4).unwrap();

        let before = game.board().encode();
        assert!(game.play(4).is_err());
        assert_eq!(game.board().encode(), before);
        assert_eq!(game.moves().len(), 1);
    }
}
