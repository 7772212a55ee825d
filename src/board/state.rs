//! Board state representation and basic operations

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A cell on the 3x3 board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    Empty,
    X,
    O,
}

impl Cell {
    pub fn to_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::X => 'X',
            Cell::O => 'O',
        }
    }

    pub fn from_char(c: char) -> Option<Cell> {
        match c {
            '.' => Some(Cell::Empty),
            'X' | 'x' => Some(Cell::X),
            'O' | 'o' | '0' => Some(Cell::O),
            _ => None,
        }
    }
}

/// A player in the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    X,
    O,
}

impl Player {
    /// Get the opponent player
    pub fn opponent(self) -> Player {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Convert player to cell
    pub fn to_cell(self) -> Cell {
        match self {
            Player::X => Cell::X,
            Player::O => Cell::O,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::X => write!(f, "X"),
            Player::O => write!(f, "O"),
        }
    }
}

/// Result of classifying a board position.
///
/// A position is terminal once a player has completed a winning line or the
/// board is full; until then it is in progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    Win(Player),
    Draw,
    InProgress,
}

impl Outcome {
    pub fn is_terminal(self) -> bool {
        self != Outcome::InProgress
    }

    /// The winning player, if this outcome is a win
    pub fn winner(self) -> Option<Player> {
        match self {
            Outcome::Win(player) => Some(player),
            _ => None,
        }
    }
}

/// Complete board state.
///
/// Only the cells are stored; the player to move is derived from the mark
/// counts (X always moves first, so X is to move exactly when the counts are
/// equal). This type implements `Copy` since it is only 9 bytes, and every
/// mutation returns a fresh value instead of touching the original.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    pub cells: [Cell; 9],
}

impl Board {
    /// Create a new empty board (X to move)
    pub fn new() -> Self {
        Board {
            cells: [Cell::Empty; 9],
        }
    }

    /// Create a board from a string of nine cell characters.
    ///
    /// Whitespace is filtered out, so multi-line layouts parse too. Accepted
    /// cell characters are '.', 'X'/'x' and 'O'/'o'/'0'.
    ///
    /// # Errors
    ///
    /// Returns an error if the string does not contain exactly 9 cell
    /// characters, any character is invalid, or the mark counts violate the
    /// turn invariant (X equal to O, or ahead by exactly one).
    pub fn from_string(s: &str) -> Result<Board> {
        let cleaned: Vec<char> = s.chars().filter(|c| !c.is_whitespace()).collect();
        if cleaned.len() != 9 {
            return Err(Error::InvalidBoardLength {
                expected: 9,
                got: cleaned.len(),
                context: s.to_string(),
            });
        }

        let mut cells = [Cell::Empty; 9];
        for (i, &c) in cleaned.iter().enumerate() {
            cells[i] = Cell::from_char(c).ok_or_else(|| Error::InvalidCellCharacter {
                character: c,
                position: i,
                context: s.to_string(),
            })?;
        }

        let board = Board { cells };
        let (x_count, o_count) = board.mark_counts();
        if !(x_count == o_count || x_count == o_count + 1) {
            return Err(Error::InvalidPieceCounts { x_count, o_count });
        }

        Ok(board)
    }

    /// Count X and O marks on the board
    pub(crate) fn mark_counts(&self) -> (usize, usize) {
        let mut x = 0;
        let mut o = 0;
        for cell in &self.cells {
            match cell {
                Cell::X => x += 1,
                Cell::O => o += 1,
                Cell::Empty => {}
            }
        }
        (x, o)
    }

    /// The player to move, derived from the mark counts.
    ///
    /// X moves first, so X is to move whenever both players have the same
    /// number of marks.
    pub fn current_player(&self) -> Player {
        let (x_count, o_count) = self.mark_counts();
        if x_count == o_count {
            Player::X
        } else {
            Player::O
        }
    }

    /// Count the number of occupied cells on the board
    pub fn occupied_count(&self) -> usize {
        let (x_count, o_count) = self.mark_counts();
        x_count + o_count
    }

    /// Get cell at position (0-8)
    pub fn get(&self, pos: usize) -> Cell {
        self.cells[pos]
    }

    /// Check if a position is empty
    pub fn is_empty(&self, pos: usize) -> bool {
        self.cells[pos] == Cell::Empty
    }

    /// Get all empty positions in ascending order
    pub fn empty_positions(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &cell)| cell == Cell::Empty)
            .map(|(i, _)| i)
            .collect()
    }

    /// Get legal moves in this position, in ascending index order.
    ///
    /// Terminal positions have no legal moves.
    pub fn legal_moves(&self) -> Vec<usize> {
        if self.outcome().is_terminal() {
            return Vec::new();
        }
        self.empty_positions()
    }

    /// Apply a move for the derived current player and return the new board.
    ///
    /// # Errors
    ///
    /// Returns an error if the position is out of bounds, the cell is already
    /// occupied, or the game is already over. The original board is left
    /// unchanged in every case.
    #[must_use = "make_move returns a new board; the original is unchanged"]
    pub fn make_move(&self, pos: usize) -> Result<Board> {
        if pos >= 9 {
            return Err(Error::OutOfBounds { position: pos });
        }
        if !self.is_empty(pos) {
            return Err(Error::OccupiedCell { position: pos });
        }
        if self.outcome().is_terminal() {
            return Err(Error::GameOver);
        }

        let mut next = *self;
        next.cells[pos] = self.current_player().to_cell();
        Ok(next)
    }

    /// Check if a player has completed a winning line
    pub fn has_won(&self, player: Player) -> bool {
        super::lines::LineAnalyzer::has_won(&self.cells, player)
    }

    /// Classify the position.
    ///
    /// The winner check runs before the draw check: a full board containing a
    /// completed line is a win, not a draw.
    pub fn outcome(&self) -> Outcome {
        if self.has_won(Player::X) {
            return Outcome::Win(Player::X);
        }
        if self.has_won(Player::O) {
            return Outcome::Win(Player::O);
        }
        if self.cells.iter().all(|&cell| cell != Cell::Empty) {
            return Outcome::Draw;
        }
        Outcome::InProgress
    }

    /// Check if the game is over (win or draw)
    pub fn is_terminal(&self) -> bool {
        self.outcome().is_terminal()
    }

    /// Get the winner if there is one
    pub fn winner(&self) -> Option<Player> {
        self.outcome().winner()
    }

    /// Get the canonical nine-character string representation
    pub fn encode(&self) -> String {
        self.cells.iter().map(|&c| c.to_char()).collect()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, &cell) in self.cells.iter().enumerate() {
            write!(f, "{}", cell.to_char())?;
            if (i + 1) % 3 == 0 && i < 8 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
