//! Rendering helpers for CLI output

use crate::board::{Board, Cell};
use crate::search::{Verdict, WIN_BASE};

/// Render the board as a grid. Empty cells show their index so a move can
/// be read straight off the printout.
pub fn render_board(board: &Board) -> String {
    let mut out = String::new();
    for row in 0..3 {
        out.push(' ');
        for col in 0..3 {
            let idx = row * 3 + col;
            let glyph = match board.get(idx) {
                Cell::Empty => char::from_digit(idx as u32, 10).unwrap_or('.'),
                cell => cell.to_char(),
            };
            out.push(glyph);
            if col < 2 {
                out.push_str(" │ ");
            }
        }
        out.push('\n');
        if row < 2 {
            out.push_str("───┼───┼───\n");
        }
    }
    out
}

/// Human-readable description of a score
pub fn describe_score(score: i32) -> String {
    match Verdict::from_score(score) {
        Verdict::Draw => "draw with best play".to_string(),
        Verdict::Win => {
            let plies = WIN_BASE - score;
            format!("forced win in {} {}", plies, ply_word(plies))
        }
        Verdict::Loss => {
            let plies = WIN_BASE + score;
            format!("forced loss in {} {}", plies, ply_word(plies))
        }
    }
}

fn ply_word(plies: i32) -> &'static str {
    if plies == 1 { "ply" } else { "plies" }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_board_shows_indices_for_empty_cells() {
        let board = Board::from_string("X...O....").unwrap();
        let rendered = render_board(&board);
        assert!(rendered.contains('X'));
        assert!(rendered.contains('O'));
        assert!(rendered.contains('8'));
        assert!(!rendered.contains('0')); // cell 0 holds the X
    }

    #[test]
    fn test_describe_score() {
        assert_eq!(describe_score(0), "draw with best play");
        assert_eq!(describe_score(9), "forced win in 1 ply");
        assert_eq!(describe_score(-6), "forced loss in 4 plies");
    }
}
