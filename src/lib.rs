//! Unbeatable noughts-and-crosses engine
//!
//! This crate provides:
//! - Complete noughts-and-crosses board model with validation
//! - Exhaustive minimax search with alpha-beta pruning
//! - A plain minimax reference evaluator for cross-checking the pruning
//! - Batch CLI commands for position analysis and self-play demonstrations
//!
//! The game is small enough to solve outright, so the engine carries no
//! heuristics: every move it returns is game-theoretically optimal.

pub mod board;
pub mod cli;
pub mod error;
pub mod game;
pub mod search;

pub use board::{Board, Cell, Outcome, Player};
pub use error::{Error, Result};
pub use game::{Game, Move};
pub use search::{Analysis, Verdict};
