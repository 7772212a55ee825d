//! CLI infrastructure for the noughts engine
//!
//! Batch commands only: every subcommand takes a position or a game count,
//! runs to completion, and prints its result. Interactive play belongs to
//! external drivers.

pub mod commands;
pub mod output;
