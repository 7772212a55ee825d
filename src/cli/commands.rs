//! CLI subcommand implementations

pub mod analyze;
pub mod selfplay;
pub mod solve;
pub mod verify;

use clap::ValueEnum;

use crate::board::Player;

/// Which side the engine plays, as a command-line value
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SideArg {
    X,
    O,
}

impl From<SideArg> for Player {
    fn from(side: SideArg) -> Player {
        match side {
            SideArg::X => Player::X,
            SideArg::O => Player::O,
        }
    }
}
