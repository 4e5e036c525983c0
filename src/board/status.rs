//! Terminal-state queries.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{Board, Side};

/// Outcome of the position for the side to move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum GameStatus {
    Ongoing,
    Check,
    Checkmate { winner: Side },
    Stalemate,
}

impl GameStatus {
    #[must_use]
    pub const fn is_over(self) -> bool {
        matches!(self, GameStatus::Checkmate { .. } | GameStatus::Stalemate)
    }

    /// End-of-game announcement, `None` while play continues.
    #[must_use]
    pub fn message(self) -> Option<String> {
        match self {
            GameStatus::Checkmate { winner } => Some(format!("{winner} wins by checkmate!")),
            GameStatus::Stalemate => Some("Stalemate! It's a draw.".to_string()),
            GameStatus::Ongoing | GameStatus::Check => None,
        }
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameStatus::Ongoing => write!(f, "ongoing"),
            GameStatus::Check => write!(f, "check"),
            GameStatus::Checkmate { winner } => write!(f, "checkmate ({winner} wins)"),
            GameStatus::Stalemate => write!(f, "stalemate"),
        }
    }
}

impl Board {
    #[must_use]
    pub fn is_checkmate(&self, side: Side) -> bool {
        self.is_in_check(side) && self.all_legal_moves(side).is_empty()
    }

    #[must_use]
    pub fn is_stalemate(&self, side: Side) -> bool {
        !self.is_in_check(side) && self.all_legal_moves(side).is_empty()
    }

    /// Status for the side to move, enumerating legal moves once.
    #[must_use]
    pub fn status(&self) -> GameStatus {
        let side = self.turn;
        let in_check = self.is_in_check(side);
        let stuck = self.all_legal_moves(side).is_empty();
        match (in_check, stuck) {
            (true, true) => GameStatus::Checkmate {
                winner: side.opponent(),
            },
            (false, true) => GameStatus::Stalemate,
            (true, false) => GameStatus::Check,
            (false, false) => GameStatus::Ongoing,
        }
    }
}
