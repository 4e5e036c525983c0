//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `setup.rs` - Initial position and board accessors
//! - `rules.rs` - Per-kind movement rules and rule-set filters
//! - `execution.rs` - Move application, castling, promotion, atomicity
//! - `terminal.rs` - Check, checkmate and stalemate detection
//! - `perft.rs` - Legal move counts against known node totals
//! - `proptest.rs` - Property-based tests over random playouts

mod proptest;

use crate::board::{Board, Square};

pub(super) fn sq(s: &str) -> Square {
    s.parse().expect("valid square")
}

pub(super) fn fen(s: &str) -> Board {
    Board::try_from_fen(s).expect("valid FEN")
}
