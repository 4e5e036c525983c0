//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types.
//!
//! # Example
//! ```
//! use chess_rules::board::prelude::*;
//! ```

pub use super::{
    AppliedMove, Board, BoardBuilder, GameStatus, Move, MoveError, MoveList, Piece, PieceKind,
    Rules, Side, Square,
};
