//! Chess board representation and rules.
//!
//! An 8x8 grid of value-typed pieces with per-kind movement rules, move
//! execution (castling, automatic queen promotion), and check, checkmate
//! and stalemate detection. En passant and draw-by-repetition or
//! fifty-move rules are not part of this rule set.
//!
//! # Example
//! ```
//! use chess_rules::board::{Board, Side, Square};
//!
//! let mut board = Board::new();
//! let e2 = Square::new(6, 4).unwrap();
//! let e4 = Square::new(4, 4).unwrap();
//! assert!(board.apply_move(e2, e4));
//! assert_eq!(board.current_turn(), Side::Black);
//! println!("Black has {} legal moves", board.all_legal_moves(Side::Black).len());
//! ```

mod attack_tables;
mod builder;
mod display;
mod error;
mod fen;
mod make_move;
mod movegen;
pub mod prelude;
mod state;
mod status;
mod types;

#[cfg(test)]
mod tests;

// Public API - types users need
pub use builder::BoardBuilder;
pub use error::{FenError, MoveError, MoveParseError, PositionError, SquareError};
pub use fen::START_FEN;
pub use make_move::{AppliedMove, CastleSide};
pub use state::{Board, Rules};
pub use status::GameStatus;
pub use types::{Move, MoveList, Piece, PieceKind, Side, Square};
