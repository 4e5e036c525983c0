//! Core board types.
//!
//! - `Square` - bounded (row, column) coordinate
//! - `PieceKind`, `Side` and `Piece` - value-typed piece records
//! - `Move` and `MoveList` - move representation

mod moves;
mod piece;
mod square;

pub use moves::{Move, MoveList};
pub use piece::{Piece, PieceKind, Side};
pub use square::Square;
