pub mod board;
pub mod game;

pub use board::{Board, GameStatus, Move, Piece, PieceKind, Side, Square};
pub use game::{Game, SharedGame};
