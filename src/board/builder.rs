//! Fluent builder for constructing positions.
//!
//! Allows creating positions piece by piece rather than parsing FEN strings.
//!
//! # Example
//! ```
//! use chess_rules::board::{BoardBuilder, PieceKind, Side, Square};
//!
//! let board = BoardBuilder::new()
//!     .piece(Square::new(7, 4).unwrap(), Side::White, PieceKind::King)
//!     .piece(Square::new(0, 4).unwrap(), Side::Black, PieceKind::King)
//!     .piece(Square::new(6, 0).unwrap(), Side::White, PieceKind::Pawn)
//!     .side_to_move(Side::White)
//!     .build()
//!     .unwrap();
//! ```

use super::error::PositionError;
use super::{Board, Piece, PieceKind, Rules, Side, Square};

/// A fluent builder for constructing `Board` positions.
#[derive(Clone, Debug)]
pub struct BoardBuilder {
    pieces: Vec<(Square, Piece)>,
    side_to_move: Side,
    rules: Rules,
}

impl Default for BoardBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl BoardBuilder {
    /// Create a new empty board builder.
    #[must_use]
    pub fn new() -> Self {
        BoardBuilder {
            pieces: Vec::new(),
            side_to_move: Side::White,
            rules: Rules::STANDARD,
        }
    }

    /// Create a builder starting from the standard initial position.
    #[must_use]
    pub fn starting_position() -> Self {
        let mut builder = Self::new();
        builder.pieces = Board::new().pieces().collect();
        builder
    }

    /// Place an unmoved piece.
    #[must_use]
    pub fn piece(self, square: Square, side: Side, kind: PieceKind) -> Self {
        self.put(square, Piece::new(kind, side))
    }

    /// Place a piece that counts as having moved already.
    #[must_use]
    pub fn moved_piece(self, square: Square, side: Side, kind: PieceKind) -> Self {
        self.put(square, Piece::moved(kind, side))
    }

    /// Place an arbitrary piece record.
    #[must_use]
    pub fn put(mut self, square: Square, piece: Piece) -> Self {
        // Remove any existing piece on this square
        self.pieces.retain(|(sq, _)| *sq != square);
        self.pieces.push((square, piece));
        self
    }

    /// Remove a piece from a square.
    #[must_use]
    pub fn clear(mut self, square: Square) -> Self {
        self.pieces.retain(|(sq, _)| *sq != square);
        self
    }

    /// Set the side to move.
    #[must_use]
    pub const fn side_to_move(mut self, side: Side) -> Self {
        self.side_to_move = side;
        self
    }

    #[must_use]
    pub const fn rules(mut self, rules: Rules) -> Self {
        self.rules = rules;
        self
    }

    /// Build the board, rejecting structurally impossible positions.
    pub fn build(self) -> Result<Board, PositionError> {
        let mut board = Board::empty();

        for (square, piece) in self.pieces {
            board.place_piece(square, Some(piece));
        }
        board.turn = self.side_to_move;
        board.rules = self.rules;

        board.validate()?;
        Ok(board)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(s: &str) -> Square {
        s.parse().unwrap()
    }

    #[test]
    fn test_starting_position() {
        let built = BoardBuilder::starting_position().build().unwrap();
        assert_eq!(built, Board::new());
    }

    #[test]
    fn test_empty_board() {
        let board = BoardBuilder::new()
            .piece(sq("e1"), Side::White, PieceKind::King)
            .piece(sq("e8"), Side::Black, PieceKind::King)
            .build()
            .unwrap();

        assert!(board.piece_at(sq("e1")).is_some());
        assert!(board.piece_at(sq("e8")).is_some());
        assert!(board.piece_at(sq("a1")).is_none());
        assert_eq!(board.pieces().count(), 2);
    }

    #[test]
    fn test_moved_piece_flag() {
        let board = BoardBuilder::new()
            .moved_piece(sq("e1"), Side::White, PieceKind::King)
            .build()
            .unwrap();
        assert!(board.piece_at(sq("e1")).unwrap().has_moved);
    }

    #[test]
    fn test_side_to_move_and_rules() {
        let board = BoardBuilder::new()
            .piece(sq("e1"), Side::White, PieceKind::King)
            .side_to_move(Side::Black)
            .rules(Rules::PERMISSIVE)
            .build()
            .unwrap();

        assert_eq!(board.current_turn(), Side::Black);
        assert_eq!(board.rules(), Rules::PERMISSIVE);
    }

    #[test]
    fn test_clear_square() {
        let board = BoardBuilder::starting_position()
            .clear(sq("a1"))
            .build()
            .unwrap();

        assert!(board.piece_at(sq("a1")).is_none());
        assert!(board.piece_at(sq("b1")).is_some());
    }

    #[test]
    fn test_rejects_second_king() {
        let result = BoardBuilder::new()
            .piece(sq("e1"), Side::White, PieceKind::King)
            .piece(sq("d1"), Side::White, PieceKind::King)
            .build();
        assert_eq!(
            result,
            Err(PositionError::TooManyKings {
                side: Side::White,
                count: 2
            })
        );
    }

    #[test]
    fn test_rejects_unpromoted_pawn() {
        let result = BoardBuilder::new()
            .piece(sq("a8"), Side::White, PieceKind::Pawn)
            .build();
        assert_eq!(
            result,
            Err(PositionError::PawnOnLastRow { square: sq("a8") })
        );
    }
}
