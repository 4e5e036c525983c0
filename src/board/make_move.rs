//! Move execution.
//!
//! Validation happens entirely before the first write, so a rejected move
//! leaves the board untouched.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::error::MoveError;
use super::{Board, Move, Piece, PieceKind, Square};

/// Wing a castling move was played on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CastleSide {
    Kingside,
    Queenside,
}

/// Record of an accepted move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AppliedMove {
    pub mv: Move,
    /// The moving piece as it stood before the move.
    pub piece: Piece,
    pub captured: Option<Piece>,
    pub castle: Option<CastleSide>,
    pub promoted: bool,
}

impl Board {
    /// Validate and play a move for the side to move.
    ///
    /// On success the side to move flips; on error nothing changes.
    pub fn play(&mut self, mv: Move) -> Result<AppliedMove, MoveError> {
        let piece = match self.check_move(mv.from, mv.to) {
            Ok(piece) => piece,
            Err(err) => {
                #[cfg(feature = "logging")]
                log::trace!("rejected {mv}: {err}");
                return Err(err);
            }
        };

        let applied = self.execute(mv, piece);
        self.turn = self.turn.opponent();
        self.debug_assert_invariants();

        #[cfg(feature = "logging")]
        log::debug!("{} played {mv}, {} to move", piece.side, self.turn);

        Ok(applied)
    }

    /// Boolean form of [`Board::play`].
    pub fn apply_move(&mut self, from: Square, to: Square) -> bool {
        self.play(Move::new(from, to)).is_ok()
    }

    /// Move pieces without validating or passing the turn.
    ///
    /// Handles rook relocation for castling and automatic queen promotion.
    pub(crate) fn execute(&mut self, mv: Move, piece: Piece) -> AppliedMove {
        let Move { from, to } = mv;

        let captured = self.piece_at(to);
        let mut moved = piece;
        moved.has_moved = true;

        let promoted = moved.kind == PieceKind::Pawn && to.row() == moved.side.promotion_row();
        if promoted {
            moved.kind = PieceKind::Queen;
        }

        self.place_piece(from, None);
        self.place_piece(to, Some(moved));

        // The rook may land on the square the king just left.
        let castle = if Self::is_castling(from, to, piece) {
            let rook_from = Self::castling_rook_square(from, to);
            let rook_to = Self::castling_rook_target(from, to);
            if let Some(mut rook) = self.piece_at(rook_from) {
                rook.has_moved = true;
                self.place_piece(rook_from, None);
                self.place_piece(rook_to, Some(rook));
            }
            Some(if to.col() > from.col() {
                CastleSide::Kingside
            } else {
                CastleSide::Queenside
            })
        } else {
            None
        };

        AppliedMove {
            mv,
            piece,
            captured,
            castle,
            promoted,
        }
    }
}
