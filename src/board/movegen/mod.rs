//! Move legality and legal move enumeration.
//!
//! Each piece kind has one pure rule function (see the sibling files) that
//! answers whether the geometry and occupancy of a move fit that kind. The
//! checks shared by every kind, plus the king-safety filters selected by
//! `Rules`, live here.

mod kings;
mod knights;
mod pawns;
mod sliders;

use super::attack_tables::{squares_in, KING_TARGETS, KNIGHT_TARGETS};
use super::error::MoveError;
use super::{Board, Move, MoveList, Piece, PieceKind, Side, Square};

impl Board {
    /// Whether the side to move may play `from` -> `to`.
    ///
    /// Pure: the board is never modified, so this doubles as the
    /// move-highlighting query.
    #[must_use]
    pub fn is_legal_move(&self, from: Square, to: Square) -> bool {
        self.check_move(from, to).is_ok()
    }

    /// Like [`Board::is_legal_move`] but explains a rejection.
    pub fn check_move(&self, from: Square, to: Square) -> Result<Piece, MoveError> {
        self.check_move_as(self.turn, from, to, self.rules.forbid_self_check)
    }

    /// Validate a move for `side` regardless of whose turn it is.
    pub(crate) fn check_move_as(
        &self,
        side: Side,
        from: Square,
        to: Square,
        forbid_self_check: bool,
    ) -> Result<Piece, MoveError> {
        let piece = self
            .piece_at(from)
            .ok_or(MoveError::EmptySquare { square: from })?;
        if piece.side != side {
            return Err(MoveError::WrongTurn { expected: side });
        }
        if self.piece_at(to).is_some_and(|target| target.side == side) {
            return Err(MoveError::OwnPieceOnTarget { square: to });
        }
        if !self.follows_movement_rule(from, to, piece) {
            return Err(MoveError::IllegalPattern { from, to });
        }
        if self.rules.safe_castling
            && Self::is_castling(from, to, piece)
            && !self.castling_is_safe(from, to, side)
        {
            return Err(MoveError::UnsafeCastling { from, to });
        }
        if forbid_self_check && self.leaves_king_in_check(side, Move::new(from, to), piece) {
            return Err(MoveError::LeavesKingInCheck { from, to });
        }
        Ok(piece)
    }

    /// Per-kind geometry and occupancy rule.
    pub(crate) fn follows_movement_rule(&self, from: Square, to: Square, piece: Piece) -> bool {
        match piece.kind {
            PieceKind::Pawn => self.pawn_rule(from, to, piece.side),
            PieceKind::Knight => Self::knight_rule(from, to),
            PieceKind::Bishop => self.bishop_rule(from, to),
            PieceKind::Rook => self.rook_rule(from, to),
            PieceKind::Queen => self.queen_rule(from, to),
            PieceKind::King => self.king_rule(from, to, piece),
        }
    }

    /// Play the move on a scratch copy and test the mover's king.
    fn leaves_king_in_check(&self, side: Side, mv: Move, piece: Piece) -> bool {
        let mut scratch = self.clone();
        scratch.execute(mv, piece);
        scratch.is_in_check(side)
    }

    /// Every move `side` can make that does not leave its own king attacked.
    ///
    /// The self-check filter is applied whatever the board's `Rules`, so
    /// that checkmate and stalemate detection stays meaningful.
    #[must_use]
    pub fn all_legal_moves(&self, side: Side) -> MoveList {
        let mut moves = MoveList::new();
        for (from, piece) in self.pieces_of(side) {
            for to in Self::candidate_targets(from, piece) {
                if self.check_move_as(side, from, to, true).is_ok() {
                    moves.push(Move::new(from, to));
                }
            }
        }
        moves
    }

    /// Squares `is_legal_move` accepts from `from` for the side to move.
    #[must_use]
    pub fn legal_destinations(&self, from: Square) -> Vec<Square> {
        match self.piece_at(from) {
            Some(piece) if piece.side == self.turn => Self::candidate_targets(from, piece)
                .filter(|&to| self.is_legal_move(from, to))
                .collect(),
            _ => Vec::new(),
        }
    }

    /// Superset of the squares a piece could possibly reach.
    fn candidate_targets(from: Square, piece: Piece) -> Box<dyn Iterator<Item = Square>> {
        match piece.kind {
            PieceKind::Knight => Box::new(squares_in(KNIGHT_TARGETS[from.index()])),
            PieceKind::King => {
                let castles = [from.offset(0, -2), from.offset(0, 2)];
                Box::new(
                    squares_in(KING_TARGETS[from.index()]).chain(castles.into_iter().flatten()),
                )
            }
            _ => Box::new(Square::ALL.into_iter()),
        }
    }
}
