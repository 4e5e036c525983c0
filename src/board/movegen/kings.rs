use super::super::{Board, Piece, PieceKind, Side, Square};

impl Board {
    /// One step in any direction, or a castling move.
    pub(crate) fn king_rule(&self, from: Square, to: Square, king: Piece) -> bool {
        let (dr, dc) = from.delta(to);
        if dr.abs() <= 1 && dc.abs() <= 1 {
            return true;
        }
        dr == 0 && dc.abs() == 2 && self.castling_path_ready(from, to, king)
    }

    pub(crate) fn is_castling(from: Square, to: Square, piece: Piece) -> bool {
        piece.kind == PieceKind::King && from.row() == to.row() && from.col().abs_diff(to.col()) == 2
    }

    /// Corner the castling rook starts from: column 0 queenside, 7 kingside.
    #[inline]
    pub(crate) fn castling_rook_square(from: Square, to: Square) -> Square {
        if to.col() < from.col() {
            from.with_col(0)
        } else {
            from.with_col(7)
        }
    }

    /// Square the king crosses on its way to `to`.
    #[inline]
    pub(crate) fn castling_transit_square(from: Square, to: Square) -> Square {
        from.with_col((from.col() + to.col()) / 2)
    }

    /// Where the castling rook lands: column 3 queenside, 5 kingside.
    #[inline]
    pub(crate) fn castling_rook_target(from: Square, to: Square) -> Square {
        if to.col() < from.col() {
            from.with_col(3)
        } else {
            from.with_col(5)
        }
    }

    /// King and rook unmoved, rook in its corner, nothing in between, and
    /// king and rook do not end on the same square.
    fn castling_path_ready(&self, from: Square, to: Square, king: Piece) -> bool {
        if king.has_moved || Self::castling_rook_target(from, to) == to {
            return false;
        }
        let rook_sq = Self::castling_rook_square(from, to);
        let rook_ready = self.piece_at(rook_sq).is_some_and(|rook| {
            rook.kind == PieceKind::Rook && rook.side == king.side && !rook.has_moved
        });
        rook_ready && self.path_is_clear(from, rook_sq)
    }

    /// The king is not in check and neither the square it crosses nor the
    /// one it lands on is attacked. Identical for both wings.
    pub(crate) fn castling_is_safe(&self, from: Square, to: Square, side: Side) -> bool {
        let enemy = side.opponent();
        [from, Self::castling_transit_square(from, to), to]
            .into_iter()
            .all(|sq| !self.is_square_attacked(sq, enemy))
    }

    /// Whether `piece` standing on `from` attacks `target`.
    ///
    /// Same movement rules as for moves, minus the occupancy test on the
    /// target itself: pawns attack diagonally only, kings never castle.
    pub(crate) fn piece_attacks(&self, from: Square, target: Square, piece: Piece) -> bool {
        if from == target {
            return false;
        }
        match piece.kind {
            PieceKind::Pawn => Self::pawn_attacks(from, target, piece.side),
            PieceKind::Knight => Self::knight_rule(from, target),
            PieceKind::Bishop => self.bishop_rule(from, target),
            PieceKind::Rook => self.rook_rule(from, target),
            PieceKind::Queen => self.queen_rule(from, target),
            PieceKind::King => {
                let (dr, dc) = from.delta(target);
                dr.abs() <= 1 && dc.abs() <= 1
            }
        }
    }

    /// Whether any piece of `attacker` attacks `square`.
    #[must_use]
    pub fn is_square_attacked(&self, square: Square, attacker: Side) -> bool {
        self.pieces_of(attacker)
            .any(|(from, piece)| self.piece_attacks(from, square, piece))
    }

    /// Whether `side`'s king is attacked. A side without a king is never in check.
    #[must_use]
    pub fn is_in_check(&self, side: Side) -> bool {
        self.find_king(side)
            .is_some_and(|king_sq| self.is_square_attacked(king_sq, side.opponent()))
    }
}
