use super::super::{Board, Side, Square};

impl Board {
    /// Single push onto an empty square, double push from the start row
    /// across two empty squares, or a diagonal capture. No en passant.
    pub(crate) fn pawn_rule(&self, from: Square, to: Square, side: Side) -> bool {
        let dir = side.pawn_direction();
        let (dr, dc) = from.delta(to);

        if dc == 0 && dr == dir {
            return self.is_empty(to);
        }

        if dc == 0 && dr == 2 * dir && from.row() == side.pawn_start_row() {
            return from
                .offset(dir, 0)
                .is_some_and(|mid| self.is_empty(mid) && self.is_empty(to));
        }

        if dc.abs() == 1 && dr == dir {
            return self.piece_at(to).is_some_and(|target| target.side != side);
        }

        false
    }

    /// Squares a pawn threatens, whether or not anything stands there.
    #[inline]
    pub(crate) fn pawn_attacks(from: Square, target: Square, side: Side) -> bool {
        let (dr, dc) = from.delta(target);
        dr == side.pawn_direction() && dc.abs() == 1
    }
}
