use super::super::{Board, Square};

impl Board {
    pub(crate) fn bishop_rule(&self, from: Square, to: Square) -> bool {
        let (dr, dc) = from.delta(to);
        dr != 0 && dr.abs() == dc.abs() && self.path_is_clear(from, to)
    }

    pub(crate) fn rook_rule(&self, from: Square, to: Square) -> bool {
        let (dr, dc) = from.delta(to);
        (dr == 0) != (dc == 0) && self.path_is_clear(from, to)
    }

    pub(crate) fn queen_rule(&self, from: Square, to: Square) -> bool {
        self.bishop_rule(from, to) || self.rook_rule(from, to)
    }

    /// Whether every square strictly between `from` and `to` is empty.
    ///
    /// The two squares must share a row, column or diagonal.
    pub(crate) fn path_is_clear(&self, from: Square, to: Square) -> bool {
        let (dr, dc) = from.delta(to);
        debug_assert!(dr == 0 || dc == 0 || dr.abs() == dc.abs());
        let step = (dr.signum(), dc.signum());

        let mut sq = from;
        loop {
            sq = match sq.offset(step.0, step.1) {
                Some(next) => next,
                None => return false,
            };
            if sq == to {
                return true;
            }
            if !self.is_empty(sq) {
                return false;
            }
        }
    }
}
