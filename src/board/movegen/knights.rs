use super::super::{Board, Square};

impl Board {
    /// L-shaped jump; occupancy along the way is irrelevant.
    #[inline]
    pub(crate) fn knight_rule(from: Square, to: Square) -> bool {
        let (dr, dc) = from.delta(to);
        matches!((dr.abs(), dc.abs()), (1, 2) | (2, 1))
    }
}
