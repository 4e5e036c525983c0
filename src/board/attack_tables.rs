//! Precomputed destination tables for the leaper pieces (knights, kings).
//!
//! Each entry is a 64-bit mask indexed by `Square::index()`.

use once_cell::sync::Lazy;

use super::Square;

pub(crate) const KNIGHT_DELTAS: [(i8, i8); 8] = [
    (2, 1),
    (1, 2),
    (-1, 2),
    (-2, 1),
    (-2, -1),
    (-1, -2),
    (1, -2),
    (2, -1),
];

pub(crate) const KING_DELTAS: [(i8, i8); 8] = [
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

fn leaper_table(deltas: &[(i8, i8)]) -> [u64; 64] {
    let mut table = [0u64; 64];
    for (slot, sq) in table.iter_mut().zip(Square::ALL) {
        *slot = deltas
            .iter()
            .filter_map(|&(dr, dc)| sq.offset(dr, dc))
            .fold(0u64, |mask, to| mask | (1u64 << to.index()));
    }
    table
}

pub(crate) static KNIGHT_TARGETS: Lazy<[u64; 64]> = Lazy::new(|| leaper_table(&KNIGHT_DELTAS));

pub(crate) static KING_TARGETS: Lazy<[u64; 64]> = Lazy::new(|| leaper_table(&KING_DELTAS));

/// Iterate the squares set in a mask, lowest index first.
pub(crate) fn squares_in(mut mask: u64) -> impl Iterator<Item = Square> {
    std::iter::from_fn(move || {
        if mask == 0 {
            return None;
        }
        let idx = mask.trailing_zeros() as usize;
        mask &= mask - 1;
        Some(Square::ALL[idx])
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(s: &str) -> Square {
        s.parse().unwrap()
    }

    #[test]
    fn test_knight_targets_from_corner() {
        let targets: Vec<Square> = squares_in(KNIGHT_TARGETS[sq("a1").index()]).collect();
        assert_eq!(targets.len(), 2);
        assert!(targets.contains(&sq("b3")));
        assert!(targets.contains(&sq("c2")));
    }

    #[test]
    fn test_knight_targets_from_center() {
        assert_eq!(KNIGHT_TARGETS[sq("e4").index()].count_ones(), 8);
    }

    #[test]
    fn test_king_targets() {
        assert_eq!(KING_TARGETS[sq("h8").index()].count_ones(), 3);
        assert_eq!(KING_TARGETS[sq("d5").index()].count_ones(), 8);
    }
}
