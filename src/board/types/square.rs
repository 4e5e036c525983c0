//! Square type and coordinate helpers.
//!
//! Rows run from 0 (Black's back rank, rank 8) to 7 (White's back rank,
//! rank 1). Columns run from 0 (file a) to 7 (file h).

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::error::SquareError;

/// A square on the board, always in range.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "(u8, u8)", into = "(u8, u8)"))]
pub struct Square {
    row: u8,
    col: u8,
}

impl Square {
    /// All 64 squares in row-major order (a8, b8, ..., h1).
    pub const ALL: [Square; 64] = {
        let mut all = [Square { row: 0, col: 0 }; 64];
        let mut i = 0;
        while i < 64 {
            all[i] = Square {
                row: (i / 8) as u8,
                col: (i % 8) as u8,
            };
            i += 1;
        }
        all
    };

    /// Create a square, returning `None` when either coordinate is off the board.
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Option<Self> {
        if row < 8 && col < 8 {
            Some(Square {
                row: row as u8,
                col: col as u8,
            })
        } else {
            None
        }
    }

    /// Row index (0-7, where 0 = rank 8)
    #[inline]
    #[must_use]
    pub const fn row(self) -> usize {
        self.row as usize
    }

    /// Column index (0-7, where 0 = file a)
    #[inline]
    #[must_use]
    pub const fn col(self) -> usize {
        self.col as usize
    }

    /// Square index (0-63, a8=0, b8=1, ..., h1=63)
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.row as usize * 8 + self.col as usize
    }

    /// Step by a signed offset, `None` if that leaves the board.
    #[must_use]
    pub fn offset(self, d_row: i8, d_col: i8) -> Option<Self> {
        let row = self.row as i8 + d_row;
        let col = self.col as i8 + d_col;
        if (0..8).contains(&row) && (0..8).contains(&col) {
            Some(Square {
                row: row as u8,
                col: col as u8,
            })
        } else {
            None
        }
    }

    /// Same row, different column.
    #[inline]
    #[must_use]
    pub(crate) fn with_col(self, col: usize) -> Self {
        debug_assert!(col < 8);
        Square {
            row: self.row,
            col: col as u8,
        }
    }

    /// Signed (row, col) deltas from `self` to `to`.
    #[inline]
    #[must_use]
    pub(crate) const fn delta(self, to: Square) -> (i8, i8) {
        (
            to.row as i8 - self.row as i8,
            to.col as i8 - self.col as i8,
        )
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", (self.col + b'a') as char, 8 - self.row)
    }
}

impl TryFrom<(usize, usize)> for Square {
    type Error = SquareError;

    fn try_from((row, col): (usize, usize)) -> Result<Self, Self::Error> {
        if row >= 8 {
            return Err(SquareError::RowOutOfBounds { row });
        }
        if col >= 8 {
            return Err(SquareError::ColOutOfBounds { col });
        }
        Ok(Square {
            row: row as u8,
            col: col as u8,
        })
    }
}

impl TryFrom<(u8, u8)> for Square {
    type Error = SquareError;

    fn try_from((row, col): (u8, u8)) -> Result<Self, Self::Error> {
        Square::try_from((row as usize, col as usize))
    }
}

impl From<Square> for (u8, u8) {
    fn from(sq: Square) -> Self {
        (sq.row, sq.col)
    }
}

impl FromStr for Square {
    type Err = SquareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || SquareError::InvalidNotation {
            notation: s.to_string(),
        };
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return Err(invalid());
        }

        let col = match bytes[0] {
            b @ b'a'..=b'h' => b - b'a',
            _ => return Err(invalid()),
        };
        let row = match bytes[1] {
            b @ b'1'..=b'8' => 7 - (b - b'1'),
            _ => return Err(invalid()),
        };

        Ok(Square { row, col })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_out_of_range() {
        assert!(Square::new(8, 0).is_none());
        assert!(Square::new(0, 8).is_none());
        assert!(Square::new(7, 7).is_some());
    }

    #[test]
    fn test_try_from_reports_axis() {
        assert_eq!(
            Square::try_from((9usize, 0usize)),
            Err(SquareError::RowOutOfBounds { row: 9 })
        );
        assert_eq!(
            Square::try_from((0usize, 12usize)),
            Err(SquareError::ColOutOfBounds { col: 12 })
        );
    }

    #[test]
    fn test_algebraic_mapping() {
        let e2: Square = "e2".parse().unwrap();
        assert_eq!((e2.row(), e2.col()), (6, 4));
        let a8: Square = "a8".parse().unwrap();
        assert_eq!((a8.row(), a8.col()), (0, 0));
        assert_eq!(Square::new(7, 7).unwrap().to_string(), "h1");
        assert!("i1".parse::<Square>().is_err());
        assert!("a9".parse::<Square>().is_err());
        assert!("e".parse::<Square>().is_err());
    }

    #[test]
    fn test_offset_stays_on_board() {
        let corner = Square::new(0, 0).unwrap();
        assert!(corner.offset(-1, 0).is_none());
        assert_eq!(corner.offset(1, 2), Square::new(1, 2));
    }

    #[test]
    fn test_all_is_row_major() {
        assert_eq!(Square::ALL[0], Square::new(0, 0).unwrap());
        assert_eq!(Square::ALL[9], Square::new(1, 1).unwrap());
        assert_eq!(Square::ALL[63], Square::new(7, 7).unwrap());
        assert!(Square::ALL.iter().enumerate().all(|(i, sq)| sq.index() == i));
    }
}
