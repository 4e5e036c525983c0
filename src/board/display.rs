use std::fmt;

use super::{Board, Side};

impl fmt::Display for Board {
    /// Text diagram with rank 8 on top, White pieces in uppercase.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "  +---+---+---+---+---+---+---+---+")?;
        for (row, cells) in self.squares.iter().enumerate() {
            write!(f, "{} |", 8 - row)?;
            for cell in cells {
                let ch = cell.map_or('.', |piece| piece.to_fen_char());
                write!(f, " {ch} |")?;
            }
            writeln!(f)?;
            writeln!(f, "  +---+---+---+---+---+---+---+---+")?;
        }
        writeln!(f, "    a   b   c   d   e   f   g   h")?;
        let turn = match self.turn {
            Side::White => "White",
            Side::Black => "Black",
        };
        write!(f, "{turn} to move")
    }
}
