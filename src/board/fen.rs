use std::str::FromStr;

use super::error::{FenError, MoveParseError};
use super::{Board, Move, Piece, PieceKind, Side, Square};

/// FEN of the standard initial position.
pub const START_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// Castling letters with the corner each one refers to.
const CASTLING_CORNERS: [(char, Side, usize); 4] = [
    ('K', Side::White, 7),
    ('Q', Side::White, 0),
    ('k', Side::Black, 7),
    ('q', Side::Black, 0),
];

const KING_COL: usize = 4;

/// Whether `piece` stands on a square it occupies in the initial setup.
fn on_home_square(sq: Square, piece: Piece) -> bool {
    match piece.kind {
        PieceKind::Pawn => sq.row() == piece.side.pawn_start_row(),
        kind => sq.row() == piece.side.back_row() && PieceKind::BACK_RANK[sq.col()] == kind,
    }
}

fn home_square(side: Side, col: usize) -> Square {
    Square::ALL[side.back_row() * 8 + col]
}

impl Board {
    /// Parse a position from FEN notation.
    ///
    /// Only placement, side to move and castling availability are read;
    /// the en passant and clock fields are accepted and ignored. Castling
    /// letters decide whether the king and rooks on their home squares
    /// count as unmoved. Every other piece is unmoved iff it stands on one
    /// of its initial squares.
    pub fn try_from_fen(fen: &str) -> Result<Self, FenError> {
        let mut board = Board::empty();
        let parts: Vec<&str> = fen.split_whitespace().collect();

        if parts.len() < 3 {
            return Err(FenError::TooFewParts { found: parts.len() });
        }

        // Parse piece placement; FEN lists rank 8 (row 0) first
        let ranks: Vec<&str> = parts[0].split('/').collect();
        if ranks.len() != 8 {
            return Err(FenError::WrongRankCount { found: ranks.len() });
        }
        for (row, rank_str) in ranks.iter().enumerate() {
            let mut col = 0;
            for c in rank_str.chars() {
                if let Some(skip) = c.to_digit(10) {
                    col += skip as usize;
                    continue;
                }
                let kind = PieceKind::from_char(c).ok_or(FenError::InvalidPiece { char: c })?;
                let side = if c.is_ascii_uppercase() {
                    Side::White
                } else {
                    Side::Black
                };
                let sq = Square::new(row, col).ok_or(FenError::BadRankWidth {
                    rank: 8 - row,
                    files: col + 1,
                })?;
                let mut piece = Piece::new(kind, side);
                piece.has_moved = !on_home_square(sq, piece);
                board.place_piece(sq, Some(piece));
                col += 1;
            }
            if col != 8 {
                return Err(FenError::BadRankWidth {
                    rank: 8 - row,
                    files: col,
                });
            }
        }

        // Parse side to move
        board.turn = match parts[1] {
            "w" => Side::White,
            "b" => Side::Black,
            other => {
                return Err(FenError::InvalidSideToMove {
                    found: other.to_string(),
                })
            }
        };

        // Parse castling rights
        let mut rights = Vec::new();
        for c in parts[2].chars() {
            match CASTLING_CORNERS.iter().find(|(letter, _, _)| *letter == c) {
                Some(&(_, side, col)) => rights.push((side, col)),
                None if c == '-' => {}
                None => return Err(FenError::InvalidCastling { char: c }),
            }
        }
        for side in Side::BOTH {
            let king_unmoved = rights.iter().any(|&(s, _)| s == side);
            board.mark_home_piece(home_square(side, KING_COL), PieceKind::King, side, king_unmoved);
            for col in [0, 7] {
                let rook_unmoved = rights.contains(&(side, col));
                board.mark_home_piece(home_square(side, col), PieceKind::Rook, side, rook_unmoved);
            }
        }

        board.validate()?;
        Ok(board)
    }

    /// Override `has_moved` for a king or rook standing on its home square.
    fn mark_home_piece(&mut self, sq: Square, kind: PieceKind, side: Side, unmoved: bool) {
        if let Some(mut piece) = self.piece_at(sq) {
            if piece.kind == kind && piece.side == side {
                piece.has_moved = !unmoved;
                self.place_piece(sq, Some(piece));
            }
        }
    }

    /// Whether `side` still holds the castling right towards corner `col`.
    fn castling_available(&self, side: Side, col: usize) -> bool {
        let unmoved = |sq: Square, kind: PieceKind| {
            self.piece_at(sq)
                .is_some_and(|p| p.kind == kind && p.side == side && !p.has_moved)
        };
        unmoved(home_square(side, KING_COL), PieceKind::King)
            && unmoved(home_square(side, col), PieceKind::Rook)
    }

    /// Convert the position to FEN notation.
    #[must_use]
    pub fn to_fen(&self) -> String {
        let mut rows: Vec<String> = Vec::new();
        for row in &self.squares {
            let mut text = String::new();
            let mut empty = 0;
            for cell in row {
                if let Some(piece) = cell {
                    if empty > 0 {
                        text.push_str(&empty.to_string());
                        empty = 0;
                    }
                    text.push(piece.to_fen_char());
                } else {
                    empty += 1;
                }
            }
            if empty > 0 {
                text.push_str(&empty.to_string());
            }
            rows.push(text);
        }

        let active = match self.turn {
            Side::White => "w",
            Side::Black => "b",
        };
        let mut castling: String = CASTLING_CORNERS
            .iter()
            .filter(|&&(_, side, col)| self.castling_available(side, col))
            .map(|&(letter, _, _)| letter)
            .collect();
        if castling.is_empty() {
            castling.push('-');
        }

        format!("{} {active} {castling} - 0 1", rows.join("/"))
    }

    /// Parse a move in coordinate notation (e.g. "e2e4", "e7e8q") and check
    /// that it is legal in the current position.
    ///
    /// # Example
    /// ```
    /// use chess_rules::board::Board;
    ///
    /// let board = Board::new();
    /// let mv = board.parse_move("e2e4").unwrap();
    /// assert_eq!(mv.to_string(), "e2e4");
    /// ```
    pub fn parse_move(&self, notation: &str) -> Result<Move, MoveParseError> {
        let mv: Move = notation.parse()?;
        self.check_move(mv.from, mv.to)
            .map_err(|reason| MoveParseError::IllegalMove {
                notation: notation.to_string(),
                reason,
            })?;
        Ok(mv)
    }
}

impl FromStr for Board {
    type Err = FenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Board::try_from_fen(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::error::{MoveError, PositionError};

    fn sq(s: &str) -> Square {
        s.parse().unwrap()
    }

    #[test]
    fn test_start_fen_matches_new_board() {
        let board = Board::try_from_fen(START_FEN).unwrap();
        assert_eq!(board, Board::new());
        assert_eq!(Board::new().to_fen(), START_FEN);
    }

    #[test]
    fn test_castling_letters_drive_has_moved() {
        let board = Board::try_from_fen("r3k2r/8/8/8/8/8/8/R3K2R w Kq - 0 1").unwrap();
        assert!(!board.piece_at(sq("e1")).unwrap().has_moved);
        assert!(!board.piece_at(sq("h1")).unwrap().has_moved);
        assert!(board.piece_at(sq("a1")).unwrap().has_moved);
        assert!(!board.piece_at(sq("e8")).unwrap().has_moved);
        assert!(board.piece_at(sq("h8")).unwrap().has_moved);
        assert!(!board.piece_at(sq("a8")).unwrap().has_moved);
        assert_eq!(board.to_fen(), "r3k2r/8/8/8/8/8/8/R3K2R w Kq - 0 1");
    }

    #[test]
    fn test_no_castling_marks_king_moved() {
        let board = Board::try_from_fen("4k3/8/8/8/8/8/8/R3K2R w - - 0 1").unwrap();
        assert!(board.piece_at(sq("e1")).unwrap().has_moved);
        assert!(!board.is_legal_move(sq("e1"), sq("g1")));
    }

    #[test]
    fn test_off_home_pieces_count_as_moved() {
        let board = Board::try_from_fen("4k3/8/8/8/4P3/2N5/P7/4K3 w - - 0 1").unwrap();
        assert!(board.piece_at(sq("e4")).unwrap().has_moved);
        assert!(board.piece_at(sq("c3")).unwrap().has_moved);
        assert!(!board.piece_at(sq("a2")).unwrap().has_moved);
    }

    #[test]
    fn test_side_to_move() {
        let board = Board::try_from_fen("4k3/8/8/8/8/8/8/4K3 b - - 0 1").unwrap();
        assert_eq!(board.current_turn(), Side::Black);
    }

    #[test]
    fn test_fen_errors() {
        assert_eq!(
            Board::try_from_fen("8/8/8/8 w"),
            Err(FenError::TooFewParts { found: 2 })
        );
        assert_eq!(
            Board::try_from_fen("8/8/8/8 w -"),
            Err(FenError::WrongRankCount { found: 4 })
        );
        assert_eq!(
            Board::try_from_fen("4k3/8/8/8/8/8/8/4X3 w - - 0 1"),
            Err(FenError::InvalidPiece { char: 'X' })
        );
        assert_eq!(
            Board::try_from_fen("4k3/8/8/8/8/8/8/4K4 w - - 0 1"),
            Err(FenError::BadRankWidth { rank: 1, files: 9 })
        );
        assert_eq!(
            Board::try_from_fen("4k3/8/8/8/8/8/8/4K2 w - - 0 1"),
            Err(FenError::BadRankWidth { rank: 1, files: 7 })
        );
        assert!(matches!(
            Board::try_from_fen("4k3/8/8/8/8/8/8/4K3 x - - 0 1"),
            Err(FenError::InvalidSideToMove { .. })
        ));
        assert_eq!(
            Board::try_from_fen("4k3/8/8/8/8/8/8/4K3 w Z - 0 1"),
            Err(FenError::InvalidCastling { char: 'Z' })
        );
    }

    #[test]
    fn test_fen_rejects_two_kings() {
        assert_eq!(
            Board::try_from_fen("4k3/8/8/8/8/8/8/3KK3 w - - 0 1"),
            Err(FenError::Position(PositionError::TooManyKings {
                side: Side::White,
                count: 2
            }))
        );
    }

    #[test]
    fn test_parse_move_checks_legality() {
        let board = Board::new();
        assert_eq!(
            board.parse_move("e2e4").unwrap(),
            Move::new(sq("e2"), sq("e4"))
        );
        let err = board.parse_move("e2e5").unwrap_err();
        assert_eq!(
            err,
            MoveParseError::IllegalMove {
                notation: "e2e5".to_string(),
                reason: MoveError::IllegalPattern {
                    from: sq("e2"),
                    to: sq("e5"),
                },
            }
        );
        assert!(matches!(
            board.parse_move("e7e5"),
            Err(MoveParseError::IllegalMove {
                reason: MoveError::WrongTurn { .. },
                ..
            })
        ));
    }
}
