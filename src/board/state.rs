#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::error::PositionError;
use super::{Piece, PieceKind, Side, Square};

/// Which safety checks apply on top of the per-piece movement rules.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Rules {
    /// Reject moves that leave the mover's own king attacked.
    pub forbid_self_check: bool,
    /// Castling requires the king not in check and its transit and
    /// destination squares unattacked (both wings alike).
    pub safe_castling: bool,
}

impl Rules {
    /// Strict king safety: no self-check, no castling through attacked squares.
    pub const STANDARD: Rules = Rules {
        forbid_self_check: true,
        safe_castling: true,
    };

    /// Movement geometry only.
    pub const PERMISSIVE: Rules = Rules {
        forbid_self_check: false,
        safe_castling: false,
    };
}

impl Default for Rules {
    fn default() -> Self {
        Rules::STANDARD
    }
}

/// Game position: an 8x8 grid of value-typed pieces plus the side to move.
///
/// Deserialization runs [`Board::validate`], so an impossible position is
/// rejected as a serde error.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawBoard"))]
pub struct Board {
    pub(crate) squares: [[Option<Piece>; 8]; 8],
    pub(crate) turn: Side,
    pub(crate) rules: Rules,
}

/// Unchecked wire form of [`Board`].
#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct RawBoard {
    squares: [[Option<Piece>; 8]; 8],
    turn: Side,
    #[serde(default)]
    rules: Rules,
}

#[cfg(feature = "serde")]
impl TryFrom<RawBoard> for Board {
    type Error = PositionError;

    fn try_from(raw: RawBoard) -> Result<Self, Self::Error> {
        let board = Board {
            squares: raw.squares,
            turn: raw.turn,
            rules: raw.rules,
        };
        board.validate()?;
        Ok(board)
    }
}

impl Board {
    /// Standard initial setup, White to move.
    #[must_use]
    pub fn new() -> Self {
        let mut board = Board::empty();
        for (col, &kind) in PieceKind::BACK_RANK.iter().enumerate() {
            board.squares[Side::Black.back_row()][col] = Some(Piece::new(kind, Side::Black));
            board.squares[Side::White.back_row()][col] = Some(Piece::new(kind, Side::White));
            board.squares[Side::Black.pawn_start_row()][col] =
                Some(Piece::new(PieceKind::Pawn, Side::Black));
            board.squares[Side::White.pawn_start_row()][col] =
                Some(Piece::new(PieceKind::Pawn, Side::White));
        }
        board
    }

    /// Standard initial setup under a non-default rule set.
    #[must_use]
    pub fn with_rules(rules: Rules) -> Self {
        let mut board = Board::new();
        board.rules = rules;
        board
    }

    pub(crate) fn empty() -> Self {
        Board {
            squares: [[None; 8]; 8],
            turn: Side::White,
            rules: Rules::STANDARD,
        }
    }

    /// Occupant of a square, if any.
    #[inline]
    #[must_use]
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.squares[sq.row()][sq.col()]
    }

    /// Set or clear a square.
    #[inline]
    pub(crate) fn place_piece(&mut self, sq: Square, piece: Option<Piece>) {
        self.squares[sq.row()][sq.col()] = piece;
    }

    #[inline]
    pub(crate) fn is_empty(&self, sq: Square) -> bool {
        self.piece_at(sq).is_none()
    }

    /// Side whose move is next.
    #[inline]
    #[must_use]
    pub fn current_turn(&self) -> Side {
        self.turn
    }

    #[inline]
    #[must_use]
    pub fn rules(&self) -> Rules {
        self.rules
    }

    pub fn set_rules(&mut self, rules: Rules) {
        self.rules = rules;
    }

    /// Iterate over every occupied square.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::ALL
            .iter()
            .filter_map(move |&sq| self.piece_at(sq).map(|p| (sq, p)))
    }

    /// Occupied squares of one side.
    pub fn pieces_of(&self, side: Side) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.pieces().filter(move |(_, p)| p.side == side)
    }

    pub(crate) fn find_king(&self, side: Side) -> Option<Square> {
        self.pieces_of(side)
            .find(|(_, p)| p.kind == PieceKind::King)
            .map(|(sq, _)| sq)
    }

    /// Check the structural invariants every reachable position satisfies.
    pub fn validate(&self) -> Result<(), PositionError> {
        for side in Side::BOTH {
            let count = self
                .pieces_of(side)
                .filter(|(_, p)| p.kind == PieceKind::King)
                .count();
            if count > 1 {
                return Err(PositionError::TooManyKings { side, count });
            }
        }
        if let Some((square, _)) = self
            .pieces()
            .find(|(sq, p)| p.kind == PieceKind::Pawn && sq.row() == p.side.promotion_row())
        {
            return Err(PositionError::PawnOnLastRow { square });
        }
        Ok(())
    }

    #[inline]
    pub(crate) fn debug_assert_invariants(&self) {
        debug_assert!(
            self.validate().is_ok(),
            "board invariant violated: {:?}",
            self.validate()
        );
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}
