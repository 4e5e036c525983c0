//! Error types for board operations.

use std::fmt;

use super::types::{Side, Square};

/// Error type for square construction and parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SquareError {
    /// Row out of bounds (must be 0-7)
    RowOutOfBounds { row: usize },
    /// Column out of bounds (must be 0-7)
    ColOutOfBounds { col: usize },
    /// Invalid algebraic notation
    InvalidNotation { notation: String },
}

impl fmt::Display for SquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SquareError::RowOutOfBounds { row } => {
                write!(f, "Row {row} out of bounds (must be 0-7)")
            }
            SquareError::ColOutOfBounds { col } => {
                write!(f, "Column {col} out of bounds (must be 0-7)")
            }
            SquareError::InvalidNotation { notation } => {
                write!(f, "Invalid square notation '{notation}'")
            }
        }
    }
}

impl std::error::Error for SquareError {}

/// Reason a submitted move was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    /// Nothing stands on the source square
    EmptySquare { square: Square },
    /// The piece on the source square belongs to the side not on move
    WrongTurn { expected: Side },
    /// The destination holds a piece of the mover's own side
    OwnPieceOnTarget { square: Square },
    /// The piece cannot move that way
    IllegalPattern { from: Square, to: Square },
    /// Castling out of, through, or into an attacked square
    UnsafeCastling { from: Square, to: Square },
    /// The move would leave (or put) the mover's king under attack
    LeavesKingInCheck { from: Square, to: Square },
    /// The game has already ended
    GameOver,
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::EmptySquare { square } => write!(f, "No piece on {square}"),
            MoveError::WrongTurn { expected } => write!(f, "It is {expected}'s turn"),
            MoveError::OwnPieceOnTarget { square } => {
                write!(f, "{square} is occupied by a friendly piece")
            }
            MoveError::IllegalPattern { from, to } => {
                write!(f, "Piece on {from} cannot move to {to}")
            }
            MoveError::LeavesKingInCheck { from, to } => {
                write!(f, "Move {from}{to} leaves the king in check")
            }
            MoveError::UnsafeCastling { from, to } => {
                write!(f, "Castling {from}{to} crosses an attacked square")
            }
            MoveError::GameOver => write!(f, "The game is over"),
        }
    }
}

impl std::error::Error for MoveError {}

/// Error type for coordinate move parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveParseError {
    /// Move string has invalid length (must be 4-5 characters)
    InvalidLength { len: usize },
    /// Invalid square notation in move
    InvalidSquare { notation: String },
    /// Unknown promotion letter
    InvalidPromotion { char: char },
    /// Promotion to anything but a queen
    Underpromotion { char: char },
    /// Move is not legal in the current position
    IllegalMove { notation: String, reason: MoveError },
}

impl fmt::Display for MoveParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveParseError::InvalidLength { len } => {
                write!(f, "Move must be 4-5 characters, found {len}")
            }
            MoveParseError::InvalidSquare { notation } => {
                write!(f, "Invalid square notation in '{notation}'")
            }
            MoveParseError::InvalidPromotion { char } => {
                write!(f, "Invalid promotion piece '{char}'")
            }
            MoveParseError::Underpromotion { char } => {
                write!(f, "Promotion to '{char}' is not supported, pawns always queen")
            }
            MoveParseError::IllegalMove { notation, reason } => {
                write!(f, "Illegal move '{notation}': {reason}")
            }
        }
    }
}

impl std::error::Error for MoveParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            MoveParseError::IllegalMove { reason, .. } => Some(reason),
            _ => None,
        }
    }
}

/// Error type for FEN parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FenError {
    /// FEN string has too few parts (needs at least 3)
    TooFewParts { found: usize },
    /// Placement field does not have exactly 8 ranks
    WrongRankCount { found: usize },
    /// Invalid piece character in placement field
    InvalidPiece { char: char },
    /// A rank does not describe exactly 8 files
    BadRankWidth { rank: usize, files: usize },
    /// Invalid side to move (must be 'w' or 'b')
    InvalidSideToMove { found: String },
    /// Invalid castling character
    InvalidCastling { char: char },
    /// The placement describes an impossible position
    Position(PositionError),
}

impl fmt::Display for FenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FenError::TooFewParts { found } => {
                write!(f, "FEN must have at least 3 parts, found {found}")
            }
            FenError::WrongRankCount { found } => {
                write!(f, "FEN placement must have 8 ranks, found {found}")
            }
            FenError::InvalidPiece { char } => {
                write!(f, "Invalid piece character '{char}' in FEN")
            }
            FenError::BadRankWidth { rank, files } => {
                write!(f, "Rank {rank} describes {files} files, expected 8")
            }
            FenError::InvalidSideToMove { found } => {
                write!(f, "Invalid side to move '{found}', expected 'w' or 'b'")
            }
            FenError::InvalidCastling { char } => {
                write!(f, "Invalid castling character '{char}' in FEN")
            }
            FenError::Position(err) => write!(f, "Invalid position: {err}"),
        }
    }
}

impl std::error::Error for FenError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FenError::Position(err) => Some(err),
            _ => None,
        }
    }
}

impl From<PositionError> for FenError {
    fn from(err: PositionError) -> Self {
        FenError::Position(err)
    }
}

/// Error type for structurally invalid positions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PositionError {
    /// More than one king of the same side
    TooManyKings { side: Side, count: usize },
    /// A pawn on its own promotion row
    PawnOnLastRow { square: Square },
}

impl fmt::Display for PositionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PositionError::TooManyKings { side, count } => {
                write!(f, "{side} has {count} kings, at most one allowed")
            }
            PositionError::PawnOnLastRow { square } => {
                write!(f, "Pawn on {square} should already have promoted")
            }
        }
    }
}

impl std::error::Error for PositionError {}
