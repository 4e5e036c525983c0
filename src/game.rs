//! Game session: one owned board plus history and outcome tracking.
//!
//! `Game` is the single-threaded session. `SharedGame` wraps it behind a
//! mutex for presentation layers that query legal destinations from one
//! thread while moves are submitted from another.

use std::sync::Arc;

use parking_lot::Mutex;

use crate::board::{AppliedMove, Board, GameStatus, Move, MoveError, MoveList, Square};

/// A game in progress.
#[derive(Clone, Debug)]
pub struct Game {
    board: Board,
    history: Vec<AppliedMove>,
    status: GameStatus,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// New game from the standard initial position.
    #[must_use]
    pub fn new() -> Self {
        Self::from_board(Board::new())
    }

    /// Continue play from an arbitrary position.
    #[must_use]
    pub fn from_board(board: Board) -> Self {
        let status = board.status();
        Game {
            board,
            history: Vec::new(),
            status,
        }
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn history(&self) -> &[AppliedMove] {
        &self.history
    }

    /// Status for the side to move, as of the last accepted move.
    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.status.is_over()
    }

    /// Submit a move for the side to move.
    pub fn submit(&mut self, mv: Move) -> Result<AppliedMove, MoveError> {
        if self.is_over() {
            return Err(MoveError::GameOver);
        }
        let applied = self.board.play(mv)?;
        self.history.push(applied);
        self.status = self.board.status();

        #[cfg(feature = "logging")]
        if let Some(message) = self.status.message() {
            log::info!("{message}");
        }

        Ok(applied)
    }

    /// Highlight query: where the piece on `from` may go.
    #[must_use]
    pub fn legal_destinations(&self, from: Square) -> Vec<Square> {
        if self.is_over() {
            return Vec::new();
        }
        self.board.legal_destinations(from)
    }

    /// Legal moves for the side to move.
    #[must_use]
    pub fn legal_moves(&self) -> MoveList {
        if self.is_over() {
            return MoveList::new();
        }
        self.board.all_legal_moves(self.board.current_turn())
    }
}

/// Thread-safe handle to a [`Game`].
///
/// Every call holds the lock for its full duration, so a legality query never
/// observes a half-applied move.
#[derive(Clone, Debug, Default)]
pub struct SharedGame(Arc<Mutex<Game>>);

impl SharedGame {
    #[must_use]
    pub fn new(game: Game) -> Self {
        SharedGame(Arc::new(Mutex::new(game)))
    }

    pub fn submit(&self, mv: Move) -> Result<AppliedMove, MoveError> {
        self.0.lock().submit(mv)
    }

    #[must_use]
    pub fn legal_destinations(&self, from: Square) -> Vec<Square> {
        self.0.lock().legal_destinations(from)
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.0.lock().status()
    }

    /// Copy of the current position.
    #[must_use]
    pub fn snapshot(&self) -> Board {
        self.0.lock().board().clone()
    }

    /// Run a closure with exclusive access to the game.
    pub fn with_game<R>(&self, f: impl FnOnce(&mut Game) -> R) -> R {
        f(&mut self.0.lock())
    }
}
