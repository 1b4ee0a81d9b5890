//! Explicit board state holder.
//!
//! # Responsibility
//! - Hold the one live board for a process and hand it to callers.
//!
//! # Invariants
//! - The board is installed exactly once.
//! - Access before installation is an error, never a silent empty board.
//! - Every mutation runs to completion under the lock; readers never see
//!   a half-applied move.

use crate::repo::board_repo::InMemoryBoardRepository;
use crate::service::board_service::BoardService;
use once_cell::sync::OnceCell;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::sync::{Arc, Mutex};

/// Board service over process-memory storage.
pub type Board = BoardService<InMemoryBoardRepository>;

/// Shared handle to the live board.
pub type SharedBoard = Arc<Mutex<Board>>;

/// Errors from board context access.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContextError {
    /// `board()` called before `init()`.
    NotInitialized,
    /// `init()` called twice.
    AlreadyInitialized,
    /// A previous holder panicked mid-mutation.
    Poisoned,
}

impl Display for ContextError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotInitialized => write!(f, "board context used before initialization"),
            Self::AlreadyInitialized => write!(f, "board context already initialized"),
            Self::Poisoned => write!(f, "board state poisoned by a panicked mutation"),
        }
    }
}

impl Error for ContextError {}

/// Explicit holder passed to whichever component needs the board.
#[derive(Debug, Default)]
pub struct BoardContext {
    board: OnceCell<SharedBoard>,
}

impl BoardContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a context with the board already installed.
    pub fn with_board(board: Board) -> Self {
        let context = Self::new();
        let _ = context.board.set(Arc::new(Mutex::new(board)));
        context
    }

    /// Installs the live board.
    pub fn init(&self, board: Board) -> Result<(), ContextError> {
        self.board
            .set(Arc::new(Mutex::new(board)))
            .map_err(|_| ContextError::AlreadyInitialized)
    }

    pub fn is_initialized(&self) -> bool {
        self.board.get().is_some()
    }

    /// Returns the shared board handle.
    pub fn board(&self) -> Result<SharedBoard, ContextError> {
        self.board
            .get()
            .cloned()
            .ok_or(ContextError::NotInitialized)
    }

    /// Runs `f` with exclusive access to the board.
    pub fn with<T>(&self, f: impl FnOnce(&mut Board) -> T) -> Result<T, ContextError> {
        let board = self.board.get().ok_or(ContextError::NotInitialized)?;
        let mut guard = board.lock().map_err(|_| ContextError::Poisoned)?;
        Ok(f(&mut guard))
    }
}
