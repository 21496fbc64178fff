//! Error taxonomy for rejected operations.
//!
//! No error is fatal: every failing call leaves the game state exactly as it
//! was before the call.

use thiserror::Error;

use crate::piles::Location;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Move rejected by the stacking rules")]
    InvalidMove,
    #[error("No card to move from {0}")]
    EmptySource(Location),
    #[error("Cannot take {requested} cards from {from}, only {available} can move")]
    RunUnavailable {
        from: Location,
        requested: usize,
        available: usize,
    },
    #[error("{0} cannot be used here")]
    InvalidLocation(Location),
    #[error("Nothing to undo")]
    NothingToUndo,
    #[error("Deck holds {available} cards, dealing needs {needed}")]
    ShortDeck { needed: usize, available: usize },
    #[error("Layout is not a valid partition of the deck: {0}")]
    InvalidLayout(&'static str),
}

impl GameError {
    /// True for rejections a player would see as an illegal move.
    ///
    /// Moving from an empty pile counts as an invalid move.
    pub const fn is_invalid_move(self) -> bool {
        matches!(
            self,
            Self::InvalidMove | Self::EmptySource(_) | Self::RunUnavailable { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, GameError>;
