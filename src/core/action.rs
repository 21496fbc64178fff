//! Move requests and the reversible move record.
//!
//! A `MoveRequest` is what the presentation layer asks for. A `MoveRecord`
//! is what the executor writes to the log once a move has been applied; it
//! carries everything undo needs to invert the move exactly.

use serde::{Deserialize, Serialize};

use crate::core::card::Card;
use crate::piles::{Location, Run};

/// A request to move the top `run_length` cards of `from` onto `to`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MoveRequest {
    pub from: Location,
    pub to: Location,
    pub run_length: usize,
}

impl MoveRequest {
    /// Single-card move.
    #[must_use]
    pub const fn new(from: Location, to: Location) -> Self {
        Self {
            from,
            to,
            run_length: 1,
        }
    }

    /// Multi-card move.
    #[must_use]
    pub const fn with_run(from: Location, to: Location, run_length: usize) -> Self {
        Self {
            from,
            to,
            run_length,
        }
    }
}

/// What a logged move did.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveKind {
    /// One card turned from stock to waste.
    Draw,
    /// Exhausted stock refilled from the waste.
    Recycle,
    /// Run moved between two piles.
    Transfer,
}

/// A logged move.
///
/// Draw and recycle records always read `Stock` to `Waste`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    pub kind: MoveKind,
    pub from: Location,
    pub to: Location,

    /// Cards moved, bottom first. For a recycle, the entire waste as it
    /// was before the recycle.
    pub cards: Run,

    /// Change applied to the score.
    pub score_delta: i32,

    /// True if the move exposed a face-down tableau card and turned it.
    pub revealed: bool,
}

impl MoveRecord {
    pub(crate) fn draw(card: Card) -> Self {
        Self {
            kind: MoveKind::Draw,
            from: Location::Stock,
            to: Location::Waste,
            cards: Run::from_slice(&[card]),
            score_delta: 0,
            revealed: false,
        }
    }

    pub(crate) fn recycle(waste: Run) -> Self {
        Self {
            kind: MoveKind::Recycle,
            from: Location::Stock,
            to: Location::Waste,
            cards: waste,
            score_delta: 0,
            revealed: false,
        }
    }

    /// Number of cards the move carried.
    #[must_use]
    pub fn run_length(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_transfer(&self) -> bool {
        self.kind == MoveKind::Transfer
    }
}
