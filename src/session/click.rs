//! Click-driven selection state machine.
//!
//! The presentation layer forwards clicks on piles. A first click on a
//! tableau pile selects it; the next click on a tableau or foundation pile
//! supplies the destination and always clears the selection. Stock and
//! waste clicks act immediately.

use crate::core::action::{MoveRecord, MoveRequest};
use crate::core::state::GameState;
use crate::error::{GameError, Result};
use crate::piles::{Location, PileKind};

/// What a click did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ClickOutcome {
    /// Nothing happened.
    NoChange,
    /// A source pile is now selected.
    Selected(Location),
    /// A move, draw or recycle was applied.
    Moved(MoveRecord),
    /// The attempted move was refused; the state is unchanged apart from
    /// the cleared selection.
    Rejected(GameError),
}

impl ClickOutcome {
    /// Did the click change anything a presentation layer shows?
    #[must_use]
    pub const fn has_update(&self) -> bool {
        !matches!(self, Self::NoChange)
    }
}

/// Outcome of one click cycle, with the win check that follows it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClickReport {
    pub outcome: ClickOutcome,
    pub won: bool,
}

impl GameState {
    /// Handle a click on `location`.
    ///
    /// Out-of-range locations are refused without touching the selection.
    pub fn click(&mut self, location: Location) -> Result<ClickReport> {
        if !location.is_in_range() {
            return Err(GameError::InvalidLocation(location));
        }

        let outcome = match location.kind() {
            PileKind::Stock => ClickOutcome::Moved(self.draw_or_recycle()),
            PileKind::Waste => self.click_waste(),
            PileKind::Tableau | PileKind::Foundation => match self.selection.take() {
                Some(selected) => self.complete_selection(selected, location),
                None if location.kind() == PileKind::Tableau => {
                    self.selection = Some(location);
                    ClickOutcome::Selected(location)
                }
                None => ClickOutcome::NoChange,
            },
        };

        let won = self.is_won();
        if won && matches!(outcome, ClickOutcome::Moved(_)) {
            log::info!("Game won with score {}", self.score);
        }
        Ok(ClickReport { outcome, won })
    }

    /// Drop the current selection, if any.
    pub fn clear_selection(&mut self) {
        self.selection = None;
    }

    fn click_waste(&mut self) -> ClickOutcome {
        if self.table.waste.is_empty() {
            return ClickOutcome::NoChange;
        }
        match self.auto_move_to_foundation(Location::Waste) {
            Ok(record) => ClickOutcome::Moved(record),
            Err(_) => ClickOutcome::NoChange,
        }
    }

    /// Second click: move from the selected pile to `destination`.
    ///
    /// A tableau source moves its whole face-up run; any other source moves
    /// one card. Clicking the selected pile again is a rejected move.
    fn complete_selection(&mut self, selected: Location, destination: Location) -> ClickOutcome {
        let run_length = match (selected.kind(), destination.kind()) {
            (PileKind::Tableau, PileKind::Tableau) => self.movable_run_length(selected).unwrap_or(0),
            _ => 1,
        };
        if run_length == 0 {
            return ClickOutcome::Rejected(GameError::EmptySource(selected));
        }

        match self.request_move(MoveRequest::with_run(selected, destination, run_length)) {
            Ok(record) => ClickOutcome::Moved(record),
            Err(err) => ClickOutcome::Rejected(err),
        }
    }
}
