//! Undo: exact inversion of the most recent logged move.

use crate::core::action::{MoveKind, MoveRecord};
use crate::core::state::GameState;
use crate::error::{GameError, Result};
use crate::piles::Pile;

impl GameState {
    /// Pop the last move off the log and invert it.
    ///
    /// - Draw: the waste top goes back onto the stock.
    /// - Recycle: the waste is restored from the record and the stock emptied.
    /// - Transfer: the run goes back from destination to source, a card the
    ///   move turned face-up is covered again and the score delta reverted.
    ///
    /// Returns the undone record, or `NothingToUndo` on an empty log.
    pub fn undo(&mut self) -> Result<MoveRecord> {
        let record = self.moves.pop_back().ok_or(GameError::NothingToUndo)?;

        match record.kind {
            MoveKind::Draw => {
                if let Some(card) = self.table.waste.pop() {
                    self.table.stock.push(card);
                }
            }
            MoveKind::Recycle => {
                self.table.waste = Pile::from_cards(record.cards.to_vec());
                self.table.stock = Pile::new();
            }
            MoveKind::Transfer => {
                let run = self
                    .table
                    .pile_mut(record.to)
                    .and_then(|pile| pile.take_run(record.cards.len()));
                if let (Some(run), Some(source)) = (run, self.table.pile_mut(record.from)) {
                    if record.revealed {
                        source.cover_top();
                    }
                    source.extend_run(&run);
                }
            }
        }

        self.score -= record.score_delta;
        log::debug!(
            "Undid {:?} of {} card(s) {} -> {}",
            record.kind,
            record.run_length(),
            record.from,
            record.to
        );
        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::GameConfig;
    use crate::piles::Location;

    #[test]
    fn test_nothing_to_undo() {
        let mut state = GameState::new_game(&GameConfig::new().with_seed(9));
        let before = state.clone();

        assert_eq!(state.undo(), Err(GameError::NothingToUndo));
        assert_eq!(state, before);
    }

    #[test]
    fn test_undo_draw() {
        let mut state = GameState::new_game(&GameConfig::new().with_seed(9));
        let before = state.clone();

        let drawn = state.draw_or_recycle();
        let undone = state.undo().unwrap();

        assert_eq!(drawn, undone);
        assert_eq!(state, before);
    }

    #[test]
    fn test_undo_recycle() {
        let mut state = GameState::new_game(&GameConfig::new().with_seed(9));
        for _ in 0..24 {
            state.draw_or_recycle();
        }
        let before = state.clone();

        let record = state.draw_or_recycle();
        assert_eq!(record.kind, MoveKind::Recycle);
        assert_eq!(state.waste().len(), 0);

        state.undo().unwrap();
        assert_eq!(state, before);
        assert!(state.stock().is_empty());
        assert_eq!(state.waste().len(), 24);
    }

    #[test]
    fn test_undo_restores_score_and_face_down() {
        let mut state = GameState::new_game(&GameConfig::new().with_seed(9));

        // Try every legal move; each must invert exactly.
        for request in state.legal_moves() {
            let before = state.clone();
            state.request_move(request).unwrap();
            state.undo().unwrap();
            assert_eq!(state, before, "undo of {request:?} did not restore the state");
        }
    }

    #[test]
    fn test_undo_is_lifo() {
        let mut state = GameState::new_game(&GameConfig::new().with_seed(9));
        let start = state.clone();

        state.draw_or_recycle();
        state.draw_or_recycle();
        let second_snapshot = state.clone();
        state.draw_or_recycle();

        state.undo().unwrap();
        assert_eq!(state, second_snapshot);
        state.undo().unwrap();
        state.undo().unwrap();
        assert_eq!(state, start);
        assert_eq!(state.undo(), Err(GameError::NothingToUndo));
    }

    #[test]
    fn test_undo_does_not_touch_selection() {
        let mut state = GameState::new_game(&GameConfig::new().with_seed(9));
        state.draw_or_recycle();
        state.selection = Some(Location::Tableau(2));

        state.undo().unwrap();
        assert_eq!(state.selection(), Some(Location::Tableau(2)));
    }
}
