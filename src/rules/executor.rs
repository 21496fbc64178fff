//! Applying moves to a game state.
//!
//! Every operation here either completes (piles, log and score updated
//! together) or returns an error with the state untouched.

use crate::core::action::{MoveKind, MoveRecord, MoveRequest};
use crate::core::state::GameState;
use crate::error::{GameError, Result};
use crate::piles::{Location, Pile, PileKind, Run};

use super::scoring::score_delta;
use super::validator::is_valid_move;

impl GameState {
    /// Number of cards that can currently be lifted from `location`.
    ///
    /// For a tableau pile this is its face-up run; waste and foundation
    /// piles only give up their top card.
    pub fn movable_run_length(&self, location: Location) -> Result<usize> {
        let pile = self.pile(location)?;
        Ok(match location.kind() {
            PileKind::Tableau => pile.face_up_count(),
            PileKind::Waste | PileKind::Foundation => pile.len().min(1),
            PileKind::Stock => 0,
        })
    }

    /// Would `request` be accepted? Never mutates the state.
    pub fn check_move(&self, request: MoveRequest) -> Result<()> {
        let MoveRequest {
            from,
            to,
            run_length,
        } = request;

        let source = self.pile(from)?;
        let destination = self.pile(to)?;

        if from.kind() == PileKind::Stock {
            return Err(GameError::InvalidLocation(from));
        }
        if from == to || run_length == 0 {
            return Err(GameError::InvalidMove);
        }
        if source.is_empty() {
            return Err(GameError::EmptySource(from));
        }

        let available = self.movable_run_length(from)?;
        if run_length > available {
            return Err(GameError::RunUnavailable {
                from,
                requested: run_length,
                available,
            });
        }

        // Foundations are built one card at a time.
        if to.kind() == PileKind::Foundation && run_length > 1 {
            return Err(GameError::InvalidMove);
        }

        let run = source.peek_run(run_length).ok_or(GameError::InvalidMove)?;
        if is_valid_move(run, to.kind(), destination.cards()) {
            Ok(())
        } else {
            Err(GameError::InvalidMove)
        }
    }

    /// Move a run between two piles.
    ///
    /// On success the move is appended to the log, the score changes by
    /// the move's delta and, under tracked face-down cards, a newly exposed
    /// tableau card is turned face-up.
    pub fn request_move(&mut self, request: MoveRequest) -> Result<MoveRecord> {
        if let Err(err) = self.check_move(request) {
            log::trace!("Rejected {:?}: {}", request, err);
            return Err(err);
        }

        let MoveRequest {
            from,
            to,
            run_length,
        } = request;
        let cards = self.take_run(from, run_length)?;

        let mut revealed = false;
        if let Some(source) = self.table.pile_mut(from) {
            if self.policy.is_tracked() && from.kind() == PileKind::Tableau {
                revealed = source.reveal_top();
            }
        }
        if let Some(destination) = self.table.pile_mut(to) {
            destination.extend_run(&cards);
        }

        let delta = score_delta(from.kind(), to.kind());
        self.score += delta;

        let record = MoveRecord {
            kind: MoveKind::Transfer,
            from,
            to,
            cards,
            score_delta: delta,
            revealed,
        };
        log::debug!(
            "Moved {} card(s) {} -> {}, score {:+} = {}",
            record.run_length(),
            from,
            to,
            delta,
            self.score
        );
        self.moves.push_back(record.clone());
        Ok(record)
    }

    fn take_run(&mut self, from: Location, run_length: usize) -> Result<Run> {
        self.table
            .pile_mut(from)
            .and_then(|pile| pile.take_run(run_length))
            .ok_or(GameError::InvalidMove)
    }

    /// Turn the next stock card onto the waste, or recycle the waste into
    /// the stock when the stock is empty.
    ///
    /// Recycling reverses the waste so the stock is drawn in its original
    /// order again. It is always recorded, even when the waste is empty.
    pub fn draw_or_recycle(&mut self) -> MoveRecord {
        let record = match self.table.stock.pop() {
            Some(card) => {
                self.table.waste.push(card);
                log::debug!("Drew {card}");
                MoveRecord::draw(card)
            }
            None => {
                let waste = self.table.waste.take_all();
                let record = MoveRecord::recycle(Run::from_slice(&waste));
                log::debug!("Recycled {} waste card(s) into the stock", waste.len());
                self.table.stock = Pile::from_cards(waste.into_iter().rev().collect());
                record
            }
        };

        self.moves.push_back(record.clone());
        record
    }

    /// Move the top card of `from` to the first foundation that accepts it.
    pub fn auto_move_to_foundation(&mut self, from: Location) -> Result<MoveRecord> {
        let mut rejection = GameError::InvalidMove;
        for foundation in Location::foundations() {
            let request = MoveRequest::new(from, foundation);
            match self.check_move(request) {
                Ok(()) => return self.request_move(request),
                Err(GameError::InvalidMove) => {}
                Err(err) => rejection = err,
            }
        }
        log::trace!("No foundation accepts the top of {}: {}", from, rejection);
        Err(rejection)
    }
}
