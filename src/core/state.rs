//! Game state: piles, score, move log and selection.
//!
//! A `GameState` is an explicit value owned by the caller. Move and undo
//! operations (see `rules`) mutate it in place and either complete fully or
//! leave it untouched.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::action::MoveRecord;
use super::card::{Card, Rank};
use super::config::{FaceDownPolicy, GameConfig};
use super::deck::{build_deck, deal, deal_full_deck, shuffle};
use super::rng::{EntropySource, GameRng};
use crate::error::{GameError, Result};
use crate::piles::{Location, Pile, Table};

/// Cards in a finished foundation.
pub const FOUNDATION_FULL: usize = Rank::ALL.len();

/// Complete state of one game.
///
/// Uses an `im` vector for the move log so snapshots of the state stay
/// cheap to clone.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub(crate) table: Table,
    pub(crate) score: i32,
    pub(crate) moves: Vector<MoveRecord>,
    pub(crate) selection: Option<Location>,
    pub(crate) policy: FaceDownPolicy,
    pub(crate) seed: Option<u64>,
}

impl GameState {
    /// Shuffle and deal a new game.
    ///
    /// ```
    /// use klondike_engine::{GameConfig, GameState};
    ///
    /// let state = GameState::new_game(&GameConfig::new().with_seed(1));
    /// assert_eq!(state.stock().len(), 24);
    /// assert_eq!(state.score(), 0);
    /// ```
    #[must_use]
    pub fn new_game(config: &GameConfig) -> Self {
        let mut rng = match config.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };
        let mut state = Self::with_entropy(&mut rng, config.face_down);
        state.seed = Some(rng.seed());
        log::info!("Dealt new game with seed {}", rng.seed());
        state
    }

    /// Shuffle with the given entropy source and deal.
    #[must_use]
    pub fn with_entropy<R: EntropySource + ?Sized>(rng: &mut R, policy: FaceDownPolicy) -> Self {
        let mut deck = build_deck();
        shuffle(&mut deck, rng);
        Self::from_validated(Table::from_deal(deal_full_deck(deck), policy), policy)
    }

    /// Deal a deck in the given order without shuffling.
    ///
    /// The deck must be exactly the 52 distinct cards.
    pub fn from_deck(deck: Vec<Card>, policy: FaceDownPolicy) -> Result<Self> {
        let dealt = deal(deck)?;
        Self::from_table(Table::from_deal(dealt, policy), policy)
    }

    /// Start from an explicit layout.
    ///
    /// Rejects tables that are not a partition of one deck, whose
    /// foundations are out of order or that hide a tableau top. Under
    /// `FaceDownPolicy::AllFaceUp` any face-down marks on the tableau are
    /// cleared first.
    pub fn from_table(mut table: Table, policy: FaceDownPolicy) -> Result<Self> {
        if !policy.is_tracked() {
            for pile in &mut table.tableau {
                pile.reveal_all();
            }
        }
        table.validate()?;
        Ok(Self::from_validated(table, policy))
    }

    fn from_validated(table: Table, policy: FaceDownPolicy) -> Self {
        Self {
            table,
            score: 0,
            moves: Vector::new(),
            selection: None,
            policy,
            seed: None,
        }
    }

    // === Queries ===

    /// All piles.
    #[must_use]
    pub fn table(&self) -> &Table {
        &self.table
    }

    /// Get a pile by location.
    pub fn pile(&self, location: Location) -> Result<&Pile> {
        self.table
            .pile(location)
            .ok_or(GameError::InvalidLocation(location))
    }

    #[must_use]
    pub fn tableau(&self) -> &[Pile] {
        &self.table.tableau
    }

    #[must_use]
    pub fn foundations(&self) -> &[Pile] {
        &self.table.foundations
    }

    #[must_use]
    pub fn stock(&self) -> &Pile {
        &self.table.stock
    }

    #[must_use]
    pub fn waste(&self) -> &Pile {
        &self.table.waste
    }

    #[must_use]
    pub fn score(&self) -> i32 {
        self.score
    }

    /// The move log, oldest first.
    #[must_use]
    pub fn moves(&self) -> &Vector<MoveRecord> {
        &self.moves
    }

    #[must_use]
    pub fn can_undo(&self) -> bool {
        !self.moves.is_empty()
    }

    /// The selected source pile, if a first click chose one.
    #[must_use]
    pub fn selection(&self) -> Option<Location> {
        self.selection
    }

    #[must_use]
    pub fn face_down_policy(&self) -> FaceDownPolicy {
        self.policy
    }

    /// Seed of the shuffle, for games dealt by `new_game`.
    #[must_use]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// True once every foundation holds a full suit.
    #[must_use]
    pub fn is_won(&self) -> bool {
        self.table
            .foundations
            .iter()
            .all(|pile| pile.len() == FOUNDATION_FULL)
    }
}
