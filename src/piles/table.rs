//! The full set of piles on the table.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use super::location::{Location, FOUNDATION_PILES, TABLEAU_PILES};
use super::pile::Pile;
use crate::core::card::{Card, Rank};
use crate::core::config::FaceDownPolicy;
use crate::core::deck::{Deal, DECK_SIZE};
use crate::error::{GameError, Result};

/// Tableau, foundations, stock and waste.
///
/// ## Usage
///
/// ```
/// use klondike_engine::piles::{Location, Pile, Table};
///
/// let mut table = Table::default();
/// table.stock = Pile::from_cards(vec!["Ah".parse().unwrap()]);
///
/// assert_eq!(table.pile(Location::Stock).map(Pile::len), Some(1));
/// assert!(table.pile(Location::Tableau(7)).is_none());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    pub tableau: [Pile; TABLEAU_PILES],
    pub foundations: [Pile; FOUNDATION_PILES],
    pub stock: Pile,
    pub waste: Pile,
}

impl Table {
    /// Lay out a dealt deck. Under `FaceDownPolicy::Tracked` every tableau
    /// card except the top one starts face-down.
    #[must_use]
    pub fn from_deal(deal: Deal, policy: FaceDownPolicy) -> Self {
        let Deal { tableau, stock } = deal;
        let tableau = tableau.map(|cards| {
            let hidden = match policy {
                FaceDownPolicy::Tracked => cards.len().saturating_sub(1),
                FaceDownPolicy::AllFaceUp => 0,
            };
            Pile::with_face_down(cards, hidden)
        });

        Self {
            tableau,
            foundations: Default::default(),
            stock: Pile::from_cards(stock),
            waste: Pile::new(),
        }
    }

    /// Get a pile by location, `None` if the index is out of range.
    #[must_use]
    pub fn pile(&self, location: Location) -> Option<&Pile> {
        match location {
            Location::Stock => Some(&self.stock),
            Location::Waste => Some(&self.waste),
            Location::Tableau(i) => self.tableau.get(i),
            Location::Foundation(i) => self.foundations.get(i),
        }
    }

    /// Get a mutable pile by location, `None` if the index is out of range.
    pub fn pile_mut(&mut self, location: Location) -> Option<&mut Pile> {
        match location {
            Location::Stock => Some(&mut self.stock),
            Location::Waste => Some(&mut self.waste),
            Location::Tableau(i) => self.tableau.get_mut(i),
            Location::Foundation(i) => self.foundations.get_mut(i),
        }
    }

    /// Iterate over every pile with its location.
    pub fn iter(&self) -> impl Iterator<Item = (Location, &Pile)> {
        let fixed = [(Location::Stock, &self.stock), (Location::Waste, &self.waste)];
        fixed
            .into_iter()
            .chain(self.tableau.iter().enumerate().map(|(i, p)| (Location::Tableau(i), p)))
            .chain(
                self.foundations
                    .iter()
                    .enumerate()
                    .map(|(i, p)| (Location::Foundation(i), p)),
            )
    }

    /// Total number of cards on the table.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.iter().map(|(_, pile)| pile.len()).sum()
    }

    /// Check the table invariants:
    /// - exactly the 52 distinct cards of one deck
    /// - every foundation single-suited, ascending by one from Ace
    /// - face-down cards only in the tableau, never covering a pile's top
    pub fn validate(&self) -> Result<()> {
        if self.card_count() != DECK_SIZE {
            return Err(GameError::InvalidLayout("table must hold exactly 52 cards"));
        }

        let mut seen: FxHashSet<Card> = FxHashSet::default();
        for (_, pile) in self.iter() {
            for &card in pile.cards() {
                if !seen.insert(card) {
                    return Err(GameError::InvalidLayout("card appears more than once"));
                }
            }
        }

        for foundation in &self.foundations {
            if !is_foundation_sequence(foundation.cards()) {
                return Err(GameError::InvalidLayout(
                    "foundation must build up by suit from Ace",
                ));
            }
            if foundation.face_down_count() > 0 {
                return Err(GameError::InvalidLayout("foundation cards must be face-up"));
            }
        }

        if self.stock.face_down_count() > 0 || self.waste.face_down_count() > 0 {
            return Err(GameError::InvalidLayout(
                "only tableau piles track face-down cards",
            ));
        }

        for pile in &self.tableau {
            if !pile.is_empty() && pile.face_down_count() >= pile.len() {
                return Err(GameError::InvalidLayout(
                    "tableau top card must be face-up",
                ));
            }
        }

        Ok(())
    }
}

fn is_foundation_sequence(cards: &[Card]) -> bool {
    match cards.first() {
        None => true,
        Some(first) if first.rank != Rank::Ace => false,
        Some(_) => cards
            .windows(2)
            .all(|pair| pair[1].follows_on_foundation(pair[0])),
    }
}
