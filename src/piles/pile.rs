//! An ordered pile of cards.
//!
//! Index 0 is the bottom, the last index is the top. A pile also tracks how
//! many cards at its bottom are face-down; everything above them is face-up.
//! Only tableau piles ever hold face-down cards.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::card::Card;

/// A run of cards taken from the top of a pile, bottom card first.
///
/// SmallVec keeps the common one-card move off the heap.
pub type Run = SmallVec<[Card; 4]>;

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pile {
    cards: Vec<Card>,
    face_down: usize,
}

impl Pile {
    /// Create an empty pile.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a pile of face-up cards, bottom first.
    #[must_use]
    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self {
            cards,
            face_down: 0,
        }
    }

    /// Create a pile whose bottom `face_down` cards are hidden.
    ///
    /// `face_down` is clamped to the pile size.
    #[must_use]
    pub fn with_face_down(cards: Vec<Card>, face_down: usize) -> Self {
        let face_down = face_down.min(cards.len());
        Self { cards, face_down }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// All cards, bottom first.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// The accessible card, if any.
    #[must_use]
    pub fn top(&self) -> Option<Card> {
        self.cards.last().copied()
    }

    /// Number of hidden cards at the bottom.
    #[must_use]
    pub fn face_down_count(&self) -> usize {
        self.face_down
    }

    /// Number of visible cards at the top.
    #[must_use]
    pub fn face_up_count(&self) -> usize {
        self.cards.len().saturating_sub(self.face_down)
    }

    /// The visible cards, bottom first.
    #[must_use]
    pub fn face_up_cards(&self) -> &[Card] {
        &self.cards[self.face_down.min(self.cards.len())..]
    }

    /// Is the card at `index` face-up?
    #[must_use]
    pub fn is_face_up(&self, index: usize) -> bool {
        index >= self.face_down && index < self.cards.len()
    }

    /// The top `count` cards without removing them, bottom first.
    ///
    /// Returns `None` if the pile holds fewer than `count` cards.
    #[must_use]
    pub fn peek_run(&self, count: usize) -> Option<&[Card]> {
        let start = self.cards.len().checked_sub(count)?;
        Some(&self.cards[start..])
    }

    /// Place a card on top.
    pub fn push(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Remove and return the top card.
    pub fn pop(&mut self) -> Option<Card> {
        let card = self.cards.pop()?;
        self.face_down = self.face_down.min(self.cards.len());
        Some(card)
    }

    /// Remove the top `count` cards, returned bottom first.
    ///
    /// Returns `None` and leaves the pile untouched if it holds fewer than
    /// `count` cards.
    pub fn take_run(&mut self, count: usize) -> Option<Run> {
        let start = self.cards.len().checked_sub(count)?;
        let run: Run = self.cards.drain(start..).collect();
        self.face_down = self.face_down.min(self.cards.len());
        Some(run)
    }

    /// Place a run on top, keeping its order.
    pub fn extend_run(&mut self, run: &[Card]) {
        self.cards.extend_from_slice(run);
    }

    /// Remove every card, returned bottom first.
    pub fn take_all(&mut self) -> Vec<Card> {
        self.face_down = 0;
        std::mem::take(&mut self.cards)
    }

    /// Turn the top card face-up if every card is face-down.
    ///
    /// Returns true if a card was turned.
    pub fn reveal_top(&mut self) -> bool {
        if !self.cards.is_empty() && self.face_down == self.cards.len() {
            self.face_down -= 1;
            true
        } else {
            false
        }
    }

    /// Turn the top card face-down again. Inverse of `reveal_top`.
    pub(crate) fn cover_top(&mut self) {
        self.face_down = (self.face_down + 1).min(self.cards.len());
    }

    /// Turn every card face-up.
    pub fn reveal_all(&mut self) {
        self.face_down = 0;
    }
}
