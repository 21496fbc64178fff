//! Deck construction, shuffling and the opening deal.

use crate::core::card::{Card, Rank, Suit};
use crate::core::rng::EntropySource;
use crate::error::{GameError, Result};
use crate::piles::TABLEAU_PILES;

/// Cards in a full deck.
pub const DECK_SIZE: usize = 52;

/// Cards dealt to the tableau: 1 + 2 + ... + 7.
pub const TABLEAU_DEAL: usize = TABLEAU_PILES * (TABLEAU_PILES + 1) / 2;

/// Build the 52-card deck in canonical order: suits hearts, diamonds,
/// clubs, spades, each from Ace to King.
#[must_use]
pub fn build_deck() -> Vec<Card> {
    Suit::ALL
        .iter()
        .flat_map(|&suit| Rank::ALL.iter().map(move |&rank| Card::new(rank, suit)))
        .collect()
}

/// Fisher–Yates shuffle in place.
///
/// Walks from the last index down to 1, swapping each position with a
/// uniformly chosen position at or before it.
pub fn shuffle<R: EntropySource + ?Sized>(deck: &mut [Card], rng: &mut R) {
    for i in (1..deck.len()).rev() {
        let j = rng.below(i + 1);
        deck.swap(i, j);
    }
}

/// Result of dealing a deck: tableau columns (bottom first) and the stock.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Deal {
    pub tableau: [Vec<Card>; TABLEAU_PILES],
    pub stock: Vec<Card>,
}

/// Deal the opening layout.
///
/// Cards are popped from the end of `deck`. Round `r` places one card on
/// every tableau pile with index `>= r`, so pile `i` receives `i + 1`
/// cards. Whatever remains, in its existing order, becomes the stock.
pub fn deal(deck: Vec<Card>) -> Result<Deal> {
    if deck.len() < TABLEAU_DEAL {
        return Err(GameError::ShortDeck {
            needed: TABLEAU_DEAL,
            available: deck.len(),
        });
    }
    Ok(deal_full_deck(deck))
}

/// `deal` for a deck already known to cover the tableau.
pub(crate) fn deal_full_deck(mut deck: Vec<Card>) -> Deal {
    let mut tableau: [Vec<Card>; TABLEAU_PILES] = Default::default();
    for round in 0..TABLEAU_PILES {
        for pile in tableau.iter_mut().skip(round) {
            if let Some(card) = deck.pop() {
                pile.push(card);
            }
        }
    }

    Deal {
        tableau,
        stock: deck,
    }
}
