//! Move legality.
//!
//! A pure predicate: only the leading card of the run and the top card of
//! the destination are consulted.

use crate::core::card::{Card, Rank};
use crate::piles::PileKind;

/// Can `run` be placed on a pile of kind `destination` holding
/// `destination_pile` (bottom first)?
///
/// - Foundation: an Ace on an empty pile, otherwise the same suit one rank up.
/// - Tableau: a King on an empty pile, otherwise the opposite color one rank down.
/// - Stock and waste never accept a placed run.
///
/// An empty run is never valid.
///
/// ```
/// use klondike_engine::piles::PileKind;
/// use klondike_engine::rules::is_valid_move;
/// use klondike_engine::Card;
///
/// let ace: Card = "Ah".parse().unwrap();
/// assert!(is_valid_move(&[ace], PileKind::Foundation, &[]));
/// assert!(!is_valid_move(&[ace], PileKind::Tableau, &[]));
/// ```
#[must_use]
pub fn is_valid_move(run: &[Card], destination: PileKind, destination_pile: &[Card]) -> bool {
    let Some(&lead) = run.first() else {
        return false;
    };
    let top = destination_pile.last().copied();

    match destination {
        PileKind::Foundation => match top {
            None => lead.rank == Rank::Ace,
            Some(top) => lead.follows_on_foundation(top),
        },
        PileKind::Tableau => match top {
            None => lead.rank == Rank::King,
            Some(top) => lead.stacks_on(top),
        },
        PileKind::Stock | PileKind::Waste => false,
    }
}
