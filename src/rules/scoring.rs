//! Score deltas for pile-to-pile moves.

use crate::piles::PileKind;

/// Points for moving a card from the waste or tableau onto a foundation.
pub const TO_FOUNDATION: i32 = 10;

/// Points for pulling a card back from a foundation onto the tableau.
///
/// Larger than `TO_FOUNDATION`, so a round trip costs 5 points.
pub const FOUNDATION_TO_TABLEAU: i32 = -15;

/// Score change for a successful move from `from` to `to`.
#[must_use]
pub const fn score_delta(from: PileKind, to: PileKind) -> i32 {
    match (from, to) {
        (PileKind::Waste | PileKind::Tableau, PileKind::Foundation) => TO_FOUNDATION,
        (PileKind::Foundation, PileKind::Tableau) => FOUNDATION_TO_TABLEAU,
        _ => 0,
    }
}
