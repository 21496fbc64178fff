//! Pile addressing.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of tableau piles.
pub const TABLEAU_PILES: usize = 7;

/// Number of foundation piles.
pub const FOUNDATION_PILES: usize = 4;

/// The kind of a pile, without its index.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PileKind {
    Stock,
    Waste,
    Tableau,
    Foundation,
}

/// A specific pile on the table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Location {
    Stock,
    Waste,
    /// Tableau pile, `0..TABLEAU_PILES`.
    Tableau(usize),
    /// Foundation pile, `0..FOUNDATION_PILES`.
    Foundation(usize),
}

impl Location {
    #[must_use]
    pub const fn kind(self) -> PileKind {
        match self {
            Location::Stock => PileKind::Stock,
            Location::Waste => PileKind::Waste,
            Location::Tableau(_) => PileKind::Tableau,
            Location::Foundation(_) => PileKind::Foundation,
        }
    }

    /// Does this location name a pile that exists?
    #[must_use]
    pub const fn is_in_range(self) -> bool {
        match self {
            Location::Stock | Location::Waste => true,
            Location::Tableau(i) => i < TABLEAU_PILES,
            Location::Foundation(i) => i < FOUNDATION_PILES,
        }
    }

    /// All tableau locations, left to right.
    pub fn tableau() -> impl Iterator<Item = Location> {
        (0..TABLEAU_PILES).map(Location::Tableau)
    }

    /// All foundation locations, left to right.
    pub fn foundations() -> impl Iterator<Item = Location> {
        (0..FOUNDATION_PILES).map(Location::Foundation)
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Location::Stock => write!(f, "Stock"),
            Location::Waste => write!(f, "Waste"),
            Location::Tableau(i) => write!(f, "Tableau({i})"),
            Location::Foundation(i) => write!(f, "Foundation({i})"),
        }
    }
}
