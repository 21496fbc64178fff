//! Pile collection: where the cards are.
//!
//! ## Key Types
//!
//! - `Location`: closed set of pile addresses (stock, waste, tableau, foundation)
//! - `Pile`: ordered cards with face-down bookkeeping
//! - `Table`: every pile of a game, addressable by `Location`

pub mod location;
pub mod pile;
pub mod table;

pub use location::{Location, PileKind, FOUNDATION_PILES, TABLEAU_PILES};
pub use pile::{Pile, Run};
pub use table::Table;
