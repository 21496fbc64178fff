//! Session layer: turning clicks on piles into moves.
//!
//! The selection cursor lives on `GameState`; this module drives the
//! Idle → Selected → Idle cycle and reports the win check after each click.

pub mod click;

pub use click::{ClickOutcome, ClickReport};
