//! Core model: cards, the deck, randomness, configuration, state and
//! the move log.

pub mod action;
pub mod card;
pub mod config;
pub mod deck;
pub mod rng;
pub mod state;

pub use action::{MoveKind, MoveRecord, MoveRequest};
pub use card::{Card, Color, ParseCardError, Rank, Suit};
pub use config::{FaceDownPolicy, GameConfig};
pub use deck::{build_deck, deal, shuffle, Deal, DECK_SIZE, TABLEAU_DEAL};
pub use rng::{EntropySource, GameRng};
pub use state::{GameState, FOUNDATION_FULL};
