//! # klondike-engine
//!
//! Rule engine for single-player Klondike solitaire.
//!
//! The engine owns no presentation: a UI renders the piles through the
//! read-only accessors on [`GameState`] and forwards player intents as
//! move requests or clicks.
//!
//! ## Design Principles
//!
//! 1. **Explicit state**: a game is a `GameState` value, no globals.
//!
//! 2. **All-or-nothing operations**: every move either completes (piles,
//!    log and score together) or is rejected with the state untouched.
//!
//! 3. **Exact undo**: every logged move carries what is needed to invert
//!    it, including score and face-down bookkeeping.
//!
//! 4. **Injected randomness**: shuffling reads from an `EntropySource`, so
//!    everything else is deterministic.
//!
//! ## Example
//!
//! ```
//! use klondike_engine::{GameConfig, GameState, Location, MoveRequest};
//!
//! let mut state = GameState::new_game(&GameConfig::new().with_seed(42));
//! state.draw_or_recycle();
//!
//! // Try the waste card on the first foundation; rejection leaves the state alone.
//! let before = state.clone();
//! if state.request_move(MoveRequest::new(Location::Waste, Location::Foundation(0))).is_err() {
//!     assert_eq!(state, before);
//! }
//!
//! state.undo().unwrap();
//! ```
//!
//! ## Modules
//!
//! - `core`: cards, deck, RNG, configuration, state, move records
//! - `piles`: pile container, locations, the table
//! - `rules`: validator, scoring, executor, undo, hints
//! - `session`: click-driven selection state machine

pub mod core;
pub mod error;
pub mod piles;
pub mod rules;
pub mod session;

// Re-export commonly used types
pub use crate::core::{
    Card, Color, Rank, Suit,
    FaceDownPolicy, GameConfig,
    EntropySource, GameRng,
    MoveKind, MoveRecord, MoveRequest,
    GameState,
};

pub use crate::error::{GameError, Result};

pub use crate::piles::{Location, Pile, PileKind, Table};

pub use crate::rules::is_valid_move;

pub use crate::session::{ClickOutcome, ClickReport};
