//! Klondike rules: what may move where, and how moves change the state.
//!
//! - `validator`: the pure stacking predicate
//! - `scoring`: score deltas per move
//! - `executor`: applying moves, drawing and recycling
//! - `undo`: inverting logged moves
//! - `hints`: enumerating legal moves
//!
//! Executor, undo and hints are implemented as methods on `GameState`.

pub mod executor;
pub mod hints;
pub mod scoring;
pub mod undo;
pub mod validator;

pub use scoring::{score_delta, FOUNDATION_TO_TABLEAU, TO_FOUNDATION};
pub use validator::is_valid_move;
