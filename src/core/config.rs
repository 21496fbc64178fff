//! Game configuration.
//!
//! A `GameConfig` decides how a new game is dealt:
//! - `seed`: fixed seed for a reproducible deal, or `None` for a random one
//! - `face_down`: whether tableau cards under the top start hidden

use serde::{Deserialize, Serialize};

/// How face-down tableau cards are handled.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FaceDownPolicy {
    /// Every tableau card below the top is dealt face-down and turns
    /// face-up once it becomes the top of its pile. Face-down cards are
    /// never part of a movable run.
    #[default]
    Tracked,
    /// Every card is face-up. Selecting a tableau pile picks up the whole
    /// pile as its run.
    AllFaceUp,
}

impl FaceDownPolicy {
    #[must_use]
    pub const fn is_tracked(self) -> bool {
        matches!(self, Self::Tracked)
    }
}

/// Configuration for dealing a game.
///
/// ```
/// use klondike_engine::core::{FaceDownPolicy, GameConfig};
///
/// let config = GameConfig::new()
///     .with_seed(7)
///     .with_face_down(FaceDownPolicy::AllFaceUp);
///
/// assert_eq!(config.seed, Some(7));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Shuffle seed. `None` draws a fresh random seed per game.
    pub seed: Option<u64>,

    /// Face-down handling for the tableau.
    pub face_down: FaceDownPolicy,
}

impl GameConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    #[must_use]
    pub fn with_face_down(mut self, policy: FaceDownPolicy) -> Self {
        self.face_down = policy;
        self
    }
}
