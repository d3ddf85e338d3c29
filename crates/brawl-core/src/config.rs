//! Match configuration.
//!
//! Settings are read from an optional JSON file. Every field has a default, so
//! an empty object (or no file at all) gives a standard human-vs-computer
//! match.
//!
//! ```json
//! {
//!   "opponent_character": "strongest",
//!   "opponent_moves": "seeded",
//!   "seed": 1234
//! }
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::ConfigError;
use crate::policy::{CharacterPolicy, MovePolicy};

/// Default RNG seed for seeded policies.
pub const DEFAULT_SEED: u64 = 0x00B2_A771;

/// Settings for one match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MatchConfig {
    /// How the computer picks its character.
    pub opponent_character: CharacterPolicy,
    /// How the computer picks its moves.
    pub opponent_moves: MovePolicy,
    /// Let a second computer policy play the human side.
    pub autoplay: bool,
    /// Character policy for the autoplay side.
    pub autoplay_character: CharacterPolicy,
    /// Move policy for the autoplay side.
    pub autoplay_moves: MovePolicy,
    /// Seed for every seeded policy in the match.
    pub seed: u64,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            opponent_character: CharacterPolicy::FirstRemaining,
            opponent_moves: MovePolicy::Strongest,
            autoplay: false,
            autoplay_character: CharacterPolicy::FirstRemaining,
            autoplay_moves: MovePolicy::Cyclic,
            seed: DEFAULT_SEED,
        }
    }
}

impl MatchConfig {
    /// Parses a config from JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for invalid JSON or unknown fields.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads a config file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, or
    /// [`ConfigError::Parse`] if it is not a valid config.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    /// Returns the config with a different seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Returns the config with autoplay switched on or off.
    #[must_use]
    pub fn with_autoplay(mut self, autoplay: bool) -> Self {
        self.autoplay = autoplay;
        self
    }
}
