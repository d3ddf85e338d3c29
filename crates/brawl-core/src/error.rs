//! Error types for roster loading, input validation, and turn resolution.
//!
//! Errors fall into two groups:
//! - **Fatal**: [`MalformedRecordError`], [`RosterError`], [`ConfigError`], and
//!   [`MatchError`] abort before or during a match.
//! - **Recoverable**: [`InvalidSelectionError`] and [`MoveOnCooldownError`] are
//!   handled by the match controller, which re-issues the same prompt.

use std::fmt;
use std::io;
use std::path::PathBuf;

// =============================================================================
// Roster Errors
// =============================================================================

/// Where in the roster data a malformed record was found.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordLocation {
    /// Zero-based position of the record in the roster file, if known.
    pub index: Option<usize>,
    /// Character name, if the record had one.
    pub name: Option<String>,
}

impl fmt::Display for RecordLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(index) = self.index {
            write!(f, " #{}", index + 1)?;
        }
        if let Some(name) = &self.name {
            write!(f, " ({name})")?;
        }
        Ok(())
    }
}

/// The specific schema violation in a character record.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MalformedReason {
    /// A required field is absent.
    #[error("missing field `{0}`")]
    MissingField(&'static str),

    /// Health must be strictly positive.
    #[error("health must be positive, got {0}")]
    NonPositiveHealth(i64),

    /// Defense must not be negative.
    #[error("defense must not be negative, got {0}")]
    NegativeDefense(i64),

    /// A numeric move field is negative or too large.
    #[error("move `{move_name}` has invalid {field}: {value}")]
    InvalidMoveStat {
        /// Name of the offending move.
        move_name: String,
        /// Field that failed validation.
        field: &'static str,
        /// Value found in the record.
        value: i64,
    },

    /// A stat does not fit the engine's integer range.
    #[error("{field} is out of range: {value}")]
    OutOfRange {
        /// Field that failed validation.
        field: &'static str,
        /// Value found in the record.
        value: i64,
    },

    /// The move list is empty.
    #[error("character has no moves")]
    NoMoves,

    /// Two moves share a name.
    #[error("duplicate move name `{0}`")]
    DuplicateMove(String),

    /// A move record has no recognizable name.
    #[error("move #{0} has no name")]
    UnnamedMove(usize),

    /// A field has the wrong JSON type (a string for a number, a move that is
    /// not an object, and so on).
    #[error("invalid field: {0}")]
    InvalidField(String),
}

/// A character record failed validation.
///
/// Raised while building the roster, before any combatant exists.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("malformed character record{location}: {reason}")]
pub struct MalformedRecordError {
    /// Record position and name, as far as they are known.
    pub location: RecordLocation,
    /// What was wrong with the record.
    pub reason: MalformedReason,
}

impl MalformedRecordError {
    /// Creates an error with no location information.
    #[must_use]
    pub fn new(reason: MalformedReason) -> Self {
        Self {
            location: RecordLocation::default(),
            reason,
        }
    }

    /// Attaches the record's position in the roster file.
    #[must_use]
    pub fn at_record(mut self, index: usize) -> Self {
        self.location.index = Some(index);
        self
    }

    /// Attaches the character name.
    #[must_use]
    pub fn for_character(mut self, name: impl Into<String>) -> Self {
        self.location.name = Some(name.into());
        self
    }
}

impl From<MalformedReason> for MalformedRecordError {
    fn from(reason: MalformedReason) -> Self {
        Self::new(reason)
    }
}

/// Errors raised while loading a roster.
#[derive(Debug, thiserror::Error)]
pub enum RosterError {
    /// The roster file could not be read.
    #[error("failed to read roster file {path}")]
    Io {
        /// Path that was being read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// The roster file is not valid JSON for the expected shape.
    #[error("failed to parse roster data")]
    Parse(#[from] serde_json::Error),

    /// The roster contains no characters.
    #[error("roster contains no characters")]
    Empty,

    /// A character record is invalid.
    #[error(transparent)]
    Malformed(#[from] MalformedRecordError),
}

/// Errors raised while loading a match configuration file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The config file could not be read.
    #[error("failed to read config file {path}")]
    Io {
        /// Path that was being read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// The config file is not valid JSON for [`crate::config::MatchConfig`].
    #[error("failed to parse config file")]
    Parse(#[from] serde_json::Error),
}

// =============================================================================
// Recoverable Errors
// =============================================================================

/// A character or move index typed by the human was rejected.
///
/// The display text is shown verbatim before the prompt is repeated.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidSelectionError {
    /// The input was not an integer.
    #[error("Invalid input. Please enter a number.")]
    NotANumber {
        /// Trimmed input line.
        input: String,
    },

    /// The input was an integer outside `1..=max`.
    #[error("Invalid choice. Please select a valid number.")]
    OutOfRange {
        /// Raw text of the rejected number.
        input: String,
        /// Largest valid 1-based choice.
        max: usize,
    },
}

/// The chosen move is still cooling down.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{move_name} is on cooldown!")]
pub struct MoveOnCooldownError {
    /// Name of the rejected move.
    pub move_name: String,
    /// Combatant turns left before the move is usable.
    pub remaining: u32,
}

/// Errors from resolving a single turn.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TurnError {
    /// The attacker has no move with this name.
    #[error("{character} has no move named `{move_name}`")]
    UnknownMove {
        /// Attacking character.
        character: String,
        /// Requested move name.
        move_name: String,
    },

    /// The move exists but is unavailable this turn.
    #[error(transparent)]
    MoveOnCooldown(#[from] MoveOnCooldownError),
}

// =============================================================================
// Match Errors
// =============================================================================

/// Fatal errors that end a match early.
#[derive(Debug, thiserror::Error)]
pub enum MatchError {
    /// Reading from or writing to the frontend failed.
    #[error("terminal I/O failed")]
    Io(#[from] io::Error),

    /// The input stream ended while a prompt was waiting.
    #[error("input closed before the match finished")]
    InputClosed,

    /// The engine rejected a move chosen by a computer policy.
    #[error("computer selected an illegal move")]
    Turn(#[from] TurnError),
}
