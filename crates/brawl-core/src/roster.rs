//! Roster loading and validation.
//!
//! A roster file is JSON with a top-level `characters` array. Records are first
//! deserialized into permissive raw structs, then validated into
//! [`Character`]s. Any schema violation fails the whole load with a
//! [`MalformedRecordError`] naming the record.
//!
//! # Record Format
//!
//! ```json
//! {
//!   "characters": [
//!     {
//!       "name": "Ryu",
//!       "health": 100,
//!       "defense": 5,
//!       "moves": [
//!         { "name": "Punch", "power": 10, "cooldown": 0 },
//!         { "name": "Parry", "power": 0, "cooldown": 2, "effect": "blocks next attack" }
//!       ]
//!     }
//!   ]
//! }
//! ```
//!
//! The older layout is also accepted: moves under `player_moves`, `damage` in
//! place of `power`, and the move name given as the one key that is not a
//! known field (`{ "Punch": "A quick jab", "damage": 10 }`). A missing
//! `cooldown` means the move has none.

use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use tracing::info;

use crate::character::{Character, Move, MoveEffect};
use crate::error::{MalformedReason, MalformedRecordError, RosterError};

// =============================================================================
// Raw Records
// =============================================================================

#[derive(Debug, Deserialize)]
struct RosterFile {
    characters: Vec<serde_json::Value>,
}

/// Deserializes one record, reporting type mismatches against its position.
fn parse_record(
    index: usize,
    value: serde_json::Value,
) -> Result<RawCharacter, MalformedRecordError> {
    let name = value
        .get("name")
        .and_then(serde_json::Value::as_str)
        .map(str::to_string);
    serde_json::from_value(value).map_err(|e| {
        let err = MalformedRecordError::new(MalformedReason::InvalidField(e.to_string()))
            .at_record(index);
        match name {
            Some(name) => err.for_character(name),
            None => err,
        }
    })
}

/// A character record as it appears in the roster file.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawCharacter {
    name: Option<String>,
    health: Option<i64>,
    defense: Option<i64>,
    #[serde(alias = "player_moves")]
    moves: Option<Vec<RawMove>>,
}

/// A move record as it appears in the roster file.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawMove {
    name: Option<String>,
    #[serde(alias = "damage")]
    power: Option<i64>,
    cooldown: Option<i64>,
    effect: Option<String>,
    #[serde(flatten)]
    extra: BTreeMap<String, serde_json::Value>,
}

impl RawMove {
    /// The explicit name, or the single unrecognized key of a legacy record.
    fn resolve_name(&self) -> Option<String> {
        if let Some(name) = &self.name {
            return Some(name.clone());
        }
        let mut keys = self.extra.keys();
        match (keys.next(), keys.next()) {
            (Some(only), None) => Some(only.clone()),
            _ => None,
        }
    }

    fn into_move(self, position: usize) -> Result<Move, MalformedReason> {
        let name = self
            .resolve_name()
            .ok_or(MalformedReason::UnnamedMove(position + 1))?;
        let stat = |field: &'static str, value: i64| {
            u32::try_from(value).map_err(|_| MalformedReason::InvalidMoveStat {
                move_name: name.clone(),
                field,
                value,
            })
        };

        let power = stat(
            "power",
            self.power.ok_or(MalformedReason::MissingField("power"))?,
        )?;
        let cooldown = stat("cooldown", self.cooldown.unwrap_or(0))?;

        let mut built = Move::new(name, power, cooldown);
        if let Some(effect) = self.effect.as_deref().filter(|e| !e.trim().is_empty()) {
            built = built.with_effect(MoveEffect::from_text(effect));
        }
        Ok(built)
    }
}

impl TryFrom<RawCharacter> for Character {
    type Error = MalformedRecordError;

    fn try_from(raw: RawCharacter) -> Result<Self, Self::Error> {
        let name = raw
            .name
            .ok_or(MalformedReason::MissingField("name"))?;
        let reject =
            |reason: MalformedReason| MalformedRecordError::new(reason).for_character(name.clone());

        let health = raw
            .health
            .ok_or_else(|| reject(MalformedReason::MissingField("health")))?;
        if health <= 0 {
            return Err(reject(MalformedReason::NonPositiveHealth(health)));
        }
        let health = u32::try_from(health).map_err(|_| {
            reject(MalformedReason::OutOfRange {
                field: "health",
                value: health,
            })
        })?;

        let defense = raw
            .defense
            .ok_or_else(|| reject(MalformedReason::MissingField("defense")))?;
        if defense < 0 {
            return Err(reject(MalformedReason::NegativeDefense(defense)));
        }
        let defense = u32::try_from(defense).map_err(|_| {
            reject(MalformedReason::OutOfRange {
                field: "defense",
                value: defense,
            })
        })?;

        let moves = raw
            .moves
            .ok_or_else(|| reject(MalformedReason::MissingField("moves")))?
            .into_iter()
            .enumerate()
            .map(|(i, m)| m.into_move(i).map_err(&reject))
            .collect::<Result<Vec<_>, _>>()?;

        Character::new(name.clone(), health, defense, moves)
    }
}

// =============================================================================
// Roster
// =============================================================================

/// The validated, ordered list of selectable characters.
///
/// A roster is never empty. File order is preserved for presentation; use
/// [`Roster::ranked`] for the character ordering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Roster {
    characters: Vec<Character>,
}

impl Roster {
    /// Builds a roster from already-validated characters.
    ///
    /// # Errors
    ///
    /// Returns [`RosterError::Empty`] if `characters` is empty.
    pub fn new(characters: Vec<Character>) -> Result<Self, RosterError> {
        if characters.is_empty() {
            return Err(RosterError::Empty);
        }
        Ok(Self { characters })
    }

    /// Validates raw records, tagging any failure with the record position.
    ///
    /// # Errors
    ///
    /// Returns [`RosterError::Malformed`] for the first invalid record, or
    /// [`RosterError::Empty`] if there are no records.
    pub fn from_records(records: Vec<RawCharacter>) -> Result<Self, RosterError> {
        let characters = records
            .into_iter()
            .enumerate()
            .map(|(i, raw)| Character::try_from(raw).map_err(|e| e.at_record(i)))
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(characters)
    }

    /// Parses a roster from JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`RosterError::Parse`] for invalid JSON or a missing
    /// `characters` array, [`RosterError::Malformed`] for a record whose
    /// fields have the wrong type, and the errors of [`Roster::from_records`]
    /// for records that fail validation.
    ///
    /// # Example
    ///
    /// ```
    /// use brawl_core::roster::Roster;
    ///
    /// let roster = Roster::from_json_str(r#"{
    ///     "characters": [
    ///         {"name": "A", "health": 20, "defense": 2,
    ///          "moves": [{"name": "Jab", "power": 5, "cooldown": 0}]}
    ///     ]
    /// }"#)?;
    /// assert_eq!(roster.len(), 1);
    /// # Ok::<(), brawl_core::error::RosterError>(())
    /// ```
    pub fn from_json_str(json: &str) -> Result<Self, RosterError> {
        let file: RosterFile = serde_json::from_str(json)?;
        let records = file
            .characters
            .into_iter()
            .enumerate()
            .map(|(i, value)| parse_record(i, value))
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_records(records)
    }

    /// Reads and parses a roster file.
    ///
    /// # Errors
    ///
    /// Returns [`RosterError::Io`] if the file cannot be read, plus the
    /// errors of [`Roster::from_json_str`].
    pub fn load(path: impl AsRef<Path>) -> Result<Self, RosterError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| RosterError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let roster = Self::from_json_str(&json)?;
        info!(path = %path.display(), characters = roster.len(), "roster loaded");
        Ok(roster)
    }

    /// Returns the characters in file order.
    #[must_use]
    pub fn characters(&self) -> &[Character] {
        &self.characters
    }

    /// Returns the character at a zero-based index.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Character> {
        self.characters.get(index)
    }

    /// Returns the number of characters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.characters.len()
    }

    /// Always false; kept for API symmetry with `len`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.characters.is_empty()
    }

    /// Returns the characters sorted by their ordering, strongest last.
    #[must_use]
    pub fn ranked(&self) -> Vec<&Character> {
        let mut ranked: Vec<_> = self.characters.iter().collect();
        ranked.sort();
        ranked
    }
}
