//! Character templates and their moves.
//!
//! This module provides the read-only data model loaded from the roster:
//! - [`Move`]: An attack definition (name, power, cooldown length, effect)
//! - [`Character`]: A combatant template (name, health, defense, moves)
//!
//! # Ordering
//!
//! [`Character`] implements a total order so that sorting a roster gives the
//! same result on every run. The key is, in order:
//!
//! 1. Total power of all moves
//! 2. Maximum health
//! 3. Defense
//! 4. Name
//! 5. The move list itself
//!
//! Weaker characters sort first, so `roster.iter().max()` is the strongest.
//!
//! # Example
//!
//! ```
//! use brawl_core::character::{Character, Move};
//!
//! let brawler = Character::new("Brawler", 20, 2, vec![Move::new("Jab", 5, 0)])?;
//! let tank = Character::new("Tank", 40, 6, vec![Move::new("Slam", 4, 1)])?;
//!
//! assert!(tank < brawler);
//! # Ok::<(), brawl_core::error::MalformedRecordError>(())
//! ```

pub mod moves;

use serde::Serialize;
use std::cmp::Ordering;
use std::collections::BTreeSet;
use std::fmt;

use crate::error::{MalformedReason, MalformedRecordError};

pub use moves::{GuardKind, Move, MoveEffect};

/// An immutable combatant template.
///
/// Many [`crate::combatant::CombatantState`]s may be created from one
/// character, each with its own health and cooldowns.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Character {
    name: String,
    max_health: u32,
    defense: u32,
    moves: Vec<Move>,
}

impl Character {
    /// Creates a validated character.
    ///
    /// # Errors
    ///
    /// Returns [`MalformedRecordError`] if `max_health` is zero, the move list
    /// is empty, or two moves share a name. The error carries the character
    /// name; the roster loader adds the record position.
    pub fn new(
        name: impl Into<String>,
        max_health: u32,
        defense: u32,
        moves: Vec<Move>,
    ) -> Result<Self, MalformedRecordError> {
        let name = name.into();
        let reject =
            |reason: MalformedReason| MalformedRecordError::new(reason).for_character(name.clone());

        if max_health == 0 {
            return Err(reject(MalformedReason::NonPositiveHealth(0)));
        }
        if moves.is_empty() {
            return Err(reject(MalformedReason::NoMoves));
        }
        let mut seen = BTreeSet::new();
        for m in &moves {
            if !seen.insert(m.name()) {
                return Err(reject(MalformedReason::DuplicateMove(m.name().to_string())));
            }
        }

        Ok(Self {
            name,
            max_health,
            defense,
            moves,
        })
    }

    /// Returns the character name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the starting (and maximum) health.
    #[must_use]
    pub const fn max_health(&self) -> u32 {
        self.max_health
    }

    /// Returns the flat damage reduction applied to incoming hits.
    #[must_use]
    pub const fn defense(&self) -> u32 {
        self.defense
    }

    /// Returns the moves in roster order.
    #[must_use]
    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    /// Looks up a move by name.
    #[must_use]
    pub fn find_move(&self, name: &str) -> Option<&Move> {
        self.moves.iter().find(|m| m.name() == name)
    }

    /// Sum of the power of every move. Primary ordering key.
    #[must_use]
    pub fn total_power(&self) -> u64 {
        self.moves.iter().map(|m| u64::from(m.power())).sum()
    }
}

impl Ord for Character {
    fn cmp(&self, other: &Self) -> Ordering {
        self.total_power()
            .cmp(&other.total_power())
            .then(self.max_health.cmp(&other.max_health))
            .then(self.defense.cmp(&other.defense))
            .then_with(|| self.name.cmp(&other.name))
            .then_with(|| self.moves.cmp(&other.moves))
    }
}

impl PartialOrd for Character {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Character {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (Health: {}) (Defense: {})",
            self.name, self.max_health, self.defense
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn jab() -> Move {
        Move::new("Jab", 5, 0)
    }

    mod construction_tests {
        use super::*;

        #[test]
        fn valid_character_is_created() {
            let c = Character::new("A", 20, 2, vec![jab()]).unwrap();
            assert_eq!(c.name(), "A");
            assert_eq!(c.max_health(), 20);
            assert_eq!(c.defense(), 2);
            assert_eq!(c.moves().len(), 1);
        }

        #[test]
        fn zero_health_is_rejected() {
            let err = Character::new("A", 0, 2, vec![jab()]).unwrap_err();
            assert_eq!(err.reason, MalformedReason::NonPositiveHealth(0));
            assert_eq!(err.location.name.as_deref(), Some("A"));
        }

        #[test]
        fn empty_move_list_is_rejected() {
            let err = Character::new("A", 10, 0, vec![]).unwrap_err();
            assert_eq!(err.reason, MalformedReason::NoMoves);
        }

        #[test]
        fn duplicate_move_names_are_rejected() {
            let err = Character::new("A", 10, 0, vec![jab(), Move::new("Jab", 9, 3)]).unwrap_err();
            assert_eq!(err.reason, MalformedReason::DuplicateMove("Jab".into()));
        }

        #[test]
        fn find_move_by_name() {
            let c = Character::new("A", 10, 0, vec![jab(), Move::new("Kick", 8, 1)]).unwrap();
            assert_eq!(c.find_move("Kick").map(Move::power), Some(8));
            assert!(c.find_move("Uppercut").is_none());
        }
    }

    mod ordering_tests {
        use super::*;

        #[test]
        fn total_power_dominates() {
            let weak = Character::new("Z", 99, 9, vec![Move::new("Tap", 1, 0)]).unwrap();
            let strong = Character::new("A", 10, 0, vec![Move::new("Smash", 30, 2)]).unwrap();
            assert!(weak < strong);
        }

        #[test]
        fn ties_break_on_health_then_defense_then_name() {
            let base = Character::new("B", 20, 2, vec![jab()]).unwrap();
            let more_health = Character::new("A", 21, 0, vec![jab()]).unwrap();
            let more_defense = Character::new("A", 20, 3, vec![jab()]).unwrap();
            let later_name = Character::new("C", 20, 2, vec![jab()]).unwrap();

            assert!(base < more_health);
            assert!(base < more_defense);
            assert!(base < later_name);
        }

        #[test]
        fn ordering_is_irreflexive_and_consistent_with_eq() {
            let a = Character::new("A", 20, 2, vec![jab()]).unwrap();
            let b = a.clone();
            assert!(!(a < b));
            assert_eq!(a.cmp(&b), Ordering::Equal);
            assert_eq!(a, b);
        }

        #[test]
        fn same_key_different_moves_still_ordered() {
            let a = Character::new("A", 20, 2, vec![Move::new("Jab", 5, 0)]).unwrap();
            let b = Character::new("A", 20, 2, vec![Move::new("Poke", 5, 0)]).unwrap();
            assert_ne!(a.cmp(&b), Ordering::Equal);
            assert_ne!(a, b);
        }

        #[test]
        fn sorting_is_deterministic() {
            let roster = vec![
                Character::new("C", 30, 1, vec![Move::new("Hit", 7, 0)]).unwrap(),
                Character::new("A", 20, 2, vec![jab()]).unwrap(),
                Character::new("B", 20, 2, vec![jab()]).unwrap(),
            ];
            let mut forward = roster.clone();
            let mut reversed: Vec<_> = roster.into_iter().rev().collect();
            forward.sort();
            reversed.sort();
            assert_eq!(forward, reversed);
            let names: Vec<_> = forward.iter().map(Character::name).collect();
            assert_eq!(names, vec!["A", "B", "C"]);
        }
    }

    #[test]
    fn display_matches_roster_listing() {
        let c = Character::new("Ryu", 100, 5, vec![jab()]).unwrap();
        assert_eq!(c.to_string(), "Ryu (Health: 100) (Defense: 5)");
    }
}
