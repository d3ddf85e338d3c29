//! Per-match combatant state.
//!
//! A [`CombatantState`] wraps a [`Character`] template with the values that
//! change during a match: current health, move cooldowns, and an active guard.
//!
//! # Cooldowns
//!
//! Cooldowns are counted in the combatant's own turns. A move absent from the
//! cooldown map is usable. Counters live in a `BTreeMap` so that iteration
//! (and therefore anything derived from it) is deterministic.
//!
//! # Example
//!
//! ```
//! use brawl_core::character::{Character, Move};
//! use brawl_core::combatant::CombatantState;
//!
//! let character = Character::new("A", 20, 2, vec![Move::new("Jab", 5, 0)])?;
//! let mut state = CombatantState::new(character);
//!
//! state.apply_damage(25);
//! assert_eq!(state.current_health(), 0);
//! assert!(state.is_defeated());
//! # Ok::<(), brawl_core::error::MalformedRecordError>(())
//! ```

use serde::Serialize;
use std::collections::BTreeMap;

use crate::character::{Character, Move};

/// Mutable state of one side of a match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CombatantState {
    character: Character,
    current_health: u32,
    cooldowns: BTreeMap<String, u32>,
    guarded: bool,
}

impl CombatantState {
    /// Creates a fresh combatant at full health with nothing cooling down.
    #[must_use]
    pub fn new(character: Character) -> Self {
        let current_health = character.max_health();
        Self {
            character,
            current_health,
            cooldowns: BTreeMap::new(),
            guarded: false,
        }
    }

    /// Returns the underlying character template.
    #[must_use]
    pub const fn character(&self) -> &Character {
        &self.character
    }

    /// Returns the character name.
    #[must_use]
    pub fn name(&self) -> &str {
        self.character.name()
    }

    /// Returns current health, always within `0..=max_health`.
    #[must_use]
    pub const fn current_health(&self) -> u32 {
        self.current_health
    }

    /// Returns the character's maximum health.
    #[must_use]
    pub const fn max_health(&self) -> u32 {
        self.character.max_health()
    }

    /// Returns the remaining cooldown for a move (0 when usable or unknown).
    #[must_use]
    pub fn cooldown(&self, move_name: &str) -> u32 {
        self.cooldowns.get(move_name).copied().unwrap_or(0)
    }

    /// Returns all moves currently cooling down, keyed by name.
    #[must_use]
    pub const fn cooldowns(&self) -> &BTreeMap<String, u32> {
        &self.cooldowns
    }

    /// Returns true iff the character has this move and it is not cooling down.
    #[must_use]
    pub fn is_move_available(&self, move_name: &str) -> bool {
        self.character.find_move(move_name).is_some() && self.cooldown(move_name) == 0
    }

    /// Returns the usable moves in roster order.
    pub fn available_moves(&self) -> impl Iterator<Item = &Move> + '_ {
        self.character
            .moves()
            .iter()
            .filter(|m| self.cooldown(m.name()) == 0)
    }

    /// Returns true if at least one move is usable this turn.
    #[must_use]
    pub fn has_available_move(&self) -> bool {
        self.available_moves().next().is_some()
    }

    /// Subtracts `amount` from health, clamping at zero.
    ///
    /// Returns the health actually lost.
    pub fn apply_damage(&mut self, amount: u32) -> u32 {
        let lost = amount.min(self.current_health);
        self.current_health -= lost;
        lost
    }

    /// Ages every active cooldown by one turn.
    ///
    /// Counters that reach zero are removed, making the move available.
    pub fn tick_cooldowns(&mut self) {
        self.cooldowns.retain(|_, remaining| {
            *remaining = remaining.saturating_sub(1);
            *remaining > 0
        });
    }

    /// Starts the cooldown for a move that was just used.
    ///
    /// A zero-length cooldown leaves the move immediately usable.
    pub fn start_cooldown(&mut self, used: &Move) {
        if used.cooldown_length() == 0 {
            self.cooldowns.remove(used.name());
        } else {
            self.cooldowns
                .insert(used.name().to_string(), used.cooldown_length());
        }
    }

    /// Returns true if a guard is waiting to absorb the next attack.
    #[must_use]
    pub const fn is_guarded(&self) -> bool {
        self.guarded
    }

    /// Raises a guard against the next attack.
    pub fn raise_guard(&mut self) {
        self.guarded = true;
    }

    /// Consumes the guard, returning whether one was active.
    pub fn take_guard(&mut self) -> bool {
        std::mem::take(&mut self.guarded)
    }

    /// Returns true once health has reached zero.
    #[must_use]
    pub const fn is_defeated(&self) -> bool {
        self.current_health == 0
    }
}
