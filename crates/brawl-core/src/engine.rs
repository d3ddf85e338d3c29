//! Turn resolution.
//!
//! The [`TurnEngine`] resolves a single attack from one combatant against the
//! other. It is the only code that mutates combatant health, guards, and
//! cooldowns during a match.
//!
//! # Processing Order
//!
//! 1. Reject unknown or cooling moves without touching either combatant
//! 2. Any move against a guarded defender is nullified and clears the guard,
//!    guard moves included
//! 3. Guard moves raise the attacker's guard and deal no damage
//! 4. Other attacks deal `max(0, power - defense)`, clamped to remaining health
//! 5. The attacker's existing cooldowns age by one, then the used move's
//!    cooldown starts
//!
//! The defender's cooldowns are never touched: each combatant's counters
//! advance only on that combatant's own turns.
//!
//! # Example
//!
//! ```
//! use brawl_core::character::{Character, Move};
//! use brawl_core::combatant::CombatantState;
//! use brawl_core::engine::TurnEngine;
//!
//! let a = Character::new("A", 20, 2, vec![Move::new("Jab", 5, 0)])?;
//! let mut attacker = CombatantState::new(a.clone());
//! let mut defender = CombatantState::new(a);
//!
//! let engine = TurnEngine::new();
//! let report = engine.resolve(&mut attacker, "Jab", &mut defender)?;
//!
//! assert_eq!(report.damage_applied(), 3);
//! assert_eq!(defender.current_health(), 17);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use tracing::debug;

use crate::character::MoveEffect;
use crate::combatant::CombatantState;
use crate::error::{MoveOnCooldownError, TurnError};
use crate::event::{TurnEvent, TurnReport};

/// Damage left after subtracting flat defense. Never negative.
///
/// ```
/// use brawl_core::engine::mitigated_damage;
///
/// assert_eq!(mitigated_damage(5, 2), 3);
/// assert_eq!(mitigated_damage(2, 5), 0);
/// ```
#[must_use]
pub const fn mitigated_damage(power: u32, defense: u32) -> u32 {
    power.saturating_sub(defense)
}

/// Resolves one combatant's turn against the other.
#[derive(Debug, Clone, Copy, Default)]
pub struct TurnEngine;

impl TurnEngine {
    /// Creates a new turn engine.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Resolves `attacker` using `move_name` against `defender`.
    ///
    /// # Errors
    ///
    /// - [`TurnError::UnknownMove`] if the attacker has no such move
    /// - [`TurnError::MoveOnCooldown`] if the move is still cooling down
    ///
    /// On error neither combatant is modified and the attacker keeps the turn.
    pub fn resolve(
        &self,
        attacker: &mut CombatantState,
        move_name: &str,
        defender: &mut CombatantState,
    ) -> Result<TurnReport, TurnError> {
        let used = attacker
            .character()
            .find_move(move_name)
            .cloned()
            .ok_or_else(|| TurnError::UnknownMove {
                character: attacker.name().to_string(),
                move_name: move_name.to_string(),
            })?;

        let remaining = attacker.cooldown(move_name);
        if remaining > 0 {
            return Err(MoveOnCooldownError {
                move_name: move_name.to_string(),
                remaining,
            }
            .into());
        }

        let mut report = TurnReport::new(attacker.name(), defender.name(), 0);
        report.push(TurnEvent::MoveUsed {
            move_name: used.name().to_string(),
        });

        if defender.take_guard() {
            report.push(TurnEvent::AttackNullified);
        } else if let Some(kind) = used.effect().and_then(MoveEffect::guard) {
            attacker.raise_guard();
            report.push(TurnEvent::GuardRaised { kind });
        } else {
            let mitigated = mitigated_damage(used.power(), defender.character().defense());
            let applied = defender.apply_damage(mitigated);
            report.push(TurnEvent::DamageDealt {
                raw: used.power(),
                mitigated,
                applied,
            });
            if let Some(effect) = used.effect() {
                report.push(TurnEvent::EffectApplied {
                    effect: effect.to_string(),
                });
            }
        }

        attacker.tick_cooldowns();
        attacker.start_cooldown(&used);

        if defender.is_defeated() {
            report.push(TurnEvent::Defeated {
                name: defender.name().to_string(),
            });
        }
        report.defender_health = defender.current_health();

        debug!(
            attacker = attacker.name(),
            defender = defender.name(),
            move_name = used.name(),
            damage = report.damage_applied(),
            defender_health = report.defender_health,
            "turn resolved"
        );

        Ok(report)
    }

    /// Resolves a turn in which the attacker has no usable move.
    ///
    /// No damage is dealt, but the attacker's cooldowns still age so that the
    /// forfeit brings their moves closer to availability.
    pub fn forfeit(&self, attacker: &mut CombatantState, defender: &CombatantState) -> TurnReport {
        attacker.tick_cooldowns();

        let mut report = TurnReport::new(
            attacker.name(),
            defender.name(),
            defender.current_health(),
        );
        report.push(TurnEvent::TurnForfeited);

        debug!(attacker = attacker.name(), "turn forfeited");
        report
    }
}
