//! Turn events and reports.
//!
//! Every resolved turn produces a [`TurnReport`]: who acted, against whom, and
//! the ordered list of [`TurnEvent`]s describing what happened. Reports are
//! kept in the match history and rendered as narration lines for the terminal.

use serde::Serialize;

use crate::character::GuardKind;

/// Something that happened while resolving a turn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum TurnEvent {
    /// The attacker used a move.
    MoveUsed {
        /// Name of the move.
        move_name: String,
    },
    /// The move hit and dealt damage after defense.
    DamageDealt {
        /// Move power before defense.
        raw: u32,
        /// Damage after defense, before clamping to remaining health.
        mitigated: u32,
        /// Health actually lost by the defender.
        applied: u32,
    },
    /// The attacker raised a guard.
    GuardRaised {
        /// Block or dodge.
        kind: GuardKind,
    },
    /// The defender's guard absorbed the attack.
    AttackNullified,
    /// A descriptive move effect was applied.
    EffectApplied {
        /// Effect text from the roster.
        effect: String,
    },
    /// The attacker had no usable move and lost the turn.
    TurnForfeited,
    /// The defender's health reached zero.
    Defeated {
        /// Name of the defeated combatant.
        name: String,
    },
}

/// The outcome of one resolved turn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TurnReport {
    /// Name of the acting combatant.
    pub attacker: String,
    /// Name of the combatant on the receiving end.
    pub defender: String,
    /// Events in the order they occurred.
    pub events: Vec<TurnEvent>,
    /// Defender health after the turn.
    pub defender_health: u32,
}

impl TurnReport {
    /// Creates an empty report for an attacker/defender pair.
    #[must_use]
    pub fn new(attacker: &str, defender: &str, defender_health: u32) -> Self {
        Self {
            attacker: attacker.to_string(),
            defender: defender.to_string(),
            events: Vec::new(),
            defender_health,
        }
    }

    /// Appends an event.
    pub fn push(&mut self, event: TurnEvent) {
        self.events.push(event);
    }

    /// Total health the defender lost this turn.
    #[must_use]
    pub fn damage_applied(&self) -> u32 {
        self.events
            .iter()
            .map(|e| match e {
                TurnEvent::DamageDealt { applied, .. } => *applied,
                _ => 0,
            })
            .sum()
    }

    /// Returns the name of the move used, if the turn was not forfeited.
    #[must_use]
    pub fn move_used(&self) -> Option<&str> {
        self.events.iter().find_map(|e| match e {
            TurnEvent::MoveUsed { move_name } => Some(move_name.as_str()),
            _ => None,
        })
    }

    /// Returns true if this turn knocked out the defender.
    #[must_use]
    pub fn defender_defeated(&self) -> bool {
        self.events
            .iter()
            .any(|e| matches!(e, TurnEvent::Defeated { .. }))
    }

    /// Renders the report as human-readable lines.
    ///
    /// ```
    /// use brawl_core::event::{TurnEvent, TurnReport};
    ///
    /// let mut report = TurnReport::new("Ryu", "Ken", 17);
    /// report.push(TurnEvent::MoveUsed { move_name: "Jab".into() });
    /// report.push(TurnEvent::DamageDealt { raw: 5, mitigated: 3, applied: 3 });
    ///
    /// assert_eq!(report.narrate(), vec!["Ryu used Jab! It dealt 3 damage."]);
    /// ```
    #[must_use]
    pub fn narrate(&self) -> Vec<String> {
        let mut lines = Vec::new();
        let mut pending_move: Option<&str> = None;
        for event in &self.events {
            match event {
                TurnEvent::MoveUsed { move_name } => pending_move = Some(move_name.as_str()),
                TurnEvent::DamageDealt { mitigated, .. } => {
                    let move_name = pending_move.take().unwrap_or("an attack");
                    lines.push(format!(
                        "{} used {}! It dealt {} damage.",
                        self.attacker, move_name, mitigated
                    ));
                }
                TurnEvent::GuardRaised { kind } => {
                    let move_name = pending_move.take().unwrap_or("a guard");
                    lines.push(format!("{} used {}! {}.", self.attacker, move_name, kind));
                }
                TurnEvent::AttackNullified => {
                    if let Some(move_name) = pending_move.take() {
                        lines.push(format!("{} used {}!", self.attacker, move_name));
                    }
                    lines.push(format!("{} blocked or dodged the attack!", self.defender));
                }
                TurnEvent::EffectApplied { effect } => {
                    lines.push(format!("Effect applied: {effect}"));
                }
                TurnEvent::TurnForfeited => {
                    lines.push(format!(
                        "{} has no moves available and loses the turn.",
                        self.attacker
                    ));
                }
                TurnEvent::Defeated { name } => {
                    lines.push(format!("{name} is knocked out!"));
                }
            }
        }
        lines
    }
}
