//! Match state and outcome tracking.

use serde::Serialize;
use std::fmt;

use crate::character::Character;
use crate::combatant::CombatantState;
use crate::event::TurnReport;

/// One side of a match.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize)]
pub enum Side {
    /// The human (or autoplay) side. Always acts first.
    Player,
    /// The computer side.
    Opponent,
}

impl Side {
    /// Returns the other side.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Player => Self::Opponent,
            Self::Opponent => Self::Player,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Player => write!(f, "Player"),
            Self::Opponent => write!(f, "Opponent"),
        }
    }
}

/// Result of a match.
///
/// Turns are sequential, so exactly one side is defeated when a match ends;
/// there is no draw.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash, Serialize)]
pub enum Outcome {
    /// Neither side has been defeated yet.
    #[default]
    InProgress,
    /// The opponent's health reached zero.
    PlayerWins,
    /// The player's health reached zero.
    OpponentWins,
}

impl Outcome {
    /// Returns the winning side, if the match is over.
    #[must_use]
    pub const fn winner(self) -> Option<Side> {
        match self {
            Self::InProgress => None,
            Self::PlayerWins => Some(Side::Player),
            Self::OpponentWins => Some(Side::Opponent),
        }
    }
}

/// Everything that changes during one match.
///
/// Created once both characters are chosen; terminal once
/// [`MatchState::outcome`] is no longer [`Outcome::InProgress`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchState {
    player: CombatantState,
    opponent: CombatantState,
    turn_number: u32,
    outcome: Outcome,
    history: Vec<TurnReport>,
}

impl MatchState {
    /// Starts a match at turn 1 with both combatants at full health.
    #[must_use]
    pub fn new(player: Character, opponent: Character) -> Self {
        Self {
            player: CombatantState::new(player),
            opponent: CombatantState::new(opponent),
            turn_number: 1,
            outcome: Outcome::InProgress,
            history: Vec::new(),
        }
    }

    /// Returns the player's combatant state.
    #[must_use]
    pub const fn player(&self) -> &CombatantState {
        &self.player
    }

    /// Returns the opponent's combatant state.
    #[must_use]
    pub const fn opponent(&self) -> &CombatantState {
        &self.opponent
    }

    /// Returns one side's combatant state.
    #[must_use]
    pub const fn combatant(&self, side: Side) -> &CombatantState {
        match side {
            Side::Player => &self.player,
            Side::Opponent => &self.opponent,
        }
    }

    /// Returns `(actor, target)` for a turn taken by `side`.
    pub fn split_mut(&mut self, side: Side) -> (&mut CombatantState, &mut CombatantState) {
        match side {
            Side::Player => (&mut self.player, &mut self.opponent),
            Side::Opponent => (&mut self.opponent, &mut self.player),
        }
    }

    /// Returns the current turn number, starting at 1.
    ///
    /// Once the match is over this is the turn that ended it.
    #[must_use]
    pub const fn turn_number(&self) -> u32 {
        self.turn_number
    }

    /// Returns the side that acts on the current turn. The player acts on odd turns.
    #[must_use]
    pub const fn active_side(&self) -> Side {
        if self.turn_number % 2 == 1 {
            Side::Player
        } else {
            Side::Opponent
        }
    }

    /// Returns the match outcome.
    #[must_use]
    pub const fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Returns true once a side has been defeated.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.outcome != Outcome::InProgress
    }

    /// Returns every resolved turn in order.
    #[must_use]
    pub fn history(&self) -> &[TurnReport] {
        &self.history
    }

    /// Records a resolved turn, then either ends the match or advances the turn.
    pub fn record(&mut self, report: TurnReport) {
        self.history.push(report);
        if self.opponent.is_defeated() {
            self.outcome = Outcome::PlayerWins;
        } else if self.player.is_defeated() {
            self.outcome = Outcome::OpponentWins;
        } else {
            self.turn_number += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::character::Move;
    use crate::engine::TurnEngine;

    fn state() -> MatchState {
        MatchState::new(
            Character::new("P", 10, 0, vec![Move::new("Jab", 5, 0)]).unwrap(),
            Character::new("O", 10, 0, vec![Move::new("Poke", 3, 0)]).unwrap(),
        )
    }

    #[test]
    fn new_match_starts_on_player_turn() {
        let state = state();
        assert_eq!(state.turn_number(), 1);
        assert_eq!(state.active_side(), Side::Player);
        assert_eq!(state.outcome(), Outcome::InProgress);
        assert!(state.history().is_empty());
    }

    #[test]
    fn sides_alternate() {
        let engine = TurnEngine::new();
        let mut state = state();

        let (me, foe) = state.split_mut(Side::Player);
        let report = engine.resolve(me, "Jab", foe).unwrap();
        state.record(report);
        assert_eq!(state.turn_number(), 2);
        assert_eq!(state.active_side(), Side::Opponent);

        let (me, foe) = state.split_mut(Side::Opponent);
        let report = engine.resolve(me, "Poke", foe).unwrap();
        state.record(report);
        assert_eq!(state.active_side(), Side::Player);
        assert_eq!(state.player().current_health(), 7);
        assert_eq!(state.opponent().current_health(), 5);
    }

    #[test]
    fn knockout_ends_match_without_advancing() {
        let engine = TurnEngine::new();
        let mut state = state();

        for _ in 0..2 {
            let side = state.active_side();
            let move_name = if side == Side::Player { "Jab" } else { "Poke" };
            let (me, foe) = state.split_mut(side);
            let report = engine.resolve(me, move_name, foe).unwrap();
            state.record(report);
        }
        let (me, foe) = state.split_mut(Side::Player);
        let report = engine.resolve(me, "Jab", foe).unwrap();
        state.record(report);

        assert_eq!(state.opponent().current_health(), 0);
        assert_eq!(state.outcome(), Outcome::PlayerWins);
        assert_eq!(state.outcome().winner(), Some(Side::Player));
        assert_eq!(state.turn_number(), 3);
        assert!(state.is_over());
        assert_eq!(state.history().len(), 3);
    }

    #[test]
    fn opposite_side() {
        assert_eq!(Side::Player.opposite(), Side::Opponent);
        assert_eq!(Side::Opponent.opposite(), Side::Player);
    }
}
