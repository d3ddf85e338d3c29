//! Match orchestration.
//!
//! The [`MatchController`] drives a match from character selection to a
//! knockout:
//!
//! 1. **SELECTING**: The human picks a character by number; the computer picks
//!    with its [`CharacterPolicy`](crate::policy::CharacterPolicy)
//! 2. **IN PROGRESS**: Turns alternate, player first. Each turn is resolved by
//!    the [`TurnEngine`] and recorded in the [`MatchState`]
//! 3. **OVER**: The first side reduced to zero health loses
//!
//! Invalid input (non-numeric, out of range, or a cooling move) is answered
//! with a message and the same prompt. Rejected input never changes the match
//! state.
//!
//! # Example
//!
//! ```
//! use brawl_core::config::MatchConfig;
//! use brawl_core::controller::{MatchController, Outcome, TerminalFrontend};
//! use brawl_core::roster::Roster;
//!
//! let roster = Roster::from_json_str(r#"{"characters": [
//!     {"name": "A", "health": 10, "defense": 0, "moves": [{"name": "Jab", "power": 5}]},
//!     {"name": "B", "health": 10, "defense": 0, "moves": [{"name": "Tap", "power": 1}]}
//! ]}"#)?;
//!
//! // Pick A, then Jab twice.
//! let mut frontend = TerminalFrontend::new("1\n1\n1\n".as_bytes(), Vec::new());
//! let mut controller = MatchController::new(roster, MatchConfig::default());
//! let state = controller.run(&mut frontend)?;
//!
//! assert_eq!(state.outcome(), Outcome::PlayerWins);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod frontend;
mod state;

pub use frontend::{parse_selection, Frontend, TerminalFrontend};
pub use state::{MatchState, Outcome, Side};

use tracing::{info, warn};

use crate::config::MatchConfig;
use crate::engine::TurnEngine;
use crate::error::{MatchError, TurnError};
use crate::event::TurnReport;
use crate::policy::ComputerPlayer;
use crate::roster::Roster;

/// Seed offset for the autoplay side, so it does not mirror the opponent's draws.
const AUTOPLAY_SEED_MIX: u64 = 0x9E37_79B9_7F4A_7C15;

/// Runs matches between the human (or an autoplay policy) and the computer.
#[derive(Debug)]
pub struct MatchController {
    roster: Roster,
    engine: TurnEngine,
    opponent: ComputerPlayer,
    autopilot: Option<ComputerPlayer>,
}

impl MatchController {
    /// Creates a controller for `roster` with policies taken from `config`.
    #[must_use]
    pub fn new(roster: Roster, config: MatchConfig) -> Self {
        let opponent = ComputerPlayer::new(
            config.opponent_character,
            config.opponent_moves,
            config.seed,
        );
        let autopilot = config.autoplay.then(|| {
            ComputerPlayer::new(
                config.autoplay_character,
                config.autoplay_moves,
                config.seed ^ AUTOPLAY_SEED_MIX,
            )
        });
        Self {
            roster,
            engine: TurnEngine::new(),
            opponent,
            autopilot,
        }
    }

    /// Returns the roster.
    #[must_use]
    pub const fn roster(&self) -> &Roster {
        &self.roster
    }

    /// Plays a complete match.
    ///
    /// # Errors
    ///
    /// Returns [`MatchError`] if the frontend fails or input ends mid-match.
    pub fn run(&mut self, frontend: &mut dyn Frontend) -> Result<MatchState, MatchError> {
        let mut state = self.select_characters(frontend)?;
        self.play(&mut state, frontend)?;
        Ok(state)
    }

    /// Lists the roster and settles both characters.
    ///
    /// # Errors
    ///
    /// Returns [`MatchError`] if the frontend fails or input ends.
    pub fn select_characters(
        &mut self,
        frontend: &mut dyn Frontend,
    ) -> Result<MatchState, MatchError> {
        frontend.show("Available characters:")?;
        for (i, character) in self.roster.characters().iter().enumerate() {
            frontend.show(&format!("{}. {}", i + 1, character))?;
        }

        let player_index = match &mut self.autopilot {
            Some(autopilot) => autopilot.choose_character(&self.roster, None),
            None => self.prompt_character(frontend)?,
        };
        let opponent_index = self
            .opponent
            .choose_character(&self.roster, Some(player_index));

        let player = self.roster.characters()[player_index].clone();
        let opponent = self.roster.characters()[opponent_index].clone();
        frontend.show(&format!(
            "You chose {}. CPU chose {}.",
            player.name(),
            opponent.name()
        ))?;
        info!(
            player = player.name(),
            opponent = opponent.name(),
            "match started"
        );

        Ok(MatchState::new(player, opponent))
    }

    fn prompt_character(&self, frontend: &mut dyn Frontend) -> Result<usize, MatchError> {
        let count = self.roster.len();
        loop {
            let line = frontend.prompt(&format!("Choose your character (1-{count}): "))?;
            match parse_selection(&line, count) {
                Ok(index) => return Ok(index),
                Err(e) => {
                    warn!(input = %line, "rejected character selection");
                    frontend.show(&e.to_string())?;
                }
            }
        }
    }

    /// Plays turns until one side is defeated, then announces the result.
    ///
    /// # Errors
    ///
    /// Returns [`MatchError`] if the frontend fails or input ends.
    pub fn play(
        &mut self,
        state: &mut MatchState,
        frontend: &mut dyn Frontend,
    ) -> Result<(), MatchError> {
        show_status(state, frontend)?;
        let winner = loop {
            if let Some(winner) = state.outcome().winner() {
                break winner;
            }
            self.play_turn(state, frontend)?;
        };

        let line = match winner {
            Side::Player => format!("You won! {} is defeated.", state.opponent().name()),
            Side::Opponent => "You lost! CPU wins.".to_string(),
        };
        frontend.show("")?;
        frontend.show(&line)?;
        info!(
            outcome = ?state.outcome(),
            turns = state.turn_number(),
            "match finished"
        );
        Ok(())
    }

    /// Resolves the current turn and reports the new status.
    ///
    /// Does nothing if the match is already over.
    ///
    /// # Errors
    ///
    /// Returns [`MatchError`] if the frontend fails or input ends.
    pub fn play_turn(
        &mut self,
        state: &mut MatchState,
        frontend: &mut dyn Frontend,
    ) -> Result<(), MatchError> {
        if state.is_over() {
            return Ok(());
        }

        let side = state.active_side();
        frontend.show("")?;
        frontend.show(match side {
            Side::Player => "Your turn!",
            Side::Opponent => "CPU's turn!",
        })?;

        let report = match (side, &mut self.autopilot) {
            (Side::Player, None) => human_turn(&self.engine, state, frontend)?,
            (Side::Player, Some(autopilot)) => {
                computer_turn(&self.engine, autopilot, state, side)?
            }
            (Side::Opponent, _) => computer_turn(&self.engine, &mut self.opponent, state, side)?,
        };

        for line in report.narrate() {
            frontend.show(&line)?;
        }
        state.record(report);

        if !state.is_over() {
            show_status(state, frontend)?;
        }
        Ok(())
    }
}

fn human_turn(
    engine: &TurnEngine,
    state: &mut MatchState,
    frontend: &mut dyn Frontend,
) -> Result<TurnReport, MatchError> {
    let (me, foe) = state.split_mut(Side::Player);
    if !me.has_available_move() {
        return Ok(engine.forfeit(me, foe));
    }

    frontend.show(&format!("{}'s moves:", me.name()))?;
    for (i, m) in me.character().moves().iter().enumerate() {
        let cooldown = me.cooldown(m.name());
        let readiness = if cooldown == 0 {
            "ready".to_string()
        } else {
            format!("Cooldown: {cooldown}")
        };
        frontend.show(&format!("{}. {} ({})", i + 1, m, readiness))?;
    }

    let count = me.character().moves().len();
    loop {
        let line = frontend.prompt(&format!("Choose a move for {} (1-{count}): ", me.name()))?;
        let index = match parse_selection(&line, count) {
            Ok(index) => index,
            Err(e) => {
                warn!(input = %line, "rejected move selection");
                frontend.show(&e.to_string())?;
                continue;
            }
        };

        let move_name = me.character().moves()[index].name().to_string();
        match engine.resolve(me, &move_name, foe) {
            Ok(report) => return Ok(report),
            Err(TurnError::MoveOnCooldown(e)) => {
                warn!(move_name = %move_name, remaining = e.remaining, "rejected cooling move");
                frontend.show(&e.to_string())?;
            }
            Err(e) => return Err(e.into()),
        }
    }
}

fn computer_turn(
    engine: &TurnEngine,
    cpu: &mut ComputerPlayer,
    state: &mut MatchState,
    side: Side,
) -> Result<TurnReport, MatchError> {
    let (me, foe) = state.split_mut(side);
    match cpu.choose_move(me) {
        Some(move_name) => Ok(engine.resolve(me, &move_name, foe)?),
        None => Ok(engine.forfeit(me, foe)),
    }
}

/// Shows both health bars and the upcoming actor's usable moves.
fn show_status(state: &MatchState, frontend: &mut dyn Frontend) -> Result<(), MatchError> {
    frontend.show("")?;
    for combatant in [state.player(), state.opponent()] {
        frontend.show(&format!(
            "{} Health: {}/{}",
            combatant.name(),
            combatant.current_health(),
            combatant.max_health()
        ))?;
    }

    let next = state.combatant(state.active_side());
    let available: Vec<_> = next.available_moves().map(|m| m.name()).collect();
    let listing = if available.is_empty() {
        "none".to_string()
    } else {
        available.join(", ")
    };
    frontend.show(&format!("{}'s available moves: {}", next.name(), listing))
}
