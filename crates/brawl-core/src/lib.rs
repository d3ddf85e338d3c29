//! # Brawl Core
//!
//! Turn-based combat engine for the Brawl terminal fighting game.
//!
//! A match pits a human against a computer opponent, each controlling one
//! character from a JSON roster. Sides alternate turns, each using one move;
//! damage is reduced by the defender's defense and the first side reduced to
//! zero health loses.
//!
//! ## Architecture
//!
//! - **Data**: [`character::Character`] and [`character::Move`] are immutable
//!   templates loaded through [`roster::Roster`]
//! - **State**: [`combatant::CombatantState`] tracks health, cooldowns and
//!   guards for one side of one match
//! - **Resolution**: [`engine::TurnEngine`] applies a single move and reports
//!   what happened as [`event::TurnReport`]s
//! - **Orchestration**: [`controller::MatchController`] runs selection and the
//!   turn loop over a [`controller::Frontend`]
//!
//! ## Usage
//!
//! ```rust,no_run
//! use brawl_core::config::MatchConfig;
//! use brawl_core::controller::{MatchController, TerminalFrontend};
//! use brawl_core::roster::Roster;
//!
//! let roster = Roster::load("Characters.json")?;
//! let mut controller = MatchController::new(roster, MatchConfig::default());
//! let state = controller.run(&mut TerminalFrontend::stdio())?;
//! println!("{:?}", state.outcome());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod character;
pub mod combatant;
pub mod config;
pub mod controller;
pub mod engine;
pub mod error;
pub mod event;
pub mod policy;
pub mod roster;

pub use character::{Character, Move};
pub use combatant::CombatantState;
pub use config::MatchConfig;
pub use controller::{MatchController, MatchState, Outcome};
pub use engine::TurnEngine;
pub use roster::Roster;

#[cfg(test)]
mod tests;
