//! Fixtures for scripted matches.

use crate::config::MatchConfig;
use crate::controller::{MatchController, TerminalFrontend};
use crate::roster::Roster;

// =============================================================================
// Rosters
// =============================================================================

/// Three characters with distinct stats.
///
/// - Ryu: 20 HP, defense 2. Jab (5), Haymaker (9, cooldown 2), Parry (guard, cooldown 2)
/// - Ken: 20 HP, defense 0. Jab (5), Sweep (4, cooldown 1)
/// - Chun: 18 HP, defense 1. Kick (6), Spin (8, cooldown 3)
pub const SAMPLE_ROSTER: &str = r#"{
    "characters": [
        {
            "name": "Ryu", "health": 20, "defense": 2,
            "moves": [
                {"name": "Jab", "power": 5, "cooldown": 0},
                {"name": "Haymaker", "power": 9, "cooldown": 2},
                {"name": "Parry", "power": 0, "cooldown": 2, "effect": "Blocks next attack"}
            ]
        },
        {
            "name": "Ken", "health": 20, "defense": 0,
            "moves": [
                {"name": "Jab", "power": 5, "cooldown": 0},
                {"name": "Sweep", "power": 4, "cooldown": 1}
            ]
        },
        {
            "name": "Chun", "health": 18, "defense": 1,
            "moves": [
                {"name": "Kick", "power": 6, "cooldown": 0},
                {"name": "Spin", "power": 8, "cooldown": 3}
            ]
        }
    ]
}"#;

/// Parses [`SAMPLE_ROSTER`].
pub fn sample_roster() -> Roster {
    Roster::from_json_str(SAMPLE_ROSTER).expect("sample roster is valid")
}

/// Two 10 HP characters whose only moves deal exactly 5 damage.
pub fn even_roster() -> Roster {
    Roster::from_json_str(
        r#"{"characters": [
            {"name": "A", "health": 10, "defense": 0, "moves": [{"name": "Jab", "power": 5}]},
            {"name": "B", "health": 10, "defense": 0, "moves": [{"name": "Jab", "power": 5}]}
        ]}"#,
    )
    .expect("even roster is valid")
}

// =============================================================================
// Frontends
// =============================================================================

/// A frontend that replays `input` and captures all output.
pub fn scripted(input: &str) -> TerminalFrontend<&[u8], Vec<u8>> {
    TerminalFrontend::new(input.as_bytes(), Vec::new())
}

/// Returns everything a scripted frontend has written.
pub fn transcript(frontend: TerminalFrontend<&[u8], Vec<u8>>) -> String {
    let (_, output) = frontend.into_parts();
    String::from_utf8(output).expect("frontend output is UTF-8")
}

/// A controller for `roster` using the default config.
pub fn controller(roster: Roster) -> MatchController {
    MatchController::new(roster, MatchConfig::default())
}
