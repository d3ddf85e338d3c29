//! Computer selection policies.
//!
//! The computer picks a character once per match and a move every turn. All
//! policies are deterministic: the seeded variants draw from a `ChaCha8Rng`
//! seeded from the match config, so the same seed always yields the same
//! choices.
//!
//! Policies never return an out-of-range character or a move that is cooling
//! down.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use crate::combatant::CombatantState;
use crate::roster::Roster;

/// How the computer chooses its character.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CharacterPolicy {
    /// The first roster entry the human did not pick.
    #[default]
    FirstRemaining,
    /// The highest-ranked roster entry the human did not pick.
    Strongest,
    /// A uniformly random remaining entry, drawn from the seeded RNG.
    Seeded,
}

/// How the computer chooses a move each turn.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MovePolicy {
    /// The available move with the highest power; earliest wins ties.
    #[default]
    Strongest,
    /// The next available move in list order after the last one used.
    Cyclic,
    /// A uniformly random available move, drawn from the seeded RNG.
    Seeded,
}

/// A computer-controlled side of a match.
///
/// # Example
///
/// ```
/// use brawl_core::character::{Character, Move};
/// use brawl_core::combatant::CombatantState;
/// use brawl_core::policy::{CharacterPolicy, ComputerPlayer, MovePolicy};
///
/// let c = Character::new("A", 20, 0, vec![Move::new("Jab", 5, 0), Move::new("Kick", 8, 1)])?;
/// let state = CombatantState::new(c);
///
/// let mut cpu = ComputerPlayer::new(CharacterPolicy::FirstRemaining, MovePolicy::Strongest, 7);
/// assert_eq!(cpu.choose_move(&state), Some("Kick".to_string()));
/// # Ok::<(), brawl_core::error::MalformedRecordError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ComputerPlayer {
    characters: CharacterPolicy,
    moves: MovePolicy,
    rng: ChaCha8Rng,
    cursor: usize,
}

impl ComputerPlayer {
    /// Creates a computer player with its own seeded RNG.
    #[must_use]
    pub fn new(characters: CharacterPolicy, moves: MovePolicy, seed: u64) -> Self {
        Self {
            characters,
            moves,
            rng: ChaCha8Rng::seed_from_u64(seed),
            cursor: 0,
        }
    }

    /// Returns the character policy.
    #[must_use]
    pub const fn character_policy(&self) -> CharacterPolicy {
        self.characters
    }

    /// Returns the move policy.
    #[must_use]
    pub const fn move_policy(&self) -> MovePolicy {
        self.moves
    }

    /// Picks a roster index, avoiding `taken` when another choice exists.
    ///
    /// With a single-character roster the only entry is returned even if it
    /// was taken, producing a mirror match.
    pub fn choose_character(&mut self, roster: &Roster, taken: Option<usize>) -> usize {
        let candidates: Vec<usize> = (0..roster.len())
            .filter(|&i| roster.len() == 1 || Some(i) != taken)
            .collect();

        match self.characters {
            CharacterPolicy::FirstRemaining => candidates[0],
            CharacterPolicy::Strongest => candidates
                .iter()
                .copied()
                .max_by(|&a, &b| roster.characters()[a].cmp(&roster.characters()[b]))
                .unwrap_or(candidates[0]),
            CharacterPolicy::Seeded => candidates[self.rng.gen_range(0..candidates.len())],
        }
    }

    /// Picks a currently available move, or `None` if every move is cooling down.
    pub fn choose_move(&mut self, state: &CombatantState) -> Option<String> {
        let moves = state.character().moves();
        let chosen = match self.moves {
            MovePolicy::Strongest => state
                .available_moves()
                .enumerate()
                .max_by(|(ia, a), (ib, b)| a.power().cmp(&b.power()).then(ib.cmp(ia)))
                .map(|(_, m)| m),
            MovePolicy::Cyclic => {
                let len = moves.len();
                let found = (0..len)
                    .map(|offset| (self.cursor + offset) % len)
                    .find(|&i| state.is_move_available(moves[i].name()));
                if let Some(i) = found {
                    self.cursor = (i + 1) % len;
                }
                found.map(|i| &moves[i])
            }
            MovePolicy::Seeded => {
                let available: Vec<_> = state.available_moves().collect();
                if available.is_empty() {
                    None
                } else {
                    Some(available[self.rng.gen_range(0..available.len())])
                }
            }
        };
        chosen.map(|m| m.name().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::character::{Character, Move};

    fn roster() -> Roster {
        Roster::new(vec![
            Character::new("Mid", 30, 2, vec![Move::new("Jab", 6, 0)]).unwrap(),
            Character::new("Strong", 30, 2, vec![Move::new("Smash", 20, 1)]).unwrap(),
            Character::new("Weak", 30, 2, vec![Move::new("Tap", 1, 0)]).unwrap(),
        ])
        .unwrap()
    }

    fn fighter() -> CombatantState {
        CombatantState::new(
            Character::new(
                "F",
                30,
                0,
                vec![
                    Move::new("Jab", 5, 0),
                    Move::new("Kick", 9, 1),
                    Move::new("Haymaker", 9, 3),
                ],
            )
            .unwrap(),
        )
    }

    mod character_policy_tests {
        use super::*;

        #[test]
        fn first_remaining_skips_taken() {
            let mut cpu = ComputerPlayer::new(CharacterPolicy::FirstRemaining, MovePolicy::default(), 0);
            assert_eq!(cpu.choose_character(&roster(), Some(0)), 1);
            assert_eq!(cpu.choose_character(&roster(), Some(1)), 0);
        }

        #[test]
        fn strongest_uses_character_order() {
            let mut cpu = ComputerPlayer::new(CharacterPolicy::Strongest, MovePolicy::default(), 0);
            assert_eq!(cpu.choose_character(&roster(), Some(0)), 1);
            assert_eq!(cpu.choose_character(&roster(), Some(1)), 0);
        }

        #[test]
        fn seeded_never_picks_taken_and_repeats_per_seed() {
            let picks = |seed| {
                let mut cpu = ComputerPlayer::new(CharacterPolicy::Seeded, MovePolicy::default(), seed);
                (0..20)
                    .map(|_| cpu.choose_character(&roster(), Some(2)))
                    .collect::<Vec<_>>()
            };
            let first = picks(99);
            assert!(first.iter().all(|&i| i < 2));
            assert_eq!(first, picks(99));
        }

        #[test]
        fn single_character_roster_is_a_mirror_match() {
            let solo = Roster::new(vec![
                Character::new("Solo", 10, 0, vec![Move::new("Jab", 5, 0)]).unwrap(),
            ])
            .unwrap();
            for policy in [
                CharacterPolicy::FirstRemaining,
                CharacterPolicy::Strongest,
                CharacterPolicy::Seeded,
            ] {
                let mut cpu = ComputerPlayer::new(policy, MovePolicy::default(), 1);
                assert_eq!(cpu.choose_character(&solo, Some(0)), 0);
            }
        }
    }

    mod move_policy_tests {
        use super::*;

        #[test]
        fn strongest_prefers_power_then_list_order() {
            let mut cpu = ComputerPlayer::new(CharacterPolicy::default(), MovePolicy::Strongest, 0);
            assert_eq!(cpu.choose_move(&fighter()), Some("Kick".into()));
        }

        #[test]
        fn strongest_skips_cooling_moves() {
            let mut state = fighter();
            let kick = state.character().moves()[1].clone();
            state.start_cooldown(&kick);
            let mut cpu = ComputerPlayer::new(CharacterPolicy::default(), MovePolicy::Strongest, 0);
            assert_eq!(cpu.choose_move(&state), Some("Haymaker".into()));
        }

        #[test]
        fn cyclic_walks_the_list() {
            let state = fighter();
            let mut cpu = ComputerPlayer::new(CharacterPolicy::default(), MovePolicy::Cyclic, 0);
            let picks: Vec<_> = (0..4).filter_map(|_| cpu.choose_move(&state)).collect();
            assert_eq!(picks, vec!["Jab", "Kick", "Haymaker", "Jab"]);
        }

        #[test]
        fn cyclic_skips_cooling_moves() {
            let mut state = fighter();
            let kick = state.character().moves()[1].clone();
            state.start_cooldown(&kick);
            let mut cpu = ComputerPlayer::new(CharacterPolicy::default(), MovePolicy::Cyclic, 0);
            let picks: Vec<_> = (0..2).filter_map(|_| cpu.choose_move(&state)).collect();
            assert_eq!(picks, vec!["Jab", "Haymaker"]);
        }

        #[test]
        fn seeded_only_picks_available_moves() {
            let mut state = fighter();
            let haymaker = state.character().moves()[2].clone();
            state.start_cooldown(&haymaker);
            let mut cpu = ComputerPlayer::new(CharacterPolicy::default(), MovePolicy::Seeded, 5);
            for _ in 0..50 {
                let pick = cpu.choose_move(&state).unwrap();
                assert!(state.is_move_available(&pick));
            }
        }

        #[test]
        fn no_available_move_yields_none() {
            let mut state = CombatantState::new(
                Character::new("F", 10, 0, vec![Move::new("Beam", 9, 2)]).unwrap(),
            );
            let beam = state.character().moves()[0].clone();
            state.start_cooldown(&beam);
            for policy in [MovePolicy::Strongest, MovePolicy::Cyclic, MovePolicy::Seeded] {
                let mut cpu = ComputerPlayer::new(CharacterPolicy::default(), policy, 3);
                assert_eq!(cpu.choose_move(&state), None);
            }
        }
    }

    #[test]
    fn policies_deserialize_from_kebab_case() {
        let policy: CharacterPolicy = serde_json::from_str("\"first-remaining\"").unwrap();
        assert_eq!(policy, CharacterPolicy::FirstRemaining);
        let policy: MovePolicy = serde_json::from_str("\"cyclic\"").unwrap();
        assert_eq!(policy, MovePolicy::Cyclic);
    }
}
