//! Move definitions and their optional effects.

use serde::Serialize;
use std::fmt;

/// How a guard move protects its user.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum GuardKind {
    /// Blocks the next incoming attack.
    Block,
    /// Dodges the next incoming attack.
    Dodge,
}

impl fmt::Display for GuardKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Block => write!(f, "Blocks next attack"),
            Self::Dodge => write!(f, "Dodge next attack"),
        }
    }
}

/// Extra behavior attached to a move.
///
/// Guard effects change how the move resolves. Any other effect text is
/// carried through to the turn narration unchanged.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum MoveEffect {
    /// The move deals no damage and nullifies the next attack on its user.
    Guard(GuardKind),
    /// Descriptive effect with no mechanical impact.
    Flavor(String),
}

impl MoveEffect {
    /// Interprets an effect string from roster data.
    ///
    /// ```
    /// use brawl_core::character::{GuardKind, MoveEffect};
    ///
    /// assert_eq!(
    ///     MoveEffect::from_text("blocks next attack"),
    ///     MoveEffect::Guard(GuardKind::Block),
    /// );
    /// assert_eq!(
    ///     MoveEffect::from_text("burn"),
    ///     MoveEffect::Flavor("burn".to_string()),
    /// );
    /// ```
    #[must_use]
    pub fn from_text(text: &str) -> Self {
        match text.trim().to_ascii_lowercase().as_str() {
            "blocks next attack" => Self::Guard(GuardKind::Block),
            "dodge next attack" => Self::Guard(GuardKind::Dodge),
            _ => Self::Flavor(text.to_string()),
        }
    }

    /// Returns the guard kind, if this is a guard effect.
    #[must_use]
    pub const fn guard(&self) -> Option<GuardKind> {
        match self {
            Self::Guard(kind) => Some(*kind),
            Self::Flavor(_) => None,
        }
    }
}

impl fmt::Display for MoveEffect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Guard(kind) => write!(f, "{kind}"),
            Self::Flavor(text) => write!(f, "{text}"),
        }
    }
}

/// An attack definition.
///
/// Moves are immutable once loaded. `power` is the damage dealt before the
/// defender's flat defense is subtracted; `cooldown_length` is how many of the
/// user's own turns the move stays unusable after it is used.
///
/// # Example
///
/// ```
/// use brawl_core::character::Move;
///
/// let jab = Move::new("Jab", 5, 0);
/// assert_eq!(jab.power(), 5);
/// assert!(!jab.is_guard());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Move {
    name: String,
    power: u32,
    cooldown_length: u32,
    effect: Option<MoveEffect>,
}

impl Move {
    /// Creates a move with no effect.
    #[must_use]
    pub fn new(name: impl Into<String>, power: u32, cooldown_length: u32) -> Self {
        Self {
            name: name.into(),
            power,
            cooldown_length,
            effect: None,
        }
    }

    /// Attaches an effect to the move.
    #[must_use]
    pub fn with_effect(mut self, effect: MoveEffect) -> Self {
        self.effect = Some(effect);
        self
    }

    /// Returns the move name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the base damage before defense.
    #[must_use]
    pub const fn power(&self) -> u32 {
        self.power
    }

    /// Returns the number of own turns the move is unusable after use.
    #[must_use]
    pub const fn cooldown_length(&self) -> u32 {
        self.cooldown_length
    }

    /// Returns the move's effect, if any.
    #[must_use]
    pub const fn effect(&self) -> Option<&MoveEffect> {
        self.effect.as_ref()
    }

    /// Returns true if using this move raises a guard instead of attacking.
    #[must_use]
    pub fn is_guard(&self) -> bool {
        self.effect.as_ref().and_then(MoveEffect::guard).is_some()
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (Power: {})", self.name, self.power)
    }
}
