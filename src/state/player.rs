//! Player identity.
//!
//! A game seats exactly two players. [`Seat`] is the cheap marker stored in
//! grid cells and as the current-turn pointer; [`Player`] carries the
//! identity value (a color string) that a rendering surface shows. Resolving
//! a seat to its player goes through the game's player table, so two players
//! who picked the same color stay distinct.

use std::fmt;

/// One of the two positions in a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Seat {
    /// Opens the game.
    #[default]
    First,
    /// Moves second.
    Second,
}

impl Seat {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::First => "first",
            Self::Second => "second",
        }
    }

    /// The opposing seat.
    pub fn other(self) -> Seat {
        match self {
            Self::First => Self::Second,
            Self::Second => Self::First,
        }
    }

    /// Index into per-seat storage.
    pub(crate) fn index(self) -> usize {
        match self {
            Self::First => 0,
            Self::Second => 1,
        }
    }
}

impl fmt::Display for Seat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A player identity. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Player {
    color: String,
}

impl Player {
    pub fn new(color: impl Into<String>) -> Self {
        Self {
            color: color.into(),
        }
    }

    /// The distinguishing value supplied by the input surface.
    pub fn color(&self) -> &str {
        &self.color
    }

    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({ "color": self.color })
    }
}
