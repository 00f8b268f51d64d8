//! Sides of a match and their life.
//!
//! ## Side
//!
//! The two fixed seats: the Hero (local user) and the Enemy (opponent policy).
//!
//! ## Player
//!
//! A side plus its current [`LifeLevel`]. `MatchState` owns exactly one of each.

use serde::{Deserialize, Serialize};

use super::life::LifeLevel;

/// Seat identifier. A match always has exactly these two.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Hero,
    Enemy,
}

impl Side {
    /// Both sides, hero first.
    pub const BOTH: [Side; 2] = [Side::Hero, Side::Enemy];
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Hero => f.write_str("Hero"),
            Side::Enemy => f.write_str("Enemy"),
        }
    }
}

/// One participant of the match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Player {
    pub side: Side,
    pub life: LifeLevel,
}

impl Player {
    /// A fresh player at full life.
    #[must_use]
    pub const fn new(side: Side) -> Self {
        Self {
            side,
            life: LifeLevel::Full,
        }
    }

    /// Apply one lost round. Returns the new life tier.
    pub fn take_hit(&mut self) -> LifeLevel {
        self.life = self.life.take_hit();
        self.life
    }

    /// Whether this player has no life left.
    #[must_use]
    pub const fn is_defeated(&self) -> bool {
        self.life.is_empty()
    }
}
