//! Match state: round counter, both players, terminal flag.
//!
//! `MatchState` is the single owned value the engine mutates. The
//! presentation layer only ever sees it through `&MatchState` or a clone.

use serde::{Deserialize, Serialize};

use super::life::LifeLevel;
use super::player::{Player, Side};

/// Snapshot of a match in progress.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchState {
    /// Round to be played next (starts at 1).
    pub round: u32,

    pub hero: Player,

    pub enemy: Player,

    /// Set once either player reaches `LifeLevel::Empty`.
    pub terminal: bool,
}

impl Default for MatchState {
    fn default() -> Self {
        Self::new()
    }
}

impl MatchState {
    /// Initial state: round 1, both players full, not terminal.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            round: 1,
            hero: Player::new(Side::Hero),
            enemy: Player::new(Side::Enemy),
            terminal: false,
        }
    }

    /// Get a player by side.
    #[must_use]
    pub fn player(&self, side: Side) -> &Player {
        match side {
            Side::Hero => &self.hero,
            Side::Enemy => &self.enemy,
        }
    }

    /// Get a mutable player by side.
    pub fn player_mut(&mut self, side: Side) -> &mut Player {
        match side {
            Side::Hero => &mut self.hero,
            Side::Enemy => &mut self.enemy,
        }
    }

    /// Life tier of one side.
    #[must_use]
    pub fn life(&self, side: Side) -> LifeLevel {
        self.player(side).life
    }

    /// Number of rounds resolved since the match started.
    #[must_use]
    pub fn rounds_played(&self) -> u32 {
        self.round.saturating_sub(1)
    }

    /// Whether any player has run out of life.
    #[must_use]
    pub fn any_defeated(&self) -> bool {
        self.hero.is_defeated() || self.enemy.is_defeated()
    }

    /// The side still standing once the match is over.
    #[must_use]
    pub fn winner(&self) -> Option<Side> {
        if !self.terminal {
            return None;
        }
        Side::BOTH
            .into_iter()
            .find(|&side| !self.player(side).is_defeated())
    }
}
