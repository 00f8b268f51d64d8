//! Round outcome and the resolution rule.

use serde::{Deserialize, Serialize};

use crate::core::{Choice, Side};

/// Result of a single throw.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    Tie,
    HeroWins,
    EnemyWins,
}

impl Outcome {
    /// The winning side, `None` on a tie.
    #[must_use]
    pub const fn winner(self) -> Option<Side> {
        match self {
            Outcome::Tie => None,
            Outcome::HeroWins => Some(Side::Hero),
            Outcome::EnemyWins => Some(Side::Enemy),
        }
    }

    /// The side that takes a hit, `None` on a tie.
    #[must_use]
    pub const fn loser(self) -> Option<Side> {
        match self {
            Outcome::Tie => None,
            Outcome::HeroWins => Some(Side::Enemy),
            Outcome::EnemyWins => Some(Side::Hero),
        }
    }
}

/// Decide a throw: equal choices tie, otherwise the choice that beats the
/// other wins.
#[must_use]
pub fn resolve(hero: Choice, enemy: Choice) -> Outcome {
    if hero == enemy {
        Outcome::Tie
    } else if hero.beats() == enemy {
        Outcome::HeroWins
    } else {
        Outcome::EnemyWins
    }
}
