//! Discrete life tiers standing in for hit points.

use serde::{Deserialize, Serialize};

/// Remaining hits a player can take.
///
/// Variants are declared in ascending order, so the derived ordering gives
/// `Full > Half > Empty`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum LifeLevel {
    Empty,
    Half,
    #[default]
    Full,
}

impl LifeLevel {
    /// The tier after losing one round. `Empty` stays `Empty`.
    #[must_use]
    pub const fn take_hit(self) -> LifeLevel {
        match self {
            LifeLevel::Full => LifeLevel::Half,
            LifeLevel::Half | LifeLevel::Empty => LifeLevel::Empty,
        }
    }

    #[must_use]
    pub const fn is_empty(self) -> bool {
        matches!(self, LifeLevel::Empty)
    }

    /// Asset name of the heart drawn for this tier.
    #[must_use]
    pub const fn heart_sprite(self) -> &'static str {
        match self {
            LifeLevel::Full => "hud_heartFull",
            LifeLevel::Half => "hud_heartHalf",
            LifeLevel::Empty => "hud_heartEmpty",
        }
    }
}
