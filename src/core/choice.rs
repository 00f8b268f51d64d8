//! The three hand shapes and the cyclic dominance rule.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A hand shape thrown by either side.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Choice {
    Rock,
    Paper,
    Scissors,
}

impl Choice {
    /// All choices, ordered by index.
    pub const ALL: [Choice; 3] = [Choice::Rock, Choice::Paper, Choice::Scissors];

    /// Stable index (Rock = 0, Paper = 1, Scissors = 2).
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Choice::Rock => 0,
            Choice::Paper => 1,
            Choice::Scissors => 2,
        }
    }

    /// The choice this one defeats.
    #[must_use]
    pub const fn beats(self) -> Choice {
        match self {
            Choice::Rock => Choice::Scissors,
            Choice::Scissors => Choice::Paper,
            Choice::Paper => Choice::Rock,
        }
    }

    /// Display name shown on the choice labels.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Choice::Rock => "Rock",
            Choice::Paper => "Paper",
            Choice::Scissors => "Scissors",
        }
    }
}

impl std::fmt::Display for Choice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing an unknown choice name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseChoiceError(pub String);

impl std::fmt::Display for ParseChoiceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown choice: {:?}", self.0)
    }
}

impl std::error::Error for ParseChoiceError {}

impl FromStr for Choice {
    type Err = ParseChoiceError;

    /// Case-insensitive parse of "rock", "paper" or "scissors".
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseChoiceError(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cyclic_rule() {
        assert_eq!(Choice::Rock.beats(), Choice::Scissors);
        assert_eq!(Choice::Scissors.beats(), Choice::Paper);
        assert_eq!(Choice::Paper.beats(), Choice::Rock);
    }

    #[test]
    fn test_nothing_beats_itself() {
        for c in Choice::ALL {
            assert_ne!(c.beats(), c);
            assert_ne!(c.beats().beats(), c.beats());
        }
    }

    #[test]
    fn test_index_matches_all() {
        for (i, c) in Choice::ALL.into_iter().enumerate() {
            assert_eq!(c.index(), i);
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Choice::Scissors), "Scissors");
    }

    #[test]
    fn test_parse() {
        assert_eq!("rock".parse::<Choice>(), Ok(Choice::Rock));
        assert_eq!(" PAPER ".parse::<Choice>(), Ok(Choice::Paper));
        assert_eq!("Scissors".parse::<Choice>(), Ok(Choice::Scissors));
        assert!("lizard".parse::<Choice>().is_err());
    }
}
