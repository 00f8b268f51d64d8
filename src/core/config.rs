//! Match configuration.

use serde::{Deserialize, Serialize};

/// Match configuration parameters.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchConfig {
    /// Seed for the uniform opponent.
    /// `None` draws a seed from OS entropy; a fixed seed replays the same
    /// opponent choices.
    pub seed: Option<u64>,
}

impl MatchConfig {
    /// Create a new config with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fix the opponent seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_unseeded() {
        assert_eq!(MatchConfig::default().seed, None);
    }

    #[test]
    fn test_with_seed() {
        let config = MatchConfig::new().with_seed(99);
        assert_eq!(config.seed, Some(99));
    }

    #[test]
    fn test_config_serde() {
        let config = MatchConfig::new().with_seed(3);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: MatchConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
