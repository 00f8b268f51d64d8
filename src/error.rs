//! Engine errors.

/// Crate result alias.
pub type Result<T> = std::result::Result<T, EngineError>;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EngineError {
    /// `resolve_round` was called after the match ended.
    /// The caller should have disabled its choice controls.
    InvalidState {
        /// Round counter at the time of the rejected call.
        round: u32,
    },
}

impl std::fmt::Display for EngineError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EngineError::InvalidState { round } => write!(
                f,
                "round resolution attempted after game over (round {})",
                round
            ),
        }
    }
}

impl std::error::Error for EngineError {}
