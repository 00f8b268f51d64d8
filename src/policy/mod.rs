//! Opponent policies.
//!
//! The enemy's throw is drawn through the `OpponentPolicy` trait so the
//! engine never calls a global RNG:
//! - `UniformOpponent`: each choice with probability 1/3 (the real opponent)
//! - `ScriptedOpponent`: replays a fixed sequence (tests, demos)

use crate::core::{Choice, GameRng, GameRngState, MatchState};

/// Source of the enemy's choice for each round.
pub trait OpponentPolicy {
    /// Draw the enemy's throw for the round about to be played.
    fn choose(&mut self, state: &MatchState) -> Choice;
}

impl<P: OpponentPolicy + ?Sized> OpponentPolicy for Box<P> {
    fn choose(&mut self, state: &MatchState) -> Choice {
        (**self).choose(state)
    }
}

/// Uniform random opponent.
///
/// Selects uniformly from the three choices using a seeded `GameRng`.
#[derive(Clone, Debug)]
pub struct UniformOpponent {
    rng: GameRng,
}

impl UniformOpponent {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: GameRng::new(seed),
        }
    }

    /// Seed from OS entropy.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self {
            rng: GameRng::from_entropy(),
        }
    }

    /// Resume from a captured RNG state.
    #[must_use]
    pub fn from_rng_state(state: &GameRngState) -> Self {
        Self {
            rng: GameRng::from_state(state),
        }
    }

    /// Capture the RNG position so the remaining draws can be replayed.
    #[must_use]
    pub fn rng_state(&self) -> GameRngState {
        self.rng.state()
    }
}

impl OpponentPolicy for UniformOpponent {
    fn choose(&mut self, _state: &MatchState) -> Choice {
        Choice::ALL[self.rng.gen_range_usize(0..Choice::ALL.len())]
    }
}

/// Replays a fixed sequence of choices, wrapping around when exhausted.
#[derive(Clone, Debug)]
pub struct ScriptedOpponent {
    script: Vec<Choice>,
    cursor: usize,
}

impl ScriptedOpponent {
    /// Panics if `script` is empty.
    #[must_use]
    pub fn new(script: impl Into<Vec<Choice>>) -> Self {
        let script = script.into();
        assert!(!script.is_empty(), "Script must contain at least 1 choice");
        Self { script, cursor: 0 }
    }

    /// Always throw the same choice.
    #[must_use]
    pub fn always(choice: Choice) -> Self {
        Self::new(vec![choice])
    }

    /// Number of choices drawn so far.
    #[must_use]
    pub fn drawn(&self) -> usize {
        self.cursor
    }
}

impl OpponentPolicy for ScriptedOpponent {
    fn choose(&mut self, _state: &MatchState) -> Choice {
        let choice = self.script[self.cursor % self.script.len()];
        self.cursor += 1;
        choice
    }
}
