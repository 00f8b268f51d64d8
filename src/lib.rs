//! # rps-engine
//!
//! A turn-based Rock-Paper-Scissors match between a Hero and a random Enemy,
//! built for small wearable front-ends.
//!
//! ## Design Principles
//!
//! 1. **Single owned state**: the whole match lives in one `MatchState`,
//!    mutated only by `GameEngine::resolve_round` and `GameEngine::reset`.
//!
//! 2. **Pluggable opponent**: the enemy's throw comes from an
//!    `OpponentPolicy`, so tests can script it and matches can be replayed
//!    from a seed.
//!
//! 3. **Rendering stays outside**: the front-end reads snapshots (or the
//!    derived `Hud`) and draws them. The engine emits no callbacks.
//!
//! ## Modules
//!
//! - `core`: choices, life tiers, players, state, RNG, configuration
//! - `rules`: round resolution and the `GameEngine` state machine
//! - `policy`: opponent policies
//! - `hud`: presentation-ready labels and visibility flags
//! - `error`: engine errors

pub mod core;
pub mod rules;
pub mod policy;
pub mod hud;
pub mod error;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{
    Choice, ParseChoiceError,
    LifeLevel, Player, Side,
    GameRng, GameRngState,
    MatchConfig, MatchState,
};

pub use crate::rules::{resolve, Outcome, GameEngine, RoundResult};

pub use crate::policy::{OpponentPolicy, UniformOpponent, ScriptedOpponent};

pub use crate::hud::{Banner, Hud};

pub use crate::error::{EngineError, Result};
