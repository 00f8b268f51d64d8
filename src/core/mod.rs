//! Core match types: choices, life tiers, players, state, RNG, configuration.
//!
//! These are plain values. Only `GameEngine` in `rules` mutates a
//! `MatchState`; everything here is safe to hand to the presentation layer.

pub mod choice;
pub mod life;
pub mod player;
pub mod rng;
pub mod config;
pub mod state;

pub use choice::{Choice, ParseChoiceError};
pub use life::LifeLevel;
pub use player::{Player, Side};
pub use rng::{GameRng, GameRngState};
pub use config::MatchConfig;
pub use state::MatchState;
