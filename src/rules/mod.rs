//! Match rules.
//!
//! - `outcome`: who wins a single throw
//! - `engine`: `GameEngine`, which applies outcomes to the `MatchState`
//!   and enforces the Active/GameOver state machine

pub mod outcome;
pub mod engine;

pub use outcome::{resolve, Outcome};
pub use engine::{GameEngine, RoundResult};
