//! Python bindings for the match engine.
//!
//! Lets a Python front-end drive a match without reimplementing the rules.
//!
//! # Quick Start
//!
//! ```python
//! import rps_engine as rps
//!
//! engine = rps.GameEngine(seed=42)
//! result = engine.resolve_round("rock")
//! print(result.round, result.enemy_choice, result.outcome)
//!
//! if result.is_game_over:
//!     engine.reset()
//! ```

use pyo3::prelude::*;

mod py_core;
mod py_engine;

pub use py_core::*;
pub use py_engine::*;

/// rps_engine: turn-based Rock-Paper-Scissors.
#[pymodule]
fn rps_engine(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyMatchState>()?;
    m.add_class::<PyRoundResult>()?;
    m.add_class::<PyGameEngine>()?;

    Ok(())
}
