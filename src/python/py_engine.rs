//! Engine binding for Python.

use pyo3::prelude::*;

use crate::core::MatchConfig;
use crate::hud::Hud;
use crate::rules::GameEngine;

use super::py_core::{parse_choice, PyMatchState, PyRoundResult};

/// Python wrapper for GameEngine with a uniform random opponent.
#[pyclass(name = "GameEngine")]
pub struct PyGameEngine {
    engine: GameEngine,
}

#[pymethods]
impl PyGameEngine {
    /// Create a new match.
    ///
    /// # Arguments
    /// - seed: opponent RNG seed; omit for a non-reproducible opponent
    #[new]
    #[pyo3(signature = (seed = None))]
    fn new(seed: Option<u64>) -> Self {
        let config = MatchConfig { seed };
        Self {
            engine: GameEngine::from_config(&config),
        }
    }

    /// Play one round with "rock", "paper" or "scissors".
    ///
    /// Raises ValueError for an unknown choice and RuntimeError once the
    /// match is over.
    fn resolve_round(&mut self, choice: &str) -> PyResult<PyRoundResult> {
        let choice = parse_choice(choice)?;
        let result = self.engine.resolve_round(choice)?;
        Ok(PyRoundResult(result))
    }

    /// Start a fresh match.
    fn reset(&mut self) {
        self.engine.reset();
    }

    /// Snapshot of the match.
    fn current_state(&self) -> PyMatchState {
        PyMatchState(self.engine.current_state().clone())
    }

    /// Banner text for the current screen as (top, bottom).
    #[pyo3(signature = (last = None))]
    fn banner(
        &self,
        last: Option<PyRef<'_, PyRoundResult>>,
    ) -> (&'static str, Option<&'static str>) {
        let hud = Hud::new(self.engine.current_state(), last.as_ref().map(|r| &r.0));
        (hud.banner.top, hud.banner.bottom)
    }

    #[getter]
    fn is_game_over(&self) -> bool {
        self.engine.is_game_over()
    }

    fn __repr__(&self) -> String {
        let state = self.engine.current_state();
        let status = if state.terminal { "game over" } else { "active" };
        format!("GameEngine(round={}, status={})", state.round, status)
    }
}
