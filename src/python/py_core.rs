//! Value type bindings for Python.

use pyo3::exceptions::{PyRuntimeError, PyValueError};
use pyo3::prelude::*;

use crate::core::{Choice, LifeLevel, MatchState};
use crate::error::EngineError;
use crate::rules::{Outcome, RoundResult};

impl From<EngineError> for PyErr {
    fn from(err: EngineError) -> PyErr {
        PyRuntimeError::new_err(err.to_string())
    }
}

/// Parse a choice name coming from Python.
pub(crate) fn parse_choice(name: &str) -> PyResult<Choice> {
    name.parse::<Choice>()
        .map_err(|e| PyValueError::new_err(e.to_string()))
}

fn life_name(life: LifeLevel) -> &'static str {
    match life {
        LifeLevel::Full => "full",
        LifeLevel::Half => "half",
        LifeLevel::Empty => "empty",
    }
}

fn outcome_name(outcome: Outcome) -> &'static str {
    match outcome {
        Outcome::Tie => "tie",
        Outcome::HeroWins => "hero_wins",
        Outcome::EnemyWins => "enemy_wins",
    }
}

/// Python wrapper for MatchState.
#[pyclass(name = "MatchState")]
#[derive(Clone, Debug)]
pub struct PyMatchState(pub MatchState);

#[pymethods]
impl PyMatchState {
    #[getter]
    fn round(&self) -> u32 {
        self.0.round
    }

    #[getter]
    fn hero_life(&self) -> &'static str {
        life_name(self.0.hero.life)
    }

    #[getter]
    fn enemy_life(&self) -> &'static str {
        life_name(self.0.enemy.life)
    }

    #[getter]
    fn is_game_over(&self) -> bool {
        self.0.terminal
    }

    fn __repr__(&self) -> String {
        format!(
            "MatchState(round={}, hero={}, enemy={}, game_over={})",
            self.0.round,
            self.hero_life(),
            self.enemy_life(),
            self.0.terminal
        )
    }
}

/// Python wrapper for RoundResult.
#[pyclass(name = "RoundResult")]
#[derive(Clone, Debug)]
pub struct PyRoundResult(pub RoundResult);

#[pymethods]
impl PyRoundResult {
    #[getter]
    fn round(&self) -> u32 {
        self.0.round
    }

    #[getter]
    fn hero_choice(&self) -> &'static str {
        self.0.hero_choice.name()
    }

    #[getter]
    fn enemy_choice(&self) -> &'static str {
        self.0.enemy_choice.name()
    }

    /// One of "tie", "hero_wins", "enemy_wins".
    #[getter]
    fn outcome(&self) -> &'static str {
        outcome_name(self.0.outcome)
    }

    #[getter]
    fn hero_life(&self) -> &'static str {
        life_name(self.0.hero_life)
    }

    #[getter]
    fn enemy_life(&self) -> &'static str {
        life_name(self.0.enemy_life)
    }

    #[getter]
    fn is_game_over(&self) -> bool {
        self.0.is_game_over
    }

    fn __repr__(&self) -> String {
        format!(
            "RoundResult(round={}, {} vs {}, {})",
            self.0.round,
            self.0.hero_choice,
            self.0.enemy_choice,
            self.outcome()
        )
    }
}
