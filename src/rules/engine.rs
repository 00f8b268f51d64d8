//! The match engine.
//!
//! `GameEngine` owns the `MatchState` and an opponent policy. It has two
//! states:
//! - **Active** (`terminal == false`): `resolve_round` plays a round
//! - **GameOver** (`terminal == true`): `resolve_round` fails until `reset`

use serde::{Deserialize, Serialize};

use crate::core::{Choice, LifeLevel, MatchConfig, MatchState, Side};
use crate::error::{EngineError, Result};
use crate::policy::{OpponentPolicy, UniformOpponent};

use super::outcome::{resolve, Outcome};

/// Everything the presentation layer needs to render one resolved round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundResult {
    /// Round just played (1-based).
    pub round: u32,
    pub hero_choice: Choice,
    pub enemy_choice: Choice,
    pub outcome: Outcome,
    /// Hero life after the round.
    pub hero_life: LifeLevel,
    /// Enemy life after the round.
    pub enemy_life: LifeLevel,
    pub is_game_over: bool,
}

impl RoundResult {
    /// Winner of this round, `None` on a tie.
    #[must_use]
    pub fn winner(&self) -> Option<Side> {
        self.outcome.winner()
    }

    /// Life of one side after the round.
    #[must_use]
    pub fn life(&self, side: Side) -> LifeLevel {
        match side {
            Side::Hero => self.hero_life,
            Side::Enemy => self.enemy_life,
        }
    }
}

/// Turn-based Rock-Paper-Scissors match.
///
/// ## Example
///
/// ```
/// use rps_engine::{Choice, GameEngine, Outcome, ScriptedOpponent};
///
/// let mut engine = GameEngine::new(ScriptedOpponent::always(Choice::Scissors));
/// let result = engine.resolve_round(Choice::Rock).unwrap();
///
/// assert_eq!(result.round, 1);
/// assert_eq!(result.outcome, Outcome::HeroWins);
/// assert_eq!(engine.current_state().round, 2);
/// ```
#[derive(Clone, Debug)]
pub struct GameEngine<P = UniformOpponent> {
    state: MatchState,
    policy: P,
}

impl GameEngine<UniformOpponent> {
    /// Engine with a uniform random opponent seeded per `config`.
    #[must_use]
    pub fn from_config(config: &MatchConfig) -> Self {
        let policy = match config.seed {
            Some(seed) => UniformOpponent::new(seed),
            None => UniformOpponent::from_entropy(),
        };
        Self::new(policy)
    }
}

impl<P: OpponentPolicy> GameEngine<P> {
    /// Start a match against `policy`.
    #[must_use]
    pub fn new(policy: P) -> Self {
        Self {
            state: MatchState::new(),
            policy,
        }
    }

    /// Resume from an existing state.
    ///
    /// The terminal flag is recomputed from the players' life.
    #[must_use]
    pub fn with_state(mut state: MatchState, policy: P) -> Self {
        state.round = state.round.max(1);
        state.terminal = state.any_defeated();
        Self { state, policy }
    }

    /// Play one round with the hero's throw.
    ///
    /// The reported round is the counter before this call; the counter then
    /// advances, ties included.
    ///
    /// # Errors
    ///
    /// `EngineError::InvalidState` if the match is already over. State and
    /// policy are left untouched.
    pub fn resolve_round(&mut self, hero_choice: Choice) -> Result<RoundResult> {
        if self.state.terminal {
            log::warn!(
                "resolve_round({}) rejected: match is over (round {})",
                hero_choice,
                self.state.round
            );
            return Err(EngineError::InvalidState {
                round: self.state.round,
            });
        }

        let enemy_choice = self.policy.choose(&self.state);
        let outcome = resolve(hero_choice, enemy_choice);

        if let Some(loser) = outcome.loser() {
            self.state.player_mut(loser).take_hit();
        }
        self.state.terminal = self.state.any_defeated();

        let round = self.state.round;
        self.state.round = self.state.round.saturating_add(1);

        log::debug!(
            "round {}: {} vs {} -> {:?} (hero {:?}, enemy {:?})",
            round,
            hero_choice,
            enemy_choice,
            outcome,
            self.state.hero.life,
            self.state.enemy.life
        );
        if self.state.terminal {
            log::info!("match over after round {}: {:?}", round, outcome);
        }

        Ok(RoundResult {
            round,
            hero_choice,
            enemy_choice,
            outcome,
            hero_life: self.state.hero.life,
            enemy_life: self.state.enemy.life,
            is_game_over: self.state.terminal,
        })
    }

    /// Start a fresh match. The policy keeps its position.
    pub fn reset(&mut self) {
        log::info!("match reset after {} rounds", self.state.rounds_played());
        self.state = MatchState::new();
    }

    /// Read-only view of the match.
    #[must_use]
    pub fn current_state(&self) -> &MatchState {
        &self.state
    }

    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.state.terminal
    }

    #[must_use]
    pub fn policy(&self) -> &P {
        &self.policy
    }

    pub fn policy_mut(&mut self) -> &mut P {
        &mut self.policy
    }

    /// Consume the engine, returning state and policy.
    #[must_use]
    pub fn into_parts(self) -> (MatchState, P) {
        (self.state, self.policy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::policy::ScriptedOpponent;

    fn engine_against(script: &[Choice]) -> GameEngine<ScriptedOpponent> {
        GameEngine::new(ScriptedOpponent::new(script.to_vec()))
    }

    #[test]
    fn test_hero_wins_first_round() {
        let mut engine = engine_against(&[Choice::Scissors]);

        let result = engine.resolve_round(Choice::Rock).unwrap();

        assert_eq!(result.round, 1);
        assert_eq!(result.enemy_choice, Choice::Scissors);
        assert_eq!(result.outcome, Outcome::HeroWins);
        assert_eq!(result.hero_life, LifeLevel::Full);
        assert_eq!(result.enemy_life, LifeLevel::Half);
        assert!(!result.is_game_over);
        assert_eq!(result.winner(), Some(Side::Hero));
        assert_eq!(engine.current_state().round, 2);
    }

    #[test]
    fn test_tie_changes_only_round() {
        let mut engine = engine_against(&[Choice::Paper]);

        let result = engine.resolve_round(Choice::Paper).unwrap();

        assert_eq!(result.outcome, Outcome::Tie);
        assert_eq!(result.winner(), None);
        assert_eq!(result.hero_life, LifeLevel::Full);
        assert_eq!(result.enemy_life, LifeLevel::Full);
        assert!(!engine.is_game_over());
        assert_eq!(engine.current_state().round, 2);
    }

    #[test]
    fn test_enemy_wins_twice_ends_match() {
        let mut engine = engine_against(&[Choice::Rock]);

        let first = engine.resolve_round(Choice::Scissors).unwrap();
        assert_eq!(first.hero_life, LifeLevel::Half);
        assert!(!first.is_game_over);

        let second = engine.resolve_round(Choice::Scissors).unwrap();
        assert_eq!(second.round, 2);
        assert_eq!(second.hero_life, LifeLevel::Empty);
        assert!(second.is_game_over);
        assert_eq!(engine.current_state().winner(), Some(Side::Enemy));
    }

    #[test]
    fn test_resolve_after_game_over_fails() {
        let mut engine = engine_against(&[Choice::Scissors]);
        engine.resolve_round(Choice::Rock).unwrap();
        engine.resolve_round(Choice::Rock).unwrap();
        assert!(engine.is_game_over());

        let before = engine.current_state().clone();
        let drawn = engine.policy().drawn();

        let err = engine.resolve_round(Choice::Rock).unwrap_err();
        assert_eq!(err, EngineError::InvalidState { round: 3 });

        // Rejected call neither mutates state nor consults the policy
        assert_eq!(engine.current_state(), &before);
        assert_eq!(engine.policy().drawn(), drawn);
    }

    #[test]
    fn test_reset_restores_initial_state() {
        let mut engine = engine_against(&[Choice::Paper]);
        engine.resolve_round(Choice::Rock).unwrap();
        engine.resolve_round(Choice::Rock).unwrap();
        assert!(engine.is_game_over());

        engine.reset();
        assert_eq!(engine.current_state(), &MatchState::new());

        let result = engine.resolve_round(Choice::Scissors).unwrap();
        assert_eq!(result.round, 1);
        assert_eq!(result.outcome, Outcome::HeroWins);
    }

    #[test]
    fn test_reset_is_idempotent() {
        let mut engine = engine_against(&[Choice::Rock]);
        engine.resolve_round(Choice::Paper).unwrap();

        engine.reset();
        let once = engine.current_state().clone();
        engine.reset();
        engine.reset();

        assert_eq!(engine.current_state(), &once);
        assert_eq!(once, MatchState::new());
    }

    #[test]
    fn test_with_state_recomputes_terminal() {
        let mut state = MatchState::new();
        state.round = 0;
        state.hero.life = LifeLevel::Half;

        let mut engine = GameEngine::with_state(state, ScriptedOpponent::always(Choice::Rock));
        assert_eq!(engine.current_state().round, 1);
        assert!(!engine.is_game_over());

        let result = engine.resolve_round(Choice::Paper).unwrap();
        assert_eq!(result.outcome, Outcome::HeroWins);

        let mut dead = MatchState::new();
        dead.enemy.life = LifeLevel::Empty;
        let engine = GameEngine::with_state(dead, ScriptedOpponent::always(Choice::Rock));
        assert!(engine.is_game_over());
    }

    #[test]
    fn test_from_config_is_reproducible() {
        let config = MatchConfig::new().with_seed(1234);
        let mut a = GameEngine::from_config(&config);
        let mut b = GameEngine::from_config(&config);

        for _ in 0..20 {
            if a.is_game_over() {
                a.reset();
                b.reset();
            }
            let ra = a.resolve_round(Choice::Rock).unwrap();
            let rb = b.resolve_round(Choice::Rock).unwrap();
            assert_eq!(ra, rb);
        }
    }

    #[test]
    fn test_round_counter_saturates() {
        let mut state = MatchState::new();
        state.round = u32::MAX;
        let mut engine = GameEngine::with_state(state, ScriptedOpponent::always(Choice::Rock));

        let result = engine.resolve_round(Choice::Rock).unwrap();
        assert_eq!(result.round, u32::MAX);
        assert_eq!(engine.current_state().round, u32::MAX);

        let result = engine.resolve_round(Choice::Paper).unwrap();
        assert_eq!(result.round, u32::MAX);
        assert_eq!(result.outcome, Outcome::HeroWins);
        assert_eq!(engine.current_state().round, u32::MAX);
    }

    #[test]
    fn test_round_result_life_by_side() {
        let mut engine = engine_against(&[Choice::Rock]);
        let result = engine.resolve_round(Choice::Scissors).unwrap();

        assert_eq!(result.life(Side::Hero), LifeLevel::Half);
        assert_eq!(result.life(Side::Enemy), LifeLevel::Full);
    }

    #[test]
    fn test_into_parts() {
        let mut engine = engine_against(&[Choice::Rock]);
        engine.resolve_round(Choice::Rock).unwrap();

        let (state, policy) = engine.into_parts();
        assert_eq!(state.round, 2);
        assert_eq!(policy.drawn(), 1);
    }
}
