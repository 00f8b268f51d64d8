//! Presentation-ready view of a match.
//!
//! The front-end renders a round label, a two-line banner, one choice
//! label per side, a heart per side and the three choice buttons. `Hud`
//! derives all of them from engine values, so the front-end never keeps
//! its own copy of life or round counters.

use serde::Serialize;

use crate::core::{LifeLevel, MatchState, Side};
use crate::rules::{Outcome, RoundResult};

/// Two-line status banner. A `None` bottom line is hidden.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Banner {
    pub top: &'static str,
    pub bottom: Option<&'static str>,
}

impl Banner {
    const READY: Banner = Banner { top: "Ready", bottom: None };
    const TIE: Banner = Banner { top: "Tie!", bottom: None };
    const WIN: Banner = Banner { top: "You", bottom: Some("win!") };
    const LOSE: Banner = Banner { top: "You", bottom: Some("lose!") };
    const GAME_OVER: Banner = Banner { top: "Game", bottom: Some("over") };

    fn for_result(result: &RoundResult) -> Banner {
        if result.is_game_over {
            return Banner::GAME_OVER;
        }
        match result.outcome {
            Outcome::Tie => Banner::TIE,
            Outcome::HeroWins => Banner::WIN,
            Outcome::EnemyWins => Banner::LOSE,
        }
    }
}

/// Everything drawn on screen for one frame.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Hud {
    /// e.g. "Round 3"
    pub round_label: String,
    pub banner: Banner,
    /// Hidden (`None`) until a round has been played.
    pub hero_choice_label: Option<&'static str>,
    pub enemy_choice_label: Option<&'static str>,
    pub hero_life: LifeLevel,
    pub enemy_life: LifeLevel,
    /// Rock/Paper/Scissors buttons; hidden once the match is over.
    pub controls_visible: bool,
}

impl Hud {
    /// Build the view for `state`, optionally right after `last` was resolved.
    ///
    /// Without a result (match start, after reset) the round label shows the
    /// upcoming round and the banner reads "Ready"; once the match is over it
    /// stays on the last round played. With a result it shows the round just
    /// played.
    #[must_use]
    pub fn new(state: &MatchState, last: Option<&RoundResult>) -> Self {
        match last {
            None => Self {
                round_label: if state.terminal {
                    round_label(state.rounds_played())
                } else {
                    round_label(state.round)
                },
                banner: if state.terminal {
                    Banner::GAME_OVER
                } else {
                    Banner::READY
                },
                hero_choice_label: None,
                enemy_choice_label: None,
                hero_life: state.hero.life,
                enemy_life: state.enemy.life,
                controls_visible: !state.terminal,
            },
            Some(result) => Self {
                round_label: round_label(result.round),
                banner: Banner::for_result(result),
                hero_choice_label: Some(result.hero_choice.name()),
                enemy_choice_label: Some(result.enemy_choice.name()),
                hero_life: state.hero.life,
                enemy_life: state.enemy.life,
                controls_visible: !state.terminal,
            },
        }
    }

    /// Heart asset for one side.
    #[must_use]
    pub fn heart_sprite(&self, side: Side) -> &'static str {
        match side {
            Side::Hero => self.hero_life.heart_sprite(),
            Side::Enemy => self.enemy_life.heart_sprite(),
        }
    }
}

fn round_label(round: u32) -> String {
    format!("Round {}", round)
}
