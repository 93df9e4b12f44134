//! Round content: one module per game variant.
//!
//! Each variant owns its generator and its verification strategy; the
//! session state machine stays variant-agnostic and dispatches on the
//! [`Round`] enum. Rounds are freshly constructed per level/attempt and
//! discarded on regeneration, never aliased into configuration tables.

pub mod arithmetic;
pub mod matching;
pub mod memory;
pub mod pattern;
pub mod quiz;

pub use arithmetic::{ArithmeticRound, ArithmeticView};
pub use matching::{MatchAttempt, MatchingRound, MatchingView};
pub use memory::{FlipOutcome, MemoryRound, MemoryView, TileView};
pub use pattern::{PatternProgress, PatternRound, PatternView};
pub use quiz::{QuizRound, QuizView};

use serde::Serialize;

use crate::core::{EngineError, GameRng};
use crate::levels::{LevelSpec, RoundParams};

/// One generated unit of gameplay content.
#[derive(Clone, Debug)]
pub enum Round {
    Arithmetic(ArithmeticRound),
    Quiz(QuizRound),
    Matching(MatchingRound),
    Memory(MemoryRound),
    Pattern(PatternRound),
}

impl Round {
    /// Generate round content for a level.
    ///
    /// Fails with [`EngineError::InsufficientPool`] when the level requests
    /// more content than its bank holds; the caller must not enter play
    /// with a partially built round.
    pub fn generate(level: &LevelSpec, rng: &mut GameRng) -> Result<Self, EngineError> {
        match &level.params {
            RoundParams::Arithmetic {
                operations,
                max_number,
            } => Ok(Round::Arithmetic(ArithmeticRound::generate(
                operations,
                *max_number,
                rng,
            )?)),
            RoundParams::Choice { difficulty } => Ok(Round::Quiz(QuizRound::generate_choice(
                *difficulty,
                level.goal as usize,
                rng,
            )?)),
            RoundParams::Judgment { difficulty } => Ok(Round::Quiz(QuizRound::generate_judgment(
                *difficulty,
                level.goal as usize,
                rng,
            )?)),
            RoundParams::Matching { categories } => {
                Ok(Round::Matching(MatchingRound::generate(*categories, rng)?))
            }
            RoundParams::Memory { pairs } => Ok(Round::Memory(MemoryRound::generate(*pairs, rng)?)),
            RoundParams::Pattern { length, .. } => {
                Ok(Round::Pattern(PatternRound::generate(*length, rng)?))
            }
        }
    }

    /// Renderable snapshot of this round.
    #[must_use]
    pub fn view(&self) -> RoundView {
        match self {
            Round::Arithmetic(r) => RoundView::Arithmetic(r.view()),
            Round::Quiz(r) => RoundView::Quiz(r.view()),
            Round::Matching(r) => RoundView::Matching(r.view()),
            Round::Memory(r) => RoundView::Memory(r.view()),
            Round::Pattern(r) => RoundView::Pattern(r.view()),
        }
    }

    /// Whether the round is currently able to take player input.
    ///
    /// Pattern rounds refuse input during playback; memory rounds refuse
    /// flips while a mismatched pair awaits its settle delay.
    #[must_use]
    pub fn accepts_input(&self) -> bool {
        match self {
            Round::Pattern(r) => !r.is_playing(),
            Round::Memory(r) => !r.has_pending_pair(),
            _ => true,
        }
    }
}

/// Variant-tagged presentation snapshot.
#[derive(Clone, Debug, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RoundView {
    Arithmetic(ArithmeticView),
    Quiz(QuizView),
    Matching(MatchingView),
    Memory(MemoryView),
    Pattern(PatternView),
}
