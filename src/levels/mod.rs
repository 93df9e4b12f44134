//! Level tables: immutable per-level configuration.
//!
//! A [`GameSpec`] is a named level table plus an advancement policy. The
//! session never hardcodes difficulty parameters; games define them at
//! startup and the table stays read-only for the life of the session.

use serde::Serialize;

use crate::content::{Difficulty, MatchCategory};
use crate::core::EngineError;

/// An arithmetic operator a level may draw from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum Op {
    Add,
    Sub,
    Mul,
    Div,
}

impl Op {
    /// Display symbol for round prompts.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Op::Add => '+',
            Op::Sub => '-',
            Op::Mul => '*',
            Op::Div => '/',
        }
    }

    /// Apply the operator. Division operands are constructed so the
    /// result is always an exact integer.
    #[must_use]
    pub const fn apply(self, a: i32, b: i32) -> i32 {
        match self {
            Op::Add => a + b,
            Op::Sub => a - b,
            Op::Mul => a * b,
            Op::Div => a / b,
        }
    }
}

/// Variant-specific generation parameters for one level.
#[derive(Clone, Debug)]
pub enum RoundParams {
    /// Timed mental arithmetic: one question per round.
    Arithmetic { operations: Vec<Op>, max_number: i32 },

    /// Multiple-choice questions filtered from the grammar bank.
    Choice { difficulty: Difficulty },

    /// Correct/incorrect sentence judgments from the judgment bank.
    Judgment { difficulty: Difficulty },

    /// Select-and-match over a fixed category set.
    Matching { categories: &'static [MatchCategory] },

    /// Memory tile deck of `pairs` distinct faces.
    Memory { pairs: usize },

    /// Pattern replay: `length` symbols, each revealed for `reveal_ms`.
    Pattern { length: usize, reveal_ms: u64 },
}

/// One difficulty tier: generation parameters, score goal, time budget.
#[derive(Clone, Debug)]
pub struct LevelSpec {
    /// Display name ("Level 1", "Easy", ...).
    pub name: &'static str,

    /// Score required to clear the level. For single-clear games this is
    /// the per-level question/match quota; for repeated-clears games it is
    /// the number of cleared rounds required.
    pub goal: u32,

    /// Countdown budget in seconds. `None` for untimed levels.
    pub time_budget: Option<u64>,

    /// What the round generator builds for this level.
    pub params: RoundParams,
}

/// How a level hands over to the next one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum AdvancePolicy {
    /// A single full-score clear advances the level; finishing a round
    /// below full score ends the attempt.
    SingleClear,

    /// Repeat-until-mastery: every cleared round scores one point and the
    /// level regenerates until the goal is met. A failed round regenerates
    /// without scoring.
    RepeatedClears,
}

/// A complete game definition: name, advancement policy, level table.
#[derive(Clone, Debug)]
pub struct GameSpec {
    pub name: &'static str,
    pub advance: AdvancePolicy,
    pub levels: Vec<LevelSpec>,
}

impl GameSpec {
    /// Look up a level by index.
    pub fn level(&self, index: usize) -> Result<&LevelSpec, EngineError> {
        self.levels.get(index).ok_or(EngineError::NoSuchLevel {
            index,
            count: self.levels.len(),
        })
    }

    /// Whether `index` is the final level of the table.
    #[must_use]
    pub fn is_last_level(&self, index: usize) -> bool {
        index + 1 >= self.levels.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec() -> GameSpec {
        GameSpec {
            name: "test",
            advance: AdvancePolicy::SingleClear,
            levels: vec![
                LevelSpec {
                    name: "Level 1",
                    goal: 5,
                    time_budget: Some(60),
                    params: RoundParams::Arithmetic {
                        operations: vec![Op::Add],
                        max_number: 10,
                    },
                },
                LevelSpec {
                    name: "Level 2",
                    goal: 7,
                    time_budget: Some(90),
                    params: RoundParams::Arithmetic {
                        operations: vec![Op::Add, Op::Mul],
                        max_number: 20,
                    },
                },
            ],
        }
    }

    #[test]
    fn test_level_lookup() {
        let spec = spec();
        assert_eq!(spec.level(0).unwrap().name, "Level 1");
        assert_eq!(
            spec.level(2).unwrap_err(),
            EngineError::NoSuchLevel { index: 2, count: 2 }
        );
    }

    #[test]
    fn test_is_last_level() {
        let spec = spec();
        assert!(!spec.is_last_level(0));
        assert!(spec.is_last_level(1));
        assert!(spec.is_last_level(5));
    }

    #[test]
    fn test_div_is_exact_by_construction() {
        // 12 / 4: the generator multiplies num1 by num2 first.
        assert_eq!(Op::Div.apply(12, 4), 3);
        assert_eq!(Op::Div.symbol(), '/');
    }
}
