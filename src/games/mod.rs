//! The built-in game catalog.
//!
//! Each constructor returns the immutable [`GameSpec`] for one mini-game:
//! its level table, clear goals, time budgets, and advancement policy.
//! Sessions never mutate a spec; difficulty progression is expressed
//! entirely through the level parameters here.

use crate::content::{Difficulty, EMOTIONS, SHAPES};
use crate::levels::{AdvancePolicy, GameSpec, LevelSpec, Op, RoundParams};

/// Timed mental arithmetic over three escalating levels.
///
/// Operations and operand ranges widen per level; division rounds are
/// built so the quotient is always exact.
#[must_use]
pub fn basic_arithmetic() -> GameSpec {
    GameSpec {
        name: "Basic Arithmetic",
        advance: AdvancePolicy::SingleClear,
        levels: vec![
            LevelSpec {
                name: "Level 1",
                goal: 5,
                time_budget: Some(60),
                params: RoundParams::Arithmetic {
                    operations: vec![Op::Add, Op::Sub],
                    max_number: 10,
                },
            },
            LevelSpec {
                name: "Level 2",
                goal: 7,
                time_budget: Some(90),
                params: RoundParams::Arithmetic {
                    operations: vec![Op::Add, Op::Sub, Op::Mul],
                    max_number: 20,
                },
            },
            LevelSpec {
                name: "Level 3",
                goal: 10,
                time_budget: Some(120),
                params: RoundParams::Arithmetic {
                    operations: vec![Op::Add, Op::Sub, Op::Mul, Op::Div],
                    max_number: 50,
                },
            },
        ],
    }
}

/// Multiple-choice grammar quiz, one difficulty tier per level.
///
/// Each level draws `goal` distinct questions from its tier. Note that the
/// shipped bank is smaller than every level's draw, so starting this game
/// reports `InsufficientPool` until the bank grows; the sizes are kept as
/// designed rather than silently shrinking the quiz.
#[must_use]
pub fn english_grammar() -> GameSpec {
    GameSpec {
        name: "English Grammar",
        advance: AdvancePolicy::SingleClear,
        levels: vec![
            LevelSpec {
                name: "Easy",
                goal: 5,
                time_budget: None,
                params: RoundParams::Choice {
                    difficulty: Difficulty::Easy,
                },
            },
            LevelSpec {
                name: "Medium",
                goal: 7,
                time_budget: None,
                params: RoundParams::Choice {
                    difficulty: Difficulty::Medium,
                },
            },
            LevelSpec {
                name: "Hard",
                goal: 10,
                time_budget: None,
                params: RoundParams::Choice {
                    difficulty: Difficulty::Hard,
                },
            },
        ],
    }
}

/// Timed correct/incorrect sentence judgment across three tiers.
#[must_use]
pub fn grammar_detective() -> GameSpec {
    GameSpec {
        name: "Grammar Detective",
        advance: AdvancePolicy::SingleClear,
        levels: vec![
            LevelSpec {
                name: "Easy",
                goal: 3,
                time_budget: Some(60),
                params: RoundParams::Judgment {
                    difficulty: Difficulty::Easy,
                },
            },
            LevelSpec {
                name: "Medium",
                goal: 3,
                time_budget: Some(90),
                params: RoundParams::Judgment {
                    difficulty: Difficulty::Medium,
                },
            },
            LevelSpec {
                name: "Hard",
                goal: 3,
                time_budget: Some(120),
                params: RoundParams::Judgment {
                    difficulty: Difficulty::Hard,
                },
            },
        ],
    }
}

/// Pair-matching memory decks; three cleared decks advance the level.
#[must_use]
pub fn memory_cards() -> GameSpec {
    GameSpec {
        name: "Memory Cards",
        advance: AdvancePolicy::RepeatedClears,
        levels: vec![
            LevelSpec {
                name: "Easy",
                goal: 3,
                time_budget: None,
                params: RoundParams::Memory { pairs: 6 },
            },
            LevelSpec {
                name: "Medium",
                goal: 3,
                time_budget: None,
                params: RoundParams::Memory { pairs: 8 },
            },
            LevelSpec {
                name: "Hard",
                goal: 3,
                time_budget: None,
                params: RoundParams::Memory { pairs: 10 },
            },
        ],
    }
}

/// Watch-then-replay instrument sequences; longer and faster per level,
/// three correct replays to advance.
#[must_use]
pub fn musical_patterns() -> GameSpec {
    GameSpec {
        name: "Musical Patterns",
        advance: AdvancePolicy::RepeatedClears,
        levels: vec![
            LevelSpec {
                name: "Easy",
                goal: 3,
                time_budget: None,
                params: RoundParams::Pattern {
                    length: 3,
                    reveal_ms: 1000,
                },
            },
            LevelSpec {
                name: "Medium",
                goal: 3,
                time_budget: None,
                params: RoundParams::Pattern {
                    length: 5,
                    reveal_ms: 800,
                },
            },
            LevelSpec {
                name: "Hard",
                goal: 3,
                time_budget: None,
                params: RoundParams::Pattern {
                    length: 7,
                    reveal_ms: 600,
                },
            },
        ],
    }
}

/// Single-board emotion matching: arm a face, drop it on its name.
#[must_use]
pub fn emotion_match() -> GameSpec {
    GameSpec {
        name: "Emotion Match",
        advance: AdvancePolicy::SingleClear,
        levels: vec![LevelSpec {
            name: "Level 1",
            goal: EMOTIONS.len() as u32,
            time_budget: None,
            params: RoundParams::Matching {
                categories: EMOTIONS,
            },
        }],
    }
}

/// Single-board shape sorting, same mechanics as [`emotion_match`].
#[must_use]
pub fn shape_sort() -> GameSpec {
    GameSpec {
        name: "Shape Sort",
        advance: AdvancePolicy::SingleClear,
        levels: vec![LevelSpec {
            name: "Level 1",
            goal: SHAPES.len() as u32,
            time_budget: None,
            params: RoundParams::Matching { categories: SHAPES },
        }],
    }
}

/// Every built-in game, for enumeration in menus and tests.
#[must_use]
pub fn all() -> Vec<GameSpec> {
    vec![
        basic_arithmetic(),
        english_grammar(),
        grammar_detective(),
        memory_cards(),
        musical_patterns(),
        emotion_match(),
        shape_sort(),
    ]
}
