//! Static content banks.
//!
//! These tables are read-only configuration: generators sample from them
//! but never mutate them. All mutable per-round data is freshly
//! constructed, never aliased back into these tables.

use serde::Serialize;

/// Difficulty tag used to filter question banks per level.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Difficulty::Easy => write!(f, "Easy"),
            Difficulty::Medium => write!(f, "Medium"),
            Difficulty::Hard => write!(f, "Hard"),
        }
    }
}

/// A multiple-choice grammar question.
#[derive(Clone, Copy, Debug)]
pub struct QuizQuestion {
    pub prompt: &'static str,
    pub options: &'static [&'static str],
    /// The correct option, verbatim.
    pub answer: &'static str,
    pub difficulty: Difficulty,
}

/// The grammar question bank.
///
/// Note the tier counts (4 Easy, 3 Medium, 3 Hard): any level quota above
/// them surfaces `InsufficientPool` at generation time.
pub const GRAMMAR_QUESTIONS: &[QuizQuestion] = &[
    QuizQuestion {
        prompt: "Choose the correct form of the verb: She _____ to the store yesterday.",
        options: &["go", "goes", "went", "gone"],
        answer: "went",
        difficulty: Difficulty::Easy,
    },
    QuizQuestion {
        prompt: "Which sentence is grammatically correct?",
        options: &[
            "The cat is laying on the bed.",
            "The cat is lying on the bed.",
            "The cat is lieing on the bed.",
            "The cat is lays on the bed.",
        ],
        answer: "The cat is lying on the bed.",
        difficulty: Difficulty::Medium,
    },
    QuizQuestion {
        prompt: "Identify the correct use of the apostrophe:",
        options: &[
            "Its raining outside.",
            "The dog wagged it's tail.",
            "The book's cover is red.",
            "The tree's are tall.",
        ],
        answer: "The book's cover is red.",
        difficulty: Difficulty::Easy,
    },
    QuizQuestion {
        prompt: "Choose the correct comparative form: This book is _____ than that one.",
        options: &["good", "gooder", "more good", "better"],
        answer: "better",
        difficulty: Difficulty::Easy,
    },
    QuizQuestion {
        prompt: "Identify the sentence with correct subject-verb agreement:",
        options: &[
            "The team are playing well.",
            "The team is playing well.",
            "The team were playing well.",
            "The team have playing well.",
        ],
        answer: "The team is playing well.",
        difficulty: Difficulty::Medium,
    },
    QuizQuestion {
        prompt: "Which sentence uses the correct form of the pronoun?",
        options: &[
            "Between you and I, the secret is safe.",
            "Between you and me, the secret is safe.",
            "Between we, the secret is safe.",
            "Between us, the secret is safe.",
        ],
        answer: "Between you and me, the secret is safe.",
        difficulty: Difficulty::Hard,
    },
    QuizQuestion {
        prompt: "Choose the correct spelling:",
        options: &["recieve", "receive", "receeve", "receve"],
        answer: "receive",
        difficulty: Difficulty::Easy,
    },
    QuizQuestion {
        prompt: "Identify the sentence with the correct use of a semicolon:",
        options: &[
            "I love cooking; and baking.",
            "I love cooking, and baking.",
            "I love cooking; I also enjoy baking.",
            "I love cooking and; baking.",
        ],
        answer: "I love cooking; I also enjoy baking.",
        difficulty: Difficulty::Hard,
    },
    QuizQuestion {
        prompt: "Which sentence uses the correct form of the verb 'lay' or 'lie'?",
        options: &[
            "I'm going to lay down for a nap.",
            "I'm going to lie down for a nap.",
            "I laid on the beach yesterday.",
            "The book is laying on the table.",
        ],
        answer: "I'm going to lie down for a nap.",
        difficulty: Difficulty::Hard,
    },
    QuizQuestion {
        prompt: "Choose the correct word to complete the sentence: The project was _____ by the team.",
        options: &["undertook", "undertaken", "undertaking", "undertakes"],
        answer: "undertaken",
        difficulty: Difficulty::Medium,
    },
];

/// A sentence to judge as grammatically correct or not.
#[derive(Clone, Copy, Debug)]
pub struct JudgmentSentence {
    pub text: &'static str,
    pub correct: bool,
    pub difficulty: Difficulty,
}

/// The sentence-judgment bank, three sentences per tier.
pub const JUDGMENT_SENTENCES: &[JudgmentSentence] = &[
    JudgmentSentence {
        text: "The cat is sleeping on the bed.",
        correct: true,
        difficulty: Difficulty::Easy,
    },
    JudgmentSentence {
        text: "She don't like ice cream.",
        correct: false,
        difficulty: Difficulty::Easy,
    },
    JudgmentSentence {
        text: "They are going to the park.",
        correct: true,
        difficulty: Difficulty::Easy,
    },
    JudgmentSentence {
        text: "Neither of the students have finished their homework.",
        correct: false,
        difficulty: Difficulty::Medium,
    },
    JudgmentSentence {
        text: "The team is practicing for the big game.",
        correct: true,
        difficulty: Difficulty::Medium,
    },
    JudgmentSentence {
        text: "Every one of the apples are ripe.",
        correct: false,
        difficulty: Difficulty::Medium,
    },
    JudgmentSentence {
        text: "If I were you, I would study harder.",
        correct: true,
        difficulty: Difficulty::Hard,
    },
    JudgmentSentence {
        text: "The data show that the experiment was successful.",
        correct: true,
        difficulty: Difficulty::Hard,
    },
    JudgmentSentence {
        text: "She is one of the only people who understands the problem.",
        correct: false,
        difficulty: Difficulty::Hard,
    },
];

/// Faces for the memory tile game. Decks sample distinct faces from here.
pub const TILE_FACES: &[&str] = &[
    "🐶", "🐱", "🐭", "🐹", "🐰", "🦊", "🐻", "🐼", "🐨", "🐯", "🦁", "🐮", "🐷", "🐸", "🐵",
];

/// The instrument set for pattern-repetition games.
pub const INSTRUMENTS: &[&str] = &["🎹", "🎸", "🥁", "🎺"];

/// A category in a select-and-match game: a draggable glyph and the target
/// label it belongs to.
#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct MatchCategory {
    pub name: &'static str,
    pub glyph: &'static str,
}

/// Emotion categories for the emotion-recognition game.
pub const EMOTIONS: &[MatchCategory] = &[
    MatchCategory {
        name: "happy",
        glyph: "😊",
    },
    MatchCategory {
        name: "sad",
        glyph: "😢",
    },
    MatchCategory {
        name: "angry",
        glyph: "😠",
    },
    MatchCategory {
        name: "surprised",
        glyph: "😲",
    },
];

/// Shape categories for the shape-sorting game.
pub const SHAPES: &[MatchCategory] = &[
    MatchCategory {
        name: "circle",
        glyph: "●",
    },
    MatchCategory {
        name: "square",
        glyph: "■",
    },
    MatchCategory {
        name: "triangle",
        glyph: "▲",
    },
    MatchCategory {
        name: "star",
        glyph: "★",
    },
];
