//! Quiz rounds: a fixed question set answered one at a time.
//!
//! Covers both interaction flavors of the suite: multiple-choice
//! grammar questions and correct/incorrect sentence judgments. Both reduce
//! to "compare the submitted option text against the stored answer", so
//! one round type carries them.

use serde::Serialize;

use crate::content::{Difficulty, GRAMMAR_QUESTIONS, JUDGMENT_SENTENCES};
use crate::core::{EngineError, GameRng};

/// The two options of a judgment question.
const JUDGMENT_OPTIONS: &[&str] = &["Correct", "Incorrect"];

/// One question inside a quiz round.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizItem {
    prompt: &'static str,
    options: Vec<&'static str>,
    answer: &'static str,
}

/// A quiz round: an ordered question set with a cursor.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizRound {
    items: Vec<QuizItem>,
    current: usize,
}

impl QuizRound {
    /// Build a multiple-choice round: filter the grammar bank by tier,
    /// then sample `count` questions in random order.
    pub fn generate_choice(
        difficulty: Difficulty,
        count: usize,
        rng: &mut GameRng,
    ) -> Result<Self, EngineError> {
        let pool: Vec<&crate::content::QuizQuestion> = GRAMMAR_QUESTIONS
            .iter()
            .filter(|q| q.difficulty == difficulty)
            .collect();
        let picked = rng.sample(&pool, count)?;

        Ok(Self {
            items: picked
                .into_iter()
                .map(|q| QuizItem {
                    prompt: q.prompt,
                    options: q.options.to_vec(),
                    answer: q.answer,
                })
                .collect(),
            current: 0,
        })
    }

    /// Build a sentence-judgment round from the judgment bank.
    pub fn generate_judgment(
        difficulty: Difficulty,
        count: usize,
        rng: &mut GameRng,
    ) -> Result<Self, EngineError> {
        let pool: Vec<&crate::content::JudgmentSentence> = JUDGMENT_SENTENCES
            .iter()
            .filter(|s| s.difficulty == difficulty)
            .collect();
        let picked = rng.sample(&pool, count)?;

        Ok(Self {
            items: picked
                .into_iter()
                .map(|s| QuizItem {
                    prompt: s.text,
                    options: JUDGMENT_OPTIONS.to_vec(),
                    answer: if s.correct {
                        JUDGMENT_OPTIONS[0]
                    } else {
                        JUDGMENT_OPTIONS[1]
                    },
                })
                .collect(),
            current: 0,
        })
    }

    /// Check a submitted option against the current question.
    #[must_use]
    pub fn check(&self, input: &str) -> bool {
        match self.items.get(self.current) {
            Some(item) => item.answer == input.trim(),
            None => false,
        }
    }

    /// Move to the next question. Returns `true` while questions remain.
    pub fn advance(&mut self) -> bool {
        self.current += 1;
        !self.is_finished()
    }

    /// All questions answered?
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.current >= self.items.len()
    }

    /// Total question count in this round.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the round holds no questions.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Renderable snapshot of the current question.
    #[must_use]
    pub fn view(&self) -> QuizView {
        let item = self.items.get(self.current);
        QuizView {
            prompt: item.map(|i| i.prompt),
            options: item.map(|i| i.options.clone()).unwrap_or_default(),
            question_index: self.current.min(self.items.len()),
            question_count: self.items.len(),
        }
    }
}

/// Presentation snapshot: current prompt and options, never the answer.
#[derive(Clone, Debug, Serialize)]
pub struct QuizView {
    pub prompt: Option<&'static str>,
    pub options: Vec<&'static str>,
    pub question_index: usize,
    pub question_count: usize,
}
