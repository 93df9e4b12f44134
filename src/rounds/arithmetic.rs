//! Arithmetic rounds: generation and direct-answer verification.
//!
//! The correct answer is fixed at generation time and the stored operands
//! are the single source of truth. The prompt string is derived for
//! display only and is never re-evaluated at submit time.

use serde::Serialize;

use crate::core::{EngineError, GameRng};
use crate::levels::Op;

/// One generated arithmetic question.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ArithmeticRound {
    num1: i32,
    num2: i32,
    op: Op,
    answer: i32,
}

impl ArithmeticRound {
    /// Generate a question for the given operator set and operand bound.
    ///
    /// Division operands are constructed backwards so the quotient is an
    /// exact integer: draw `num2` below `num1`, then scale `num1` up.
    pub fn generate(
        operations: &[Op],
        max_number: i32,
        rng: &mut GameRng,
    ) -> Result<Self, EngineError> {
        let op = *rng
            .choose(operations)
            .ok_or(EngineError::InsufficientPool {
                needed: 1,
                available: 0,
            })?;

        let mut num1 = rng.gen_range(1..max_number + 1);
        let mut num2 = rng.gen_range(1..max_number + 1);

        if op == Op::Div {
            num2 = rng.gen_range(1..(num1 - 1).max(1) + 1);
            num1 *= num2;
        }

        let answer = op.apply(num1, num2);
        Ok(Self {
            num1,
            num2,
            op,
            answer,
        })
    }

    /// Check a submitted answer.
    ///
    /// Non-numeric input is an incorrect answer, not an error: the player
    /// recovers by typing again.
    #[must_use]
    pub fn check(&self, input: &str) -> bool {
        match input.trim().parse::<i32>() {
            Ok(value) => value == self.answer,
            Err(_) => {
                log::debug!("non-numeric answer {input:?} treated as incorrect");
                false
            }
        }
    }

    /// The question as shown to the player.
    #[must_use]
    pub fn prompt(&self) -> String {
        format!("{} {} {} = ?", self.num1, self.op.symbol(), self.num2)
    }

    /// The operands and operator, for invariant checks.
    #[must_use]
    pub fn parts(&self) -> (i32, Op, i32) {
        (self.num1, self.op, self.num2)
    }

    /// Renderable snapshot.
    #[must_use]
    pub fn view(&self) -> ArithmeticView {
        ArithmeticView {
            prompt: self.prompt(),
        }
    }
}

/// What the presentation layer sees: the prompt, never the answer.
#[derive(Clone, Debug, Serialize)]
pub struct ArithmeticView {
    pub prompt: String,
}
