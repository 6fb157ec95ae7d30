use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::model::{Operator, Question};

/// Produces random arithmetic questions.
///
/// - the operator is picked uniformly from `+`, `-`, `×`
/// - operands are drawn from `1..=max_operand`
/// - for `-` the second operand never exceeds the first, so answers stay non-negative
#[derive(Debug, Clone)]
pub struct QuestionGenerator {
    rng: StdRng,
    max_operand: u32,
}

impl QuestionGenerator {
    /// Generator seeded from the operating system.
    #[must_use]
    pub fn new(max_operand: u32) -> Self {
        Self::with_rng(StdRng::from_os_rng(), max_operand)
    }

    /// Deterministic generator for reproducible sessions and tests.
    #[must_use]
    pub fn seeded(seed: u64, max_operand: u32) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed), max_operand)
    }

    #[must_use]
    pub fn with_rng(rng: StdRng, max_operand: u32) -> Self {
        Self {
            rng,
            max_operand: max_operand.max(1),
        }
    }

    pub fn generate(&mut self) -> Question {
        let operator = Operator::ALL[self.rng.random_range(0..Operator::ALL.len())];
        let left = self.rng.random_range(1..=self.max_operand);
        let right = match operator {
            Operator::Subtract => self.rng.random_range(1..=left),
            Operator::Add | Operator::Multiply => self.rng.random_range(1..=self.max_operand),
        };
        Question::new(left, operator, right)
    }
}
