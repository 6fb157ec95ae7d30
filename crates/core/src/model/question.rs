use std::fmt;

/// Arithmetic operation used by a quiz question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
}

impl Operator {
    pub const ALL: [Operator; 3] = [Operator::Add, Operator::Subtract, Operator::Multiply];

    /// Symbol shown in the question text.
    #[must_use]
    pub fn symbol(self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::Subtract => "-",
            Operator::Multiply => "×",
        }
    }

    #[must_use]
    pub fn apply(self, left: u32, right: u32) -> i64 {
        let (left, right) = (i64::from(left), i64::from(right));
        match self {
            Operator::Add => left + right,
            Operator::Subtract => left - right,
            Operator::Multiply => left.saturating_mul(right),
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// A single arithmetic question and its expected answer.
///
/// The answer is always derived from the operands, so a `Question` can never
/// carry an answer that disagrees with its expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    left: u32,
    right: u32,
    operator: Operator,
    answer: i64,
}

impl Question {
    #[must_use]
    pub fn new(left: u32, operator: Operator, right: u32) -> Self {
        Self {
            left,
            right,
            operator,
            answer: operator.apply(left, right),
        }
    }

    #[must_use]
    pub fn operands(&self) -> (u32, u32) {
        (self.left, self.right)
    }

    #[must_use]
    pub fn operator(&self) -> Operator {
        self.operator
    }

    #[must_use]
    pub fn correct_answer(&self) -> i64 {
        self.answer
    }

    /// Expression text, e.g. `7 × 3`.
    #[must_use]
    pub fn expression_text(&self) -> String {
        format!("{} {} {}", self.left, self.operator, self.right)
    }

    #[must_use]
    pub fn is_correct(&self, value: i64) -> bool {
        value == self.answer
    }
}

impl fmt::Display for Question {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.left, self.operator, self.right)
    }
}
