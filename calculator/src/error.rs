use thiserror::Error;

/// Which side of a binary operation an operand belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperandSide {
    Previous,
    Current,
}

impl std::fmt::Display for OperandSide {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OperandSide::Previous => write!(f, "previous"),
            OperandSide::Current => write!(f, "current"),
        }
    }
}

/// Error types for the calculator core
///
/// None of these ever escape `reduce`: the reducer treats a failed
/// evaluation as "leave the state alone". They surface only from the
/// checked entry points (`try_evaluate`, digit/operator/key parsing,
/// state deserialization).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalculatorError {
    /// Evaluation attempted while one of the operands has no value
    #[error("Missing {which} operand for evaluation")]
    MissingOperand { which: OperandSide },

    /// Evaluation attempted without a pending operator
    #[error("Missing operation for evaluation")]
    MissingOperation,

    /// Text offered as a digit that is not a single 0-9 or '.'
    #[error("Invalid digit '{0}': expected 0-9 or '.'")]
    InvalidDigit(String),

    /// Operator symbol outside + - * /
    #[error("Invalid operation '{0}': expected one of + - * /")]
    InvalidOperation(String),

    /// State that breaks the operand or operation rules
    #[error("Invalid calculator state: {0}")]
    InvalidState(String),

    /// Key with no event mapping
    #[error("Unknown key '{0}'")]
    UnknownKey(char),
}
