//! Single binary-operation evaluation
//!
//! Operands are kept as display text and only parsed when an operator
//! resolves. There is no precedence: each call evaluates exactly one
//! `previous <op> current` pair, and chaining happens one step at a time
//! in the reducer.
//!
//! Division by zero and unparseable operands are not errors. They follow
//! IEEE-754 and show up as `Infinity`, `-Infinity` or `NaN`.

use crate::{CalculatorError, CalculatorResult, CalculatorState, OperandSide, Operation};

/// Evaluate `prev <op> curr`
///
/// # Examples
/// ```
/// use calculator::{evaluate, Operation};
///
/// assert_eq!(evaluate("4", "10", Operation::Divide), 2.5);
/// assert_eq!(evaluate("3", "12", Operation::Add), 15.0);
/// assert!(evaluate("0", "1", Operation::Divide).is_infinite());
/// ```
pub fn evaluate(curr: &str, prev: &str, op: Operation) -> f64 {
    op.apply(parse_operand(prev), parse_operand(curr))
}

/// Evaluate the pending operation held in `state`
///
/// Fails when the previous operand, the operation, or a non-empty current
/// operand is missing. An empty current operand counts as missing: the
/// display is still waiting for the second number.
pub fn try_evaluate(state: &CalculatorState) -> CalculatorResult<f64> {
    let curr = state
        .current_operand
        .value()
        .ok_or(CalculatorError::MissingOperand {
            which: OperandSide::Current,
        })?;
    let prev = state
        .previous_operand
        .as_deref()
        .filter(|prev| !prev.is_empty())
        .ok_or(CalculatorError::MissingOperand {
            which: OperandSide::Previous,
        })?;
    let op = state.operation.ok_or(CalculatorError::MissingOperation)?;

    let result = evaluate(curr, prev, op);
    tracing::trace!(prev, %op, curr, result, "evaluated {}", op.name());
    Ok(result)
}

/// Parse operand text as a decimal number
///
/// Text that is not a number (a lone `.`, for instance) parses as NaN.
/// `Infinity`, `-Infinity` and `NaN` round-trip from [`format_number`].
pub fn parse_operand(text: &str) -> f64 {
    text.trim().parse::<f64>().unwrap_or(f64::NAN)
}

/// Render an evaluation result as operand text
///
/// Integral results print without a fractional part, other finite values
/// use the shortest representation that parses back to the same number.
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value.is_infinite() {
        if value.is_sign_positive() {
            "Infinity".to_string()
        } else {
            "-Infinity".to_string()
        }
    } else if value == 0.0 {
        // Collapses -0
        "0".to_string()
    } else {
        value.to_string()
    }
}
