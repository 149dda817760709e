//! Calculator state: what the display currently shows
//!
//! The state is a plain value. A caller keeps one `CalculatorState`,
//! hands it to [`crate::reduce`] together with an event and stores whatever
//! comes back. Nothing here is mutated behind the caller's back.

use crate::{CalculatorError, CalculatorResult, Operation};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The operand currently being typed
///
/// `Absent` and `Empty` are different states: `Absent` means nothing was
/// entered yet (or the operand was consumed by a chained operator), while
/// `Empty` means an operator was just chosen and the display is waiting for
/// the second operand, or every digit was deleted.
///
/// Serialized as `null`, `""` or the operand text respectively.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "Option<String>", into = "Option<String>")]
pub enum Operand {
    #[default]
    Absent,
    Empty,
    Value(String),
}

impl Operand {
    /// Build an operand from display text, mapping `""` to `Empty`
    pub fn from_text(text: impl Into<String>) -> Self {
        let text = text.into();
        if text.is_empty() {
            Operand::Empty
        } else {
            Operand::Value(text)
        }
    }

    /// The operand text, `None` when absent
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Operand::Absent => None,
            Operand::Empty => Some(""),
            Operand::Value(text) => Some(text),
        }
    }

    /// The operand text, treating absent as `""`
    pub fn text(&self) -> &str {
        self.as_str().unwrap_or_default()
    }

    /// The operand text when it holds at least one character
    pub fn value(&self) -> Option<&str> {
        match self {
            Operand::Value(text) => Some(text),
            _ => None,
        }
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, Operand::Absent)
    }

    pub fn contains_decimal_point(&self) -> bool {
        self.text().contains('.')
    }

    /// New operand with `c` appended
    pub fn pushed(&self, c: char) -> Self {
        let mut text = self.text().to_string();
        text.push(c);
        Operand::Value(text)
    }

    /// New operand with its last character removed
    ///
    /// Absent and empty operands come back unchanged.
    pub fn popped(&self) -> Self {
        match self {
            Operand::Value(text) => {
                let mut text = text.clone();
                text.pop();
                Operand::from_text(text)
            }
            other => other.clone(),
        }
    }
}

impl From<Option<String>> for Operand {
    fn from(value: Option<String>) -> Self {
        value.map(Operand::from_text).unwrap_or_default()
    }
}

impl From<Operand> for Option<String> {
    fn from(operand: Operand) -> Self {
        match operand {
            Operand::Absent => None,
            Operand::Empty => Some(String::new()),
            Operand::Value(text) => Some(text),
        }
    }
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text())
    }
}

/// Result texts that are not plain numbers
const NON_FINITE: [&str; 2] = ["Infinity", "NaN"];

/// The full calculator state
///
/// Deserialization checks the same rules the reducer keeps, so a state handed
/// in from outside (a web client, a saved session) cannot start out broken.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "RawState", rename_all = "camelCase")]
pub struct CalculatorState {
    pub current_operand: Operand,
    pub previous_operand: Option<String>,
    pub operation: Option<Operation>,
}

/// Unchecked wire form of [`CalculatorState`]
#[derive(Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct RawState {
    current_operand: Operand,
    previous_operand: Option<String>,
    operation: Option<Operation>,
}

impl TryFrom<RawState> for CalculatorState {
    type Error = CalculatorError;

    fn try_from(raw: RawState) -> CalculatorResult<Self> {
        let state = CalculatorState {
            current_operand: raw.current_operand,
            previous_operand: raw.previous_operand,
            operation: raw.operation,
        };
        state.validate()?;
        Ok(state)
    }
}

impl CalculatorState {
    /// The session-start state: every field absent
    pub fn new() -> Self {
        Self::default()
    }

    /// A state that is waiting for the second operand of `previous <op>`
    pub fn pending(previous: impl Into<String>, operation: Operation) -> Self {
        Self {
            current_operand: Operand::Empty,
            previous_operand: Some(previous.into()),
            operation: Some(operation),
        }
    }

    /// A state with every field set, ready to evaluate
    pub fn with_operands(
        previous: impl Into<String>,
        operation: Operation,
        current: impl Into<String>,
    ) -> Self {
        Self {
            current_operand: Operand::from_text(current),
            previous_operand: Some(previous.into()),
            operation: Some(operation),
        }
    }

    /// A state holding only a typed operand
    pub fn with_current(current: impl Into<String>) -> Self {
        Self {
            current_operand: Operand::from_text(current),
            ..Self::default()
        }
    }

    /// Check the rules every reducer-built state satisfies
    ///
    /// - operands hold digits with at most one `.`, an optional leading `-`,
    ///   and never start with `00`
    /// - `Infinity` and `NaN` results (and what deleting or typing after them
    ///   leaves behind) are accepted
    /// - the previous operand is never empty
    /// - an operation is only set together with a previous operand
    pub fn validate(&self) -> CalculatorResult<()> {
        if let Some(current) = self.current_operand.value() {
            check_operand_text("currentOperand", current)?;
        }

        match &self.previous_operand {
            Some(previous) if previous.is_empty() => {
                return Err(CalculatorError::InvalidState(
                    "previousOperand is empty".to_string(),
                ));
            }
            Some(previous) => check_operand_text("previousOperand", previous)?,
            None => {}
        }

        if self.operation.is_some() && self.previous_operand.is_none() {
            return Err(CalculatorError::InvalidState(
                "operation is set without a previousOperand".to_string(),
            ));
        }

        Ok(())
    }

    pub fn is_cleared(&self) -> bool {
        self.current_operand.is_absent()
            && self.previous_operand.is_none()
            && self.operation.is_none()
    }

    /// Text for the two lines of the output window
    pub fn display(&self) -> DisplayLines {
        let previous = match (&self.previous_operand, self.operation) {
            (Some(prev), Some(op)) => format!("{} {}", prev, op),
            (Some(prev), None) => prev.clone(),
            (None, Some(op)) => op.to_string(),
            (None, None) => String::new(),
        };

        DisplayLines {
            previous,
            current: self.current_operand.text().to_string(),
        }
    }
}

/// Rendered output window: `previousOperand operation` above `currentOperand`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayLines {
    pub previous: String,
    pub current: String,
}

impl fmt::Display for DisplayLines {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.previous)?;
        write!(f, "{}", self.current)
    }
}

fn check_operand_text(field: &str, text: &str) -> CalculatorResult<()> {
    let invalid = |reason: &str| {
        Err(CalculatorError::InvalidState(format!(
            "{} '{}' {}",
            field, text, reason
        )))
    };

    if text.matches('.').count() > 1 {
        return invalid("has more than one decimal point");
    }
    if text.starts_with("00") {
        return invalid("has a redundant leading zero");
    }

    let unsigned = text.strip_prefix('-').unwrap_or(text);

    // Partly deleted "Infinity" or "NaN"
    if !unsigned.is_empty() && NON_FINITE.iter().any(|word| word.starts_with(unsigned)) {
        return Ok(());
    }

    let digits = NON_FINITE
        .iter()
        .find_map(|word| unsigned.strip_prefix(word))
        .unwrap_or(unsigned);

    if digits.chars().all(|c| c.is_ascii_digit() || c == '.') {
        Ok(())
    } else {
        invalid("is not a number")
    }
}
