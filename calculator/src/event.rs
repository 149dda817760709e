//! Input events the reducer understands
//!
//! Events serialize in the `{type, payload}` action shape used by
//! reducer-driven web front ends:
//!
//! ```text
//! {"type": "add-digit", "payload": {"digit": "7"}}
//! {"type": "choose-operation", "payload": {"symbol": "+"}}
//! {"type": "clear"}
//! {"type": "delete-digit"}
//! {"type": "evaluate"}
//! ```

use crate::{CalculatorError, CalculatorResult, Operation};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single digit key: `0`-`9` or the decimal point
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Digit(char);

impl Digit {
    pub const POINT: Digit = Digit('.');
    pub const ZERO: Digit = Digit('0');

    pub fn new(c: char) -> CalculatorResult<Self> {
        if c.is_ascii_digit() || c == '.' {
            Ok(Digit(c))
        } else {
            Err(CalculatorError::InvalidDigit(c.to_string()))
        }
    }

    pub fn as_char(&self) -> char {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0 == '0'
    }

    pub fn is_point(&self) -> bool {
        self.0 == '.'
    }
}

impl TryFrom<char> for Digit {
    type Error = CalculatorError;

    fn try_from(c: char) -> CalculatorResult<Self> {
        Digit::new(c)
    }
}

impl TryFrom<String> for Digit {
    type Error = CalculatorError;

    fn try_from(value: String) -> CalculatorResult<Self> {
        let mut chars = value.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Digit::new(c),
            _ => Err(CalculatorError::InvalidDigit(value)),
        }
    }
}

impl From<Digit> for String {
    fn from(digit: Digit) -> Self {
        digit.0.to_string()
    }
}

impl fmt::Display for Digit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// All events that can change the calculator state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "kebab-case")]
pub enum Event {
    /// Append a digit or decimal point to the current operand
    AddDigit { digit: Digit },
    /// Commit the current operand and pick the next operator
    #[serde(alias = "choose")]
    ChooseOperation { symbol: Operation },
    /// Reset everything
    Clear,
    /// Drop the last character of the current operand
    DeleteDigit,
    /// Compute `previous <op> current`
    Evaluate,
}

impl Event {
    pub fn digit(c: char) -> CalculatorResult<Self> {
        Ok(Event::AddDigit {
            digit: Digit::new(c)?,
        })
    }

    pub fn operation(symbol: Operation) -> Self {
        Event::ChooseOperation { symbol }
    }

    /// Map a keypad key to its event
    ///
    /// | key               | event           |
    /// |-------------------|-----------------|
    /// | `0`-`9`, `.`      | AddDigit        |
    /// | `+ - * /`, `x`    | ChooseOperation |
    /// | `=`               | Evaluate        |
    /// | `c`, `C`          | Clear           |
    /// | `d`, `D`, `<`     | DeleteDigit     |
    pub fn from_key(key: char) -> CalculatorResult<Self> {
        match key {
            '0'..='9' | '.' => Event::digit(key),
            'x' | 'X' => Ok(Event::operation(Operation::Multiply)),
            '=' => Ok(Event::Evaluate),
            'c' | 'C' => Ok(Event::Clear),
            'd' | 'D' | '<' => Ok(Event::DeleteDigit),
            other => Operation::from_symbol(other)
                .map(Event::operation)
                .ok_or(CalculatorError::UnknownKey(other)),
        }
    }

    /// Map every non-whitespace character of `keys` to an event
    pub fn parse_keys(keys: &str) -> CalculatorResult<Vec<Self>> {
        keys.chars()
            .filter(|c| !c.is_whitespace())
            .map(Event::from_key)
            .collect()
    }

    /// Kebab-case name matching the serialized `type` tag
    pub fn kind(&self) -> &'static str {
        match self {
            Event::AddDigit { .. } => "add-digit",
            Event::ChooseOperation { .. } => "choose-operation",
            Event::Clear => "clear",
            Event::DeleteDigit => "delete-digit",
            Event::Evaluate => "evaluate",
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Event::AddDigit { digit } => write!(f, "{}({})", self.kind(), digit),
            Event::ChooseOperation { symbol } => write!(f, "{}({})", self.kind(), symbol),
            _ => write!(f, "{}", self.kind()),
        }
    }
}
