//! # Calculator Engine
//!
//! The pure core of a keypad calculator: a reducer that turns key events into
//! display state, and the single-operation evaluator it relies on.
//!
//! ## Quick Start
//!
//! ```rust
//! use calculator::{reduce, CalculatorState, Event};
//!
//! let mut state = CalculatorState::new();
//! for event in Event::parse_keys("12+3-4=").unwrap() {
//!     state = reduce(state, event);
//! }
//!
//! assert_eq!(state.current_operand.text(), "11");
//! ```
//!
//! ## Core Concepts
//!
//! ### State
//! A [`CalculatorState`] holds the operand being typed, the committed
//! previous operand and the pending operator. Front ends own the value and
//! replace it with whatever the reducer returns.
//!
//! ### Events
//! Digits, operators, clear, delete and evaluate. See [`Event`].
//!
//! ### Evaluation
//! Strictly left to right: choosing a second operator first resolves the
//! pending one. `2 + 3 * 4` is `20`, not `14`.

pub mod error;
pub mod evaluator;
pub mod event;
pub mod operation;
pub mod reducer;
pub mod session;
pub mod state;

#[cfg(target_arch = "wasm32")]
pub mod wasm;

pub use error::{CalculatorError, OperandSide};
pub use evaluator::{evaluate, format_number, parse_operand, try_evaluate};
pub use event::{Digit, Event};
pub use operation::Operation;
pub use reducer::{reduce, replay};
pub use session::Calculator;
pub use state::{CalculatorState, DisplayLines, Operand};

/// Result type for calculator operations
pub type CalculatorResult<T> = Result<T, CalculatorError>;
