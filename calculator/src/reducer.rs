//! The state reducer
//!
//! `reduce` is total: every event applied to every state yields a valid
//! state. Presses that make no sense in the current state (a second decimal
//! point, `=` with nothing pending, an operator before any digit) return the
//! state unchanged instead of failing.

use crate::evaluator::{format_number, try_evaluate};
use crate::{CalculatorState, Digit, Event, Operand, Operation};
use tracing::debug;

/// Compute the state that follows `state` after `event`
///
/// # Examples
/// ```
/// use calculator::{reduce, CalculatorState, Event, Operation};
///
/// let state = CalculatorState::with_operands("10", Operation::Divide, "4");
/// let state = reduce(state, Event::Evaluate);
/// assert_eq!(state.current_operand.text(), "2.5");
/// assert_eq!(state.previous_operand, None);
/// ```
pub fn reduce(state: CalculatorState, event: Event) -> CalculatorState {
    let next = match event {
        Event::AddDigit { digit } => add_digit(state, digit),
        Event::ChooseOperation { symbol } => choose_operation(state, symbol),
        Event::Clear => Ok(CalculatorState::new()),
        Event::DeleteDigit => delete_digit(state),
        Event::Evaluate => evaluate(state),
    };

    match next {
        Ok(next) => {
            debug!(%event, display = ?next.display(), "applied");
            next
        }
        Err(Ignored { state, reason }) => {
            debug!(%event, reason, "ignored");
            state
        }
    }
}

/// Apply `events` in order, starting from `state`
pub fn replay<I>(state: CalculatorState, events: I) -> CalculatorState
where
    I: IntoIterator<Item = Event>,
{
    events.into_iter().fold(state, reduce)
}

/// An event that leaves the state as it was
struct Ignored {
    state: CalculatorState,
    reason: &'static str,
}

type Transition = Result<CalculatorState, Ignored>;

fn ignore(state: CalculatorState, reason: &'static str) -> Transition {
    Err(Ignored { state, reason })
}

fn add_digit(state: CalculatorState, digit: Digit) -> Transition {
    if digit.is_zero() && state.current_operand.text() == "0" {
        return ignore(state, "operand is already a single zero");
    }
    if digit.is_point() && state.current_operand.contains_decimal_point() {
        return ignore(state, "operand already has a decimal point");
    }

    Ok(CalculatorState {
        current_operand: state.current_operand.pushed(digit.as_char()),
        ..state
    })
}

fn choose_operation(state: CalculatorState, symbol: Operation) -> Transition {
    if state.previous_operand.is_some() {
        return match try_evaluate(&state) {
            Ok(result) => Ok(CalculatorState {
                current_operand: Operand::Absent,
                previous_operand: Some(format_number(result)),
                operation: Some(symbol),
            }),
            Err(_) => ignore(state, "no operand to chain with"),
        };
    }

    match state.current_operand {
        Operand::Value(current) => Ok(CalculatorState {
            previous_operand: Some(current),
            current_operand: Operand::Empty,
            operation: Some(symbol),
        }),
        Operand::Empty => ignore(state, "operand is empty"),
        Operand::Absent => ignore(state, "nothing entered yet"),
    }
}

fn delete_digit(state: CalculatorState) -> Transition {
    match state.current_operand {
        Operand::Value(_) => Ok(CalculatorState {
            current_operand: state.current_operand.popped(),
            ..state
        }),
        Operand::Empty | Operand::Absent => ignore(state, "nothing to delete"),
    }
}

fn evaluate(state: CalculatorState) -> Transition {
    match try_evaluate(&state) {
        Ok(result) => Ok(CalculatorState {
            current_operand: Operand::Value(format_number(result)),
            previous_operand: None,
            operation: None,
        }),
        Err(_) => ignore(state, "evaluation is incomplete"),
    }
}
