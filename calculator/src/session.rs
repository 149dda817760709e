use crate::{reduce, CalculatorResult, CalculatorState, DisplayLines, Event};

/// A calculator session.
///
/// Owns one [`CalculatorState`] and replaces it with the reducer's output on
/// every dispatch. Front ends that already keep the state themselves can call
/// [`crate::reduce`] directly instead.
#[derive(Debug, Clone, Default)]
pub struct Calculator {
    state: CalculatorState,
}

impl Calculator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resume a session from a previously stored state
    pub fn from_state(state: CalculatorState) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &CalculatorState {
        &self.state
    }

    pub fn into_state(self) -> CalculatorState {
        self.state
    }

    pub fn display(&self) -> DisplayLines {
        self.state.display()
    }

    pub fn dispatch(&mut self, event: Event) -> &CalculatorState {
        self.state = reduce(std::mem::take(&mut self.state), event);
        &self.state
    }

    pub fn dispatch_all<I>(&mut self, events: I) -> &CalculatorState
    where
        I: IntoIterator<Item = Event>,
    {
        for event in events {
            self.dispatch(event);
        }
        &self.state
    }

    /// Dispatch the event bound to a keypad key
    pub fn press(&mut self, key: char) -> CalculatorResult<&CalculatorState> {
        let event = Event::from_key(key)?;
        Ok(self.dispatch(event))
    }

    /// Dispatch every key in `keys`, skipping whitespace
    ///
    /// Keys are validated up front, so an unknown key leaves the session
    /// untouched.
    pub fn press_keys(&mut self, keys: &str) -> CalculatorResult<&CalculatorState> {
        let events = Event::parse_keys(keys)?;
        Ok(self.dispatch_all(events))
    }

    pub fn clear(&mut self) {
        self.dispatch(Event::Clear);
    }
}
