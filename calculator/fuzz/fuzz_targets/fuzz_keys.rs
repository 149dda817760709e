#![no_main]

use calculator::{reduce, CalculatorState, Event};
use libfuzzer_sys::fuzz_target;

const KEYS: &[u8] = b"0123456789.+-*/=cd";

fuzz_target!(|data: &[u8]| {
    let mut state = CalculatorState::new();

    for byte in data {
        let key = KEYS[*byte as usize % KEYS.len()] as char;
        let event = Event::from_key(key).expect("keypad keys always map to events");
        state = reduce(state, event);

        let text = state.current_operand.text();
        assert!(text.matches('.').count() <= 1, "two decimal points in {:?}", text);
        assert!(!text.starts_with("00"), "redundant leading zero in {:?}", text);
        assert!(state.operation.is_none() || state.previous_operand.is_some());
        assert!(state.validate().is_ok(), "unrestorable state {:?}", state);
    }
});
