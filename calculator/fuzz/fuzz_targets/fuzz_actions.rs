#![no_main]

use calculator::{replay, CalculatorState, Event};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        if let Ok(events) = serde_json::from_str::<Vec<Event>>(s) {
            let _ = replay(CalculatorState::new(), events);
        }
    }
});
