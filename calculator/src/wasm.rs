use crate::{Calculator, CalculatorState, Event};
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub struct WasmCalculator {
    calculator: Calculator,
}

#[wasm_bindgen]
impl WasmCalculator {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        console_error_panic_hook::set_once();

        WasmCalculator {
            calculator: Calculator::new(),
        }
    }

    /// Dispatch a `{type, payload}` event and return the resulting state
    #[wasm_bindgen(js_name = dispatch)]
    pub fn dispatch(&mut self, event_json: &str) -> String {
        let event: Event = match serde_json::from_str(event_json) {
            Ok(event) => event,
            Err(e) => return error_response(&format!("Invalid event JSON: {}", e)),
        };

        self.calculator.dispatch(event);
        self.state()
    }

    #[wasm_bindgen(js_name = pressKey)]
    pub fn press_key(&mut self, key: &str) -> String {
        let mut chars = key.chars();
        let key = match (chars.next(), chars.next()) {
            (Some(c), None) => c,
            _ => return error_response(&format!("Expected a single key, got '{}'", key)),
        };

        match self.calculator.press(key) {
            Ok(_) => self.state(),
            Err(e) => error_response(&e.to_string()),
        }
    }

    /// Replace the session state with a previously returned one
    #[wasm_bindgen(js_name = restore)]
    pub fn restore(&mut self, state_json: &str) -> String {
        match serde_json::from_str::<CalculatorState>(state_json) {
            Ok(state) => {
                self.calculator = Calculator::from_state(state);
                self.state()
            }
            Err(e) => error_response(&format!("Invalid state JSON: {}", e)),
        }
    }

    #[wasm_bindgen(js_name = state)]
    pub fn state(&self) -> String {
        serde_json::to_string(&serde_json::json!({
            "success": true,
            "state": self.calculator.state(),
            "display": self.calculator.display(),
            "error": serde_json::Value::Null
        }))
        .unwrap_or_else(|_| {
            r#"{"success":false,"state":null,"display":null,"error":"Failed to serialize state"}"#
                .to_string()
        })
    }

    #[wasm_bindgen(js_name = display)]
    pub fn display(&self) -> String {
        self.calculator.display().to_string()
    }

    #[wasm_bindgen(js_name = clear)]
    pub fn clear(&mut self) -> String {
        self.calculator.clear();
        self.state()
    }
}

impl Default for WasmCalculator {
    fn default() -> Self {
        Self::new()
    }
}

fn error_response(message: &str) -> String {
    serde_json::to_string(&serde_json::json!({
        "success": false,
        "state": null,
        "display": null,
        "error": message
    }))
    .unwrap_or_else(|_| {
        r#"{"success":false,"state":null,"display":null,"error":"Unknown error"}"#.to_string()
    })
}
