use calculator::*;

/// Feed keys one at a time, the way a keypad front end would
fn press(state: CalculatorState, keys: &str) -> CalculatorState {
    let mut state = state;
    for key in keys.chars() {
        state = reduce(state, Event::from_key(key).unwrap());
    }
    state
}

#[test]
fn test_end_to_end_chained_expression() {
    let state = press(CalculatorState::new(), "12+3-4=");

    println!("Display: {}", state.display());

    assert_eq!(state.current_operand.text(), "11");
    assert_eq!(state.previous_operand, None);
    assert_eq!(state.operation, None);
}

#[test]
fn test_end_to_end_display_while_typing() {
    let state = press(CalculatorState::new(), "12+");
    assert_eq!(state.display().previous, "12 +");
    assert_eq!(state.display().current, "");

    let state = press(state, "3*");
    assert_eq!(state.display().previous, "15 *");
    assert_eq!(state.display().current, "");

    let state = press(state, "2");
    assert_eq!(state.display().current, "2");

    let state = press(state, "=");
    assert_eq!(state.display().previous, "");
    assert_eq!(state.display().current, "30");
}

#[test]
fn test_end_to_end_json_actions() {
    let actions = r#"[
        {"type": "add-digit", "payload": {"digit": "1"}},
        {"type": "add-digit", "payload": {"digit": "0"}},
        {"type": "choose", "payload": {"symbol": "/"}},
        {"type": "add-digit", "payload": {"digit": "4"}},
        {"type": "evaluate"}
    ]"#;

    let events: Vec<Event> = serde_json::from_str(actions).unwrap();
    let state = replay(CalculatorState::new(), events);

    assert_eq!(
        serde_json::to_value(&state).unwrap(),
        serde_json::json!({"currentOperand": "2.5", "previousOperand": null, "operation": null})
    );
}

#[test]
fn test_end_to_end_state_round_trips_through_json() {
    let state = press(CalculatorState::new(), "7-");
    let json = serde_json::to_string(&state).unwrap();
    let restored: CalculatorState = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, state);

    let state = press(restored, "9=");
    assert_eq!(state.current_operand.text(), "-2");
}

#[test]
fn test_end_to_end_stray_keys_never_fail() {
    // Operators, deletes and equals with nothing to act on
    let state = press(CalculatorState::new(), "+=d*/-=dd");
    assert_eq!(state, CalculatorState::new());

    let state = press(state, "5dd.");
    assert_eq!(state.current_operand.text(), ".");
}
