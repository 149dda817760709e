use calculator::{CalculatorState, Event};
use comfy_table::{presets::UTF8_FULL, Cell, CellAlignment, Row, Table};

/// One dispatched event and the state it produced
pub struct Step {
    pub event: Event,
    pub state: CalculatorState,
}

pub struct Formatter {}

impl Default for Formatter {
    fn default() -> Self {
        Self::new()
    }
}

impl Formatter {
    pub fn new() -> Self {
        Self {}
    }

    /// The output window: `previous op` above the current operand, right-aligned
    pub fn format_display(&self, state: &CalculatorState) -> String {
        let display = state.display();

        let mut table = Table::new();
        table.load_preset(UTF8_FULL);
        table.add_row(Row::from(vec![
            Cell::new(&display.previous).set_alignment(CellAlignment::Right)
        ]));
        table.add_row(Row::from(vec![
            Cell::new(&display.current).set_alignment(CellAlignment::Right)
        ]));

        format!("{}\n", table)
    }

    /// Every key press with the display it left behind
    pub fn format_trace(&self, steps: &[Step]) -> String {
        let mut table = Table::new();
        table.load_preset(UTF8_FULL);
        table.set_header(Row::from(vec![
            Cell::new("#").set_alignment(CellAlignment::Right),
            Cell::new("Event").set_alignment(CellAlignment::Left),
            Cell::new("Previous").set_alignment(CellAlignment::Right),
            Cell::new("Current").set_alignment(CellAlignment::Right),
        ]));

        for (i, step) in steps.iter().enumerate() {
            let display = step.state.display();
            table.add_row(Row::from(vec![
                Cell::new(i + 1).set_alignment(CellAlignment::Right),
                Cell::new(step.event.to_string()),
                Cell::new(&display.previous).set_alignment(CellAlignment::Right),
                Cell::new(&display.current).set_alignment(CellAlignment::Right),
            ]));
        }

        format!("{}\n", table)
    }

    pub fn format_json(&self, state: &CalculatorState) -> anyhow::Result<String> {
        let json = serde_json::json!({
            "state": state,
            "display": state.display(),
        });
        Ok(format!("{}\n", serde_json::to_string_pretty(&json)?))
    }

    /// Just the current operand, for piping to other tools
    pub fn format_raw(&self, state: &CalculatorState) -> String {
        format!("{}\n", state.current_operand.text())
    }
}
