//! Reading display formatting
//!
//! Formats latest readings and monthly history for terminal output.

use std::collections::BTreeMap;

use crate::models::{CounterType, Month};

/// Format the latest reading of one counter
pub fn format_latest(counter_type: CounterType, value: i64) -> String {
    format!("Latest {} reading: {}", counter_type, value)
}

/// Format the latest reading of every counter as a table
pub fn format_overview(latest: &[(CounterType, i64)]) -> String {
    let type_width = latest
        .iter()
        .map(|(counter_type, _)| counter_type.as_str().len())
        .max()
        .unwrap_or(7)
        .max(7);

    let mut output = String::new();
    output.push_str(&format!(
        "{:<type_width$}  {:>12}\n",
        "Counter",
        "Latest",
        type_width = type_width,
    ));
    output.push_str(&format!(
        "{:-<type_width$}  {:->12}\n",
        "",
        "",
        type_width = type_width,
    ));

    for (counter_type, value) in latest {
        output.push_str(&format!(
            "{:<type_width$}  {:>12}\n",
            counter_type.as_str(),
            value,
            type_width = type_width,
        ));
    }

    output
}

/// Format the monthly history of one counter
pub fn format_history(counter_type: CounterType, history: &BTreeMap<Month, i64>) -> String {
    if history.is_empty() {
        return format!("No {} readings recorded yet.", counter_type);
    }

    let mut output = format!("{} reading history:\n", counter_type);
    for (month, value) in history {
        output.push_str(&format!("  {:>2}. {:<10} {:>12}\n", month.number(), month.name(), value));
    }

    output
}
