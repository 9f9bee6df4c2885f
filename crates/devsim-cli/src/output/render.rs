//! Human-readable rendering of envelopes.

use std::fmt::Write as _;

use devsim_dispatch::{DeviceTable, Envelope, InfoLine, InfoValue, Payload, Status};
use unicode_width::UnicodeWidthStr;

const COLUMN_GAP: &str = "  ";

/// Renders an envelope for a terminal. The result ends with a newline.
#[must_use]
pub fn render_human(envelope: &Envelope) -> String {
    match envelope.payload() {
        Payload::Message(message) => match envelope.status() {
            Status::Success => format!("{message}\n"),
            Status::Error => format!("error: {message}\n"),
        },
        Payload::Devices(devices) => render_table(&devices.table()),
        Payload::Info(info) => render_info(&info.lines()),
    }
}

fn render_table(table: &DeviceTable) -> String {
    let mut widths: Vec<usize> = table.columns.iter().map(|column| column.width()).collect();
    for row in &table.rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.width());
        }
    }

    let header: Vec<&str> = table.columns.to_vec();
    let rule: Vec<String> = widths.iter().map(|width| "-".repeat(*width)).collect();

    let mut output = String::new();
    push_row(&mut output, &header, &widths);
    push_row(&mut output, &rule, &widths);
    for row in &table.rows {
        push_row(&mut output, row, &widths);
    }
    output
}

fn push_row<S: AsRef<str>>(output: &mut String, cells: &[S], widths: &[usize]) {
    let mut line = String::new();
    for (index, (cell, width)) in cells.iter().zip(widths).enumerate() {
        let text = cell.as_ref();
        if index > 0 {
            line.push_str(COLUMN_GAP);
        }
        line.push_str(text);
        line.extend(std::iter::repeat_n(' ', width.saturating_sub(text.width())));
    }
    output.push_str(line.trim_end());
    output.push('\n');
}

fn render_info(lines: &[InfoLine]) -> String {
    let mut output = String::new();
    for line in lines {
        match &line.value {
            InfoValue::Scalar(value) => {
                let _ = writeln!(output, "{}: {value}", line.key);
            }
            InfoValue::Items(items) => {
                let _ = writeln!(output, "{}:", line.key);
                for item in items {
                    let _ = writeln!(output, "  - {item}");
                }
            }
        }
    }
    output
}
