//! Terminal view: draws the device table as aligned plain text.

use std::io::Write;
use std::sync::Mutex;

use salute_console_app::ports::TableView;
use salute_console_domain::table::{Cell, DeviceTable};

const ROW_LABEL: &str = "#";
const SEPARATOR: &str = "  ";

/// A [`TableView`] that writes each mounted table to a writer.
pub struct TerminalView<W> {
    out: Mutex<W>,
}

impl TerminalView<std::io::Stdout> {
    #[must_use]
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<W: Write> TerminalView<W> {
    pub fn new(out: W) -> Self {
        Self {
            out: Mutex::new(out),
        }
    }

    #[cfg(test)]
    fn into_inner(self) -> W {
        self.out
            .into_inner()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

impl<W: Write> TableView for TerminalView<W> {
    fn mount(&self, table: DeviceTable) -> std::io::Result<()> {
        let text = format_table(&table);
        let mut out = self
            .out
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        out.write_all(text.as_bytes())?;
        out.flush()
    }
}

/// Bridge-supplied text with control characters spelled out, so a record
/// always stays on one line.
fn printable(text: &str) -> String {
    text.chars().fold(String::with_capacity(text.len()), |mut out, c| {
        if c.is_control() {
            out.extend(c.escape_default());
        } else {
            out.push(c);
        }
        out
    })
}

fn cell_text(cell: &Cell) -> String {
    let checkbox = |checked: bool| if checked { "[x]" } else { "[ ]" };
    match cell {
        Cell::Empty => String::new(),
        Cell::Text(text) => printable(text),
        Cell::EnabledToggle { checked, .. } => checkbox(*checked).to_string(),
        Cell::FeatureToggle {
            feature, checked, ..
        } => format!("{} {}", checkbox(*checked), printable(feature.as_str())),
    }
}

/// Render `table` as text: a header line, a rule, then one line per row.
///
/// The leading `#` column carries the row index used by `enable`.
#[must_use]
pub fn format_table(table: &DeviceTable) -> String {
    let mut lines: Vec<Vec<String>> = Vec::with_capacity(table.len() + 1);
    lines.push(
        std::iter::once(ROW_LABEL.to_string())
            .chain(table.header().iter().map(|column| column.label().to_string()))
            .collect(),
    );
    for row in table.rows() {
        lines.push(
            std::iter::once(row.index.to_string())
                .chain(row.cells().iter().map(cell_text))
                .collect(),
        );
    }

    let mut widths = vec![0; lines[0].len()];
    for line in &lines {
        for (width, text) in widths.iter_mut().zip(line) {
            *width = (*width).max(text.chars().count());
        }
    }

    let mut out = String::new();
    for (i, line) in lines.iter().enumerate() {
        push_line(&mut out, line, &widths);
        if i == 0 {
            let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
            push_line(&mut out, &rule, &widths);
        }
    }
    out
}

fn push_line(out: &mut String, line: &[String], widths: &[usize]) {
    let mut text = String::new();
    for (i, (cell, width)) in line.iter().zip(widths).enumerate() {
        if i > 0 {
            text.push_str(SEPARATOR);
        }
        text.push_str(cell);
        let pad = width.saturating_sub(cell.chars().count());
        text.extend(std::iter::repeat_n(' ', pad));
    }
    out.push_str(text.trim_end());
    out.push('\n');
}
