//! Aligned plain-text table output.

use kurlar_types::Currency;
use std::io::Write;

use crate::{FormatError, Formatter, RateRow};

const HEADERS: [&str; 7] = [
    "CODE",
    "UNIT",
    "NAME",
    "FOREX BUY",
    "FOREX SELL",
    "NOTE BUY",
    "NOTE SELL",
];

/// Table formatter for terminal output.
///
/// Text columns are left-aligned, numeric columns right-aligned. Missing
/// rates are shown as `-` rather than `0`.
#[derive(Debug, Clone, Default)]
pub struct TableFormatter {
    /// Show the Turkish name instead of the English one.
    local_names: bool,
}

impl TableFormatter {
    /// Creates a new table formatter showing English names.
    #[must_use]
    pub const fn new() -> Self {
        Self { local_names: false }
    }

    /// Sets whether to show the Turkish currency names.
    #[must_use]
    pub const fn with_local_names(mut self, local_names: bool) -> Self {
        self.local_names = local_names;
        self
    }

    fn cells(&self, row: &RateRow<'_>) -> [String; 7] {
        let name = if self.local_names {
            row.local_name
        } else {
            row.display_name
        };
        let rate = |value: rust_decimal::Decimal| {
            if value.is_zero() {
                "-".to_string()
            } else {
                value.to_string()
            }
        };

        [
            row.code.to_string(),
            row.unit.to_string(),
            name.unwrap_or_default().to_string(),
            rate(row.forex_buying),
            rate(row.forex_selling),
            rate(row.banknote_buying),
            rate(row.banknote_selling),
        ]
    }
}

impl Formatter for TableFormatter {
    fn write_rates<W: Write + Send>(
        &self,
        rates: &[Currency],
        mut writer: W,
    ) -> Result<(), FormatError> {
        let rows: Vec<[String; 7]> = rates
            .iter()
            .map(|c| self.cells(&RateRow::from(c)))
            .collect();

        let mut widths = HEADERS.map(|h| h.chars().count());
        for cells in &rows {
            for (width, cell) in widths.iter_mut().zip(cells) {
                *width = (*width).max(cell.chars().count());
            }
        }

        let header: [String; 7] = HEADERS.map(str::to_string);
        for cells in std::iter::once(&header).chain(&rows) {
            let line: Vec<String> = cells
                .iter()
                .zip(widths)
                .enumerate()
                .map(|(i, (cell, width))| {
                    // Code and name columns read left to right.
                    if i == 0 || i == 2 {
                        format!("{cell:<width$}")
                    } else {
                        format!("{cell:>width$}")
                    }
                })
                .collect();
            writeln!(writer, "{}", line.join("  ").trim_end())?;
        }

        Ok(())
    }

    fn extension(&self) -> &str {
        "txt"
    }
}
