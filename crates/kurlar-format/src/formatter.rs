//! Output format abstraction.

use kurlar_types::Currency;
use rust_decimal::Decimal;
use serde::Serialize;
use std::io::Write;
use thiserror::Error;

/// Output format identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OutputFormat {
    /// Aligned text table.
    #[default]
    Table,
    /// CSV format.
    Csv,
    /// JSON array format.
    Json,
    /// Newline-delimited JSON format.
    Ndjson,
}

impl OutputFormat {
    /// Returns the file extension for this format.
    #[must_use]
    pub const fn extension(&self) -> &'static str {
        match self {
            Self::Table => "txt",
            Self::Csv => "csv",
            Self::Json => "json",
            Self::Ndjson => "ndjson",
        }
    }

    /// Returns all available formats.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Table, Self::Csv, Self::Json, Self::Ndjson]
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Table => "table",
            other => other.extension(),
        };
        f.write_str(name)
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "table" | "txt" | "text" => Ok(Self::Table),
            "csv" => Ok(Self::Csv),
            "json" => Ok(Self::Json),
            "ndjson" | "jsonl" => Ok(Self::Ndjson),
            _ => Err(FormatError::UnknownFormat(s.to_string())),
        }
    }
}

/// Errors that can occur during formatting.
#[derive(Error, Debug)]
pub enum FormatError {
    /// Unknown output format.
    #[error("Unknown format: {0}")]
    UnknownFormat(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Flat, serializable view of a [`Currency`] with parsed rates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RateRow<'a> {
    /// Currency code.
    pub code: &'a str,
    /// Quotation unit.
    pub unit: u32,
    /// Turkish name.
    pub local_name: Option<&'a str>,
    /// English name.
    pub display_name: Option<&'a str>,
    /// Forex buying rate.
    pub forex_buying: Decimal,
    /// Forex selling rate.
    pub forex_selling: Decimal,
    /// Banknote buying rate.
    pub banknote_buying: Decimal,
    /// Banknote selling rate.
    pub banknote_selling: Decimal,
}

impl<'a> From<&'a Currency> for RateRow<'a> {
    fn from(c: &'a Currency) -> Self {
        Self {
            code: c.code(),
            unit: c.unit(),
            local_name: c.local_name(),
            display_name: c.display_name(),
            forex_buying: c.forex_buying(),
            forex_selling: c.forex_selling(),
            banknote_buying: c.banknote_buying(),
            banknote_selling: c.banknote_selling(),
        }
    }
}

/// Trait for output formatters.
pub trait Formatter: Send + Sync {
    /// Writes currency rates to the output.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails.
    fn write_rates<W: Write + Send>(
        &self,
        rates: &[Currency],
        writer: W,
    ) -> Result<(), FormatError>;

    /// Returns the file extension for this format.
    fn extension(&self) -> &str;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_format_from_str() {
        assert_eq!("CSV".parse::<OutputFormat>().unwrap(), OutputFormat::Csv);
        assert_eq!("jsonl".parse::<OutputFormat>().unwrap(), OutputFormat::Ndjson);
        assert_eq!("table".parse::<OutputFormat>().unwrap(), OutputFormat::Table);
        assert!(matches!(
            "parquet".parse::<OutputFormat>(),
            Err(FormatError::UnknownFormat(_))
        ));
    }

    #[test]
    fn test_row_from_currency() {
        let usd = Currency::new("USD", 1)
            .with_rate(kurlar_types::RateKind::ForexBuying, Some("27.1234"));
        let row = RateRow::from(&usd);
        assert_eq!(row.code, "USD");
        assert_eq!(row.forex_buying, Decimal::new(271_234, 4));
        assert_eq!(row.banknote_selling, Decimal::ZERO);
    }
}
