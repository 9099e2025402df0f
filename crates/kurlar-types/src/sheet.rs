//! Dated rate sheet (the document root).

use chrono::NaiveDate;
use serde::Deserialize;

use crate::Currency;

/// A rate sheet as published by TCMB for one business day.
///
/// The document root carries the publication date twice: in Turkish form
/// (`Tarih`, `DD.MM.YYYY`) and in machine form (`Date`, `MM/DD/YYYY`).
/// Either may be missing, in which case it reads as an empty string.
/// Currencies keep document order.
///
/// Deserializing this type does not look at the root element name; the
/// `Tarih_Date` root is checked by the decoder.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RateSheet {
    #[serde(rename = "@Tarih", default)]
    date: String,
    #[serde(rename = "@Date", default)]
    date_code: String,
    #[serde(rename = "Currency", default)]
    currencies: Vec<Currency>,
}

impl RateSheet {
    /// Creates a rate sheet from its parts.
    #[must_use]
    pub fn new(
        date: impl Into<String>,
        date_code: impl Into<String>,
        currencies: Vec<Currency>,
    ) -> Self {
        Self {
            date: date.into(),
            date_code: date_code.into(),
            currencies,
        }
    }

    /// Returns the localized date stamp (e.g. `01.01.2024`).
    #[must_use]
    pub fn date(&self) -> &str {
        &self.date
    }

    /// Returns the machine-form date stamp (e.g. `01/31/2024`).
    #[must_use]
    pub fn date_code(&self) -> &str {
        &self.date_code
    }

    /// Parses the publication date.
    ///
    /// Tries the machine form first and falls back to the localized form.
    #[must_use]
    pub fn published_on(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(self.date_code.trim(), "%m/%d/%Y")
            .or_else(|_| NaiveDate::parse_from_str(self.date.trim(), "%d.%m.%Y"))
            .ok()
    }

    /// Returns the currencies in document order.
    #[must_use]
    pub fn currencies(&self) -> &[Currency] {
        &self.currencies
    }

    /// Consumes the sheet, returning its currencies.
    #[must_use]
    pub fn into_currencies(self) -> Vec<Currency> {
        self.currencies
    }

    /// Looks up a currency by code, ignoring ASCII case.
    #[must_use]
    pub fn get(&self, code: &str) -> Option<&Currency> {
        self.currencies
            .iter()
            .find(|c| c.code().eq_ignore_ascii_case(code))
    }

    /// Returns true if the sheet lists no currencies.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.currencies.is_empty()
    }

    /// Returns the number of currencies on the sheet.
    #[must_use]
    pub fn len(&self) -> usize {
        self.currencies.len()
    }
}
