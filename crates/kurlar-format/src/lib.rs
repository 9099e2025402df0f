//! Output formatters for the kurlar TCMB exchange rate client.
//!
//! This crate provides formatters for writing currency rate lists:
//!
//! - [`CsvFormatter`] - CSV / TSV format
//! - [`JsonFormatter`] - JSON array or NDJSON format
//! - [`TableFormatter`] - Aligned plain-text table

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/kurlar-rs/kurlar/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod csv;
mod formatter;
mod json;
mod table;

pub use crate::csv::CsvFormatter;
pub use formatter::{FormatError, Formatter, OutputFormat, RateRow};
pub use json::{JsonFormatter, JsonStyle};
pub use table::TableFormatter;
