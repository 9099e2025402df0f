//! Date command implementation.
//!
//! The bank publishes no sheet on weekends and public holidays; those days
//! come back as a transport failure after the configured attempts.

use crate::commands::OutputArgs;
use crate::display::write_sheet;
use anyhow::{Context, Result};
use chrono::NaiveDate;
use kurlar_lib::prelude::*;

/// Parses a `YYYY-MM-DD` command-line date.
pub(crate) fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").with_context(|| format!("Invalid date: {s}"))
}

/// Fetch and print the archived rate sheet of `date`.
pub(crate) async fn by_date(
    client: &RatesClient,
    date: &str,
    args: &OutputArgs,
    cancel: &CancellationToken,
    quiet: bool,
) -> Result<()> {
    let date = parse_date(date)?;

    let sheet = client
        .sheet_by_date(date, cancel)
        .await
        .with_context(|| format!("Failed to fetch rates for {date}"))?;

    write_sheet(&sheet, args, quiet)
}
