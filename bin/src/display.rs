//! Output writing for the kurlar CLI.

use crate::commands::OutputArgs;
use anyhow::{Context, Result};
use kurlar_lib::prelude::*;
use std::fs::File;
use std::io::{self, BufWriter, Write};

/// Picks the currencies named by `codes`, in the order given.
///
/// An empty list selects the whole sheet in published order. Unknown codes
/// are logged and skipped.
pub(crate) fn select_rates(sheet: &RateSheet, codes: &[String]) -> Vec<Currency> {
    if codes.is_empty() {
        return sheet.currencies().to_vec();
    }

    codes
        .iter()
        .filter_map(|code| {
            let found = sheet.get(code.trim());
            if found.is_none() {
                tracing::warn!(code = %code, date = sheet.date(), "currency not in sheet");
            }
            found.cloned()
        })
        .collect()
}

/// Write rates to `writer` in the requested format.
pub(crate) fn write_rates<W: Write + Send>(
    rates: &[Currency],
    args: &OutputArgs,
    writer: W,
) -> Result<()> {
    match args.format {
        OutputFormat::Table => TableFormatter::new()
            .with_local_names(args.local_names)
            .write_rates(rates, writer)?,
        OutputFormat::Csv => CsvFormatter::new().write_rates(rates, writer)?,
        OutputFormat::Json => JsonFormatter::new()
            .with_pretty(true)
            .write_rates(rates, writer)?,
        OutputFormat::Ndjson => JsonFormatter::ndjson().write_rates(rates, writer)?,
    }
    Ok(())
}

/// Write the selected rates of a sheet to the output file or stdout.
pub(crate) fn write_sheet(sheet: &RateSheet, args: &OutputArgs, quiet: bool) -> Result<()> {
    let rates = select_rates(sheet, &args.code);

    match &args.output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create {}", path.display()))?;
            let mut writer = BufWriter::new(file);
            write_rates(&rates, args, &mut writer)?;
            writer.flush()?;

            if !quiet {
                eprintln!(
                    "Wrote {} rates for {} to {}",
                    rates.len(),
                    sheet.date(),
                    path.display()
                );
            }
        }
        None => {
            let mut writer = BufWriter::new(io::stdout());
            write_rates(&rates, args, &mut writer)?;
            writer.flush()?;
        }
    }

    Ok(())
}
