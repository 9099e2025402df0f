//! Today command implementation.

use crate::commands::OutputArgs;
use crate::display::write_sheet;
use anyhow::{Context, Result};
use kurlar_lib::prelude::*;

/// Fetch and print today's rate sheet.
pub(crate) async fn today(
    client: &RatesClient,
    args: &OutputArgs,
    cancel: &CancellationToken,
    quiet: bool,
) -> Result<()> {
    let sheet = client
        .today_sheet(cancel)
        .await
        .context("Failed to fetch today's rates")?;

    write_sheet(&sheet, args, quiet)
}
