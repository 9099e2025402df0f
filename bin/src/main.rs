//! kurlar CLI - TCMB daily exchange rate fetcher.

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use kurlar_lib::prelude::*;
use std::process::ExitCode;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, fmt};

mod commands;
mod display;

use commands::{ClientArgs, OutputArgs};

#[derive(Parser)]
#[command(name = "kurlar")]
#[command(about = "Fetch daily exchange rates published by the Central Bank of the Republic of Turkey", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Quiet mode (errors only, no summary line)
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Emit logs as JSON lines on stderr
    #[arg(long, global = true)]
    log_json: bool,

    #[command(flatten)]
    client: ClientArgs,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch today's rate sheet
    Today {
        #[command(flatten)]
        output: OutputArgs,
    },

    /// Fetch the archived rate sheet of a given day
    Date {
        /// Publication date (YYYY-MM-DD)
        date: String,

        #[command(flatten)]
        output: OutputArgs,
    },
}

/// Installs the stderr log subscriber.
///
/// `RUST_LOG` wins over the `-v`/`-q` flags when set.
fn init_tracing(verbose: u8, quiet: bool, json: bool) {
    let level = if quiet {
        "error"
    } else {
        match verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!("warn,kurlar={level},kurlar_fetch={level}"))
    });
    let registry = tracing_subscriber::registry().with(filter);

    if json {
        registry
            .with(
                fmt::layer()
                    .json()
                    .with_current_span(false)
                    .with_writer(std::io::stderr),
            )
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
            .init();
    }
}

/// Cancels `cancel` on the first Ctrl-C.
fn cancel_on_interrupt(cancel: CancellationToken) {
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::warn!("interrupted, cancelling fetch");
            cancel.cancel();
        }
    });
}

async fn run(cli: Cli) -> Result<()> {
    // Show help if no command provided
    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    let client = cli.client.build()?;
    let cancel = CancellationToken::new();
    cancel_on_interrupt(cancel.clone());

    match command {
        Commands::Today { output } => {
            commands::today::today(&client, &output, &cancel, cli.quiet).await
        }
        Commands::Date { date, output } => {
            commands::date::by_date(&client, &date, &output, &cancel, cli.quiet).await
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.quiet, cli.log_json);

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            let cancelled = err
                .downcast_ref::<FetchError>()
                .is_some_and(FetchError::is_cancelled);
            eprintln!("Error: {err:#}");
            // 130 = terminated by SIGINT
            if cancelled {
                ExitCode::from(130)
            } else {
                ExitCode::FAILURE
            }
        }
    }
}
