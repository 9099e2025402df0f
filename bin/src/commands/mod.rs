//! CLI command implementations.

use anyhow::{Context, Result};
use clap::Args;
use kurlar_lib::prelude::*;
use kurlar_lib::url::BASE_URL;
use std::path::PathBuf;
use std::time::Duration;

pub(crate) mod date;
pub(crate) mod today;

/// Client settings shared by every command.
#[derive(Args, Debug)]
pub(crate) struct ClientArgs {
    /// Base URL of the rate sheet archive
    #[arg(long, global = true, env = "KURLAR_BASE_URL", default_value = BASE_URL)]
    pub(crate) base_url: String,

    /// Total number of attempts per fetch
    #[arg(long, global = true, env = "KURLAR_RETRIES", default_value_t = 3)]
    pub(crate) retries: u32,

    /// Seconds to wait between attempts
    #[arg(long, global = true, env = "KURLAR_RETRY_DELAY", default_value_t = 1)]
    pub(crate) retry_delay: u64,

    /// Per-request timeout in seconds
    #[arg(long, global = true, default_value_t = 30)]
    pub(crate) timeout: u64,
}

impl ClientArgs {
    /// Builds a validated client from the flags.
    pub(crate) fn build(&self) -> Result<RatesClient> {
        let config = ClientConfig::default()
            .with_base_url(&self.base_url)
            .with_retry_count(self.retries)
            .with_retry_delay_secs(self.retry_delay)
            .with_timeout(Duration::from_secs(self.timeout));

        RatesClient::new(config).context("Invalid client configuration")
    }
}

/// Selection and output settings shared by the fetch commands.
#[derive(Args, Debug)]
pub(crate) struct OutputArgs {
    /// Only show these currency codes (comma-separated or repeated)
    #[arg(short, long, value_delimiter = ',')]
    pub(crate) code: Vec<String>,

    /// Output format (table, csv, json, ndjson)
    #[arg(short, long, default_value = "table")]
    pub(crate) format: OutputFormat,

    /// Output file path. Defaults to stdout
    #[arg(short, long)]
    pub(crate) output: Option<PathBuf>,

    /// Show Turkish currency names in the table format
    #[arg(long)]
    pub(crate) local_names: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_args_build() {
        let args = ClientArgs {
            base_url: "http://127.0.0.1:8080/kurlar".to_string(),
            retries: 2,
            retry_delay: 0,
            timeout: 5,
        };
        let client = args.build().unwrap();
        assert_eq!(client.config().retry_count, 2);
        assert_eq!(client.config().retry_delay, Duration::ZERO);
    }

    #[test]
    fn test_client_args_zero_retries() {
        let args = ClientArgs {
            base_url: BASE_URL.to_string(),
            retries: 0,
            retry_delay: 1,
            timeout: 30,
        };
        assert!(args.build().is_err());
    }
}
