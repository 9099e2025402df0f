//! Rust library for fetching TCMB daily exchange rate sheets.
//!
//! This is a facade crate that re-exports functionality from the kurlar
//! workspace crates for convenient access.
//!
//! # Quick Start
//!
//! ```ignore
//! use kurlar_lib::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = RatesClient::with_defaults()?;
//!     let cancel = CancellationToken::new();
//!
//!     for currency in client.today_rates(&cancel).await? {
//!         println!("{} {}", currency.code(), currency.forex_selling());
//!     }
//!
//!     Ok(())
//! }
//! ```

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/kurlar-rs/kurlar/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Re-export core types
pub use kurlar_types::*;

// Re-export fetch functionality
#[cfg(feature = "fetch")]
pub use kurlar_fetch::{
    BodyStream, CancellationToken, ClientConfig, ConfigError, DecodeError, ErrorKind,
    FetchError, HttpTransport, RateSheetDecoder, RatesClient, Transport, TransportError, url,
};

// Re-export formatters
#[cfg(feature = "format")]
pub use kurlar_format::{
    CsvFormatter, FormatError, Formatter, JsonFormatter, JsonStyle, OutputFormat, RateRow,
    TableFormatter,
};

/// Prelude module for convenient imports.
///
/// ```
/// use kurlar_lib::prelude::*;
/// ```
pub mod prelude {
    pub use kurlar_types::{Currency, RateKind, RateSheet, parse_rate};

    #[cfg(feature = "fetch")]
    pub use kurlar_fetch::{
        CancellationToken, ClientConfig, ErrorKind, FetchError, RatesClient,
    };

    #[cfg(feature = "format")]
    pub use kurlar_format::{
        CsvFormatter, Formatter, JsonFormatter, OutputFormat, TableFormatter,
    };
}
