//! HTTP client and XML decoding for the kurlar TCMB exchange rate client.
//!
//! This crate provides the fetch-and-parse pipeline:
//!
//! - [`url::today_url`] / [`url::date_url`] - Construct TCMB sheet URLs
//! - [`Transport`] / [`HttpTransport`] - Streaming HTTP GET
//! - [`RateSheetDecoder`] - Streaming XML decoding
//! - [`RatesClient`] - Retrying client facade

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/kurlar-rs/kurlar/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod client;
mod decode;
mod error;
mod transport;
pub mod url;

pub use client::{ClientConfig, RatesClient};
pub use decode::{DecodeError, RateSheetDecoder};
pub use error::{ConfigError, ErrorKind, FetchError};
pub use tokio_util::sync::CancellationToken;
pub use transport::{BodyStream, HttpTransport, Transport, TransportError};
