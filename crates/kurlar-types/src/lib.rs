//! Core types for the kurlar TCMB exchange rate client.
//!
//! This crate provides the data model shared by the other kurlar crates:
//!
//! - [`Currency`] - One currency's raw rate text and its decimal views
//! - [`RateSheet`] - A dated sheet of currencies as published by the bank
//! - [`parse_rate`] - Locale-independent rate text to decimal conversion

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/kurlar-rs/kurlar/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod currency;
mod rate;
mod sheet;

pub use currency::{Currency, RateKind};
pub use rate::parse_rate;
pub use sheet::RateSheet;
