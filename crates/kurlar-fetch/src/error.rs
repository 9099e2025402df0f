//! Client error types.

use quick_xml::DeError;
use thiserror::Error;

use crate::transport::TransportError;

/// Errors raised while building a [`RatesClient`](crate::RatesClient).
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The base URL is not a well-formed absolute HTTP(S) URL.
    #[error("Invalid base URL {url:?}: {reason}")]
    InvalidBaseUrl {
        /// The rejected URL.
        url: String,
        /// Why it was rejected.
        reason: String,
    },

    /// A retry budget of zero would never issue a request.
    #[error("Retry count must be at least 1")]
    ZeroRetryCount,

    /// The HTTP client could not be created.
    #[error("Failed to create HTTP client: {0}")]
    HttpClient(#[from] reqwest::Error),
}

/// Coarse classification of a [`FetchError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The network failed on every attempt.
    Transport,
    /// The response was not a rate sheet.
    Deserialization,
    /// The caller cancelled the operation.
    Cancelled,
    /// Anything else; never retried.
    Fatal,
}

/// Errors that can occur while fetching a rate sheet.
#[derive(Error, Debug)]
pub enum FetchError {
    /// Transient network failures exhausted the retry budget.
    #[error("Network failure after {attempts} attempt(s): {source}")]
    Transport {
        /// Number of requests issued.
        attempts: u32,
        /// The failure of the last attempt.
        #[source]
        source: TransportError,
    },

    /// The response body could not be deserialized.
    #[error("Failed to deserialize TCMB XML response")]
    Deserialize(#[source] DeError),

    /// The operation was cancelled by the caller.
    #[error("Operation cancelled")]
    Cancelled,

    /// An unclassified failure.
    #[error(transparent)]
    Fatal(Box<dyn std::error::Error + Send + Sync>),
}

impl FetchError {
    /// Returns the classification of this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Transport { .. } => ErrorKind::Transport,
            Self::Deserialize(_) => ErrorKind::Deserialization,
            Self::Cancelled => ErrorKind::Cancelled,
            Self::Fatal(_) => ErrorKind::Fatal,
        }
    }

    /// Returns true if the caller cancelled the operation.
    #[must_use]
    pub const fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }
}
