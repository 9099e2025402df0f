//! HTTP transport abstraction.

use async_trait::async_trait;
use bytes::Bytes;
use futures::stream::{BoxStream, StreamExt, TryStreamExt};
use reqwest::Client;
use std::time::Duration;
use thiserror::Error;

/// A response body delivered chunk by chunk.
pub type BodyStream = BoxStream<'static, Result<Bytes, TransportError>>;

/// Errors raised while talking to the rate service.
#[derive(Error, Debug)]
pub enum TransportError {
    /// The HTTP client failed (connect, timeout, body read, ...).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with a non-success status.
    #[error("Server returned status {status}")]
    Status {
        /// HTTP status code.
        status: u16,
    },

    /// The connection failed or broke off.
    #[error("Connection error: {0}")]
    Connection(String),

    /// The request could not be built or sent as specified.
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

impl TransportError {
    /// Returns true if repeating the request may succeed.
    #[must_use]
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Http(e) => {
                // Builder and redirect-policy errors repeat identically.
                if e.is_builder() || e.is_redirect() {
                    return false;
                }
                e.is_timeout()
                    || e.is_connect()
                    || e.is_request()
                    || e.is_status()
                    || e.is_body()
                    || e.is_decode()
            }
            Self::Status { .. } | Self::Connection(_) => true,
            Self::InvalidRequest(_) => false,
        }
    }
}

/// HTTP GET capability with a streamed response body.
///
/// Implementations must be safe to share between concurrent calls.
#[async_trait]
pub trait Transport: Send + Sync + std::fmt::Debug {
    /// Issues a GET request and returns the body stream of a successful
    /// (2xx) response.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the status is not a success.
    async fn get(&self, url: &str) -> Result<BodyStream, TransportError>;
}

/// [`Transport`] backed by a pooled [`reqwest::Client`].
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    /// Creates a transport with its own HTTP client.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn new(timeout: Duration, user_agent: &str) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .pool_idle_timeout(Duration::from_secs(90))
            .tcp_nodelay(true)
            .timeout(timeout)
            // Connection timeout (separate from request timeout)
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .gzip(true)
            .build()?;
        Ok(Self { client })
    }

    /// Wraps an HTTP client owned by the host application.
    #[must_use]
    pub const fn from_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn get(&self, url: &str) -> Result<BodyStream, TransportError> {
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(TransportError::Status {
                status: status.as_u16(),
            });
        }

        Ok(response.bytes_stream().map_err(TransportError::from).boxed())
    }
}
