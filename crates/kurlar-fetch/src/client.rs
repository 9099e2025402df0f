//! Rate client with retrying fetch-and-parse pipeline.

use chrono::NaiveDate;
use kurlar_types::{Currency, RateSheet};
use reqwest::Url;
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use crate::decode::{DecodeError, RateSheetDecoder};
use crate::error::{ConfigError, FetchError};
use crate::transport::{HttpTransport, Transport, TransportError};
use crate::url::{BASE_URL, date_url, today_url};

/// Configuration for the rate client.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the rate service. Must be an absolute HTTP(S) URL.
    pub base_url: String,
    /// Maximum number of requests per call, the first one included.
    pub retry_count: u32,
    /// Fixed delay between attempts.
    pub retry_delay: Duration,
    /// Request timeout of the built-in HTTP transport.
    pub timeout: Duration,
    /// User agent of the built-in HTTP transport.
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: BASE_URL.to_string(),
            retry_count: 3,
            retry_delay: Duration::from_secs(1),
            timeout: Duration::from_secs(30),
            user_agent: format!("kurlar/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl ClientConfig {
    /// Sets the base URL.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Sets the maximum number of attempts per call.
    #[must_use]
    pub const fn with_retry_count(mut self, retry_count: u32) -> Self {
        self.retry_count = retry_count;
        self
    }

    /// Sets the delay between attempts.
    #[must_use]
    pub const fn with_retry_delay(mut self, retry_delay: Duration) -> Self {
        self.retry_delay = retry_delay;
        self
    }

    /// Sets the delay between attempts in whole seconds.
    #[must_use]
    pub const fn with_retry_delay_secs(self, secs: u64) -> Self {
        self.with_retry_delay(Duration::from_secs(secs))
    }

    /// Sets the request timeout of the built-in transport.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Checks the configuration, failing on the first invalid field.
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL is not an absolute HTTP(S) URL or the
    /// retry count is zero.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let invalid = |reason: &str| ConfigError::InvalidBaseUrl {
            url: self.base_url.clone(),
            reason: reason.to_string(),
        };

        let url = Url::parse(&self.base_url).map_err(|e| invalid(&e.to_string()))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(invalid("scheme must be http or https"));
        }
        if url.cannot_be_a_base() || url.host_str().is_none() {
            return Err(invalid("URL has no host"));
        }

        if self.retry_count == 0 {
            return Err(ConfigError::ZeroRetryCount);
        }

        Ok(())
    }
}

/// How a single attempt ended when it did not produce a sheet.
enum AttemptFailure {
    /// Worth another attempt.
    Transient(TransportError),
    /// Surfaced to the caller as-is.
    Final(FetchError),
}

impl From<TransportError> for AttemptFailure {
    fn from(e: TransportError) -> Self {
        if e.is_transient() {
            Self::Transient(e)
        } else {
            Self::Final(FetchError::Fatal(Box::new(e)))
        }
    }
}

impl From<DecodeError> for AttemptFailure {
    fn from(e: DecodeError) -> Self {
        match e {
            DecodeError::Xml(e) => Self::Final(FetchError::Deserialize(e)),
            DecodeError::Body(e) => e.into(),
            DecodeError::Cancelled => Self::Final(FetchError::Cancelled),
            DecodeError::Task(e) => Self::Final(FetchError::Fatal(Box::new(e))),
        }
    }
}

/// Client for the TCMB exchange rate service.
///
/// Cheap to clone; clones share the transport and configuration.
///
/// # Example
///
/// ```no_run
/// use kurlar_fetch::RatesClient;
/// use tokio_util::sync::CancellationToken;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = RatesClient::with_defaults()?;
/// let rates = client.today_rates(&CancellationToken::new()).await?;
/// for currency in &rates {
///     println!("{} {}", currency.code(), currency.forex_selling());
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct RatesClient {
    transport: Arc<dyn Transport>,
    decoder: RateSheetDecoder,
    config: Arc<ClientConfig>,
}

impl RatesClient {
    /// Creates a client with its own HTTP transport.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the HTTP client
    /// cannot be created.
    pub fn new(config: ClientConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let transport = HttpTransport::new(config.timeout, &config.user_agent)?;
        Self::with_transport(config, Arc::new(transport))
    }

    /// Creates a client with default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn with_defaults() -> Result<Self, ConfigError> {
        Self::new(ClientConfig::default())
    }

    /// Creates a client on top of a caller-supplied transport.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn with_transport(
        config: ClientConfig,
        transport: Arc<dyn Transport>,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            transport,
            decoder: RateSheetDecoder::new(),
            config: Arc::new(config),
        })
    }

    /// Returns the client configuration.
    #[must_use]
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Fetches today's rates.
    ///
    /// # Errors
    ///
    /// Returns an error if the sheet could not be fetched or parsed, or if
    /// `cancel` fired.
    pub async fn today_rates(
        &self,
        cancel: &CancellationToken,
    ) -> Result<Vec<Currency>, FetchError> {
        self.today_sheet(cancel)
            .await
            .map(RateSheet::into_currencies)
    }

    /// Fetches the archived rates of `date`.
    ///
    /// # Errors
    ///
    /// Returns an error if the sheet could not be fetched or parsed, or if
    /// `cancel` fired.
    pub async fn rates_by_date(
        &self,
        date: NaiveDate,
        cancel: &CancellationToken,
    ) -> Result<Vec<Currency>, FetchError> {
        self.sheet_by_date(date, cancel)
            .await
            .map(RateSheet::into_currencies)
    }

    /// Fetches today's full rate sheet, date stamps included.
    ///
    /// # Errors
    ///
    /// See [`today_rates`](Self::today_rates).
    pub async fn today_sheet(&self, cancel: &CancellationToken) -> Result<RateSheet, FetchError> {
        let url = today_url(&self.config.base_url);
        self.fetch_sheet(&url, cancel).await
    }

    /// Fetches the archived full rate sheet of `date`.
    ///
    /// # Errors
    ///
    /// See [`rates_by_date`](Self::rates_by_date).
    pub async fn sheet_by_date(
        &self,
        date: NaiveDate,
        cancel: &CancellationToken,
    ) -> Result<RateSheet, FetchError> {
        let url = date_url(&self.config.base_url, date);
        self.fetch_sheet(&url, cancel).await
    }

    /// Runs the retry loop for one URL.
    async fn fetch_sheet(
        &self,
        url: &str,
        cancel: &CancellationToken,
    ) -> Result<RateSheet, FetchError> {
        let max_attempts = self.config.retry_count;
        let mut attempts = 0;

        loop {
            if cancel.is_cancelled() {
                return Err(FetchError::Cancelled);
            }

            attempts += 1;
            debug!(url, attempt = attempts, max_attempts, "Requesting rate sheet");

            let failure = match self.attempt(url, cancel).await {
                Ok(sheet) => {
                    info!(
                        url,
                        attempts,
                        currencies = sheet.len(),
                        date = sheet.date(),
                        "Fetched rate sheet"
                    );
                    return Ok(sheet);
                }
                Err(AttemptFailure::Transient(e)) => e,
                Err(AttemptFailure::Final(e)) => {
                    debug!(url, attempt = attempts, error = %e, "Attempt failed, not retrying");
                    return Err(e);
                }
            };

            if attempts >= max_attempts {
                warn!(url, attempts, error = %failure, "Giving up after transient failures");
                return Err(FetchError::Transport {
                    attempts,
                    source: failure,
                });
            }

            warn!(
                url,
                attempt = attempts,
                error = %failure,
                delay_ms = self.config.retry_delay.as_millis() as u64,
                "Transient failure, retrying"
            );

            tokio::select! {
                biased;
                () = cancel.cancelled() => return Err(FetchError::Cancelled),
                () = tokio::time::sleep(self.config.retry_delay) => {}
            }
        }
    }

    /// Issues one request and decodes its body.
    async fn attempt(
        &self,
        url: &str,
        cancel: &CancellationToken,
    ) -> Result<RateSheet, AttemptFailure> {
        let body = tokio::select! {
            biased;
            () = cancel.cancelled() => return Err(AttemptFailure::Final(FetchError::Cancelled)),
            response = self.transport.get(url) => response?,
        };

        Ok(self.decoder.decode_stream(body, cancel).await?)
    }
}
