//! Streaming XML decoding of rate sheets.

use futures::StreamExt;
use kurlar_types::RateSheet;
use quick_xml::DeError;
use serde::Deserialize;
use std::io;
use std::sync::{Arc, Mutex};
use thiserror::Error;
use tokio::task::JoinError;
use tokio_util::io::{StreamReader, SyncIoBridge};
use tokio_util::sync::CancellationToken;

use crate::transport::{BodyStream, TransportError};

/// Errors that can occur while decoding a response body.
#[derive(Error, Debug)]
pub enum DecodeError {
    /// The document does not have the rate sheet shape.
    #[error("Malformed rate sheet: {0}")]
    Xml(#[from] DeError),

    /// Reading the body from the network failed.
    #[error("Body read failed: {0}")]
    Body(TransportError),

    /// The caller cancelled while the body was being read.
    #[error("Decoding cancelled")]
    Cancelled,

    /// The decoding task panicked or was aborted.
    #[error("Decoding task failed: {0}")]
    Task(#[from] JoinError),
}

/// The whole document. The root element name selects the variant, so any root
/// other than `Tarih_Date` fails as an unknown variant.
#[derive(Deserialize)]
enum Document {
    #[serde(rename = "Tarih_Date")]
    Sheet(RateSheet),
}

impl Document {
    fn into_sheet(self) -> RateSheet {
        match self {
            Self::Sheet(sheet) => sheet,
        }
    }
}

/// Decoder for the TCMB rate sheet document.
///
/// The document shape is fixed at compile time by the `Deserialize`
/// implementations in `kurlar-types`; a client builds one decoder and reuses
/// it for every call.
#[derive(Debug, Clone, Copy, Default)]
pub struct RateSheetDecoder;

impl RateSheetDecoder {
    /// Creates a new decoder.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Decodes a complete document held in memory.
    ///
    /// # Errors
    ///
    /// Returns an error if the document is not a rate sheet.
    pub fn decode_slice(&self, xml: &[u8]) -> Result<RateSheet, DeError> {
        quick_xml::de::from_reader(xml).map(Document::into_sheet)
    }

    /// Decodes a body stream while it is still arriving.
    ///
    /// Parsing runs on the blocking thread pool and pulls chunks from the
    /// network on demand, so the body is never buffered whole. Cancelling
    /// `cancel` ends the body stream, which stops the parser at its next read.
    /// The body is dropped before this function returns, on every path.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::Body`] if a chunk could not be read,
    /// [`DecodeError::Cancelled`] if `cancel` fired first, and
    /// [`DecodeError::Xml`] if the document is malformed.
    pub async fn decode_stream(
        &self,
        body: BodyStream,
        cancel: &CancellationToken,
    ) -> Result<RateSheet, DecodeError> {
        // Read failures reach the parser as opaque io errors; keep the original.
        let body_error: Arc<Mutex<Option<TransportError>>> = Arc::default();
        let slot = Arc::clone(&body_error);

        let chunks = body
            .take_until(cancel.clone().cancelled_owned())
            .map(move |chunk| {
                chunk.map_err(|e| {
                    let message = e.to_string();
                    if let Ok(mut guard) = slot.lock() {
                        guard.get_or_insert(e);
                    }
                    io::Error::other(message)
                })
            })
            .boxed();

        let reader = SyncIoBridge::new(StreamReader::new(chunks));
        let outcome = tokio::task::spawn_blocking(move || {
            quick_xml::de::from_reader::<_, Document>(reader).map(Document::into_sheet)
        })
        .await?;

        match outcome {
            Ok(sheet) => Ok(sheet),
            Err(_) if cancel.is_cancelled() => Err(DecodeError::Cancelled),
            Err(e) => {
                let read_failure = body_error.lock().ok().and_then(|mut guard| guard.take());
                Err(read_failure.map_or(DecodeError::Xml(e), DecodeError::Body))
            }
        }
    }
}
