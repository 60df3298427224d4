//! Error types for SOAP envelope encoding.

use std::io;

/// Errors that can occur while encoding records or flushing envelopes.
#[derive(Debug, thiserror::Error)]
pub enum SoapError {
    /// The record lacks usable `XMLName` root metadata.
    ///
    /// Root metadata must be a single string of the form
    /// `"<namespace> <localName>"`, exactly two space-separated parts
    /// with a non-empty local name. The envelope buffer is left
    /// untouched when this is returned.
    #[error("record is missing a usable XMLName field: {0}")]
    MissingRootName(String),

    /// The sink rejected the flushed envelope.
    ///
    /// The pending envelope content is preserved; the caller may retry
    /// [`flush`](crate::SoapEncoder::flush) or capture the bytes via
    /// [`buffered`](crate::SoapEncoder::buffered).
    #[error("failed to write SOAP envelope to sink: {0}")]
    SinkWriteFailed(#[source] io::Error),

    /// An I/O error while producing XML into the in-memory buffer.
    ///
    /// Writing to the internal `Vec<u8>` cannot fail in practice; this
    /// variant exists to propagate the writer's result type honestly.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}
