use std::fmt::Debug;

use crate::transport::TransportError;

/// Maximum number of body bytes kept in a [`SchemaClientError::Decode`] error.
pub(in crate::client) const BODY_MAX_LENGTH: usize = 1024;

/// Errors that can occur when using the [`SchemaClient`](super::SchemaClient).
///
/// Every error is returned to the immediate caller: nothing is retried or
/// swallowed inside the client.
#[derive(Debug, derive_more::Error, derive_more::Display, derive_more::From)]
pub enum SchemaClientError {
    /// The base address is neither an absolute URL nor an absolute request path.
    ///
    /// Only returned while building a client; no client is produced.
    #[display("Malformed base address '{address}': {reason}")]
    #[from(skip)]
    MalformedAddress {
        /// The address as supplied by the caller.
        address: String,
        /// Why the address was rejected.
        reason: String,
    },

    /// A field or field type name cannot be sent as a single path segment.
    ///
    /// Returned for an empty name, `.` and `..`; no request is sent.
    #[display("Invalid schema name '{name}': not a single path segment")]
    #[from(skip)]
    InvalidSegment {
        /// The name as supplied by the caller.
        name: String,
    },

    /// The transport failed to perform the request.
    ///
    /// The transport error is kept as is.
    Transport(TransportError),

    /// The response body is not a JSON object.
    #[display("Failed to decode JSON response from '{url}': {error}\n{body}")]
    #[from(skip)]
    Decode {
        /// The request URL.
        url: String,
        /// The underlying JSON parsing error.
        error: serde_json::Error,
        /// The response body, truncated.
        body: String,
    },

    /// The decoded response lacks a usable `responseHeader.status`.
    MalformedEnvelope(EnvelopeError),

    /// The schema document does not match the requested type.
    ///
    /// Only returned by [`SchemaResult::as_json`](super::SchemaResult::as_json).
    #[display("Failed to deserialize schema result at '{path}': {error}")]
    #[from(skip)]
    Deserialize {
        /// Path of the value that failed to deserialize.
        path: String,
        /// The underlying JSON error.
        error: serde_json::Error,
    },
}

impl SchemaClientError {
    pub(in crate::client) fn decode(url: &str, error: serde_json::Error, body: &[u8]) -> Self {
        let text = String::from_utf8_lossy(body);
        let body = if text.len() > BODY_MAX_LENGTH {
            let cut = (0..=BODY_MAX_LENGTH)
                .rev()
                .find(|&index| text.is_char_boundary(index))
                .unwrap_or_default();
            format!("{}... (truncated)", text.get(..cut).unwrap_or_default())
        } else {
            text.into_owned()
        };
        Self::Decode {
            url: url.to_string(),
            error,
            body,
        }
    }
}

/// Defects of the Solr response envelope.
///
/// Every Solr response is expected to look like
/// `{"responseHeader": {"status": <integer>, ...}, ...}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Error, derive_more::Display)]
pub enum EnvelopeError {
    /// The response has no `responseHeader` field.
    #[display("missing 'responseHeader' field")]
    MissingResponseHeader,

    /// The `responseHeader` field is not a JSON object.
    #[display("'responseHeader' is not an object")]
    ResponseHeaderNotObject,

    /// The `responseHeader` object has no `status` field.
    #[display("missing 'responseHeader.status' field")]
    MissingStatus,

    /// The `responseHeader.status` field is not a number.
    #[display("'responseHeader.status' is not a number")]
    StatusNotNumeric,
}
