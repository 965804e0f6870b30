//! HTTP transport used by the [`SchemaClient`](crate::SchemaClient).
//!
//! The client composes the request URL and decodes the response; a [`Transport`]
//! only moves bytes. [`ReqwestTransport`] is the default implementation, tests and
//! embedding applications can provide their own.

use std::future::Future;

use bytes::Bytes;

use crate::client::{AuthenticationError, Credentials};

mod reqwest_client;
pub use self::reqwest_client::ReqwestTransport;

/// A single GET request handed to a [`Transport`].
#[derive(Debug, Clone, Copy)]
pub struct TransportRequest<'a> {
    /// The fully composed request URL, query string included.
    pub url: &'a str,
    /// Optional request body.
    pub body: Option<&'a [u8]>,
    /// Basic authentication credentials, `None` means no `Authorization` header.
    pub credentials: Option<&'a Credentials>,
}

/// Performs HTTP GET requests for the schema client.
///
/// Implementations must return the raw response body whatever the HTTP status is:
/// interpreting the Solr status is the client's job. Only connection or protocol
/// failures are errors.
///
/// # Example
///
/// ```rust
/// use bytes::Bytes;
/// use solr_schema::{Transport, TransportError, TransportRequest};
///
/// struct Canned;
///
/// impl Transport for Canned {
///     async fn get(&self, _request: TransportRequest<'_>) -> Result<Bytes, TransportError> {
///         Ok(Bytes::from_static(br#"{"responseHeader":{"status":0}}"#))
///     }
/// }
/// ```
pub trait Transport {
    /// Performs a GET request and returns the response body.
    fn get(
        &self,
        request: TransportRequest<'_>,
    ) -> impl Future<Output = Result<Bytes, TransportError>> + Send;
}

/// Errors reported by a [`Transport`].
#[derive(Debug, derive_more::Error, derive_more::Display, derive_more::From)]
pub enum TransportError {
    /// HTTP client error from the underlying reqwest library.
    ///
    /// Occurs when connections are refused, time out, or the response cannot be read.
    Reqwest(reqwest::Error),

    /// The composed request URL could not be parsed.
    Url(url::ParseError),

    /// The credentials cannot be sent as a basic authentication header.
    Authentication(AuthenticationError),

    /// Failure reported by a custom transport.
    #[display("Transport failure: {message}")]
    #[from(skip)]
    Other {
        /// Description of the failure.
        message: String,
    },
}

impl TransportError {
    /// Creates a [`TransportError::Other`] with the given message.
    pub fn other(message: impl Into<String>) -> Self {
        Self::Other {
            message: message.into(),
        }
    }
}
