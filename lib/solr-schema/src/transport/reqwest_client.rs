use bytes::Bytes;
use http::Method;
use reqwest::{Body, Request};
use tracing::debug;
use url::Url;

use super::{Transport, TransportError, TransportRequest};

/// [`Transport`] backed by a [`reqwest::Client`].
///
/// Timeouts, proxies and connection reuse are those of the wrapped client.
///
/// # Example
///
/// ```rust
/// use std::time::Duration;
/// use solr_schema::ReqwestTransport;
///
/// # fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = reqwest::Client::builder()
///     .timeout(Duration::from_secs(5))
///     .build()?;
/// let transport = ReqwestTransport::new(client);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    /// Wraps an existing reqwest client.
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }

    fn build_request(request: TransportRequest<'_>) -> Result<Request, TransportError> {
        let TransportRequest {
            url,
            body,
            credentials,
        } = request;

        let url = url.parse::<Url>()?;
        let mut request = Request::new(Method::GET, url);

        if let Some(credentials) = credentials {
            let (name, value) = credentials.to_header()?;
            request.headers_mut().insert(name, value);
        }

        if let Some(body) = body {
            *request.body_mut() = Some(Body::from(body.to_vec()));
        }

        Ok(request)
    }
}

impl Transport for ReqwestTransport {
    async fn get(&self, request: TransportRequest<'_>) -> Result<Bytes, TransportError> {
        let request = Self::build_request(request)?;

        debug!(url = %request.url(), "sending...");
        let response = self.client.execute(request).await?;
        debug!(status = %response.status(), "...receiving");

        let bytes = response.bytes().await?;
        Ok(bytes)
    }
}

#[cfg(test)]
mod tests {
    use http::header::AUTHORIZATION;

    use super::*;
    use crate::client::{AuthenticationError, Credentials};

    #[test]
    fn test_build_request_without_credentials() {
        let request = ReqwestTransport::build_request(TransportRequest {
            url: "http://localhost:8983/solr/schema?wt=json",
            body: None,
            credentials: None,
        })
        .expect("valid request");

        assert_eq!(request.method(), Method::GET);
        assert_eq!(
            request.url().as_str(),
            "http://localhost:8983/solr/schema?wt=json"
        );
        assert!(request.headers().get(AUTHORIZATION).is_none());
        assert!(request.body().is_none());
    }

    #[test]
    fn test_build_request_with_credentials_and_body() {
        let credentials = Credentials::new("user", "pass");
        let request = ReqwestTransport::build_request(TransportRequest {
            url: "http://localhost:8983/solr/schema?wt=json",
            body: Some(b"{}"),
            credentials: Some(&credentials),
        })
        .expect("valid request");

        assert_eq!(
            request.headers().get(AUTHORIZATION).expect("auth header"),
            "Basic dXNlcjpwYXNz"
        );
        assert!(request.body().is_some());
    }

    #[test]
    fn test_build_request_rejects_relative_url() {
        let result = ReqwestTransport::build_request(TransportRequest {
            url: "/solr/schema?wt=json",
            body: None,
            credentials: None,
        });

        assert!(matches!(result, Err(TransportError::Url(_))));
    }

    #[test]
    fn test_build_request_rejects_invalid_username() {
        let credentials = Credentials::new("us:er", "pass");
        let result = ReqwestTransport::build_request(TransportRequest {
            url: "http://localhost:8983/solr/schema",
            body: None,
            credentials: Some(&credentials),
        });

        assert!(matches!(
            result,
            Err(TransportError::Authentication(
                AuthenticationError::InvalidUsername { .. }
            ))
        ));
    }

    #[tokio::test]
    async fn test_connection_refused_is_a_reqwest_error() {
        // Port 1 is reserved and nothing listens on it
        let transport = ReqwestTransport::default();

        let result = transport
            .get(TransportRequest {
                url: "http://127.0.0.1:1/solr/schema?wt=json",
                body: None,
                credentials: None,
            })
            .await;

        assert!(matches!(result, Err(TransportError::Reqwest(_))));
    }
}
