use serde_json::{Map, Value};
use tracing::debug;

use crate::transport::{ReqwestTransport, Transport, TransportRequest};

mod auth;
pub use self::auth::{AuthenticationError, Credentials, SecureString};

mod builder;
pub use self::builder::SchemaClientBuilder;

mod config;
pub use self::config::{ClientConfig, DEFAULT_BASE_URL};

mod error;
pub use self::error::{EnvelopeError, SchemaClientError};

mod path;
use self::path::{compose_url, encode_segment};

mod query;
pub use self::query::SchemaQuery;

mod result;
pub use self::result::SchemaResult;


/// Read-only client of the Solr Schema REST API.
///
/// Every operation issues exactly one `GET <base>[/<core>]/schema[/<sub-path>]?wt=json...`
/// request and returns one [`SchemaResult`] or one [`SchemaClientError`].
///
/// # Example
///
/// ```rust,no_run
/// use solr_schema::SchemaClient;
///
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let mut client = SchemaClient::new("http://localhost:8983/solr", "techproducts")?;
/// client.set_basic_auth("solr", "SolrRocks");
///
/// let name = client.name().await?;
/// println!("status {}: {:?}", name.status(), name.get("name"));
/// # Ok(())
/// # }
/// ```
///
/// # Thread Safety
///
/// Queries borrow the client immutably while [`set_core`](Self::set_core) and
/// [`set_basic_auth`](Self::set_basic_auth) need `&mut self`. Wrap the client in a
/// `Mutex` or `RwLock` to reconfigure it while other tasks query it.
#[derive(Debug, Clone)]
pub struct SchemaClient<T = ReqwestTransport> {
    transport: T,
    config: ClientConfig,
}

// Create
impl SchemaClient {
    /// Creates a client for `base_url` and `core`, using the default reqwest transport.
    ///
    /// An empty `core` targets the default schema of the instance. `base_url` is kept
    /// verbatim, but a trailing `/` is dropped when composing request URLs, so
    /// `http://localhost:8983/solr/` requests `http://localhost:8983/solr/<core>/schema...`
    /// rather than `.../solr//<core>/schema...`.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaClientError::MalformedAddress`] if `base_url` is neither an
    /// absolute URL nor an absolute request path. No request is sent.
    pub fn new(
        base_url: impl Into<String>,
        core: impl Into<String>,
    ) -> Result<Self, SchemaClientError> {
        Self::builder().with_base_url(base_url)?.with_core(core).build()
    }

    /// Creates a client from a [`ClientConfig`].
    ///
    /// # Errors
    ///
    /// Returns [`SchemaClientError::MalformedAddress`] if the configured base URL is invalid.
    pub fn from_config(config: ClientConfig) -> Result<Self, SchemaClientError> {
        let ClientConfig {
            base_url,
            core,
            credentials,
        } = config;

        let builder = Self::builder().with_base_url(base_url)?.with_core(core);
        let builder = match credentials {
            Some(credentials) => {
                builder.with_basic_auth(credentials.username(), credentials.password().clone())
            }
            None => builder,
        };
        builder.build()
    }

    /// Returns a builder with the default configuration.
    pub fn builder() -> SchemaClientBuilder {
        SchemaClientBuilder::default()
    }
}

// Configuration
impl<T> SchemaClient<T> {
    /// Replaces the transport, keeping the configuration.
    pub fn with_transport<U>(self, transport: U) -> SchemaClient<U> {
        SchemaClient {
            transport,
            config: self.config,
        }
    }

    /// Replaces the core name.
    ///
    /// An empty name removes the core segment from subsequent requests.
    pub fn set_core(&mut self, core: impl Into<String>) {
        self.config.core = core.into();
    }

    /// Replaces the basic authentication credentials.
    ///
    /// An empty username together with an empty password disables authentication.
    ///
    /// A username containing `:` cannot be encoded as basic credentials: requests then
    /// fail with [`TransportError::Authentication`](crate::TransportError::Authentication)
    /// when the transport builds the `Authorization` header.
    pub fn set_basic_auth(
        &mut self,
        username: impl Into<String>,
        password: impl Into<SecureString>,
    ) {
        let credentials = Credentials::new(username, password);
        self.config.credentials = (!credentials.is_empty()).then_some(credentials);
    }

    /// The base URL, as given at construction.
    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    /// The core name, empty when none is set.
    pub fn core(&self) -> &str {
        &self.config.core
    }

    /// The credentials sent with each request, if any.
    pub fn credentials(&self) -> Option<&Credentials> {
        self.config
            .credentials
            .as_ref()
            .filter(|credentials| !credentials.is_empty())
    }

    /// The current configuration.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Returns the URL requested by [`get`](Self::get) for `sub_path` and `params`.
    ///
    /// ```rust
    /// use solr_schema::{SchemaClient, SchemaQuery};
    ///
    /// # fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// let client = SchemaClient::new("http://localhost:8983/solr", "books")?;
    /// let params = SchemaQuery::new().add_param("wt", "xml").add_param("fl", "name");
    ///
    /// assert_eq!(
    ///     client.request_url("/fields/", Some(params)),
    ///     "http://localhost:8983/solr/books/schema/fields?wt=json&fl=name"
    /// );
    /// # Ok(())
    /// # }
    /// ```
    pub fn request_url(&self, sub_path: &str, params: Option<SchemaQuery>) -> String {
        let mut query = params.unwrap_or_default();
        query.force_json_format();
        compose_url(
            &self.config.base_url,
            &self.config.core,
            sub_path,
            &query.to_query_string(),
        )
    }
}

// Queries
impl<T> SchemaClient<T>
where
    T: Transport,
{
    /// Requests the schema sub-resource `sub_path` with optional query parameters.
    ///
    /// `sub_path` may be empty, and leading or trailing `/` are ignored: `"name"`,
    /// `"/name"` and `"name/"` are equivalent. `wt=json` is always sent, overriding
    /// any `wt` value in `params`.
    ///
    /// # Errors
    ///
    /// - [`SchemaClientError::Transport`] when the transport fails, unchanged;
    /// - [`SchemaClientError::Decode`] when the body is not a JSON object;
    /// - [`SchemaClientError::MalformedEnvelope`] when `responseHeader.status` is
    ///   missing or not a number.
    pub async fn get(
        &self,
        sub_path: &str,
        params: Option<SchemaQuery>,
    ) -> Result<SchemaResult, SchemaClientError> {
        let url = self.request_url(sub_path, params);
        let request = TransportRequest {
            url: &url,
            body: None,
            credentials: self.credentials(),
        };

        debug!(%url, "requesting schema");
        let body = self.transport.get(request).await?;
        debug!(%url, size = body.len(), "schema response received");

        let document = serde_json::from_slice::<Map<String, Value>>(&body)
            .map_err(|err| SchemaClientError::decode(&url, err, &body))?;
        SchemaResult::from_response(document)
    }

    /// Returns the entire schema.
    ///
    /// # Errors
    ///
    /// See [`get`](Self::get).
    pub async fn all(&self) -> Result<SchemaResult, SchemaClientError> {
        self.get("", None).await
    }

    /// Returns the unique key field of the schema.
    ///
    /// # Errors
    ///
    /// See [`get`](Self::get).
    pub async fn unique_key(&self) -> Result<SchemaResult, SchemaClientError> {
        self.get("uniquekey", None).await
    }

    /// Returns the schema version.
    ///
    /// # Errors
    ///
    /// See [`get`](Self::get).
    pub async fn version(&self) -> Result<SchemaResult, SchemaClientError> {
        self.get("version", None).await
    }

    /// Returns the schema name.
    ///
    /// # Errors
    ///
    /// See [`get`](Self::get).
    pub async fn name(&self) -> Result<SchemaResult, SchemaClientError> {
        self.get("name", None).await
    }

    /// Returns the global similarity of the schema.
    ///
    /// # Errors
    ///
    /// See [`get`](Self::get).
    pub async fn similarity(&self) -> Result<SchemaResult, SchemaClientError> {
        self.get("similarity", None).await
    }

    /// Lists the fields.
    ///
    /// # Errors
    ///
    /// See [`get`](Self::get).
    pub async fn fields(&self) -> Result<SchemaResult, SchemaClientError> {
        self.get("fields", None).await
    }

    /// Returns the field `name`.
    ///
    /// The name is percent-encoded as one path segment.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaClientError::InvalidSegment`] without sending a request when
    /// `name` is empty, `.` or `..`; otherwise see [`get`](Self::get).
    pub async fn field(&self, name: &str) -> Result<SchemaResult, SchemaClientError> {
        let segment = encode_segment(name)?;
        self.get(&format!("fields/{segment}"), None).await
    }

    /// Lists the dynamic field rules.
    ///
    /// # Errors
    ///
    /// See [`get`](Self::get).
    pub async fn dynamic_fields(&self) -> Result<SchemaResult, SchemaClientError> {
        self.get("dynamicfields", None).await
    }

    /// Lists the field types.
    ///
    /// # Errors
    ///
    /// See [`get`](Self::get).
    pub async fn field_types(&self) -> Result<SchemaResult, SchemaClientError> {
        self.get("fieldtypes", None).await
    }

    /// Returns the field type `name`.
    ///
    /// The name is percent-encoded as one path segment.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaClientError::InvalidSegment`] without sending a request when
    /// `name` is empty, `.` or `..`; otherwise see [`get`](Self::get).
    pub async fn field_type(&self, name: &str) -> Result<SchemaResult, SchemaClientError> {
        let segment = encode_segment(name)?;
        self.get(&format!("fieldtypes/{segment}"), None).await
    }

    /// Lists the copy field rules.
    ///
    /// # Errors
    ///
    /// See [`get`](Self::get).
    pub async fn copy_fields(&self) -> Result<SchemaResult, SchemaClientError> {
        self.get("copyfields", None).await
    }
}
