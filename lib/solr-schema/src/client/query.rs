use indexmap::IndexMap;
use tracing::warn;

/// Name of Solr's output format parameter ("writer type").
pub(in crate::client) const FORMAT_PARAM: &str = "wt";

/// The only output format this client decodes.
pub(in crate::client) const FORMAT_JSON: &str = "json";

/// Query parameters of a schema request.
///
/// Each parameter name maps to one or more values, and parameters are encoded in
/// insertion order. The `wt` parameter is always forced to `json` by the client,
/// a value set here for it is discarded.
///
/// # Example
///
/// ```rust
/// use solr_schema::SchemaQuery;
///
/// let query = SchemaQuery::new()
///     .add_param("fl", "name")
///     .add_param("fl", "type")
///     .add_param("showDefaults", "true");
///
/// assert_eq!(query.get("fl"), Some(["name".to_string(), "type".to_string()].as_slice()));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SchemaQuery {
    params: IndexMap<String, Vec<String>>,
}

impl SchemaQuery {
    /// Creates an empty query.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a value to the parameter `name`.
    #[must_use]
    pub fn add_param(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.params
            .entry(name.into())
            .or_default()
            .push(value.into());
        self
    }

    /// Replaces every value of the parameter `name` with `value`.
    #[must_use]
    pub fn set_param(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.insert(name.into(), vec![value.into()]);
        self
    }

    /// Returns the values of the parameter `name`.
    pub fn get(&self, name: &str) -> Option<&[String]> {
        self.params.get(name).map(Vec::as_slice)
    }

    /// Returns `true` if no parameter is set.
    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// Forces `wt=json` as the first parameter.
    pub(in crate::client) fn force_json_format(&mut self) {
        if let Some(previous) = self.params.shift_remove(FORMAT_PARAM)
            && previous.iter().any(|value| value != FORMAT_JSON)
        {
            warn!(?previous, "discarding caller supplied output format");
        }
        self.params
            .shift_insert(0, FORMAT_PARAM.to_string(), vec![FORMAT_JSON.to_string()]);
    }

    /// Encodes the parameters as an `application/x-www-form-urlencoded` string.
    pub(in crate::client) fn to_query_string(&self) -> String {
        let pairs = self
            .params
            .iter()
            .flat_map(|(name, values)| {
                values
                    .iter()
                    .map(move |value| (name.as_str(), value.as_str()))
            })
            .collect::<Vec<_>>();

        // Serializing a sequence of string pairs cannot fail
        serde_urlencoded::to_string(pairs).unwrap_or_default()
    }
}

impl<K, V> FromIterator<(K, V)> for SchemaQuery
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Self::new(), |query, (name, value)| query.add_param(name, value))
    }
}
