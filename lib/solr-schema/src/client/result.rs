use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use super::{EnvelopeError, SchemaClientError};

const RESPONSE_HEADER: &str = "responseHeader";
const STATUS: &str = "status";
const QTIME: &str = "QTime";

/// Decoded response of a schema request.
///
/// Holds the Solr status extracted from `responseHeader.status` and the whole
/// decoded JSON document, envelope included.
///
/// # Example
///
/// ```rust
/// # use solr_schema::{SchemaClient, SchemaClientError};
/// # async fn example(client: &SchemaClient) -> Result<(), SchemaClientError> {
/// let result = client.unique_key().await?;
/// if result.is_success() {
///     let key = result.get("uniqueKey").and_then(|value| value.as_str());
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SchemaResult {
    status: i64,
    result: Map<String, Value>,
}

impl SchemaResult {
    /// Builds a result from a decoded response, checking its envelope.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaClientError::MalformedEnvelope`] when `responseHeader.status`
    /// is missing or is not a number.
    pub fn from_response(result: Map<String, Value>) -> Result<Self, SchemaClientError> {
        let status = extract_status(&result)?;
        Ok(Self { status, result })
    }

    /// The Solr status, `0` on success.
    pub fn status(&self) -> i64 {
        self.status
    }

    /// Returns `true` when the Solr status is `0`.
    pub fn is_success(&self) -> bool {
        self.status == 0
    }

    /// The decoded JSON document.
    pub fn result(&self) -> &Map<String, Value> {
        &self.result
    }

    /// Consumes the result and returns the decoded JSON document.
    pub fn into_result(self) -> Map<String, Value> {
        self.result
    }

    /// Returns the top-level field `key`.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.result.get(key)
    }

    /// Looks up a nested value with a JSON pointer, like `/schema/fields/0/name`.
    pub fn pointer(&self, pointer: &str) -> Option<&Value> {
        let pointer = pointer.strip_prefix('/')?;
        let (first, rest) = pointer
            .split_once('/')
            .map_or((pointer, None), |(first, rest)| (first, Some(rest)));
        let value = self.result.get(&first.replace("~1", "/").replace("~0", "~"))?;
        match rest {
            None => Some(value),
            Some(rest) => value.pointer(&format!("/{rest}")),
        }
    }

    /// Server-side processing time in milliseconds, from `responseHeader.QTime`.
    pub fn qtime(&self) -> Option<i64> {
        self.result
            .get(RESPONSE_HEADER)?
            .as_object()?
            .get(QTIME)?
            .as_i64()
    }

    /// Deserializes the whole document into `T`.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaClientError::Deserialize`] with the path of the offending value
    /// when the document does not match `T`.
    pub fn as_json<T>(&self) -> Result<T, SchemaClientError>
    where
        T: DeserializeOwned,
    {
        let value = Value::Object(self.result.clone());
        serde_path_to_error::deserialize(value).map_err(|err| SchemaClientError::Deserialize {
            path: err.path().to_string(),
            error: err.into_inner(),
        })
    }
}

#[allow(clippy::cast_possible_truncation)]
fn extract_status(result: &Map<String, Value>) -> Result<i64, EnvelopeError> {
    let header = result
        .get(RESPONSE_HEADER)
        .ok_or(EnvelopeError::MissingResponseHeader)?
        .as_object()
        .ok_or(EnvelopeError::ResponseHeaderNotObject)?;
    let status = header.get(STATUS).ok_or(EnvelopeError::MissingStatus)?;

    if let Some(status) = status.as_i64() {
        return Ok(status);
    }
    match status.as_f64() {
        Some(status) if status.is_finite() => Ok(status.trunc() as i64),
        _ => Err(EnvelopeError::StatusNotNumeric),
    }
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;
    use serde_json::json;

    use super::*;

    fn object(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            other => panic!("expected an object, got {other}"),
        }
    }

    #[test]
    fn test_status_and_payload() {
        let result = SchemaResult::from_response(object(json!({
            "responseHeader": {"status": 0, "QTime": 3},
            "name": "id"
        })))
        .expect("well formed envelope");

        assert_eq!(result.status(), 0);
        assert!(result.is_success());
        assert_eq!(result.qtime(), Some(3));
        assert_eq!(result.get("name"), Some(&json!("id")));
    }

    #[test]
    fn test_float_status_is_truncated() {
        let result = SchemaResult::from_response(object(json!({
            "responseHeader": {"status": 400.0}
        })))
        .expect("numeric status");

        assert_eq!(result.status(), 400);
        assert!(!result.is_success());
    }

    #[test]
    fn test_missing_response_header() {
        let result = SchemaResult::from_response(object(json!({"name": "id"})));

        assert!(matches!(
            result,
            Err(SchemaClientError::MalformedEnvelope(
                EnvelopeError::MissingResponseHeader
            ))
        ));
    }

    #[test]
    fn test_response_header_not_an_object() {
        let result = SchemaResult::from_response(object(json!({"responseHeader": [0]})));

        assert!(matches!(
            result,
            Err(SchemaClientError::MalformedEnvelope(
                EnvelopeError::ResponseHeaderNotObject
            ))
        ));
    }

    #[test]
    fn test_missing_status() {
        let result = SchemaResult::from_response(object(json!({"responseHeader": {"QTime": 1}})));

        assert!(matches!(
            result,
            Err(SchemaClientError::MalformedEnvelope(
                EnvelopeError::MissingStatus
            ))
        ));
    }

    #[test]
    fn test_non_numeric_status() {
        for status in [json!("0"), json!(null), json!(true), json!({"code": 0})] {
            let result =
                SchemaResult::from_response(object(json!({"responseHeader": {"status": status}})));

            assert!(matches!(
                result,
                Err(SchemaClientError::MalformedEnvelope(
                    EnvelopeError::StatusNotNumeric
                ))
            ));
        }
    }

    #[test]
    fn test_pointer() {
        let result = SchemaResult::from_response(object(json!({
            "responseHeader": {"status": 0},
            "fields": [{"name": "id", "type": "string"}],
            "a/b": {"c~d": 1}
        })))
        .expect("well formed envelope");

        assert_eq!(result.pointer("/fields/0/name"), Some(&json!("id")));
        assert_eq!(result.pointer("/responseHeader"), Some(&json!({"status": 0})));
        assert_eq!(result.pointer("/a~1b/c~0d"), Some(&json!(1)));
        assert_eq!(result.pointer("/fields/1"), None);
        assert_eq!(result.pointer("fields"), None);
        assert_eq!(result.pointer(""), None);
    }

    #[derive(Debug, Deserialize, PartialEq)]
    #[serde(rename_all = "camelCase")]
    struct UniqueKey {
        unique_key: String,
    }

    #[test]
    fn test_as_json() {
        let result = SchemaResult::from_response(object(json!({
            "responseHeader": {"status": 0},
            "uniqueKey": "id"
        })))
        .expect("well formed envelope");

        let key = result.as_json::<UniqueKey>().expect("valid document");

        assert_eq!(
            key,
            UniqueKey {
                unique_key: "id".to_string()
            }
        );
    }

    #[test]
    fn test_as_json_reports_path() {
        let result = SchemaResult::from_response(object(json!({
            "responseHeader": {"status": 0},
            "uniqueKey": 42
        })))
        .expect("well formed envelope");

        let error = result.as_json::<UniqueKey>().expect_err("wrong type");

        assert!(matches!(
            error,
            SchemaClientError::Deserialize { ref path, .. } if path == "uniqueKey"
        ));
    }
}
