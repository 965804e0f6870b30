use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};
use url::Url;

use super::SchemaClientError;

/// Fixed path segment of the Solr Schema API.
const SCHEMA_SEGMENT: &str = "/schema";

/// Characters escaped in a single path segment (RFC 3986 `pchar` complement).
const SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'\\')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Checks that `address` is usable as a base address.
///
/// Accepted forms are a hierarchical absolute URL (`http://localhost:8983/solr`)
/// and an absolute request path (`/solr`). Neither may contain ASCII control
/// characters; other characters, like spaces, are percent-encoded by the transport.
pub(super) fn validate_base_address(address: &str) -> Result<(), SchemaClientError> {
    let malformed = |reason: String| SchemaClientError::MalformedAddress {
        address: address.to_string(),
        reason,
    };

    if let Some(control) = address.chars().find(char::is_ascii_control) {
        return Err(malformed(format!("invalid control character {control:?}")));
    }
    if address.starts_with('/') {
        return Ok(());
    }

    let url = Url::parse(address).map_err(|err| malformed(err.to_string()))?;
    if url.cannot_be_a_base() {
        return Err(malformed("not a hierarchical URL".to_string()));
    }
    Ok(())
}

/// Normalizes a schema sub-path so that `x`, `/x`, `x/` and `/x/` all become `/x`.
///
/// An empty path, or a path made only of separators, stays empty.
pub(super) fn normalize_sub_path(sub_path: &str) -> String {
    let trimmed = sub_path.trim_matches('/');
    if trimmed.is_empty() {
        String::new()
    } else {
        format!("/{trimmed}")
    }
}

/// Percent-encodes `name` as one path segment, `/` and `\` included.
///
/// Rejects the empty name, `.` and `..`: URL parsers resolve dot segments even
/// when percent-encoded.
pub(super) fn encode_segment(name: &str) -> Result<String, SchemaClientError> {
    if matches!(name, "" | "." | "..") {
        return Err(SchemaClientError::InvalidSegment {
            name: name.to_string(),
        });
    }
    Ok(utf8_percent_encode(name, SEGMENT).to_string())
}

/// Composes `<base>[/<core>]/schema[/<sub_path>]?<query>`.
pub(super) fn compose_url(base: &str, core: &str, sub_path: &str, query: &str) -> String {
    let base = base.trim_end_matches('/');
    let sub_path = normalize_sub_path(sub_path);

    let mut url = String::with_capacity(
        base.len() + core.len() + SCHEMA_SEGMENT.len() + sub_path.len() + query.len() + 2,
    );
    url.push_str(base);
    if !core.is_empty() {
        url.push('/');
        url.push_str(core);
    }
    url.push_str(SCHEMA_SEGMENT);
    url.push_str(&sub_path);
    url.push('?');
    url.push_str(query);
    url
}
