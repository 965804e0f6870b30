#![allow(clippy::missing_errors_doc, dead_code, missing_docs, clippy::expect_used)]
use std::net::{Ipv4Addr, SocketAddr};
use std::sync::{Arc, Mutex};

use axum::extract::State;
use axum::http::header::AUTHORIZATION;
use axum::http::{HeaderMap, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use axum::{Json, Router};
use serde_json::{Value, json};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;
use tracing::{error, info};

/// A request received by the stub.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReceivedRequest {
    pub path_and_query: String,
    pub authorization: Option<String>,
}

type Received = Arc<Mutex<Vec<ReceivedRequest>>>;

/// In-process HTTP server answering like the Solr Schema API of a `techproducts` core.
///
/// Requests to the `broken` core get an HTML error page.
#[derive(Debug)]
pub struct SolrStub {
    local_addr: SocketAddr,
    received: Received,
    handle: JoinHandle<()>,
}

impl SolrStub {
    pub async fn start() -> anyhow::Result<Self> {
        let listener = TcpListener::bind(SocketAddr::from((Ipv4Addr::LOCALHOST, 0))).await?;
        let local_addr = listener.local_addr()?;

        let received = Received::default();
        let router = Router::new()
            .fallback(answer)
            .with_state(Arc::clone(&received));

        let handle = tokio::spawn(async move {
            if let Err(error) = axum::serve(listener, router).await {
                error!(?error, "Solr stub failed");
            }
        });
        info!(%local_addr, "Solr stub started");

        Ok(Self {
            local_addr,
            received,
            handle,
        })
    }

    /// Base URL of the stub, like `http://127.0.0.1:1234/solr`.
    pub fn base_url(&self) -> String {
        format!("http://{}/solr", self.local_addr)
    }

    pub fn received(&self) -> Vec<ReceivedRequest> {
        self.received.lock().expect("lock received requests").clone()
    }
}

impl Drop for SolrStub {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

async fn answer(State(received): State<Received>, uri: Uri, headers: HeaderMap) -> Response {
    let path_and_query = uri
        .path_and_query()
        .map(ToString::to_string)
        .unwrap_or_default();
    let authorization = headers
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .map(ToString::to_string);
    received
        .lock()
        .expect("lock received requests")
        .push(ReceivedRequest {
            path_and_query,
            authorization,
        });

    let path = uri.path();
    if path.starts_with("/solr/broken/") {
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            "<html><body>Internal Server Error</body></html>",
        )
            .into_response();
    }

    match path.strip_prefix("/solr/techproducts/schema") {
        Some("") => Json(envelope(json!({
            "schema": {
                "name": "example",
                "version": 1.6,
                "uniqueKey": "id",
                "fields": [
                    {"name": "id", "type": "string", "indexed": true, "stored": true},
                    {"name": "title", "type": "text_general", "stored": true}
                ]
            }
        })))
        .into_response(),
        Some("/name") => Json(envelope(json!({"name": "example"}))).into_response(),
        Some("/version") => Json(envelope(json!({"version": 1.6}))).into_response(),
        Some("/uniquekey") => Json(envelope(json!({"uniqueKey": "id"}))).into_response(),
        Some("/fields") => Json(envelope(json!({
            "fields": [
                {"name": "id", "type": "string"},
                {"name": "title", "type": "text_general"}
            ]
        })))
        .into_response(),
        Some("/fields/title") => Json(envelope(json!({
            "field": {"name": "title", "type": "text_general"}
        })))
        .into_response(),
        _ => not_found(path),
    }
}

fn envelope(payload: Value) -> Value {
    let mut document = json!({"responseHeader": {"status": 0, "QTime": 1}});
    if let (Some(document), Value::Object(payload)) = (document.as_object_mut(), payload) {
        document.extend(payload);
    }
    document
}

// Solr answers unknown resources with a 404 and a JSON envelope
fn not_found(path: &str) -> Response {
    let body = json!({
        "responseHeader": {"status": 404, "QTime": 0},
        "error": {"msg": format!("Not Found: {path}"), "code": 404}
    });
    (StatusCode::NOT_FOUND, Json(body)).into_response()
}
