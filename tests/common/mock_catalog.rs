//! In-memory figure collection served over HTTP for client tests.

#![allow(dead_code)]

use axum::body::Body;
use axum::extract::State;
use axum::http::{Method, Request, Response, StatusCode};
use axum::routing::any;
use axum::Router;
use parking_lot::Mutex;
use serde_json::{json, Map, Value};
use std::collections::VecDeque;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;

/// Path the collection is mounted under.
pub const COLLECTION_PATH: &str = "/api/figuras";

/// A captured request for assertions.
#[derive(Debug, Clone)]
pub struct CapturedRequest {
    pub method: String,
    pub path: String,
    pub query: Option<String>,
    pub headers: Vec<(String, String)>,
    pub body: Vec<u8>,
}

impl CapturedRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    pub fn json(&self) -> Value {
        serde_json::from_slice(&self.body).unwrap_or(Value::Null)
    }
}

/// A canned response that bypasses the in-memory collection.
#[derive(Debug, Clone)]
pub struct MockResponse {
    pub status: u16,
    pub content_type: &'static str,
    pub body: Vec<u8>,
}

impl MockResponse {
    pub fn json(body: &str) -> Self {
        Self {
            status: 200,
            content_type: "application/json",
            body: body.as_bytes().to_vec(),
        }
    }

    pub fn error(status: u16, message: &str) -> Self {
        Self {
            status,
            content_type: "application/json",
            body: format!(r#"{{"error": "{}"}}"#, message).into_bytes(),
        }
    }

    pub fn text(body: &str) -> Self {
        Self {
            status: 200,
            content_type: "text/plain",
            body: body.as_bytes().to_vec(),
        }
    }
}

#[derive(Clone, Default)]
struct CatalogState {
    figures: Arc<Mutex<Vec<Map<String, Value>>>>,
    next_ids: Arc<Mutex<VecDeque<String>>>,
    requests: Arc<Mutex<Vec<CapturedRequest>>>,
    responses: Arc<Mutex<VecDeque<MockResponse>>>,
}

/// Mock figure collection server.
pub struct MockCatalog {
    pub addr: SocketAddr,
    state: CatalogState,
    shutdown: tokio::sync::watch::Sender<bool>,
}

impl MockCatalog {
    /// Start an empty collection on a free local port.
    pub async fn start() -> Self {
        let state = CatalogState::default();
        let (shutdown_tx, mut shutdown_rx) = tokio::sync::watch::channel(false);

        let app = Router::new()
            .route("/{*path}", any(handle_request))
            .with_state(state.clone());

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind mock catalog");
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async move {
                    let _ = shutdown_rx.changed().await;
                })
                .await
                .ok();
        });

        tokio::time::sleep(tokio::time::Duration::from_millis(10)).await;

        Self {
            addr,
            state,
            shutdown: shutdown_tx,
        }
    }

    /// Base URL of the collection resource.
    pub fn base_url(&self) -> String {
        format!("http://{}{}", self.addr, COLLECTION_PATH)
    }

    /// Use `id` for the next created figure instead of a random one.
    pub fn queue_id(&self, id: &str) {
        self.state.next_ids.lock().push_back(id.to_string());
    }

    /// Insert a stored record directly. `value` must be a JSON object.
    pub fn seed(&self, value: Value) {
        if let Value::Object(map) = value {
            self.state.figures.lock().push(map);
        }
    }

    /// Return `resp` for the next request instead of serving the collection.
    pub fn enqueue_response(&self, resp: MockResponse) {
        self.state.responses.lock().push_back(resp);
    }

    /// Stored records, in insertion order.
    pub fn stored(&self) -> Vec<Value> {
        self.state
            .figures
            .lock()
            .iter()
            .cloned()
            .map(Value::Object)
            .collect()
    }

    pub fn captured_requests(&self) -> Vec<CapturedRequest> {
        self.state.requests.lock().clone()
    }

    pub fn clear_requests(&self) {
        self.state.requests.lock().clear();
    }
}

impl Drop for MockCatalog {
    fn drop(&mut self) {
        let _ = self.shutdown.send(true);
    }
}

async fn handle_request(State(state): State<CatalogState>, req: Request<Body>) -> Response<Body> {
    let method = req.method().clone();
    let path = req.uri().path().to_string();
    let query = req.uri().query().map(str::to_string);
    let headers: Vec<(String, String)> = req
        .headers()
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_str().unwrap_or("").to_string()))
        .collect();
    let body = axum::body::to_bytes(req.into_body(), 1024 * 1024)
        .await
        .unwrap_or_default()
        .to_vec();

    state.requests.lock().push(CapturedRequest {
        method: method.to_string(),
        path: path.clone(),
        query: query.clone(),
        headers,
        body: body.clone(),
    });

    if let Some(canned) = state.responses.lock().pop_front() {
        return Response::builder()
            .status(StatusCode::from_u16(canned.status).unwrap())
            .header("content-type", canned.content_type)
            .body(Body::from(canned.body))
            .unwrap();
    }

    let Some(rest) = path.strip_prefix(COLLECTION_PATH) else {
        return respond(StatusCode::NOT_FOUND, json!({"error": "Ruta no encontrada"}));
    };
    let segment = rest.trim_start_matches('/');
    let payload: Value = serde_json::from_slice(&body).unwrap_or(Value::Null);

    match (method, segment) {
        (Method::GET, "") => list(&state, query.as_deref()),
        (Method::GET, "stats") => stats(&state),
        (Method::POST, "") => create(&state, payload),
        (Method::PUT, id) if !id.is_empty() => replace(&state, id, payload),
        (Method::PATCH, id) if !id.is_empty() => merge(&state, id, payload),
        (Method::DELETE, id) if !id.is_empty() => delete(&state, id),
        _ => respond(
            StatusCode::METHOD_NOT_ALLOWED,
            json!({"error": "Operación no soportada"}),
        ),
    }
}

fn respond(status: StatusCode, body: Value) -> Response<Body> {
    Response::builder()
        .status(status)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn not_found() -> Response<Body> {
    respond(
        StatusCode::NOT_FOUND,
        json!({"error": "Figura no encontrada"}),
    )
}

fn category_filter(query: Option<&str>) -> Option<String> {
    let query = query?;
    let url = reqwest::Url::parse(&format!("http://x/?{}", query)).ok()?;
    url.query_pairs()
        .find(|(k, _)| k == "categoria")
        .map(|(_, v)| v.into_owned())
}

fn list(state: &CatalogState, query: Option<&str>) -> Response<Body> {
    let filter = category_filter(query);
    let figures: Vec<Value> = state
        .figures
        .lock()
        .iter()
        .filter(|f| match &filter {
            Some(key) => f.get("categoria").and_then(Value::as_str) == Some(key.as_str()),
            None => true,
        })
        .cloned()
        .map(Value::Object)
        .collect();
    respond(StatusCode::OK, Value::Array(figures))
}

fn stats(state: &CatalogState) -> Response<Body> {
    let mut counts = Map::new();
    for figure in state.figures.lock().iter() {
        let key = figure
            .get("categoria")
            .and_then(Value::as_str)
            .unwrap_or("otros")
            .to_string();
        let entry = counts.entry(key).or_insert(json!(0));
        *entry = json!(entry.as_u64().unwrap_or(0) + 1);
    }
    respond(StatusCode::OK, Value::Object(counts))
}

fn create(state: &CatalogState, payload: Value) -> Response<Body> {
    let Value::Object(mut record) = payload else {
        return respond(StatusCode::BAD_REQUEST, json!({"error": "Cuerpo inválido"}));
    };
    let id = state
        .next_ids
        .lock()
        .pop_front()
        .unwrap_or_else(|| uuid::Uuid::new_v4().simple().to_string());
    record.insert("_id".to_string(), Value::String(id));
    state.figures.lock().push(record.clone());
    respond(StatusCode::CREATED, Value::Object(record))
}

fn replace(state: &CatalogState, id: &str, payload: Value) -> Response<Body> {
    let Value::Object(fields) = payload else {
        return respond(StatusCode::BAD_REQUEST, json!({"error": "Cuerpo inválido"}));
    };
    let mut figures = state.figures.lock();
    let Some(existing) = figures
        .iter_mut()
        .find(|f| f.get("_id").and_then(Value::as_str) == Some(id))
    else {
        return not_found();
    };
    let mut record = fields;
    record.insert("_id".to_string(), Value::String(id.to_string()));
    *existing = record.clone();
    respond(StatusCode::OK, Value::Object(record))
}

fn merge(state: &CatalogState, id: &str, payload: Value) -> Response<Body> {
    let Value::Object(fields) = payload else {
        return respond(StatusCode::BAD_REQUEST, json!({"error": "Cuerpo inválido"}));
    };
    let mut figures = state.figures.lock();
    let Some(existing) = figures
        .iter_mut()
        .find(|f| f.get("_id").and_then(Value::as_str) == Some(id))
    else {
        return not_found();
    };
    for (key, value) in fields {
        if key != "_id" {
            existing.insert(key, value);
        }
    }
    respond(StatusCode::OK, Value::Object(existing.clone()))
}

fn delete(state: &CatalogState, id: &str) -> Response<Body> {
    let mut figures = state.figures.lock();
    let before = figures.len();
    figures.retain(|f| f.get("_id").and_then(Value::as_str) != Some(id));
    if figures.len() == before {
        return not_found();
    }
    respond(StatusCode::OK, json!({"message": "Figura eliminada"}))
}
