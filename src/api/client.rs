use reqwest::{Client, Method, RequestBuilder, Url};
use serde::Serialize;
use serde_json::Value;

use crate::api::error::ApiError;
use crate::catalog::{Category, CategoryStats, Figure, FigureDraft, FigureId, FigurePatch};
use crate::config::{ApiConfig, ApiKey};

/// Header carrying the static API key.
pub const API_KEY_HEADER: &str = "x-api-key";

/// How an update is applied on the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateMode {
    /// `PUT`: every editable field is overwritten, unset optionals are cleared.
    Replace,
    /// `PATCH`: only fields present in the patch change.
    Merge,
}

impl UpdateMode {
    fn method(self) -> Method {
        match self {
            UpdateMode::Replace => Method::PUT,
            UpdateMode::Merge => Method::PATCH,
        }
    }
}

/// Decoded response body.
enum Payload {
    Json(Value),
    /// Empty or not JSON; the string says why.
    Unreadable(String),
}

/// Client for the remote figure collection.
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Clone)]
pub struct CatalogClient {
    client: Client,
    base_url: String,
    api_key: ApiKey,
}

impl CatalogClient {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            client: Client::new(),
            base_url: config.base_url,
            api_key: config.api_key,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch every figure in the collection.
    ///
    /// A body that is not a JSON array yields an empty list.
    pub async fn list_all(&self) -> Result<Vec<Figure>, ApiError> {
        let url = self.collection_url()?;
        self.fetch_list(url).await
    }

    /// Fetch the figures stored under `category`.
    pub async fn list_by_category(&self, category: Category) -> Result<Vec<Figure>, ApiError> {
        let mut url = self.collection_url()?;
        url.query_pairs_mut().append_pair("categoria", category.key());
        self.fetch_list(url).await
    }

    /// Fetch per-category counts from `{base}/stats`.
    pub async fn get_stats(&self) -> Result<CategoryStats, ApiError> {
        let url = self.resource_url("stats")?;
        let payload = self.send(self.request(Method::GET, &url), &url).await?;

        let Payload::Json(Value::Object(map)) = payload else {
            tracing::warn!(url = %url, "Stats response is not an object, treating as empty");
            return Ok(CategoryStats::default());
        };

        Ok(map
            .into_iter()
            .filter_map(|(key, value)| match count_from(&value) {
                Some(count) => Some((key, count)),
                None => {
                    tracing::warn!(categoria = %key, value = %value, "Ignoring non-integer count");
                    None
                }
            })
            .collect())
    }

    /// Create a figure. The server assigns its identifier.
    pub async fn create(&self, draft: &FigureDraft) -> Result<Figure, ApiError> {
        draft.validate()?;
        let url = self.collection_url()?;
        let payload = self.send_json(Method::POST, &url, draft).await?;
        let figure = figure_from(&url, payload)?;
        tracing::info!(id = %figure.id, categoria = %figure.category, "Figure created");
        Ok(figure)
    }

    /// Update the figure `id`.
    ///
    /// In [`UpdateMode::Replace`] the patch must carry a name; any optional
    /// left unset is cleared on the server.
    pub async fn update(
        &self,
        id: &FigureId,
        patch: &FigurePatch,
        mode: UpdateMode,
    ) -> Result<Figure, ApiError> {
        patch.validate()?;
        let url = self.resource_url(id.as_str())?;
        let payload = match mode {
            UpdateMode::Merge => self.send_json(mode.method(), &url, patch).await?,
            UpdateMode::Replace => {
                let draft = patch.clone().into_draft()?;
                self.send_json(mode.method(), &url, &draft).await?
            }
        };
        let figure = figure_from(&url, payload)?;
        tracing::info!(id = %figure.id, mode = ?mode, "Figure updated");
        Ok(figure)
    }

    /// Delete the figure `id`.
    pub async fn remove(&self, id: &FigureId) -> Result<(), ApiError> {
        let url = self.resource_url(id.as_str())?;
        self.send(self.request(Method::DELETE, &url), &url).await?;
        tracing::info!(id = %id, "Figure deleted");
        Ok(())
    }

    fn collection_url(&self) -> Result<Url, ApiError> {
        Url::parse(&self.base_url).map_err(|e| ApiError::InvalidUrl {
            url: self.base_url.clone(),
            reason: e.to_string(),
        })
    }

    fn resource_url(&self, segment: &str) -> Result<Url, ApiError> {
        let mut url = self.collection_url()?;
        {
            let mut segments = url.path_segments_mut().map_err(|_| ApiError::InvalidUrl {
                url: self.base_url.clone(),
                reason: "URL cannot have path segments".to_string(),
            })?;
            segments.pop_if_empty().push(segment);
        }
        Ok(url)
    }

    fn request(&self, method: Method, url: &Url) -> RequestBuilder {
        self.client
            .request(method, url.clone())
            .header(API_KEY_HEADER, self.api_key.expose())
    }

    async fn fetch_list(&self, url: Url) -> Result<Vec<Figure>, ApiError> {
        let payload = self.send(self.request(Method::GET, &url), &url).await?;
        Ok(figures_from(&url, payload))
    }

    async fn send_json<B: Serialize + ?Sized>(
        &self,
        method: Method,
        url: &Url,
        body: &B,
    ) -> Result<Payload, ApiError> {
        self.send(self.request(method, url).json(body), url).await
    }

    async fn send(&self, builder: RequestBuilder, url: &Url) -> Result<Payload, ApiError> {
        let network = |source| ApiError::Network {
            url: url.to_string(),
            source,
        };

        let response = builder.send().await.map_err(network)?;
        let status = response.status();
        let bytes = response.bytes().await.map_err(network)?;

        tracing::debug!(
            url = %url,
            status = status.as_u16(),
            bytes = bytes.len(),
            "Catalog response"
        );

        parse_payload(&bytes)
    }
}

/// Decode a body, turning an `{"error": ...}` object into [`ApiError::Server`].
///
/// HTTP status is not consulted: the collection reports failures in the body.
fn parse_payload(bytes: &[u8]) -> Result<Payload, ApiError> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(Payload::Unreadable("empty body".to_string()));
    }

    let value = match serde_json::from_slice::<Value>(bytes) {
        Ok(value) => value,
        Err(e) => return Ok(Payload::Unreadable(e.to_string())),
    };

    if let Some(error) = value.get("error").filter(|e| is_truthy(e)) {
        return Err(ApiError::Server {
            message: error_message(error),
        });
    }

    Ok(Payload::Json(value))
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::String(s) => !s.is_empty(),
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn error_message(error: &Value) -> String {
    match error {
        Value::String(s) => s.clone(),
        Value::Object(obj) => obj
            .get("message")
            .and_then(Value::as_str)
            .map(str::to_string)
            .unwrap_or_else(|| error.to_string()),
        other => other.to_string(),
    }
}

fn figures_from(url: &Url, payload: Payload) -> Vec<Figure> {
    let items = match payload {
        Payload::Json(Value::Array(items)) => items,
        Payload::Json(other) => {
            tracing::warn!(url = %url, kind = json_kind(&other), "List response is not an array");
            return Vec::new();
        }
        Payload::Unreadable(reason) => {
            tracing::warn!(url = %url, reason = %reason, "List response is not JSON");
            return Vec::new();
        }
    };

    items
        .into_iter()
        .filter_map(|item| match serde_json::from_value::<Figure>(item) {
            Ok(figure) => Some(figure),
            Err(e) => {
                tracing::warn!(url = %url, error = %e, "Skipping malformed figure record");
                None
            }
        })
        .collect()
}

fn figure_from(url: &Url, payload: Payload) -> Result<Figure, ApiError> {
    let malformed = |reason: String| ApiError::MalformedResponse {
        url: url.to_string(),
        reason,
    };

    match payload {
        Payload::Json(value) => serde_json::from_value(value).map_err(|e| malformed(e.to_string())),
        Payload::Unreadable(reason) => Err(malformed(reason)),
    }
}

fn count_from(value: &Value) -> Option<u64> {
    value.as_u64().or_else(|| {
        value
            .as_f64()
            .filter(|f| *f >= 0.0 && f.fract() == 0.0)
            .map(|f| f as u64)
    })
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
