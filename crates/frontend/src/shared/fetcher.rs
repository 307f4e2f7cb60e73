//! JSON fetching from the analytics backend.

use super::config::AppConfig;
use super::query::{with_query, QueryBuilder};
use async_trait::async_trait;
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::fmt;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchErrorKind {
    /// The request did not complete or came back with a non-2xx status
    Network,
    /// The body is not valid JSON, or not of the expected shape
    Parse,
    /// The payload carries an explicit error field
    Application,
}

impl fmt::Display for FetchErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchErrorKind::Network => f.write_str("network error"),
            FetchErrorKind::Parse => f.write_str("parse error"),
            FetchErrorKind::Application => f.write_str("application error"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind}: {detail}")]
pub struct FetchError {
    pub kind: FetchErrorKind,
    pub detail: String,
}

impl FetchError {
    pub fn network(detail: impl Into<String>) -> Self {
        Self {
            kind: FetchErrorKind::Network,
            detail: detail.into(),
        }
    }

    pub fn parse(detail: impl Into<String>) -> Self {
        Self {
            kind: FetchErrorKind::Parse,
            detail: detail.into(),
        }
    }

    pub fn application(detail: impl Into<String>) -> Self {
        Self {
            kind: FetchErrorKind::Application,
            detail: detail.into(),
        }
    }

    pub fn is_application(&self) -> bool {
        self.kind == FetchErrorKind::Application
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(err: serde_json::Error) -> Self {
        FetchError::parse(err.to_string())
    }
}

/// Decode a JSON value into a typed payload, mapping shape errors to `Parse`.
pub fn decode<T: DeserializeOwned>(value: Value) -> Result<T, FetchError> {
    Ok(serde_json::from_value(value)?)
}

/// Issues GET requests against the analytics backend.
///
/// Every caller handles its own error: one failing endpoint never aborts
/// the requests issued alongside it.
#[async_trait(?Send)]
pub trait DataFetcher {
    async fn get_json(&self, path: &str, query: &QueryBuilder) -> Result<Value, FetchError>;
}

/// [`DataFetcher`] backed by the browser `fetch` API.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    config: AppConfig,
}

impl HttpFetcher {
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    pub fn url(&self, path: &str, query: &QueryBuilder) -> String {
        self.config.url(&with_query(path, query))
    }

    /// POST a JSON body and hand back the raw response.
    pub async fn post_json<B: Serialize>(&self, path: &str, body: &B) -> Result<Response, FetchError> {
        Request::post(&self.config.url(path))
            .json(body)
            .map_err(|e| FetchError::parse(format!("Failed to serialize request: {}", e)))?
            .send()
            .await
            .map_err(|e| FetchError::network(format!("Request failed: {}", e)))
    }

    /// POST without a body.
    pub async fn post_empty(&self, path: &str) -> Result<Value, FetchError> {
        let response = Request::post(&self.config.url(path))
            .send()
            .await
            .map_err(|e| FetchError::network(format!("Request failed: {}", e)))?;
        read_body(response, ErrorBodies::Reject).await
    }

    /// POST a multipart form. Error payloads are read even on non-2xx
    /// statuses so the backend's message reaches the user.
    pub async fn post_form(&self, path: &str, form: web_sys::FormData) -> Result<Value, FetchError> {
        let response = Request::post(&self.config.url(path))
            .body(form)
            .map_err(|e| FetchError::network(format!("Failed to build request: {}", e)))?
            .send()
            .await
            .map_err(|e| FetchError::network(format!("Request failed: {}", e)))?;
        read_body(response, ErrorBodies::Keep).await
    }
}

#[async_trait(?Send)]
impl DataFetcher for HttpFetcher {
    async fn get_json(&self, path: &str, query: &QueryBuilder) -> Result<Value, FetchError> {
        let url = self.url(path, query);
        let response = Request::get(&url)
            .send()
            .await
            .map_err(|e| FetchError::network(format!("Request failed: {}", e)))?;
        read_body(response, ErrorBodies::Reject).await
    }
}

/// What to do with the body of a non-2xx response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorBodies {
    /// Any non-2xx status is a network error
    Reject,
    /// A JSON body is handed back so its error field can be reported
    Keep,
}

async fn read_body(response: Response, error_bodies: ErrorBodies) -> Result<Value, FetchError> {
    let status = response.status();
    let ok = response.ok();
    let text = response
        .text()
        .await
        .map_err(|e| FetchError::network(format!("Failed to read response: {}", e)))?;
    classify(status, ok, &text, error_bodies)
}

/// Non-2xx statuses are `Network` errors, malformed bodies `Parse` errors.
pub fn classify(status: u16, ok: bool, text: &str, error_bodies: ErrorBodies) -> Result<Value, FetchError> {
    let http_error = || FetchError::network(format!("HTTP error: {}", status));
    if !ok && error_bodies == ErrorBodies::Reject {
        return Err(http_error());
    }
    match serde_json::from_str::<Value>(text) {
        Ok(value) => Ok(value),
        Err(_) if !ok => Err(http_error()),
        Err(e) => Err(FetchError::parse(format!("Failed to parse response: {}", e))),
    }
}

/// Fakes standing in for the backend in tests.
#[cfg(test)]
pub mod testing {
    use super::*;
    use futures::channel::oneshot;
    use std::cell::RefCell;
    use std::collections::HashMap;

    /// Answers every path with a canned response and records each call.
    #[derive(Default)]
    pub struct StaticFetcher {
        responses: HashMap<String, Result<Value, FetchError>>,
        pub calls: RefCell<Vec<String>>,
    }

    impl StaticFetcher {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn respond(mut self, path: &str, response: Result<Value, FetchError>) -> Self {
            self.responses.insert(path.to_string(), response);
            self
        }

        pub fn calls_to(&self, path: &str) -> Vec<String> {
            self.calls
                .borrow()
                .iter()
                .filter(|url| url.split('?').next() == Some(path))
                .cloned()
                .collect()
        }
    }

    #[async_trait(?Send)]
    impl DataFetcher for StaticFetcher {
        async fn get_json(&self, path: &str, query: &QueryBuilder) -> Result<Value, FetchError> {
            self.calls.borrow_mut().push(with_query(path, query));
            self.responses
                .get(path)
                .cloned()
                .unwrap_or_else(|| Err(FetchError::network("HTTP error: 404")))
        }
    }

    /// Holds every request open until the test resolves it.
    #[derive(Default)]
    pub struct GatedFetcher {
        pending: RefCell<Vec<(String, oneshot::Sender<Result<Value, FetchError>>)>>,
    }

    impl GatedFetcher {
        pub fn pending_count(&self) -> usize {
            self.pending.borrow().len()
        }

        /// Resolve the `nth` still-open request to `path`, oldest first.
        pub fn resolve(&self, path: &str, nth: usize, response: Result<Value, FetchError>) -> bool {
            let mut pending = self.pending.borrow_mut();
            let position = pending
                .iter()
                .enumerate()
                .filter(|(_, (url, _))| url.split('?').next() == Some(path))
                .map(|(i, _)| i)
                .nth(nth);
            match position {
                Some(i) => {
                    let (_, sender) = pending.remove(i);
                    sender.send(response).is_ok()
                }
                None => false,
            }
        }

        /// Resolve everything still open with the same response.
        pub fn resolve_all(&self, response: Result<Value, FetchError>) {
            let pending: Vec<_> = self.pending.borrow_mut().drain(..).collect();
            for (_, sender) in pending {
                let _ = sender.send(response.clone());
            }
        }
    }

    #[async_trait(?Send)]
    impl DataFetcher for GatedFetcher {
        async fn get_json(&self, path: &str, query: &QueryBuilder) -> Result<Value, FetchError> {
            let (sender, receiver) = oneshot::channel();
            self.pending.borrow_mut().push((with_query(path, query), sender));
            receiver
                .await
                .unwrap_or_else(|_| Err(FetchError::network("request dropped")))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::dashboards::d400_sales_overview::LabeledSeries;
    use serde_json::json;

    #[test]
    fn test_decode_shape_mismatch_is_parse_error() {
        let err = decode::<LabeledSeries>(json!({ "labels": "jan" })).unwrap_err();
        assert_eq!(err.kind, FetchErrorKind::Parse);
    }

    #[test]
    fn test_classify_valid_json() {
        let value = classify(200, true, r#"{"labels": ["jan"]}"#, ErrorBodies::Reject).unwrap();
        assert_eq!(value, json!({ "labels": ["jan"] }));
    }

    #[test]
    fn test_classify_malformed_json_is_parse_error() {
        let err = classify(200, true, "{not json", ErrorBodies::Reject).unwrap_err();
        assert_eq!(err.kind, FetchErrorKind::Parse);
    }

    #[test]
    fn test_classify_error_status_is_network_error() {
        let err = classify(500, false, "<h1>Internal Server Error</h1>", ErrorBodies::Reject).unwrap_err();
        assert_eq!(err, FetchError::network("HTTP error: 500"));

        let err = classify(404, false, r#"{"labels": []}"#, ErrorBodies::Reject).unwrap_err();
        assert_eq!(err.kind, FetchErrorKind::Network);

        let err = classify(502, false, "Bad Gateway", ErrorBodies::Keep).unwrap_err();
        assert_eq!(err, FetchError::network("HTTP error: 502"));
    }

    #[test]
    fn test_classify_keeps_json_error_body() {
        let value = classify(400, false, r#"{"error": "Nenhum arquivo enviado"}"#, ErrorBodies::Keep).unwrap();
        assert_eq!(value["error"], "Nenhum arquivo enviado");
    }

    #[test]
    fn test_display() {
        let err = FetchError::network("HTTP error: 500");
        assert_eq!(err.to_string(), "network error: HTTP error: 500");
        assert!(FetchError::application("Arquivo sem nome").is_application());
    }
}
