//! # HTTP transport — bearer-header injection and error-body decoding
//!
//! [`Transport`] is the one place requests leave the client. It wraps a
//! [`reqwest::Client`], the backend base URL, and a shared bearer-credential
//! cell. Every request attaches `Authorization: Bearer <token>` while the
//! cell is populated; [`Transport::set_bearer`] / [`Transport::clear_bearer`]
//! update the cell for every clone at once, so all collaborators observe a
//! credential change immediately.
//!
//! Non-2xx responses are decoded into an [`ErrorBody`]: the backend reports
//! failures either as `{"detail": "..."}` or as a field→messages map
//! (`{"username": ["already taken"]}`). The per-operation conversion helpers
//! on [`TransportError`] turn that into the public [`ApiError`] taxonomy.

use std::sync::{Arc, Mutex};

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::ApiConfig;
use crate::error::ApiError;

/// Shared HTTP transport. Clones share the bearer cell.
#[derive(Clone, Debug)]
pub struct Transport {
    http: reqwest::Client,
    base_url: String,
    bearer: Arc<Mutex<Option<String>>>,
}

impl Transport {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: config.base_url,
            bearer: Arc::new(Mutex::new(None)),
        }
    }

    /// Attach `token` to every subsequent request, across all clones.
    pub fn set_bearer(&self, token: &str) {
        *self.bearer.lock().unwrap() = Some(token.to_string());
    }

    /// Stop attaching a credential to outgoing requests.
    pub fn clear_bearer(&self) {
        *self.bearer.lock().unwrap() = None;
    }

    /// The currently configured credential, if any.
    pub fn bearer(&self) -> Option<String> {
        self.bearer.lock().unwrap().clone()
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }

    fn request(&self, method: reqwest::Method, path: &str) -> reqwest::RequestBuilder {
        let mut req = self.http.request(method, self.url(path));
        if let Some(token) = self.bearer() {
            req = req.bearer_auth(token);
        }
        req
    }

    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, TransportError> {
        execute(self.request(reqwest::Method::GET, path)).await
    }

    pub(crate) async fn post<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, TransportError> {
        execute(self.request(reqwest::Method::POST, path).json(body)).await
    }

    pub(crate) async fn patch<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, TransportError> {
        execute(self.request(reqwest::Method::PATCH, path).json(body)).await
    }

    /// POST where only the status matters; the response body is discarded.
    pub(crate) async fn post_unit<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<(), TransportError> {
        let resp = self
            .request(reqwest::Method::POST, path)
            .json(body)
            .send()
            .await
            .map_err(|err| TransportError::Network(err.to_string()))?;
        let status = resp.status();
        if status.is_success() {
            Ok(())
        } else {
            let text = resp.text().await.unwrap_or_default();
            Err(TransportError::Rejected {
                status: status.as_u16(),
                body: ErrorBody::parse(&text),
            })
        }
    }
}

async fn execute<T: DeserializeOwned>(req: reqwest::RequestBuilder) -> Result<T, TransportError> {
    let resp = req
        .send()
        .await
        .map_err(|err| TransportError::Network(err.to_string()))?;
    let status = resp.status();
    if status.is_success() {
        resp.json::<T>()
            .await
            .map_err(|err| TransportError::Decode(err.to_string()))
    } else {
        let text = resp.text().await.unwrap_or_default();
        Err(TransportError::Rejected {
            status: status.as_u16(),
            body: ErrorBody::parse(&text),
        })
    }
}

/// Structured form of a non-2xx response body.
#[derive(Debug, Clone, Default, PartialEq)]
pub(crate) struct ErrorBody {
    pub detail: Option<String>,
    pub fields: Vec<(String, String)>,
}

impl ErrorBody {
    pub fn parse(text: &str) -> Self {
        let Ok(value) = serde_json::from_str::<serde_json::Value>(text) else {
            return Self::default();
        };
        let Some(map) = value.as_object() else {
            return Self::default();
        };

        let mut body = Self::default();
        for (key, val) in map {
            if key == "detail" {
                if let Some(s) = val.as_str() {
                    body.detail = Some(s.to_string());
                }
                continue;
            }
            let message = match val {
                serde_json::Value::String(s) => Some(s.clone()),
                serde_json::Value::Array(items) => {
                    let msgs: Vec<&str> = items.iter().filter_map(|v| v.as_str()).collect();
                    if msgs.is_empty() {
                        None
                    } else {
                        Some(msgs.join(", "))
                    }
                }
                _ => None,
            };
            if let Some(message) = message {
                body.fields.push((key.clone(), message));
            }
        }
        body
    }

    /// One `"field: message"` line per rejected field.
    pub fn field_summary(&self) -> Option<String> {
        if self.fields.is_empty() {
            return None;
        }
        Some(
            self.fields
                .iter()
                .map(|(field, message)| format!("{field}: {message}"))
                .collect::<Vec<_>>()
                .join("\n"),
        )
    }
}

/// Transport-level failure, converted into [`ApiError`] at each operation
/// boundary.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum TransportError {
    Network(String),
    Decode(String),
    Rejected { status: u16, body: ErrorBody },
}

impl TransportError {
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Rejected { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn detail(&self) -> Option<&str> {
        match self {
            Self::Rejected { body, .. } => body.detail.as_deref(),
            _ => None,
        }
    }

    fn take_detail(self) -> Option<String> {
        match self {
            Self::Rejected { body, .. } => body.detail,
            _ => None,
        }
    }

    /// Auth failure: the server's `detail` when present, else `fallback`.
    pub fn into_auth(self, fallback: &str) -> ApiError {
        ApiError::Auth(self.take_detail().unwrap_or_else(|| fallback.to_string()))
    }

    /// Validation failure: field-by-field summary, then `detail`, then
    /// `fallback`.
    pub fn into_validation(self, fallback: &str) -> ApiError {
        match self {
            Self::Rejected { body, .. } => {
                if let Some(summary) = body.field_summary() {
                    ApiError::Validation(summary)
                } else if let Some(detail) = body.detail {
                    ApiError::Validation(detail)
                } else {
                    ApiError::Validation(fallback.to_string())
                }
            }
            _ => ApiError::Validation(fallback.to_string()),
        }
    }

    pub fn into_profile(self, fallback: &str) -> ApiError {
        ApiError::Profile(self.take_detail().unwrap_or_else(|| fallback.to_string()))
    }

    /// Generic mapping for reads and flows without a dedicated message.
    pub fn into_fetch(self) -> ApiError {
        match self {
            Self::Network(msg) | Self::Decode(msg) => ApiError::Network(msg),
            Self::Rejected { status, body } => ApiError::Status {
                status,
                detail: body.detail,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_detail_body() {
        let body = ErrorBody::parse(r#"{"detail":"No active account found with the given credentials"}"#);
        assert_eq!(
            body.detail.as_deref(),
            Some("No active account found with the given credentials")
        );
        assert!(body.fields.is_empty());
    }

    #[test]
    fn test_parse_field_map_body() {
        let body = ErrorBody::parse(
            r#"{"username":["A user with that username already exists."],"email":["Enter a valid email address."]}"#,
        );
        assert!(body.detail.is_none());
        let summary = body.field_summary().unwrap();
        assert!(summary.contains("username: A user with that username already exists."));
        assert!(summary.contains("email: Enter a valid email address."));
    }

    #[test]
    fn test_parse_string_field_and_multiple_messages() {
        let body = ErrorBody::parse(r#"{"password":"too short","email":["taken","invalid"]}"#);
        let summary = body.field_summary().unwrap();
        assert!(summary.contains("password: too short"));
        assert!(summary.contains("email: taken, invalid"));
    }

    #[test]
    fn test_parse_non_json_body() {
        assert_eq!(ErrorBody::parse("<html>502</html>"), ErrorBody::default());
        assert_eq!(ErrorBody::parse(""), ErrorBody::default());
    }

    #[test]
    fn test_into_auth_prefers_detail() {
        let err = TransportError::Rejected {
            status: 401,
            body: ErrorBody::parse(r#"{"detail":"nope"}"#),
        };
        assert_eq!(err.into_auth("generic"), ApiError::Auth("nope".to_string()));

        let err = TransportError::Network("connection refused".to_string());
        assert_eq!(err.into_auth("generic"), ApiError::Auth("generic".to_string()));
    }

    #[test]
    fn test_into_validation_joins_fields() {
        let err = TransportError::Rejected {
            status: 400,
            body: ErrorBody::parse(r#"{"username":["A user with that username already exists."]}"#),
        };
        let ApiError::Validation(message) = err.into_validation("generic") else {
            panic!("expected validation error");
        };
        assert!(message.contains("username"));
    }

    #[test]
    fn test_bearer_cell_shared_across_clones() {
        let transport = Transport::new(ApiConfig::new("https://example.test/api"));
        let clone = transport.clone();

        transport.set_bearer("tok");
        assert_eq!(clone.bearer().as_deref(), Some("tok"));

        clone.clear_bearer();
        assert!(transport.bearer().is_none());
    }

    #[test]
    fn test_url_join() {
        let transport = Transport::new(ApiConfig::new("https://example.test/api/"));
        assert_eq!(transport.url("/events/"), "https://example.test/api/events/");
    }
}
