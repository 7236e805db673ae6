//! Backend endpoint configuration.

const DEFAULT_BASE_URL: &str = "https://maravilla-backend.onrender.com/api";

/// Where the client sends its requests.
///
/// The base URL can be overridden at build time with the `MARAVILLA_API_URL`
/// environment variable (useful for pointing a dev build at a local backend).
#[derive(Debug, Clone, PartialEq)]
pub struct ApiConfig {
    pub base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: option_env!("MARAVILLA_API_URL")
                .unwrap_or(DEFAULT_BASE_URL)
                .to_string(),
        }
    }
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }
}
