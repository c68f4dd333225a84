//! HTTP client for the Shortcut API

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use reqwest::Method;
use serde::Serialize;
use serde_json::Value;

use crate::config::ClientConfig;
use crate::error::{Result, ShortcutError};
use crate::transport::{ApiRequest, ApiResponse, FormPart, RequestBody, ReqwestTransport, Transport};
use crate::types::Record;

const JSON_CONTENT_TYPE: &str = "application/json; charset=utf-8";

/// Client for the Shortcut REST API v3
///
/// Each method issues exactly one blocking request. The client is cheap to
/// clone and can be shared across threads.
///
/// # Timeouts
///
/// - Total: 30s (see [`ClientConfig::timeout`])
/// - Connect: 5s
/// - Per call: [`ShortcutClient::with_timeout`]
#[derive(Clone)]
pub struct ShortcutClient {
    config: Arc<ClientConfig>,
    transport: Arc<dyn Transport>,
    timeout: Option<Duration>,
}

impl ShortcutClient {
    /// Creates a client for the public API with default settings
    pub fn new(api_token: impl Into<String>) -> Result<Self> {
        Self::with_config(ClientConfig::new(api_token))
    }

    pub fn with_config(config: ClientConfig) -> Result<Self> {
        config.validate()?;
        let transport = ReqwestTransport::new(config.timeout, config.connect_timeout)?;
        Ok(Self {
            config: Arc::new(config),
            transport: Arc::new(transport),
            timeout: None,
        })
    }

    /// Uses a caller supplied transport instead of reqwest
    pub fn with_transport(config: ClientConfig, transport: Arc<dyn Transport>) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config: Arc::new(config),
            transport,
            timeout: None,
        })
    }

    /// Builds a client from `config/shortcut.*` and `SHORTCUT_*` variables
    pub fn from_env() -> Result<Self> {
        Self::with_config(ClientConfig::from_env()?)
    }

    /// Returns a clone whose requests use `timeout` instead of the default
    pub fn with_timeout(&self, timeout: Duration) -> Self {
        Self {
            timeout: Some(timeout),
            ..self.clone()
        }
    }

    pub fn token(&self) -> &str {
        &self.config.api_token
    }

    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub(crate) fn url(&self, endpoint: &str) -> String {
        format!("{}{}", self.config.base_url.trim_end_matches('/'), endpoint)
    }

    /// Multipart bodies carry their own boundary in `Content-Type`
    fn headers(&self, body: Option<&RequestBody>) -> Vec<(&'static str, String)> {
        let mut headers = vec![("Shortcut-Token", self.config.api_token.clone())];
        if !body.is_some_and(RequestBody::is_multipart) {
            headers.push(("Content-Type", JSON_CONTENT_TYPE.to_string()));
        }
        headers.push(("Accept", JSON_CONTENT_TYPE.to_string()));
        headers.push(("User-Agent", self.config.user_agent.clone()));
        headers
    }

    /// Sends one request and maps non-2xx answers to errors
    fn execute(
        &self,
        method: Method,
        url: String,
        query: Vec<(String, String)>,
        body: Option<RequestBody>,
    ) -> Result<ApiResponse> {
        tracing::debug!("{} {}", method, url);

        let request = ApiRequest {
            method,
            url,
            query,
            headers: self.headers(body.as_ref()),
            body,
            timeout: self.timeout,
        };
        let response = self.transport.send(request)?;
        self.handle_response(response)
    }

    fn handle_response(&self, response: ApiResponse) -> Result<ApiResponse> {
        if response.is_success() {
            return Ok(response);
        }

        let body = response.text();
        tracing::error!("Shortcut API error ({}): {}", response.status, body);
        Err(ShortcutError::from_status(response.status, body))
    }

    fn decode<T: Record>(response: ApiResponse) -> Result<T> {
        let value: Value = serde_json::from_slice(&response.body)
            .map_err(|e| ShortcutError::from_decode(e, response.text()))?;
        T::from_json(value).map_err(|e| e.with_raw_body(response.text()))
    }

    fn encode<B: Serialize>(body: &B) -> Result<RequestBody> {
        Ok(RequestBody::Json(serde_json::to_value(body)?))
    }

    pub(crate) fn get<T: Record>(&self, endpoint: &str) -> Result<T> {
        self.get_query(endpoint, Vec::new())
    }

    pub(crate) fn get_query<T: Record>(&self, endpoint: &str, query: Vec<(String, String)>) -> Result<T> {
        let response = self.execute(Method::GET, self.url(endpoint), query, None)?;
        Self::decode(response)
    }

    /// GET against an absolute URL, used to follow pagination cursors
    pub(crate) fn get_url<T: Record>(&self, url: String) -> Result<T> {
        let response = self.execute(Method::GET, url, Vec::new(), None)?;
        Self::decode(response)
    }

    pub(crate) fn post<B: Serialize, T: Record>(&self, endpoint: &str, body: &B) -> Result<T> {
        let body = Self::encode(body)?;
        let response = self.execute(Method::POST, self.url(endpoint), Vec::new(), Some(body))?;
        Self::decode(response)
    }

    pub(crate) fn put<B: Serialize, T: Record>(&self, endpoint: &str, body: &B) -> Result<T> {
        let body = Self::encode(body)?;
        let response = self.execute(Method::PUT, self.url(endpoint), Vec::new(), Some(body))?;
        Self::decode(response)
    }

    /// DELETE; any 2xx counts as success and the body is ignored
    pub(crate) fn delete(&self, endpoint: &str) -> Result<()> {
        self.send_unit(Method::DELETE, endpoint, None::<&Value>)
    }

    /// Request whose 2xx answer carries nothing of interest
    pub(crate) fn send_unit<B: Serialize>(&self, method: Method, endpoint: &str, body: Option<&B>) -> Result<()> {
        let body = body.map(|b| Self::encode(b)).transpose()?;
        self.execute(method, self.url(endpoint), Vec::new(), body)?;
        Ok(())
    }

    pub(crate) fn post_multipart<T: Record>(&self, endpoint: &str, parts: Vec<FormPart>) -> Result<T> {
        let response = self.execute(Method::POST, self.url(endpoint), Vec::new(), Some(RequestBody::Multipart(parts)))?;
        Self::decode(response)
    }

    /// Turns a pagination cursor into an absolute URL.
    ///
    /// Cursors are either full URLs or paths rooted at the host
    /// (`/api/v3/search/stories?...`).
    pub(crate) fn resolve_cursor(&self, cursor: &str) -> Result<String> {
        if cursor.contains("://") || cursor.starts_with('/') {
            let base = url::Url::parse(&self.config.base_url)
                .map_err(|e| ShortcutError::Config(format!("Invalid base URL `{}`: {}", self.config.base_url, e)))?;
            let resolved = base
                .join(cursor)
                .map_err(|e| ShortcutError::invalid_argument(format!("Invalid pagination cursor `{}`: {}", cursor, e)))?;
            Ok(resolved.to_string())
        } else {
            Ok(self.url(&format!("/{}", cursor)))
        }
    }
}

impl fmt::Debug for ShortcutClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ShortcutClient")
            .field("config", &self.config)
            .field("timeout", &self.timeout)
            .finish_non_exhaustive()
    }
}
