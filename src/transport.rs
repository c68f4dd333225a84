//! HTTP transport seam
//!
//! [`crate::ShortcutClient`] builds an [`ApiRequest`] per call and hands it to
//! a [`Transport`]. The default [`ReqwestTransport`] uses a blocking reqwest
//! client; tests or callers with special networking needs can plug in their
//! own implementation.

use std::time::Duration;

use reqwest::blocking::multipart::{Form, Part};
use reqwest::blocking::Client as HttpClient;
use reqwest::Method;
use serde_json::Value;

use crate::error::{Result, ShortcutError};

/// A fully resolved HTTP request
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    /// Absolute URL, without the query string
    pub url: String,
    pub query: Vec<(String, String)>,
    pub headers: Vec<(&'static str, String)>,
    pub body: Option<RequestBody>,
    /// Overrides the transport's default timeout for this request
    pub timeout: Option<Duration>,
}

impl ApiRequest {
    pub fn new(method: Method, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            query: Vec::new(),
            headers: Vec::new(),
            body: None,
            timeout: None,
        }
    }
}

/// Payload of an [`ApiRequest`]
#[derive(Debug, Clone, PartialEq)]
pub enum RequestBody {
    Json(Value),
    /// `multipart/form-data`, only used for file uploads
    Multipart(Vec<FormPart>),
}

impl RequestBody {
    pub fn is_multipart(&self) -> bool {
        matches!(self, Self::Multipart(_))
    }
}

/// One field of a multipart form
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormPart {
    Text {
        name: String,
        value: String,
    },
    File {
        name: String,
        file_name: String,
        content_type: Option<String>,
        bytes: Vec<u8>,
    },
}

fn build_form(parts: &[FormPart]) -> Result<Form> {
    let mut form = Form::new();
    for part in parts {
        form = match part {
            FormPart::Text { name, value } => form.text(name.clone(), value.clone()),
            FormPart::File {
                name,
                file_name,
                content_type,
                bytes,
            } => {
                let mut file = Part::bytes(bytes.clone()).file_name(file_name.clone());
                if let Some(mime) = content_type {
                    file = file.mime_str(mime).map_err(|e| {
                        ShortcutError::invalid_argument(format!("Invalid content type `{}`: {}", mime, e))
                    })?;
                }
                form.part(name.clone(), file)
            }
        };
    }
    Ok(form)
}

/// Status and raw body of a completed exchange
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl ApiResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Body as text, lossy for invalid UTF-8
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

/// Sends one request and returns whatever status the server answered with.
///
/// Implementations must only fail when no status was obtained (connect, DNS,
/// TLS, timeout). Non-2xx responses are returned as `Ok`.
pub trait Transport: Send + Sync {
    fn send(&self, request: ApiRequest) -> Result<ApiResponse>;
}

/// [`Transport`] over `reqwest::blocking::Client`
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    http_client: HttpClient,
}

impl ReqwestTransport {
    pub fn new(timeout: Duration, connect_timeout: Duration) -> Result<Self> {
        let http_client = HttpClient::builder()
            .timeout(timeout)
            .connect_timeout(connect_timeout)
            .build()
            .map_err(|e| ShortcutError::Config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { http_client })
    }

    /// Wraps an already configured reqwest client
    pub fn from_client(http_client: HttpClient) -> Self {
        Self { http_client }
    }
}

impl Transport for ReqwestTransport {
    fn send(&self, request: ApiRequest) -> Result<ApiResponse> {
        let mut builder = self.http_client.request(request.method.clone(), &request.url);

        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }
        for (name, value) in &request.headers {
            builder = builder.header(*name, value);
        }
        if let Some(timeout) = request.timeout {
            builder = builder.timeout(timeout);
        }
        match &request.body {
            Some(RequestBody::Json(body)) => builder = builder.body(serde_json::to_vec(body)?),
            Some(RequestBody::Multipart(parts)) => builder = builder.multipart(build_form(parts)?),
            None => {}
        }

        let response = builder.send().map_err(|e| {
            tracing::warn!("{} {} failed before a response: {}", request.method, request.url, e);
            ShortcutError::TransportFailure(e)
        })?;

        let status = response.status().as_u16();
        let body = response.bytes().map_err(|e| {
            tracing::warn!("{} {} failed reading the body: {}", request.method, request.url, e);
            ShortcutError::TransportFailure(e)
        })?;

        Ok(ApiResponse {
            status,
            body: body.to_vec(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_success_range() {
        let ok = ApiResponse { status: 204, body: Vec::new() };
        let moved = ApiResponse { status: 301, body: Vec::new() };
        assert!(ok.is_success());
        assert!(!moved.is_success());
    }

    #[test]
    fn test_response_text_lossy() {
        let response = ApiResponse {
            status: 500,
            body: vec![b'o', b'k', 0xff],
        };
        assert_eq!(response.text(), "ok\u{fffd}");
    }

    #[test]
    fn test_build_form_rejects_bad_mime() {
        let parts = vec![FormPart::File {
            name: "file0".to_string(),
            file_name: "a.txt".to_string(),
            content_type: Some("not a mime".to_string()),
            bytes: b"a".to_vec(),
        }];
        assert!(matches!(
            build_form(&parts),
            Err(ShortcutError::ValidationFailed { status: None, .. })
        ));
    }

    #[test]
    fn test_transport_creation() {
        assert!(ReqwestTransport::new(Duration::from_secs(30), Duration::from_secs(5)).is_ok());
    }
}
