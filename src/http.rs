//! JSON-over-HTTP wrapper around the CMS REST API.
//!
//! Centralizing request construction keeps header and timeout handling
//! consistent, and the `Api` trait is the seam that lets the authenticator and
//! phase runner be exercised against a scripted in-memory implementation.
use serde_json::Value;
use std::time::Duration;
use thiserror::Error;
use ureq::Agent;

/// Per-request timeout; hung requests are aborted rather than retried.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Parsed response from a 2xx call.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    pub status: u16,
    pub body: Value,
}

/// Failure classes the workflow branches on.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("server unreachable at {url} ({reason})")]
    Unreachable { url: String, reason: String },

    #[error("request to {url} timed out after {}s", REQUEST_TIMEOUT.as_secs())]
    Timeout { url: String },

    #[error("transport error for {url}: {source}")]
    Transport {
        url: String,
        #[source]
        source: Box<ureq::Error>,
    },

    #[error("{method} {path} returned HTTP {status}{}", remote_detail(.name, .message))]
    Status {
        method: &'static str,
        path: String,
        status: u16,
        name: Option<String>,
        message: Option<String>,
    },
}

impl ApiError {
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Errors that abort a run outright: HTTP 405 (token lacks configured
    /// permissions) or an explicit remote authentication failure.
    pub fn is_auth_failure(&self) -> bool {
        match self {
            ApiError::Status { status, message, .. } => {
                *status == 405 || message.as_deref() == Some("Authentication failed")
            }
            _ => false,
        }
    }

    /// Errors where the server never produced an HTTP response.
    pub fn is_connectivity(&self) -> bool {
        matches!(
            self,
            ApiError::Unreachable { .. } | ApiError::Timeout { .. } | ApiError::Transport { .. }
        )
    }
}

fn remote_detail(name: &Option<String>, message: &Option<String>) -> String {
    match (name.as_deref(), message.as_deref()) {
        (Some(name), Some(message)) => format!(" ({name}: {message})"),
        (Some(name), None) => format!(" ({name})"),
        (None, Some(message)) => format!(" ({message})"),
        (None, None) => String::new(),
    }
}

/// The seam between the workflow and the network.
///
/// `path` is always relative to the base URL and `token`, when present, is
/// attached as a bearer credential.
pub trait Api {
    fn get(&self, path: &str, token: Option<&str>) -> Result<ApiResponse, ApiError>;
    fn post(&self, path: &str, token: Option<&str>, body: &Value) -> Result<ApiResponse, ApiError>;
    fn put(&self, path: &str, token: Option<&str>, body: &Value) -> Result<ApiResponse, ApiError>;
}

/// Format a bearer authorization header value.
pub fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

/// Blocking HTTP client for one CMS instance.
pub struct ApiClient {
    agent: Agent,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Self {
        let config = Agent::config_builder()
            .timeout_global(Some(REQUEST_TIMEOUT))
            .http_status_as_error(false)
            .build();
        Self {
            agent: Agent::new_with_config(config),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    fn execute(
        &self,
        method: &'static str,
        path: &str,
        token: Option<&str>,
        body: Option<&Value>,
    ) -> Result<ApiResponse, ApiError> {
        let url = self.url(path);
        let result = match (method, body) {
            ("GET", _) => {
                let mut request = self.agent.get(&url);
                if let Some(token) = token {
                    request = request.header("Authorization", bearer(token));
                }
                request.call()
            }
            ("POST", Some(body)) => {
                let mut request = self.agent.post(&url);
                if let Some(token) = token {
                    request = request.header("Authorization", bearer(token));
                }
                request.send_json(body)
            }
            ("PUT", Some(body)) => {
                let mut request = self.agent.put(&url);
                if let Some(token) = token {
                    request = request.header("Authorization", bearer(token));
                }
                request.send_json(body)
            }
            _ => unreachable!("{method} requests always carry a body"),
        };

        let mut response = result.map_err(|err| map_transport_error(&url, err))?;
        let status = response.status().as_u16();
        let text = response
            .body_mut()
            .read_to_string()
            .map_err(|err| map_transport_error(&url, err))?;
        let body = parse_body(text);

        if (200..300).contains(&status) {
            Ok(ApiResponse { status, body })
        } else {
            Err(status_error(method, path, status, &body))
        }
    }
}

impl Api for ApiClient {
    fn get(&self, path: &str, token: Option<&str>) -> Result<ApiResponse, ApiError> {
        self.execute("GET", path, token, None)
    }

    fn post(&self, path: &str, token: Option<&str>, body: &Value) -> Result<ApiResponse, ApiError> {
        self.execute("POST", path, token, Some(body))
    }

    fn put(&self, path: &str, token: Option<&str>, body: &Value) -> Result<ApiResponse, ApiError> {
        self.execute("PUT", path, token, Some(body))
    }
}

fn map_transport_error(url: &str, err: ureq::Error) -> ApiError {
    match err {
        ureq::Error::Timeout(_) => ApiError::Timeout {
            url: url.to_string(),
        },
        ureq::Error::HostNotFound => ApiError::Unreachable {
            url: url.to_string(),
            reason: "host not found".to_string(),
        },
        ureq::Error::ConnectionFailed => ApiError::Unreachable {
            url: url.to_string(),
            reason: "connection failed".to_string(),
        },
        ureq::Error::Io(err) => ApiError::Unreachable {
            url: url.to_string(),
            reason: err.to_string(),
        },
        other => ApiError::Transport {
            url: url.to_string(),
            source: Box::new(other),
        },
    }
}

fn parse_body(text: String) -> Value {
    if text.trim().is_empty() {
        return Value::Null;
    }
    match serde_json::from_str(&text) {
        Ok(value) => value,
        Err(_) => Value::String(text),
    }
}

/// Map a non-2xx response to a typed error, lifting the remote error
/// name/message when the body carries the CMS error envelope.
fn status_error(method: &'static str, path: &str, status: u16, body: &Value) -> ApiError {
    let error = body.get("error");
    let name = error
        .and_then(|e| e.get("name"))
        .and_then(Value::as_str)
        .map(str::to_string);
    let message = error
        .and_then(|e| e.get("message"))
        .and_then(Value::as_str)
        .map(str::to_string);
    ApiError::Status {
        method,
        path: path.to_string(),
        status,
        name,
        message,
    }
}
