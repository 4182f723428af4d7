//! HTTP transport for the Tribuna backend.
//!
//! Every request goes through this one stateless door: header policy,
//! JSON/text response normalization, and the mapping of non-2xx statuses to
//! structured errors all live here. Auth retry policy does not; that is the
//! session's job. The transport is safe to share and call concurrently.

use std::time::{Duration, Instant};

use reqwest::{Client, Method};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, instrument, warn};

use tribuna_core::defaults;
use tribuna_core::error::{Error, ErrorBody, Result};

use crate::config::ClientConfig;

/// Request body accepted by the transport.
#[derive(Debug)]
pub enum Body {
    /// No body.
    Empty,
    /// JSON payload; the transport sets `Content-Type: application/json`.
    Json(Value),
    /// Multipart payload. Content-Type (with its boundary) is left to the
    /// HTTP layer. Not replayable, so the session's auth retry skips it.
    Multipart(reqwest::multipart::Form),
}

impl Body {
    /// Serialize a value into a JSON body.
    pub fn json<T: Serialize>(value: &T) -> Result<Self> {
        let value = serde_json::to_value(value).map_err(|e| Error::parse("request body", e))?;
        Ok(Body::Json(value))
    }

    /// Clone for a retried attempt. Multipart streams cannot be replayed.
    pub fn try_clone(&self) -> Option<Self> {
        match self {
            Body::Empty => Some(Body::Empty),
            Body::Json(value) => Some(Body::Json(value.clone())),
            Body::Multipart(_) => None,
        }
    }
}

/// Normalized response payload: JSON when the response declared JSON,
/// raw text otherwise.
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    Json(Value),
    Text(String),
}

impl Payload {
    /// Decode into a typed value. Schema violations become tagged `Parse`
    /// errors carrying the decode context, never untyped casts.
    pub fn decode<T: DeserializeOwned>(self, context: &str) -> Result<T> {
        match self {
            Payload::Json(value) => {
                serde_json::from_value(value).map_err(|e| Error::parse(context, e))
            }
            Payload::Text(_) => Err(Error::parse(context, "expected a JSON response body")),
        }
    }

    /// Extract the raw JSON value, for endpoints whose payload the client
    /// deliberately leaves untyped.
    pub fn into_json(self, context: &str) -> Result<Value> {
        match self {
            Payload::Json(value) => Ok(value),
            Payload::Text(_) => Err(Error::parse(context, "expected a JSON response body")),
        }
    }
}

/// Stateless HTTP transport bound to one base URL.
#[derive(Debug, Clone)]
pub struct Transport {
    client: Client,
    base_url: String,
}

impl Transport {
    /// Build a transport from the configuration.
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .build()
            .map_err(|e| Error::Config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// The base URL this transport targets (no trailing slash).
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Issue a request.
    ///
    /// - `Accept: application/json` is always sent.
    /// - `Authorization: Bearer <token>` is attached when a token is given.
    /// - `timeout` overrides the configured default for this call only.
    ///   Cancellation is dropping the returned future.
    ///
    /// The response body is parsed as JSON when the response content type
    /// says JSON, otherwise returned as text. Any non-2xx status fails with
    /// [`Error::Api`] carrying the parsed body verbatim.
    #[instrument(
        skip(self, query, body, token, timeout),
        fields(subsystem = "transport", component = "http", op = %method, path = %path)
    )]
    pub async fn request(
        &self,
        method: Method,
        path: &str,
        query: &[(&'static str, String)],
        body: Body,
        token: Option<&str>,
        timeout: Option<Duration>,
    ) -> Result<Payload> {
        let start = Instant::now();
        let url = format!("{}{}", self.base_url, path);

        let mut req = self
            .client
            .request(method, url)
            .header("Accept", "application/json");

        if !query.is_empty() {
            req = req.query(query);
        }

        req = match body {
            Body::Empty => req,
            Body::Json(value) => req.header("Content-Type", "application/json").json(&value),
            Body::Multipart(form) => req.multipart(form),
        };

        if let Some(token) = token {
            req = req.header("Authorization", format!("Bearer {}", token));
        }

        if let Some(timeout) = timeout {
            req = req.timeout(timeout);
        }

        let response = req.send().await?;

        let status = response.status();
        let content_type = response
            .headers()
            .get("Content-Type")
            .and_then(|v| v.to_str().ok())
            .unwrap_or("")
            .to_string();

        let payload = if is_json_content_type(&content_type) {
            let value: Value = response
                .json()
                .await
                .map_err(|e| Error::parse("response body", e))?;
            Payload::Json(value)
        } else {
            Payload::Text(response.text().await?)
        };

        let elapsed = start.elapsed().as_millis();
        debug!(
            status = status.as_u16(),
            duration_ms = elapsed as u64,
            "Request complete"
        );
        if elapsed > defaults::SLOW_REQUEST_MS {
            warn!(
                status = status.as_u16(),
                duration_ms = elapsed as u64,
                slow = true,
                "Slow request"
            );
        }

        if !status.is_success() {
            let body = match payload {
                Payload::Json(value) => ErrorBody::Json(value),
                Payload::Text(text) => ErrorBody::Text(text),
            };
            return Err(Error::Api {
                status: status.as_u16(),
                body,
            });
        }

        Ok(payload)
    }
}

/// True when a Content-Type header value indicates a JSON body.
fn is_json_content_type(value: &str) -> bool {
    let essence = match value.split(';').next() {
        Some(e) => e.trim().to_ascii_lowercase(),
        None => return false,
    };
    essence == "application/json" || essence.ends_with("+json")
}
