//! Client configuration for the dispatch boundary.
//!
//! The translator itself never touches the network. Whoever performs the
//! HTTP call builds a [`ClientConfig`] once and passes it explicitly;
//! [`ClientConfig::prepare`] turns a [`RestRequest`] into the URL, headers
//! and JSON body that call needs.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::request::{Body, Method, RestRequest};

/// Errors raised while building a [`ClientConfig`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The base URL is not an absolute `http://` or `https://` URL.
    #[error("Invalid base URL '{0}': expected an http:// or https:// URL")]
    InvalidBaseUrl(String),

    /// The configuration document could not be parsed.
    #[error("Invalid configuration: {0}")]
    Json(#[from] serde_json::Error),
}

/// Connection settings of the REST endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    base_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    api_key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    schema: Option<String>,
}

impl ClientConfig {
    /// Creates a configuration for `base_url`, e.g. `https://db.example.com/rest/v1`.
    ///
    /// A trailing `/` is removed.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidBaseUrl`] if the URL does not start with
    /// `http://` or `https://` followed by a host.
    pub fn new(base_url: impl Into<String>) -> Result<Self, ConfigError> {
        let base_url = validate_base_url(base_url.into())?;
        Ok(Self {
            base_url,
            api_key: None,
            schema: None,
        })
    }

    /// Parses a JSON configuration document and validates it.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Json`] for malformed JSON and
    /// [`ConfigError::InvalidBaseUrl`] for a bad `base_url`.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        let base_url = validate_base_url(config.base_url)?;
        Ok(Self { base_url, ..config })
    }

    /// Sets the API key sent as `apikey` and bearer token.
    #[must_use]
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Sets the database schema selected through the profile headers.
    #[must_use]
    pub fn with_schema(mut self, schema: impl Into<String>) -> Self {
        self.schema = Some(schema.into());
        self
    }

    /// Returns the base URL without a trailing `/`.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns the API key, if any.
    #[must_use]
    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref()
    }

    /// Returns the schema, if any.
    #[must_use]
    pub fn schema(&self) -> Option<&str> {
        self.schema.as_deref()
    }

    /// Builds the full HTTP call for `request`.
    ///
    /// Query tokens already have their reserved characters encoded; spaces,
    /// control characters and non-ASCII text in the target are
    /// percent-encoded here.
    #[must_use]
    pub fn prepare(&self, request: &RestRequest) -> PreparedRequest {
        let mut headers = BTreeMap::new();
        if let Some(key) = &self.api_key {
            headers.insert(String::from("apikey"), key.clone());
            headers.insert(String::from("Authorization"), format!("Bearer {key}"));
        }
        if let Some(schema) = &self.schema {
            let name = if request.method.has_body() {
                "Content-Profile"
            } else {
                "Accept-Profile"
            };
            headers.insert(String::from(name), schema.clone());
        }
        if request.body.is_some() {
            headers.insert(
                String::from("Content-Type"),
                String::from("application/json"),
            );
            headers.insert(
                String::from("Prefer"),
                String::from("return=representation"),
            );
        }

        PreparedRequest {
            method: request.method,
            url: format!("{}{}", self.base_url, encode_url_text(&request.target())),
            headers,
            body: request.body.clone(),
        }
    }
}

/// A fully resolved HTTP call, ready to hand to an HTTP client.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PreparedRequest {
    /// HTTP method.
    pub method: Method,
    /// Absolute URL including the query string.
    pub url: String,
    /// Request headers, sorted by name.
    pub headers: BTreeMap<String, String>,
    /// JSON body for POST and PATCH, columns in statement order.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<Body>,
}

/// Percent-encodes every byte that may not appear literally in a URL.
fn encode_url_text(s: &str) -> String {
    s.bytes()
        .map(|b| {
            if b.is_ascii_graphic() && !b"\"<>\\^`{|}".contains(&b) {
                char::from(b).to_string()
            } else {
                format!("%{b:02X}")
            }
        })
        .collect()
}

fn validate_base_url(url: String) -> Result<String, ConfigError> {
    let trimmed = url.trim().trim_end_matches('/');
    let host = trimmed
        .strip_prefix("https://")
        .or_else(|| trimmed.strip_prefix("http://"));
    match host {
        Some(rest) if !rest.is_empty() && !rest.starts_with('/') => Ok(String::from(trimmed)),
        _ => Err(ConfigError::InvalidBaseUrl(url)),
    }
}
