//! The transport behind every fired plug request.
//!
//! [`PlugClient`] is a thin wrapper over [`reqwest::Client`]. A plug never talks
//! to reqwest directly: it snapshots its URL and headers and hands them to
//! [`PlugClient::perform`], which builds the request, executes it and folds
//! every failure into [`PlugError::Request`].
//!
//! # Examples
//!
//! ```ignore
//! use plug_http::client::{ClientConfig, PlugClient};
//! use plug_http::Plug;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = PlugClient::with_config(ClientConfig {
//!         enable_logging: false,
//!         ..Default::default()
//!     });
//!     let plug = Plug::new("http://example.com")?.with_client(client);
//!     let response = plug.get().await?;
//!     println!("Status: {}", response.status());
//!     Ok(())
//! }
//! ```

use crate::client::config::ClientConfig;
use crate::error::{PlugError, Result};
use bytes::Bytes;
use http::header::CONTENT_TYPE;
use http::Method;
use std::collections::BTreeMap;
use std::sync::{Arc, OnceLock};

/// A request body together with its content type.
#[derive(Debug, Clone)]
pub struct Payload {
    /// Raw body bytes.
    pub data: Bytes,
    /// Value sent as the `Content-Type` header.
    pub content_type: String,
}

impl Payload {
    /// Create a payload from anything convertible into [`Bytes`].
    pub fn new(data: impl Into<Bytes>, content_type: impl Into<String>) -> Self {
        Payload {
            data: data.into(),
            content_type: content_type.into(),
        }
    }
}

/// HTTP transport used by plugs.
///
/// Cloning is cheap; clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct PlugClient {
    client: reqwest::Client,
    config: Arc<ClientConfig>,
}

impl PlugClient {
    /// Create a client with default configuration
    ///
    /// Each call builds a separate connection pool. Plugs created with
    /// [`Plug::new`](crate::Plug::new) use [`PlugClient::shared`] instead.
    pub fn new() -> Self {
        Self::with_config(ClientConfig::default())
    }

    /// The process-wide default client, built on first use.
    ///
    /// Every call returns a handle to the same connection pool.
    pub fn shared() -> Self {
        static SHARED: OnceLock<PlugClient> = OnceLock::new();
        SHARED.get_or_init(PlugClient::new).clone()
    }

    /// Create a client with custom configuration
    ///
    /// If the configured reqwest client cannot be built (for example an
    /// invalid user agent), a warning is logged and reqwest's defaults
    /// are used.
    pub fn with_config(config: ClientConfig) -> Self {
        match Self::try_with_config(config.clone()) {
            Ok(client) => client,
            Err(e) => {
                tracing::warn!("Falling back to default HTTP client: {}", e);
                PlugClient {
                    client: reqwest::Client::default(),
                    config: Arc::new(config),
                }
            }
        }
    }

    /// Create a client with custom configuration, reporting build failures.
    pub fn try_with_config(config: ClientConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(config.user_agent.as_str())
            .build()?;

        Ok(PlugClient {
            client,
            config: Arc::new(config),
        })
    }

    /// Wrap a caller-built reqwest client.
    ///
    /// The client's own settings (timeouts, proxies, TLS) are used as-is;
    /// only `default_headers` and `enable_logging` from `config` apply.
    pub fn from_reqwest(client: reqwest::Client, config: ClientConfig) -> Self {
        PlugClient {
            client,
            config: Arc::new(config),
        }
    }

    /// Whether both handles share one connection pool and config.
    pub fn same_transport(&self, other: &PlugClient) -> bool {
        Arc::ptr_eq(&self.config, &other.config)
    }

    /// Get the client configuration
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Build a request from a snapshot of a plug.
    ///
    /// Headers are layered as: config defaults, then `headers`, then the
    /// payload's content type. Later layers replace earlier ones by exact
    /// name; the content type replaces any `Content-Type` regardless of case.
    pub fn build_request(
        &self,
        method: Method,
        url: &str,
        headers: &BTreeMap<String, String>,
        payload: Option<Payload>,
    ) -> Result<reqwest::Request> {
        let mut merged = self.config.default_headers.clone();
        merged.extend(headers.iter().map(|(k, v)| (k.clone(), v.clone())));

        let mut req_builder = self.client.request(method, url);

        if let Some(payload) = payload {
            merged.retain(|name, _| !name.eq_ignore_ascii_case(CONTENT_TYPE.as_str()));
            req_builder = req_builder
                .header(CONTENT_TYPE, payload.content_type)
                .body(payload.data);
        }

        for (k, v) in &merged {
            req_builder = req_builder.header(k.as_str(), v.as_str());
        }

        req_builder.build().map_err(PlugError::from)
    }

    /// Execute an already built request.
    pub async fn execute(&self, request: reqwest::Request) -> Result<reqwest::Response> {
        self.client.execute(request).await.map_err(PlugError::from)
    }

    /// Build and execute one request, logging the result when enabled.
    pub async fn perform(
        &self,
        method: Method,
        url: &str,
        headers: &BTreeMap<String, String>,
        payload: Option<Payload>,
    ) -> Result<reqwest::Response> {
        if self.config.enable_logging {
            tracing::debug!("Firing {} {}", method, url);
        }

        let result = match self.build_request(method.clone(), url, headers, payload) {
            Ok(request) => self.execute(request).await,
            Err(e) => Err(e),
        };

        if self.config.enable_logging {
            match &result {
                Ok(response) => {
                    tracing::debug!("{} {} completed with {}", method, url, response.status())
                }
                Err(e) => tracing::debug!("{} {} failed: {}", method, url, e),
            }
        }

        result
    }
}

impl Default for PlugClient {
    fn default() -> Self {
        Self::new()
    }
}
