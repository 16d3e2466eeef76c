//! HTTP transport and fired-request handles.
//!
//! A [`Plug`](crate::Plug) only describes a request. This module owns
//! everything that happens once a request is fired:
//!
//! ```text
//! client/
//! ├── config   - ClientConfig (user agent, default headers, logging)
//! ├── fetch    - PlugClient and Payload: build and execute requests
//! └── outcome  - PendingOutcome: the single-use result handle
//! ```
//!
//! # Key Types
//!
//! | Type | Description |
//! |------|-------------|
//! | [`PlugClient`] | Shared transport wrapping `reqwest::Client` |
//! | [`ClientConfig`] | Client configuration options |
//! | [`Payload`] | Request body plus content type |
//! | [`PendingOutcome`] | Future resolving to exactly one [`Outcome`] |
//!
//! # Examples
//!
//! ## Creating a Client
//!
//! ```
//! use plug_http::client::{ClientConfig, PlugClient};
//!
//! // Default configuration
//! let client = PlugClient::new();
//!
//! // Custom configuration
//! let config = ClientConfig {
//!     enable_logging: false,
//!     ..Default::default()
//! };
//! let client = PlugClient::with_config(config);
//! assert!(!client.config().enable_logging);
//! ```

mod config;
mod fetch;
mod outcome;

pub use config::ClientConfig;
pub use fetch::{Payload, PlugClient};
pub use outcome::{Outcome, PendingOutcome};
