#![warn(missing_docs)]

//! # plug_http: a fluent, mutable HTTP request builder
//!
//! A [`Plug`] wraps a URL and a set of headers. Chainable methods append path
//! segments, set or remove query parameters, and set headers and user-info.
//! Fire methods send the request on a spawned Tokio task and hand back a
//! [`PendingOutcome`] that resolves to exactly one [`Outcome`].
//!
//! ## Overview
//!
//! - **Path building** - [`Plug::at`] appends segments with a single `/`
//!   separator, [`Plug::at_path`] replaces the path
//! - **Query parameters** - [`Plug::with`], [`Plug::with_params`] and
//!   [`Plug::without`] keep the query in canonical, key-sorted form
//! - **Headers and credentials** - [`Plug::with_header`],
//!   [`Plug::with_user`], [`Plug::with_user_password`]
//! - **Fire methods** - `head`, `get`, `post`, `put`, `delete`,
//!   `delete_with_body`, or the general [`Plug::send`]
//! - **Independent copies** - [`Clone`] gives a fully separate builder
//!
//! ## Usage
//!
//! ```ignore
//! use plug_http::Plug;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut api = Plug::new("https://api.example.com")?;
//!     api.with_header("Accept", "application/json");
//!
//!     let mut users = api.clone();
//!     users.at(["v1", "users"]).with("page", "2");
//!
//!     let response = users.get().await?;
//!     println!("Status: {}", response.status());
//!
//!     let created = api
//!         .clone()
//!         .at(["v1", "users"])
//!         .post(r#"{"name":"ada"}"#, "application/json")
//!         .await?;
//!     println!("Created: {}", created.status());
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! [`Plug::new`] returns [`PlugError::Parse`] synchronously. Everything that
//! goes wrong after a request is fired, whether building it or sending it,
//! arrives as [`PlugError::Request`] inside the outcome. Nothing is retried.
//!
//! ## Module Structure
//!
//! - **[plug]** - The request builder
//! - **[query]** - Canonical query parameter map
//! - **[client]** - Transport, configuration and outcome handles
//! - **[error]** - Error types and result handling

pub mod client;
pub mod error;
pub mod plug;
pub mod query;

pub use client::{ClientConfig, Outcome, Payload, PendingOutcome, PlugClient};
pub use error::{PlugError, Result};
pub use plug::Plug;
pub use query::QueryParams;

#[cfg(test)]
mod tests;
