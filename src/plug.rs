//! The mutable request builder.
//!
//! A [`Plug`] holds a URL and a header map. Every `at*`/`with*` method mutates
//! the plug in place and returns `&mut Self`, so calls chain:
//!
//! ```
//! use plug_http::Plug;
//!
//! let mut plug = Plug::new("http://test.dev")?;
//! plug.at(["api", "v1"])
//!     .at(["users"])
//!     .with("limit", "10")
//!     .with_header("Accept", "application/json");
//!
//! assert_eq!(plug.to_string(), "http://test.dev/api/v1/users?limit=10");
//! # Ok::<(), plug_http::PlugError>(())
//! ```
//!
//! Fire methods ([`get`](Plug::get), [`post`](Plug::post), ...) take `&self`,
//! snapshot the URL and headers, and return a [`PendingOutcome`]. Mutating
//! the plug afterwards has no effect on requests already fired.
//!
//! Two owners that need to diverge should each hold a [`Clone`]; the clone
//! copies the URL and headers and shares only the transport.

use crate::client::{Payload, PendingOutcome, PlugClient};
use crate::error::Result;
use crate::query::QueryParams;
use bytes::Bytes;
use http::Method;
use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use url::Url;

/// Characters escaped in path text; `/` passes through as a separator.
const PATH_TEXT_ENCODE_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'\\')
    .add(b'^')
    .add(b'`')
    .add(b'{')
    .add(b'|')
    .add(b'}');

/// Fluent, mutable HTTP request builder.
#[derive(Debug, Clone)]
pub struct Plug {
    url: Url,
    headers: BTreeMap<String, String>,
    client: PlugClient,
}

impl Plug {
    /// Parse `url` and create a plug for it.
    ///
    /// # Errors
    ///
    /// Returns [`PlugError::Parse`](crate::PlugError::Parse) when `url` is not
    /// a valid absolute URL.
    pub fn new(url: &str) -> Result<Self> {
        Ok(Self::from_url(Url::parse(url)?))
    }

    /// Create a plug for an already parsed URL.
    ///
    /// The plug fires through the process-wide [`PlugClient::shared`]
    /// transport; use [`with_client`](Plug::with_client) to override it.
    pub fn from_url(url: Url) -> Self {
        Plug {
            url,
            headers: BTreeMap::new(),
            client: PlugClient::shared(),
        }
    }

    /// Use `client` for every request fired from this plug.
    pub fn with_client(mut self, client: PlugClient) -> Self {
        self.client = client;
        self
    }

    /// The transport used by fire methods.
    pub fn client(&self) -> &PlugClient {
        &self.client
    }

    /// The current URL.
    pub fn url(&self) -> &Url {
        &self.url
    }

    /// Append path segments.
    ///
    /// A single `/` is inserted first when the current path does not already
    /// end with one; the segments are then joined with `/`.
    ///
    /// Segments are literal text: `%`, `\`, `?`, `#`, spaces and other
    /// characters not allowed in a path are percent-encoded. A `/` inside a
    /// segment is kept and acts as a separator. `.` and `..` segments are
    /// still resolved by URL parsing, so `at(["..", "x"])` on `/a` gives `/x`.
    ///
    /// ```
    /// use plug_http::Plug;
    ///
    /// let mut plug = Plug::new("http://test.dev/base")?;
    /// plug.at(["a", "b"]).at(["c"]);
    /// assert_eq!(plug.to_string(), "http://test.dev/base/a/b/c");
    /// # Ok::<(), plug_http::PlugError>(())
    /// ```
    pub fn at<I, S>(&mut self, segments: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut path = self.url.path().to_string();
        if !path.ends_with('/') {
            path.push('/');
        }

        for (i, segment) in segments.into_iter().enumerate() {
            if i > 0 {
                path.push('/');
            }
            path.extend(utf8_percent_encode(segment.as_ref(), PATH_TEXT_ENCODE_SET));
        }

        self.url.set_path(&path);
        self
    }

    /// Replace the whole path.
    ///
    /// `path` is literal text, escaped the same way as [`at`](Plug::at)
    /// segments. On URLs with a host, a missing leading `/` is added, so
    /// `"a/b"` and `"/a/b"` produce the same URL.
    pub fn at_path(&mut self, path: &str) -> &mut Self {
        let encoded = utf8_percent_encode(path, PATH_TEXT_ENCODE_SET).to_string();
        if self.url.has_host() && !encoded.starts_with('/') {
            self.url.set_path(&format!("/{}", encoded));
        } else {
            self.url.set_path(&encoded);
        }
        self
    }

    /// Set the user-info to `username` with no password.
    pub fn with_user(&mut self, username: &str) -> &mut Self {
        self.set_credentials(username, None)
    }

    /// Set the user-info to `username:password`.
    pub fn with_user_password(&mut self, username: &str, password: &str) -> &mut Self {
        self.set_credentials(username, Some(password))
    }

    fn set_credentials(&mut self, username: &str, password: Option<&str>) -> &mut Self {
        // Both setters only fail when the URL has no host to attach credentials to.
        if self.url.set_username(username).is_err() || self.url.set_password(password).is_err() {
            tracing::warn!("Cannot set credentials on URL without a host: {}", self.url);
        }
        self
    }

    /// Set or overwrite a header.
    pub fn with_header(&mut self, name: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    /// Remove a header. No-op when absent.
    pub fn without_header(&mut self, name: &str) -> &mut Self {
        self.headers.remove(name);
        self
    }

    /// Value of a header, matched by exact name.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).map(String::as_str)
    }

    /// All headers set on this plug.
    pub fn headers(&self) -> &BTreeMap<String, String> {
        &self.headers
    }

    /// Decoded query parameters of the current URL.
    pub fn query(&self) -> QueryParams {
        QueryParams::parse(self.url.query())
    }

    /// Set or overwrite a query parameter.
    ///
    /// Any earlier values for `name` are replaced. The query string is
    /// re-encoded with keys in sorted order.
    pub fn with(&mut self, name: &str, value: &str) -> &mut Self {
        self.update_query(|params| {
            params.set(name, value);
            true
        })
    }

    /// Set several query parameters at once.
    ///
    /// The order of `params` does not affect the encoded result.
    pub fn with_params<I, K, V>(&mut self, params: I) -> &mut Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.update_query(|query| {
            for (name, value) in params {
                query.set(name, value);
            }
            true
        })
    }

    /// First value of a query parameter, or an empty string when absent.
    pub fn get_param(&self, name: &str) -> String {
        self.query().get(name).unwrap_or_default().to_string()
    }

    /// Remove a query parameter. No-op when absent.
    pub fn without(&mut self, name: &str) -> &mut Self {
        self.update_query(|params| params.remove(name))
    }

    fn update_query<F>(&mut self, update: F) -> &mut Self
    where
        F: FnOnce(&mut QueryParams) -> bool,
    {
        let mut params = self.query();
        if update(&mut params) {
            self.url.set_query(params.encode().as_deref());
        }
        self
    }

    /// Fire a HEAD request.
    pub fn head(&self) -> PendingOutcome {
        self.send(Method::HEAD, None)
    }

    /// Fire a GET request.
    pub fn get(&self) -> PendingOutcome {
        self.send(Method::GET, None)
    }

    /// Fire a POST request with `body` sent as `content_type`.
    pub fn post(&self, body: impl Into<Bytes>, content_type: &str) -> PendingOutcome {
        self.send(Method::POST, Some(Payload::new(body, content_type)))
    }

    /// Fire a PUT request with `body` sent as `content_type`.
    pub fn put(&self, body: impl Into<Bytes>, content_type: &str) -> PendingOutcome {
        self.send(Method::PUT, Some(Payload::new(body, content_type)))
    }

    /// Fire a DELETE request without a body.
    pub fn delete(&self) -> PendingOutcome {
        self.send(Method::DELETE, None)
    }

    /// Fire a DELETE request with `body` sent as `content_type`.
    pub fn delete_with_body(&self, body: impl Into<Bytes>, content_type: &str) -> PendingOutcome {
        self.send(Method::DELETE, Some(Payload::new(body, content_type)))
    }

    /// Fire a request with any method.
    ///
    /// The URL and headers are captured before this returns; the request
    /// itself runs on a spawned Tokio task. Build and transport failures both
    /// resolve to [`PlugError::Request`](crate::PlugError::Request).
    ///
    /// # Panics
    ///
    /// Panics when called outside a Tokio runtime.
    pub fn send(&self, method: Method, payload: Option<Payload>) -> PendingOutcome {
        let url = self.url.to_string();
        let headers = self.headers.clone();
        let client = self.client.clone();

        PendingOutcome::spawn(async move { client.perform(method, &url, &headers, payload).await })
    }
}

impl fmt::Display for Plug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.url, f)
    }
}

impl From<Url> for Plug {
    fn from(url: Url) -> Self {
        Plug::from_url(url)
    }
}

impl FromStr for Plug {
    type Err = crate::error::PlugError;

    fn from_str(s: &str) -> Result<Self> {
        Plug::new(s)
    }
}

impl TryFrom<&str> for Plug {
    type Error = crate::error::PlugError;

    fn try_from(s: &str) -> Result<Self> {
        Plug::new(s)
    }
}
