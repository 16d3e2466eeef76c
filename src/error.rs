//! Error types for plug.
//!
//! There are exactly two failure kinds:
//!
//! | Variant | When | Delivered |
//! |---------|------|-----------|
//! | [`PlugError::Parse`] | The URL string given to [`Plug::new`](crate::Plug::new) is invalid | Synchronously |
//! | [`PlugError::Request`] | Building or executing a fired request failed | Inside the [`Outcome`](crate::Outcome) |
//!
//! Request construction failures (for example an invalid header name) and
//! transport failures are deliberately folded into the same variant.

use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, PlugError>;

/// Errors produced by a [`Plug`](crate::Plug).
#[derive(Debug, Error)]
pub enum PlugError {
    /// The URL string could not be parsed.
    #[error("URL parse error: {0}")]
    Parse(#[from] url::ParseError),

    /// The request could not be built or the HTTP call failed.
    #[error("request error: {0}")]
    Request(String),
}

impl PlugError {
    /// Returns `true` for construction-time URL parse failures.
    pub fn is_parse(&self) -> bool {
        matches!(self, PlugError::Parse(_))
    }

    /// Returns `true` for fire-time request failures.
    pub fn is_request(&self) -> bool {
        matches!(self, PlugError::Request(_))
    }
}

impl From<reqwest::Error> for PlugError {
    fn from(err: reqwest::Error) -> Self {
        PlugError::Request(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_from_url() {
        let err: PlugError = url::Url::parse("not a url").unwrap_err().into();
        assert!(err.is_parse());
        assert!(!err.is_request());
        assert!(err.to_string().starts_with("URL parse error"));
    }

    #[test]
    fn test_request_error_display() {
        let err = PlugError::Request("connection refused".to_string());
        assert!(err.is_request());
        assert_eq!(err.to_string(), "request error: connection refused");
    }
}
