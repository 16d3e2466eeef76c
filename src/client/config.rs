//! Transport configuration.

use std::collections::BTreeMap;

/// Configuration for a [`PlugClient`](crate::client::PlugClient).
///
/// # Examples
///
/// ```
/// use plug_http::client::ClientConfig;
///
/// let config = ClientConfig {
///     user_agent: "my-service/2.0".to_string(),
///     ..Default::default()
/// };
/// assert!(config.enable_logging);
/// ```
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// `User-Agent` sent with every request.
    pub user_agent: String,

    /// Headers applied to every request before the plug's own headers.
    /// A plug header with the same name wins.
    pub default_headers: BTreeMap<String, String>,

    /// Emit `tracing` debug events for fired and completed requests.
    pub enable_logging: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        ClientConfig {
            user_agent: concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")).to_string(),
            default_headers: BTreeMap::new(),
            enable_logging: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ClientConfig::default();
        assert!(config.user_agent.starts_with("plug_http/"));
        assert!(config.default_headers.is_empty());
        assert!(config.enable_logging);
    }
}
