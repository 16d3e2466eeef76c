//! Canonical query parameter map.
//!
//! The query string of a [`Plug`](crate::Plug) is never edited in place. Every
//! mutation decodes the current query into a [`QueryParams`], changes the map,
//! and writes back its canonical encoding:
//!
//! - `application/x-www-form-urlencoded` (`+` for spaces)
//! - keys in sorted order, regardless of insertion order
//! - values of a repeated key kept in the order they appeared
//! - bytes outside `A-Z a-z 0-9 * - . _` are percent-encoded, so `~` becomes
//!   `%7E` while `*` is left as-is
//!
//! # Examples
//!
//! ```
//! use plug_http::query::QueryParams;
//!
//! let mut params = QueryParams::parse(Some("b=2&a=1"));
//! params.set("c", "three 3");
//! assert_eq!(params.encode().as_deref(), Some("a=1&b=2&c=three+3"));
//! ```

use std::collections::BTreeMap;
use url::form_urlencoded;

/// Decoded query parameters, ordered by key.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    params: BTreeMap<String, Vec<String>>,
}

impl QueryParams {
    /// Create an empty parameter map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode a raw query string (without the leading `?`).
    pub fn parse(query: Option<&str>) -> Self {
        let mut params: BTreeMap<String, Vec<String>> = BTreeMap::new();
        if let Some(query) = query {
            for (key, value) in form_urlencoded::parse(query.as_bytes()) {
                params
                    .entry(key.into_owned())
                    .or_default()
                    .push(value.into_owned());
            }
        }
        QueryParams { params }
    }

    /// First value stored for `name`.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.params
            .get(name)
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// All values stored for `name`.
    pub fn get_all(&self, name: &str) -> &[String] {
        self.params.get(name).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Replace every value of `name` with `value`.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.params.insert(name.into(), vec![value.into()]);
    }

    /// Remove every value of `name`. Returns `false` if the key was absent.
    pub fn remove(&mut self, name: &str) -> bool {
        self.params.remove(name).is_some()
    }

    /// Whether `name` is present.
    pub fn contains(&self, name: &str) -> bool {
        self.params.contains_key(name)
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.params.len()
    }

    /// Whether the map holds no keys.
    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// Canonical encoding, or `None` when there is nothing to encode.
    pub fn encode(&self) -> Option<String> {
        if self.params.is_empty() {
            return None;
        }

        let mut serializer = form_urlencoded::Serializer::new(String::new());
        for (key, values) in &self.params {
            for value in values {
                serializer.append_pair(key, value);
            }
        }
        Some(serializer.finish())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_empty() {
        assert!(QueryParams::parse(None).is_empty());
        assert!(QueryParams::parse(Some("")).is_empty());
        assert_eq!(QueryParams::new().encode(), None);
    }

    #[test]
    fn test_parse_decodes_values() {
        let params = QueryParams::parse(Some("q=hello+world&path=%2Fa%2Fb"));
        assert_eq!(params.get("q"), Some("hello world"));
        assert_eq!(params.get("path"), Some("/a/b"));
        assert_eq!(params.get("missing"), None);
    }

    #[test]
    fn test_repeated_keys_keep_order() {
        let params = QueryParams::parse(Some("a=2&a=1&b=x"));
        assert_eq!(params.get("a"), Some("2"));
        assert_eq!(params.get_all("a"), &["2".to_string(), "1".to_string()]);
        assert_eq!(params.encode().as_deref(), Some("a=2&a=1&b=x"));
    }

    #[test]
    fn test_set_replaces_all_values() {
        let mut params = QueryParams::parse(Some("a=1&a=2"));
        params.set("a", "3");
        assert_eq!(params.get_all("a"), &["3".to_string()]);
    }

    #[test]
    fn test_encode_sorts_keys() {
        let mut params = QueryParams::new();
        params.set("zeta", "1");
        params.set("alpha", "2");
        params.set("mid", "a&b=c");
        assert_eq!(
            params.encode().as_deref(),
            Some("alpha=2&mid=a%26b%3Dc&zeta=1")
        );
    }

    #[test]
    fn test_encode_tilde_and_star() {
        let mut params = QueryParams::new();
        params.set("path", "a~b*c");
        assert_eq!(params.encode().as_deref(), Some("path=a%7Eb*c"));
        assert_eq!(
            QueryParams::parse(params.encode().as_deref()).get("path"),
            Some("a~b*c")
        );
    }

    #[test]
    fn test_remove() {
        let mut params = QueryParams::parse(Some("a=1&b=2"));
        assert!(params.remove("a"));
        assert!(!params.remove("a"));
        assert!(!params.contains("a"));
        assert_eq!(params.len(), 1);
        assert_eq!(params.encode().as_deref(), Some("b=2"));
    }
}
