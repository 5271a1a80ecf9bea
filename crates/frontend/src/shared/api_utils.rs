//! API utilities for frontend-backend communication
//!
//! Provides helpers for constructing API URLs and list-read query strings.

use contracts::shared::paging::PageRequest;

/// Get the base URL for API requests
///
/// Constructs the API base URL from the current window location,
/// using port 8080 for the billing backend.
///
/// # Returns
/// - API base URL like "http://localhost:8080" or "https://example.com:8080"
/// - Empty string if window is not available
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:8080", protocol, hostname)
}

/// Build a full API URL from a path
///
/// # Arguments
/// * `path` - The API path (should start with "/api/")
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

/// Ordered key/value pairs for a list-read query string.
///
/// Keys with no value are simply never pushed, so an unset filter is absent
/// from the request rather than sent as an empty string.
#[derive(Debug, Default)]
pub struct QueryPairs {
    pairs: Vec<(&'static str, String)>,
}

impl QueryPairs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pagination goes first on every list request.
    pub fn for_page(page: PageRequest) -> Self {
        let mut pairs = Self::new();
        pairs.push("pageNumber", page.page_number);
        pairs.push("pageSize", page.page_size);
        pairs
    }

    pub fn push(&mut self, key: &'static str, value: impl ToString) {
        self.pairs.push((key, value.to_string()));
    }

    pub fn push_opt(&mut self, key: &'static str, value: Option<impl ToString>) {
        if let Some(value) = value {
            self.pairs.push((key, value.to_string()));
        }
    }

    /// Push a text filter, skipping it when blank.
    pub fn push_text(&mut self, key: &'static str, value: &str) {
        let trimmed = value.trim();
        if !trimmed.is_empty() {
            self.pairs.push((key, trimmed.to_string()));
        }
    }

    pub fn contains(&self, key: &str) -> bool {
        self.pairs.iter().any(|(k, _)| *k == key)
    }

    /// Render as "?a=1&b=2", or "" when no pairs were pushed.
    pub fn into_query_string(self) -> String {
        if self.pairs.is_empty() {
            return String::new();
        }
        let encoded: Vec<String> = self
            .pairs
            .iter()
            .map(|(k, v)| format!("{}={}", k, urlencoding::encode(v)))
            .collect();
        format!("?{}", encoded.join("&"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pagination_pairs_come_first() {
        let pairs = QueryPairs::for_page(PageRequest::default());
        assert_eq!(pairs.into_query_string(), "?pageNumber=1&pageSize=10");
    }

    #[test]
    fn test_unset_filters_are_absent() {
        let mut pairs = QueryPairs::for_page(PageRequest::default());
        pairs.push_opt("status", None::<&str>);
        pairs.push_text("search", "   ");
        assert!(!pairs.contains("status"));
        assert_eq!(pairs.into_query_string(), "?pageNumber=1&pageSize=10");
    }

    #[test]
    fn test_values_are_percent_encoded() {
        let mut pairs = QueryPairs::new();
        pairs.push_text("search", "Main St & 5th");
        assert_eq!(pairs.into_query_string(), "?search=Main%20St%20%26%205th");
    }

    #[test]
    fn test_empty_builder_renders_empty() {
        assert_eq!(QueryPairs::new().into_query_string(), "");
    }
}
