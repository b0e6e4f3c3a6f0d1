//! Query-string construction for list endpoints.

use std::fmt::Display;

/// Ordered, URL-encoded query parameters.
#[derive(Debug, Clone, Default)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a parameter
    pub fn push(&mut self, key: &str, value: impl Display) -> &mut Self {
        self.pairs.push((key.to_string(), value.to_string()));
        self
    }

    /// Append a parameter only when a value is present
    pub fn push_opt<V: Display>(&mut self, key: &str, value: Option<V>) -> &mut Self {
        if let Some(value) = value {
            self.push(key, value);
        }
        self
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// `?a=1&b=2`, or an empty string when there are no parameters
    pub fn to_query_string(&self) -> String {
        if self.pairs.is_empty() {
            return String::new();
        }

        let encoded: Vec<String> = self
            .pairs
            .iter()
            .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
            .collect();
        format!("?{}", encoded.join("&"))
    }

    /// Append the query string to an endpoint path
    pub fn to_endpoint(&self, path: &str) -> String {
        format!("{}{}", path, self.to_query_string())
    }
}

/// Page and page size for paginated listings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u32,
    pub limit: u32,
}

impl PageRequest {
    pub fn new(page: u32, limit: u32) -> Self {
        Self { page, limit }
    }

    pub fn apply(&self, params: &mut QueryParams) {
        params.push("page", self.page);
        params.push("limit", self.limit);
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self { page: 1, limit: 20 }
    }
}
