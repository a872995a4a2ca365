//! Client configuration and tuning constants.

use std::time::Duration;

/// Quiet period before a list fetch fires.
pub const DEBOUNCE_DELAY: Duration = Duration::from_millis(500);

/// Page size of the admin article table.
pub const ADMIN_ARTICLE_LIMIT: u32 = 10;

/// Page size of the reader article grid.
pub const USER_ARTICLE_LIMIT: u32 = 9;

/// Page size of the category table.
pub const CATEGORY_LIMIT: u32 = 10;

/// Page size used to load category options for dropdowns.
pub const CATEGORY_OPTIONS_LIMIT: u32 = 100;

/// Page size used to load the candidate pool for related articles.
pub const RELATED_POOL_LIMIT: u32 = 100;

/// Maximum related articles shown under a detail view.
pub const RELATED_MAX: usize = 3;

/// Key under which the bearer token is persisted.
pub const TOKEN_STORAGE_KEY: &str = "pressdesk.token";

/// Where the API lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    api_base: String,
}

impl ClientConfig {
    /// Build from a base URL such as `http://localhost:5000/api`. Trailing
    /// slashes are dropped so paths can be appended verbatim.
    pub fn new(api_base: impl Into<String>) -> Self {
        let raw = api_base.into();
        Self {
            api_base: raw.trim().trim_end_matches('/').to_string(),
        }
    }

    /// Normalized base URL without trailing slash.
    pub fn api_base(&self) -> &str {
        &self.api_base
    }

    /// Absolute URL for an API path beginning with `/`.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.api_base, path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slashes_are_trimmed() {
        let config = ClientConfig::new(" http://localhost:5000/api// ");
        assert_eq!(config.api_base(), "http://localhost:5000/api");
        assert_eq!(config.endpoint("/articles"), "http://localhost:5000/api/articles");
    }
}
