use anyhow::{Context, Result};
use reqwest::Client;

use crate::models::ApiUser;

/// Default base URL for the customer list API
pub const DEFAULT_ENDPOINT: &str = "https://jsonplaceholder.typicode.com";

/// Configuration for the customer list API client
#[derive(Debug, Clone)]
pub struct UsersApiConfig {
    /// Base URL of the API; "/users" is appended for the fetch
    pub base_url: String,
}

impl Default for UsersApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_ENDPOINT.to_string(),
        }
    }
}

impl UsersApiConfig {
    /// Create a config for a custom endpoint
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }
}

/// HTTP client for the customer list API
pub struct UsersClient {
    client: Client,
    config: UsersApiConfig,
}

impl UsersClient {
    pub fn new(config: UsersApiConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    /// Fetch the full user list as a JSON array
    pub async fn fetch_users(&self) -> Result<Vec<ApiUser>> {
        let url = format!("{}/users", self.config.base_url.trim_end_matches('/'));

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .with_context(|| format!("Failed to fetch user data from {}", url))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("User API error: {} - {}", status, body);
        }

        response
            .json::<Vec<ApiUser>>()
            .await
            .context("Failed to parse user list response")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = UsersApiConfig::default();
        assert_eq!(config.base_url, DEFAULT_ENDPOINT);
    }

    #[test]
    fn test_trailing_slash_is_tolerated() {
        let config = UsersApiConfig::new("http://localhost:8080/");
        let url = format!("{}/users", config.base_url.trim_end_matches('/'));
        assert_eq!(url, "http://localhost:8080/users");
    }
}
