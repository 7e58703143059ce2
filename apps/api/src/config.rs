use std::path::PathBuf;

use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Every setting has a default, so an empty environment yields a working service.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Account whose profile and repositories are shown on the page.
    pub github_username: String,
    pub github_api_url: String,
    /// Base of the public profile link shown when the fetch fails.
    pub github_web_url: String,
    pub contact_delay_ms: u64,
    /// Optional JSON file replacing the embedded content catalog.
    pub content_path: Option<PathBuf>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            github_username: env_or("GITHUB_USERNAME", "dangi-ai"),
            github_api_url: trim_slash(env_or("GITHUB_API_URL", "https://api.github.com")),
            github_web_url: trim_slash(env_or("GITHUB_WEB_URL", "https://github.com")),
            contact_delay_ms: std::env::var("CONTACT_DELAY_MS")
                .unwrap_or_else(|_| "1500".to_string())
                .parse::<u64>()
                .context("CONTACT_DELAY_MS must be a whole number of milliseconds")?,
            content_path: std::env::var("CONTENT_PATH")
                .ok()
                .filter(|p| !p.trim().is_empty())
                .map(PathBuf::from),
        })
    }

    /// Public profile page for the configured account.
    pub fn github_profile_url(&self) -> String {
        format!("{}/{}", self.github_web_url, self.github_username)
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| default.to_string())
}

fn trim_slash(url: String) -> String {
    url.trim_end_matches('/').to_string()
}

#[cfg(test)]
pub(crate) fn test_config() -> Config {
    Config {
        port: 0,
        rust_log: "debug".to_string(),
        github_username: "dangi-ai".to_string(),
        github_api_url: "http://127.0.0.1:1".to_string(),
        github_web_url: "https://github.com".to_string(),
        contact_delay_ms: 1500,
        content_path: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_url_joins_web_url_and_username() {
        let config = test_config();
        assert_eq!(config.github_profile_url(), "https://github.com/dangi-ai");
    }

    #[test]
    fn test_trim_slash_removes_trailing_slashes() {
        assert_eq!(
            trim_slash("https://api.github.com/".to_string()),
            "https://api.github.com"
        );
        assert_eq!(trim_slash("http://x".to_string()), "http://x");
    }
}
