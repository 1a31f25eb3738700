use std::time::Duration;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";
pub const API_BASE_URL_ENV: &str = "API_BASE_URL";

#[derive(Debug, Clone)]
pub struct Config {
    pub api_base_url: String,
    pub request_timeout: Duration,
    pub logger_timezone: chrono::FixedOffset,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            request_timeout: Duration::from_secs(60),
            logger_timezone: utc(),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::resolve(None)
    }

    /// Base URL precedence: explicit override > environment > default.
    /// A blank value at one tier falls through to the next.
    pub fn resolve(api_base_url: Option<String>) -> Self {
        let api_base_url = api_base_url
            .and_then(non_blank)
            .or_else(|| std::env::var(API_BASE_URL_ENV).ok().and_then(non_blank))
            .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string());

        Self {
            api_base_url: api_base_url.trim_end_matches('/').to_string(),
            ..Self::default()
        }
    }
}

fn non_blank(url: String) -> Option<String> {
    let url = url.trim();
    if url.is_empty() {
        None
    } else {
        Some(url.to_string())
    }
}

fn utc() -> chrono::FixedOffset {
    chrono::FixedOffset::east_opt(0).unwrap()
}

#[cfg(test)]
mod config_test {
    use super::*;

    #[test]
    fn test_default_base_url() {
        assert_eq!(Config::default().api_base_url, DEFAULT_API_BASE_URL);
    }

    // Env mutation lives in this one test so parallel tests never race on it.
    #[test]
    fn test_base_url_precedence() {
        std::env::set_var(API_BASE_URL_ENV, "http://env.example.com");

        let from_override = Config::resolve(Some("http://override.example.com".to_string()));
        assert_eq!(from_override.api_base_url, "http://override.example.com");

        let from_env = Config::resolve(None);
        assert_eq!(from_env.api_base_url, "http://env.example.com");

        let blank_override = Config::resolve(Some("   ".to_string()));
        assert_eq!(blank_override.api_base_url, "http://env.example.com");

        std::env::set_var(API_BASE_URL_ENV, "   ");
        let blank_env = Config::resolve(None);
        assert_eq!(blank_env.api_base_url, DEFAULT_API_BASE_URL);

        std::env::remove_var(API_BASE_URL_ENV);
        let nothing_set = Config::resolve(Some("   ".to_string()));
        assert_eq!(nothing_set.api_base_url, DEFAULT_API_BASE_URL);
    }

    #[test]
    fn test_trailing_slash_is_trimmed() {
        let config = Config::resolve(Some("http://api.example.com/".to_string()));
        assert_eq!(config.api_base_url, "http://api.example.com");
    }
}
