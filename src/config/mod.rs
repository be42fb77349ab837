/// Application configuration module
use std::env;
use std::time::Duration;

/// Public credential accepted by api.nasa.gov for low-volume use
pub const DEMO_API_KEY: &str = "DEMO_KEY";
pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_NASA_API_URL: &str = "https://api.nasa.gov";
pub const DEFAULT_EPIC_ARCHIVE_URL: &str = "https://epic.gsfc.nasa.gov/archive/natural";

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub port: u16,
    pub nasa_api_key: String,
    pub nasa_api_url: String,
    pub epic_archive_url: String,
    pub upstream_timeout: Option<Duration>,
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let nasa_api_key = or_default(env::var("NASA_API_KEY").ok(), DEMO_API_KEY);
        let nasa_api_url = or_default(env::var("NASA_API_URL").ok(), DEFAULT_NASA_API_URL);
        let epic_archive_url =
            or_default(env::var("EPIC_ARCHIVE_URL").ok(), DEFAULT_EPIC_ARCHIVE_URL);

        // unset means the transport default applies
        let upstream_timeout = env_parse::<u64>("UPSTREAM_TIMEOUT_SECONDS").map(Duration::from_secs);

        Ok(Self {
            port: env_parse("PORT").unwrap_or(DEFAULT_PORT),
            nasa_api_key,
            nasa_api_url: trim_base(nasa_api_url),
            epic_archive_url: trim_base(epic_archive_url),
            upstream_timeout,
        })
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            nasa_api_key: DEMO_API_KEY.to_string(),
            nasa_api_url: DEFAULT_NASA_API_URL.to_string(),
            epic_archive_url: DEFAULT_EPIC_ARCHIVE_URL.to_string(),
            upstream_timeout: None,
        }
    }
}

/// Unset and blank values both fall back to `default`
fn or_default(value: Option<String>, default: &str) -> String {
    value
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| default.to_string())
}

fn env_parse<T: std::str::FromStr>(key: &str) -> Option<T> {
    env::var(key).ok().and_then(|s| s.trim().parse().ok())
}

fn trim_base(url: String) -> String {
    url.trim_end_matches('/').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_uses_demo_key() {
        let config = AppConfig::default();
        assert_eq!(config.nasa_api_key, "DEMO_KEY");
        assert_eq!(config.port, 5000);
        assert!(config.upstream_timeout.is_none());
    }

    #[test]
    fn test_blank_values_fall_back_to_defaults() {
        assert_eq!(or_default(None, DEFAULT_NASA_API_URL), "https://api.nasa.gov");
        assert_eq!(
            or_default(Some("  ".to_string()), DEFAULT_NASA_API_URL),
            "https://api.nasa.gov"
        );
        assert_eq!(or_default(Some(String::new()), DEMO_API_KEY), "DEMO_KEY");
        assert_eq!(
            or_default(Some("http://localhost:8080".to_string()), DEFAULT_NASA_API_URL),
            "http://localhost:8080"
        );
    }

    #[test]
    fn test_trim_base_strips_trailing_slash() {
        assert_eq!(
            trim_base("https://api.nasa.gov/".to_string()),
            "https://api.nasa.gov"
        );
    }
}
