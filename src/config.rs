use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::time::Duration;

/// The endpoint the fetcher targets when no configuration file overrides it
pub const DEFAULT_TARGET_URL: &str = "https://candfans.jp/api/contents/get-timeline/968402";

/// The client signature sent with every request
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64; rv:71.0) Gecko/20100101 Firefox/71.0";

/// Configuration for one fetch-and-print cycle
#[derive(Debug, Deserialize, Clone)]
pub struct FetchConfig {
    /// URL to navigate to
    #[serde(default = "default_target_url")]
    pub target_url: String,

    /// User agent the browser identifies itself with
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Additional request headers, e.g. a Referer if the endpoint ever
    /// requires one
    #[serde(default)]
    pub extra_headers: HashMap<String, String>,

    /// Deadline for the page to settle, in seconds
    #[serde(default = "default_quiescence_timeout")]
    pub quiescence_timeout_secs: u64,

    /// Quiet window after load completes, in milliseconds
    #[serde(default = "default_quiescence_window")]
    pub quiescence_window_ms: u64,

    /// Also print the derived HLS stream URL after the payload
    #[serde(default = "default_false")]
    pub emit_stream_url: bool,

    /// Run the browser headless
    #[serde(default = "default_true")]
    pub headless: bool,
}

fn default_target_url() -> String {
    DEFAULT_TARGET_URL.to_string()
}
fn default_user_agent() -> String {
    DEFAULT_USER_AGENT.to_string()
}
fn default_quiescence_timeout() -> u64 {
    30
}
fn default_quiescence_window() -> u64 {
    500
}
fn default_true() -> bool {
    true
}
fn default_false() -> bool {
    false
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            target_url: default_target_url(),
            user_agent: default_user_agent(),
            extra_headers: HashMap::new(),
            quiescence_timeout_secs: default_quiescence_timeout(),
            quiescence_window_ms: default_quiescence_window(),
            emit_stream_url: false,
            headless: true,
        }
    }
}

impl FetchConfig {
    /// Load configuration from `timeline-fetch.toml` in the working
    /// directory, falling back to defaults when absent or unreadable
    pub fn load() -> Self {
        let path = Path::new("timeline-fetch.toml");
        if path.exists() {
            if let Ok(content) = fs::read_to_string(path) {
                if let Ok(cfg) = toml::from_str::<FetchConfig>(&content) {
                    return cfg;
                }
            }
        }
        Self::default()
    }

    /// Deadline for the quiescence wait as a Duration
    pub fn quiescence_timeout(&self) -> Duration {
        Duration::from_secs(self.quiescence_timeout_secs)
    }

    /// Quiet window as a Duration
    pub fn quiescence_window(&self) -> Duration {
        Duration::from_millis(self.quiescence_window_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = FetchConfig::default();
        assert_eq!(config.target_url, DEFAULT_TARGET_URL);
        assert_eq!(config.user_agent, DEFAULT_USER_AGENT);
        assert!(config.extra_headers.is_empty());
        assert!(config.headless);
        assert!(!config.emit_stream_url);
        assert_eq!(config.quiescence_timeout(), Duration::from_secs(30));
        assert_eq!(config.quiescence_window(), Duration::from_millis(500));
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config: FetchConfig =
            toml::from_str("target_url = \"http://127.0.0.1:9999/timeline\"").unwrap();
        assert_eq!(config.target_url, "http://127.0.0.1:9999/timeline");
        assert_eq!(config.user_agent, DEFAULT_USER_AGENT);
        assert_eq!(config.quiescence_timeout_secs, 30);
    }

    #[test]
    fn test_extra_headers_from_toml() {
        let config: FetchConfig = toml::from_str(
            r#"
            [extra_headers]
            Referer = "https://candfans.jp/posts/comment/show/968402"
            "#,
        )
        .unwrap();
        assert_eq!(
            config.extra_headers.get("Referer").map(String::as_str),
            Some("https://candfans.jp/posts/comment/show/968402")
        );
    }
}
