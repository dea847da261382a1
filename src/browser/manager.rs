use super::config::BrowserConfig;
use headless_chrome::{Browser, LaunchOptions, Tab};
use std::ffi::OsStr;
use std::sync::Arc;

/// Manages the browser process and tab creation.
///
/// Dropping the manager shuts down the underlying Chrome process, so the
/// browser session is released on every exit path, including early returns.
pub struct BrowserManager {
    browser: Browser,
    config: BrowserConfig,
}

impl BrowserManager {
    /// Launch a browser with the given configuration
    pub fn new(config: BrowserConfig) -> Result<Self, BrowserError> {
        // Owned strings first so the &OsStr args below can borrow them
        let user_agent_arg = config
            .user_agent
            .as_ref()
            .map(|ua| format!("--user-agent={}", ua));

        let mut args: Vec<&OsStr> = config
            .chrome_flags
            .iter()
            .map(|f| OsStr::new(f.as_str()))
            .collect();

        if let Some(ref ua) = user_agent_arg {
            args.push(OsStr::new(ua));
        }

        let launch_options = LaunchOptions::default_builder()
            .headless(config.headless)
            .window_size(Some((config.window_size.0, config.window_size.1)))
            .args(args)
            .build()
            .map_err(|e| BrowserError::Configuration(e.to_string()))?;

        let browser = Browser::new(launch_options)
            .map_err(|e| BrowserError::Initialization(e.to_string()))?;

        Ok(Self { browser, config })
    }

    /// Create a new tab
    pub fn new_tab(&self) -> Result<Arc<Tab>, BrowserError> {
        self.browser
            .new_tab()
            .map_err(|e| BrowserError::TabCreation(e.to_string()))
    }

    /// Get the browser configuration
    pub fn config(&self) -> &BrowserConfig {
        &self.config
    }
}

impl Drop for BrowserManager {
    fn drop(&mut self) {
        log::debug!("Browser manager dropped, Chrome process shutting down");
    }
}

/// Errors that can occur during browser operations
#[derive(Debug, thiserror::Error)]
pub enum BrowserError {
    #[error("Browser initialization failed: {0}")]
    Initialization(String),

    #[error("Browser configuration error: {0}")]
    Configuration(String),

    #[error("Tab creation failed: {0}")]
    TabCreation(String),

    #[error("Navigation error: {0}")]
    Navigation(String),

    #[error("Timeout waiting for: {0}")]
    Timeout(String),

    #[error("JavaScript execution error: {0}")]
    JavaScript(String),

    #[error("Text extraction error: {0}")]
    Extraction(String),
}
