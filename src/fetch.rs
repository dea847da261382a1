use crate::browser::{BrowserConfig, BrowserError, BrowserManager, BrowserPage};
use crate::config::FetchConfig;
use serde_json::Value;

/// Errors from a fetch-and-print cycle
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error(transparent)]
    Browser(#[from] BrowserError),

    #[error("Response body is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Perform one fetch cycle: navigate to the configured endpoint in a headless
/// browser, wait for the page to settle, and parse the rendered body text as
/// JSON.
///
/// The browser process lives only for the duration of this call; it is shut
/// down on every exit path, including failures. Exactly one navigation is
/// attempted, with no retry on any error.
pub fn fetch_timeline(config: &FetchConfig) -> Result<Value, FetchError> {
    let browser_config = BrowserConfig {
        headless: config.headless,
        user_agent: Some(config.user_agent.clone()),
        timeout_seconds: config.quiescence_timeout_secs,
        ..BrowserConfig::default()
    };

    let manager = BrowserManager::new(browser_config)?;
    let page = BrowserPage::new(manager.new_tab()?);

    page.set_extra_headers(&config.extra_headers)?;
    page.navigate(&config.target_url)?;
    page.wait_for_quiescence(config.quiescence_window(), config.quiescence_timeout())?;

    let text = page.body_text()?;
    log::debug!("Extracted {} bytes of body text", text.len());

    let payload: Value = serde_json::from_str(&text)?;
    Ok(payload)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_from_invalid_json() {
        let err: FetchError = serde_json::from_str::<Value>("<html>not json</html>")
            .unwrap_err()
            .into();
        assert!(matches!(err, FetchError::Parse(_)));
        assert!(err.to_string().contains("not valid JSON"));
    }

    #[test]
    fn test_browser_error_passes_through() {
        let err: FetchError = BrowserError::Navigation("net::ERR_CONNECTION_REFUSED".into()).into();
        assert!(matches!(err, FetchError::Browser(_)));
        assert!(err.to_string().contains("ERR_CONNECTION_REFUSED"));
    }
}
