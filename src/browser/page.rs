use super::manager::BrowserError;
use headless_chrome::Tab;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// A single navigable page within a browser session
pub struct BrowserPage {
    tab: Arc<Tab>,
}

impl BrowserPage {
    /// Wrap a browser tab
    pub fn new(tab: Arc<Tab>) -> Self {
        Self { tab }
    }

    /// Attach extra HTTP headers to every request this page makes.
    ///
    /// An empty map is a no-op.
    pub fn set_extra_headers(&self, headers: &HashMap<String, String>) -> Result<(), BrowserError> {
        if headers.is_empty() {
            return Ok(());
        }

        let borrowed: HashMap<&str, &str> = headers
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect();

        self.tab
            .set_extra_http_headers(borrowed)
            .map_err(|e| BrowserError::Configuration(e.to_string()))
    }

    /// Navigate to a URL and wait for the navigation to commit
    pub fn navigate(&self, url: &str) -> Result<(), BrowserError> {
        log::info!("Navigating to: {}", url);

        self.tab.navigate_to(url).map_err(|e| {
            BrowserError::Navigation(format!("Failed to navigate to {}: {}", url, e))
        })?;

        self.tab.wait_until_navigated().map_err(|e| {
            BrowserError::Navigation(format!("Navigation did not complete for {}: {}", url, e))
        })?;

        Ok(())
    }

    /// Wait until the page has settled: the document reaches readyState
    /// "complete" and a quiet window passes with no further loading.
    ///
    /// Chrome gives no direct network-idle signal over this API, so the
    /// quiescence heuristic is readyState polling followed by a fixed idle
    /// window.
    pub fn wait_for_quiescence(
        &self,
        window: Duration,
        timeout: Duration,
    ) -> Result<(), BrowserError> {
        let start = Instant::now();

        loop {
            if start.elapsed() > timeout {
                return Err(BrowserError::Timeout(
                    "network quiescence before reading page".to_string(),
                ));
            }

            match self.tab.evaluate("document.readyState", false) {
                Ok(result) => {
                    if let Some(value) = result.value {
                        if value.as_str() == Some("complete") {
                            break;
                        }
                    }
                }
                Err(_) => {
                    // Document not ready to evaluate yet, keep polling
                }
            }

            std::thread::sleep(Duration::from_millis(100));
        }

        // Idle window after load completes
        std::thread::sleep(window);

        Ok(())
    }

    /// Read the rendered document's visible body text
    pub fn body_text(&self) -> Result<String, BrowserError> {
        let result = self
            .tab
            .evaluate("document.body.innerText", false)
            .map_err(|e| BrowserError::JavaScript(e.to_string()))?;

        result
            .value
            .and_then(|v| v.as_str().map(|s| s.to_string()))
            .ok_or_else(|| BrowserError::Extraction("document body has no text".to_string()))
    }

    /// Get a reference to the underlying tab
    pub fn tab(&self) -> &Arc<Tab> {
        &self.tab
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::browser::{BrowserConfig, BrowserManager};

    #[test]
    #[ignore] // Requires Chrome to be installed
    fn test_basic_navigation() {
        let manager = BrowserManager::new(BrowserConfig::default()).unwrap();
        let page = BrowserPage::new(manager.new_tab().unwrap());

        assert!(page.navigate("https://example.com").is_ok());
    }

    #[test]
    #[ignore] // Requires Chrome to be installed
    fn test_body_text_extraction() {
        let manager = BrowserManager::new(BrowserConfig::default()).unwrap();
        let page = BrowserPage::new(manager.new_tab().unwrap());

        page.navigate("https://example.com").unwrap();
        page.wait_for_quiescence(Duration::from_millis(500), Duration::from_secs(30))
            .unwrap();
        let text = page.body_text().unwrap();

        assert!(text.contains("Example Domain"));
    }
}
