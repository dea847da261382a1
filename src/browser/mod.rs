//! Browser automation for fetching JavaScript-rendered API responses
//!
//! This module provides the headless Chrome plumbing used to load a remote
//! endpoint in a real browser context: a browser process manager, a
//! configuration type, and a page wrapper for navigation and text extraction.
//!
//! # Example
//!
//! ```no_run
//! use timeline_fetch::browser::{BrowserConfig, BrowserManager, BrowserPage};
//! use std::time::Duration;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! // Launch a headless browser with default configuration
//! let manager = BrowserManager::new(BrowserConfig::default())?;
//!
//! // Open a page
//! let page = BrowserPage::new(manager.new_tab()?);
//!
//! // Navigate, wait for the network to settle, and read the body text
//! page.navigate("https://example.com")?;
//! page.wait_for_quiescence(Duration::from_millis(500), Duration::from_secs(30))?;
//! let text = page.body_text()?;
//!
//! println!("Extracted {} bytes of text", text.len());
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod manager;
pub mod page;

// Re-export main types for convenience
pub use config::BrowserConfig;
pub use manager::{BrowserError, BrowserManager};
pub use page::BrowserPage;
