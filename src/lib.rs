// Library interface for timeline-fetch
// This allows tests and external crates to use the fetcher components

pub mod browser;
pub mod config;
pub mod fetch;
pub mod timeline;
