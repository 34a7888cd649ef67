//! Attendance portal automation CLI
//!
//! Drives a headless Chromium over the Chrome DevTools Protocol to log in
//! to a third-party attendance portal, clock in/out, and submit the daily
//! activity log.

pub mod browser;
pub mod cli;
pub mod common;
pub mod runner;
pub mod workflows;

// Re-export commonly used types for tests
pub use common::{Config, Error, Result};
pub use workflows::PortalPage;
