//! Error types for the attendance CLI
//!
//! Configuration problems are raised before any browser process starts;
//! workflow errors carry the page state observed at verification time so
//! the failure is diagnosable from the log alone.

use std::io;
use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the attendance CLI
#[derive(Error, Debug)]
pub enum Error {
    // === Configuration Errors ===
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid value for {name}: '{value}' ({reason})")]
    ConfigParse {
        name: String,
        value: String,
        reason: String,
    },

    // === Workflow Errors ===
    #[error("Login may have failed. Current URL: {url}{}", .detail.as_deref().map(|d| format!(" | Error: {d}")).unwrap_or_default())]
    LoginFailed { url: String, detail: Option<String> },

    #[error("{action} may have failed: {details}")]
    SubmissionFailed { action: String, details: String },

    #[error("Element '{selector}' not found on the page")]
    MissingElement { selector: String },

    // === Browser Errors ===
    #[error("Failed to configure browser: {0}")]
    BrowserConfig(String),

    #[error("Browser protocol error: {0}")]
    Cdp(#[from] chromiumoxide::error::CdpError),

    // === IO Errors ===
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    // === Serialization Errors ===
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Create a submission failure for a named workflow
    pub fn submission_failed(action: &str, details: &[String]) -> Self {
        Self::SubmissionFailed {
            action: action.to_string(),
            details: details.join(" | "),
        }
    }

    /// Create a missing-element error
    pub fn missing_element(selector: &str) -> Self {
        Self::MissingElement {
            selector: selector.to_string(),
        }
    }
}
