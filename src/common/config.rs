//! Environment-sourced configuration
//!
//! The recognized variable set is fixed; anything unset falls back to a
//! default. Credentials are the only required values, and only for actions
//! that actually talk to the portal.

use super::clock;
use super::{Error, Result};

/// Default report bodies, one of which is picked at random when
/// `DAILY_LOG_REPORT` is unset.
pub const REPORT_CHOICES: [&str; 5] = [
    "Meeting and Laravel LMS Course development",
    "NRI website review",
    "sevearal meetings and Formatting of proposal document",
    "Following up with Lms pending task with NRI",
    "Several Meeting and General development update",
];

/// Main configuration structure
#[derive(Debug, Clone)]
pub struct Config {
    /// Portal origin, no trailing slash
    pub base_url: String,

    /// Account email (required for any non-dry-run action)
    pub email: Option<String>,

    /// Account password (required for any non-dry-run action)
    pub password: Option<String>,

    /// Geolocation reported to the portal
    pub latitude: f64,
    pub longitude: f64,

    /// Desktop user-agent string applied to the page
    pub user_agent: String,

    /// Daily-log form inputs
    pub daily_log: DailyLogConfig,
}

/// Inputs for the daily activity log form
#[derive(Debug, Clone)]
pub struct DailyLogConfig {
    /// Time of day as `HH:MM`; unset means "current Lagos time"
    pub time: Option<String>,

    pub activity: String,
    pub comment: String,

    /// Report body; unset means "pick one of [`REPORT_CHOICES`]"
    pub report: Option<String>,

    /// Officer name override; empty keeps the server-rendered value
    pub officer_name: String,
}

fn default_base_url() -> String {
    "https://portal4security.com".to_string()
}

fn default_user_agent() -> String {
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 \
     (KHTML, like Gecko) Chrome/125.0.0.0 Safari/537.36"
        .to_string()
}

// Lagos
const DEFAULT_LAT: f64 = 6.5244;
const DEFAULT_LON: f64 = 3.3792;

impl Config {
    /// Load configuration from process environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an injected key lookup
    pub fn from_lookup<F>(get: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            base_url: get("P4S_BASE_URL").unwrap_or_else(default_base_url),
            email: get("P4S_EMAIL"),
            password: get("P4S_PASSWORD"),
            latitude: parse_coord("P4S_LAT", get("P4S_LAT"), DEFAULT_LAT)?,
            longitude: parse_coord("P4S_LON", get("P4S_LON"), DEFAULT_LON)?,
            user_agent: get("P4S_UA").unwrap_or_else(default_user_agent),
            daily_log: DailyLogConfig {
                time: get("DAILY_LOG_TIME"),
                activity: get("DAILY_LOG_ACTIVITY")
                    .unwrap_or_else(|| "Routine duties".to_string()),
                comment: get("DAILY_LOG_COMMENT")
                    .unwrap_or_else(|| "AI update & Code improvement".to_string()),
                report: get("DAILY_LOG_REPORT"),
                officer_name: get("OFFICER_NAME").unwrap_or_default(),
            },
        })
    }

    /// Credentials, or a configuration error naming the missing variables
    ///
    /// Checked before any browser process is started.
    pub fn credentials(&self) -> Result<(&str, &str)> {
        match (self.email.as_deref(), self.password.as_deref()) {
            (Some(email), Some(password)) => Ok((email, password)),
            _ => Err(Error::Config(
                "Missing P4S_EMAIL or P4S_PASSWORD env vars".to_string(),
            )),
        }
    }

    /// Resolved daily-log time: configured value or the current Lagos time
    pub fn daily_log_time(&self) -> String {
        self.daily_log
            .time
            .clone()
            .unwrap_or_else(clock::lagos_time_hm)
    }
}

fn parse_coord(name: &str, raw: Option<String>, default: f64) -> Result<f64> {
    match raw {
        None => Ok(default),
        Some(value) => value.parse().map_err(|_| Error::ConfigParse {
            name: name.to_string(),
            value,
            reason: "expected a decimal degree".to_string(),
        }),
    }
}
