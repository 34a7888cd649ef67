//! CLI action definitions

use std::fmt;

/// The portal action selected with `--action`
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Action {
    /// Log in and verify the post-login destination
    Login,
    /// Log in, then hit the logout endpoint
    Logout,
    /// Log in and submit the daily activity log
    DailyLog,
    /// Log in and mark attendance for the day
    ClockIn,
    /// Log in and clock out for the day
    ClockOut,
    /// Validate the invocation without touching the portal
    DryRun,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Action::Login => "login",
            Action::Logout => "logout",
            Action::DailyLog => "daily-log",
            Action::ClockIn => "clock-in",
            Action::ClockOut => "clock-out",
            Action::DryRun => "dry-run",
        };
        f.write_str(name)
    }
}
