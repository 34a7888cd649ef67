//! Portal workflows
//!
//! Each workflow is a fixed sequence of navigations, form fills, and
//! text-based success checks against the portal's markup. Workflows are
//! written against the [`PortalPage`] trait so the sequencing can be
//! exercised without a live browser.

pub mod attendance;
pub mod daily_log;
pub mod login;

#[cfg(test)]
pub(crate) mod test_support;

pub use attendance::{clock_in, clock_out};
pub use daily_log::{submit_daily_log, DailyLogEntry};
pub use login::{login, logout};

use async_trait::async_trait;

use crate::common::{Error, Result};

/// Inline validation / error banner elements
pub(crate) const ERROR_SELECTOR: &str = ".alert.alert-danger, .invalid-feedback";

/// Success banner element
pub(crate) const SUCCESS_SELECTOR: &str = ".alert.alert-success";

/// Generic submit control
pub(crate) const SUBMIT_BUTTON: &str = "button[type=submit]";

/// The page operations the workflows need from a live browser page
///
/// Selectors are CSS. Paths passed to [`goto`](Self::goto) are relative to
/// the portal base URL.
#[async_trait]
pub trait PortalPage: Send + Sync {
    /// Navigate to a portal path and wait for the page to settle
    async fn goto(&self, path: &str) -> Result<()>;

    /// Reload the current page
    async fn reload(&self) -> Result<()>;

    /// URL the page ended up on
    async fn current_url(&self) -> Result<String>;

    /// Whether any element matches the selector
    async fn exists(&self, selector: &str) -> Result<bool>;

    /// Set an input's value, firing `input`/`change` events
    ///
    /// Errors with [`Error::MissingElement`] when nothing matches.
    async fn fill(&self, selector: &str, value: &str) -> Result<()>;

    /// Current value of an input, `None` when the element is absent
    async fn value(&self, selector: &str) -> Result<Option<String>>;

    /// Trimmed text of the first matching element, `None` when absent
    async fn text(&self, selector: &str) -> Result<Option<String>>;

    /// Trimmed, non-empty texts of all matching elements
    async fn all_text(&self, selector: &str) -> Result<Vec<String>>;

    /// Whether the page body contains the phrase
    async fn contains_text(&self, needle: &str) -> Result<bool>;

    /// Remove the `readonly` attribute from a matching element, if any
    async fn clear_readonly(&self, selector: &str) -> Result<()>;

    /// Replace the body HTML inside a same-origin iframe
    async fn set_frame_html(&self, frame_selector: &str, html: &str) -> Result<()>;

    /// Scroll a submit control into view, click it, and wait for the
    /// resulting navigation
    async fn submit_and_settle(&self, selector: &str) -> Result<()>;
}

/// Check the post-submit banner for a workflow.
///
/// A present success banner containing `phrase` (case-insensitive) passes.
/// An absent banner with inline errors is a hard failure; an absent banner
/// with no inline errors is tolerated as best effort.
pub(crate) async fn verify_banner<P>(page: &P, action: &str, phrase: &str) -> Result<()>
where
    P: PortalPage + ?Sized,
{
    if let Some(banner) = page.text(SUCCESS_SELECTOR).await? {
        if banner.to_lowercase().contains(&phrase.to_lowercase()) {
            tracing::info!(action, banner = %banner, "success banner found");
            return Ok(());
        }
    }

    let errors = page.all_text(ERROR_SELECTOR).await?;
    if !errors.is_empty() {
        return Err(Error::submission_failed(action, &errors));
    }

    tracing::warn!(action, "no success banner and no inline errors; assuming success");
    Ok(())
}
