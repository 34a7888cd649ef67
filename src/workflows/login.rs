//! Login and logout workflows

use super::{PortalPage, ERROR_SELECTOR, SUBMIT_BUTTON};
use crate::common::{Error, Result};

/// Log in with the configured credentials and verify the destination.
///
/// The portal redirects different account types to different landing
/// pages, so any of the accepted prefixes counts as success. On failure
/// the error carries the observed URL and any inline form error text.
pub async fn login<P>(page: &P, base_url: &str, email: &str, password: &str) -> Result<()>
where
    P: PortalPage + ?Sized,
{
    page.goto("/login").await?;
    page.fill("#email", email).await?;
    page.fill("#password", password).await?;
    page.submit_and_settle(SUBMIT_BUTTON).await?;

    let url = page.current_url().await?;
    if !accepted_destination(base_url, &url) {
        let detail = page.text(ERROR_SELECTOR).await.unwrap_or(None);
        return Err(Error::LoginFailed { url, detail });
    }

    tracing::info!(%url, "login verified");
    Ok(())
}

/// Hit the logout endpoint and wait for it to settle.
///
/// The portal answers 200 unconditionally, so there is nothing to verify.
pub async fn logout<P>(page: &P) -> Result<()>
where
    P: PortalPage + ?Sized,
{
    page.goto("/logout").await
}

/// Whether a post-login URL is one of the accepted destinations
pub fn accepted_destination(base_url: &str, url: &str) -> bool {
    let base = base_url.trim_end_matches('/');
    [
        format!("{base}/welcome"),
        format!("{base}/add-facility"),
        format!("{base}/"),
    ]
    .iter()
    .any(|prefix| url == prefix || url.starts_with(prefix.as_str()))
}
