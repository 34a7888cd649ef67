//! Clock-in / clock-out workflows
//!
//! The attendance form pre-renders a read-only time value on the server.
//! Submission only succeeds when that value matches the server's clock to
//! the minute, so after a slow page load the rendered value can already be
//! stale. The submission procedure reloads until the rendered value agrees
//! with the freshly computed Lagos time, then falls back to forcing the
//! field after a bounded number of attempts.

use super::{verify_banner, PortalPage};
use crate::common::Result;

/// The attendance form; absent when the day's entry is already recorded
pub const LOCATION_FORM: &str = "form#locationForm";

const FORM_SUBMIT: &str = "form#locationForm button[type=submit]";
const TIME_FIELD: &str = "#time";
const LAT_FIELD: &str = "#lat";
const LON_FIELD: &str = "#long";

const MAX_TIME_ALIGN_ATTEMPTS: u32 = 3;

/// Mark attendance for the day.
///
/// A page without the form means attendance is already marked; that is a
/// no-op success.
pub async fn clock_in<P, F>(page: &P, coordinates: (f64, f64), now: &F) -> Result<()>
where
    P: PortalPage + ?Sized,
    F: Fn() -> String + Sync,
{
    page.goto("/clock-in").await?;

    if !page.exists(LOCATION_FORM).await? {
        tracing::info!("no attendance form rendered; already clocked in");
        return Ok(());
    }

    submit_attendance(page, coordinates, now).await?;
    verify_banner(page, "Clock-in", "Attendance marked successfully").await
}

/// Clock out for the day.
///
/// Exits quietly when there is no clock-in entry to close, or when the
/// form is absent because the day is already closed out.
pub async fn clock_out<P, F>(page: &P, coordinates: (f64, f64), now: &F) -> Result<()>
where
    P: PortalPage + ?Sized,
    F: Fn() -> String + Sync,
{
    page.goto("/clock-out").await?;

    if page.contains_text("You have not clocked in today").await? {
        tracing::info!("not clocked in today; nothing to close out");
        return Ok(());
    }

    if !page.exists(LOCATION_FORM).await? {
        tracing::info!("no attendance form rendered; already clocked out");
        return Ok(());
    }

    submit_attendance(page, coordinates, now).await?;
    verify_banner(page, "Clock-out", "You have clocked out successfully").await
}

/// Shared attendance submission with the time-alignment retry.
///
/// Reads the server-rendered `#time` value and compares it to the Lagos
/// wall clock; on a match the form is submitted, on a mismatch the page is
/// reloaded for a fresh value. After [`MAX_TIME_ALIGN_ATTEMPTS`] mismatches
/// the read-only attribute is stripped and the field is written directly
/// with the time computed at that moment.
async fn submit_attendance<P, F>(page: &P, (lat, lon): (f64, f64), now: &F) -> Result<()>
where
    P: PortalPage + ?Sized,
    F: Fn() -> String + Sync,
{
    // Hidden coordinates are not validated server-side but are included
    // when the form carries them.
    for (selector, value) in [(LAT_FIELD, lat), (LON_FIELD, lon)] {
        if page.exists(selector).await? {
            page.fill(selector, &value.to_string()).await?;
        }
    }

    for attempt in 1..=MAX_TIME_ALIGN_ATTEMPTS {
        let rendered = page.value(TIME_FIELD).await?.unwrap_or_default();
        let expected = now();
        tracing::info!(attempt, rendered = %rendered, expected = %expected, "attendance time check");

        if rendered == expected {
            return page.submit_and_settle(FORM_SUBMIT).await;
        }

        page.reload().await?;
    }

    tracing::warn!("server-rendered time never aligned; forcing the field");
    page.clear_readonly(TIME_FIELD).await?;
    page.fill(TIME_FIELD, &now()).await?;
    page.submit_and_settle(FORM_SUBMIT).await
}
