//! Browser session lifecycle
//!
//! One headless Chromium and one page are allocated for the process
//! lifetime and released on both success and failure paths.

use chromiumoxide::browser::{Browser, BrowserConfig};
use chromiumoxide::cdp::browser_protocol::emulation::{
    SetGeolocationOverrideParams, SetUserAgentOverrideParams,
};
use chromiumoxide::cdp::browser_protocol::page::{
    EventJavascriptDialogOpening, HandleJavaScriptDialogParams,
};
use chromiumoxide::page::ScreenshotParams;
use chromiumoxide::Page;
use chrono::Utc;
use futures_util::StreamExt;
use tokio::task::JoinHandle;

use crate::browser::page::CdpPage;
use crate::common::{Config, Error, Result};

/// A live browser with a single page pointed at the portal
pub struct Session {
    browser: Browser,
    handler_task: JoinHandle<()>,
    page: CdpPage,
}

impl Session {
    /// Launch headless Chromium and prepare the page: user agent,
    /// geolocation override, and dialog auto-accept.
    pub async fn launch(config: &Config) -> Result<Self> {
        let browser_config = BrowserConfig::builder()
            .window_size(1366, 768)
            .arg("--lang=en-GB")
            .build()
            .map_err(Error::BrowserConfig)?;

        let (browser, mut handler) = Browser::launch(browser_config).await?;

        // The handler stream must be drained for the CDP connection to
        // make progress; it ends when the browser closes.
        let handler_task = tokio::spawn(async move {
            while let Some(event) = handler.next().await {
                if event.is_err() {
                    break;
                }
            }
        });

        let page = browser.new_page("about:blank").await?;

        let user_agent = SetUserAgentOverrideParams::builder()
            .user_agent(&config.user_agent)
            .build()
            .map_err(Error::BrowserConfig)?;
        page.execute(user_agent).await?;

        let mut geolocation = SetGeolocationOverrideParams::default();
        geolocation.latitude = Some(config.latitude);
        geolocation.longitude = Some(config.longitude);
        geolocation.accuracy = Some(1.0);
        page.execute(geolocation).await?;

        accept_dialogs(&page).await?;

        tracing::info!(base_url = %config.base_url, "browser session ready");

        Ok(Self {
            browser,
            handler_task,
            page: CdpPage::new(page, &config.base_url),
        })
    }

    pub fn page(&self) -> &CdpPage {
        &self.page
    }

    /// Best-effort full-page screenshot for post-mortem diagnosis.
    ///
    /// Never masks the error that triggered it; a screenshot failure is
    /// only logged.
    pub async fn capture_failure_screenshot(&self) {
        let path = format!("automation_error_{}.png", Utc::now().timestamp_millis());
        let params = ScreenshotParams::builder().full_page(true).build();
        match self.page.raw().save_screenshot(params, &path).await {
            Ok(_) => tracing::info!(%path, "failure screenshot written"),
            Err(e) => tracing::warn!(error = %e, "could not capture failure screenshot"),
        }
    }

    /// Close the browser process and stop the handler task.
    pub async fn close(mut self) {
        if let Err(e) = self.browser.close().await {
            tracing::warn!(error = %e, "browser did not close cleanly");
        }
        let _ = self.browser.wait().await;
        self.handler_task.abort();
    }
}

/// Auto-accept JavaScript dialogs; the clock pages confirm via prompt.
async fn accept_dialogs(page: &Page) -> Result<()> {
    let mut dialogs = page
        .event_listener::<EventJavascriptDialogOpening>()
        .await?;
    let page = page.clone();

    tokio::spawn(async move {
        while let Some(_dialog) = dialogs.next().await {
            match HandleJavaScriptDialogParams::builder().accept(true).build() {
                Ok(accept) => {
                    if let Err(e) = page.execute(accept).await {
                        tracing::debug!(error = %e, "failed to accept dialog");
                    }
                }
                Err(e) => tracing::debug!(error = %e, "failed to build dialog accept"),
            }
        }
    });

    Ok(())
}
