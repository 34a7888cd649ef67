//! CDP-backed implementation of the portal page operations
//!
//! DOM reads and writes go through JavaScript evaluation rather than CDP
//! DOM commands; every embedded string is JSON-escaped first.

use async_trait::async_trait;
use chromiumoxide::Page;
use serde::de::DeserializeOwned;

use crate::common::{Error, Result};
use crate::workflows::PortalPage;

/// A chromiumoxide page bound to the portal base URL
pub struct CdpPage {
    page: Page,
    base_url: String,
}

impl CdpPage {
    pub fn new(page: Page, base_url: &str) -> Self {
        Self {
            page,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// The underlying chromiumoxide page (screenshots, teardown)
    pub fn raw(&self) -> &Page {
        &self.page
    }

    /// Quote a string as a JS literal
    fn js_str(s: &str) -> String {
        serde_json::Value::from(s).to_string()
    }

    async fn eval<T: DeserializeOwned>(&self, expression: String) -> Result<T> {
        Ok(self.page.evaluate(expression).await?.into_value()?)
    }

    /// Evaluate an expression yielding a list and take its first element.
    ///
    /// A JS `null` result carries no value over CDP and fails to decode,
    /// so reads that can come up empty return a list instead.
    async fn eval_first(&self, expression: String) -> Result<Option<String>> {
        let values: Vec<String> = self.eval(expression).await?;
        Ok(values.into_iter().next())
    }
}

#[async_trait]
impl PortalPage for CdpPage {
    async fn goto(&self, path: &str) -> Result<()> {
        self.page.goto(format!("{}{path}", self.base_url)).await?;
        Ok(())
    }

    async fn reload(&self) -> Result<()> {
        self.page.reload().await?;
        Ok(())
    }

    async fn current_url(&self) -> Result<String> {
        Ok(self.page.url().await?.unwrap_or_default())
    }

    async fn exists(&self, selector: &str) -> Result<bool> {
        let sel = Self::js_str(selector);
        self.eval(format!("document.querySelector({sel}) !== null"))
            .await
    }

    async fn fill(&self, selector: &str, value: &str) -> Result<()> {
        let sel = Self::js_str(selector);
        let val = Self::js_str(value);
        let filled: bool = self
            .eval(format!(
                r#"(() => {{
                    const el = document.querySelector({sel});
                    if (!el) return false;
                    el.value = {val};
                    el.dispatchEvent(new Event('input', {{ bubbles: true }}));
                    el.dispatchEvent(new Event('change', {{ bubbles: true }}));
                    return true;
                }})()"#
            ))
            .await?;
        if !filled {
            return Err(Error::missing_element(selector));
        }
        Ok(())
    }

    async fn value(&self, selector: &str) -> Result<Option<String>> {
        let sel = Self::js_str(selector);
        self.eval_first(format!(
            r#"(() => {{
                const el = document.querySelector({sel});
                return el ? [el.value] : [];
            }})()"#
        ))
        .await
    }

    async fn text(&self, selector: &str) -> Result<Option<String>> {
        let sel = Self::js_str(selector);
        self.eval_first(format!(
            r#"(() => {{
                const el = document.querySelector({sel});
                return el && el.textContent ? [el.textContent.trim()] : [];
            }})()"#
        ))
        .await
    }

    async fn all_text(&self, selector: &str) -> Result<Vec<String>> {
        let sel = Self::js_str(selector);
        self.eval(format!(
            r#"Array.from(document.querySelectorAll({sel}))
                .map(el => (el.textContent || '').trim())
                .filter(text => text.length > 0)"#
        ))
        .await
    }

    async fn contains_text(&self, needle: &str) -> Result<bool> {
        let text = Self::js_str(needle);
        self.eval(format!(
            "!!document.body && document.body.innerText.includes({text})"
        ))
        .await
    }

    async fn clear_readonly(&self, selector: &str) -> Result<()> {
        let sel = Self::js_str(selector);
        let _: bool = self
            .eval(format!(
                r#"(() => {{
                    const el = document.querySelector({sel});
                    if (el) el.removeAttribute('readonly');
                    return el !== null;
                }})()"#
            ))
            .await?;
        Ok(())
    }

    async fn set_frame_html(&self, frame_selector: &str, html: &str) -> Result<()> {
        let sel = Self::js_str(frame_selector);
        let body = Self::js_str(html);
        let written: bool = self
            .eval(format!(
                r#"(() => {{
                    const frame = document.querySelector({sel});
                    if (!frame || !frame.contentDocument || !frame.contentDocument.body) {{
                        return false;
                    }}
                    frame.contentDocument.body.innerHTML = {body};
                    return true;
                }})()"#
            ))
            .await?;
        if !written {
            return Err(Error::missing_element(frame_selector));
        }
        Ok(())
    }

    async fn submit_and_settle(&self, selector: &str) -> Result<()> {
        let sel = Self::js_str(selector);
        let clicked: bool = self
            .eval(format!(
                r#"(() => {{
                    const el = document.querySelector({sel});
                    if (!el) return false;
                    el.scrollIntoView({{ block: 'center' }});
                    el.click();
                    return true;
                }})()"#
            ))
            .await?;
        if !clicked {
            return Err(Error::missing_element(selector));
        }
        self.page.wait_for_navigation().await?;
        Ok(())
    }
}
