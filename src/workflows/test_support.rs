//! Scripted in-memory page for workflow tests

use std::collections::{HashMap, HashSet, VecDeque};
use std::sync::Mutex;

use async_trait::async_trait;

use super::PortalPage;
use crate::common::{Error, Result};

/// A mutating page operation observed by the mock
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Goto(String),
    Reload,
    Fill(String, String),
    ClearReadonly(String),
    SetFrameHtml(String, String),
    Submit(String),
}

/// Scripted [`PortalPage`] double.
///
/// Presence, input values, and banner texts are keyed by the exact
/// selector string the workflows use. Input values are consumed in order,
/// one per read, to script a server whose rendered time changes across
/// reloads.
#[derive(Default)]
pub struct MockPage {
    elements: HashSet<String>,
    values: Mutex<HashMap<String, VecDeque<String>>>,
    texts: HashMap<String, Vec<String>>,
    body_text: String,
    url: String,
    recorded: Mutex<Vec<Call>>,
}

impl MockPage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_element(mut self, selector: &str) -> Self {
        self.elements.insert(selector.to_string());
        self
    }

    /// Script the sequence of values successive reads of `selector` see
    pub fn with_values(self, selector: &str, values: &[&str]) -> Self {
        self.values
            .lock()
            .unwrap()
            .insert(selector.to_string(), values.iter().map(|v| v.to_string()).collect());
        self.with_element(selector)
    }

    pub fn with_text(mut self, selector: &str, text: &str) -> Self {
        self.texts
            .insert(selector.to_string(), vec![text.to_string()]);
        self
    }

    pub fn with_all_text(mut self, selector: &str, texts: &[&str]) -> Self {
        self.texts.insert(
            selector.to_string(),
            texts.iter().map(|t| t.to_string()).collect(),
        );
        self
    }

    pub fn with_body_text(mut self, text: &str) -> Self {
        self.body_text = text.to_string();
        self
    }

    pub fn with_url(mut self, url: &str) -> Self {
        self.url = url.to_string();
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.recorded.lock().unwrap().clone()
    }

    fn record(&self, call: Call) {
        self.recorded.lock().unwrap().push(call);
    }
}

#[async_trait]
impl PortalPage for MockPage {
    async fn goto(&self, path: &str) -> Result<()> {
        self.record(Call::Goto(path.to_string()));
        Ok(())
    }

    async fn reload(&self) -> Result<()> {
        self.record(Call::Reload);
        Ok(())
    }

    async fn current_url(&self) -> Result<String> {
        Ok(self.url.clone())
    }

    async fn exists(&self, selector: &str) -> Result<bool> {
        Ok(self.elements.contains(selector))
    }

    async fn fill(&self, selector: &str, value: &str) -> Result<()> {
        if !self.elements.contains(selector) {
            return Err(Error::missing_element(selector));
        }
        self.record(Call::Fill(selector.to_string(), value.to_string()));
        Ok(())
    }

    async fn value(&self, selector: &str) -> Result<Option<String>> {
        if !self.elements.contains(selector) {
            return Ok(None);
        }
        let mut values = self.values.lock().unwrap();
        Ok(values
            .get_mut(selector)
            .and_then(|queue| queue.pop_front()))
    }

    async fn text(&self, selector: &str) -> Result<Option<String>> {
        Ok(self
            .texts
            .get(selector)
            .and_then(|texts| texts.first())
            .cloned())
    }

    async fn all_text(&self, selector: &str) -> Result<Vec<String>> {
        Ok(self.texts.get(selector).cloned().unwrap_or_default())
    }

    async fn contains_text(&self, needle: &str) -> Result<bool> {
        Ok(self.body_text.contains(needle))
    }

    async fn clear_readonly(&self, selector: &str) -> Result<()> {
        self.record(Call::ClearReadonly(selector.to_string()));
        Ok(())
    }

    async fn set_frame_html(&self, frame_selector: &str, html: &str) -> Result<()> {
        if !self.elements.contains(frame_selector) {
            return Err(Error::missing_element(frame_selector));
        }
        self.record(Call::SetFrameHtml(
            frame_selector.to_string(),
            html.to_string(),
        ));
        Ok(())
    }

    async fn submit_and_settle(&self, selector: &str) -> Result<()> {
        if !self.elements.contains(selector) {
            return Err(Error::missing_element(selector));
        }
        self.record(Call::Submit(selector.to_string()));
        Ok(())
    }
}
