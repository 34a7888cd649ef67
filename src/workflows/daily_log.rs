//! Daily activity log workflow
//!
//! The log form varies per company: some fields are hidden entirely, and
//! the report body is either a TinyMCE editor or a plain textarea. Absent
//! fields are skipped, never an error.

use rand::seq::SliceRandom;

use super::{verify_banner, PortalPage, SUBMIT_BUTTON};
use crate::common::config::{Config, REPORT_CHOICES};
use crate::common::Result;

const TIME_INPUT: &str = "input#time";
const OFFICER_INPUT: &str = "input#officername";
const ACTIVITY_INPUT: &str = "input#activity";
const COMMENT_INPUT: &str = "input#comment";
const REPORT_TEXTAREA: &str = "textarea#report";

/// The rich-text editor's embedded frame; present when TinyMCE is active
const EDITOR_FRAME: &str = "iframe.tox-edit-area__iframe";

/// One daily-log submission, resolved from configuration once per run
#[derive(Debug, Clone)]
pub struct DailyLogEntry {
    pub time: String,
    /// Empty means "keep the server-rendered officer name"
    pub officer_name: String,
    pub activity: String,
    pub comment: String,
    pub report: String,
}

impl DailyLogEntry {
    /// Resolve an entry from config, defaulting unset values
    pub fn from_config(config: &Config) -> Self {
        Self {
            time: config.daily_log_time(),
            officer_name: config.daily_log.officer_name.clone(),
            activity: config.daily_log.activity.clone(),
            comment: config.daily_log.comment.clone(),
            report: config
                .daily_log
                .report
                .clone()
                .unwrap_or_else(random_report),
        }
    }

    /// Report body for the rich-text editor frame
    pub fn report_html(&self) -> String {
        self.report.replace('\n', "<br/>")
    }
}

fn random_report() -> String {
    REPORT_CHOICES
        .choose(&mut rand::thread_rng())
        .copied()
        .unwrap_or(REPORT_CHOICES[0])
        .to_string()
}

/// Fill and submit the daily activity log, then verify the banner.
pub async fn submit_daily_log<P>(page: &P, entry: &DailyLogEntry) -> Result<()>
where
    P: PortalPage + ?Sized,
{
    page.goto("/daily-activity-log").await?;

    fill_if_present(page, TIME_INPUT, &entry.time).await?;

    // Without an override the server-rendered name is left untouched.
    if !entry.officer_name.is_empty() {
        fill_if_present(page, OFFICER_INPUT, &entry.officer_name).await?;
    }

    // Hidden for some companies.
    fill_if_present(page, ACTIVITY_INPUT, &entry.activity).await?;
    fill_if_present(page, COMMENT_INPUT, &entry.comment).await?;

    if page.exists(EDITOR_FRAME).await? {
        page.set_frame_html(EDITOR_FRAME, &entry.report_html()).await?;
    } else if page.exists(REPORT_TEXTAREA).await? {
        page.fill(REPORT_TEXTAREA, &entry.report).await?;
    }

    page.submit_and_settle(SUBMIT_BUTTON).await?;
    verify_banner(page, "Daily log", "added a daily log successfully").await
}

async fn fill_if_present<P>(page: &P, selector: &str, value: &str) -> Result<()>
where
    P: PortalPage + ?Sized,
{
    if page.exists(selector).await? {
        page.fill(selector, value).await?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workflows::test_support::{Call, MockPage};
    use crate::workflows::SUCCESS_SELECTOR;

    fn entry() -> DailyLogEntry {
        DailyLogEntry {
            time: "09:00".into(),
            officer_name: String::new(),
            activity: "Routine duties".into(),
            comment: "AI update & Code improvement".into(),
            report: "Line one\nLine two".into(),
        }
    }

    fn log_page() -> MockPage {
        MockPage::new()
            .with_element(TIME_INPUT)
            .with_element(COMMENT_INPUT)
            .with_element(SUBMIT_BUTTON)
            .with_text(SUCCESS_SELECTOR, "You have added a daily log successfully")
    }

    #[tokio::test]
    async fn absent_fields_are_skipped_without_error() {
        // No activity input, no officer input, no report control at all.
        let page = log_page();

        submit_daily_log(&page, &entry()).await.unwrap();

        let calls = page.calls();
        assert!(calls.contains(&Call::Fill(TIME_INPUT.into(), "09:00".into())));
        assert!(calls.contains(&Call::Fill(
            COMMENT_INPUT.into(),
            "AI update & Code improvement".into()
        )));
        assert!(!calls
            .iter()
            .any(|c| matches!(c, Call::Fill(sel, _) if sel.as_str() == ACTIVITY_INPUT)));
        assert!(calls.contains(&Call::Submit(SUBMIT_BUTTON.into())));
    }

    #[tokio::test]
    async fn officer_name_only_filled_when_overridden() {
        let page = log_page().with_element(OFFICER_INPUT);
        submit_daily_log(&page, &entry()).await.unwrap();
        assert!(!page
            .calls()
            .iter()
            .any(|c| matches!(c, Call::Fill(sel, _) if sel.as_str() == OFFICER_INPUT)));

        let page = log_page().with_element(OFFICER_INPUT);
        let named = DailyLogEntry {
            officer_name: "A. Officer".into(),
            ..entry()
        };
        submit_daily_log(&page, &named).await.unwrap();
        assert!(page
            .calls()
            .contains(&Call::Fill(OFFICER_INPUT.into(), "A. Officer".into())));
    }

    #[tokio::test]
    async fn rich_text_editor_wins_over_textarea() {
        let page = log_page()
            .with_element(EDITOR_FRAME)
            .with_element(REPORT_TEXTAREA);

        submit_daily_log(&page, &entry()).await.unwrap();

        let calls = page.calls();
        assert!(calls.contains(&Call::SetFrameHtml(
            EDITOR_FRAME.into(),
            "Line one<br/>Line two".into()
        )));
        assert!(!calls
            .iter()
            .any(|c| matches!(c, Call::Fill(sel, _) if sel.as_str() == REPORT_TEXTAREA)));
    }

    #[tokio::test]
    async fn plain_textarea_is_used_when_no_editor() {
        let page = log_page().with_element(REPORT_TEXTAREA);

        submit_daily_log(&page, &entry()).await.unwrap();

        assert!(page.calls().contains(&Call::Fill(
            REPORT_TEXTAREA.into(),
            "Line one\nLine two".into()
        )));
    }

    #[test]
    fn random_report_comes_from_the_fixed_list() {
        for _ in 0..20 {
            let report = random_report();
            assert!(REPORT_CHOICES.contains(&report.as_str()));
        }
    }

    #[test]
    fn report_html_converts_newlines() {
        assert_eq!(entry().report_html(), "Line one<br/>Line two");
    }

    #[test]
    fn entry_resolution_uses_config_defaults() {
        let config = Config::from_lookup(|_| None).unwrap();
        let resolved = DailyLogEntry::from_config(&config);
        assert_eq!(resolved.activity, "Routine duties");
        assert!(REPORT_CHOICES.contains(&resolved.report.as_str()));
        assert_eq!(resolved.time.len(), 5);
    }
}
