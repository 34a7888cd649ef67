//! Per-action orchestration
//!
//! Every portal action logs in first, then runs its own workflow. The
//! browser is launched once per invocation and closed on every exit path;
//! a failing workflow gets a best-effort diagnostic screenshot before
//! teardown.

use crate::browser::Session;
use crate::cli::Action;
use crate::common::{clock, Config, Result};
use crate::workflows::{self, DailyLogEntry};

/// Run one action end to end. Exit-code mapping happens in `main`.
pub async fn run(action: Action) -> Result<()> {
    if action == Action::DryRun {
        println!("Dry run OK");
        return Ok(());
    }

    let config = Config::from_env()?;

    // Fails before any browser process is started.
    config.credentials()?;

    let session = Session::launch(&config).await?;
    let outcome = dispatch(action, &session, &config).await;

    if let Err(e) = &outcome {
        tracing::error!(%action, error = %e, "action failed");
        session.capture_failure_screenshot().await;
    }
    session.close().await;
    outcome?;

    println!("Action {action} completed.");
    Ok(())
}

async fn dispatch(action: Action, session: &Session, config: &Config) -> Result<()> {
    let page = session.page();
    let (email, password) = config.credentials()?;

    workflows::login(page, &config.base_url, email, password).await?;

    let coordinates = (config.latitude, config.longitude);
    match action {
        Action::Login => Ok(()),
        Action::Logout => workflows::logout(page).await,
        Action::ClockIn => {
            workflows::clock_in(page, coordinates, &clock::lagos_time_hm).await
        }
        Action::ClockOut => {
            workflows::clock_out(page, coordinates, &clock::lagos_time_hm).await
        }
        Action::DailyLog => {
            let entry = DailyLogEntry::from_config(config);
            workflows::submit_daily_log(page, &entry).await
        }
        Action::DryRun => {
            // Handled before the browser is launched.
            unreachable!("dry-run never reaches dispatch")
        }
    }
}
