use anyhow::{Context, Result};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::config::Config;
use crate::storage::LocalStore;
use crate::transport::submit::HttpSubmitter;

use super::observer::{ObserverReport, spawn_completion_observer};
use super::prompts::{ask_excitement, ask_food, ask_invitation, ask_movie, ask_schedule};
use super::record::AnswerRecord;
use super::state::{WizardController, WizardStep};
use super::view::{print_step, print_summary, print_welcome_banner};

/// Extra time granted to the observer beyond the HTTP timeout itself.
const OBSERVER_GRACE: Duration = Duration::from_secs(5);

/// Runs the interactive invitation, then waits for the finish-line
/// hand-off (local save + gateway submission) to settle.
pub async fn run_wizard(config: &Config, gateway_url: Option<String>) -> Result<AnswerRecord> {
    let gateway_url = gateway_url.unwrap_or_else(|| config.wizard.gateway_url.clone());
    let submit_timeout = Duration::from_secs(config.wizard.submit_timeout_secs);
    let submitter = HttpSubmitter::new(&gateway_url, submit_timeout)?;
    tracing::info!(endpoint = submitter.endpoint(), "wizard starting");

    let store = LocalStore::open(config.storage_path());
    let (tx, rx) = mpsc::unbounded_channel();
    let observer = spawn_completion_observer(rx, store.clone(), Arc::new(submitter));

    let record = tokio::task::spawn_blocking(move || -> Result<AnswerRecord> {
        let mut wizard = WizardController::with_completion_channel(tx);
        drive(&mut wizard)?;
        let record = wizard.record().clone();
        print_summary(&record);
        Ok(record)
    })
    .await
    .context("wizard prompt thread panicked")??;

    settle_hand_off(observer, submit_timeout + OBSERVER_GRACE, &store).await;
    Ok(record)
}

/// Waits for the observer to drain. The outcome only goes to the log; the
/// summary screen is the last thing the invitee sees either way.
async fn settle_hand_off(
    observer: JoinHandle<ObserverReport>,
    limit: Duration,
    store: &LocalStore,
) -> Option<ObserverReport> {
    match tokio::time::timeout(limit, observer).await {
        Ok(Ok(report)) => {
            report_outcome(report, store);
            Some(report)
        }
        Ok(Err(e)) => {
            tracing::error!(error = %e, "completion observer crashed");
            None
        }
        Err(_) => {
            tracing::warn!("gave up waiting for the response to be sent");
            None
        }
    }
}

/// Prompts until the controller reaches the summary step.
fn drive(wizard: &mut WizardController) -> Result<()> {
    print_welcome_banner();
    let total = WizardStep::ALL.len() - 1;

    while !wizard.is_terminal() {
        let step = wizard.step();
        print_step(step.index() + 1, total, step.label());
        match step {
            WizardStep::Invitation => ask_invitation(wizard)?,
            WizardStep::Schedule => ask_schedule(wizard)?,
            WizardStep::Food => ask_food(wizard)?,
            WizardStep::Movie => ask_movie(wizard)?,
            WizardStep::Excitement => ask_excitement(wizard)?,
            WizardStep::Summary => break,
        }
    }
    Ok(())
}

fn report_outcome(report: ObserverReport, store: &LocalStore) {
    tracing::info!(
        path = %store.path().display(),
        persisted = report.persisted,
        submitted = report.submitted,
        failed = report.failed,
        "finish-line hand-off settled"
    );
}
