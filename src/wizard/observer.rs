use std::sync::Arc;

use tokio::sync::mpsc::UnboundedReceiver;
use tokio::task::JoinHandle;

use super::domain::ANSWERS_STORAGE_KEY;
use super::record::AnswerRecord;
use super::state::Completed;
use crate::StorageError;
use crate::storage::LocalStore;
use crate::transport::submit::Submitter;

/// What the observer did over its lifetime.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ObserverReport {
    pub persisted: usize,
    pub submitted: usize,
    pub failed: usize,
}

/// Runs the finish-line side effects for every [`Completed`] event:
/// write the record to local storage, then submit it. Failures are logged
/// and counted, never returned. The task ends once every sender is dropped.
pub fn spawn_completion_observer(
    mut rx: UnboundedReceiver<Completed>,
    store: LocalStore,
    submitter: Arc<dyn Submitter>,
) -> JoinHandle<ObserverReport> {
    tokio::spawn(async move {
        let mut report = ObserverReport::default();
        while let Some(event) = rx.recv().await {
            tracing::info!(finished_at = %event.finished_at, "answers complete");

            let (disk, record) = (store.clone(), event.record.clone());
            match tokio::task::spawn_blocking(move || persist_answers(&disk, &record)).await {
                Ok(Ok(())) => report.persisted += 1,
                Ok(Err(e)) => {
                    tracing::error!(path = %store.path().display(), error = %e, "Failed to save answers");
                }
                Err(e) => tracing::error!(error = %e, "answer save task failed"),
            }

            match submitter.submit(&event.record).await {
                Ok(()) => {
                    report.submitted += 1;
                    tracing::info!("response sent");
                }
                Err(e) => {
                    report.failed += 1;
                    tracing::warn!(error = %e, "Failed to send response");
                }
            }
        }
        report
    })
}

pub fn persist_answers(store: &LocalStore, record: &AnswerRecord) -> Result<(), StorageError> {
    let json = serde_json::to_string(record)?;
    store.set_item(ANSWERS_STORAGE_KEY, &json)
}

pub fn load_saved_answers(store: &LocalStore) -> Result<Option<AnswerRecord>, StorageError> {
    store
        .get_item(ANSWERS_STORAGE_KEY)?
        .map(|json| serde_json::from_str(&json).map_err(StorageError::from))
        .transpose()
}
