//! Best-effort persistence of analysis records.
//!
//! Records are insert-only: nothing in the relay reads, updates or deletes them. Writes run
//! on a detached task and their failures go to the `persistence` log target, so a broken
//! store can never change what a caller of the relay receives.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::task::JoinHandle;

use crate::analysis::PersistedRecord;
use crate::config::StoreConfig;
use crate::{PersistenceError, PersistenceResult};

/// Insert-only sink for [`PersistedRecord`]s.
#[async_trait]
pub trait RecordStore: Send + Sync {
    async fn insert(&self, record: &PersistedRecord) -> PersistenceResult<()>;
}

/// Store backed by a PostgREST (Supabase) table.
pub struct RestRecordStore {
    client: reqwest::Client,
    config: StoreConfig,
}

impl RestRecordStore {
    pub fn new(config: StoreConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }
}

#[async_trait]
impl RecordStore for RestRecordStore {
    async fn insert(&self, record: &PersistedRecord) -> PersistenceResult<()> {
        let response = self
            .client
            .post(self.config.insert_url())
            .header("apikey", self.config.service_key())
            .bearer_auth(self.config.service_key())
            .header("Prefer", "return=minimal")
            .json(record)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(PersistenceError::Rejected {
                status: status.as_u16(),
                body,
            });
        }
        Ok(())
    }
}

/// Store used when no persistence backend is configured.
#[derive(Debug, Default, Clone)]
pub struct DisabledRecordStore;

#[async_trait]
impl RecordStore for DisabledRecordStore {
    async fn insert(&self, record: &PersistedRecord) -> PersistenceResult<()> {
        tracing::debug!(target: "persistence", id = %record.id, "Persistence disabled, record dropped");
        Ok(())
    }
}

/// Build the store for the given configuration.
pub fn store_from_config(config: Option<&StoreConfig>) -> Arc<dyn RecordStore> {
    match config {
        Some(cfg) => Arc::new(RestRecordStore::new(cfg.clone())),
        None => Arc::new(DisabledRecordStore),
    }
}

/// Write `record` on a detached task.
///
/// The returned handle may be dropped; the write still runs to completion.
pub fn dispatch(store: Arc<dyn RecordStore>, record: PersistedRecord) -> JoinHandle<()> {
    tokio::spawn(async move {
        match store.insert(&record).await {
            Ok(()) => {
                tracing::debug!(target: "persistence", id = %record.id, "Stored symptom check");
            }
            Err(e) => {
                tracing::error!(target: "persistence", id = %record.id, error = %e, "Database error");
            }
        }
    })
}
