//! In-memory implementation of InvocationStore.

use async_trait::async_trait;
use dossier_error::DossierResult;
use dossier_interface::{InvocationRecord, InvocationStore};
use std::sync::Arc;
use tokio::sync::Mutex;

/// In-memory invocation store for tests and local development.
///
/// Records are kept in insertion order.
#[derive(Debug, Clone, Default)]
pub struct InMemoryInvocationStore {
    records: Arc<Mutex<Vec<InvocationRecord>>>,
}

impl InMemoryInvocationStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all recorded invocations, in insertion order.
    pub async fn records(&self) -> Vec<InvocationRecord> {
        self.records.lock().await.clone()
    }

    /// Number of recorded invocations.
    pub async fn len(&self) -> usize {
        self.records.lock().await.len()
    }

    /// Whether no invocations have been recorded.
    pub async fn is_empty(&self) -> bool {
        self.records.lock().await.is_empty()
    }
}

#[async_trait]
impl InvocationStore for InMemoryInvocationStore {
    async fn record(&self, record: &InvocationRecord) -> DossierResult<()> {
        self.records.lock().await.push(record.clone());
        Ok(())
    }
}
