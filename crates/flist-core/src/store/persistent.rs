//! Durable document store on top of [`Storage`].
//!
//! Keeps profile and items documents across restarts of the desktop app.
//! Storage failures surface as remote read/write failures so callers treat
//! this backend exactly like a hosted one.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, error};

use super::{
    Document, DocumentPath, DocumentSnapshot, DocumentStore, Listener, ListenerRegistry,
    Subscription,
};
use crate::error::{FlistError, FlistResult};
use crate::storage::Storage;

#[derive(Clone)]
pub struct RedbStore {
    storage: Storage,
    listeners: Arc<ListenerRegistry>,
}

impl RedbStore {
    pub fn new(storage: Storage) -> Self {
        Self {
            storage,
            listeners: ListenerRegistry::new(),
        }
    }

    pub fn storage(&self) -> &Storage {
        &self.storage
    }
}

#[async_trait]
impl DocumentStore for RedbStore {
    async fn read(&self, path: &DocumentPath) -> FlistResult<Option<Document>> {
        self.storage.load_document(path).map_err(|e| {
            error!(%path, error = %e, "Document read failed");
            FlistError::RemoteReadFailed(e.to_string())
        })
    }

    async fn merge_write(&self, path: &DocumentPath, partial: Document) -> FlistResult<()> {
        let merged = self.storage.merge_document(path, partial).map_err(|e| {
            error!(%path, error = %e, "Document write failed");
            FlistError::RemoteWriteFailed(e.to_string())
        })?;
        debug!(%path, "Merge-write committed");

        self.listeners.notify(path, &DocumentSnapshot::Present(merged));
        Ok(())
    }

    async fn subscribe(
        &self,
        path: &DocumentPath,
        on_change: Listener,
    ) -> FlistResult<Subscription> {
        let current = self.read(path).await?;
        let subscription = self.listeners.register(path, Arc::clone(&on_change));
        on_change(DocumentSnapshot::from_option(current));
        Ok(subscription)
    }
}
