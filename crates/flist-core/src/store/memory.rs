//! In-process document store.
//!
//! Used by tests and ephemeral sessions. Reads and writes can be made to fail
//! on demand so callers can exercise their remote-failure paths.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::{Mutex, RwLock};
use tracing::debug;

use super::{
    merge_fields, Document, DocumentPath, DocumentSnapshot, DocumentStore, Listener,
    ListenerRegistry, Subscription,
};
use crate::error::{FlistError, FlistResult};

#[derive(Default)]
pub struct MemoryStore {
    documents: RwLock<HashMap<DocumentPath, Document>>,
    listeners: Arc<ListenerRegistry>,
    fail_reads: AtomicBool,
    fail_writes: AtomicBool,
    write_log: Mutex<Vec<(DocumentPath, Document)>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every read and subscription setup fail until switched off
    pub fn fail_reads(&self, fail: bool) {
        self.fail_reads.store(fail, Ordering::SeqCst);
    }

    /// Make every merge-write fail until switched off
    pub fn fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    /// Current contents of a document, bypassing fault injection
    pub fn get(&self, path: &DocumentPath) -> Option<Document> {
        self.documents.read().get(path).cloned()
    }

    /// Replace a document wholesale and notify listeners, as a write from
    /// another device would
    pub fn put(&self, path: &DocumentPath, doc: Document) {
        self.documents.write().insert(path.clone(), doc.clone());
        self.listeners.notify(path, &DocumentSnapshot::Present(doc));
    }

    /// Merge-writes accepted for `path`, oldest first
    pub fn writes_to(&self, path: &DocumentPath) -> Vec<Document> {
        self.write_log
            .lock()
            .iter()
            .filter(|(p, _)| p == path)
            .map(|(_, doc)| doc.clone())
            .collect()
    }

    pub fn listener_count(&self, path: &DocumentPath) -> usize {
        self.listeners.listener_count(path)
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn read(&self, path: &DocumentPath) -> FlistResult<Option<Document>> {
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(FlistError::RemoteReadFailed(format!("read of {path} rejected")));
        }
        Ok(self.get(path))
    }

    async fn merge_write(&self, path: &DocumentPath, partial: Document) -> FlistResult<()> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(FlistError::RemoteWriteFailed(format!("write to {path} rejected")));
        }

        self.write_log.lock().push((path.clone(), partial.clone()));
        let merged = {
            let mut documents = self.documents.write();
            let doc = documents.entry(path.clone()).or_default();
            merge_fields(doc, partial);
            doc.clone()
        };
        debug!(%path, "Merge-write applied");

        self.listeners.notify(path, &DocumentSnapshot::Present(merged));
        Ok(())
    }

    async fn subscribe(
        &self,
        path: &DocumentPath,
        on_change: Listener,
    ) -> FlistResult<Subscription> {
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(FlistError::RemoteReadFailed(format!(
                "subscription to {path} rejected"
            )));
        }

        let subscription = self.listeners.register(path, Arc::clone(&on_change));
        on_change(DocumentSnapshot::from_option(self.get(path)));
        Ok(subscription)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn doc(value: serde_json::Value) -> Document {
        match value {
            serde_json::Value::Object(map) => map,
            _ => panic!("expected object"),
        }
    }

    #[tokio::test]
    async fn test_read_missing_is_none() {
        let store = MemoryStore::new();
        assert!(store.read(&DocumentPath::profile("u1")).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_merge_write_creates_then_merges() {
        let store = MemoryStore::new();
        let path = DocumentPath::profile("u1");

        store
            .merge_write(&path, doc(json!({ "nickname": "@a", "description": "d" })))
            .await
            .unwrap();
        store
            .merge_write(&path, doc(json!({ "nickname": "@b" })))
            .await
            .unwrap();

        let stored = store.read(&path).await.unwrap().unwrap();
        assert_eq!(stored["nickname"], "@b");
        assert_eq!(stored["description"], "d");
        assert_eq!(store.writes_to(&path).len(), 2);
    }

    #[tokio::test]
    async fn test_subscribe_delivers_initial_then_changes() {
        let store = MemoryStore::new();
        let path = DocumentPath::items("u1");
        let seen = Arc::new(Mutex::new(Vec::new()));

        let sink = Arc::clone(&seen);
        let _sub = store
            .subscribe(
                &path,
                Arc::new(move |snapshot: DocumentSnapshot| sink.lock().push(snapshot)),
            )
            .await
            .unwrap();
        store
            .merge_write(&path, doc(json!({ "zipsItems": [] })))
            .await
            .unwrap();

        let seen = seen.lock();
        assert_eq!(seen.len(), 2);
        assert_eq!(seen[0], DocumentSnapshot::Absent);
        assert!(matches!(seen[1], DocumentSnapshot::Present(_)));
    }

    #[tokio::test]
    async fn test_fault_injection() {
        let store = MemoryStore::new();
        let path = DocumentPath::profile("u1");

        store.fail_writes(true);
        let err = store.merge_write(&path, Document::new()).await.unwrap_err();
        assert!(matches!(err, FlistError::RemoteWriteFailed(_)));
        assert!(store.get(&path).is_none());

        store.fail_reads(true);
        let err = store.read(&path).await.unwrap_err();
        assert!(matches!(err, FlistError::RemoteReadFailed(_)));
    }
}
