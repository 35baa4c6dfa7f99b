//! Persistent storage using redb.
//!
//! This module provides ACID-compliant storage for:
//! - Documents (profile and item collections, JSON-encoded)
//! - The local gateway's signed-in identity
//! - A pending full-page sign-in handoff

use std::path::Path;
use std::sync::Arc;

use parking_lot::RwLock;
use redb::{Database, ReadableTable, TableDefinition};
use tracing::debug;

use crate::error::FlistResult;
use crate::store::{merge_fields, Document, DocumentPath};
use crate::types::UserIdentity;

// Table definitions
const DOCUMENTS_TABLE: TableDefinition<&str, &[u8]> = TableDefinition::new("documents");
const AUTH_TABLE: TableDefinition<&str, &[u8]> = TableDefinition::new("auth");

/// Storage layer using redb for ACID-compliant persistence
#[derive(Clone)]
pub struct Storage {
    db: Arc<RwLock<Database>>,
}

impl Storage {
    /// Create a new storage instance at the given path.
    ///
    /// This will:
    /// - Create the database directory if it doesn't exist
    /// - Initialize the database file
    /// - Create all required tables
    pub fn new(path: impl AsRef<Path>) -> FlistResult<Self> {
        let path = path.as_ref();

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let db = Database::create(path)?;

        let write_txn = db.begin_write()?;
        {
            let _ = write_txn.open_table(DOCUMENTS_TABLE)?;
            let _ = write_txn.open_table(AUTH_TABLE)?;
        }
        write_txn.commit()?;

        debug!(?path, "Storage opened");
        Ok(Self {
            db: Arc::new(RwLock::new(db)),
        })
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Document Operations
    // ═══════════════════════════════════════════════════════════════════════

    /// Load a document.
    ///
    /// Returns `None` if no document exists at the given path.
    pub fn load_document(&self, path: &DocumentPath) -> FlistResult<Option<Document>> {
        let db = self.db.read();
        let read_txn = db.begin_read()?;
        let table = read_txn.open_table(DOCUMENTS_TABLE)?;
        let key = path.key();

        match table.get(key.as_str())? {
            Some(v) => Ok(Some(serde_json::from_slice(v.value())?)),
            None => Ok(None),
        }
    }

    /// Merge `partial` into the stored document inside one write transaction.
    ///
    /// Returns the document as stored after the merge.
    pub fn merge_document(&self, path: &DocumentPath, partial: Document) -> FlistResult<Document> {
        let db = self.db.read();
        let write_txn = db.begin_write()?;
        let merged = {
            let mut table = write_txn.open_table(DOCUMENTS_TABLE)?;
            let key = path.key();

            let mut current: Document = match table.get(key.as_str())? {
                Some(v) => serde_json::from_slice(v.value())?,
                None => Document::new(),
            };
            merge_fields(&mut current, partial);

            let data = serde_json::to_vec(&current)?;
            table.insert(key.as_str(), data.as_slice())?;
            current
        };
        write_txn.commit()?;
        Ok(merged)
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Auth Session Operations
    // ═══════════════════════════════════════════════════════════════════════

    /// Signed-in identity storage key (one signed-in user per install)
    const SESSION_KEY: &'static str = "session";

    /// Pending handoff storage key
    const PENDING_HANDOFF_KEY: &'static str = "pending_handoff";

    pub fn save_session_identity(&self, identity: &UserIdentity) -> FlistResult<()> {
        self.put_auth(Self::SESSION_KEY, identity)
    }

    /// Returns `None` when signed out.
    pub fn load_session_identity(&self) -> FlistResult<Option<UserIdentity>> {
        self.get_auth(Self::SESSION_KEY)
    }

    pub fn clear_session_identity(&self) -> FlistResult<()> {
        self.remove_auth(Self::SESSION_KEY).map(|_| ())
    }

    /// Record a sign-in handoff whose result is picked up later
    pub fn save_pending_handoff(&self, identity: &UserIdentity) -> FlistResult<()> {
        self.put_auth(Self::PENDING_HANDOFF_KEY, identity)
    }

    /// Remove and return the pending handoff, if any
    pub fn take_pending_handoff(&self) -> FlistResult<Option<UserIdentity>> {
        self.remove_auth(Self::PENDING_HANDOFF_KEY)
    }

    fn put_auth(&self, key: &str, identity: &UserIdentity) -> FlistResult<()> {
        let db = self.db.read();
        let write_txn = db.begin_write()?;
        {
            let mut table = write_txn.open_table(AUTH_TABLE)?;
            let data = serde_json::to_vec(identity)?;
            table.insert(key, data.as_slice())?;
        }
        write_txn.commit()?;
        Ok(())
    }

    fn get_auth(&self, key: &str) -> FlistResult<Option<UserIdentity>> {
        let db = self.db.read();
        let read_txn = db.begin_read()?;
        let table = read_txn.open_table(AUTH_TABLE)?;

        match table.get(key)? {
            Some(v) => Ok(Some(serde_json::from_slice(v.value())?)),
            None => Ok(None),
        }
    }

    fn remove_auth(&self, key: &str) -> FlistResult<Option<UserIdentity>> {
        let db = self.db.read();
        let write_txn = db.begin_write()?;
        let removed = {
            let mut table = write_txn.open_table(AUTH_TABLE)?;
            let removed = table.remove(key)?;
            match removed {
                Some(v) => Some(serde_json::from_slice::<UserIdentity>(v.value())?),
                None => None,
            }
        };
        write_txn.commit()?;
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    fn create_test_storage() -> (Storage, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let db_path = temp_dir.path().join("test.redb");
        let storage = Storage::new(&db_path).unwrap();
        (storage, temp_dir)
    }

    fn doc(value: serde_json::Value) -> Document {
        match value {
            serde_json::Value::Object(map) => map,
            _ => panic!("expected object"),
        }
    }

    #[test]
    fn test_storage_creates_parent_directories() {
        let temp_dir = TempDir::new().unwrap();
        let db_path = temp_dir.path().join("nested/path/to/test.redb");
        let storage = Storage::new(&db_path);
        assert!(storage.is_ok());
        assert!(db_path.exists());
    }

    #[test]
    fn test_load_nonexistent_document() {
        let (storage, _temp) = create_test_storage();
        let loaded = storage.load_document(&DocumentPath::profile("nobody")).unwrap();
        assert!(loaded.is_none());
    }

    #[test]
    fn test_merge_document_keeps_other_fields() {
        let (storage, _temp) = create_test_storage();
        let path = DocumentPath::profile("u1");

        storage
            .merge_document(&path, doc(json!({ "nickname": "@a", "description": "denim" })))
            .unwrap();
        let merged = storage
            .merge_document(&path, doc(json!({ "nickname": "@b" })))
            .unwrap();

        assert_eq!(merged["nickname"], "@b");
        assert_eq!(merged["description"], "denim");
        assert_eq!(storage.load_document(&path).unwrap().unwrap(), merged);
    }

    #[test]
    fn test_documents_persist_across_instances() {
        let temp_dir = TempDir::new().unwrap();
        let db_path = temp_dir.path().join("test.redb");
        let path = DocumentPath::items("u1");

        {
            let storage = Storage::new(&db_path).unwrap();
            storage
                .merge_document(&path, doc(json!({ "zipsItems": [], "wishlistItems": [] })))
                .unwrap();
        }

        let storage = Storage::new(&db_path).unwrap();
        assert!(storage.load_document(&path).unwrap().is_some());
    }

    #[test]
    fn test_session_identity_roundtrip_and_clear() {
        let (storage, _temp) = create_test_storage();
        assert!(storage.load_session_identity().unwrap().is_none());

        let identity = UserIdentity::new("u1").with_display_name("Mina");
        storage.save_session_identity(&identity).unwrap();
        assert_eq!(storage.load_session_identity().unwrap(), Some(identity));

        storage.clear_session_identity().unwrap();
        assert!(storage.load_session_identity().unwrap().is_none());
    }

    #[test]
    fn test_pending_handoff_is_consumed_once() {
        let (storage, _temp) = create_test_storage();
        let identity = UserIdentity::new("u1");

        storage.save_pending_handoff(&identity).unwrap();
        assert_eq!(storage.take_pending_handoff().unwrap(), Some(identity));
        assert!(storage.take_pending_handoff().unwrap().is_none());
    }
}
