//! Document store contract and backends.
//!
//! The catalog keeps two documents per user:
//!
//! ```text
//! users/{uid}      { nickname, description, profileImage }
//! userItems/{uid}  { zipsItems: [Item], wishlistItems: [Item] }
//! ```
//!
//! Writes are merge-writes: top-level fields present in the partial document
//! replace the stored ones, other fields are left untouched. Subscriptions
//! deliver the current snapshot right away and then one snapshot per change.

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;

use crate::error::FlistResult;

mod listeners;
mod memory;
mod persistent;

pub use listeners::{ListenerRegistry, Subscription};
pub use memory::MemoryStore;
pub use persistent::RedbStore;

/// Collection holding one profile document per user
pub const PROFILES_COLLECTION: &str = "users";
/// Collection holding one items document per user
pub const ITEMS_COLLECTION: &str = "userItems";

/// Field set of a document
pub type Document = serde_json::Map<String, serde_json::Value>;

/// Change callback registered through [`DocumentStore::subscribe`]
pub type Listener = Arc<dyn Fn(DocumentSnapshot) + Send + Sync>;

/// Address of one document
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DocumentPath {
    pub collection: String,
    pub id: String,
}

impl DocumentPath {
    pub fn new(collection: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            collection: collection.into(),
            id: id.into(),
        }
    }

    /// Profile document of a user
    pub fn profile(uid: &str) -> Self {
        Self::new(PROFILES_COLLECTION, uid)
    }

    /// Items document of a user
    pub fn items(uid: &str) -> Self {
        Self::new(ITEMS_COLLECTION, uid)
    }

    /// Flat key used by key-value backends
    pub fn key(&self) -> String {
        format!("{}/{}", self.collection, self.id)
    }
}

impl fmt::Display for DocumentPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.collection, self.id)
    }
}

/// One subscription delivery
#[derive(Debug, Clone, PartialEq)]
pub enum DocumentSnapshot {
    Present(Document),
    /// The document does not exist (yet)
    Absent,
}

impl DocumentSnapshot {
    pub fn from_option(doc: Option<Document>) -> Self {
        match doc {
            Some(doc) => DocumentSnapshot::Present(doc),
            None => DocumentSnapshot::Absent,
        }
    }
}

/// Apply a merge-write to `target`
pub(crate) fn merge_fields(target: &mut Document, partial: Document) {
    for (field, value) in partial {
        target.insert(field, value);
    }
}

/// Remote profile/items store
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Point read. `Ok(None)` when the document does not exist.
    async fn read(&self, path: &DocumentPath) -> FlistResult<Option<Document>>;

    /// Merge `partial` into the document, creating it when missing.
    async fn merge_write(&self, path: &DocumentPath, partial: Document) -> FlistResult<()>;

    /// Register `on_change`; it receives the current snapshot first.
    async fn subscribe(&self, path: &DocumentPath, on_change: Listener)
        -> FlistResult<Subscription>;
}
