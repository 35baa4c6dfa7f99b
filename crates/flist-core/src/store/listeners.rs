//! Listener bookkeeping shared by the store backends.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Weak};

use parking_lot::Mutex;
use tracing::debug;

use super::{DocumentPath, DocumentSnapshot, Listener};

/// Live listeners keyed by document path
#[derive(Default)]
pub struct ListenerRegistry {
    next_id: AtomicU64,
    listeners: Mutex<HashMap<DocumentPath, Vec<(u64, Listener)>>>,
}

impl ListenerRegistry {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Add a listener; it stays registered until the handle is cancelled or dropped
    pub fn register(self: &Arc<Self>, path: &DocumentPath, listener: Listener) -> Subscription {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        self.listeners
            .lock()
            .entry(path.clone())
            .or_default()
            .push((id, listener));
        debug!(%path, listener = id, "Listener registered");

        Subscription {
            registry: Arc::downgrade(self),
            path: path.clone(),
            id,
            active: true,
        }
    }

    /// Deliver `snapshot` to every listener of `path`.
    ///
    /// Callbacks run after the registry lock is released, so a callback may
    /// itself register or cancel listeners.
    pub fn notify(&self, path: &DocumentPath, snapshot: &DocumentSnapshot) {
        let targets: Vec<Listener> = self
            .listeners
            .lock()
            .get(path)
            .map(|entries| entries.iter().map(|(_, l)| Arc::clone(l)).collect())
            .unwrap_or_default();

        for listener in targets {
            listener(snapshot.clone());
        }
    }

    /// Number of live listeners on `path`
    pub fn listener_count(&self, path: &DocumentPath) -> usize {
        self.listeners.lock().get(path).map_or(0, Vec::len)
    }

    fn remove(&self, path: &DocumentPath, id: u64) {
        let mut listeners = self.listeners.lock();
        if let Some(entries) = listeners.get_mut(path) {
            entries.retain(|(entry_id, _)| *entry_id != id);
            if entries.is_empty() {
                listeners.remove(path);
            }
        }
        debug!(%path, listener = id, "Listener removed");
    }
}

/// Cancel handle for a document subscription.
///
/// Dropping the handle cancels the subscription.
pub struct Subscription {
    registry: Weak<ListenerRegistry>,
    path: DocumentPath,
    id: u64,
    active: bool,
}

impl Subscription {
    /// Stop deliveries. Calling it again is a no-op.
    pub fn cancel(&mut self) {
        if !self.active {
            return;
        }
        self.active = false;
        if let Some(registry) = self.registry.upgrade() {
            registry.remove(&self.path, self.id);
        }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn path(&self) -> &DocumentPath {
        &self.path
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.cancel();
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription")
            .field("path", &self.path)
            .field("id", &self.id)
            .field("active", &self.active)
            .finish()
    }
}
