//! Drives the session state machine from identity changes.

use std::sync::Arc;

use parking_lot::{Mutex, RwLock};
use tokio::sync::{broadcast, watch};
use tracing::{debug, error, info, warn};

use super::{SessionEvent, SessionPhase, SessionSnapshot};
use crate::catalog::ItemDraft;
use crate::error::{FlistError, FlistResult};
use crate::store::{DocumentPath, DocumentSnapshot, DocumentStore, Listener, Subscription};
use crate::types::{CollectionKind, Item, ItemCollections, Profile, ProfileField, UserIdentity};

/// Default capacity for the event broadcast channel
const EVENT_CHANNEL_CAPACITY: usize = 256;

/// Owns the signed-in user's profile and item snapshots.
///
/// Local state is updated before each remote write and is not rolled back
/// when the write fails; the failure is returned to the caller.
///
/// # Example
///
/// ```ignore
/// let session = Arc::new(SessionController::new(store));
/// let mut events = session.subscribe_events();
///
/// tokio::spawn({
///     let session = session.clone();
///     async move { session.run(gateway.identity_changes()).await }
/// });
///
/// while let Ok(event) = events.recv().await {
///     if let SessionEvent::ItemsChanged(items) = event {
///         println!("{} zips", items.zips.len());
///     }
/// }
/// ```
pub struct SessionController {
    store: Arc<dyn DocumentStore>,
    state: Arc<RwLock<SessionSnapshot>>,
    items_subscription: Mutex<Option<Subscription>>,
    event_tx: broadcast::Sender<SessionEvent>,
}

impl SessionController {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        let (event_tx, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);
        Self {
            store,
            state: Arc::new(RwLock::new(SessionSnapshot::default())),
            items_subscription: Mutex::new(None),
            event_tx,
        }
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        self.state.read().clone()
    }

    pub fn phase(&self) -> SessionPhase {
        self.state.read().phase
    }

    /// Subscribe to snapshot changes.
    ///
    /// Multiple subscribers can exist; events are broadcast to all.
    pub fn subscribe_events(&self) -> broadcast::Receiver<SessionEvent> {
        self.event_tx.subscribe()
    }

    /// True while an items subscription is open
    pub fn has_live_subscription(&self) -> bool {
        self.items_subscription
            .lock()
            .as_ref()
            .is_some_and(|s| s.is_active())
    }

    /// Follow the gateway's identity channel until it closes.
    ///
    /// The current value is handled first, then every change.
    pub async fn run(&self, mut identities: watch::Receiver<Option<UserIdentity>>) {
        loop {
            let current = identities.borrow_and_update().clone();
            self.handle_identity(current).await;

            if identities.changed().await.is_err() {
                break;
            }
        }
        info!("Identity channel closed, session controller stopped");
    }

    /// React to one identity notification.
    pub async fn handle_identity(&self, identity: Option<UserIdentity>) {
        match identity {
            Some(identity) => {
                let unchanged = {
                    let state = self.state.read();
                    state.is_active() && state.identity.as_ref() == Some(&identity)
                };
                if unchanged {
                    debug!(uid = %identity.uid, "Identity unchanged, keeping session");
                    return;
                }
                self.sign_in(identity).await;
            }
            None => {
                let signed_out = {
                    let state = self.state.read();
                    state.phase == SessionPhase::Anonymous && state.identity.is_none()
                };
                if !signed_out {
                    self.sign_out();
                }
            }
        }
    }

    /// Anonymous/Active → Loading → Active for `identity`.
    pub async fn sign_in(&self, identity: UserIdentity) {
        let uid = identity.uid.clone();
        info!(%uid, "Session starting");

        self.cancel_items_subscription();
        {
            let mut state = self.state.write();
            if state.uid() != Some(uid.as_str()) {
                state.profile = Profile::default();
                state.items = ItemCollections::default();
            }
            state.identity = Some(identity.clone());
            state.phase = SessionPhase::Loading;
        }
        self.emit(SessionEvent::PhaseChanged(SessionPhase::Loading));

        let profile = self.load_profile(&identity).await;

        {
            let mut state = self.state.write();
            if state.uid() != Some(uid.as_str()) {
                debug!(%uid, "Identity changed while loading, abandoning");
                return;
            }
            state.profile = profile.clone();
            state.phase = SessionPhase::Active;
        }
        self.emit(SessionEvent::ProfileChanged(profile));
        self.emit(SessionEvent::PhaseChanged(SessionPhase::Active));

        self.open_items_subscription(&uid).await;
    }

    /// Any phase → Anonymous with every field back at its default.
    pub fn sign_out(&self) {
        self.cancel_items_subscription();

        let previous = {
            let mut state = self.state.write();
            let previous = state.uid().map(str::to_string);
            *state = SessionSnapshot::default();
            previous
        };
        info!(uid = ?previous, "Session reset to anonymous");

        self.emit(SessionEvent::ProfileChanged(Profile::default()));
        self.emit(SessionEvent::ItemsChanged(ItemCollections::default()));
        self.emit(SessionEvent::PhaseChanged(SessionPhase::Anonymous));
    }

    pub async fn set_nickname(&self, nickname: String) -> FlistResult<()> {
        self.update_profile_field(ProfileField::Nickname, nickname).await
    }

    pub async fn set_description(&self, description: String) -> FlistResult<()> {
        self.update_profile_field(ProfileField::Description, description).await
    }

    /// `image` is a data URI or URL
    pub async fn set_profile_image(&self, image: String) -> FlistResult<()> {
        self.update_profile_field(ProfileField::ProfileImage, image).await
    }

    /// Append an item to `kind` and write both collections in one call.
    pub async fn add_item(&self, kind: CollectionKind, draft: ItemDraft) -> FlistResult<Item> {
        let uid = self.active_uid()?;
        let item = draft.into_item()?;

        let (items, doc) = {
            let mut state = self.state.write();
            state.items.push(kind, item.clone());
            let doc = state.items.to_document()?;
            (state.items.clone(), doc)
        };
        self.emit(SessionEvent::ItemsChanged(items));

        let path = DocumentPath::items(&uid);
        match self.store.merge_write(&path, doc).await {
            Ok(()) => {
                info!(%uid, item = %item.id, collection = kind.label(), "Item added");
                Ok(item)
            }
            Err(e) => {
                error!(%uid, error = %e, "Saving items failed");
                Err(e)
            }
        }
    }

    async fn update_profile_field(&self, field: ProfileField, value: String) -> FlistResult<()> {
        let uid = self.active_uid()?;

        let profile = {
            let mut state = self.state.write();
            state.profile.set_field(field, value.clone());
            state.profile.clone()
        };
        self.emit(SessionEvent::ProfileChanged(profile));

        let path = DocumentPath::profile(&uid);
        self.store
            .merge_write(&path, Profile::field_document(field, &value))
            .await
            .map_err(|e| {
                error!(%uid, field = field.wire_name(), error = %e, "Saving profile field failed");
                e
            })
    }

    fn active_uid(&self) -> FlistResult<String> {
        let state = self.state.read();
        match (state.phase, state.uid()) {
            (SessionPhase::Active, Some(uid)) => Ok(uid.to_string()),
            _ => Err(FlistError::NotSignedIn),
        }
    }

    /// Stored profile with per-field fallback, or a newly provisioned one.
    ///
    /// Failures are reported as events; the session still becomes active.
    async fn load_profile(&self, identity: &UserIdentity) -> Profile {
        let path = DocumentPath::profile(&identity.uid);

        match self.store.read(&path).await {
            Ok(Some(doc)) => {
                debug!(uid = %identity.uid, "Adopting stored profile");
                Profile::from_document(&doc, identity)
            }
            Ok(None) => {
                let profile = Profile::provisioned_for(identity);
                info!(uid = %identity.uid, nickname = %profile.nickname, "Provisioning first-login profile");
                if let Err(e) = self.persist_profile(&path, &profile).await {
                    error!(uid = %identity.uid, error = %e, "Provisioning profile failed");
                    self.report(&e);
                }
                profile
            }
            Err(e) => {
                error!(uid = %identity.uid, error = %e, "Loading profile failed");
                self.report(&e);
                Profile::provisioned_for(identity)
            }
        }
    }

    async fn persist_profile(&self, path: &DocumentPath, profile: &Profile) -> FlistResult<()> {
        let doc = profile.to_document()?;
        self.store.merge_write(path, doc).await
    }

    async fn open_items_subscription(&self, uid: &str) {
        let path = DocumentPath::items(uid);
        match self.store.subscribe(&path, self.items_listener(uid)).await {
            Ok(mut subscription) => {
                let still_current = self.state.read().uid() == Some(uid);
                if !still_current {
                    subscription.cancel();
                    return;
                }
                debug!(%uid, "Items subscription opened");
                if let Some(mut old) = self.items_subscription.lock().replace(subscription) {
                    old.cancel();
                }
            }
            Err(e) => {
                error!(%uid, error = %e, "Opening items subscription failed");
                self.report(&e);
            }
        }
    }

    fn cancel_items_subscription(&self) {
        if let Some(mut subscription) = self.items_subscription.lock().take() {
            debug!(path = %subscription.path(), "Items subscription cancelled");
            subscription.cancel();
        }
    }

    /// Delivery callback tagged with the identity it was opened for.
    fn items_listener(&self, uid: &str) -> Listener {
        let uid = uid.to_string();
        let state = Arc::clone(&self.state);
        let event_tx = self.event_tx.clone();

        Arc::new(move |snapshot: DocumentSnapshot| {
            let items = ItemCollections::from_snapshot(&snapshot);
            {
                let mut state = state.write();
                if state.uid() != Some(uid.as_str()) {
                    warn!(%uid, "Dropping items delivery for a previous identity");
                    return;
                }
                state.items = items.clone();
            }
            let _ = event_tx.send(SessionEvent::ItemsChanged(items));
        })
    }

    fn report(&self, err: &FlistError) {
        self.emit(SessionEvent::Error {
            notice: err.user_notice(),
        });
    }

    fn emit(&self, event: SessionEvent) {
        // No receivers is fine
        let _ = self.event_tx.send(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{Document, MemoryStore};
    use serde_json::json;

    fn create_session() -> (SessionController, Arc<MemoryStore>) {
        let store = Arc::new(MemoryStore::new());
        (SessionController::new(store.clone()), store)
    }

    fn mina() -> UserIdentity {
        UserIdentity::new("u-mina").with_display_name("mina")
    }

    #[tokio::test]
    async fn test_sign_in_reaches_active_with_subscription() {
        let (session, store) = create_session();
        session.sign_in(mina()).await;

        let snapshot = session.snapshot();
        assert_eq!(snapshot.phase, SessionPhase::Active);
        assert_eq!(snapshot.profile.nickname, "@mina");
        assert!(session.has_live_subscription());
        assert_eq!(store.listener_count(&DocumentPath::items("u-mina")), 1);
    }

    #[tokio::test]
    async fn test_stale_listener_is_ignored() {
        let (session, _store) = create_session();
        session.sign_in(mina()).await;

        let stale = session.items_listener("u-other");
        let mut doc = Document::new();
        doc.insert(
            "zipsItems".into(),
            json!([{ "id": "1", "brand": "A", "name": "B", "price": "1won", "image": "" }]),
        );
        stale(DocumentSnapshot::Present(doc));

        assert!(session.snapshot().items.is_empty());
    }

    #[tokio::test]
    async fn test_edits_rejected_when_anonymous() {
        let (session, store) = create_session();
        let err = session.set_nickname("@x".into()).await.unwrap_err();
        assert!(matches!(err, FlistError::NotSignedIn));
        assert!(store.writes_to(&DocumentPath::profile("u-mina")).is_empty());
    }

    #[tokio::test]
    async fn test_repeated_identity_is_noop() {
        let (session, store) = create_session();
        session.handle_identity(Some(mina())).await;
        session.handle_identity(Some(mina())).await;

        assert_eq!(store.writes_to(&DocumentPath::profile("u-mina")).len(), 1);
        assert_eq!(store.listener_count(&DocumentPath::items("u-mina")), 1);
    }
}
