//! Session lifecycle integration tests
//!
//! Drive a `SessionController` against in-memory and redb-backed stores and
//! check what ends up in the snapshot and in the stored documents.

use std::sync::Arc;
use std::time::Duration;

use serde_json::json;
use tempfile::tempdir;
use tokio::sync::watch;

use flist_core::{
    CollectionKind, Document, DocumentPath, FlistError, ItemDraft, MemoryStore, Profile,
    RedbStore, SessionController, SessionEvent, SessionPhase, Storage, UserIdentity,
    DEFAULT_DESCRIPTION, DEFAULT_NICKNAME,
};

fn identity(uid: &str, name: &str) -> UserIdentity {
    UserIdentity::new(uid)
        .with_display_name(name)
        .with_email(format!("{name}@example.com"))
}

fn doc(value: serde_json::Value) -> Document {
    match value {
        serde_json::Value::Object(map) => map,
        _ => panic!("expected object"),
    }
}

fn setup() -> (Arc<SessionController>, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::new());
    (Arc::new(SessionController::new(store.clone())), store)
}

fn draft(name: &str) -> ItemDraft {
    ItemDraft::new("Acne", name, "52000", "https://img.example/item.png")
}

/// Wait for the first event matching `pred`
async fn wait_for<F>(events: &mut tokio::sync::broadcast::Receiver<SessionEvent>, pred: F)
where
    F: Fn(&SessionEvent) -> bool,
{
    tokio::time::timeout(Duration::from_secs(5), async {
        loop {
            match events.recv().await {
                Ok(event) if pred(&event) => return,
                Ok(_) => continue,
                Err(tokio::sync::broadcast::error::RecvError::Lagged(_)) => continue,
                Err(e) => panic!("event channel closed: {e}"),
            }
        }
    })
    .await
    .expect("timed out waiting for session event");
}

// ============================================================================
// First sign-in
// ============================================================================

/// First sign-in provisions the default profile and persists exactly it
#[tokio::test]
async fn test_first_sign_in_provisions_profile() {
    let (session, store) = setup();
    let mina = identity("u1", "mina").with_photo_url("https://photos.example/mina.png");

    session.sign_in(mina.clone()).await;

    let expected = Profile::provisioned_for(&mina);
    assert_eq!(expected.nickname, "@mina");
    assert_eq!(expected.description, DEFAULT_DESCRIPTION);
    assert_eq!(
        expected.profile_image.as_str(),
        "https://photos.example/mina.png"
    );

    let writes = store.writes_to(&DocumentPath::profile("u1"));
    assert_eq!(writes.len(), 1);
    assert_eq!(writes[0], expected.to_document().unwrap());

    let snapshot = session.snapshot();
    assert_eq!(snapshot.phase, SessionPhase::Active);
    assert_eq!(snapshot.profile, expected);
}

/// Without a display name the nickname falls back to "@user"
#[tokio::test]
async fn test_provisioned_nickname_without_display_name() {
    let (session, store) = setup();
    session.sign_in(UserIdentity::new("u2")).await;

    assert_eq!(session.snapshot().profile.nickname, "@user");
    let stored = store.get(&DocumentPath::profile("u2")).unwrap();
    assert_eq!(stored["nickname"], "@user");
    assert_eq!(stored["profileImage"], "");
}

/// A stored profile is adopted field by field, with no write
#[tokio::test]
async fn test_existing_profile_adopted_with_fallbacks() {
    let (session, store) = setup();
    store.put(
        &DocumentPath::profile("u1"),
        doc(json!({ "nickname": "@closet_queen", "description": "" })),
    );

    session.sign_in(identity("u1", "mina")).await;

    let profile = session.snapshot().profile;
    assert_eq!(profile.nickname, "@closet_queen");
    assert_eq!(profile.description, DEFAULT_DESCRIPTION);
    assert!(store.writes_to(&DocumentPath::profile("u1")).is_empty());
}

/// Provisioning write failure still activates the session and reports it
#[tokio::test]
async fn test_provisioning_write_failure_reported() {
    let (session, store) = setup();
    let mut events = session.subscribe_events();
    store.fail_writes(true);

    session.sign_in(identity("u1", "mina")).await;

    assert_eq!(session.phase(), SessionPhase::Active);
    assert_eq!(session.snapshot().profile.nickname, "@mina");
    assert!(session.has_live_subscription());
    wait_for(&mut events, |e| {
        matches!(e, SessionEvent::Error { notice } if notice == "Failed to save. Please try again.")
    })
    .await;
}

/// Read failure falls back to defaults and reports it; the subscription attempt
/// fails too because the store rejects every read
#[tokio::test]
async fn test_profile_read_failure_reported() {
    let (session, store) = setup();
    let mut events = session.subscribe_events();
    store.fail_reads(true);

    session.sign_in(identity("u1", "mina")).await;

    assert_eq!(session.phase(), SessionPhase::Active);
    assert_eq!(session.snapshot().profile.nickname, "@mina");
    assert!(!session.has_live_subscription());
    wait_for(&mut events, |e| {
        matches!(e, SessionEvent::Error { notice } if notice == "Failed to load your data.")
    })
    .await;
}

// ============================================================================
// Sign-out
// ============================================================================

/// Sign-out resets everything to the fixed defaults
#[tokio::test]
async fn test_sign_out_resets_to_defaults() {
    let (session, store) = setup();
    session.sign_in(identity("u1", "mina")).await;
    session.set_nickname("@changed".into()).await.unwrap();
    session
        .add_item(CollectionKind::Wishlist, draft("Coat"))
        .await
        .unwrap();

    session.handle_identity(None).await;

    let snapshot = session.snapshot();
    assert_eq!(snapshot.phase, SessionPhase::Anonymous);
    assert!(snapshot.identity.is_none());
    assert_eq!(snapshot.profile.nickname, DEFAULT_NICKNAME);
    assert_eq!(snapshot.profile.description, DEFAULT_DESCRIPTION);
    assert!(!snapshot.profile.profile_image.is_available());
    assert!(snapshot.items.is_empty());
    assert!(!session.has_live_subscription());
    assert_eq!(store.listener_count(&DocumentPath::items("u1")), 0);
}

// ============================================================================
// Subscriptions
// ============================================================================

/// Deliveries for a previous identity never reach the new session
#[tokio::test]
async fn test_no_deliveries_for_previous_identity() {
    let (session, store) = setup();
    session.sign_in(identity("u1", "mina")).await;
    session.handle_identity(None).await;
    session.sign_in(identity("u2", "jun")).await;

    store.put(
        &DocumentPath::items("u1"),
        doc(json!({
            "zipsItems": [{ "id": "1", "brand": "A", "name": "B", "price": "1won", "image": "" }],
            "wishlistItems": []
        })),
    );

    assert!(session.snapshot().items.is_empty());
    assert_eq!(store.listener_count(&DocumentPath::items("u1")), 0);
    assert_eq!(store.listener_count(&DocumentPath::items("u2")), 1);
}

/// Switching identity without a sign-out still keeps one subscription
#[tokio::test]
async fn test_reauth_replaces_subscription() {
    let (session, store) = setup();
    session.sign_in(identity("u1", "mina")).await;
    session.sign_in(identity("u2", "jun")).await;
    session.sign_in(identity("u1", "mina")).await;

    assert_eq!(store.listener_count(&DocumentPath::items("u1")), 1);
    assert_eq!(store.listener_count(&DocumentPath::items("u2")), 0);
    assert_eq!(session.snapshot().uid(), Some("u1"));
}

/// Remote changes replace both collections wholesale
#[tokio::test]
async fn test_remote_change_replaces_collections() {
    let (session, store) = setup();
    session.sign_in(identity("u1", "mina")).await;

    store.put(
        &DocumentPath::items("u1"),
        doc(json!({
            "zipsItems": [],
            "wishlistItems": [
                { "id": "7", "brand": "Lemaire", "name": "Croissant bag", "price": "890,000won", "image": "" }
            ]
        })),
    );

    let items = session.snapshot().items;
    assert!(items.zips.is_empty());
    assert_eq!(items.wishlist.len(), 1);
    assert_eq!(items.wishlist[0].brand, "Lemaire");
}

// ============================================================================
// Catalog
// ============================================================================

/// Adding on the zips tab touches only zips and writes both in one call
#[tokio::test]
async fn test_add_item_on_zips_tab() {
    let (session, store) = setup();
    session.sign_in(identity("u1", "mina")).await;

    let item = session
        .add_item(CollectionKind::Zips, draft("Wool coat"))
        .await
        .unwrap();
    assert_eq!(item.price, "52,000won");

    let items = session.snapshot().items;
    assert_eq!(items.zips.len(), 1);
    assert_eq!(items.wishlist.len(), 0);

    let writes = store.writes_to(&DocumentPath::items("u1"));
    assert_eq!(writes.len(), 1);
    assert_eq!(writes[0]["zipsItems"].as_array().unwrap().len(), 1);
    assert_eq!(writes[0]["wishlistItems"].as_array().unwrap().len(), 0);
    assert_eq!(writes[0]["zipsItems"][0]["price"], "52,000won");
}

/// Signed-out add is rejected and nothing is written
#[tokio::test]
async fn test_add_item_requires_session() {
    let (session, store) = setup();
    let err = session
        .add_item(CollectionKind::Zips, draft("Coat"))
        .await
        .unwrap_err();

    assert!(matches!(err, FlistError::NotSignedIn));
    assert_eq!(err.user_notice(), "Sign-in required!");
    assert!(store.writes_to(&DocumentPath::items("u1")).is_empty());
}

/// A failed write keeps the optimistic state
#[tokio::test]
async fn test_failed_writes_keep_optimistic_state() {
    let (session, store) = setup();
    session.sign_in(identity("u1", "mina")).await;
    store.fail_writes(true);

    let err = session
        .add_item(CollectionKind::Wishlist, draft("Scarf"))
        .await
        .unwrap_err();
    assert!(matches!(err, FlistError::RemoteWriteFailed(_)));
    assert_eq!(session.snapshot().items.wishlist.len(), 1);

    let err = session
        .set_description("Only denim".into())
        .await
        .unwrap_err();
    assert!(err.is_remote());
    assert_eq!(session.snapshot().profile.description, "Only denim");
}

/// Field edits write only the changed field
#[tokio::test]
async fn test_field_edits_are_single_field_merges() {
    let (session, store) = setup();
    session.sign_in(identity("u1", "mina")).await;

    session.set_nickname("@abc".into()).await.unwrap();
    session
        .set_profile_image("data:image/png;base64,AAAA".into())
        .await
        .unwrap();

    let writes = store.writes_to(&DocumentPath::profile("u1"));
    assert_eq!(writes.len(), 3);
    assert_eq!(writes[1], doc(json!({ "nickname": "@abc" })));
    assert_eq!(
        writes[2],
        doc(json!({ "profileImage": "data:image/png;base64,AAAA" }))
    );

    let stored = store.get(&DocumentPath::profile("u1")).unwrap();
    assert_eq!(stored["nickname"], "@abc");
    assert_eq!(stored["description"], DEFAULT_DESCRIPTION);
}

// ============================================================================
// Identity channel
// ============================================================================

/// `run` follows the identity channel until it closes
#[tokio::test]
async fn test_run_follows_identity_channel() {
    let (session, _store) = setup();
    let mut events = session.subscribe_events();
    let (tx, rx) = watch::channel(None);

    let runner = tokio::spawn({
        let session = session.clone();
        async move { session.run(rx).await }
    });

    tx.send_replace(Some(identity("u1", "mina")));
    wait_for(&mut events, |e| {
        matches!(e, SessionEvent::PhaseChanged(SessionPhase::Active))
    })
    .await;
    assert_eq!(session.snapshot().profile.nickname, "@mina");

    tx.send_replace(None);
    wait_for(&mut events, |e| {
        matches!(e, SessionEvent::PhaseChanged(SessionPhase::Anonymous))
    })
    .await;

    drop(tx);
    tokio::time::timeout(Duration::from_secs(5), runner)
        .await
        .expect("runner should stop when the channel closes")
        .unwrap();
}

// ============================================================================
// Durable backend
// ============================================================================

/// Profile and items survive a restart with the redb store
#[tokio::test]
async fn test_redb_session_survives_restart() {
    let temp_dir = tempdir().unwrap();
    let db_path = temp_dir.path().join("flist.redb");
    let mina = identity("u1", "mina");

    {
        let store = Arc::new(RedbStore::new(Storage::new(&db_path).unwrap()));
        let session = SessionController::new(store);
        session.sign_in(mina.clone()).await;
        session.set_nickname("@mina_closet".into()).await.unwrap();
        session
            .add_item(CollectionKind::Zips, draft("Coat"))
            .await
            .unwrap();
        session.sign_out();
    }

    let store = Arc::new(RedbStore::new(Storage::new(&db_path).unwrap()));
    let session = SessionController::new(store);
    session.sign_in(mina).await;

    let snapshot = session.snapshot();
    assert_eq!(snapshot.profile.nickname, "@mina_closet");
    assert_eq!(snapshot.items.zips.len(), 1);
    assert_eq!(snapshot.items.zips[0].name, "Coat");
}
