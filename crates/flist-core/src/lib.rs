//! F-list Core Library
//!
//! Personal closet and wishlist catalog: one profile, two item collections,
//! sign-in through an external identity provider and per-user documents in
//! an external document store.
//!
//! ## Overview
//!
//! ```text
//! ┌──────────────┐ identity  ┌───────────────────┐ read / merge-write ┌───────────────┐
//! │ AuthGateway  │──────────▶│ SessionController │───────────────────▶│ DocumentStore │
//! │ (AuthFlow)   │  watch    │  Anonymous        │◀───────────────────│  users/{uid}  │
//! └──────────────┘           │  Loading          │    subscription    │  userItems/…  │
//!                            │  Active           │                    └───────────────┘
//!                            └─────────┬─────────┘
//!                                      │ SessionEvent (broadcast)
//!                                      ▼
//!                              profile editor, catalog view
//! ```
//!
//! The Style Board ([`style_board`]) is independent of all of the above and
//! never leaves the process.
//!
//! ## Quick Start
//!
//! ```ignore
//! use std::sync::Arc;
//! use flist_core::{AuthFlow, CollectionKind, ItemDraft, MemoryStore, SessionController};
//!
//! let store = Arc::new(MemoryStore::new());
//! let session = Arc::new(SessionController::new(store));
//! let auth = AuthFlow::new(gateway, "localhost");
//!
//! tokio::spawn({
//!     let session = session.clone();
//!     let identities = auth.gateway().identity_changes();
//!     async move { session.run(identities).await }
//! });
//!
//! auth.sign_in().await?;
//! session.add_item(CollectionKind::Zips, ItemDraft::new("Brand", "Jacket", "52000", "https://…")).await?;
//! ```

pub mod auth;
pub mod catalog;
pub mod config;
pub mod editor;
pub mod error;
pub mod session;
pub mod storage;
pub mod store;
pub mod style_board;
pub mod types;

// Re-exports
pub use auth::{
    AuthErrorCode, AuthFlow, AuthGateway, LocalAuthConfig, LocalAuthGateway, SignInOutcome,
};
#[cfg(any(test, feature = "test-util"))]
pub use auth::{GatewayCall, ScriptedAuthGateway};
pub use catalog::{format_thousands, ItemDraft, PriceInput, PRICE_SUFFIX};
pub use config::BackendConfig;
pub use editor::{EditRegion, EditorRules, InlineEditor, ProfileCommit, ProfileEditors};
pub use error::{FlistError, FlistResult};
pub use session::{SessionController, SessionEvent, SessionPhase, SessionSnapshot};
pub use storage::Storage;
pub use store::{
    Document, DocumentPath, DocumentSnapshot, DocumentStore, Listener, MemoryStore, RedbStore,
    Subscription,
};
pub use style_board::{BoardPhoto, BoardTitle, GridSlot, StyleBoard, MAX_PHOTOS};
pub use types::*;
