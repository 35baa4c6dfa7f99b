//! Service and state context for F-list.
//!
//! Services are injected once at launch; the session snapshot and the
//! current notice are signals provided by the root component.
//!
//! ## Usage
//!
//! ```ignore
//! // In child components
//! let services = use_services();
//! let snapshot = use_session_snapshot();
//! show_notice(use_notice(), "Item added!");
//! ```

use std::path::Path;
use std::sync::Arc;

use dioxus::prelude::*;
use flist_core::{
    AuthFlow, FlistResult, LocalAuthConfig, LocalAuthGateway, RedbStore, SessionController,
    SessionSnapshot, Storage,
};

/// Database file inside the data directory
const DATABASE_FILE: &str = "flist.redb";

/// Long-lived services shared by every view.
#[derive(Clone)]
pub struct AppServices {
    pub session: Arc<SessionController>,
    pub auth: AuthFlow,
}

impl AppServices {
    /// Open storage under `data_dir` and wire the session to the local gateway.
    pub fn open(data_dir: &Path, auth_config: LocalAuthConfig) -> FlistResult<Self> {
        let storage = Storage::new(data_dir.join(DATABASE_FILE))?;
        let origin = auth_config.origin.clone();

        let store = Arc::new(RedbStore::new(storage.clone()));
        let gateway = Arc::new(LocalAuthGateway::new(storage, auth_config)?);

        Ok(Self {
            session: Arc::new(SessionController::new(store)),
            auth: AuthFlow::new(gateway, origin),
        })
    }
}

/// Blocking message shown over the whole window
#[derive(Clone, Debug, PartialEq)]
pub struct Notice {
    pub message: String,
}

/// Hook to access the services injected at launch.
pub fn use_services() -> AppServices {
    use_context::<AppServices>()
}

/// Hook to access the latest session snapshot.
///
/// Updated by the root component on every session event.
pub fn use_session_snapshot() -> Signal<SessionSnapshot> {
    use_context::<Signal<SessionSnapshot>>()
}

/// Hook to access the notice slot.
pub fn use_notice() -> Signal<Option<Notice>> {
    use_context::<Signal<Option<Notice>>>()
}

/// Show `message`, replacing any notice still open.
pub fn show_notice(mut notice: Signal<Option<Notice>>, message: impl Into<String>) {
    notice.set(Some(Notice {
        message: message.into(),
    }));
}
