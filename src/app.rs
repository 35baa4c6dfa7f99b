use dioxus::prelude::*;
use flist_core::SessionEvent;
use tokio::sync::broadcast::error::RecvError;

use crate::components::NoticeModal;
use crate::context::{show_notice, use_services, Notice};
use crate::pages::{Board, Home};
use crate::theme::GLOBAL_STYLES;

/// Application routes.
///
/// - `/` - Profile and catalog
/// - `/board` - Style board
#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[route("/")]
    Home {},
    #[route("/board")]
    Board {},
}

/// Root application component.
///
/// Provides global styles, session state, notices and routing.
#[component]
pub fn App() -> Element {
    let services = use_services();
    let initial = services.session.snapshot();

    let mut snapshot = use_signal(|| initial);
    let notice: Signal<Option<Notice>> = use_signal(|| None);
    use_context_provider(|| snapshot);
    use_context_provider(|| notice);

    // Start the session and mirror its events into the snapshot signal
    use_effect(move || {
        let services = services.clone();
        let mut events = services.session.subscribe_events();

        let session = services.session.clone();
        spawn(async move {
            loop {
                match events.recv().await {
                    Ok(SessionEvent::Error { notice: message }) => show_notice(notice, message),
                    Ok(_) => snapshot.set(session.snapshot()),
                    Err(RecvError::Lagged(n)) => {
                        tracing::warn!("Session events lagged by {}", n);
                        snapshot.set(session.snapshot());
                    }
                    Err(RecvError::Closed) => break,
                }
            }
        });

        // Pick up a handoff sign-in left pending by a previous run
        let auth = services.auth.clone();
        spawn(async move {
            if let Err(e) = auth.check_pending_result().await {
                show_notice(notice, e.user_notice());
            }
        });

        let session = services.session.clone();
        let identities = services.auth.gateway().identity_changes();
        spawn(async move {
            session.run(identities).await;
        });
    });

    rsx! {
        style { {GLOBAL_STYLES} }
        Router::<Route> {}
        NoticeModal {}
    }
}
