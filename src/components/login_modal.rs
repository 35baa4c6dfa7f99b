//! Sign-in dialog.

use dioxus::prelude::*;
use flist_core::SignInOutcome;

use crate::context::{show_notice, use_notice, use_services};

/// Sign-in dialog with a single provider button.
///
/// Closes on success and when the flow switches to the full-page handoff.
/// The handoff result is picked up right away, since the desktop shell
/// never actually leaves the page.
#[component]
pub fn LoginModal(show: bool, on_close: EventHandler<()>) -> Element {
    let services = use_services();
    let notice = use_notice();
    let mut signing_in = use_signal(|| false);

    if !show {
        return rsx! {};
    }

    let handle_sign_in = move |_| {
        let auth = services.auth.clone();
        signing_in.set(true);

        spawn(async move {
            let result = match auth.sign_in().await {
                Ok(SignInOutcome::SignedIn(identity)) => {
                    tracing::info!(uid = %identity.uid, "Signed in");
                    Ok(())
                }
                Ok(SignInOutcome::RedirectStarted) => {
                    auth.check_pending_result().await.map(|_| ())
                }
                Err(e) => Err(e),
            };

            signing_in.set(false);
            match result {
                Ok(()) => on_close.call(()),
                Err(e) => show_notice(notice, e.user_notice()),
            }
        });
    };

    rsx! {
        div { class: "modal-overlay",
            onclick: move |_| on_close.call(()),

            div {
                class: "modal-content login-modal",
                onclick: move |evt| evt.stop_propagation(),

                header { class: "modal-header", "Sign in" }
                p { class: "login-hint", "Sign-in is required to use F-list." }
                button {
                    class: "google-btn",
                    disabled: signing_in(),
                    onclick: handle_sign_in,
                    span { class: "google-mark", "G" }
                    if signing_in() {
                        "Signing in..."
                    } else {
                        "Sign in with Google"
                    }
                }
            }
        }
    }
}
