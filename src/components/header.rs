//! App Header
//!
//! Title on the left; on the home page a board link and the lock button,
//! on the board a home button.

use dioxus::prelude::*;

use crate::app::Route;
use crate::components::LoginModal;
use crate::context::{show_notice, use_notice, use_services, use_session_snapshot};

/// Page the header is shown on
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum HeaderLocation {
    Home,
    Board,
}

#[component]
pub fn Header(location: HeaderLocation) -> Element {
    rsx! {
        header { class: "app-header",
            h1 { class: "app-title", "F-list" }
            div { class: "header-buttons",
                {match location {
                    HeaderLocation::Home => rsx! {
                        Link {
                            class: "header-btn",
                            to: Route::Board {},
                            title: "Style Board",
                            "🖼"
                        }
                        LockButton {}
                    },
                    HeaderLocation::Board => rsx! {
                        Link {
                            class: "header-btn",
                            to: Route::Home {},
                            title: "Home",
                            "🏠"
                        }
                    },
                }}
            }
        }
    }
}

/// Closed lock opens the sign-in dialog; open lock signs out.
#[component]
fn LockButton() -> Element {
    let services = use_services();
    let snapshot = use_session_snapshot();
    let notice = use_notice();
    let mut show_login = use_signal(|| false);

    let signed_in = snapshot.read().is_signed_in();

    let handle_click = move |_| {
        if !signed_in {
            show_login.set(true);
            return;
        }
        let auth = services.auth.clone();
        spawn(async move {
            if auth.sign_out().await.is_err() {
                show_notice(notice, "Failed to sign out.");
            }
        });
    };

    rsx! {
        button {
            class: "header-btn lock-btn",
            title: if signed_in { "Sign out" } else { "Sign in" },
            onclick: handle_click,
            svg {
                class: "icon",
                fill: "none",
                stroke: "currentColor",
                view_box: "0 0 24 24",
                rect {
                    x: "3",
                    y: "11",
                    width: "18",
                    height: "10",
                    rx: "2",
                    ry: "2",
                    stroke_width: "2",
                }
                circle { cx: "12", cy: "16", r: "1", fill: "currentColor" }
                path {
                    d: if signed_in { "M7 11V7a5 5 0 0 1 9.9-1" } else { "M7 11V7a5 5 0 1 1 10 0v4" },
                    stroke_width: "2",
                    stroke_linecap: "round",
                }
            }
        }

        LoginModal {
            show: show_login(),
            on_close: move |_| show_login.set(false),
        }
    }
}
