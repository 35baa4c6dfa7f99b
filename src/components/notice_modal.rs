use dioxus::prelude::*;

use crate::context::use_notice;

/// Blocking notice with a single confirm button.
#[component]
pub fn NoticeModal() -> Element {
    let mut notice = use_notice();

    let Some(current) = notice() else {
        return rsx! {};
    };

    rsx! {
        div { class: "modal-overlay notice-overlay",
            div { class: "modal-content notice-modal",
                p { class: "notice-message", "{current.message}" }
                button {
                    class: "btn-primary",
                    autofocus: true,
                    onclick: move |_| notice.set(None),
                    "OK"
                }
            }
        }
    }
}
