use dioxus::prelude::*;

/// Full-screen placeholder while the profile loads after sign-in.
#[component]
pub fn LoadingScreen() -> Element {
    rsx! {
        div { class: "loading-screen",
            div { class: "spinner" }
            p { "Loading..." }
        }
    }
}
