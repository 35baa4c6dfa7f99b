//! Home page - profile header and the two item collections.
//!
//! Every press anywhere on the page bubbles up to the root, which closes
//! whatever profile editor the press landed outside of.

use dioxus::prelude::*;
use flist_core::{CollectionKind, EditRegion, FlistError, ProfileEditors, SessionPhase};

use crate::components::{
    apply_profile_commits, AddItemModal, CollectionTabs, Header, HeaderLocation, ItemGrid,
    LoadingScreen, ProfileEditor,
};
use crate::context::{show_notice, use_notice, use_services, use_session_snapshot};

#[component]
pub fn Home() -> Element {
    let services = use_services();
    let snapshot = use_session_snapshot();
    let notice = use_notice();

    let mut editors = use_signal(ProfileEditors::default);
    let mut clicked_region: Signal<Option<EditRegion>> = use_signal(|| None);
    let mut active_tab = use_signal(CollectionKind::default);
    let mut show_add_item = use_signal(|| false);

    let phase = snapshot.read().phase;
    let signed_in = snapshot.read().is_signed_in();
    let items = snapshot.read().items.get(active_tab()).to_vec();

    // Editors left open when the session goes away would write nowhere
    use_effect(move || {
        if !snapshot.read().is_signed_in() {
            editors.set(ProfileEditors::default());
            show_add_item.set(false);
        }
    });

    let route_click = move |_| {
        let inside = clicked_region.write().take();
        let commits = editors.write().route_click(inside);
        if !commits.is_empty() {
            apply_profile_commits(&services, notice, commits);
        }
    };

    let open_add_item = move |evt: MouseEvent| {
        evt.stop_propagation();
        if phase == SessionPhase::Active {
            show_add_item.set(true);
        } else {
            show_notice(notice, FlistError::NotSignedIn.user_notice());
        }
    };

    if phase == SessionPhase::Loading {
        return rsx! {
            Header { location: HeaderLocation::Home }
            LoadingScreen {}
        };
    }

    rsx! {
        div { class: "page home", onclick: route_click,
            Header { location: HeaderLocation::Home }

            ProfileEditor { editors, clicked_region }

            CollectionTabs {
                active: active_tab(),
                on_select: move |kind| active_tab.set(kind),
            }

            main { class: "collection",
                ItemGrid { kind: active_tab(), items }
            }

            if signed_in {
                button {
                    class: "fab",
                    title: "Add item",
                    onclick: open_add_item,
                    "+"
                }
            }

            AddItemModal {
                show: show_add_item(),
                kind: active_tab(),
                on_close: move |_| show_add_item.set(false),
            }
        }
    }
}
