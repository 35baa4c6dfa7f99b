use dioxus::prelude::*;
use flist_core::CollectionKind;

/// Zips / Wishlist switch above the item grid.
#[component]
pub fn CollectionTabs(active: CollectionKind, on_select: EventHandler<CollectionKind>) -> Element {
    rsx! {
        nav { class: "tabs",
            for kind in CollectionKind::all().iter().copied() {
                button {
                    key: "{kind.label()}",
                    class: if kind == active { "tab active" } else { "tab" },
                    onclick: move |_| on_select.call(kind),
                    "{kind.label()}"
                }
            }
        }
    }
}
