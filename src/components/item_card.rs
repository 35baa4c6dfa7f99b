//! Item grid for the selected collection.

use dioxus::prelude::*;
use flist_core::{CollectionKind, Item};

/// Shown under the empty-collection prompt
const ADD_ITEM_HINT: &str = "Press + to add an item!";

#[component]
pub fn ItemGrid(kind: CollectionKind, items: Vec<Item>) -> Element {
    if items.is_empty() {
        return rsx! {
            div { class: "empty-state",
                p { class: "empty-title", "{kind.empty_prompt()}" }
                p { class: "empty-hint", "{ADD_ITEM_HINT}" }
            }
        };
    }

    rsx! {
        div { class: "item-grid",
            for item in items {
                ItemCard { key: "{item.id}", item: item.clone() }
            }
        }
    }
}

/// Single catalog item: image, brand, name and price.
#[component]
pub fn ItemCard(item: Item) -> Element {
    rsx! {
        article { class: "item-card",
            div { class: "item-image",
                img { src: "{item.image.as_str()}", alt: "{item.name}" }
            }
            div { class: "item-info",
                span { class: "item-brand", "{item.brand}" }
                span { class: "item-name", "{item.name}" }
                span { class: "item-price", "{item.price}" }
            }
        }
    }
}
