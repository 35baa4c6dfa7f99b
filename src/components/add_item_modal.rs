//! Add-item dialog for the selected collection.

use dioxus::prelude::*;
use flist_core::{CollectionKind, ItemDraft, PriceInput, PRICE_SUFFIX};

use crate::context::{show_notice, use_notice, use_services};

/// Form for a new item; the price field shows thousands separators as
/// the user types.
#[component]
pub fn AddItemModal(show: bool, kind: CollectionKind, on_close: EventHandler<()>) -> Element {
    let services = use_services();
    let notice = use_notice();

    let mut brand = use_signal(String::new);
    let mut name = use_signal(String::new);
    let mut price = use_signal(PriceInput::default);
    let mut image = use_signal(String::new);
    let mut saving = use_signal(|| false);

    let mut reset = move || {
        brand.set(String::new());
        name.set(String::new());
        price.set(PriceInput::default());
        image.set(String::new());
    };

    if !show {
        return rsx! {};
    }

    let handle_submit = move |_| {
        if saving() {
            return;
        }
        let draft = ItemDraft {
            brand: brand(),
            name: name(),
            price: price(),
            image: image(),
        };
        let session = services.session.clone();
        saving.set(true);

        spawn(async move {
            match session.add_item(kind, draft).await {
                Ok(item) => {
                    tracing::info!(id = %item.id, collection = kind.label(), "Item added");
                    reset();
                    show_notice(notice, "Item added!");
                    on_close.call(());
                }
                Err(e) => show_notice(notice, e.user_notice()),
            }
            saving.set(false);
        });
    };

    rsx! {
        div { class: "modal-overlay",
            onclick: move |_| on_close.call(()),

            div {
                class: "modal-content add-item-modal",
                onclick: move |evt| evt.stop_propagation(),

                header { class: "modal-header", "Add to {kind.label()}" }

                label { class: "field-label", "Brand" }
                input {
                    class: "input-field",
                    placeholder: "Brand",
                    value: "{brand}",
                    oninput: move |e| brand.set(e.value()),
                }

                label { class: "field-label", "Name" }
                textarea {
                    class: "input-field",
                    placeholder: "Item name",
                    value: "{name}",
                    oninput: move |e| name.set(e.value()),
                }

                label { class: "field-label", "Price" }
                div { class: "price-field",
                    input {
                        class: "input-field",
                        inputmode: "numeric",
                        placeholder: "0",
                        value: "{price.read().display()}",
                        oninput: move |e| price.write().set_raw(&e.value()),
                    }
                    span { class: "price-suffix", "{PRICE_SUFFIX}" }
                }

                label { class: "field-label", "Image URL" }
                input {
                    class: "input-field",
                    placeholder: "https://",
                    value: "{image}",
                    oninput: move |e| image.set(e.value()),
                }

                div { class: "modal-actions",
                    button {
                        class: "btn-secondary",
                        onclick: move |_| on_close.call(()),
                        "Cancel"
                    }
                    button {
                        class: "btn-primary",
                        disabled: saving(),
                        onclick: handle_submit,
                        "Add"
                    }
                }
            }
        }
    }
}
