//! Style Board page - a titled grid of up to six local photos.
//!
//! The board lives only in memory; leaving the page discards it.

use dioxus::prelude::*;
use flist_core::style_board::BOARD_INSTRUCTIONS;
use flist_core::{GridSlot, StyleBoard};

use crate::components::images::pick_board_photos;
use crate::components::{Header, HeaderLocation};
use crate::context::{show_notice, use_notice};

#[component]
pub fn Board() -> Element {
    let notice = use_notice();
    let mut board = use_signal(StyleBoard::new);

    let editing_title = board.read().title.is_editing();
    let title_text = board.read().title.text().to_string();
    let title_is_placeholder = board.read().title.is_placeholder();
    let slots = board.read().grid_slots();
    let show_instructions = board.read().show_instructions();

    let add_photos = move |_| {
        if board.read().is_full() {
            return;
        }
        spawn(async move {
            match pick_board_photos().await {
                Ok(images) => {
                    let picked = images.len();
                    let added = board.write().add_photos(images);
                    if added < picked {
                        tracing::debug!(picked, added, "Board full, extra photos skipped");
                    }
                }
                Err(e) => {
                    tracing::error!("Failed to load board photos: {}", e);
                    show_notice(notice, "Failed to load the photo.");
                }
            }
        });
    };

    rsx! {
        div { class: "page board",
            Header { location: HeaderLocation::Board }

            div { class: "board-title",
                if editing_title {
                    input {
                        class: "inline-input board-title-input",
                        value: "{title_text}",
                        autofocus: true,
                        oninput: move |e| board.write().title.set(&e.value()),
                        onblur: move |_| board.write().title.commit(),
                        onkeydown: move |evt: KeyboardEvent| {
                            if evt.key() == Key::Enter {
                                board.write().title.commit();
                            }
                        },
                    }
                } else {
                    h2 {
                        class: if title_is_placeholder { "board-title-text placeholder" } else { "board-title-text" },
                        onclick: move |_| board.write().title.begin_edit(),
                        "{title_text}"
                    }
                }
            }

            if show_instructions {
                p { class: "board-instructions", "{BOARD_INSTRUCTIONS}" }
            }

            div { class: "board-grid",
                for (index, slot) in slots.into_iter().enumerate() {
                    {match slot {
                        GridSlot::Photo(photo) => {
                            let id = photo.id;
                            rsx! {
                                div {
                                    key: "{photo.id}",
                                    class: "board-cell photo",
                                    title: "Double-click to remove",
                                    ondoubleclick: move |_| {
                                        board.write().remove_photo(id);
                                    },
                                    img { src: "{photo.src.as_str()}", alt: "" }
                                }
                            }
                        }
                        GridSlot::Add => rsx! {
                            button {
                                key: "add",
                                class: "board-cell add",
                                onclick: add_photos,
                                "+"
                            }
                        },
                        GridSlot::Empty => rsx! {
                            div { key: "empty-{index}", class: "board-cell empty" }
                        },
                    }}
                }
            }
        }
    }
}
