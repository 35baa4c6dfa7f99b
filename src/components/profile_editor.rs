//! Profile Editor - avatar, nickname and description with inline editing
//!
//! Each region records itself in `clicked_region` when pressed. The page
//! root sees the press last and closes whatever was open elsewhere.

use dioxus::prelude::*;
use flist_core::{EditRegion, ProfileCommit, ProfileEditors};

use crate::components::images::pick_profile_photo;
use crate::context::{show_notice, use_notice, use_services, use_session_snapshot, AppServices, Notice};

/// Hand committed edits to the session, one write per field.
pub fn apply_profile_commits(
    services: &AppServices,
    notice: Signal<Option<Notice>>,
    commits: Vec<ProfileCommit>,
) {
    for commit in commits {
        let session = services.session.clone();
        spawn(async move {
            let result = match commit {
                ProfileCommit::Nickname(nickname) => session.set_nickname(nickname).await,
                ProfileCommit::Description(description) => {
                    session.set_description(description).await
                }
            };
            if let Err(e) = result {
                show_notice(notice, e.user_notice());
            }
        });
    }
}

#[component]
pub fn ProfileEditor(
    editors: Signal<ProfileEditors>,
    clicked_region: Signal<Option<EditRegion>>,
) -> Element {
    let snapshot = use_session_snapshot();
    let signed_in = snapshot.read().is_signed_in();
    let profile = snapshot.read().profile.clone();

    rsx! {
        section { class: "profile",
            Avatar {
                editors,
                clicked_region,
                src: profile.profile_image.as_str().to_string(),
                signed_in,
            }
            div { class: "profile-text",
                NicknameField {
                    editors,
                    clicked_region,
                    current: profile.nickname.clone(),
                    signed_in,
                }
                DescriptionField {
                    editors,
                    clicked_region,
                    current: profile.description.clone(),
                    signed_in,
                }
            }
        }
    }
}

#[component]
fn Avatar(
    editors: Signal<ProfileEditors>,
    clicked_region: Signal<Option<EditRegion>>,
    src: String,
    signed_in: bool,
) -> Element {
    let services = use_services();
    let notice = use_notice();
    let menu_open = editors.read().photo_menu_open;

    let choose_photo = move |evt: MouseEvent| {
        evt.stop_propagation();
        editors.write().close_photo_menu();

        let session = services.session.clone();
        spawn(async move {
            match pick_profile_photo().await {
                Ok(Some(image)) => {
                    if let Err(e) = session.set_profile_image(image.into_string()).await {
                        show_notice(notice, e.user_notice());
                    }
                }
                Ok(None) => {}
                Err(e) => {
                    tracing::error!("Failed to load profile photo: {}", e);
                    show_notice(notice, "Failed to load the photo.");
                }
            }
        });
    };

    rsx! {
        div {
            class: "avatar-wrap",
            onclick: move |_| {
                clicked_region.set(Some(EditRegion::Avatar));
                editors.write().toggle_photo_menu(signed_in);
            },

            img { class: "avatar", src: "{src}", alt: "" }

            if menu_open {
                div { class: "photo-menu",
                    button { class: "photo-menu-item", onclick: choose_photo, "Choose Photo" }
                    button {
                        class: "photo-menu-item cancel",
                        onclick: move |evt: MouseEvent| {
                            evt.stop_propagation();
                            editors.write().close_photo_menu();
                        },
                        "Cancel"
                    }
                }
            }
        }
    }
}

#[component]
fn NicknameField(
    editors: Signal<ProfileEditors>,
    clicked_region: Signal<Option<EditRegion>>,
    current: String,
    signed_in: bool,
) -> Element {
    let services = use_services();
    let notice = use_notice();
    let editing = editors.read().nickname.is_open();
    let draft = editors.read().nickname.draft().to_string();
    let max = editors.read().nickname.rules().max_chars;

    let commit = use_callback(move |()| {
        let commits: Vec<_> = editors.write().commit_nickname().into_iter().collect();
        apply_profile_commits(&services, notice, commits);
    });
    let shown = current.clone();

    rsx! {
        div {
            class: "nickname",
            onclick: move |_| {
                clicked_region.set(Some(EditRegion::Nickname));
                editors.write().begin_nickname(&current, signed_in);
            },

            if editing {
                span { class: "nickname-prefix", "@" }
                input {
                    class: "inline-input",
                    value: "{draft}",
                    maxlength: "{max}",
                    autofocus: true,
                    oninput: move |e| editors.write().nickname.set_draft(&e.value()),
                    onblur: move |_| commit.call(()),
                    onkeydown: move |evt: KeyboardEvent| match evt.key() {
                        Key::Enter => commit.call(()),
                        Key::Escape => editors.write().nickname.cancel(),
                        _ => {}
                    },
                }
            } else {
                span { class: "nickname-text", "{shown}" }
            }
        }
    }
}

#[component]
fn DescriptionField(
    editors: Signal<ProfileEditors>,
    clicked_region: Signal<Option<EditRegion>>,
    current: String,
    signed_in: bool,
) -> Element {
    let services = use_services();
    let notice = use_notice();
    let editing = editors.read().description.is_open();
    let draft = editors.read().description.draft().to_string();
    let max = editors.read().description.rules().max_chars;

    let commit = use_callback(move |()| {
        let commits: Vec<_> = editors.write().commit_description().into_iter().collect();
        apply_profile_commits(&services, notice, commits);
    });
    let shown = current.clone();

    rsx! {
        div {
            class: "description",
            onclick: move |_| {
                clicked_region.set(Some(EditRegion::Description));
                editors.write().begin_description(&current, signed_in);
            },

            if editing {
                textarea {
                    class: "inline-textarea",
                    value: "{draft}",
                    maxlength: "{max}",
                    autofocus: true,
                    oninput: move |e| editors.write().description.set_draft(&e.value()),
                    onblur: move |_| commit.call(()),
                    onkeydown: move |evt: KeyboardEvent| match evt.key() {
                        Key::Enter if !evt.modifiers().shift() => {
                            evt.prevent_default();
                            commit.call(());
                        }
                        Key::Escape => editors.write().description.cancel(),
                        _ => {}
                    },
                }
                span { class: "char-count", "{draft.chars().count()}/{max}" }
            } else {
                p { class: "description-text", "{shown}" }
            }
        }
    }
}
