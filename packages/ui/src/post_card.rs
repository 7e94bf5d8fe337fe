use api::{NetworkApi, Post};
use dioxus::prelude::*;
use state::PostCard as CardState;

use crate::{use_client, use_session, Alert};

/// One post of a feed, with like/unlike and inline edit for its owner.
///
/// The card works on its own copy of the post. A different `post` from the
/// parent resets that copy, dropping any unsaved edit.
#[component]
pub fn PostCard(post: Post) -> Element {
    let client = use_client();
    let session = use_session();
    let mut card = use_signal(|| CardState::new(&post));
    if !card.peek().is_from(&post) {
        card.write().sync(&post);
    }

    let like_client = client.clone();
    let toggle_like = move |_| {
        if !CardState::can_like(&session.peek().credentials) {
            return;
        }
        let client = like_client.clone();
        let (id, intent) = {
            let card = card.peek();
            (card.id(), card.like_intent())
        };
        spawn(async move {
            let result = client.like_post(id, intent.like).await;
            card.write().apply_like(intent, result);
        });
    };

    let save = move |evt: FormEvent| {
        evt.prevent_default();
        let client = client.clone();
        let (id, content) = {
            let card = card.peek();
            (card.id(), card.draft.clone())
        };
        spawn(async move {
            let result = client.edit_post(id, &content).await;
            card.write().apply_edit(content, result);
        });
    };

    let current = card();
    let can_edit = current.can_edit(&session().credentials);
    let owner = current.owner().to_string();
    let profile_path = format!("/{owner}");
    let date_posted = current.date_posted().to_string();
    let heart = if current.liked {
        "fa-heart margin-right fa-solid red"
    } else {
        "fa-heart margin-right fa-regular"
    };

    rsx! {
        div {
            if let Some(error) = current.error.clone() {
                Alert { message: error }
            }
            form {
                class: "container post-container",
                onsubmit: save,
                Link {
                    class: "username",
                    to: profile_path,
                    h5 { "{owner}" }
                }
                if current.editing {
                    textarea {
                        name: "content",
                        class: "form-control form-group",
                        required: true,
                        value: "{current.draft}",
                        oninput: move |evt: FormEvent| card.write().draft = evt.value(),
                    }
                } else {
                    p { "{current.content}" }
                    p { class: "text-grey", "{date_posted}" }
                    div {
                        i { class: "{heart}", onclick: toggle_like }
                        span { class: "text-grey", "{current.num_likes}" }
                    }
                }
                if can_edit {
                    if current.editing {
                        input { r#type: "submit", class: "btn btn-primary", value: "Save" }
                    } else {
                        a {
                            class: "margin-right",
                            href: "#",
                            onclick: move |evt: MouseEvent| {
                                evt.prevent_default();
                                card.write().begin_edit();
                            },
                            "Edit"
                        }
                    }
                }
            }
        }
    }
}
