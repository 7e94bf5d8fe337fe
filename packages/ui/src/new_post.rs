use api::{NetworkApi, Post};
use dioxus::prelude::*;
use state::PostDraft;

use crate::{use_client, Alert};

/// Create-post form. The created post goes to `on_created`; the list it
/// belongs to is owned by the feed.
#[component]
pub fn NewPost(on_created: EventHandler<Post>) -> Element {
    let client = use_client();
    let mut draft = use_signal(PostDraft::default);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let client = client.clone();
        let content = draft.peek().content.clone();
        spawn(async move {
            let result = client.create_post(&content).await;
            let created = draft.write().apply_created(result);
            if let Some(post) = created {
                on_created.call(post);
            }
        });
    };

    let current = draft();

    rsx! {
        div {
            if let Some(error) = current.error.clone() {
                Alert { message: error }
            }
            form {
                class: "container post-container",
                onsubmit: handle_submit,
                h5 { "New Post" }
                textarea {
                    name: "content",
                    class: "form-control form-group",
                    placeholder: "What's happening?",
                    required: true,
                    value: "{current.content}",
                    oninput: move |evt: FormEvent| draft.write().content = evt.value(),
                }
                input { r#type: "submit", class: "btn btn-primary", value: "Post" }
            }
        }
    }
}
