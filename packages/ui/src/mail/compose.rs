use api::{ApiResult, MailApi};
use dioxus::prelude::*;
use state::Draft;

use crate::use_client;

/// Compose form. Edits go to `on_change`, the send result to `on_sent`.
#[component]
pub fn ComposeMail(
    draft: Draft,
    on_change: EventHandler<Draft>,
    on_sent: EventHandler<ApiResult<String>>,
) -> Element {
    let client = use_client();

    let outgoing = draft.outgoing();
    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let client = client.clone();
        let mail = outgoing.clone();
        spawn(async move {
            on_sent.call(client.send_mail(&mail).await);
        });
    };

    let base = draft.clone();
    let update = move |apply: fn(&mut Draft, String)| {
        let base = base.clone();
        move |evt: FormEvent| {
            let mut next = base.clone();
            apply(&mut next, evt.value());
            on_change.call(next);
        }
    };

    rsx! {
        div {
            h3 { "New Email" }
            form {
                onsubmit: handle_submit,
                div {
                    class: "form-group",
                    "From: "
                    input { disabled: true, class: "form-control", value: "{draft.sender}" }
                }
                div {
                    class: "form-group",
                    "To: "
                    input {
                        class: "form-control",
                        value: "{draft.recipients}",
                        oninput: update(|d, v| d.recipients = v),
                    }
                }
                div {
                    class: "form-group",
                    input {
                        class: "form-control",
                        placeholder: "Subject",
                        value: "{draft.subject}",
                        oninput: update(|d, v| d.subject = v),
                    }
                }
                div {
                    class: "form-group",
                    textarea {
                        class: "form-control",
                        placeholder: "Body",
                        value: "{draft.body}",
                        oninput: update(|d, v| d.body = v),
                    }
                }
                input { r#type: "submit", class: "btn btn-primary" }
            }
        }
    }
}
