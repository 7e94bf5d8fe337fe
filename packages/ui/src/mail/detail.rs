use api::Mail;
use dioxus::prelude::*;

use super::BUTTON;

#[component]
pub fn MailDetail(
    mail: Mail,
    show_archive: bool,
    archive_label: String,
    on_archive: EventHandler<()>,
    on_reply: EventHandler<()>,
) -> Element {
    let recipients = mail.recipients.join(", ");

    rsx! {
        div {
            div {
                class: "margin-bottom",
                Heading { title: "From", content: mail.sender.clone() }
                Heading { title: "To", content: recipients }
                Heading { title: "Subject", content: mail.subject.clone() }
                Heading { title: "Timestamp", content: mail.timestamp.clone() }
            }
            button { class: BUTTON, onclick: move |_| on_reply.call(()), "Reply" }
            if show_archive {
                button { class: BUTTON, onclick: move |_| on_archive.call(()), "{archive_label}" }
            }
            hr {}
            div { class: "mail-body", "{mail.body}" }
        }
    }
}

#[component]
fn Heading(title: String, content: String) -> Element {
    rsx! {
        div {
            span { class: "font-weight-bold", "{title}: " }
            "{content}"
        }
    }
}
