use api::Mailbox;
use dioxus::prelude::*;

use super::BUTTON;

#[component]
pub fn MailNavigation(
    email: String,
    logout_url: String,
    on_select: EventHandler<Mailbox>,
    on_compose: EventHandler<()>,
) -> Element {
    rsx! {
        div {
            h2 { "{email}" }
            button { class: BUTTON, onclick: move |_| on_select.call(Mailbox::Inbox), "Inbox" }
            button { class: BUTTON, onclick: move |_| on_compose.call(()), "Compose" }
            button { class: BUTTON, onclick: move |_| on_select.call(Mailbox::Sent), "Sent" }
            button { class: BUTTON, onclick: move |_| on_select.call(Mailbox::Archive), "Archived" }
            a { class: BUTTON, href: "{logout_url}", "Log Out" }
            hr {}
        }
    }
}
