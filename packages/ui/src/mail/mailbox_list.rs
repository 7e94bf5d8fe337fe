use api::{ApiResult, Mail, MailApi, Mailbox};
use dioxus::prelude::*;
use state::{preview_address, MailboxFetch, MailboxQuery};

use crate::use_client;

/// Mails of one mailbox.
///
/// Fetches once per distinct `query`; the response goes to `on_loaded` for the
/// owner to store.
#[component]
pub fn MailboxList(
    query: MailboxQuery,
    mails: Vec<Mail>,
    on_loaded: EventHandler<ApiResult<Vec<Mail>>>,
    on_open: EventHandler<Mail>,
) -> Element {
    let mut query_signal = use_signal(|| query);
    if *query_signal.peek() != query {
        query_signal.set(query);
    }

    let client = use_client();
    let mut fetch = use_signal(MailboxFetch::default);
    let _loader = use_resource(move || {
        let client = client.clone();
        let query = query_signal();
        async move {
            let Some(mailbox) = fetch.write().next(query) else {
                return;
            };
            on_loaded.call(client.mailbox(mailbox).await);
        }
    });

    let mailbox = query.mailbox;

    rsx! {
        div {
            h3 { "{mailbox.name()}" }
            for mail in mails {
                MailPreview { key: "{mail.id}", mail, mailbox, on_open }
            }
        }
    }
}

/// One row of a mailbox; read mails are greyed out.
#[component]
pub fn MailPreview(mail: Mail, mailbox: Mailbox, on_open: EventHandler<Mail>) -> Element {
    let address = preview_address(&mail, mailbox);
    let class = if mail.read {
        "container mail background-grey"
    } else {
        "container mail"
    };
    let subject = mail.subject.clone();
    let timestamp = mail.timestamp.clone();

    rsx! {
        div {
            class: "{class}",
            onclick: move |_| on_open.call(mail.clone()),
            div {
                class: "row",
                div { class: "col-4 font-weight-bold", "{address}" }
                div { class: "col-4", "{subject}" }
                div { class: "col-4 text-right text-grey", "{timestamp}" }
            }
        }
    }
}
