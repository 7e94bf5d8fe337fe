use api::{ApiResult, Mail, MailApi, Mailbox};
use dioxus::prelude::*;
use state::{MailState, MailView};

use super::{ComposeMail, MailDetail, MailNavigation, MailboxList};
use crate::{use_client, Alert};

#[component]
pub fn MailApp() -> Element {
    let client = use_client();
    let email = client.config().mail.user_email.clone();
    let logout_url = client.config().mail.logout_url.clone();
    let mut state = use_signal(|| MailState::new(email.clone()));

    let read_client = client.clone();
    let open_mail = move |mail: Mail| {
        let client = read_client.clone();
        let id = state.write().view_mail(mail);
        spawn(async move {
            client.mark_read(id).await;
        });
    };

    let archive = move |_| {
        let Some((id, archived)) = state.peek().archive_intent() else {
            return;
        };
        let client = client.clone();
        spawn(async move {
            let result = client.set_archived(id, archived).await;
            state.write().apply_archived(archived, result);
        });
    };

    let current = state();

    let main = match (current.view.clone(), current.query()) {
        (_, Some(query)) => rsx! {
            MailboxList {
                query,
                mails: current.mails.clone(),
                on_loaded: move |result: ApiResult<Vec<Mail>>| state.write().mails_loaded(result),
                on_open: open_mail,
            }
        },
        (MailView::Detail(mail), _) => rsx! {
            MailDetail {
                mail,
                show_archive: current.shows_archive_button(),
                archive_label: current.archive_label(),
                on_archive: archive,
                on_reply: move |_| state.write().reply(),
            }
        },
        _ => rsx! {
            ComposeMail {
                draft: current.draft.clone(),
                on_change: move |draft| state.write().draft = draft,
                on_sent: move |result: ApiResult<String>| state.write().apply_sent(result),
            }
        },
    };

    rsx! {
        div {
            class: "container",
            MailNavigation {
                email,
                logout_url,
                on_select: move |mailbox: Mailbox| state.write().select_mailbox(mailbox),
                on_compose: move |_| state.write().compose(),
            }
            if let Some(banner) = current.banner.clone() {
                Alert { class: banner.kind.class(), message: banner.message }
            }
            {main}
        }
    }
}
