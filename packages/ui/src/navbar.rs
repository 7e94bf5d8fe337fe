use api::NetworkApi;
use dioxus::prelude::*;
use state::{nav_items, NavItem, SessionState};

use crate::{reload_page, use_client, use_session};

/// Top navigation bar of the social network.
#[component]
pub fn Navigation() -> Element {
    let session = use_session();
    let items = nav_items(&session().credentials);

    rsx! {
        div {
            nav {
                class: "navbar navbar-expand-lg navbar-light",
                Link { class: "navbar-brand font-weight-bold", to: "/", "Network" }
                div {
                    ul {
                        class: "navbar-nav mr-auto",
                        for item in items {
                            NavEntry { key: "{item.label()}", item }
                        }
                    }
                }
            }
            hr {}
        }
    }
}

#[component]
fn NavEntry(item: NavItem) -> Element {
    let client = use_client();
    let mut session = use_session();
    let label = item.label().to_string();
    let path = item.path();
    let class = match &item {
        NavItem::OwnProfile(_) => "nav-link font-weight-bold",
        _ => "nav-link",
    };

    if item == NavItem::LogOut {
        let logout = move |evt: MouseEvent| {
            evt.prevent_default();
            let client = client.clone();
            spawn(async move {
                match client.logout().await {
                    Ok(credentials) => {
                        session.set(SessionState::loaded(credentials));
                        reload_page();
                    }
                    Err(e) => tracing::error!("Failed to log out: {}", e),
                }
            });
        };
        return rsx! {
            li {
                class: "nav-item",
                a { class: "{class}", href: "{path}", onclick: logout, "{label}" }
            }
        };
    }

    rsx! {
        li {
            class: "nav-item",
            Link { class: "{class}", to: path, "{label}" }
        }
    }
}
