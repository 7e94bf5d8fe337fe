use api::NetworkApi;
use dioxus::prelude::*;
use state::{document_title, ProfileState};

use crate::{use_client, use_session, Alert, Pagination, PostCard};

/// A user's profile: counts, follow toggle and their posts.
///
/// A new `username` discards everything shown for the previous one and
/// loads page 1 for the new user.
#[component]
pub fn ProfileView(username: String) -> Element {
    let mut username_signal = use_signal(|| username.clone());
    if *username_signal.peek() != username {
        username_signal.set(username.clone());
    }

    let client = use_client();
    let session = use_session();
    let mut profile = use_signal(ProfileState::default);

    let loader_client = client.clone();
    let _loader = use_resource(move || {
        let client = loader_client.clone();
        let username = username_signal();
        async move {
            let Some(page) = profile.write().navigate(&username) else {
                return;
            };
            let result = client.profile(&username, page).await;
            profile.with_mut(|state| {
                if state.is_for(&username) {
                    state.apply_page(result);
                }
            });
        }
    });

    let page_client = client.clone();
    let go_to = move |page: u32| {
        let client = page_client.clone();
        let username = username_signal.peek().clone();
        spawn(async move {
            let result = client.profile(&username, page).await;
            profile.with_mut(|state| {
                if state.is_for(&username) {
                    state.apply_page(result);
                }
            });
        });
    };

    let toggle_follow = move |_| {
        let Some(intent) = profile.peek().follow_intent() else {
            return;
        };
        if !profile.peek().can_follow(&session.peek().credentials) {
            return;
        }
        let client = client.clone();
        let username = username_signal.peek().clone();
        spawn(async move {
            let result = client.follow(&username, intent.follow).await;
            profile.with_mut(|state| {
                if state.is_for(&username) {
                    state.apply_follow(intent, result);
                }
            });
        });
    };

    let current = profile();
    let can_follow = current.can_follow(&session().credentials);
    let follow_label = current.follow_label();
    let title = document_title(&current.title());

    rsx! {
        document::Title { "{title}" }
        div {
            class: "container profile-container",
            if let Some(error) = current.error.clone() {
                Alert { message: error }
            }
            if let Some(header) = current.profile.clone() {
                div {
                    class: "margin-bottom-2rem",
                    h2 { "{header.username}" }
                    div {
                        class: "form-group",
                        p { class: "text-grey", "Joined {header.date_joined}" }
                        strong { "{header.num_posts}" }
                        span { class: "text-grey margin-right-1rem", " Posts" }
                        strong { "{header.num_following}" }
                        span { class: "text-grey margin-right-1rem", " Following" }
                        strong { "{header.num_followers}" }
                        span { class: "text-grey margin-right-1rem", " Followers" }
                    }
                    if let Some(error) = current.follow_error.clone() {
                        Alert { message: error }
                    }
                    if can_follow {
                        input {
                            r#type: "submit",
                            class: "btn btn-primary",
                            value: "{follow_label}",
                            onclick: toggle_follow,
                        }
                    }
                }
            }
            div {
                if current.feed.is_empty() {
                    p { "No posts to show" }
                }
                for post in current.feed.posts.clone() {
                    PostCard { key: "{post.id}", post }
                }
                Pagination {
                    controls: current.feed.controls(),
                    current: current.feed.window.map(|w| w.page_num),
                    on_select: go_to,
                }
            }
        }
    }
}
