use api::{FeedSource, NetworkApi, Post};
use dioxus::prelude::*;
use state::{document_title, shows_compose, FeedState};

use crate::{use_client, use_session, Alert, NewPost, Pagination, PostCard};

/// Paginated feed of posts.
///
/// Loads page 1 on mount and again whenever `source` changes. Pagination
/// fetches the requested page and replaces the list with the response.
#[component]
pub fn FeedView(source: FeedSource) -> Element {
    // Track the source in a signal so use_resource re-runs on prop change
    let mut source_signal = use_signal(|| source.clone());
    if *source_signal.peek() != source {
        source_signal.set(source.clone());
    }

    let client = use_client();
    let session = use_session();
    let mut feed = use_signal(FeedState::default);

    let loader_client = client.clone();
    let _loader = use_resource(move || {
        let client = loader_client.clone();
        let source = source_signal();
        async move {
            let page = feed.peek().page_for(None);
            let result = client.posts(&source, page).await;
            feed.write().apply_page(result);
        }
    });

    let go_to = move |page: u32| {
        let client = client.clone();
        let source = source_signal.peek().clone();
        spawn(async move {
            let result = client.posts(&source, page).await;
            feed.write().apply_page(result);
        });
    };

    let current = feed();
    let title = source.title();
    let page_title = document_title(title);
    let compose = shows_compose(&source, &session().credentials);

    rsx! {
        document::Title { "{page_title}" }
        div {
            h2 { "{title}" }
            if compose {
                NewPost { on_created: move |post: Post| feed.write().prepend(post) }
            }
            div {
                if let Some(error) = current.error.clone() {
                    Alert { message: error }
                }
                if current.is_empty() {
                    p { "No posts to show" }
                }
                for post in current.posts.clone() {
                    PostCard { key: "{post.id}", post }
                }
                Pagination {
                    controls: current.controls(),
                    current: current.window.map(|w| w.page_num),
                    on_select: go_to,
                }
            }
        }
    }
}
