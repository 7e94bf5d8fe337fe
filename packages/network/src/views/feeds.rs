use api::FeedSource;
use dioxus::prelude::*;
use state::Access;
use ui::FeedView;

use super::use_access;

/// All posts, newest first.
#[component]
pub fn Home() -> Element {
    rsx! {
        FeedView { source: FeedSource::All }
    }
}

/// Posts of followed users. Members only.
#[component]
pub fn Following() -> Element {
    if !use_access(Access::MembersOnly) {
        return rsx! {};
    }

    rsx! {
        FeedView { source: FeedSource::Following }
    }
}
