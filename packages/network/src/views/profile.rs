use dioxus::prelude::*;
use ui::ProfileView;

#[component]
pub fn Profile(username: String) -> Element {
    rsx! {
        ProfileView { username }
    }
}
