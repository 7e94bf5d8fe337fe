use dioxus::prelude::*;

#[component]
pub fn Alert(
    message: String,
    #[props(default = "alert alert-danger".to_string())] class: String,
) -> Element {
    rsx! {
        div { class: "{class}", "{message}" }
    }
}
