use api::{ClientConfig, HttpClient};
use dioxus::prelude::*;

/// Makes an [`HttpClient`] built from `config` available to every
/// component below it. This is the only place configuration enters the tree.
#[component]
pub fn ClientProvider(config: ClientConfig, children: Element) -> Element {
    use_context_provider(|| HttpClient::new(config.clone()));

    rsx! {
        {children}
    }
}

pub fn use_client() -> HttpClient {
    use_context::<HttpClient>()
}
