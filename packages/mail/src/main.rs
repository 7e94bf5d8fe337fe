use dioxus::prelude::*;

use api::ClientConfig;
use ui::{ClientProvider, MailApp};

const MAIN_CSS: Asset = asset!("/assets/main.css");
const BOOTSTRAP_CSS: &str =
    "https://cdn.jsdelivr.net/npm/bootstrap@4.6.2/dist/css/bootstrap.min.css";

fn main() {
    dioxus::launch(App);
}

/// The page embeds the signed-in address and the logout link; native runs
/// read them from the environment instead.
fn client_config() -> ClientConfig {
    #[cfg(target_arch = "wasm32")]
    let config = ClientConfig::from_document();
    #[cfg(not(target_arch = "wasm32"))]
    let config = ClientConfig::from_env();

    if config.mail.user_email.is_empty() {
        tracing::warn!("No user email configured, the compose form has no sender");
    }
    config
}

#[component]
fn App() -> Element {
    let config = use_hook(client_config);

    rsx! {
        document::Link { rel: "stylesheet", href: BOOTSTRAP_CSS }
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        ClientProvider {
            config,
            MailApp {}
        }
    }
}
