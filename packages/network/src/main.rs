use dioxus::prelude::*;

use api::ClientConfig;
use ui::{ClientProvider, Navigation, SessionProvider};
use views::{Following, Home, Login, Profile, Register};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(Shell)]
        #[route("/")]
        Home {},
        #[route("/login")]
        Login {},
        #[route("/register")]
        Register {},
        #[route("/following")]
        Following {},
        #[route("/:username")]
        Profile { username: String },
}

const MAIN_CSS: Asset = asset!("/assets/main.css");
const BOOTSTRAP_CSS: &str =
    "https://cdn.jsdelivr.net/npm/bootstrap@4.6.2/dist/css/bootstrap.min.css";
const FONT_AWESOME_CSS: &str =
    "https://cdnjs.cloudflare.com/ajax/libs/font-awesome/6.5.1/css/all.min.css";

fn main() {
    dioxus::launch(App);
}

/// The page carries the CSRF cookie; native runs read the token from the
/// environment instead.
fn client_config() -> ClientConfig {
    #[cfg(target_arch = "wasm32")]
    let config = ClientConfig::from_document();
    #[cfg(not(target_arch = "wasm32"))]
    let config = ClientConfig::from_env();

    if config.csrf.token.is_none() {
        tracing::warn!(
            "No CSRF token in cookie {}, writes will be rejected",
            config.csrf.cookie
        );
    }
    tracing::debug!("Talking to {}", config.base_url);
    config
}

#[component]
fn App() -> Element {
    let config = use_hook(client_config);

    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: BOOTSTRAP_CSS }
        document::Link { rel: "stylesheet", href: FONT_AWESOME_CSS }
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        ClientProvider {
            config,
            SessionProvider {
                Router::<Route> {}
            }
        }
    }
}

/// Navigation bar above every page.
#[component]
fn Shell() -> Element {
    rsx! {
        div {
            class: "body",
            Navigation {}
            Outlet::<Route> {}
        }
    }
}
