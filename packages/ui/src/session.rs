//! Session context and hooks for the UI.

use api::{Credentials, NetworkApi};
use dioxus::prelude::*;
use state::SessionState;

use crate::use_client;

/// Get the current session.
/// Returns a signal that updates once `/api/authentication` answers.
pub fn use_session() -> Signal<SessionState> {
    use_context::<Signal<SessionState>>()
}

/// Provider component that loads the viewer's credentials once on mount.
/// Must sit inside a [`ClientProvider`](crate::ClientProvider).
#[component]
pub fn SessionProvider(children: Element) -> Element {
    let client = use_client();
    let mut session = use_signal(SessionState::default);

    let _ = use_resource(move || {
        let client = client.clone();
        async move {
            let credentials = match client.authentication().await {
                Ok(credentials) => credentials,
                Err(e) => {
                    tracing::error!("Failed to load session: {}", e);
                    Credentials::anonymous()
                }
            };
            session.set(SessionState::loaded(credentials));
        }
    });

    use_context_provider(|| session);

    rsx! {
        {children}
    }
}

/// Full page reload, so every view starts over with the new session cookie.
pub fn reload_page() {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            if let Err(e) = window.location().reload() {
                tracing::error!("Failed to reload page: {:?}", e);
            }
        }
    }
}
