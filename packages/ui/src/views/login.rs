use api::NetworkApi;
use dioxus::prelude::*;
use state::{document_title, LoginForm, SessionState};

use crate::{reload_page, use_client, use_session, Alert};

/// Username/password login form.
#[component]
pub fn LoginView() -> Element {
    let client = use_client();
    let mut session = use_session();
    let mut form = use_signal(LoginForm::default);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let client = client.clone();
        let request = form.peek().request();
        spawn(async move {
            let result = client.login(&request).await;
            let credentials = form.write().apply(result);
            if let Some(credentials) = credentials {
                session.set(SessionState::loaded(credentials));
                reload_page();
            }
        });
    };

    let current = form();
    let title = document_title("Login");

    rsx! {
        document::Title { "{title}" }
        div {
            h2 { "Login" }
            form {
                onsubmit: handle_submit,
                if let Some(error) = current.error.clone() {
                    Alert { message: error }
                }
                input {
                    r#type: "text",
                    name: "username",
                    class: "form-control form-group",
                    placeholder: "Username",
                    required: true,
                    value: "{current.username}",
                    oninput: move |evt: FormEvent| form.write().username = evt.value(),
                }
                input {
                    r#type: "password",
                    name: "password",
                    class: "form-control form-group",
                    placeholder: "Password",
                    required: true,
                    value: "{current.password}",
                    oninput: move |evt: FormEvent| form.write().password = evt.value(),
                }
                input { r#type: "submit", class: "btn btn-primary", value: "Login" }
            }
            "Don't have an account? "
            Link { to: "/register", "Register here." }
        }
    }
}
