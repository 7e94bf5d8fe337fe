use api::NetworkApi;
use dioxus::prelude::*;
use state::{document_title, RegisterForm, SessionState};

use crate::{reload_page, use_client, use_session, Alert};

/// Registration form. Each field shows the first server message for it;
/// errors not tied to a field sit above the password inputs.
#[component]
pub fn RegisterView() -> Element {
    let client = use_client();
    let mut session = use_session();
    let mut form = use_signal(RegisterForm::default);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let client = client.clone();
        let request = form.peek().request();
        spawn(async move {
            let result = client.register(&request).await;
            let credentials = form.write().apply(result);
            if let Some(credentials) = credentials {
                session.set(SessionState::loaded(credentials));
                reload_page();
            }
        });
    };

    let current = form();
    let title = document_title("Register");
    let field_error = |field: &str| current.error(field).map(str::to_string);
    let username_error = field_error("username");
    let email_error = field_error("email");
    let password_error = field_error("password");
    let confirmation_error = field_error("confirmation");
    let non_field_error = current.non_field_error().map(str::to_string);

    rsx! {
        document::Title { "{title}" }
        div {
            h2 { "Register" }
            form {
                onsubmit: handle_submit,
                if let Some(error) = username_error {
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
                if let Some(error) = email_error {
                    Alert { message: error }
                }
                input {
                    r#type: "email",
                    name: "email",
                    class: "form-control form-group",
                    placeholder: "Email Address",
                    required: true,
                    value: "{current.email}",
                    oninput: move |evt: FormEvent| form.write().email = evt.value(),
                }
                if let Some(error) = non_field_error {
                    Alert { message: error }
                }
                if let Some(error) = password_error {
                    Alert { message: error }
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
                if let Some(error) = confirmation_error {
                    Alert { message: error }
                }
                input {
                    r#type: "password",
                    name: "confirmation",
                    class: "form-control form-group",
                    placeholder: "Confirm Password",
                    required: true,
                    value: "{current.confirmation}",
                    oninput: move |evt: FormEvent| form.write().confirmation = evt.value(),
                }
                input { r#type: "submit", class: "btn btn-primary", value: "Register" }
            }
            "Already have an account? "
            Link { to: "/login", "Log In here." }
        }
    }
}
