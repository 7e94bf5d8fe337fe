//! Login and register pages, for anonymous viewers only.

use dioxus::prelude::*;
use state::Access;
use ui::{LoginView, RegisterView};

use super::use_access;

#[component]
pub fn Login() -> Element {
    if !use_access(Access::GuestOnly) {
        return rsx! {};
    }

    rsx! {
        LoginView {}
    }
}

#[component]
pub fn Register() -> Element {
    if !use_access(Access::GuestOnly) {
        return rsx! {};
    }

    rsx! {
        RegisterView {}
    }
}
