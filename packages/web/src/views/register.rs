//! Registration page view.

use dioxus::prelude::*;
use ui::RegistrationForm;

/// Register page component.
#[component]
pub fn Register() -> Element {
    rsx! {
        div {
            class: "register-container",

            h1 { "Create Account" }

            RegistrationForm {}
        }
    }
}
