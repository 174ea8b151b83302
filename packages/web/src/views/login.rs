//! Login landing page, the redirect target after a successful signup.

use dioxus::prelude::*;
use ui::use_registration;

/// Login page component.
#[component]
pub fn Login() -> Element {
    let registration = use_registration();

    let stored = use_resource(move || {
        let registration = registration.clone();
        async move { registration.stored_token().await }
    });

    let registered = matches!(&*stored.read(), Some(Ok(Some(_))));

    rsx! {
        div {
            class: "login-container",

            h1 { "Sign in" }

            if registered {
                p { "Your account was created. Sign in to continue." }
            }

            p {
                "Need an account? "
                a {
                    href: "/register",
                    "Register"
                }
            }
        }
    }
}
