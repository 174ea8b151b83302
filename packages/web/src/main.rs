use api::RegistrationConfig;
use dioxus::prelude::*;

use ui::RegistrationProvider;
use views::{Login, Register};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Root {},
    #[route("/register")]
    Register {},
    #[route("/login")]
    Login {},
}

fn main() {
    dioxus::logger::initialize_default();
    tracing::info!(
        endpoint = %registration_config().endpoint_url,
        "Starting registration app"
    );
    dioxus::launch(App);
}

/// Build the registration config for this deployment.
///
/// The browser has no process environment, so the endpoint can only be
/// overridden when the bundle is built (`SIGNUP_ENDPOINT_URL=... dx build`).
fn registration_config() -> RegistrationConfig {
    let config = RegistrationConfig::default();
    match option_env!("SIGNUP_ENDPOINT_URL") {
        Some(url) => config.with_endpoint_url(url),
        None => config,
    }
}

#[component]
fn App() -> Element {
    let config = use_hook(registration_config);

    rsx! {
        RegistrationProvider {
            config,
            Router::<Route> {}
        }
    }
}

/// Redirect `/` to `/register`
#[component]
fn Root() -> Element {
    let nav = use_navigator();
    nav.replace(Route::Register {});
    rsx! {}
}
