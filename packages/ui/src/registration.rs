//! Registration context and hooks for the UI.
//!
//! Returns a [`api::RegistrationService`] backed by the appropriate
//! [`store::KeyValueStore`]:
//! - **Web** (WASM + `web` feature): `localStorage` via `store::LocalStorageStore`
//! - **Everywhere else**: an in-memory [`store::MemoryStore`]

use api::{HttpSignupClient, RegistrationConfig, RegistrationService};
use dioxus::prelude::*;

use crate::navigation::LocationNavigator;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub type PlatformStore = store::LocalStorageStore;
#[cfg(not(all(target_arch = "wasm32", feature = "web")))]
pub type PlatformStore = store::MemoryStore;

/// The registration service as wired up for the current platform.
pub type Registration = RegistrationService<HttpSignupClient, PlatformStore, LocationNavigator>;

/// Create a platform-appropriate registration service.
pub fn make_registration(config: RegistrationConfig) -> Registration {
    RegistrationService::new(
        config,
        HttpSignupClient::new(),
        PlatformStore::new(),
        LocationNavigator,
    )
}

/// Get the registration service provided by [`RegistrationProvider`].
pub fn use_registration() -> Registration {
    use_context::<Registration>()
}

/// Provider component that makes a registration service available.
/// Wrap your app with this component before rendering a `RegistrationForm`.
#[component]
pub fn RegistrationProvider(config: RegistrationConfig, children: Element) -> Element {
    use_context_provider(|| make_registration(config.clone()));

    rsx! {
        {children}
    }
}
