//! Browser navigation for the post-signup redirect.

use api::{NavigationError, Navigator};

/// [`Navigator`] that performs a full-document navigation by setting
/// `window.location.href`.
///
/// Outside the browser there is no document to replace, so the request is
/// only logged.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct LocationNavigator;

impl Navigator for LocationNavigator {
    fn navigate(&self, path: &str) -> Result<(), NavigationError> {
        #[cfg(target_arch = "wasm32")]
        {
            let window = web_sys::window().ok_or_else(|| NavigationError::new(path, "no window"))?;
            window
                .location()
                .set_href(path)
                .map_err(|e| NavigationError::new(path, format!("{e:?}")))
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            tracing::info!(path, "Navigation requested outside the browser");
            Ok(())
        }
    }
}
