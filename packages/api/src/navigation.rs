//! Navigation capability used after a successful signup.

use crate::error::NavigationError;

/// Moves the user to another page.
///
/// In the browser this is a full-document navigation; the current page and
/// all of its state go away.
pub trait Navigator {
    fn navigate(&self, path: &str) -> Result<(), NavigationError>;
}
