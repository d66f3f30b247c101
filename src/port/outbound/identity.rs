//! Identity port.

use crate::error::Result;

/// Resolves the login name of whoever is running the process.
pub trait IdentityProvider {
    /// Return the current login name, or [`Error::Identity`](crate::error::Error::Identity)
    /// when the session has none.
    fn current_login(&self) -> Result<String>;
}

impl<T: IdentityProvider + ?Sized> IdentityProvider for &T {
    fn current_login(&self) -> Result<String> {
        (**self).current_login()
    }
}
