//! Persistence port for user records.

use crate::domain::User;
use crate::error::Result;

/// Opens sessions against the user store.
pub trait UserStore {
    type Session: UserSession;

    /// Open a session. Fails with [`Error::StoreOpen`](crate::error::Error::StoreOpen).
    fn open(&self) -> Result<Self::Session>;
}

/// An open connection to the user store.
///
/// Dropping a session releases it; [`close`](UserSession::close) does the
/// same explicitly.
pub trait UserSession {
    /// Insert `user`, replacing any existing record with the same id.
    fn upsert(&mut self, user: &User) -> Result<()>;

    /// Release the session.
    fn close(self)
    where
        Self: Sized,
    {
        drop(self);
    }
}

impl<T: UserStore + ?Sized> UserStore for &T {
    type Session = T::Session;

    fn open(&self) -> Result<Self::Session> {
        (**self).open()
    }
}
