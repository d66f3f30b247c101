//! Links the invoking login to a Discord id.
//!
//! A registration runs four stages in order and stops at the first
//! failure: parse the id, resolve the login, open the store, upsert. The
//! store session is released on every path, explicitly on success and by
//! drop on failure.

use tracing::{debug, info};

use crate::domain::User;
use crate::error::{Error, Result};
use crate::port::outbound::identity::IdentityProvider;
use crate::port::outbound::store::{UserSession, UserStore};

/// Registers the current login against a user store.
#[derive(Debug, Clone)]
pub struct Registrar<I, S> {
    identity: I,
    store: S,
}

impl<I, S> Registrar<I, S>
where
    I: IdentityProvider,
    S: UserStore,
{
    pub fn new(identity: I, store: S) -> Self {
        Self { identity, store }
    }

    /// Store `(raw_id, current login)`, replacing any record with that id.
    ///
    /// # Errors
    /// [`Error::InvalidId`] if `raw_id` is not a 64-bit integer,
    /// [`Error::Identity`] if there is no login, and the store errors
    /// from opening or upserting.
    pub fn register(&self, raw_id: &str) -> Result<User> {
        let id = parse_id(raw_id)?;
        let username = self.identity.current_login()?;
        debug!(id, username = %username, "resolved login");

        let user = User::new(id, username);
        let mut session = self.store.open()?;
        session.upsert(&user)?;
        session.close();

        info!(id = user.id, username = %user.username, "registered user");
        Ok(user)
    }

    pub fn identity(&self) -> &I {
        &self.identity
    }
}

/// Parse a Discord id. Surrounding whitespace is ignored.
///
/// # Errors
/// Returns [`Error::InvalidId`] on anything that is not an `i64`.
pub fn parse_id(raw: &str) -> Result<i64> {
    raw.trim().parse::<i64>().map_err(|source| Error::InvalidId {
        value: raw.to_owned(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testkit::identity::{FailingIdentity, FixedIdentity};
    use crate::testkit::store::MemoryUserStore;

    #[test]
    fn parse_id_accepts_signed_integers() {
        assert_eq!(parse_id("42").unwrap(), 42);
        assert_eq!(parse_id("-7").unwrap(), -7);
        assert_eq!(parse_id("+7").unwrap(), 7);
        assert_eq!(parse_id(" 42\n").unwrap(), 42);
        assert_eq!(parse_id("9223372036854775807").unwrap(), i64::MAX);
    }

    #[test]
    fn parse_id_rejects_garbage() {
        for raw in ["", "abc", "42abc", "1.5", "9223372036854775808"] {
            assert!(
                matches!(parse_id(raw), Err(Error::InvalidId { .. })),
                "{raw:?} should be rejected"
            );
        }
    }

    #[test]
    fn register_stores_login_under_id() {
        let store = MemoryUserStore::new();
        let registrar = Registrar::new(FixedIdentity::new("alice"), &store);

        let user = registrar.register("42").unwrap();

        assert_eq!(user, User::new(42, "alice"));
        assert_eq!(store.get(42), Some("alice".to_string()));
        assert_eq!(store.open_sessions(), 0);
    }

    #[test]
    fn register_twice_overwrites() {
        let store = MemoryUserStore::new();
        Registrar::new(FixedIdentity::new("alice"), &store)
            .register("42")
            .unwrap();
        Registrar::new(FixedIdentity::new("bob"), &store)
            .register("42")
            .unwrap();

        assert_eq!(store.len(), 1);
        assert_eq!(store.get(42), Some("bob".to_string()));
    }

    #[test]
    fn invalid_id_stops_before_identity() {
        let store = MemoryUserStore::new();
        let identity = FixedIdentity::new("alice");
        let registrar = Registrar::new(&identity, &store);

        let err = registrar.register("not-a-number").unwrap_err();

        assert!(matches!(err, Error::InvalidId { .. }));
        assert_eq!(identity.calls(), 0);
        assert_eq!(store.opens(), 0);
    }

    #[test]
    fn identity_failure_never_opens_store() {
        let store = MemoryUserStore::new();
        let registrar = Registrar::new(FailingIdentity, &store);

        let err = registrar.register("42").unwrap_err();

        assert!(matches!(err, Error::Identity(_)));
        assert_eq!(store.opens(), 0);
        assert!(store.is_empty());
    }

    #[test]
    fn open_failure_runs_after_identity() {
        let store = MemoryUserStore::failing_open("unable to open database file");
        let identity = FixedIdentity::new("alice");
        let registrar = Registrar::new(&identity, &store);

        let err = registrar.register("42").unwrap_err();

        assert_eq!(
            err.to_string(),
            "Cannot open database: unable to open database file"
        );
        assert_eq!(identity.calls(), 1);
        assert_eq!(store.opens(), 1);
    }

    #[test]
    fn upsert_failure_releases_session() {
        let store = MemoryUserStore::failing_upsert("disk I/O error");
        let registrar = Registrar::new(FixedIdentity::new("alice"), &store);

        let err = registrar.register("42").unwrap_err();

        assert_eq!(err.to_string(), "Execution failed: disk I/O error");
        assert_eq!(store.opens(), 1);
        assert_eq!(store.open_sessions(), 0);
        assert!(store.is_empty());
    }
}
