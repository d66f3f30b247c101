//! Shared test utilities available to both unit and integration tests.
//!
//! Enabled via `#[cfg(test)]` (unit tests) or the `testkit` feature
//! (integration tests).
//!
//! # Modules
//!
//! - [`identity`] - Fake [`IdentityProvider`](crate::port::outbound::identity::IdentityProvider)s:
//!   `FixedIdentity`, `FailingIdentity`.
//! - [`store`] - In-memory [`UserStore`](crate::port::outbound::store::UserStore)
//!   with scripted failures.

pub mod identity;
pub mod store;
