//! SQLite persistence adapter.
//!
//! Provides the Diesel-backed [`UserStore`](crate::port::outbound::store::UserStore)
//! used against the kernelbot database.

pub mod database;
pub mod store;

pub use store::{SqliteSession, SqliteUserStore};
