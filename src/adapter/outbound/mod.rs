//! Outbound adapters: the OS session and the SQLite store.

pub mod identity;
pub mod sqlite;
