//! Outbound ports: the OS session and the user store.

pub mod identity;
pub mod store;
