//! Capability traits the registrar depends on.

pub mod outbound;
