//! Identity fakes.

use std::cell::Cell;

use crate::error::{Error, Result};
use crate::port::outbound::identity::IdentityProvider;

/// Always reports the same login and counts lookups.
#[derive(Debug)]
pub struct FixedIdentity {
    login: String,
    calls: Cell<usize>,
}

impl FixedIdentity {
    pub fn new(login: impl Into<String>) -> Self {
        Self {
            login: login.into(),
            calls: Cell::new(0),
        }
    }

    /// Number of times the login was requested.
    pub fn calls(&self) -> usize {
        self.calls.get()
    }
}

impl IdentityProvider for FixedIdentity {
    fn current_login(&self) -> Result<String> {
        self.calls.set(self.calls.get() + 1);
        Ok(self.login.clone())
    }
}

/// A process with no controlling terminal.
#[derive(Debug, Clone, Copy, Default)]
pub struct FailingIdentity;

impl IdentityProvider for FailingIdentity {
    fn current_login(&self) -> Result<String> {
        Err(Error::Identity(std::io::Error::from_raw_os_error(
            libc::ENXIO,
        )))
    }
}
