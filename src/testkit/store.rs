//! In-memory user store.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

use crate::domain::User;
use crate::error::{Error, Result};
use crate::port::outbound::store::{UserSession, UserStore};

#[derive(Debug, Default)]
struct State {
    rows: BTreeMap<i64, String>,
    opens: usize,
    open_sessions: usize,
}

/// Replace-semantics store backed by a map, with optional scripted failures.
#[derive(Debug, Default)]
pub struct MemoryUserStore {
    state: Rc<RefCell<State>>,
    open_error: Option<String>,
    upsert_error: Option<String>,
}

impl MemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every `open` fails with [`Error::StoreOpen`] carrying `message`.
    pub fn failing_open(message: impl Into<String>) -> Self {
        Self {
            open_error: Some(message.into()),
            ..Self::default()
        }
    }

    /// Every `upsert` fails with [`Error::StatementExecution`] carrying `message`.
    pub fn failing_upsert(message: impl Into<String>) -> Self {
        Self {
            upsert_error: Some(message.into()),
            ..Self::default()
        }
    }

    pub fn get(&self, id: i64) -> Option<String> {
        self.state.borrow().rows.get(&id).cloned()
    }

    pub fn len(&self) -> usize {
        self.state.borrow().rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of `open` attempts, failed ones included.
    pub fn opens(&self) -> usize {
        self.state.borrow().opens
    }

    /// Sessions opened and not yet released.
    pub fn open_sessions(&self) -> usize {
        self.state.borrow().open_sessions
    }
}

impl UserStore for MemoryUserStore {
    type Session = MemorySession;

    fn open(&self) -> Result<MemorySession> {
        let mut state = self.state.borrow_mut();
        state.opens += 1;
        if let Some(message) = &self.open_error {
            return Err(Error::StoreOpen(message.clone()));
        }
        state.open_sessions += 1;
        Ok(MemorySession {
            state: Rc::clone(&self.state),
            upsert_error: self.upsert_error.clone(),
        })
    }
}

/// Session over a [`MemoryUserStore`]; releases itself on drop.
#[derive(Debug)]
pub struct MemorySession {
    state: Rc<RefCell<State>>,
    upsert_error: Option<String>,
}

impl UserSession for MemorySession {
    fn upsert(&mut self, user: &User) -> Result<()> {
        if let Some(message) = &self.upsert_error {
            return Err(Error::StatementExecution(message.clone()));
        }
        self.state
            .borrow_mut()
            .rows
            .insert(user.id, user.username.clone());
        Ok(())
    }
}

impl Drop for MemorySession {
    fn drop(&mut self) {
        self.state.borrow_mut().open_sessions -= 1;
    }
}
