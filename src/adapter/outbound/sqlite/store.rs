//! SQLite user store implementation.

use std::path::PathBuf;

use diesel::prelude::*;
use diesel::SqliteConnection;
use tracing::debug;

use super::database::connection::establish;
use super::database::model::UserRow;
use super::database::schema::users;
use crate::domain::User;
use crate::error::{Error, Result};
use crate::port::outbound::store::{UserSession, UserStore};

/// SQLite-backed user store.
///
/// Holds only the database path; each [`open`](UserStore::open) creates a
/// fresh connection that lives as long as the returned session.
#[derive(Debug, Clone)]
pub struct SqliteUserStore {
    path: PathBuf,
}

impl SqliteUserStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl UserStore for SqliteUserStore {
    type Session = SqliteSession;

    fn open(&self) -> Result<SqliteSession> {
        debug!(path = %self.path.display(), "opening database");
        let conn = establish(&self.path)?;
        Ok(SqliteSession { conn })
    }
}

/// An open SQLite connection. Closed when dropped.
pub struct SqliteSession {
    conn: SqliteConnection,
}

impl SqliteSession {
    /// Look up a user by id.
    ///
    /// # Errors
    /// Returns [`Error::StatementExecution`] if the query fails.
    pub fn find(&mut self, id: i64) -> Result<Option<User>> {
        users::table
            .find(id)
            .select(UserRow::as_select())
            .first::<UserRow>(&mut self.conn)
            .optional()
            .map(|row| row.map(User::from))
            .map_err(|e| Error::StatementExecution(e.to_string()))
    }

    /// Number of user rows.
    ///
    /// # Errors
    /// Returns [`Error::StatementExecution`] if the query fails.
    pub fn count(&mut self) -> Result<i64> {
        users::table
            .count()
            .get_result(&mut self.conn)
            .map_err(|e| Error::StatementExecution(e.to_string()))
    }

    /// Check that the `users` table has the columns the upsert binds.
    fn prepare(&mut self) -> Result<()> {
        users::table
            .select(UserRow::as_select())
            .limit(0)
            .load::<UserRow>(&mut self.conn)
            .map(|_| ())
            .map_err(|e| Error::StatementPrepare(e.to_string()))
    }
}

impl UserSession for SqliteSession {
    fn upsert(&mut self, user: &User) -> Result<()> {
        self.prepare()?;

        let row = UserRow::from(user);
        diesel::replace_into(users::table)
            .values(&row)
            .execute(&mut self.conn)
            .map_err(|e| Error::StatementExecution(e.to_string()))?;

        debug!(id = row.id, username = %row.username, "replaced user row");
        Ok(())
    }
}
