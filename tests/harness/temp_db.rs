use std::path::{Path, PathBuf};

use diesel::prelude::*;
use diesel::SqliteConnection;
use tempfile::TempDir;

/// Schema the bot creates before anyone registers.
pub const USERS_SCHEMA: &str = "CREATE TABLE IF NOT EXISTS users (
  id       INTEGER PRIMARY KEY,
  username TEXT NOT NULL UNIQUE,
  perms    INTEGER NOT NULL DEFAULT 0
)";

#[derive(QueryableByName, Debug, PartialEq, Eq)]
pub struct Row {
    #[diesel(sql_type = diesel::sql_types::BigInt)]
    pub id: i64,
    #[diesel(sql_type = diesel::sql_types::Text)]
    pub username: String,
}

/// Temporary SQLite database for integration tests, removed on drop.
pub struct TempDb {
    dir: TempDir,
    path: PathBuf,
}

impl TempDb {
    /// Database with the `users` table already created.
    pub fn with_schema() -> Self {
        let db = Self::empty();
        let mut conn = db.connect();
        diesel::sql_query(USERS_SCHEMA)
            .execute(&mut conn)
            .expect("create users table");
        db
    }

    /// Path to a database file that does not exist yet.
    pub fn empty() -> Self {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("kernelbot.db");
        Self { dir, path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn dir(&self) -> &Path {
        self.dir.path()
    }

    pub fn connect(&self) -> SqliteConnection {
        SqliteConnection::establish(&self.path.to_string_lossy()).expect("open sqlite database")
    }

    pub fn rows(&self) -> Vec<Row> {
        let mut conn = self.connect();
        diesel::sql_query("SELECT id, username FROM users ORDER BY id")
            .load(&mut conn)
            .expect("select users")
    }
}
