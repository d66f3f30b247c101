//! Database connection management using Diesel ORM.

use std::path::Path;

use diesel::prelude::*;
use diesel::SqliteConnection;

use crate::error::{Error, Result};

/// Open a connection to the SQLite file at `path`.
///
/// SQLite creates the file when it does not exist yet. The schema is not
/// created here.
///
/// # Errors
/// Returns [`Error::StoreOpen`] with SQLite's message if the file cannot be
/// opened.
pub fn establish(path: &Path) -> Result<SqliteConnection> {
    let url = path.to_string_lossy();
    SqliteConnection::establish(&url).map_err(|e| Error::StoreOpen(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn establish_memory_db() {
        assert!(establish(Path::new(":memory:")).is_ok());
    }

    #[test]
    fn establish_creates_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fresh.db");
        assert!(!path.exists());

        let conn = establish(&path);
        assert!(conn.is_ok());
        assert!(path.exists());
    }

    #[test]
    fn establish_in_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no/such/dir/kernelbot.db");

        match establish(&path) {
            Err(Error::StoreOpen(message)) => assert!(!message.is_empty()),
            Err(other) => panic!("unexpected error: {other}"),
            Ok(_) => panic!("expected open to fail"),
        }
    }
}
