//! Error values returned by the persistence and seeding layers. Nothing in
//! here prints or logs on its own; callers decide whether a failure becomes a
//! status line, an empty grid, or a startup banner.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DbError {
    /// The handle was created without a live connection.
    #[error("Database connection is not established.")]
    NotConnected,
    /// Opening the database (or its data directory) failed.
    #[error("Error connecting to the database: {0}")]
    Connect(String),
    #[error("Error executing query: {0}")]
    Execute(#[source] rusqlite::Error),
    #[error("Error fetching data: {0}")]
    Fetch(#[source] rusqlite::Error),
    /// A generator was asked to reference rows that were never inserted.
    #[error("Cannot generate {table}: no {referenced} rows to reference.")]
    NoReferenceRows {
        table: &'static str,
        referenced: &'static str,
    },
}

impl From<std::io::Error> for DbError {
    fn from(value: std::io::Error) -> Self {
        Self::Connect(value.to_string())
    }
}

pub type DbResult<T> = Result<T, DbError>;
