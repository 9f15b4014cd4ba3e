use std::fs;
use std::path::{Path, PathBuf};

use rusqlite::types::ValueRef;
use rusqlite::{Connection, Params};
use tracing::{error, info};

use crate::errors::{DbError, DbResult};
use crate::models::TableData;

/// Owned handle to the dashboard database. A failed connection still yields a
/// handle so the UI can explain what went wrong; every operation on it
/// returns [`DbError::NotConnected`].
#[derive(Debug)]
pub struct Database {
    conn: Option<Connection>,
    path: PathBuf,
    connect_error: Option<String>,
}

impl Database {
    /// Open (creating if needed) the database file at `path`. Failures are
    /// recorded on the handle instead of being returned.
    pub fn connect(path: &Path) -> Self {
        match Self::try_connect(path) {
            Ok(db) => db,
            Err(err) => {
                error!(path = %path.display(), error = %err, "database connection failed");
                Self::disconnected(path, err.to_string())
            }
        }
    }

    /// Fallible variant of [`Database::connect`].
    pub fn try_connect(path: &Path) -> DbResult<Self> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let conn = Connection::open(path).map_err(|err| DbError::Connect(err.to_string()))?;
        enable_foreign_keys(&conn)?;
        info!(path = %path.display(), "connected to database");

        Ok(Self {
            conn: Some(conn),
            path: path.to_path_buf(),
            connect_error: None,
        })
    }

    pub fn open_in_memory() -> DbResult<Self> {
        let conn = Connection::open_in_memory().map_err(|err| DbError::Connect(err.to_string()))?;
        enable_foreign_keys(&conn)?;
        Ok(Self {
            conn: Some(conn),
            path: PathBuf::from(":memory:"),
            connect_error: None,
        })
    }

    /// A handle that never connected, carrying the reason for display.
    pub fn disconnected(path: &Path, reason: impl Into<String>) -> Self {
        Self {
            conn: None,
            path: path.to_path_buf(),
            connect_error: Some(reason.into()),
        }
    }

    pub fn is_connected(&self) -> bool {
        self.conn.is_some()
    }

    pub fn connect_error(&self) -> Option<&str> {
        self.connect_error.as_deref()
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Borrow the live connection for typed queries.
    pub fn connection(&self) -> DbResult<&Connection> {
        self.conn.as_ref().ok_or(DbError::NotConnected)
    }

    /// Run a statement with bound parameters and return the affected row
    /// count. SQLite autocommits each statement.
    pub fn execute<P: Params>(&self, sql: &str, params: P) -> DbResult<usize> {
        self.connection()?
            .execute(sql, params)
            .map_err(DbError::Execute)
    }

    /// Run an INSERT and return the id of the new row.
    pub fn insert<P: Params>(&self, sql: &str, params: P) -> DbResult<i64> {
        let conn = self.connection()?;
        conn.execute(sql, params).map_err(DbError::Execute)?;
        Ok(conn.last_insert_rowid())
    }

    /// Materialize every row of `sql` as display text.
    pub fn fetch_all(&self, sql: &str) -> DbResult<TableData> {
        let conn = self.connection()?;
        let mut stmt = conn.prepare(sql).map_err(DbError::Fetch)?;
        let columns: Vec<String> = stmt
            .column_names()
            .into_iter()
            .map(str::to_string)
            .collect();
        let width = columns.len();

        let mut rows = Vec::new();
        let mut cursor = stmt.query([]).map_err(DbError::Fetch)?;
        while let Some(row) = cursor.next().map_err(DbError::Fetch)? {
            let mut cells = Vec::with_capacity(width);
            for idx in 0..width {
                let value = row.get_ref(idx).map_err(DbError::Fetch)?;
                cells.push(format_value(value));
            }
            rows.push(cells);
        }

        Ok(TableData { columns, rows })
    }

    /// Release the connection. Consuming the handle makes a second close
    /// impossible.
    pub fn close(self) -> DbResult<()> {
        match self.conn {
            Some(conn) => {
                conn.close().map_err(|(_, err)| DbError::Execute(err))?;
                info!(path = %self.path.display(), "database connection closed");
                Ok(())
            }
            None => Ok(()),
        }
    }
}

fn enable_foreign_keys(conn: &Connection) -> DbResult<()> {
    conn.execute("PRAGMA foreign_keys = ON", [])
        .map(|_| ())
        .map_err(|err| DbError::Connect(err.to_string()))
}

/// Render a single SQLite value the way the grid and charts show it.
pub(crate) fn format_value(value: ValueRef<'_>) -> String {
    match value {
        ValueRef::Null => String::new(),
        ValueRef::Integer(i) => i.to_string(),
        ValueRef::Real(r) => {
            if r.fract() == 0.0 {
                format!("{r:.1}")
            } else {
                format!("{}", (r * 100.0).round() / 100.0)
            }
        }
        ValueRef::Text(text) => String::from_utf8_lossy(text).into_owned(),
        ValueRef::Blob(blob) => format!("<{} bytes>", blob.len()),
    }
}
