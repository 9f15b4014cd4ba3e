use crate::errors::DbResult;
use crate::models::{Table, TableData};

use super::connection::Database;

/// Load an entire table for the View Data grid. No paging: the dashboard
/// always shows every row.
pub fn fetch_table(db: &Database, table: Table) -> DbResult<TableData> {
    db.fetch_all(&format!("SELECT * FROM {}", table.name()))
}
