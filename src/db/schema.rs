use tracing::info;

use crate::errors::{DbError, DbResult};
use crate::models::Table;

use super::connection::Database;

/// Table definitions in creation order; referenced tables come first so the
/// foreign keys always resolve.
const TABLE_DEFINITIONS: [(Table, &str); 4] = [
    (
        Table::Customers,
        "CREATE TABLE IF NOT EXISTS Customers (
            customer_id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT,
            email TEXT,
            phone TEXT,
            location TEXT,
            signup_date DATE,
            is_premium BOOLEAN,
            preferred_cuisine TEXT,
            total_orders INTEGER,
            average_rating REAL
        )",
    ),
    (
        Table::Restaurants,
        "CREATE TABLE IF NOT EXISTS Restaurants (
            restaurant_id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT,
            cuisine_type TEXT,
            location TEXT,
            owner_name TEXT,
            average_delivery_time INTEGER,
            contact_number TEXT,
            rating REAL,
            total_orders INTEGER,
            is_active BOOLEAN
        )",
    ),
    (
        Table::Orders,
        "CREATE TABLE IF NOT EXISTS Orders (
            order_id INTEGER PRIMARY KEY AUTOINCREMENT,
            customer_id INTEGER,
            restaurant_id INTEGER,
            order_date DATETIME,
            delivery_time DATETIME,
            status TEXT,
            total_amount REAL,
            payment_mode TEXT,
            discount_applied REAL,
            feedback_rating INTEGER,
            FOREIGN KEY(customer_id) REFERENCES Customers(customer_id),
            FOREIGN KEY(restaurant_id) REFERENCES Restaurants(restaurant_id)
        )",
    ),
    (
        Table::Deliveries,
        "CREATE TABLE IF NOT EXISTS Deliveries (
            delivery_id INTEGER PRIMARY KEY AUTOINCREMENT,
            order_id INTEGER,
            delivery_status TEXT,
            distance REAL,
            delivery_time INTEGER,
            estimated_time INTEGER,
            delivery_fee REAL,
            vehicle_type TEXT,
            FOREIGN KEY(order_id) REFERENCES Orders(order_id)
        )",
    ),
];

/// Create the four dashboard tables if they are missing. Safe to call on
/// every startup.
pub fn init_schema(db: &Database) -> DbResult<()> {
    for (table, sql) in TABLE_DEFINITIONS {
        db.execute(sql, [])?;
        info!(table = table.name(), "ensured table exists");
    }
    Ok(())
}

/// Names of the user tables currently present, sorted alphabetically.
pub fn table_names(db: &Database) -> DbResult<Vec<String>> {
    let conn = db.connection()?;
    let mut stmt = conn
        .prepare(
            "SELECT name FROM sqlite_master
             WHERE type = 'table' AND name NOT LIKE 'sqlite_%'
             ORDER BY name",
        )
        .map_err(DbError::Fetch)?;

    let names = stmt
        .query_map([], |row| row.get(0))
        .map_err(DbError::Fetch)?
        .collect::<Result<Vec<String>, _>>()
        .map_err(DbError::Fetch)?;

    Ok(names)
}

pub fn count_rows(db: &Database, table: Table) -> DbResult<i64> {
    db.connection()?
        .query_row(&format!("SELECT COUNT(*) FROM {}", table.name()), [], |row| {
            row.get(0)
        })
        .map_err(DbError::Fetch)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_schema_is_idempotent() {
        let db = Database::open_in_memory().expect("db");
        init_schema(&db).expect("first init");
        let first = table_names(&db).expect("names");
        init_schema(&db).expect("second init");
        let second = table_names(&db).expect("names");

        assert_eq!(first, second);
        assert_eq!(first, vec!["Customers", "Deliveries", "Orders", "Restaurants"]);
    }

    #[test]
    fn fresh_tables_are_empty() {
        let db = Database::open_in_memory().expect("db");
        init_schema(&db).expect("init");
        for table in Table::ALL {
            assert_eq!(count_rows(&db, table).expect("count"), 0);
        }
    }

    #[test]
    fn orders_reject_unknown_customer() {
        let db = Database::open_in_memory().expect("db");
        init_schema(&db).expect("init");
        let result = db.execute(
            "INSERT INTO Orders (customer_id, restaurant_id) VALUES (?1, ?2)",
            [99, 99],
        );
        assert!(matches!(result, Err(DbError::Execute(_))));
    }
}
