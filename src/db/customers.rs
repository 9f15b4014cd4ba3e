use rusqlite::params;
use tracing::debug;

use crate::errors::DbResult;
use crate::models::NewCustomer;

use super::connection::Database;

/// Insert one customer and return its generated `customer_id`.
pub fn insert_customer(db: &Database, customer: &NewCustomer) -> DbResult<i64> {
    let id = db.insert(
        "INSERT INTO Customers (
            name, email, phone, location, signup_date, is_premium,
            preferred_cuisine, total_orders, average_rating
         ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
        params![
            customer.name,
            customer.email,
            customer.phone,
            customer.location,
            customer.signup_date,
            customer.is_premium,
            customer.preferred_cuisine,
            customer.total_orders,
            customer.average_rating,
        ],
    )?;
    debug!(customer_id = id, "inserted customer");
    Ok(id)
}
