use rusqlite::params;
use tracing::debug;

use crate::errors::DbResult;
use crate::models::NewOrder;

use super::connection::Database;

/// Insert one order. The referenced customer and restaurant must exist;
/// SQLite rejects the row otherwise.
pub fn insert_order(db: &Database, order: &NewOrder) -> DbResult<i64> {
    let id = db.insert(
        "INSERT INTO Orders (
            customer_id, restaurant_id, order_date, delivery_time, status,
            total_amount, payment_mode, discount_applied, feedback_rating
         ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
        params![
            order.customer_id,
            order.restaurant_id,
            order.order_date,
            order.delivery_time,
            order.status.as_str(),
            order.total_amount,
            order.payment_mode.as_str(),
            order.discount_applied,
            order.feedback_rating,
        ],
    )?;
    debug!(order_id = id, "inserted order");
    Ok(id)
}
