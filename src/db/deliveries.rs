use rusqlite::params;
use tracing::debug;

use crate::errors::DbResult;
use crate::models::NewDelivery;

use super::connection::Database;

pub fn insert_delivery(db: &Database, delivery: &NewDelivery) -> DbResult<i64> {
    let id = db.insert(
        "INSERT INTO Deliveries (
            order_id, delivery_status, distance, delivery_time,
            estimated_time, delivery_fee, vehicle_type
         ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
        params![
            delivery.order_id,
            delivery.delivery_status.as_str(),
            delivery.distance,
            delivery.delivery_time,
            delivery.estimated_time,
            delivery.delivery_fee,
            delivery.vehicle_type.as_str(),
        ],
    )?;
    debug!(delivery_id = id, "inserted delivery");
    Ok(id)
}
