use rusqlite::params;
use tracing::debug;

use crate::errors::DbResult;
use crate::models::NewRestaurant;

use super::connection::Database;

pub fn insert_restaurant(db: &Database, restaurant: &NewRestaurant) -> DbResult<i64> {
    let id = db.insert(
        "INSERT INTO Restaurants (
            name, cuisine_type, location, owner_name, average_delivery_time,
            contact_number, rating, total_orders, is_active
         ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
        params![
            restaurant.name,
            restaurant.cuisine_type.as_str(),
            restaurant.location,
            restaurant.owner_name,
            restaurant.average_delivery_time,
            restaurant.contact_number,
            restaurant.rating,
            restaurant.total_orders,
            restaurant.is_active,
        ],
    )?;
    debug!(restaurant_id = id, "inserted restaurant");
    Ok(id)
}
