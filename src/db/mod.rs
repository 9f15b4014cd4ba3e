//! Persistence module split across logical submodules.

mod browse;
mod connection;
mod customers;
mod deliveries;
mod insights;
mod orders;
mod restaurants;
mod schema;

pub use browse::fetch_table;
pub use connection::Database;
pub use customers::insert_customer;
pub use deliveries::insert_delivery;
pub use insights::{run_insight, Insight, InsightPoint, InsightSeries};
pub use orders::insert_order;
pub use restaurants::insert_restaurant;
pub use schema::{count_rows, init_schema, table_names};
