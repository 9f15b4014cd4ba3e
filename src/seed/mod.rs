//! Synthetic data for the dashboard. `Generator` builds one randomized record
//! at a time; the `generate_*` functions insert batches and hand back the ids
//! they created so later tables only ever reference rows that exist.

pub mod fake;

use chrono::NaiveDateTime;
use rand::seq::SliceRandom;
use rand::Rng;
use rand_chacha::ChaCha8Rng;
use tracing::info;

use crate::db::{insert_customer, insert_delivery, insert_order, insert_restaurant, Database};
use crate::errors::{DbError, DbResult};
use crate::models::{
    Cuisine, DeliveryStatus, NewCustomer, NewDelivery, NewOrder, NewRestaurant, OrderStatus,
    PaymentMode, VehicleType,
};

/// How many rows of each table a seeding pass inserts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedCounts {
    pub customers: usize,
    pub restaurants: usize,
    pub orders: usize,
    pub deliveries: usize,
}

impl Default for SeedCounts {
    fn default() -> Self {
        Self {
            customers: 100,
            restaurants: 50,
            orders: 200,
            deliveries: 200,
        }
    }
}

/// Ids inserted by one seeding pass, per table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeedReport {
    pub customer_ids: Vec<i64>,
    pub restaurant_ids: Vec<i64>,
    pub order_ids: Vec<i64>,
    pub delivery_ids: Vec<i64>,
}

impl SeedReport {
    pub fn total_rows(&self) -> usize {
        self.customer_ids.len()
            + self.restaurant_ids.len()
            + self.order_ids.len()
            + self.delivery_ids.len()
    }
}

/// Random record builder. `now` anchors the "this decade" and "this year"
/// date windows.
pub struct Generator<R: Rng = ChaCha8Rng> {
    rng: R,
    now: NaiveDateTime,
}

impl<R: Rng> Generator<R> {
    pub fn new(rng: R, now: NaiveDateTime) -> Self {
        Self { rng, now }
    }

    pub fn customer(&mut self) -> NewCustomer {
        let rng = &mut self.rng;
        NewCustomer {
            name: fake::name(rng),
            email: fake::email(rng),
            phone: fake::phone_number(rng),
            location: fake::address(rng),
            signup_date: fake::date_this_decade(rng, self.now.date()),
            is_premium: rng.gen_bool(0.5),
            preferred_cuisine: choose(rng, Cuisine::ALL).as_str().to_string(),
            total_orders: rng.gen_range(0..=50),
            average_rating: round2(rng.gen_range(1.0..=5.0)),
        }
    }

    pub fn restaurant(&mut self) -> NewRestaurant {
        let rng = &mut self.rng;
        NewRestaurant {
            name: fake::company(rng),
            cuisine_type: choose(rng, Cuisine::ALL),
            location: fake::city(rng),
            owner_name: fake::name(rng),
            average_delivery_time: rng.gen_range(20..=60),
            contact_number: fake::phone_number(rng),
            rating: round2(rng.gen_range(1.0..=5.0)),
            total_orders: rng.gen_range(0..=100),
            is_active: rng.gen_bool(0.5),
        }
    }

    /// Build an order referencing one of the given customers and
    /// restaurants. Returns `None` when either list is empty.
    pub fn order(&mut self, customer_ids: &[i64], restaurant_ids: &[i64]) -> Option<NewOrder> {
        let rng = &mut self.rng;
        let customer_id = *customer_ids.choose(rng)?;
        let restaurant_id = *restaurant_ids.choose(rng)?;
        Some(NewOrder {
            customer_id,
            restaurant_id,
            order_date: fake::date_time_this_year(rng, self.now),
            delivery_time: fake::date_time_this_year(rng, self.now),
            status: choose(rng, OrderStatus::ALL),
            total_amount: round2(rng.gen_range(10.0..=100.0)),
            payment_mode: choose(rng, PaymentMode::ALL),
            discount_applied: round2(rng.gen_range(0.0..=10.0)),
            feedback_rating: rng.gen_range(1..=5),
        })
    }

    /// Build a delivery for one of the given orders.
    pub fn delivery(&mut self, order_ids: &[i64]) -> Option<NewDelivery> {
        let rng = &mut self.rng;
        let order_id = *order_ids.choose(rng)?;
        Some(NewDelivery {
            order_id,
            delivery_status: choose(rng, DeliveryStatus::ALL),
            distance: round2(rng.gen_range(1.0..=20.0)),
            delivery_time: rng.gen_range(10..=60),
            estimated_time: rng.gen_range(10..=60),
            delivery_fee: round2(rng.gen_range(2.0..=10.0)),
            vehicle_type: choose(rng, VehicleType::ALL),
        })
    }
}

fn choose<R: Rng + ?Sized, T: Copy>(rng: &mut R, items: &[T]) -> T {
    items[rng.gen_range(0..items.len())]
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

pub fn generate_customers<R: Rng>(
    db: &Database,
    generator: &mut Generator<R>,
    count: usize,
) -> DbResult<Vec<i64>> {
    let mut ids = Vec::with_capacity(count);
    for _ in 0..count {
        ids.push(insert_customer(db, &generator.customer())?);
    }
    info!(count = ids.len(), "generated customers");
    Ok(ids)
}

pub fn generate_restaurants<R: Rng>(
    db: &Database,
    generator: &mut Generator<R>,
    count: usize,
) -> DbResult<Vec<i64>> {
    let mut ids = Vec::with_capacity(count);
    for _ in 0..count {
        ids.push(insert_restaurant(db, &generator.restaurant())?);
    }
    info!(count = ids.len(), "generated restaurants");
    Ok(ids)
}

pub fn generate_orders<R: Rng>(
    db: &Database,
    generator: &mut Generator<R>,
    count: usize,
    customer_ids: &[i64],
    restaurant_ids: &[i64],
) -> DbResult<Vec<i64>> {
    let mut ids = Vec::with_capacity(count);
    for _ in 0..count {
        let order = generator
            .order(customer_ids, restaurant_ids)
            .ok_or(DbError::NoReferenceRows {
                table: "Orders",
                referenced: if customer_ids.is_empty() {
                    "Customers"
                } else {
                    "Restaurants"
                },
            })?;
        ids.push(insert_order(db, &order)?);
    }
    info!(count = ids.len(), "generated orders");
    Ok(ids)
}

pub fn generate_deliveries<R: Rng>(
    db: &Database,
    generator: &mut Generator<R>,
    count: usize,
    order_ids: &[i64],
) -> DbResult<Vec<i64>> {
    let mut ids = Vec::with_capacity(count);
    for _ in 0..count {
        let delivery = generator.delivery(order_ids).ok_or(DbError::NoReferenceRows {
            table: "Deliveries",
            referenced: "Orders",
        })?;
        ids.push(insert_delivery(db, &delivery)?);
    }
    info!(count = ids.len(), "generated deliveries");
    Ok(ids)
}

/// Seed all four tables in foreign-key order.
pub fn seed_all<R: Rng>(
    db: &Database,
    generator: &mut Generator<R>,
    counts: SeedCounts,
) -> DbResult<SeedReport> {
    let customer_ids = generate_customers(db, generator, counts.customers)?;
    let restaurant_ids = generate_restaurants(db, generator, counts.restaurants)?;
    let order_ids = generate_orders(db, generator, counts.orders, &customer_ids, &restaurant_ids)?;
    let delivery_ids = generate_deliveries(db, generator, counts.deliveries, &order_ids)?;

    Ok(SeedReport {
        customer_ids,
        restaurant_ids,
        order_ids,
        delivery_ids,
    })
}
