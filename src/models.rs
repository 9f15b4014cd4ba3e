//! Domain models that mirror the four-table schema. Insert payloads are plain
//! data holders; the category enums carry the exact labels stored in the
//! database so the seeding code and the charts agree on spelling.

use std::fmt;

use chrono::{NaiveDate, NaiveDateTime};

/// The four tables the dashboard knows about, in foreign-key order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Table {
    Customers,
    Restaurants,
    Orders,
    Deliveries,
}

impl Table {
    pub const ALL: [Table; 4] = [
        Table::Customers,
        Table::Restaurants,
        Table::Orders,
        Table::Deliveries,
    ];

    /// Table name as it appears in SQL.
    pub fn name(self) -> &'static str {
        match self {
            Table::Customers => "Customers",
            Table::Restaurants => "Restaurants",
            Table::Orders => "Orders",
            Table::Deliveries => "Deliveries",
        }
    }

    /// Cycle through `ALL`, wrapping at both ends.
    pub fn cycle(self, offset: isize) -> Table {
        cycle_in(&Self::ALL, self, offset)
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Step `offset` positions through `items` starting from `current`.
pub(crate) fn cycle_in<T: Copy + PartialEq>(items: &[T], current: T, offset: isize) -> T {
    let len = items.len() as isize;
    let idx = items.iter().position(|item| *item == current).unwrap_or(0) as isize;
    items[(idx + offset).rem_euclid(len) as usize]
}

/// Declares a closed set of string labels stored verbatim in a TEXT column.
macro_rules! label_enum {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $label:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn as_str(self) -> &'static str {
                match self {
                    $($name::$variant => $label),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

label_enum!(
    /// Cuisines offered by restaurants and preferred by customers.
    Cuisine {
        Indian => "Indian",
        Chinese => "Chinese",
        Italian => "Italian",
        Mexican => "Mexican",
    }
);

label_enum!(OrderStatus {
    Pending => "Pending",
    Delivered => "Delivered",
    Cancelled => "Cancelled",
});

label_enum!(PaymentMode {
    CreditCard => "Credit Card",
    Cash => "Cash",
    Upi => "UPI",
});

label_enum!(DeliveryStatus {
    OnTheWay => "On the way",
    Delivered => "Delivered",
});

label_enum!(VehicleType {
    Bike => "Bike",
    Car => "Car",
});

#[derive(Debug, Clone, PartialEq)]
pub struct NewCustomer {
    pub name: String,
    pub email: String,
    pub phone: String,
    /// Free-text postal address.
    pub location: String,
    pub signup_date: NaiveDate,
    pub is_premium: bool,
    /// Kept as text because the entry form accepts anything the user types.
    pub preferred_cuisine: String,
    pub total_orders: i64,
    pub average_rating: f64,
}

impl NewCustomer {
    /// A customer registered by hand: no order history and no rating yet.
    pub fn registered(
        name: String,
        email: String,
        phone: String,
        location: String,
        signup_date: NaiveDate,
        is_premium: bool,
        preferred_cuisine: String,
    ) -> Self {
        Self {
            name,
            email,
            phone,
            location,
            signup_date,
            is_premium,
            preferred_cuisine,
            total_orders: 0,
            average_rating: 0.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewRestaurant {
    pub name: String,
    pub cuisine_type: Cuisine,
    /// City the restaurant operates in.
    pub location: String,
    pub owner_name: String,
    /// Minutes.
    pub average_delivery_time: i64,
    pub contact_number: String,
    pub rating: f64,
    pub total_orders: i64,
    pub is_active: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewOrder {
    pub customer_id: i64,
    pub restaurant_id: i64,
    pub order_date: NaiveDateTime,
    pub delivery_time: NaiveDateTime,
    pub status: OrderStatus,
    pub total_amount: f64,
    pub payment_mode: PaymentMode,
    pub discount_applied: f64,
    pub feedback_rating: i64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewDelivery {
    pub order_id: i64,
    pub delivery_status: DeliveryStatus,
    /// Kilometres.
    pub distance: f64,
    /// Minutes.
    pub delivery_time: i64,
    /// Minutes.
    pub estimated_time: i64,
    pub delivery_fee: f64,
    pub vehicle_type: VehicleType,
}

/// A fully materialized query result: column names plus every row rendered
/// as display text. This is what the View Data grid consumes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TableData {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl TableData {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }
}
