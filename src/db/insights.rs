//! The three canned aggregates behind the Insights menu. Each query yields a
//! label column and a numeric column, which is all a bar chart needs.

use std::fmt;

use rusqlite::types::Value;
use rusqlite::types::ValueRef;

use crate::errors::{DbError, DbResult};
use crate::models::cycle_in;

use super::connection::{format_value, Database};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Insight {
    PeakOrderingHours,
    TopCuisines,
    DeliveryTimes,
}

impl Insight {
    pub const ALL: [Insight; 3] = [
        Insight::PeakOrderingHours,
        Insight::TopCuisines,
        Insight::DeliveryTimes,
    ];

    pub fn title(self) -> &'static str {
        match self {
            Insight::PeakOrderingHours => "Peak Ordering Hours",
            Insight::TopCuisines => "Top Cuisines",
            Insight::DeliveryTimes => "Delivery Times",
        }
    }

    pub fn cycle(self, offset: isize) -> Insight {
        cycle_in(&Self::ALL, self, offset)
    }

    fn sql(self) -> &'static str {
        match self {
            Insight::PeakOrderingHours => {
                "SELECT CAST(strftime('%H', order_date) AS INTEGER) AS Hour,
                        COUNT(*) AS OrderCount
                 FROM Orders
                 GROUP BY Hour
                 ORDER BY OrderCount DESC, Hour"
            }
            Insight::TopCuisines => {
                "SELECT Restaurants.cuisine_type AS Cuisine, COUNT(*) AS Orders
                 FROM Restaurants
                 JOIN Orders ON Restaurants.restaurant_id = Orders.restaurant_id
                 GROUP BY Cuisine
                 ORDER BY Orders DESC, Cuisine"
            }
            Insight::DeliveryTimes => {
                "SELECT delivery_status AS Status, AVG(delivery_time) AS AvgTime
                 FROM Deliveries
                 GROUP BY Status
                 ORDER BY Status"
            }
        }
    }

    fn columns(self) -> (&'static str, &'static str) {
        match self {
            Insight::PeakOrderingHours => ("Hour", "OrderCount"),
            Insight::TopCuisines => ("Cuisine", "Orders"),
            Insight::DeliveryTimes => ("Status", "AvgTime"),
        }
    }
}

impl fmt::Display for Insight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// One bar: the grouping label and its aggregate value.
#[derive(Debug, Clone, PartialEq)]
pub struct InsightPoint {
    pub label: String,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct InsightSeries {
    pub insight: Insight,
    pub label_column: &'static str,
    pub value_column: &'static str,
    pub points: Vec<InsightPoint>,
}

impl InsightSeries {
    pub fn empty(insight: Insight) -> Self {
        let (label_column, value_column) = insight.columns();
        Self {
            insight,
            label_column,
            value_column,
            points: Vec::new(),
        }
    }
}

/// Run the aggregate behind `insight`.
pub fn run_insight(db: &Database, insight: Insight) -> DbResult<InsightSeries> {
    let conn = db.connection()?;
    let mut stmt = conn.prepare(insight.sql()).map_err(DbError::Fetch)?;

    let points = stmt
        .query_map([], |row| {
            let label: Value = row.get(0)?;
            let value: Option<f64> = row.get(1)?;
            Ok(InsightPoint {
                label: format_value(ValueRef::from(&label)),
                value: value.unwrap_or_default(),
            })
        })
        .map_err(DbError::Fetch)?
        .collect::<Result<Vec<_>, _>>()
        .map_err(DbError::Fetch)?;

    let mut series = InsightSeries::empty(insight);
    series.points = points;
    Ok(series)
}
