use std::collections::HashSet;

use chrono::NaiveDate;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tempfile::tempdir;
use zomato_insights::db::{
    count_rows, fetch_table, insert_customer, run_insight, table_names, Insight, InsightSeries,
};
use zomato_insights::models::{NewCustomer, Table};
use zomato_insights::{init_schema, seed_all, Database, Generator, SeedCounts};

fn generator(seed: u64) -> Generator {
    let now = NaiveDate::from_ymd_opt(2026, 10, 16)
        .and_then(|d| d.and_hms_opt(12, 0, 0))
        .unwrap();
    Generator::new(ChaCha8Rng::seed_from_u64(seed), now)
}

fn id_set(db: &Database, sql: &str) -> HashSet<i64> {
    let conn = db.connection().expect("conn");
    let mut stmt = conn.prepare(sql).expect("prepare");
    stmt.query_map([], |row| row.get(0))
        .expect("query")
        .collect::<Result<HashSet<i64>, _>>()
        .expect("ids")
}

fn scalar(db: &Database, sql: &str) -> i64 {
    db.connection()
        .expect("conn")
        .query_row(sql, [], |row| row.get(0))
        .expect("scalar")
}

fn sum_values(series: &InsightSeries) -> f64 {
    series.points.iter().map(|point| point.value).sum()
}

#[test]
fn schema_survives_reopening_the_file() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("nested").join("zomato.sqlite");

    let db = Database::try_connect(&path).expect("connect");
    init_schema(&db).expect("schema");
    db.close().expect("close");

    let db = Database::try_connect(&path).expect("reconnect");
    init_schema(&db).expect("schema again");
    assert_eq!(
        table_names(&db).expect("names"),
        vec!["Customers", "Deliveries", "Orders", "Restaurants"]
    );
    for table in Table::ALL {
        assert_eq!(count_rows(&db, table).expect("count"), 0);
    }
}

#[test]
fn seeding_fills_every_table_with_valid_references() {
    let dir = tempdir().expect("tempdir");
    let db = Database::try_connect(&dir.path().join("zomato.sqlite")).expect("connect");
    init_schema(&db).expect("schema");

    let counts = SeedCounts {
        customers: 12,
        restaurants: 6,
        orders: 30,
        deliveries: 25,
    };
    let report = seed_all(&db, &mut generator(11), counts).expect("seed");

    assert_eq!(report.total_rows(), 73);
    assert_eq!(count_rows(&db, Table::Customers).expect("count"), 12);
    assert_eq!(count_rows(&db, Table::Restaurants).expect("count"), 6);
    assert_eq!(count_rows(&db, Table::Orders).expect("count"), 30);
    assert_eq!(count_rows(&db, Table::Deliveries).expect("count"), 25);

    let customers: HashSet<i64> = report.customer_ids.iter().copied().collect();
    let restaurants: HashSet<i64> = report.restaurant_ids.iter().copied().collect();
    let orders: HashSet<i64> = report.order_ids.iter().copied().collect();

    assert!(id_set(&db, "SELECT customer_id FROM Orders").is_subset(&customers));
    assert!(id_set(&db, "SELECT restaurant_id FROM Orders").is_subset(&restaurants));
    assert!(id_set(&db, "SELECT order_id FROM Deliveries").is_subset(&orders));
}

#[test]
fn seeding_twice_appends_rows() {
    let db = Database::open_in_memory().expect("db");
    init_schema(&db).expect("schema");
    let counts = SeedCounts {
        customers: 3,
        restaurants: 2,
        orders: 4,
        deliveries: 4,
    };

    seed_all(&db, &mut generator(1), counts).expect("first seed");
    let second = seed_all(&db, &mut generator(2), counts).expect("second seed");

    assert_eq!(count_rows(&db, Table::Customers).expect("count"), 6);
    assert_eq!(second.customer_ids, vec![4, 5, 6]);
}

#[test]
fn insights_agree_with_seeded_rows() {
    let db = Database::open_in_memory().expect("db");
    init_schema(&db).expect("schema");
    let counts = SeedCounts {
        customers: 10,
        restaurants: 8,
        orders: 60,
        deliveries: 40,
    };
    seed_all(&db, &mut generator(7), counts).expect("seed");

    let peak = run_insight(&db, Insight::PeakOrderingHours).expect("peak hours");
    assert_eq!(sum_values(&peak), 60.0);
    assert!(peak.points.windows(2).all(|pair| pair[0].value >= pair[1].value));
    assert!(peak
        .points
        .iter()
        .all(|point| point.label.parse::<u32>().map(|h| h < 24).unwrap_or(false)));

    let cuisines = run_insight(&db, Insight::TopCuisines).expect("top cuisines");
    let distinct = scalar(&db, "SELECT COUNT(DISTINCT cuisine_type) FROM Restaurants");
    assert!(cuisines.points.len() as i64 <= distinct);
    assert_eq!(sum_values(&cuisines), 60.0);

    let deliveries = run_insight(&db, Insight::DeliveryTimes).expect("delivery times");
    assert!(deliveries.points.len() <= 2);
    assert!(deliveries
        .points
        .iter()
        .all(|point| (10.0..=60.0).contains(&point.value)));
}

#[test]
fn top_cuisines_only_list_cuisines_present_in_restaurants() {
    let db = Database::open_in_memory().expect("db");
    init_schema(&db).expect("schema");
    db.execute("INSERT INTO Customers (name) VALUES ('A')", [])
        .expect("customer");
    db.execute(
        "INSERT INTO Restaurants (name, cuisine_type) VALUES ('R1', 'Indian'), ('R2', 'Indian')",
        [],
    )
    .expect("restaurants");
    db.execute(
        "INSERT INTO Orders (customer_id, restaurant_id, order_date) VALUES
            (1, 1, '2026-01-05 12:00:00'),
            (1, 2, '2026-01-06 13:00:00'),
            (1, 2, '2026-01-07 19:30:00')",
        [],
    )
    .expect("orders");

    let cuisines = run_insight(&db, Insight::TopCuisines).expect("top cuisines");
    assert_eq!(
        scalar(&db, "SELECT COUNT(DISTINCT cuisine_type) FROM Restaurants"),
        1
    );
    assert_eq!(cuisines.points.len(), 1);
    assert_eq!(cuisines.points[0].label, "Indian");
    assert_eq!(cuisines.points[0].value, 3.0);

    db.execute(
        "INSERT INTO Restaurants (name, cuisine_type) VALUES ('R3', 'Chinese')",
        [],
    )
    .expect("idle restaurant");
    let cuisines = run_insight(&db, Insight::TopCuisines).expect("top cuisines");
    assert_eq!(cuisines.points.len(), 1);
    assert!(
        (cuisines.points.len() as i64)
            <= scalar(&db, "SELECT COUNT(DISTINCT cuisine_type) FROM Restaurants")
    );
}

#[test]
fn registered_customer_shows_up_in_the_grid() {
    let db = Database::open_in_memory().expect("db");
    init_schema(&db).expect("schema");
    let customer = NewCustomer::registered(
        "Asha Rao".into(),
        "asha@example.com".into(),
        String::new(),
        "Pune".into(),
        NaiveDate::from_ymd_opt(2025, 1, 2).unwrap(),
        true,
        "Italian".into(),
    );
    let id = insert_customer(&db, &customer).expect("insert");

    let grid = fetch_table(&db, Table::Customers).expect("fetch");
    assert_eq!(grid.len(), 1);
    assert_eq!(grid.columns[0], "customer_id");
    let row = &grid.rows[0];
    assert_eq!(row[0], id.to_string());
    assert_eq!(row[1], "Asha Rao");
    assert_eq!(row[5], "2025-01-02");
    assert_eq!(row[8], "0");
    assert_eq!(row[9], "0.0");
}

#[test]
fn disconnected_handle_reports_instead_of_panicking() {
    let dir = tempdir().expect("tempdir");
    let blocker = dir.path().join("blocker");
    std::fs::write(&blocker, b"not a directory").expect("write");

    let db = Database::connect(&blocker.join("zomato.sqlite"));
    assert!(!db.is_connected());
    assert!(db.connect_error().is_some());
    assert!(init_schema(&db).is_err());
    assert!(fetch_table(&db, Table::Orders).is_err());
    db.close().expect("closing a disconnected handle is a no-op");
}
