use std::fs;

use tempfile::tempdir;
use zomato_insights::{start, Config, SeedCounts, Startup};

fn config(database_path: std::path::PathBuf, log_dir: std::path::PathBuf) -> Config {
    Config {
        database_path,
        log_dir,
        seed_counts: None,
        rng_seed: None,
    }
}

#[test]
fn uncreatable_data_directory_still_reaches_the_ui() {
    let dir = tempdir().expect("tempdir");
    let blocker = dir.path().join("blocker");
    fs::write(&blocker, b"not a directory").expect("write blocker");

    let Startup { app, log_guard } = start(&config(blocker.join("zomato.sqlite"), blocker.clone()));

    assert!(log_guard.is_some(), "logging should fall back to another directory");
    assert!(!app.is_connected());
    let status = app.status().expect("connection failure is reported");
    assert!(status.starts_with("Error connecting to the database"), "{status}");
    app.into_database().close().expect("close");
}

#[test]
fn fresh_database_reports_table_counts() {
    let dir = tempdir().expect("tempdir");
    let Startup { app, .. } = start(&config(
        dir.path().join("data").join("zomato.sqlite"),
        dir.path().join("logs"),
    ));

    assert!(app.is_connected());
    assert_eq!(
        app.status(),
        Some("4 tables ready: 0 Customers, 0 Restaurants, 0 Orders, 0 Deliveries.")
    );
    assert!(dir.path().join("logs").is_dir());
    app.into_database().close().expect("close");
}

#[test]
fn seeding_on_startup_is_summarized() {
    let dir = tempdir().expect("tempdir");
    let mut config = config(dir.path().join("zomato.sqlite"), dir.path().to_path_buf());
    config.seed_counts = Some(SeedCounts {
        customers: 4,
        restaurants: 2,
        orders: 3,
        deliveries: 1,
    });
    config.rng_seed = Some(42);

    let Startup { app, .. } = start(&config);
    assert_eq!(
        app.status(),
        Some("Seeded 10 rows. 4 tables ready: 4 Customers, 2 Restaurants, 3 Orders, 1 Deliveries.")
    );
    app.into_database().close().expect("close");
}
