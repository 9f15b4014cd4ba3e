//! Core library surface for the Zomato data dashboard.
//!
//! `main.rs` wires these together: resolve the config, connect, create the
//! schema, seed synthetic rows and hand the database to the TUI.
pub mod config;
pub mod db;
pub mod errors;
pub mod logging;
pub mod models;
pub mod seed;
pub mod startup;
pub mod ui;

pub use config::Config;
pub use db::{init_schema, Database};
pub use errors::{DbError, DbResult};
pub use logging::init_logging;
pub use seed::{seed_all, Generator, SeedCounts, SeedReport};
pub use startup::{start, Startup};

/// The interactive application entry point and state container.
pub use ui::{run_app, App};
