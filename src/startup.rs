//! Everything `main` does before handing control to the event loop. None of
//! these steps abort: a failure becomes a footer message or the disconnected
//! banner.

use chrono::Local;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{error, info};
use tracing_appender::non_blocking::WorkerGuard;

use crate::config::Config;
use crate::db::{count_rows, init_schema, table_names, Database};
use crate::errors::DbResult;
use crate::logging::init_logging;
use crate::models::Table;
use crate::seed::{seed_all, Generator};
use crate::ui::App;

pub struct Startup {
    pub app: App,
    /// Keeps the log writer flushing. `None` when logging could not start.
    pub log_guard: Option<WorkerGuard>,
}

/// Bring up logging and the database, then build the UI state.
pub fn start(config: &Config) -> Startup {
    let (log_guard, log_error) = match init_logging(&config.log_dir) {
        Ok(guard) => (Some(guard), None),
        Err(err) => (None, Some(format!("Logging disabled: {err:#}"))),
    };
    info!(database = %config.database_path.display(), "starting dashboard");

    let db = Database::connect(&config.database_path);
    let prepared = prepare_database(&db, config);

    let mut app = App::new(db, Local::now().date_naive());
    match prepared {
        Ok(Some(message)) => app.report_info(message),
        Ok(None) => {}
        Err(err) => {
            error!(error = %err, "database setup failed");
            app.report_error(err.to_string());
        }
    }

    // The disconnected banner already explains a broken data directory.
    if let Some(message) = log_error {
        if app.is_connected() {
            app.report_error(message);
        }
    }

    Startup { app, log_guard }
}

/// Create the tables and seed them unless seeding is disabled. Returns the
/// footer message, or `None` when there is no connection to report on.
fn prepare_database(db: &Database, config: &Config) -> DbResult<Option<String>> {
    if !db.is_connected() {
        return Ok(None);
    }

    init_schema(db)?;

    let seeded = match config.seed_counts {
        Some(counts) => {
            let rng = match config.rng_seed {
                Some(seed) => ChaCha8Rng::seed_from_u64(seed),
                None => ChaCha8Rng::from_entropy(),
            };
            let mut generator = Generator::new(rng, Local::now().naive_local());
            let report = seed_all(db, &mut generator, counts)?;
            info!(rows = report.total_rows(), "seeded synthetic data");
            Some(report.total_rows())
        }
        None => None,
    };

    let summary = row_summary(db)?;
    Ok(Some(match seeded {
        Some(rows) => format!("Seeded {rows} rows. {summary}"),
        None => summary,
    }))
}

/// `4 tables ready: 100 Customers, 50 Restaurants, ...`
fn row_summary(db: &Database) -> DbResult<String> {
    let tables = table_names(db)?;
    let mut counts = Vec::with_capacity(Table::ALL.len());
    for table in Table::ALL {
        counts.push(format!("{} {}", count_rows(db, table)?, table));
    }
    Ok(format!("{} tables ready: {}.", tables.len(), counts.join(", ")))
}
