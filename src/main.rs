//! Binary entry point: bring up the database, fill it with synthetic rows and
//! drive the Ratatui event loop until the user exits.
use anyhow::Result;
use tracing::error;
use zomato_insights::{run_app, start, Config, Startup};

fn main() -> Result<()> {
    let config = Config::from_env()?;
    let Startup { mut app, log_guard } = start(&config);

    let result = run_app(&mut app);
    if let Err(err) = app.into_database().close() {
        error!(error = %err, "failed to close database");
    }
    drop(log_guard);
    result
}
