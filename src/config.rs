use std::path::PathBuf;

use anyhow::{anyhow, Result};
use clap::Parser;
use directories::BaseDirs;

use crate::seed::SeedCounts;

/// Folder name used beneath the user's home directory for application data.
const DATA_DIR_NAME: &str = ".zomato-insights";
/// SQLite file name stored inside the application data directory.
const DB_FILE_NAME: &str = "zomato.sqlite";

#[derive(Parser, Debug)]
#[command(author, version, about = "Seed a food-delivery database and explore it in the terminal", long_about = None)]
pub struct Args {
    /// SQLite database file (created if missing)
    #[arg(long)]
    database: Option<PathBuf>,

    /// Number of customers to generate
    #[arg(long, default_value_t = 100)]
    customers: usize,

    /// Number of restaurants to generate
    #[arg(long, default_value_t = 50)]
    restaurants: usize,

    /// Number of orders to generate
    #[arg(long, default_value_t = 200)]
    orders: usize,

    /// Number of deliveries to generate
    #[arg(long, default_value_t = 200)]
    deliveries: usize,

    /// Skip synthetic data generation on startup
    #[arg(long)]
    no_seed: bool,

    /// Seed for the random generator, for reproducible data
    #[arg(long)]
    seed: Option<u64>,

    /// Directory for the log file (defaults to the database directory)
    #[arg(long)]
    log_dir: Option<PathBuf>,
}

/// Resolved runtime settings.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_path: PathBuf,
    pub log_dir: PathBuf,
    /// `None` when seeding is disabled.
    pub seed_counts: Option<SeedCounts>,
    pub rng_seed: Option<u64>,
}

impl Config {
    /// Parse the process arguments and fill in defaults.
    pub fn from_env() -> Result<Self> {
        Self::from_args(Args::parse())
    }

    pub fn from_args(args: Args) -> Result<Self> {
        let database_path = match args.database {
            Some(path) => path,
            None => default_db_path()?,
        };
        let log_dir = match args.log_dir {
            Some(dir) => dir,
            None => database_path
                .parent()
                .filter(|parent| !parent.as_os_str().is_empty())
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(".")),
        };
        let seed_counts = (!args.no_seed).then_some(SeedCounts {
            customers: args.customers,
            restaurants: args.restaurants,
            orders: args.orders,
            deliveries: args.deliveries,
        });

        Ok(Self {
            database_path,
            log_dir,
            seed_counts,
            rng_seed: args.seed,
        })
    }
}

/// Resolve the default database location inside the user's home.
fn default_db_path() -> Result<PathBuf> {
    let base_dirs = BaseDirs::new().ok_or_else(|| anyhow!("could not locate home directory"))?;
    Ok(base_dirs.home_dir().join(DATA_DIR_NAME).join(DB_FILE_NAME))
}
