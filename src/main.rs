//! Calc History - Desktop calculator with a persisted calculation history
//!
//! A keypad calculator that appends every completed calculation to a local
//! SQLite database and can list past calculations in a secondary window.

mod app;
mod calculator;
mod config;
mod storage;
mod ui;

use anyhow::Result;
use tracing::{error, info, Level};
use tracing_subscriber::FmtSubscriber;

use crate::config::AppConfig;
use crate::storage::HistoryStore;

fn main() -> Result<()> {
    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("Calculator starting...");

    let config = load_or_create_config();

    // The database lives at a fixed relative path next to the process.
    let store = HistoryStore::new(storage::default_db_path());
    match store.ensure_schema() {
        Ok(()) => info!("History database ready at {:?}", store.path()),
        Err(e) => error!("Could not prepare history database: {}", e),
    }

    // UI errors are logged rather than propagated; there is nothing to
    // recover once the event loop has ended.
    if let Err(e) = app::run(config, store) {
        error!("UI error: {}", e);
    }

    info!("Calculator shutdown complete");

    Ok(())
}

/// Load configuration from file or create default
fn load_or_create_config() -> AppConfig {
    if let Ok(config_dir) = config::get_config_dir() {
        let config_path = config_dir.join("config.toml");
        if config_path.exists() {
            if let Ok(config) = config::load_config(&config_path) {
                info!("Loaded configuration from {:?}", config_path);
                return config;
            }
        } else {
            let defaults = AppConfig::default();
            if config::save_config(&defaults, &config_path).is_ok() {
                info!("Wrote default configuration to {:?}", config_path);
            }
            return defaults;
        }
    }
    info!("Using default configuration");
    AppConfig::default()
}
