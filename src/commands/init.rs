use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use captains_log::config::db_path;
use captains_log::db::Database;
use captains_log::Dashboard;

/// Creates the log directory and writes the first-run data into it.
pub fn run(log_dir: &Path) -> Result<()> {
    let fresh = !log_dir.exists();

    fs::create_dir_all(log_dir)
        .with_context(|| format!("Failed to create {}", log_dir.display()))?;
    let db = Database::open(&db_path(log_dir)).context("Failed to open database")?;

    if !db.keys()?.is_empty() {
        println!("Captain's log already initialized at {}", log_dir.display());
        return Ok(());
    }

    let dashboard = Dashboard::open(db);
    dashboard.save_all();

    if fresh {
        println!("Created {}", log_dir.display());
    }
    println!("Welcome aboard, Cadet. The log is ready.");
    Ok(())
}
