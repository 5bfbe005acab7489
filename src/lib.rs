pub mod config;
pub mod db;
pub mod error;
pub mod service;

pub use config::Config;
pub use error::{FixError, ReconcileError};
pub use service::{Outcome, reconcile};

use std::path::Path;

/// Locate the database and reconcile it. The entry point used by `main`.
pub async fn run(cfg: &Config, cwd: &Path) -> Result<Outcome, FixError> {
    let db_path = service::locator::locate_database(cfg, cwd)?;
    let outcome = reconcile(&db_path, cfg).await?;
    Ok(outcome)
}
