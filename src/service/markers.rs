use crate::config::Config;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

const SENTINEL_CONTENT: &str = "username fix applied\n";

/// Sentinel path: `<db dir>/<sentinel_file>`.
pub fn sentinel_path(db_path: &Path, cfg: &Config) -> PathBuf {
    let dir = match db_path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    dir.join(&cfg.sentinel_file)
}

/// Backup path: the database path with the backup suffix appended.
pub fn backup_path(db_path: &Path, cfg: &Config) -> PathBuf {
    let mut raw = db_path.as_os_str().to_owned();
    raw.push(&cfg.backup_suffix);
    PathBuf::from(raw)
}

pub fn write_sentinel(path: &Path) -> io::Result<()> {
    fs::write(path, SENTINEL_CONTENT)
}

/// Copy the database to its backup path unless a backup already exists.
/// Failures are logged and swallowed; returns whether a new copy was made.
pub fn backup_once(db_path: &Path, cfg: &Config) -> bool {
    let backup = backup_path(db_path, cfg);
    if backup.exists() {
        info!(path = %backup.display(), "backup already present; keeping it");
        return false;
    }
    match fs::copy(db_path, &backup) {
        Ok(bytes) => {
            info!(path = %backup.display(), bytes, "backup created");
            true
        }
        Err(e) => {
            warn!(path = %backup.display(), error = %e, "could not create backup; continuing anyway");
            false
        }
    }
}
