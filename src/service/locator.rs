use crate::config::Config;
use crate::error::FixError;
use std::path::{Path, PathBuf};
use tracing::{error, info};

/// Where a resolved database path came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathSource {
    DataDir,
    Candidate,
}

/// Probe order: `DATA_DIR/<db_file_name>` first, then the candidate list.
/// Relative candidates are joined onto `cwd`.
pub fn candidate_paths(cfg: &Config, cwd: &Path) -> Vec<(PathBuf, PathSource)> {
    let from_data_dir = cfg
        .data_dir()
        .map(|dir| (dir.join(&cfg.db_file_name), PathSource::DataDir));

    from_data_dir
        .into_iter()
        .chain(cfg.candidate_paths.iter().map(|p| {
            let path = if p.is_relative() { cwd.join(p) } else { p.clone() };
            (path, PathSource::Candidate)
        }))
        .collect()
}

/// Return the first candidate that is an existing file.
pub fn locate_database(cfg: &Config, cwd: &Path) -> Result<PathBuf, FixError> {
    let candidates = candidate_paths(cfg, cwd);

    if let Some((path, source)) = candidates.iter().find(|(p, _)| p.is_file()) {
        match source {
            PathSource::DataDir => {
                info!(path = %path.display(), "found database (from DATA_DIR)")
            }
            PathSource::Candidate => info!(path = %path.display(), "found database"),
        }
        return Ok(path.clone());
    }

    error!("database not found");
    for (path, source) in &candidates {
        info!(path = %path.display(), ?source, "tried");
    }
    Err(FixError::NotFound {
        tried: candidates.into_iter().map(|(p, _)| p).collect(),
    })
}
