use sqlx::Error as SqlxError;
use std::path::PathBuf;
use thiserror::Error as ThisError;

/// Top-level failure of a fix run. Every variant maps to exit code 1.
#[derive(Debug, ThisError)]
pub enum FixError {
    #[error("database not found; tried {} path(s)", .tried.len())]
    NotFound { tried: Vec<PathBuf> },

    #[error("Configuration error: {0}")]
    Config(#[from] Box<figment::Error>),

    #[error(transparent)]
    Reconcile(#[from] ReconcileError),
}

impl From<figment::Error> for FixError {
    fn from(e: figment::Error) -> Self {
        FixError::Config(Box::new(e))
    }
}

/// Failure while reading, classifying or mutating an opened database.
/// The sentinel is never written when one of these is returned.
#[derive(Debug, ThisError)]
pub enum ReconcileError {
    #[error("Database error: {0}")]
    Database(#[from] SqlxError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("no auth record for user id {id}")]
    MissingAuth { id: String },
}

impl FixError {
    pub fn is_location_failure(&self) -> bool {
        matches!(self, FixError::NotFound { .. })
    }
}
