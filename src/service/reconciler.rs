use crate::config::Config;
use crate::db::UserStore;
use crate::error::ReconcileError;
use crate::service::classifier::{Scenario, classify};
use crate::service::{markers, report};
use std::path::Path;
use tracing::{info, warn};

/// Successful result of a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Sentinel present and no force flag; the database was not opened.
    AlreadyApplied,
    /// No `user` table yet.
    FreshDatabase,
    Renamed { user_id: String },
    Merged { removed_id: String, kept_id: String },
    NoChange,
}

impl Outcome {
    pub fn mutated(&self) -> bool {
        matches!(self, Outcome::Renamed { .. } | Outcome::Merged { .. })
    }
}

/// Apply the username fix to the database at `db_path` once.
///
/// The sentinel is written only after the whole procedure succeeded, so any
/// error leaves the next run free to retry from scratch.
pub async fn reconcile(db_path: &Path, cfg: &Config) -> Result<Outcome, ReconcileError> {
    let sentinel = markers::sentinel_path(db_path, cfg);
    if cfg.force_rerun() {
        warn!("FORCE_USERNAME_FIX set: running fix even if the sentinel exists");
    } else if sentinel.exists() {
        info!(sentinel = %sentinel.display(), "username fix already applied; skipping");
        return Ok(Outcome::AlreadyApplied);
    }

    let mut store = UserStore::open(db_path).await?;

    if !store.has_user_table().await? {
        store.close().await?;
        info!("no user table yet (fresh database); nothing to fix");
        markers::write_sentinel(&sentinel)?;
        return Ok(Outcome::FreshDatabase);
    }

    let schema = store.user_schema().await?;
    let users = store.list_users(schema).await?;
    report::log_users("current", &users);

    let outcome = match classify(&users, &cfg.wrong_name, &cfg.correct_name) {
        Scenario::Rename { id } => {
            info!(
                id = %id,
                from = %cfg.wrong_name,
                to = %cfg.correct_name,
                "renaming account"
            );
            markers::backup_once(db_path, cfg);
            store.rename_user(schema, &id, &cfg.correct_name).await?;
            info!(id = %id, "account renamed");
            Outcome::Renamed { user_id: id }
        }
        Scenario::Merge { remove_id, keep_id } => {
            warn!(
                wrong = %cfg.wrong_name,
                correct = %cfg.correct_name,
                remove_id = %remove_id,
                keep_id = %keep_id,
                "both accounts exist; merging login into the correct account"
            );
            markers::backup_once(db_path, cfg);
            store.merge_users(&remove_id, &keep_id).await?;
            info!(
                keep_id = %keep_id,
                "merged; the existing email and password now log into the correct account"
            );
            Outcome::Merged {
                removed_id: remove_id,
                kept_id: keep_id,
            }
        }
        Scenario::Nothing => {
            info!(name = %cfg.wrong_name, "no change needed; account not found");
            Outcome::NoChange
        }
    };

    let users = store.list_users(schema).await?;
    report::log_users("final", &users);
    store.close().await?;

    markers::write_sentinel(&sentinel)?;
    info!(sentinel = %sentinel.display(), "sentinel created; later runs will skip");
    Ok(outcome)
}
