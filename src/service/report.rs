use crate::db::DbUser;
use tracing::info;

/// Emit the user table for audit, one event per row.
pub fn log_users(stage: &str, users: &[DbUser]) {
    info!(stage, count = users.len(), "user table");
    for u in users {
        info!(
            stage,
            id = %u.id,
            email = u.email.as_deref().unwrap_or("<none>"),
            name = u.name.as_deref().unwrap_or("<none>"),
            username = u.username.as_deref(),
            role = u.role.as_deref().unwrap_or("<none>"),
            created = %u.created_display(),
            "user"
        );
    }
}
