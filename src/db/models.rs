use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// One row of the OpenWebUI `user` table.
///
/// `id` and `created_at` are read through a text cast, so both integer and
/// text storage decode here.
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct DbUser {
    pub id: String,
    pub email: Option<String>,
    pub name: Option<String>,
    /// Always `None` when the schema has no `username` column.
    pub username: Option<String>,
    pub role: Option<String>,
    pub created_at: Option<String>,
}

impl DbUser {
    /// True when either the display name or the username equals `value`.
    pub fn matches(&self, value: &str) -> bool {
        self.name.as_deref() == Some(value) || self.username.as_deref() == Some(value)
    }

    /// `created_at` rendered as RFC3339 when it holds epoch seconds.
    pub fn created_display(&self) -> String {
        match self.created_at.as_deref() {
            Some(raw) => raw
                .parse::<i64>()
                .ok()
                .and_then(|secs| DateTime::<Utc>::from_timestamp(secs, 0))
                .map(|dt| dt.to_rfc3339())
                .unwrap_or_else(|| raw.to_string()),
            None => "<none>".to_string(),
        }
    }
}

/// Login credentials carried over from one `auth` row to another.
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct AuthCredentials {
    pub email: Option<String>,
    pub password: Option<String>,
}
