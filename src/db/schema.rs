//! Introspection of the OpenWebUI schema. The tables are owned by OpenWebUI;
//! nothing here creates or alters them.

use sqlx::SqliteConnection;

pub const USER_TABLE: &str = "user";

/// Capabilities of the live `user` table, resolved once per run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UserSchema {
    pub has_username: bool,
}

impl UserSchema {
    pub async fn detect(conn: &mut SqliteConnection) -> Result<Self, sqlx::Error> {
        let columns = user_columns(conn).await?;
        Ok(Self {
            has_username: columns.iter().any(|c| c == "username"),
        })
    }

    /// Projection used for every read of the user table.
    pub fn select_users(&self) -> String {
        let username = if self.has_username {
            "username"
        } else {
            "NULL AS username"
        };
        format!(
            r#"SELECT CAST(id AS TEXT) AS id, email, name, {username}, role,
               CAST(created_at AS TEXT) AS created_at
               FROM "user" ORDER BY rowid"#
        )
    }
}

pub async fn table_names(conn: &mut SqliteConnection) -> Result<Vec<String>, sqlx::Error> {
    sqlx::query_scalar("SELECT name FROM sqlite_master WHERE type = 'table' ORDER BY name")
        .fetch_all(conn)
        .await
}

pub async fn user_columns(conn: &mut SqliteConnection) -> Result<Vec<String>, sqlx::Error> {
    sqlx::query_scalar("SELECT name FROM pragma_table_info('user')")
        .fetch_all(conn)
        .await
}
