use crate::db::models::{AuthCredentials, DbUser};
use crate::db::schema::{self, USER_TABLE, UserSchema};
use crate::error::ReconcileError;
use sqlx::sqlite::SqliteConnectOptions;
use sqlx::{Connection, SqliteConnection};
use std::path::Path;

/// Single-connection access to an OpenWebUI database.
pub struct UserStore {
    conn: SqliteConnection,
}

impl UserStore {
    /// Open an existing database file. Never creates one.
    pub async fn open(path: &Path) -> Result<Self, ReconcileError> {
        let opts = SqliteConnectOptions::new()
            .filename(path)
            .create_if_missing(false);
        let conn = SqliteConnection::connect_with(&opts).await?;
        Ok(Self { conn })
    }

    pub async fn close(self) -> Result<(), ReconcileError> {
        self.conn.close().await?;
        Ok(())
    }

    pub async fn has_user_table(&mut self) -> Result<bool, ReconcileError> {
        let tables = schema::table_names(&mut self.conn).await?;
        Ok(tables.iter().any(|t| t == USER_TABLE))
    }

    pub async fn user_schema(&mut self) -> Result<UserSchema, ReconcileError> {
        Ok(UserSchema::detect(&mut self.conn).await?)
    }

    pub async fn list_users(&mut self, schema: UserSchema) -> Result<Vec<DbUser>, ReconcileError> {
        let users = sqlx::query_as::<_, DbUser>(&schema.select_users())
            .fetch_all(&mut self.conn)
            .await?;
        Ok(users)
    }

    /// Set name (and username, when the column exists) of `id` to `new_name`.
    pub async fn rename_user(
        &mut self,
        schema: UserSchema,
        id: &str,
        new_name: &str,
    ) -> Result<(), ReconcileError> {
        let mut tx = self.conn.begin().await?;

        sqlx::query(r#"UPDATE "user" SET name = ? WHERE id = ?"#)
            .bind(new_name)
            .bind(id)
            .execute(&mut *tx)
            .await?;
        if schema.has_username {
            sqlx::query(r#"UPDATE "user" SET username = ? WHERE id = ?"#)
                .bind(new_name)
                .bind(id)
                .execute(&mut *tx)
                .await?;
        }

        tx.commit().await?;
        Ok(())
    }

    /// Give `keep_id` the login of `remove_id`, then delete `remove_id` from
    /// both `auth` and `user`. One transaction; any error rolls back.
    pub async fn merge_users(&mut self, remove_id: &str, keep_id: &str) -> Result<(), ReconcileError> {
        let mut tx = self.conn.begin().await?;

        let creds: AuthCredentials =
            sqlx::query_as("SELECT email, password FROM auth WHERE id = ?")
                .bind(remove_id)
                .fetch_optional(&mut *tx)
                .await?
                .ok_or_else(|| ReconcileError::MissingAuth {
                    id: remove_id.to_string(),
                })?;

        // auth.email may carry a unique index, so the old row goes first.
        sqlx::query("DELETE FROM auth WHERE id = ?")
            .bind(remove_id)
            .execute(&mut *tx)
            .await?;

        let updated = sqlx::query("UPDATE auth SET email = ?, password = ? WHERE id = ?")
            .bind(creds.email)
            .bind(creds.password)
            .bind(keep_id)
            .execute(&mut *tx)
            .await?
            .rows_affected();
        if updated == 0 {
            return Err(ReconcileError::MissingAuth {
                id: keep_id.to_string(),
            });
        }

        sqlx::query(r#"DELETE FROM "user" WHERE id = ?"#)
            .bind(remove_id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(())
    }
}
