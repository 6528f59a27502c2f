//! Persistent user directory backed by SQLite
//!
//! The directory is the single source of truth for user data; sessions hold
//! only the user's name and every profile view re-reads the row from here.

use crate::{AppError, AppResult};
use serde::Serialize;
use sqlx::{
    sqlite::{SqliteConnectOptions, SqlitePoolOptions},
    SqlitePool,
};
use tracing::{debug, info};

/// A row in the user directory
#[derive(Debug, Clone, PartialEq, Eq, Serialize, sqlx::FromRow)]
pub struct UserRecord {
    pub id: i64,
    pub name: String,
    pub email: String,
}

/// Handle to the user directory table
#[derive(Clone)]
pub struct UserDirectory {
    pool: SqlitePool,
}

impl UserDirectory {
    /// Connect to the database and ensure the backing table exists
    pub async fn connect(database_url: &str) -> AppResult<Self> {
        info!("Connecting to user directory: {}", database_url);

        let pool = if database_url.contains(":memory:") {
            // Every pooled connection opens its own in-memory database, so the
            // pool must be capped at a single connection.
            SqlitePoolOptions::new()
                .max_connections(1)
                .connect(database_url)
                .await?
        } else {
            let db_path = database_url.strip_prefix("sqlite:").unwrap_or(database_url);

            if let Some(parent) = std::path::Path::new(db_path).parent() {
                if !parent.as_os_str().is_empty() && !parent.exists() {
                    debug!("Creating parent directory: {}", parent.display());
                    std::fs::create_dir_all(parent).map_err(AppError::Server)?;
                }
            }

            let options = SqliteConnectOptions::new()
                .filename(db_path)
                .create_if_missing(true);

            SqlitePool::connect_with(options).await?
        };

        Self::create_tables(&pool).await?;
        info!("User directory ready");

        Ok(Self { pool })
    }

    /// Create the users table if it does not exist yet
    async fn create_tables(pool: &SqlitePool) -> AppResult<()> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS users (
                id    INTEGER PRIMARY KEY AUTOINCREMENT,
                name  VARCHAR(100) NOT NULL UNIQUE,
                email VARCHAR(100) NOT NULL DEFAULT ''
            )
            "#,
        )
        .execute(pool)
        .await?;

        debug!("Users table created successfully");
        Ok(())
    }

    /// Look up a user by name
    pub async fn find_by_name(&self, name: &str) -> AppResult<Option<UserRecord>> {
        let user = sqlx::query_as::<_, UserRecord>(
            "SELECT id, name, email FROM users WHERE name = ?",
        )
        .bind(name)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    /// Look up a user by name, inserting a fresh row with an empty email when
    /// the name is not known yet. Concurrent calls with the same name converge
    /// on a single row through the unique constraint.
    pub async fn find_or_create(&self, name: &str) -> AppResult<UserRecord> {
        sqlx::query("INSERT INTO users (name, email) VALUES (?, '') ON CONFLICT(name) DO NOTHING")
            .bind(name)
            .execute(&self.pool)
            .await?;

        self.find_by_name(name)
            .await?
            .ok_or_else(|| AppError::UnknownUser(name.to_string()))
    }

    /// Overwrite the email of the row matching `name`
    pub async fn update_email(&self, name: &str, email: &str) -> AppResult<UserRecord> {
        let result = sqlx::query("UPDATE users SET email = ? WHERE name = ?")
            .bind(email)
            .bind(name)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::UnknownUser(name.to_string()));
        }

        self.find_by_name(name)
            .await?
            .ok_or_else(|| AppError::UnknownUser(name.to_string()))
    }

    /// Fetch every row in the directory, in insertion order
    pub async fn list_all(&self) -> AppResult<Vec<UserRecord>> {
        let users =
            sqlx::query_as::<_, UserRecord>("SELECT id, name, email FROM users ORDER BY id")
                .fetch_all(&self.pool)
                .await?;

        Ok(users)
    }
}
