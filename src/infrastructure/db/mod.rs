use sqlx::{Pool, Postgres};

use crate::application::error::ApiError;

pub type PgPool = Pool<Postgres>;

pub async fn connect_pool(database_url: &str) -> anyhow::Result<PgPool> {
    let pool = sqlx::postgres::PgPoolOptions::new()
        .max_connections(10)
        .connect(database_url)
        .await?;
    Ok(pool)
}

pub async fn migrate(pool: &PgPool) -> anyhow::Result<()> {
    // Uses compile-time embedded migrations under ./migrations
    sqlx::migrate!("./migrations").run(pool).await?;
    Ok(())
}

/// Classifies constraint violations; `entity` names the offending field or
/// referenced record in client-facing messages.
pub fn map_db_error(entity: &'static str, err: sqlx::Error) -> ApiError {
    if let Some(db) = err.as_database_error() {
        if db.is_unique_violation() {
            return ApiError::Conflict(entity);
        }
        if db.is_foreign_key_violation() {
            return ApiError::Validation(format!("{} does not exist", entity));
        }
    }
    ApiError::Internal(err.into())
}

pub mod repositories;
