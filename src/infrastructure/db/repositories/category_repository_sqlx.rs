use async_trait::async_trait;
use sqlx::Row;

use crate::application::error::ApiError;
use crate::application::ports::category_repository::CategoryRepository;
use crate::domain::categories::category::Category;
use crate::infrastructure::db::{PgPool, map_db_error};

pub struct SqlxCategoryRepository {
    pub pool: PgPool,
}

impl SqlxCategoryRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CategoryRepository for SqlxCategoryRepository {
    async fn list_active(&self) -> Result<Vec<Category>, ApiError> {
        let rows = sqlx::query(
            r#"SELECT id, name FROM categories WHERE is_active = TRUE ORDER BY name"#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| map_db_error("category", e))?;
        Ok(rows
            .iter()
            .map(|r| Category {
                id: r.get("id"),
                name: r.get("name"),
            })
            .collect())
    }
}
