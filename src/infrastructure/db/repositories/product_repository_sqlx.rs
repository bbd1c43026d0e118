use async_trait::async_trait;
use sqlx::Row;
use sqlx::postgres::PgRow;

use crate::application::error::ApiError;
use crate::application::ports::product_repository::{
    NewProduct, ProductRepository, ProductUpdate,
};
use crate::domain::products::product::{Product, ProductWithCategory};
use crate::infrastructure::db::{PgPool, map_db_error};

pub struct SqlxProductRepository {
    pub pool: PgPool,
}

impl SqlxProductRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn map_product(row: &PgRow) -> Product {
    Product {
        id: row.get("id"),
        name: row.get("name"),
        description: row.get("description"),
        price: row.get("price"),
        stock: row.get("stock"),
        category_id: row.get("category_id"),
        image_url: row.get("image_url"),
        is_active: row.get("is_active"),
        created_at: row.get("created_at"),
        created_by: row.get("created_by"),
        updated_at: row.get("updated_at"),
        updated_by: row.get("updated_by"),
    }
}

#[async_trait]
impl ProductRepository for SqlxProductRepository {
    async fn list_products(&self) -> Result<Vec<ProductWithCategory>, ApiError> {
        let rows = sqlx::query(
            r#"SELECT p.id, p.name, p.description, p.price, p.stock, p.category_id,
                      c.name AS category_name, p.image_url, p.is_active,
                      p.created_at, p.created_by, p.updated_at, p.updated_by
               FROM products p
               LEFT JOIN categories c ON c.id = p.category_id
               ORDER BY p.id"#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| map_db_error("product", e))?;
        Ok(rows
            .iter()
            .map(|r| ProductWithCategory {
                id: r.get("id"),
                name: r.get("name"),
                description: r.get("description"),
                price: r.get("price"),
                stock: r.get("stock"),
                category_id: r.get("category_id"),
                category_name: r.get("category_name"),
                image_url: r.get("image_url"),
                is_active: r.get("is_active"),
                created_at: r.get("created_at"),
                created_by: r.get("created_by"),
                updated_at: r.get("updated_at"),
                updated_by: r.get("updated_by"),
            })
            .collect())
    }

    async fn create_product(&self, product: NewProduct) -> Result<Product, ApiError> {
        let row = sqlx::query(
            r#"INSERT INTO products (name, description, price, stock, category_id, image_url, created_by)
               VALUES ($1, $2, $3, $4, $5, $6, $7)
               RETURNING id, name, description, price, stock, category_id, image_url, is_active,
                         created_at, created_by, updated_at, updated_by"#,
        )
        .bind(&product.name)
        .bind(&product.description)
        .bind(product.price)
        .bind(product.stock)
        .bind(product.category_id)
        .bind(&product.image_url)
        .bind(product.created_by)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_db_error("category", e))?;
        Ok(map_product(&row))
    }

    async fn update_product(
        &self,
        id: i32,
        update: ProductUpdate,
    ) -> Result<Option<Product>, ApiError> {
        let row = sqlx::query(
            r#"UPDATE products
               SET name = $1, description = $2, price = $3, stock = $4, category_id = $5,
                   image_url = $6, updated_at = NOW(), updated_by = $7
               WHERE id = $8
               RETURNING id, name, description, price, stock, category_id, image_url, is_active,
                         created_at, created_by, updated_at, updated_by"#,
        )
        .bind(&update.name)
        .bind(&update.description)
        .bind(update.price)
        .bind(update.stock)
        .bind(update.category_id)
        .bind(&update.image_url)
        .bind(update.updated_by)
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_db_error("category", e))?;
        Ok(row.as_ref().map(map_product))
    }

    async fn set_product_status(
        &self,
        id: i32,
        is_active: bool,
        updated_by: i32,
    ) -> Result<Option<Product>, ApiError> {
        let row = sqlx::query(
            r#"UPDATE products
               SET is_active = $1, updated_at = NOW(), updated_by = $2
               WHERE id = $3
               RETURNING id, name, description, price, stock, category_id, image_url, is_active,
                         created_at, created_by, updated_at, updated_by"#,
        )
        .bind(is_active)
        .bind(updated_by)
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_db_error("product", e))?;
        Ok(row.as_ref().map(map_product))
    }

    async fn delete_product(&self, id: i32) -> Result<bool, ApiError> {
        let res = sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| map_db_error("product", e))?;
        Ok(res.rows_affected() > 0)
    }
}
