use async_trait::async_trait;
use rust_decimal::Decimal;

use crate::application::error::ApiError;
use crate::domain::products::product::{Product, ProductWithCategory};

#[derive(Debug, Clone)]
pub struct NewProduct {
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub stock: i32,
    pub category_id: Option<i32>,
    pub image_url: Option<String>,
    pub created_by: i32,
}

#[derive(Debug, Clone)]
pub struct ProductUpdate {
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub stock: i32,
    pub category_id: Option<i32>,
    pub image_url: Option<String>,
    pub updated_by: i32,
}

#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Lists every product joined to its category name, ordered by id.
    async fn list_products(&self) -> Result<Vec<ProductWithCategory>, ApiError>;
    async fn create_product(&self, product: NewProduct) -> Result<Product, ApiError>;
    async fn update_product(
        &self,
        id: i32,
        update: ProductUpdate,
    ) -> Result<Option<Product>, ApiError>;
    async fn set_product_status(
        &self,
        id: i32,
        is_active: bool,
        updated_by: i32,
    ) -> Result<Option<Product>, ApiError>;
    async fn delete_product(&self, id: i32) -> Result<bool, ApiError>;
}
