use rust_decimal::Decimal;

use crate::application::error::ApiError;
use crate::application::ports::product_repository::{ProductRepository, ProductUpdate};
use crate::application::use_cases::products::helpers;
use crate::domain::products::product::Product;

pub struct UpdateProduct<'a, R: ProductRepository + ?Sized> {
    pub repo: &'a R,
}

/// Full replacement of the mutable fields.
#[derive(Debug, Clone)]
pub struct UpdateProductRequest {
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub stock: i32,
    pub category_id: Option<i32>,
    pub image_url: Option<String>,
    pub updated_by: i32,
}

impl<'a, R: ProductRepository + ?Sized> UpdateProduct<'a, R> {
    pub async fn execute(&self, id: i32, req: &UpdateProductRequest) -> Result<Product, ApiError> {
        let update = ProductUpdate {
            name: helpers::valid_name(&req.name)?,
            description: req.description.clone(),
            price: helpers::valid_price(req.price)?,
            stock: helpers::valid_stock(req.stock)?,
            category_id: req.category_id,
            image_url: req.image_url.clone(),
            updated_by: req.updated_by,
        };
        self.repo
            .update_product(id, update)
            .await?
            .ok_or(ApiError::NotFound("product"))
    }
}
