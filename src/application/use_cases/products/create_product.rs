use rust_decimal::Decimal;

use crate::application::error::ApiError;
use crate::application::ports::product_repository::{NewProduct, ProductRepository};
use crate::application::use_cases::products::helpers;
use crate::domain::products::product::Product;

pub struct CreateProduct<'a, R: ProductRepository + ?Sized> {
    pub repo: &'a R,
}

#[derive(Debug, Clone)]
pub struct CreateProductRequest {
    pub name: String,
    pub description: Option<String>,
    pub price: Option<Decimal>,
    pub stock: Option<i32>,
    pub category_id: Option<i32>,
    pub image_url: Option<String>,
    pub created_by: i32,
}

impl<'a, R: ProductRepository + ?Sized> CreateProduct<'a, R> {
    pub async fn execute(&self, req: &CreateProductRequest) -> Result<Product, ApiError> {
        let name = helpers::valid_name(&req.name)?;
        let price = helpers::valid_price(req.price.unwrap_or(Decimal::ZERO))?;
        let stock = helpers::valid_stock(req.stock.unwrap_or(0))?;

        self.repo
            .create_product(NewProduct {
                name,
                description: req.description.clone().unwrap_or_default(),
                price,
                stock,
                category_id: req.category_id,
                image_url: req.image_url.clone(),
                created_by: req.created_by,
            })
            .await
    }
}
