use crate::application::error::ApiError;
use crate::application::ports::product_repository::ProductRepository;
use crate::domain::products::product::Product;

pub struct SetProductStatus<'a, R: ProductRepository + ?Sized> {
    pub repo: &'a R,
}

impl<'a, R: ProductRepository + ?Sized> SetProductStatus<'a, R> {
    pub async fn execute(
        &self,
        id: i32,
        is_active: bool,
        updated_by: i32,
    ) -> Result<Product, ApiError> {
        self.repo
            .set_product_status(id, is_active, updated_by)
            .await?
            .ok_or(ApiError::NotFound("product"))
    }
}
