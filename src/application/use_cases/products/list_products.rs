use crate::application::error::ApiError;
use crate::application::ports::product_repository::ProductRepository;
use crate::domain::products::product::ProductWithCategory;

pub struct ListProducts<'a, R: ProductRepository + ?Sized> {
    pub repo: &'a R,
}

impl<'a, R: ProductRepository + ?Sized> ListProducts<'a, R> {
    pub async fn execute(&self) -> Result<Vec<ProductWithCategory>, ApiError> {
        self.repo.list_products().await
    }
}
