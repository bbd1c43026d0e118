use crate::application::error::ApiError;
use crate::application::ports::product_repository::ProductRepository;

pub struct DeleteProduct<'a, R: ProductRepository + ?Sized> {
    pub repo: &'a R,
}

impl<'a, R: ProductRepository + ?Sized> DeleteProduct<'a, R> {
    pub async fn execute(&self, id: i32) -> Result<(), ApiError> {
        if !self.repo.delete_product(id).await? {
            return Err(ApiError::NotFound("product"));
        }
        Ok(())
    }
}
