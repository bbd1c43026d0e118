use crate::application::error::ApiError;
use crate::application::ports::category_repository::CategoryRepository;
use crate::domain::categories::category::Category;

pub struct ListCategories<'a, R: CategoryRepository + ?Sized> {
    pub repo: &'a R,
}

impl<'a, R: CategoryRepository + ?Sized> ListCategories<'a, R> {
    pub async fn execute(&self) -> Result<Vec<Category>, ApiError> {
        self.repo.list_active().await
    }
}
