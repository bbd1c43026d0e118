use async_trait::async_trait;

use crate::application::error::ApiError;
use crate::domain::categories::category::Category;

#[async_trait]
pub trait CategoryRepository: Send + Sync {
    /// Active categories only, ordered by name.
    async fn list_active(&self) -> Result<Vec<Category>, ApiError>;
}
