use async_trait::async_trait;

use crate::application::error::ApiError;
use crate::domain::users::user::{User, UserRole};

#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub surname: String,
    pub second_surname: Option<String>,
    pub email: String,
    pub password_hash: String,
    pub role: UserRole,
    pub created_by: Option<i32>,
}

#[derive(Debug, Clone)]
pub struct UserUpdate {
    pub name: String,
    pub surname: String,
    pub second_surname: Option<String>,
    pub email: String,
    pub role: UserRole,
    pub updated_by: i32,
}

/// Credential lookup row; the only place a stored digest leaves the store.
#[derive(Debug, Clone)]
pub struct AuthUserRow {
    pub user: User,
    pub password_hash: String,
}

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Inserts the user; when `created_by` is absent the row's creator is
    /// set to its own id within the same transaction.
    async fn create_user(&self, user: NewUser) -> Result<User, ApiError>;
    async fn find_by_email(&self, email: &str) -> Result<Option<AuthUserRow>, ApiError>;
    async fn list_users(&self) -> Result<Vec<User>, ApiError>;
    async fn update_user(&self, id: i32, update: UserUpdate) -> Result<Option<User>, ApiError>;
    async fn set_user_status(
        &self,
        id: i32,
        is_active: bool,
        updated_by: i32,
    ) -> Result<Option<User>, ApiError>;
    async fn delete_user(&self, id: i32) -> Result<bool, ApiError>;
}
