use crate::application::error::ApiError;
use crate::application::ports::user_repository::UserRepository;
use crate::domain::users::user::User;

pub struct ListUsers<'a, R: UserRepository + ?Sized> {
    pub repo: &'a R,
}

impl<'a, R: UserRepository + ?Sized> ListUsers<'a, R> {
    pub async fn execute(&self) -> Result<Vec<User>, ApiError> {
        self.repo.list_users().await
    }
}
