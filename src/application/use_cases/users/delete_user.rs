use crate::application::error::ApiError;
use crate::application::ports::user_repository::UserRepository;

pub struct DeleteUser<'a, R: UserRepository + ?Sized> {
    pub repo: &'a R,
}

impl<'a, R: UserRepository + ?Sized> DeleteUser<'a, R> {
    pub async fn execute(&self, id: i32) -> Result<(), ApiError> {
        if !self.repo.delete_user(id).await? {
            return Err(ApiError::NotFound("user"));
        }
        Ok(())
    }
}
