use crate::application::error::ApiError;
use crate::application::ports::user_repository::UserRepository;
use crate::domain::users::user::User;

pub struct SetUserStatus<'a, R: UserRepository + ?Sized> {
    pub repo: &'a R,
}

impl<'a, R: UserRepository + ?Sized> SetUserStatus<'a, R> {
    pub async fn execute(
        &self,
        id: i32,
        is_active: bool,
        updated_by: i32,
    ) -> Result<User, ApiError> {
        self.repo
            .set_user_status(id, is_active, updated_by)
            .await?
            .ok_or(ApiError::NotFound("user"))
    }
}
