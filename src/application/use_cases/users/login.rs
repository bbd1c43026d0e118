use crate::application::error::ApiError;
use crate::application::ports::user_repository::UserRepository;
use crate::application::services::credentials;
use crate::domain::users::user::User;

pub struct Login<'a, R: UserRepository + ?Sized> {
    pub repo: &'a R,
}

#[derive(Debug, Clone)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

impl<'a, R: UserRepository + ?Sized> Login<'a, R> {
    /// Unknown email and wrong password fail with the same error.
    pub async fn execute(&self, req: &LoginRequest) -> Result<User, ApiError> {
        let row = self
            .repo
            .find_by_email(req.email.trim())
            .await?
            .ok_or(ApiError::InvalidCredentials)?;

        if credentials::verify_password(&req.password, &row.password_hash) {
            Ok(row.user)
        } else {
            Err(ApiError::InvalidCredentials)
        }
    }
}
