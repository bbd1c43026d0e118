use crate::application::error::ApiError;
use crate::application::ports::user_repository::{UserRepository, UserUpdate};
use crate::application::use_cases::users::helpers;
use crate::domain::users::user::User;

pub struct UpdateUser<'a, R: UserRepository + ?Sized> {
    pub repo: &'a R,
}

/// Full replacement of the profile fields; the password is untouched.
#[derive(Debug, Clone)]
pub struct UpdateUserRequest {
    pub name: String,
    pub surname: String,
    pub second_surname: Option<String>,
    pub email: String,
    pub role: String,
    pub updated_by: i32,
}

impl<'a, R: UserRepository + ?Sized> UpdateUser<'a, R> {
    pub async fn execute(&self, id: i32, req: &UpdateUserRequest) -> Result<User, ApiError> {
        let update = UserUpdate {
            name: helpers::required_text("name", &req.name)?,
            surname: helpers::required_text("surname", &req.surname)?,
            second_surname: helpers::optional_text(req.second_surname.as_deref()),
            email: helpers::valid_email(&req.email)?,
            role: helpers::parse_role(Some(&req.role))?,
            updated_by: req.updated_by,
        };
        self.repo
            .update_user(id, update)
            .await?
            .ok_or(ApiError::NotFound("user"))
    }
}
