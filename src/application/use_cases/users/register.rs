use crate::application::error::ApiError;
use crate::application::ports::user_repository::{NewUser, UserRepository};
use crate::application::services::credentials;
use crate::application::use_cases::users::helpers;
use crate::domain::users::user::User;

pub struct Register<'a, R: UserRepository + ?Sized> {
    pub repo: &'a R,
}

#[derive(Debug, Clone)]
pub struct RegisterRequest {
    pub name: String,
    pub surname: String,
    pub second_surname: Option<String>,
    pub email: String,
    pub password: String,
    pub role: Option<String>,
    pub created_by: Option<i32>,
}

impl<'a, R: UserRepository + ?Sized> Register<'a, R> {
    pub async fn execute(&self, req: &RegisterRequest) -> Result<User, ApiError> {
        let name = helpers::required_text("name", &req.name)?;
        let surname = helpers::required_text("surname", &req.surname)?;
        let second_surname = helpers::optional_text(req.second_surname.as_deref());
        let email = helpers::valid_email(&req.email)?;
        helpers::valid_password(&req.password)?;
        let role = helpers::parse_role(req.role.as_deref())?;

        let password_hash = credentials::hash_password(&req.password)?;

        self.repo
            .create_user(NewUser {
                name,
                surname,
                second_surname,
                email,
                password_hash,
                role,
                created_by: req.created_by,
            })
            .await
    }
}
