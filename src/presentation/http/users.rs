use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::{get, patch, post, put},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::error::ApiError;
use crate::application::use_cases::users::delete_user::DeleteUser;
use crate::application::use_cases::users::list_users::ListUsers;
use crate::application::use_cases::users::login::{Login as LoginUc, LoginRequest as LoginDto};
use crate::application::use_cases::users::register::{
    Register as RegisterUc, RegisterRequest as RegisterDto,
};
use crate::application::use_cases::users::set_user_status::SetUserStatus;
use crate::application::use_cases::users::update_user::{
    UpdateUser as UpdateUserUc, UpdateUserRequest as UpdateUserDto,
};
use crate::bootstrap::app_context::AppContext;
use crate::domain::users::user::User;
use crate::presentation::http::MessageResponse;
use crate::presentation::http::error::ErrorResponse;

#[derive(Debug, Deserialize, ToSchema)]
pub struct RegisterRequest {
    pub name: String,
    pub surname: String,
    pub second_surname: Option<String>,
    pub email: String,
    pub password: String,
    pub role: Option<String>,
    pub created_by: Option<i32>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct RegisterResponse {
    pub message: String,
    pub id: i32,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Public view of the authenticated user; `name` carries the assembled
/// display name.
#[derive(Debug, Serialize, ToSchema)]
pub struct LoginUser {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub role: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct LoginResponse {
    pub message: String,
    pub user: LoginUser,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct UserResponse {
    pub id: i32,
    pub name: String,
    pub surname: String,
    pub second_surname: Option<String>,
    pub email: String,
    pub role: String,
    pub is_active: bool,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub created_by: Option<i32>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
    pub updated_by: Option<i32>,
}

impl From<User> for UserResponse {
    fn from(u: User) -> Self {
        UserResponse {
            id: u.id,
            name: u.name,
            surname: u.surname,
            second_surname: u.second_surname,
            email: u.email,
            role: u.role.as_str().to_string(),
            is_active: u.is_active,
            created_at: u.created_at,
            created_by: u.created_by,
            updated_at: u.updated_at,
            updated_by: u.updated_by,
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateUserRequest {
    pub name: String,
    pub surname: String,
    pub second_surname: Option<String>,
    pub email: String,
    pub role: String,
    pub updated_by: Option<i32>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UserStatusRequest {
    pub is_active: bool,
    pub updated_by: Option<i32>,
}

pub fn routes(ctx: AppContext) -> Router {
    Router::new()
        .route("/users/register", post(register))
        .route("/users/login", post(login))
        .route("/users", get(list_users))
        .route("/users/:id", put(update_user).delete(delete_user))
        .route("/users/:id/status", patch(set_user_status))
        .with_state(ctx)
}

#[utoipa::path(post, path = "/api/users/register", tag = "Users", request_body = RegisterRequest, responses(
    (status = 201, body = RegisterResponse),
    (status = 400, body = ErrorResponse),
    (status = 409, body = ErrorResponse)
))]
pub async fn register(
    State(ctx): State<AppContext>,
    Json(req): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<RegisterResponse>), ApiError> {
    let repo = ctx.user_repo();
    let uc = RegisterUc {
        repo: repo.as_ref(),
    };
    let dto = RegisterDto {
        name: req.name,
        surname: req.surname,
        second_surname: req.second_surname,
        email: req.email,
        password: req.password,
        role: req.role,
        created_by: req.created_by,
    };
    let user = uc.execute(&dto).await?;
    Ok((
        StatusCode::CREATED,
        Json(RegisterResponse {
            message: "user registered successfully".to_string(),
            id: user.id,
        }),
    ))
}

#[utoipa::path(post, path = "/api/users/login", tag = "Users", request_body = LoginRequest, responses(
    (status = 200, body = LoginResponse),
    (status = 401, body = ErrorResponse)
))]
pub async fn login(
    State(ctx): State<AppContext>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    let repo = ctx.user_repo();
    let uc = LoginUc {
        repo: repo.as_ref(),
    };
    let dto = LoginDto {
        email: req.email,
        password: req.password,
    };
    let user = uc.execute(&dto).await?;
    Ok(Json(LoginResponse {
        message: "login successful".to_string(),
        user: LoginUser {
            id: user.id,
            name: user.display_name(),
            email: user.email,
            role: user.role.as_str().to_string(),
        },
    }))
}

#[utoipa::path(get, path = "/api/users", tag = "Users", responses(
    (status = 200, body = [UserResponse])
))]
pub async fn list_users(State(ctx): State<AppContext>) -> Result<Json<Vec<UserResponse>>, ApiError> {
    let repo = ctx.user_repo();
    let uc = ListUsers {
        repo: repo.as_ref(),
    };
    let users = uc.execute().await?;
    Ok(Json(users.into_iter().map(Into::into).collect()))
}

#[utoipa::path(put, path = "/api/users/{id}", tag = "Users", request_body = UpdateUserRequest, params(
    ("id" = i32, Path, description = "User id")
), responses(
    (status = 200, body = UserResponse),
    (status = 400, body = ErrorResponse),
    (status = 404, body = ErrorResponse),
    (status = 409, body = ErrorResponse)
))]
pub async fn update_user(
    State(ctx): State<AppContext>,
    Path(id): Path<i32>,
    Json(req): Json<UpdateUserRequest>,
) -> Result<Json<UserResponse>, ApiError> {
    let repo = ctx.user_repo();
    let uc = UpdateUserUc {
        repo: repo.as_ref(),
    };
    let dto = UpdateUserDto {
        name: req.name,
        surname: req.surname,
        second_surname: req.second_surname,
        email: req.email,
        role: req.role,
        updated_by: req.updated_by.unwrap_or(ctx.cfg.bootstrap_admin_id),
    };
    let user = uc.execute(id, &dto).await?;
    Ok(Json(user.into()))
}

#[utoipa::path(patch, path = "/api/users/{id}/status", tag = "Users", request_body = UserStatusRequest, params(
    ("id" = i32, Path, description = "User id")
), responses(
    (status = 200, body = UserResponse),
    (status = 404, body = ErrorResponse)
))]
pub async fn set_user_status(
    State(ctx): State<AppContext>,
    Path(id): Path<i32>,
    Json(req): Json<UserStatusRequest>,
) -> Result<Json<UserResponse>, ApiError> {
    let repo = ctx.user_repo();
    let uc = SetUserStatus {
        repo: repo.as_ref(),
    };
    let updated_by = req.updated_by.unwrap_or(ctx.cfg.bootstrap_admin_id);
    let user = uc.execute(id, req.is_active, updated_by).await?;
    Ok(Json(user.into()))
}

#[utoipa::path(delete, path = "/api/users/{id}", tag = "Users", params(
    ("id" = i32, Path, description = "User id")
), responses(
    (status = 200, body = MessageResponse),
    (status = 404, body = ErrorResponse)
))]
pub async fn delete_user(
    State(ctx): State<AppContext>,
    Path(id): Path<i32>,
) -> Result<Json<MessageResponse>, ApiError> {
    let repo = ctx.user_repo();
    let uc = DeleteUser {
        repo: repo.as_ref(),
    };
    uc.execute(id).await?;
    Ok(Json(MessageResponse {
        message: "user deleted successfully".to_string(),
    }))
}
