//! Tests for the user handlers: registration, login, listing, profile
//! updates, status toggling and deletion.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use super::testing::test_ctx;
use super::users::{self, LoginRequest, RegisterRequest, UpdateUserRequest, UserStatusRequest};
use crate::application::error::ApiError;
use crate::bootstrap::app_context::AppContext;

/// Standard "ana" registration request used by most tests.
fn ana_register() -> RegisterRequest {
    RegisterRequest {
        name: "Ana".into(),
        surname: "Lopez".into(),
        second_surname: Some("Diaz".into()),
        email: "ana@example.com".into(),
        password: "secret123".into(),
        role: None,
        created_by: None,
    }
}

async fn register_ana(ctx: &AppContext) -> i32 {
    let (status, Json(resp)) = users::register(State(ctx.clone()), Json(ana_register()))
        .await
        .unwrap();
    assert_eq!(status, StatusCode::CREATED);
    resp.id
}

fn ana_update() -> UpdateUserRequest {
    UpdateUserRequest {
        name: "Ana Maria".into(),
        surname: "Lopez".into(),
        second_surname: None,
        email: "ana.maria@example.com".into(),
        role: "admin".into(),
        updated_by: None,
    }
}

#[tokio::test]
async fn register_and_login() {
    let ctx = test_ctx();

    let (status, Json(resp)) = users::register(State(ctx.clone()), Json(ana_register()))
        .await
        .unwrap();
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(resp.message, "user registered successfully");
    assert!(resp.id > 0);

    let Json(login) = users::login(
        State(ctx),
        Json(LoginRequest {
            email: "ana@example.com".into(),
            password: "secret123".into(),
        }),
    )
    .await
    .unwrap();
    assert_eq!(login.message, "login successful");
    assert_eq!(login.user.id, resp.id);
    assert_eq!(login.user.name, "Ana Lopez Diaz");
    assert_eq!(login.user.email, "ana@example.com");
    assert_eq!(login.user.role, "client");
}

#[tokio::test]
async fn login_failures_are_indistinguishable() {
    let ctx = test_ctx();
    register_ana(&ctx).await;

    let wrong_password = users::login(
        State(ctx.clone()),
        Json(LoginRequest {
            email: "ana@example.com".into(),
            password: "not-the-password".into(),
        }),
    )
    .await
    .unwrap_err();
    let unknown_email = users::login(
        State(ctx),
        Json(LoginRequest {
            email: "nobody@example.com".into(),
            password: "secret123".into(),
        }),
    )
    .await
    .unwrap_err();

    assert_eq!(wrong_password.to_string(), unknown_email.to_string());
    assert_eq!(
        wrong_password.into_response().status(),
        StatusCode::UNAUTHORIZED
    );
    assert_eq!(
        unknown_email.into_response().status(),
        StatusCode::UNAUTHORIZED
    );
}

#[tokio::test]
async fn register_duplicate_email_conflicts() {
    let ctx = test_ctx();
    register_ana(&ctx).await;

    let err = users::register(State(ctx), Json(ana_register()))
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::Conflict(_)));
    assert_eq!(err.into_response().status(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn register_rejects_invalid_input() {
    let ctx = test_ctx();

    let blank_name = RegisterRequest {
        name: "   ".into(),
        ..ana_register()
    };
    let bad_email = RegisterRequest {
        email: "not-an-address".into(),
        ..ana_register()
    };
    let short_password = RegisterRequest {
        password: "short".into(),
        ..ana_register()
    };
    let bad_role = RegisterRequest {
        role: Some("superuser".into()),
        ..ana_register()
    };

    for req in [blank_name, bad_email, short_password, bad_role] {
        let err = users::register(State(ctx.clone()), Json(req))
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Validation(_)));
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }
}

#[tokio::test]
async fn self_registration_references_itself() {
    let ctx = test_ctx();
    let id = register_ana(&ctx).await;

    let Json(listed) = users::list_users(State(ctx.clone())).await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].created_by, Some(id));

    let (_, Json(resp)) = users::register(
        State(ctx.clone()),
        Json(RegisterRequest {
            email: "luis@example.com".into(),
            created_by: Some(42),
            ..ana_register()
        }),
    )
    .await
    .unwrap();
    let Json(listed) = users::list_users(State(ctx)).await.unwrap();
    let luis = listed.iter().find(|u| u.id == resp.id).unwrap();
    assert_eq!(luis.created_by, Some(42));
}

#[tokio::test]
async fn list_returns_users_in_id_order() {
    let ctx = test_ctx();
    register_ana(&ctx).await;
    users::register(
        State(ctx.clone()),
        Json(RegisterRequest {
            name: "Luis".into(),
            email: "luis@example.com".into(),
            ..ana_register()
        }),
    )
    .await
    .unwrap();

    let Json(listed) = users::list_users(State(ctx)).await.unwrap();
    let ids: Vec<i32> = listed.iter().map(|u| u.id).collect();
    let mut sorted = ids.clone();
    sorted.sort();
    assert_eq!(ids, sorted);
    assert_eq!(listed.len(), 2);
}

#[tokio::test]
async fn update_replaces_profile_and_stamps_actor() {
    let ctx = test_ctx();
    let id = register_ana(&ctx).await;

    let Json(updated) = users::update_user(State(ctx.clone()), Path(id), Json(ana_update()))
        .await
        .unwrap();
    assert_eq!(updated.name, "Ana Maria");
    assert_eq!(updated.second_surname, None);
    assert_eq!(updated.email, "ana.maria@example.com");
    assert_eq!(updated.role, "admin");
    // No actor in the request: the bootstrap admin is stamped.
    assert_eq!(updated.updated_by, Some(1));
}

#[tokio::test]
async fn update_unknown_user_is_not_found() {
    let ctx = test_ctx();

    let err = users::update_user(State(ctx), Path(999), Json(ana_update()))
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::NotFound(_)));
    assert_eq!(err.into_response().status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn update_to_taken_email_conflicts() {
    let ctx = test_ctx();
    register_ana(&ctx).await;
    let (_, Json(resp)) = users::register(
        State(ctx.clone()),
        Json(RegisterRequest {
            email: "luis@example.com".into(),
            ..ana_register()
        }),
    )
    .await
    .unwrap();

    let err = users::update_user(
        State(ctx),
        Path(resp.id),
        Json(UpdateUserRequest {
            email: "ana@example.com".into(),
            ..ana_update()
        }),
    )
    .await
    .unwrap_err();
    assert!(matches!(err, ApiError::Conflict(_)));
}

#[tokio::test]
async fn status_toggle_deactivates_and_reactivates() {
    let ctx = test_ctx();
    let id = register_ana(&ctx).await;

    let Json(off) = users::set_user_status(
        State(ctx.clone()),
        Path(id),
        Json(UserStatusRequest {
            is_active: false,
            updated_by: None,
        }),
    )
    .await
    .unwrap();
    assert!(!off.is_active);
    assert_eq!(off.updated_by, Some(1));

    let Json(on) = users::set_user_status(
        State(ctx.clone()),
        Path(id),
        Json(UserStatusRequest {
            is_active: true,
            updated_by: Some(7),
        }),
    )
    .await
    .unwrap();
    assert!(on.is_active);
    assert_eq!(on.updated_by, Some(7));

    let err = users::set_user_status(
        State(ctx),
        Path(999),
        Json(UserStatusRequest {
            is_active: false,
            updated_by: None,
        }),
    )
    .await
    .unwrap_err();
    assert!(matches!(err, ApiError::NotFound(_)));
}

#[tokio::test]
async fn responses_never_carry_the_password_hash() {
    let ctx = test_ctx();
    register_ana(&ctx).await;

    let Json(listed) = users::list_users(State(ctx)).await.unwrap();
    let rendered = serde_json::to_value(&listed).unwrap().to_string();
    assert!(!rendered.contains("password"));
    assert!(!rendered.contains("argon2"));
}

#[tokio::test]
async fn delete_is_terminal() {
    let ctx = test_ctx();
    let id = register_ana(&ctx).await;

    let Json(resp) = users::delete_user(State(ctx.clone()), Path(id))
        .await
        .unwrap();
    assert_eq!(resp.message, "user deleted successfully");

    let err = users::delete_user(State(ctx.clone()), Path(id))
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::NotFound(_)));

    let Json(listed) = users::list_users(State(ctx)).await.unwrap();
    assert!(listed.is_empty());
}
