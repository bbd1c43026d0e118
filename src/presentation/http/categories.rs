use axum::{Json, Router, extract::State, routing::get};
use serde::Serialize;
use utoipa::ToSchema;

use crate::application::error::ApiError;
use crate::application::use_cases::categories::list_categories::ListCategories;
use crate::bootstrap::app_context::AppContext;
use crate::domain::categories::category::Category;

#[derive(Debug, Serialize, ToSchema)]
pub struct CategoryResponse {
    pub id: i32,
    pub name: String,
}

impl From<Category> for CategoryResponse {
    fn from(c: Category) -> Self {
        CategoryResponse {
            id: c.id,
            name: c.name,
        }
    }
}

pub fn routes(ctx: AppContext) -> Router {
    Router::new()
        .route("/categories", get(list_categories))
        .with_state(ctx)
}

#[utoipa::path(get, path = "/api/categories", tag = "Categories", responses(
    (status = 200, body = [CategoryResponse])
))]
pub async fn list_categories(
    State(ctx): State<AppContext>,
) -> Result<Json<Vec<CategoryResponse>>, ApiError> {
    let repo = ctx.category_repo();
    let uc = ListCategories {
        repo: repo.as_ref(),
    };
    let categories = uc.execute().await?;
    Ok(Json(categories.into_iter().map(Into::into).collect()))
}
