use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::{get, patch, put},
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::error::ApiError;
use crate::application::use_cases::products::create_product::{
    CreateProduct as CreateProductUc, CreateProductRequest as CreateProductDto,
};
use crate::application::use_cases::products::delete_product::DeleteProduct;
use crate::application::use_cases::products::list_products::ListProducts;
use crate::application::use_cases::products::set_product_status::SetProductStatus;
use crate::application::use_cases::products::update_product::{
    UpdateProduct as UpdateProductUc, UpdateProductRequest as UpdateProductDto,
};
use crate::bootstrap::app_context::AppContext;
use crate::domain::products::product::{Product, ProductWithCategory};
use crate::presentation::http::MessageResponse;
use crate::presentation::http::error::ErrorResponse;

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateProductRequest {
    pub name: String,
    pub description: Option<String>,
    pub price: Option<Decimal>,
    pub stock: Option<i32>,
    pub category_id: Option<i32>,
    pub image_url: Option<String>,
    pub created_by: Option<i32>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CreateProductResponse {
    pub message: String,
    pub id: i32,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateProductRequest {
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub stock: i32,
    pub category_id: Option<i32>,
    pub image_url: Option<String>,
    pub updated_by: Option<i32>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct ProductStatusRequest {
    pub is_active: bool,
    pub updated_by: Option<i32>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ProductResponse {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub stock: i32,
    pub category_id: Option<i32>,
    pub image_url: Option<String>,
    pub is_active: bool,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub created_by: i32,
    pub updated_at: chrono::DateTime<chrono::Utc>,
    pub updated_by: Option<i32>,
}

impl From<Product> for ProductResponse {
    fn from(p: Product) -> Self {
        ProductResponse {
            id: p.id,
            name: p.name,
            description: p.description,
            price: p.price,
            stock: p.stock,
            category_id: p.category_id,
            image_url: p.image_url,
            is_active: p.is_active,
            created_at: p.created_at,
            created_by: p.created_by,
            updated_at: p.updated_at,
            updated_by: p.updated_by,
        }
    }
}

/// List row; `category_name` is null for uncategorised products.
#[derive(Debug, Serialize, ToSchema)]
pub struct ProductListItem {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub stock: i32,
    pub category_id: Option<i32>,
    pub category_name: Option<String>,
    pub image_url: Option<String>,
    pub is_active: bool,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub created_by: i32,
    pub updated_at: chrono::DateTime<chrono::Utc>,
    pub updated_by: Option<i32>,
}

impl From<ProductWithCategory> for ProductListItem {
    fn from(row: ProductWithCategory) -> Self {
        ProductListItem {
            id: row.id,
            name: row.name,
            description: row.description,
            price: row.price,
            stock: row.stock,
            category_id: row.category_id,
            category_name: row.category_name,
            image_url: row.image_url,
            is_active: row.is_active,
            created_at: row.created_at,
            created_by: row.created_by,
            updated_at: row.updated_at,
            updated_by: row.updated_by,
        }
    }
}

pub fn routes(ctx: AppContext) -> Router {
    Router::new()
        .route("/products", get(list_products).post(create_product))
        .route("/products/:id", put(update_product).delete(delete_product))
        .route("/products/:id/status", patch(set_product_status))
        .with_state(ctx)
}

#[utoipa::path(get, path = "/api/products", tag = "Products", responses(
    (status = 200, body = [ProductListItem])
))]
pub async fn list_products(
    State(ctx): State<AppContext>,
) -> Result<Json<Vec<ProductListItem>>, ApiError> {
    let repo = ctx.product_repo();
    let uc = ListProducts {
        repo: repo.as_ref(),
    };
    let products = uc.execute().await?;
    Ok(Json(products.into_iter().map(Into::into).collect()))
}

#[utoipa::path(post, path = "/api/products", tag = "Products", request_body = CreateProductRequest, responses(
    (status = 201, body = CreateProductResponse),
    (status = 400, body = ErrorResponse)
))]
pub async fn create_product(
    State(ctx): State<AppContext>,
    Json(req): Json<CreateProductRequest>,
) -> Result<(StatusCode, Json<CreateProductResponse>), ApiError> {
    let repo = ctx.product_repo();
    let uc = CreateProductUc {
        repo: repo.as_ref(),
    };
    let dto = CreateProductDto {
        name: req.name,
        description: req.description,
        price: req.price,
        stock: req.stock,
        category_id: req.category_id,
        image_url: req.image_url,
        created_by: req.created_by.unwrap_or(ctx.cfg.bootstrap_admin_id),
    };
    let product = uc.execute(&dto).await?;
    Ok((
        StatusCode::CREATED,
        Json(CreateProductResponse {
            message: "product created successfully".to_string(),
            id: product.id,
        }),
    ))
}

#[utoipa::path(put, path = "/api/products/{id}", tag = "Products", request_body = UpdateProductRequest, params(
    ("id" = i32, Path, description = "Product id")
), responses(
    (status = 200, body = ProductResponse),
    (status = 400, body = ErrorResponse),
    (status = 404, body = ErrorResponse)
))]
pub async fn update_product(
    State(ctx): State<AppContext>,
    Path(id): Path<i32>,
    Json(req): Json<UpdateProductRequest>,
) -> Result<Json<ProductResponse>, ApiError> {
    let repo = ctx.product_repo();
    let uc = UpdateProductUc {
        repo: repo.as_ref(),
    };
    let dto = UpdateProductDto {
        name: req.name,
        description: req.description,
        price: req.price,
        stock: req.stock,
        category_id: req.category_id,
        image_url: req.image_url,
        updated_by: req.updated_by.unwrap_or(ctx.cfg.bootstrap_admin_id),
    };
    let product = uc.execute(id, &dto).await?;
    Ok(Json(product.into()))
}

#[utoipa::path(patch, path = "/api/products/{id}/status", tag = "Products", request_body = ProductStatusRequest, params(
    ("id" = i32, Path, description = "Product id")
), responses(
    (status = 200, body = ProductResponse),
    (status = 404, body = ErrorResponse)
))]
pub async fn set_product_status(
    State(ctx): State<AppContext>,
    Path(id): Path<i32>,
    Json(req): Json<ProductStatusRequest>,
) -> Result<Json<ProductResponse>, ApiError> {
    let repo = ctx.product_repo();
    let uc = SetProductStatus {
        repo: repo.as_ref(),
    };
    let updated_by = req.updated_by.unwrap_or(ctx.cfg.bootstrap_admin_id);
    let product = uc.execute(id, req.is_active, updated_by).await?;
    Ok(Json(product.into()))
}

#[utoipa::path(delete, path = "/api/products/{id}", tag = "Products", params(
    ("id" = i32, Path, description = "Product id")
), responses(
    (status = 200, body = MessageResponse),
    (status = 404, body = ErrorResponse)
))]
pub async fn delete_product(
    State(ctx): State<AppContext>,
    Path(id): Path<i32>,
) -> Result<Json<MessageResponse>, ApiError> {
    let repo = ctx.product_repo();
    let uc = DeleteProduct {
        repo: repo.as_ref(),
    };
    uc.execute(id).await?;
    Ok(Json(MessageResponse {
        message: "product deleted successfully".to_string(),
    }))
}
