use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use axum::extract::MatchedPath;
use dotenvy::dotenv;
use http::HeaderValue;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use storefront_api::bootstrap::app_context::{AppContext, AppServices};
use storefront_api::bootstrap::config::Config;

#[derive(OpenApi)]
#[openapi(
    paths(
        storefront_api::presentation::http::users::register,
        storefront_api::presentation::http::users::login,
        storefront_api::presentation::http::users::list_users,
        storefront_api::presentation::http::users::update_user,
        storefront_api::presentation::http::users::set_user_status,
        storefront_api::presentation::http::users::delete_user,
        storefront_api::presentation::http::products::list_products,
        storefront_api::presentation::http::products::create_product,
        storefront_api::presentation::http::products::update_product,
        storefront_api::presentation::http::products::set_product_status,
        storefront_api::presentation::http::products::delete_product,
        storefront_api::presentation::http::categories::list_categories,
        storefront_api::presentation::http::health::health,
    ),
    components(schemas(
        storefront_api::presentation::http::users::RegisterRequest,
        storefront_api::presentation::http::users::RegisterResponse,
        storefront_api::presentation::http::users::LoginRequest,
        storefront_api::presentation::http::users::LoginUser,
        storefront_api::presentation::http::users::LoginResponse,
        storefront_api::presentation::http::users::UserResponse,
        storefront_api::presentation::http::users::UpdateUserRequest,
        storefront_api::presentation::http::users::UserStatusRequest,
        storefront_api::presentation::http::products::CreateProductRequest,
        storefront_api::presentation::http::products::CreateProductResponse,
        storefront_api::presentation::http::products::UpdateProductRequest,
        storefront_api::presentation::http::products::ProductStatusRequest,
        storefront_api::presentation::http::products::ProductResponse,
        storefront_api::presentation::http::products::ProductListItem,
        storefront_api::presentation::http::categories::CategoryResponse,
        storefront_api::presentation::http::health::HealthResponse,
        storefront_api::presentation::http::error::ErrorResponse,
        storefront_api::presentation::http::MessageResponse,
    )),
    tags(
        (name = "Users", description = "Account registration, login and administration"),
        (name = "Products", description = "Product catalogue management"),
        (name = "Categories", description = "Read-only category listing"),
        (name = "Health", description = "System health checks")
    )
)]
struct ApiDoc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            std::env::var("RUST_LOG")
                .unwrap_or_else(|_| "storefront_api=debug,axum=info,tower_http=info".into()),
        )
        .init();

    let cfg = Config::from_env()?;
    info!(?cfg, "Starting storefront backend");

    // Database
    let pool = storefront_api::infrastructure::db::connect_pool(&cfg.database_url).await?;
    storefront_api::infrastructure::db::migrate(&pool).await?;

    let user_repo = Arc::new(
        storefront_api::infrastructure::db::repositories::user_repository_sqlx::SqlxUserRepository::new(
            pool.clone(),
        ),
    );
    let product_repo = Arc::new(
        storefront_api::infrastructure::db::repositories::product_repository_sqlx::SqlxProductRepository::new(
            pool.clone(),
        ),
    );
    let category_repo = Arc::new(
        storefront_api::infrastructure::db::repositories::category_repository_sqlx::SqlxCategoryRepository::new(
            pool.clone(),
        ),
    );

    let services = AppServices::new(user_repo, product_repo, category_repo);
    let ctx = AppContext::new(cfg.clone(), services);

    // Build CORS
    let cors = if let Some(origin) = cfg.frontend_url.clone() {
        match HeaderValue::from_str(&origin) {
            Ok(v) => CorsLayer::new()
                .allow_origin(v)
                .allow_methods([
                    http::Method::GET,
                    http::Method::POST,
                    http::Method::PUT,
                    http::Method::DELETE,
                    http::Method::PATCH,
                    http::Method::OPTIONS,
                ])
                .allow_headers([http::header::CONTENT_TYPE])
                .allow_credentials(true),
            Err(_) => CorsLayer::new()
                .allow_origin(AllowOrigin::mirror_request())
                .allow_methods([
                    http::Method::GET,
                    http::Method::POST,
                    http::Method::PUT,
                    http::Method::DELETE,
                    http::Method::PATCH,
                    http::Method::OPTIONS,
                ])
                .allow_headers([http::header::CONTENT_TYPE])
                .allow_credentials(true),
        }
    } else if cfg.is_production {
        // In production, FRONTEND_URL is mandatory (enforced earlier), but fall back to deny all
        CorsLayer::new()
            .allow_origin(AllowOrigin::exact(HeaderValue::from_static("http://invalid")))
            .allow_methods([
                http::Method::GET,
                http::Method::POST,
                http::Method::PUT,
                http::Method::DELETE,
                http::Method::PATCH,
                http::Method::OPTIONS,
            ])
            .allow_headers([http::header::CONTENT_TYPE])
    } else {
        // Development convenience
        CorsLayer::new()
            .allow_origin(AllowOrigin::mirror_request())
            .allow_methods([
                http::Method::GET,
                http::Method::POST,
                http::Method::PUT,
                http::Method::DELETE,
                http::Method::PATCH,
                http::Method::OPTIONS,
            ])
            .allow_headers([http::header::CONTENT_TYPE])
            .allow_credentials(true)
    };

    // Build API router
    let app = Router::new()
        .nest(
            "/api",
            storefront_api::presentation::http::health::routes(pool.clone()),
        )
        .nest(
            "/api",
            storefront_api::presentation::http::users::routes(ctx.clone()),
        )
        .nest(
            "/api",
            storefront_api::presentation::http::products::routes(ctx.clone()),
        )
        .nest(
            "/api",
            storefront_api::presentation::http::categories::routes(ctx.clone()),
        )
        .merge(SwaggerUi::new("/api/docs").url("/api/openapi.json", ApiDoc::openapi()))
        .layer(cors)
        .layer(
            TraceLayer::new_for_http().make_span_with(|req: &http::Request<_>| {
                let method = req.method().clone();
                let uri = req.uri().clone();
                let matched = req
                    .extensions()
                    .get::<MatchedPath>()
                    .map(|p| p.as_str().to_string())
                    .unwrap_or_default();
                tracing::info_span!("http", %method, %uri, matched_path = %matched)
            }),
        );

    let api_addr = SocketAddr::from(([0, 0, 0, 0], cfg.api_port));
    info!(%api_addr, "HTTP API listening");
    let listener = tokio::net::TcpListener::bind(api_addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
