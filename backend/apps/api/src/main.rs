//! API Server Entry Point
//!
//! Application entry point and server initialization.
//! Uses `anyhow` for startup errors, but application-level
//! errors should use `kernel::error::AppError`.

mod pages;

use std::env;
use std::net::SocketAddr;
use std::sync::Arc;

use auth::application::token::TokenService;
use auth::domain::repository::RevokedTokenRepository;
use auth::middleware::{AuthMiddlewareState, require_auth};
use auth::{AuthConfig, PgAuthRepository, auth_router, user_router};
use axum::{
    Json, Router, http,
    http::{Method, header},
    middleware::from_fn,
    routing::get,
};
use calc::{calc_router, store::CalcStore};
use serde_json::json;
use sqlx::postgres::PgPoolOptions;
use tokio::net::TcpListener;
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

// Re-export unified error types for use in handlers
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "api=info,auth=info,calc=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Database connection
    let database_url = env::var("DATABASE_URL").expect("DATABASE_URL must be set in environment");

    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&database_url)
        .await?;

    tracing::info!("Connected to database");

    // Run migrations
    sqlx::migrate!("../../../database/migrations")
        .run(&pool)
        .await?;

    tracing::info!("Migrations completed");

    // Startup cleanup: drop revocation rows for tokens that already expired
    // Errors here should not prevent server startup
    let auth_store_for_cleanup = PgAuthRepository::new(pool.clone());
    match auth_store_for_cleanup.cleanup_expired().await {
        Ok(revocations) => {
            tracing::info!(
                revocations_deleted = revocations,
                "Revoked token cleanup completed"
            );
        }
        Err(e) => {
            tracing::warn!(
                error = %e,
                "Revoked token cleanup failed, continuing anyway"
            );
        }
    }

    // Auth configuration
    let auth_config = if cfg!(debug_assertions) {
        AuthConfig::development()
    } else {
        // In production, load the signing secret from environment
        let secret = env::var("JWT_SECRET").expect("JWT_SECRET must be set in production");
        let mut config = AuthConfig::with_secret(secret.into_bytes());
        if let Ok(pepper) = env::var("PASSWORD_PEPPER") {
            config.password_pepper = Some(pepper.into_bytes());
        }
        config
    };

    let auth_config = Arc::new(auth_config);
    let tokens = Arc::new(TokenService::new(&auth_config));

    let auth_store = PgAuthRepository::new(pool.clone());
    let calc_store = CalcStore::new(pool.clone());

    // CORS configuration
    let frontend_origins = env::var("FRONTEND_ORIGINS")
        .unwrap_or_else(|_| "http://localhost:8000,http://127.0.0.1:8000".to_string());

    let allowed_origins: Vec<http::HeaderValue> = frontend_origins
        .split(',')
        .filter_map(|origin| origin.trim().parse().ok())
        .collect();

    let cors = CorsLayer::new()
        .allow_origin(allowed_origins)
        .allow_methods(AllowMethods::list([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ]))
        .allow_headers(AllowHeaders::list([
            header::CONTENT_TYPE,
            header::AUTHORIZATION,
            header::ACCEPT,
        ]))
        .allow_credentials(true);

    // Calculations sit behind the auth middleware
    let mw_state = AuthMiddlewareState {
        repo: Arc::new(auth_store.clone()),
        tokens: tokens.clone(),
    };
    let calc_routes = calc_router(calc_store).layer(from_fn(move |req, next| {
        require_auth(mw_state.clone(), req, next)
    }));

    // Build router
    let app = Router::new()
        .nest(
            "/auth",
            auth_router(auth_store.clone(), auth_config.clone(), tokens.clone()),
        )
        .nest(
            "/users",
            user_router(auth_store, auth_config.clone(), tokens),
        )
        .nest("/calculations", calc_routes)
        .route("/health", get(health))
        .merge(pages::pages_router())
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    // Start server
    let port: u16 = env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(8000);
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}

/// GET /health
async fn health() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}
