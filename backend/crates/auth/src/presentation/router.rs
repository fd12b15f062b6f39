//! Auth Routers

use axum::{
    Router,
    middleware::from_fn,
    routing::{get, post},
};
use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::token::TokenService;
use crate::infra::postgres::PgAuthRepository;
use crate::presentation::handlers::{self, AuthAppState};
use crate::presentation::middleware::{AuthMiddlewareState, require_auth};

/// Create the public auth router (register, login, token lifecycle)
pub fn auth_router(
    repo: PgAuthRepository,
    config: Arc<AuthConfig>,
    tokens: Arc<TokenService>,
) -> Router {
    let state = AuthAppState {
        repo: Arc::new(repo),
        config,
        tokens,
    };

    Router::new()
        .route("/register", post(handlers::register::<PgAuthRepository>))
        .route("/login", post(handlers::login::<PgAuthRepository>))
        .route("/refresh", post(handlers::refresh::<PgAuthRepository>))
        .route("/logout", post(handlers::logout::<PgAuthRepository>))
        .with_state(state)
}

/// Create the protected user-profile router; every route requires a
/// valid access token
pub fn user_router(
    repo: PgAuthRepository,
    config: Arc<AuthConfig>,
    tokens: Arc<TokenService>,
) -> Router {
    let repo = Arc::new(repo);

    let mw_state = AuthMiddlewareState {
        repo: repo.clone(),
        tokens: tokens.clone(),
    };

    let state = AuthAppState {
        repo,
        config,
        tokens,
    };

    Router::new()
        .route(
            "/me",
            get(handlers::me::<PgAuthRepository>).put(handlers::update_me::<PgAuthRepository>),
        )
        .route(
            "/me/change-password",
            post(handlers::change_password::<PgAuthRepository>),
        )
        .layer(from_fn(move |req, next| {
            require_auth(mw_state.clone(), req, next)
        }))
        .with_state(state)
}
