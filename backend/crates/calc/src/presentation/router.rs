//! Calc Router

use axum::{
    Router,
    routing::get,
};
use std::sync::Arc;

use crate::infra::postgres::PgCalcRepository;
use crate::presentation::handlers::{self, CalcAppState};

/// Create the calculations router.
///
/// Authentication is layered on by the application; every handler here
/// expects a resolved `Principal` in request extensions.
pub fn calc_router(repo: PgCalcRepository) -> Router {
    let state = CalcAppState {
        repo: Arc::new(repo),
    };

    Router::new()
        .route(
            "/",
            get(handlers::list_calculations::<PgCalcRepository>)
                .post(handlers::create_calculation::<PgCalcRepository>),
        )
        // registered before /{id} so "report" never parses as an id
        .route("/report", get(handlers::report::<PgCalcRepository>))
        .route(
            "/{id}",
            get(handlers::get_calculation::<PgCalcRepository>)
                .put(handlers::update_calculation::<PgCalcRepository>)
                .delete(handlers::delete_calculation::<PgCalcRepository>),
        )
        .with_state(state)
}
