//! HTTP Handlers
//!
//! The owner identity arrives as a [`Principal`] in request extensions,
//! inserted by the auth middleware upstream.

use axum::Extension;
use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use std::sync::Arc;
use uuid::Uuid;

use kernel::id::CalculationId;
use kernel::principal::Principal;

use crate::application::{
    CreateCalculationInput, CreateCalculationUseCase, DeleteCalculationUseCase,
    GetCalculationUseCase, ListCalculationsUseCase, ReportUseCase, UpdateCalculationInput,
    UpdateCalculationUseCase,
};
use crate::domain::repository::CalculationRepository;
use crate::error::CalcResult;
use crate::presentation::dto::{
    CalculationRequest, CalculationResponse, ReportResponse, UpdateCalculationRequest,
};

/// Shared state for calc handlers
#[derive(Clone)]
pub struct CalcAppState<R>
where
    R: CalculationRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
}

/// POST /calculations
pub async fn create_calculation<R>(
    State(state): State<CalcAppState<R>>,
    Extension(principal): Extension<Principal>,
    Json(req): Json<CalculationRequest>,
) -> CalcResult<impl IntoResponse>
where
    R: CalculationRepository + Clone + Send + Sync + 'static,
{
    let use_case = CreateCalculationUseCase::new(state.repo.clone());

    let input = CreateCalculationInput {
        operation: req.calculation_type,
        inputs: req.inputs,
    };

    let calculation = use_case.execute(&principal.user_id, input).await?;

    Ok((
        StatusCode::CREATED,
        Json(CalculationResponse::from(&calculation)),
    ))
}

/// GET /calculations
pub async fn list_calculations<R>(
    State(state): State<CalcAppState<R>>,
    Extension(principal): Extension<Principal>,
) -> CalcResult<Json<Vec<CalculationResponse>>>
where
    R: CalculationRepository + Clone + Send + Sync + 'static,
{
    let use_case = ListCalculationsUseCase::new(state.repo.clone());

    let calculations = use_case.execute(&principal.user_id).await?;

    Ok(Json(
        calculations.iter().map(CalculationResponse::from).collect(),
    ))
}

/// GET /calculations/{id}
pub async fn get_calculation<R>(
    State(state): State<CalcAppState<R>>,
    Extension(principal): Extension<Principal>,
    Path(id): Path<Uuid>,
) -> CalcResult<Json<CalculationResponse>>
where
    R: CalculationRepository + Clone + Send + Sync + 'static,
{
    let use_case = GetCalculationUseCase::new(state.repo.clone());

    let calculation = use_case
        .execute(&principal.user_id, &CalculationId::from_uuid(id))
        .await?;

    Ok(Json(CalculationResponse::from(&calculation)))
}

/// PUT /calculations/{id}
pub async fn update_calculation<R>(
    State(state): State<CalcAppState<R>>,
    Extension(principal): Extension<Principal>,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateCalculationRequest>,
) -> CalcResult<Json<CalculationResponse>>
where
    R: CalculationRepository + Clone + Send + Sync + 'static,
{
    let use_case = UpdateCalculationUseCase::new(state.repo.clone());

    let input = UpdateCalculationInput { inputs: req.inputs };

    let calculation = use_case
        .execute(&principal.user_id, &CalculationId::from_uuid(id), input)
        .await?;

    Ok(Json(CalculationResponse::from(&calculation)))
}

/// DELETE /calculations/{id}
pub async fn delete_calculation<R>(
    State(state): State<CalcAppState<R>>,
    Extension(principal): Extension<Principal>,
    Path(id): Path<Uuid>,
) -> CalcResult<StatusCode>
where
    R: CalculationRepository + Clone + Send + Sync + 'static,
{
    let use_case = DeleteCalculationUseCase::new(state.repo.clone());

    use_case
        .execute(&principal.user_id, &CalculationId::from_uuid(id))
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// GET /calculations/report
pub async fn report<R>(
    State(state): State<CalcAppState<R>>,
    Extension(principal): Extension<Principal>,
) -> CalcResult<Json<ReportResponse>>
where
    R: CalculationRepository + Clone + Send + Sync + 'static,
{
    let use_case = ReportUseCase::new(state.repo.clone());

    let report = use_case.execute(&principal.user_id).await?;

    Ok(Json(ReportResponse::from(report)))
}
