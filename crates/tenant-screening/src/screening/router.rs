use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post, put},
    Router,
};
use serde::Deserialize;
use serde_json::json;

use super::domain::{ApplicantId, ScreeningId, VerificationSnapshot};
use super::repository::{AlertPublisher, RepositoryError, ScreeningRepository};
use super::scoring::ScoringError;
use super::service::{ScreeningService, ScreeningServiceError};

const DEFAULT_PENDING_LIMIT: usize = 50;

#[derive(Debug, Deserialize)]
pub(crate) struct OpenScreeningRequest {
    pub(crate) applicant_id: String,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct AssessRequest {
    #[serde(default)]
    pub(crate) snapshot: Option<VerificationSnapshot>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct PendingQuery {
    #[serde(default)]
    pub(crate) limit: Option<usize>,
}

/// Router exposing the screening workflow over HTTP.
pub fn screening_router<R, A>(service: Arc<ScreeningService<R, A>>) -> Router
where
    R: ScreeningRepository + 'static,
    A: AlertPublisher + 'static,
{
    Router::new()
        .route("/api/v1/screenings", post(open_handler::<R, A>))
        .route("/api/v1/screenings/assess", post(assess_handler::<R, A>))
        .route("/api/v1/screenings/pending", get(pending_handler::<R, A>))
        .route(
            "/api/v1/screenings/:screening_id",
            get(status_handler::<R, A>),
        )
        .route(
            "/api/v1/screenings/:screening_id/snapshot",
            put(snapshot_handler::<R, A>),
        )
        .route(
            "/api/v1/screenings/:screening_id/evaluate",
            post(evaluate_handler::<R, A>),
        )
        .with_state(service)
}

pub(crate) async fn open_handler<R, A>(
    State(service): State<Arc<ScreeningService<R, A>>>,
    axum::Json(request): axum::Json<OpenScreeningRequest>,
) -> Response
where
    R: ScreeningRepository + 'static,
    A: AlertPublisher + 'static,
{
    match service.open(ApplicantId(request.applicant_id)) {
        Ok(record) => (StatusCode::CREATED, axum::Json(record.status_view())).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn status_handler<R, A>(
    State(service): State<Arc<ScreeningService<R, A>>>,
    Path(screening_id): Path<String>,
) -> Response
where
    R: ScreeningRepository + 'static,
    A: AlertPublisher + 'static,
{
    match service.get(&ScreeningId(screening_id)) {
        Ok(record) => (StatusCode::OK, axum::Json(record.status_view())).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn snapshot_handler<R, A>(
    State(service): State<Arc<ScreeningService<R, A>>>,
    Path(screening_id): Path<String>,
    axum::Json(snapshot): axum::Json<VerificationSnapshot>,
) -> Response
where
    R: ScreeningRepository + 'static,
    A: AlertPublisher + 'static,
{
    match service.record_verification(&ScreeningId(screening_id), snapshot) {
        Ok(record) => (StatusCode::OK, axum::Json(record.status_view())).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn evaluate_handler<R, A>(
    State(service): State<Arc<ScreeningService<R, A>>>,
    Path(screening_id): Path<String>,
) -> Response
where
    R: ScreeningRepository + 'static,
    A: AlertPublisher + 'static,
{
    match service.evaluate(&ScreeningId(screening_id)) {
        Ok(result) => (StatusCode::OK, axum::Json(result)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn assess_handler<R, A>(
    State(service): State<Arc<ScreeningService<R, A>>>,
    axum::Json(request): axum::Json<AssessRequest>,
) -> Response
where
    R: ScreeningRepository + 'static,
    A: AlertPublisher + 'static,
{
    match service.assess(request.snapshot) {
        Ok(result) => (StatusCode::OK, axum::Json(result)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn pending_handler<R, A>(
    State(service): State<Arc<ScreeningService<R, A>>>,
    Query(query): Query<PendingQuery>,
) -> Response
where
    R: ScreeningRepository + 'static,
    A: AlertPublisher + 'static,
{
    let limit = query.limit.unwrap_or(DEFAULT_PENDING_LIMIT);
    match service.pending(limit) {
        Ok(records) => {
            let views: Vec<_> = records.iter().map(|record| record.status_view()).collect();
            (StatusCode::OK, axum::Json(views)).into_response()
        }
        Err(error) => error_response(error),
    }
}

/// Single HTTP status mapping for service failures, shared with `AppError`.
pub(crate) fn status_for(error: &ScreeningServiceError) -> StatusCode {
    match error {
        ScreeningServiceError::Repository(
            RepositoryError::ScreeningNotFound | RepositoryError::ApplicantNotFound,
        ) => StatusCode::NOT_FOUND,
        ScreeningServiceError::Repository(RepositoryError::Conflict) => StatusCode::CONFLICT,
        ScreeningServiceError::Scoring(ScoringError::InvalidSnapshot) => {
            StatusCode::UNPROCESSABLE_ENTITY
        }
        ScreeningServiceError::Repository(RepositoryError::Storage(_))
        | ScreeningServiceError::Alert(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn error_response(error: ScreeningServiceError) -> Response {
    let payload = json!({ "error": error.to_string() });
    (status_for(&error), axum::Json(payload)).into_response()
}
