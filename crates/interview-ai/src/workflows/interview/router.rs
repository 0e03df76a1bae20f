use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use chrono::{Local, NaiveDate};
use serde::Deserialize;
use serde_json::json;

use super::bank::FocusAreas;
use super::domain::{CandidateId, CandidateStatus};
use super::evaluator::ResponseEvaluator;
use super::repository::{CandidateRepository, NewCandidate, RepositoryError};
use super::service::{InterviewService, InterviewServiceError};
use super::session::SessionError;

/// Router builder exposing HTTP endpoints for the interview workflow.
pub fn interview_router<R, E>(service: Arc<InterviewService<R, E>>) -> Router
where
    R: CandidateRepository + 'static,
    E: ResponseEvaluator + 'static,
{
    Router::new()
        .route(
            "/api/v1/interview/candidates",
            post(register_handler::<R, E>),
        )
        .route(
            "/api/v1/interview/candidates/:candidate_id/assessment",
            get(assessment_handler::<R, E>),
        )
        .route("/api/v1/interview/sessions", post(start_handler::<R, E>))
        .route(
            "/api/v1/interview/sessions/:candidate_id/responses",
            post(submit_handler::<R, E>),
        )
        .route("/api/v1/interview/rankings", get(rankings_handler::<R, E>))
        .with_state(service)
}

#[derive(Debug, Deserialize)]
pub(crate) struct RegisterCandidateRequest {
    pub(crate) name: String,
    pub(crate) email: String,
    pub(crate) position: String,
    pub(crate) experience_years: u8,
    #[serde(default)]
    pub(crate) registered_on: Option<NaiveDate>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct StartInterviewRequest {
    pub(crate) candidate_id: String,
    #[serde(default)]
    pub(crate) technical_focus: Option<bool>,
    #[serde(default)]
    pub(crate) behavioral_focus: Option<bool>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct SubmitResponseRequest {
    pub(crate) response_text: String,
}

pub(crate) async fn register_handler<R, E>(
    State(service): State<Arc<InterviewService<R, E>>>,
    axum::Json(request): axum::Json<RegisterCandidateRequest>,
) -> Response
where
    R: CandidateRepository + 'static,
    E: ResponseEvaluator + 'static,
{
    let registered_on = request
        .registered_on
        .unwrap_or_else(|| Local::now().date_naive());
    let candidate = NewCandidate {
        name: request.name,
        email: request.email,
        position: request.position,
        experience_years: request.experience_years,
    };

    match service.register(candidate, registered_on) {
        Ok(record) => (StatusCode::CREATED, axum::Json(record)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn start_handler<R, E>(
    State(service): State<Arc<InterviewService<R, E>>>,
    axum::Json(request): axum::Json<StartInterviewRequest>,
) -> Response
where
    R: CandidateRepository + 'static,
    E: ResponseEvaluator + 'static,
{
    // With neither flag supplied the focus is derived from the candidate's
    // position; an explicit flag overrides, missing ones default to off.
    let focus = match (request.technical_focus, request.behavioral_focus) {
        (None, None) => None,
        (technical, behavioral) => Some(FocusAreas {
            technical: technical.unwrap_or(false),
            behavioral: behavioral.unwrap_or(false),
        }),
    };

    match service.start(&CandidateId(request.candidate_id), focus) {
        Ok(started) => (StatusCode::OK, axum::Json(started)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn submit_handler<R, E>(
    State(service): State<Arc<InterviewService<R, E>>>,
    Path(candidate_id): Path<String>,
    axum::Json(request): axum::Json<SubmitResponseRequest>,
) -> Response
where
    R: CandidateRepository + 'static,
    E: ResponseEvaluator + 'static,
{
    let id = CandidateId(candidate_id);
    match service.submit(&id, &request.response_text) {
        Ok(outcome) => (StatusCode::OK, axum::Json(outcome)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn assessment_handler<R, E>(
    State(service): State<Arc<InterviewService<R, E>>>,
    Path(candidate_id): Path<String>,
) -> Response
where
    R: CandidateRepository + 'static,
    E: ResponseEvaluator + 'static,
{
    let id = CandidateId(candidate_id);
    match service.assessment(&id) {
        Ok(assessment) => (StatusCode::OK, axum::Json(assessment)).into_response(),
        Err(InterviewServiceError::AssessmentPending(id)) => {
            let payload = json!({
                "candidate_id": id.0,
                "status": CandidateStatus::Pending.label(),
                "assessment": serde_json::Value::Null,
            });
            (StatusCode::OK, axum::Json(payload)).into_response()
        }
        Err(error) => error_response(error),
    }
}

pub(crate) async fn rankings_handler<R, E>(
    State(service): State<Arc<InterviewService<R, E>>>,
) -> Response
where
    R: CandidateRepository + 'static,
    E: ResponseEvaluator + 'static,
{
    match service.rankings() {
        Ok(entries) => (StatusCode::OK, axum::Json(entries)).into_response(),
        Err(error) => error_response(error),
    }
}

fn error_response(error: InterviewServiceError) -> Response {
    let status = match &error {
        InterviewServiceError::Selection(_) => StatusCode::UNPROCESSABLE_ENTITY,
        InterviewServiceError::Session(SessionError::EmptyResponse) => {
            StatusCode::UNPROCESSABLE_ENTITY
        }
        InterviewServiceError::Session(SessionError::Selection(_)) => {
            StatusCode::UNPROCESSABLE_ENTITY
        }
        InterviewServiceError::Session(SessionError::Evaluator(_)) => StatusCode::BAD_GATEWAY,
        InterviewServiceError::Session(_)
        | InterviewServiceError::InterviewInProgress(_)
        | InterviewServiceError::NoSessionInProgress(_)
        | InterviewServiceError::AssessmentPending(_) => StatusCode::CONFLICT,
        InterviewServiceError::Repository(RepositoryError::NotFound) => StatusCode::NOT_FOUND,
        InterviewServiceError::Repository(RepositoryError::Conflict) => StatusCode::CONFLICT,
        InterviewServiceError::Repository(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };

    (status, axum::Json(json!({ "error": error.to_string() }))).into_response()
}
