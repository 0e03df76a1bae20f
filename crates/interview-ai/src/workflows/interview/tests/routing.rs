use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::util::ServiceExt;

use super::common::*;
use crate::workflows::interview::router::interview_router;
use crate::workflows::interview::service::InterviewService;

fn router(scores: &[f64]) -> Router {
    let (service, _) = build_service(scores);
    interview_router(Arc::new(service))
}

fn post_json(uri: &str, payload: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(payload.to_string()))
        .expect("request builds")
}

fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .body(Body::empty())
        .expect("request builds")
}

async fn register(router: &Router, name: &str, position: &str) -> String {
    let response = router
        .clone()
        .oneshot(post_json(
            "/api/v1/interview/candidates",
            json!({
                "name": name,
                "email": format!("{name}@example.com"),
                "position": position,
                "experience_years": 4,
                "registered_on": "2026-03-02",
            }),
        ))
        .await
        .expect("register request");
    assert_eq!(response.status(), StatusCode::CREATED);
    let body = read_json_body(response).await;
    body["id"].as_str().expect("candidate id").to_string()
}

#[tokio::test]
async fn full_interview_flow_over_http() {
    let router = router(&[0.9, 0.9, 0.9, 0.9, 0.9]);
    let candidate_id = register(&router, "Grace", "Software Engineer").await;

    let response = router
        .clone()
        .oneshot(post_json(
            "/api/v1/interview/sessions",
            json!({ "candidate_id": candidate_id }),
        ))
        .await
        .expect("start request");
    assert_eq!(response.status(), StatusCode::OK);
    let started = read_json_body(response).await;
    let mut remaining = started["question_count"].as_u64().expect("question count");

    while remaining > 0 {
        let response = router
            .clone()
            .oneshot(post_json(
                &format!("/api/v1/interview/sessions/{candidate_id}/responses"),
                json!({ "response_text": "a considered answer" }),
            ))
            .await
            .expect("submit request");
        assert_eq!(response.status(), StatusCode::OK);
        let outcome = read_json_body(response).await;
        remaining = outcome["remaining_questions"].as_u64().expect("remaining");
    }

    let response = router
        .clone()
        .oneshot(get(&format!(
            "/api/v1/interview/candidates/{candidate_id}/assessment"
        )))
        .await
        .expect("assessment request");
    assert_eq!(response.status(), StatusCode::OK);
    let assessment = read_json_body(response).await;
    assert_eq!(assessment["recommendation"], "strongly_recommended");

    let response = router
        .clone()
        .oneshot(get("/api/v1/interview/rankings"))
        .await
        .expect("rankings request");
    assert_eq!(response.status(), StatusCode::OK);
    let rankings = read_json_body(response).await;
    let entries = rankings.as_array().expect("ranking rows");
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0]["overall_score_pct"], 90);
}

#[tokio::test]
async fn blank_response_is_unprocessable() {
    let router = router(&[]);
    let candidate_id = register(&router, "Grace", "Software Engineer").await;
    router
        .clone()
        .oneshot(post_json(
            "/api/v1/interview/sessions",
            json!({ "candidate_id": candidate_id }),
        ))
        .await
        .expect("start request");

    let response = router
        .clone()
        .oneshot(post_json(
            &format!("/api/v1/interview/sessions/{candidate_id}/responses"),
            json!({ "response_text": "   " }),
        ))
        .await
        .expect("submit request");
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn submit_without_session_conflicts() {
    let router = router(&[]);
    let candidate_id = register(&router, "Grace", "Software Engineer").await;

    let response = router
        .clone()
        .oneshot(post_json(
            &format!("/api/v1/interview/sessions/{candidate_id}/responses"),
            json!({ "response_text": "an answer" }),
        ))
        .await
        .expect("submit request");
    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn second_start_conflicts_while_in_progress() {
    let router = router(&[]);
    let candidate_id = register(&router, "Grace", "Software Engineer").await;
    let start = json!({ "candidate_id": candidate_id });

    let response = router
        .clone()
        .oneshot(post_json("/api/v1/interview/sessions", start.clone()))
        .await
        .expect("start request");
    assert_eq!(response.status(), StatusCode::OK);

    let response = router
        .clone()
        .oneshot(post_json("/api/v1/interview/sessions", start))
        .await
        .expect("second start request");
    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn start_with_both_flags_off_is_unprocessable() {
    let router = router(&[]);
    let candidate_id = register(&router, "Grace", "Software Engineer").await;

    let response = router
        .clone()
        .oneshot(post_json(
            "/api/v1/interview/sessions",
            json!({
                "candidate_id": candidate_id,
                "technical_focus": false,
                "behavioral_focus": false,
            }),
        ))
        .await
        .expect("start request");
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn start_for_unknown_candidate_is_not_found() {
    let router = router(&[]);
    let response = router
        .clone()
        .oneshot(post_json(
            "/api/v1/interview/sessions",
            json!({ "candidate_id": "cand-unknown" }),
        ))
        .await
        .expect("start request");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn assessment_reports_pending_before_completion() {
    let router = router(&[]);
    let candidate_id = register(&router, "Grace", "Software Engineer").await;

    let response = router
        .clone()
        .oneshot(get(&format!(
            "/api/v1/interview/candidates/{candidate_id}/assessment"
        )))
        .await
        .expect("assessment request");
    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json_body(response).await;
    assert_eq!(body["status"], "pending");
    assert!(body["assessment"].is_null());
}

#[tokio::test]
async fn evaluator_failure_maps_to_bad_gateway() {
    let repository = Arc::new(MemoryRepository::default());
    let service = InterviewService::new(
        repository,
        Arc::new(FailingEvaluator),
        bank(),
        scoring_config(),
    );
    let router = interview_router(Arc::new(service));

    let candidate_id = register(&router, "Grace", "Software Engineer").await;
    router
        .clone()
        .oneshot(post_json(
            "/api/v1/interview/sessions",
            json!({ "candidate_id": candidate_id }),
        ))
        .await
        .expect("start request");

    let response = router
        .clone()
        .oneshot(post_json(
            &format!("/api/v1/interview/sessions/{candidate_id}/responses"),
            json!({ "response_text": "an answer" }),
        ))
        .await
        .expect("submit request");
    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
}
