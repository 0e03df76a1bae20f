use std::collections::{BTreeMap, VecDeque};
use std::sync::{Arc, Mutex};

use axum::response::Response as HttpResponse;
use chrono::NaiveDate;
use serde_json::Value;

use crate::workflows::interview::bank::QuestionBank;
use crate::workflows::interview::domain::{
    CandidateId, CandidateStatus, Question, QuestionId, QuestionKind, Response, Sentiment,
};
use crate::workflows::interview::evaluator::{Evaluation, EvaluatorError, ResponseEvaluator};
use crate::workflows::interview::repository::{
    CandidateRecord, CandidateRepository, NewCandidate, RepositoryError,
};
use crate::workflows::interview::scoring::{Assessment, Recommendation, ScoringConfig};
use crate::workflows::interview::service::InterviewService;
use crate::workflows::interview::session::InterviewSession;

pub(super) fn question(id: &str, category: &str, kind: QuestionKind) -> Question {
    Question {
        id: QuestionId(id.to_string()),
        text: format!("Prompt for {id}"),
        category: category.to_string(),
        kind,
    }
}

/// Three technical questions and two behavioral ones, in pool order.
pub(super) fn bank() -> QuestionBank {
    QuestionBank::new(vec![
        question("tech-a", "algorithms", QuestionKind::Technical),
        question("tech-b", "algorithms", QuestionKind::Technical),
        question("tech-c", "system_design", QuestionKind::Technical),
        question("behav-a", "teamwork", QuestionKind::Behavioral),
        question("behav-b", "leadership", QuestionKind::Behavioral),
    ])
}

pub(super) fn scoring_config() -> ScoringConfig {
    ScoringConfig::default()
}

pub(super) fn registered_on() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 3, 2).expect("valid date")
}

pub(super) fn new_candidate(name: &str, position: &str) -> NewCandidate {
    NewCandidate {
        name: name.to_string(),
        email: format!("{}@example.com", name.to_ascii_lowercase().replace(' ', ".")),
        position: position.to_string(),
        experience_years: 4,
    }
}

pub(super) fn session_for(candidate: &str, selection: Vec<Question>) -> InterviewSession {
    InterviewSession::new(CandidateId(candidate.to_string()), selection)
}

/// Candidate record with a prebuilt assessment holding the given overall
/// score, for exercising ranking in isolation.
pub(super) fn assessed_record(id: &str, name: &str, overall_score: f64) -> CandidateRecord {
    CandidateRecord {
        id: CandidateId(id.to_string()),
        name: name.to_string(),
        email: format!("{name}@example.com"),
        position: "Software Engineer".to_string(),
        experience_years: 5,
        registered_on: registered_on(),
        status: CandidateStatus::Interviewed,
        assessment: Some(Assessment {
            overall_technical_score: overall_score,
            overall_behavioral_score: 0.0,
            overall_score,
            category_scores: BTreeMap::new(),
            recommendation: Recommendation::Consider,
            technical_responses: vec![response("tech-a", overall_score)],
            behavioral_responses: Vec::new(),
        }),
    }
}

pub(super) fn pending_record(id: &str, name: &str) -> CandidateRecord {
    CandidateRecord {
        id: CandidateId(id.to_string()),
        name: name.to_string(),
        email: format!("{name}@example.com"),
        position: "Product Manager".to_string(),
        experience_years: 2,
        registered_on: registered_on(),
        status: CandidateStatus::Pending,
        assessment: None,
    }
}

pub(super) fn response(question_id: &str, score: f64) -> Response {
    Response {
        question_id: QuestionId(question_id.to_string()),
        text: "recorded answer".to_string(),
        score,
        feedback: "noted".to_string(),
        sentiment: None,
    }
}

/// Evaluator replaying a fixed score sequence; repeats 0.75 once the
/// script runs out. Always reports a sentiment so tests can observe the
/// session dropping it for technical questions.
pub(super) struct ScriptedEvaluator {
    scores: Mutex<VecDeque<f64>>,
}

impl ScriptedEvaluator {
    pub(super) fn new(scores: &[f64]) -> Self {
        Self {
            scores: Mutex::new(scores.iter().copied().collect()),
        }
    }
}

impl ResponseEvaluator for ScriptedEvaluator {
    fn evaluate(
        &self,
        _question: &Question,
        _response_text: &str,
    ) -> Result<Evaluation, EvaluatorError> {
        let score = self
            .scores
            .lock()
            .expect("score script poisoned")
            .pop_front()
            .unwrap_or(0.75);
        Ok(Evaluation {
            score,
            feedback: "noted".to_string(),
            sentiment: Some(Sentiment {
                label: "positive".to_string(),
                score: 0.9,
            }),
        })
    }
}

pub(super) struct FailingEvaluator;

impl ResponseEvaluator for FailingEvaluator {
    fn evaluate(
        &self,
        _question: &Question,
        _response_text: &str,
    ) -> Result<Evaluation, EvaluatorError> {
        Err(EvaluatorError::Unavailable("scoring model offline".to_string()))
    }
}

pub(super) struct OutOfRangeEvaluator;

impl ResponseEvaluator for OutOfRangeEvaluator {
    fn evaluate(
        &self,
        _question: &Question,
        _response_text: &str,
    ) -> Result<Evaluation, EvaluatorError> {
        Ok(Evaluation {
            score: 1.7,
            feedback: "overflowed".to_string(),
            sentiment: None,
        })
    }
}

/// Keyed by id, so `list` comes back in registration order.
#[derive(Default, Clone)]
pub(super) struct MemoryRepository {
    records: Arc<Mutex<BTreeMap<CandidateId, CandidateRecord>>>,
}

impl CandidateRepository for MemoryRepository {
    fn insert(&self, record: CandidateRecord) -> Result<CandidateRecord, RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        if guard.contains_key(&record.id) {
            return Err(RepositoryError::Conflict);
        }
        guard.insert(record.id.clone(), record.clone());
        Ok(record)
    }

    fn update(&self, record: CandidateRecord) -> Result<(), RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        if !guard.contains_key(&record.id) {
            return Err(RepositoryError::NotFound);
        }
        guard.insert(record.id.clone(), record);
        Ok(())
    }

    fn fetch(&self, id: &CandidateId) -> Result<Option<CandidateRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard.get(id).cloned())
    }

    fn list(&self) -> Result<Vec<CandidateRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard.values().cloned().collect())
    }
}

pub(super) fn build_service(
    scores: &[f64],
) -> (
    InterviewService<MemoryRepository, ScriptedEvaluator>,
    Arc<MemoryRepository>,
) {
    let repository = Arc::new(MemoryRepository::default());
    let evaluator = Arc::new(ScriptedEvaluator::new(scores));
    let service = InterviewService::new(
        repository.clone(),
        evaluator,
        bank(),
        scoring_config(),
    );
    (service, repository)
}

pub(super) async fn read_json_body(response: HttpResponse) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
