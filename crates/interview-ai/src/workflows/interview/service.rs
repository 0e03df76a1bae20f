use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use chrono::NaiveDate;
use serde::Serialize;
use tracing::info;

use super::bank::{EmptySelectionError, FocusAreas, QuestionBank};
use super::domain::{CandidateId, CandidateStatus, Question};
use super::evaluator::ResponseEvaluator;
use super::ranking::{self, RankingEntry};
use super::repository::{CandidateRecord, CandidateRepository, NewCandidate, RepositoryError};
use super::scoring::{Assessment, ScoringConfig};
use super::session::{InterviewSession, InterviewStatus, SessionError, SubmitOutcome};

static CANDIDATE_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_candidate_id() -> CandidateId {
    let id = CANDIDATE_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    CandidateId(format!("cand-{id:04}"))
}

/// First-question payload returned by `start`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InterviewStarted {
    pub candidate_id: CandidateId,
    pub first_question: Question,
    pub question_count: usize,
}

/// Facade composing the question bank, the session registry, the scoring
/// capability, and the candidate repository.
///
/// Sessions are keyed by candidate id, each behind its own lock, so at
/// most one `submit` runs against a given session while interviews for
/// different candidates proceed in parallel.
pub struct InterviewService<R, E> {
    repository: Arc<R>,
    evaluator: Arc<E>,
    bank: Arc<QuestionBank>,
    scoring: ScoringConfig,
    sessions: Mutex<HashMap<CandidateId, Arc<Mutex<InterviewSession>>>>,
}

impl<R, E> InterviewService<R, E>
where
    R: CandidateRepository + 'static,
    E: ResponseEvaluator + 'static,
{
    pub fn new(
        repository: Arc<R>,
        evaluator: Arc<E>,
        bank: QuestionBank,
        scoring: ScoringConfig,
    ) -> Self {
        Self {
            repository,
            evaluator,
            bank: Arc::new(bank),
            scoring,
            sessions: Mutex::new(HashMap::new()),
        }
    }

    /// Register a candidate with a monotonically assigned id.
    pub fn register(
        &self,
        candidate: NewCandidate,
        registered_on: NaiveDate,
    ) -> Result<CandidateRecord, InterviewServiceError> {
        let record = CandidateRecord {
            id: next_candidate_id(),
            name: candidate.name,
            email: candidate.email,
            position: candidate.position,
            experience_years: candidate.experience_years,
            registered_on,
            status: CandidateStatus::Pending,
            assessment: None,
        };

        let stored = self.repository.insert(record)?;
        info!(candidate_id = %stored.id, position = %stored.position, "candidate registered");
        Ok(stored)
    }

    /// Start an interview for a registered candidate, building the
    /// question selection from the bank. When `focus` is not supplied it
    /// is derived from the candidate's position. A candidate with a
    /// session still `InProgress` cannot start another; a completed
    /// session is replaced.
    pub fn start(
        &self,
        candidate_id: &CandidateId,
        focus: Option<FocusAreas>,
    ) -> Result<InterviewStarted, InterviewServiceError> {
        let record = self.fetch_record(candidate_id)?;
        let focus = focus.unwrap_or_else(|| FocusAreas::for_position(&record.position));
        let selection = self.bank.select(focus)?;

        let mut sessions = self.sessions.lock().expect("session registry poisoned");
        if let Some(existing) = sessions.get(candidate_id) {
            let existing = existing.lock().expect("session lock poisoned");
            if existing.status() == InterviewStatus::InProgress {
                return Err(InterviewServiceError::InterviewInProgress(
                    candidate_id.clone(),
                ));
            }
        }

        let mut session = InterviewSession::new(candidate_id.clone(), selection);
        let first_question = session.begin()?;
        let question_count = session.question_count();
        sessions.insert(candidate_id.clone(), Arc::new(Mutex::new(session)));

        info!(candidate_id = %candidate_id, question_count, "interview started");
        Ok(InterviewStarted {
            candidate_id: candidate_id.clone(),
            first_question,
            question_count,
        })
    }

    /// Record one response under the session's lock. When the last
    /// question is answered the assessment is computed and written back to
    /// the candidate record together with the `Pending -> Interviewed`
    /// transition.
    pub fn submit(
        &self,
        candidate_id: &CandidateId,
        response_text: &str,
    ) -> Result<SubmitOutcome, InterviewServiceError> {
        let session = {
            let sessions = self.sessions.lock().expect("session registry poisoned");
            sessions.get(candidate_id).cloned().ok_or_else(|| {
                InterviewServiceError::NoSessionInProgress(candidate_id.clone())
            })?
        };

        let mut session = session.lock().expect("session lock poisoned");
        let outcome = session.submit(response_text, self.evaluator.as_ref())?;

        if outcome.next_question.is_none() {
            let assessment = session.assessment(&self.scoring);
            self.attach_assessment(candidate_id, assessment)?;
            info!(candidate_id = %candidate_id, "interview completed");
        }

        Ok(outcome)
    }

    pub fn get(&self, candidate_id: &CandidateId) -> Result<CandidateRecord, InterviewServiceError> {
        self.fetch_record(candidate_id)
    }

    /// Completed assessment for a candidate.
    pub fn assessment(
        &self,
        candidate_id: &CandidateId,
    ) -> Result<Assessment, InterviewServiceError> {
        let record = self.fetch_record(candidate_id)?;
        record
            .assessment
            .ok_or_else(|| InterviewServiceError::AssessmentPending(candidate_id.clone()))
    }

    /// Leaderboard over every assessed candidate, best overall score first.
    pub fn rankings(&self) -> Result<Vec<RankingEntry>, InterviewServiceError> {
        let candidates = self.repository.list()?;
        Ok(ranking::leaderboard(candidates))
    }

    fn attach_assessment(
        &self,
        candidate_id: &CandidateId,
        assessment: Assessment,
    ) -> Result<(), InterviewServiceError> {
        let mut record = self.fetch_record(candidate_id)?;
        record.status = CandidateStatus::Interviewed;
        record.assessment = Some(assessment);
        self.repository.update(record)?;
        Ok(())
    }

    fn fetch_record(
        &self,
        candidate_id: &CandidateId,
    ) -> Result<CandidateRecord, InterviewServiceError> {
        Ok(self
            .repository
            .fetch(candidate_id)?
            .ok_or(RepositoryError::NotFound)?)
    }
}

/// Error raised by the interview service facade.
#[derive(Debug, thiserror::Error)]
pub enum InterviewServiceError {
    #[error(transparent)]
    Selection(#[from] EmptySelectionError),
    #[error(transparent)]
    Session(#[from] SessionError),
    #[error("an interview is already in progress for candidate {0}")]
    InterviewInProgress(CandidateId),
    #[error("no interview session in progress for candidate {0}")]
    NoSessionInProgress(CandidateId),
    #[error("candidate {0} has not completed an interview yet")]
    AssessmentPending(CandidateId),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
