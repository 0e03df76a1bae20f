use serde::{Deserialize, Serialize};

use super::bank::EmptySelectionError;
use super::domain::{CandidateId, Question, QuestionKind, Response};
use super::evaluator::{EvaluatorError, ResponseEvaluator};
use super::scoring::{assess, Assessment, ScoringConfig};

/// Session lifecycle: `NotStarted -> InProgress -> Completed`. No
/// transition leaves `Completed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InterviewStatus {
    NotStarted,
    InProgress,
    Completed,
}

impl InterviewStatus {
    pub const fn label(self) -> &'static str {
        match self {
            Self::NotStarted => "Not Started",
            Self::InProgress => "In Progress",
            Self::Completed => "Completed",
        }
    }
}

/// Errors raised while driving a single session.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("the interview was already started")]
    AlreadyStarted,
    #[error("no interview is in progress for this session")]
    NotInProgress,
    #[error("response text must not be empty")]
    EmptyResponse,
    #[error(transparent)]
    Selection(#[from] EmptySelectionError),
    #[error(transparent)]
    Evaluator(#[from] EvaluatorError),
}

/// Payload returned for each processed response.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubmitOutcome {
    pub response: Response,
    pub next_question: Option<Question>,
    pub remaining_questions: usize,
}

/// Per-candidate state machine walking an ordered question selection.
///
/// The selection is fixed at construction; a cursor marks the next
/// unanswered question, so the number of recorded responses plus the
/// remaining queue length always equals the selection length.
#[derive(Debug)]
pub struct InterviewSession {
    candidate_id: CandidateId,
    selection: Vec<Question>,
    cursor: usize,
    technical_responses: Vec<Response>,
    behavioral_responses: Vec<Response>,
    status: InterviewStatus,
}

impl InterviewSession {
    pub fn new(candidate_id: CandidateId, selection: Vec<Question>) -> Self {
        Self {
            candidate_id,
            selection,
            cursor: 0,
            technical_responses: Vec::new(),
            behavioral_responses: Vec::new(),
            status: InterviewStatus::NotStarted,
        }
    }

    /// Transition to `InProgress` and issue the first question.
    pub fn begin(&mut self) -> Result<Question, SessionError> {
        if self.status != InterviewStatus::NotStarted {
            return Err(SessionError::AlreadyStarted);
        }
        let first = self
            .selection
            .first()
            .cloned()
            .ok_or(EmptySelectionError)?;
        self.status = InterviewStatus::InProgress;
        Ok(first)
    }

    /// Score the pending question against `response_text` and advance the
    /// queue. On any failure — blank text, evaluator error, malformed
    /// score — the session is left untouched and the same question stays
    /// pending, so the caller may retry the call safely.
    pub fn submit(
        &mut self,
        response_text: &str,
        evaluator: &dyn ResponseEvaluator,
    ) -> Result<SubmitOutcome, SessionError> {
        if self.status != InterviewStatus::InProgress {
            return Err(SessionError::NotInProgress);
        }
        if response_text.trim().is_empty() {
            return Err(SessionError::EmptyResponse);
        }

        let question = self.selection[self.cursor].clone();
        let evaluation = evaluator.evaluate(&question, response_text)?;
        if !evaluation.score.is_finite() || !(0.0..=1.0).contains(&evaluation.score) {
            return Err(SessionError::Evaluator(EvaluatorError::ScoreOutOfRange(
                evaluation.score,
            )));
        }

        // Sentiment is only meaningful for behavioral answers.
        let sentiment = match question.kind {
            QuestionKind::Behavioral => evaluation.sentiment,
            QuestionKind::Technical => None,
        };

        let response = Response {
            question_id: question.id.clone(),
            text: response_text.to_string(),
            score: evaluation.score,
            feedback: evaluation.feedback,
            sentiment,
        };
        match question.kind {
            QuestionKind::Technical => self.technical_responses.push(response.clone()),
            QuestionKind::Behavioral => self.behavioral_responses.push(response.clone()),
        }

        self.cursor += 1;
        let next_question = self.selection.get(self.cursor).cloned();
        if next_question.is_none() {
            self.status = InterviewStatus::Completed;
        }

        Ok(SubmitOutcome {
            response,
            next_question,
            remaining_questions: self.selection.len() - self.cursor,
        })
    }

    /// Aggregate the recorded responses. Pure; meaningful once the session
    /// is `Completed`, and identical for identical response sets.
    pub fn assessment(&self, config: &ScoringConfig) -> Assessment {
        assess(
            &self.selection,
            &self.technical_responses,
            &self.behavioral_responses,
            config,
        )
    }

    pub fn candidate_id(&self) -> &CandidateId {
        &self.candidate_id
    }

    pub fn status(&self) -> InterviewStatus {
        self.status
    }

    pub fn selection(&self) -> &[Question] {
        &self.selection
    }

    pub fn question_count(&self) -> usize {
        self.selection.len()
    }

    pub fn answered_count(&self) -> usize {
        self.cursor
    }

    pub fn remaining_questions(&self) -> usize {
        self.selection.len() - self.cursor
    }

    pub fn current_question(&self) -> Option<&Question> {
        match self.status {
            InterviewStatus::InProgress => self.selection.get(self.cursor),
            _ => None,
        }
    }

    pub fn technical_responses(&self) -> &[Response] {
        &self.technical_responses
    }

    pub fn behavioral_responses(&self) -> &[Response] {
        &self.behavioral_responses
    }
}
