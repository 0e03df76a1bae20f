//! Interview orchestration: question selection, per-candidate session
//! state machines, response scoring aggregation, and candidate ranking.
//!
//! The scoring capability itself is an injected [`ResponseEvaluator`];
//! this module owns everything around it.

pub mod bank;
pub mod domain;
pub mod evaluator;
pub mod ranking;
pub mod repository;
pub mod router;
pub(crate) mod scoring;
pub mod service;
pub mod session;

#[cfg(test)]
mod tests;

pub use bank::{EmptySelectionError, FocusAreas, QuestionBank};
pub use domain::{
    CandidateId, CandidateStatus, Question, QuestionId, QuestionKind, Response, Sentiment,
};
pub use evaluator::{Evaluation, EvaluatorError, ResponseEvaluator};
pub use ranking::{leaderboard, rank, RankingEntry};
pub use repository::{
    CandidateRecord, CandidateRepository, CandidateStatusView, NewCandidate, RepositoryError,
};
pub use router::interview_router;
pub use scoring::{assess, Assessment, Recommendation, ScoringConfig};
pub use service::{InterviewService, InterviewServiceError, InterviewStarted};
pub use session::{InterviewSession, InterviewStatus, SessionError, SubmitOutcome};
