use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::domain::{CandidateId, CandidateStatus};
use super::scoring::Assessment;

/// Candidate fields collected at registration time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewCandidate {
    pub name: String,
    pub email: String,
    pub position: String,
    pub experience_years: u8,
}

/// Repository record owning the candidate identity and, once the
/// interview completes, the assessment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateRecord {
    pub id: CandidateId,
    pub name: String,
    pub email: String,
    pub position: String,
    pub experience_years: u8,
    pub registered_on: NaiveDate,
    pub status: CandidateStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assessment: Option<Assessment>,
}

impl CandidateRecord {
    pub fn status_view(&self) -> CandidateStatusView {
        CandidateStatusView {
            candidate_id: self.id.clone(),
            name: self.name.clone(),
            position: self.position.clone(),
            status: self.status.label(),
            overall_score: self
                .assessment
                .as_ref()
                .map(|assessment| assessment.overall_score),
            recommendation: self
                .assessment
                .as_ref()
                .map(|assessment| assessment.recommendation.label()),
        }
    }
}

/// Storage abstraction so the service can be exercised in isolation.
///
/// `list` returns records in registration order (ascending id); ranking
/// relies on that order for its tie-breaking guarantee.
pub trait CandidateRepository: Send + Sync {
    fn insert(&self, record: CandidateRecord) -> Result<CandidateRecord, RepositoryError>;
    fn update(&self, record: CandidateRecord) -> Result<(), RepositoryError>;
    fn fetch(&self, id: &CandidateId) -> Result<Option<CandidateRecord>, RepositoryError>;
    fn list(&self) -> Result<Vec<CandidateRecord>, RepositoryError>;
}

/// Error enumeration for repository failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("record already exists")]
    Conflict,
    #[error("record not found")]
    NotFound,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}

/// Sanitized representation of a candidate's exposed status.
#[derive(Debug, Clone, Serialize)]
pub struct CandidateStatusView {
    pub candidate_id: CandidateId,
    pub name: String,
    pub position: String,
    pub status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overall_score: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recommendation: Option<&'static str>,
}
