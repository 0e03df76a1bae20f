use serde::{Deserialize, Serialize};

use super::domain::{Question, Sentiment};

/// Outcome of scoring a single question/response pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Evaluation {
    /// Normalized score in `[0, 1]`.
    pub score: f64,
    pub feedback: String,
    /// Only expected for behavioral questions; ignored for technical ones.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sentiment: Option<Sentiment>,
}

/// Failures surfaced by the scoring capability. These are recoverable: the
/// session leaves the unanswered question pending so the caller may retry.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EvaluatorError {
    #[error("evaluator unavailable: {0}")]
    Unavailable(String),
    #[error("evaluator returned a score outside [0, 1]: {0}")]
    ScoreOutOfRange(f64),
}

/// External capability that scores one response at a time.
///
/// Implementations wrap the concrete scoring models; the interview core
/// relies on nothing beyond this contract. Calls are synchronous and the
/// core imposes no timeout or retry policy of its own.
pub trait ResponseEvaluator: Send + Sync {
    fn evaluate(
        &self,
        question: &Question,
        response_text: &str,
    ) -> Result<Evaluation, EvaluatorError>;
}
