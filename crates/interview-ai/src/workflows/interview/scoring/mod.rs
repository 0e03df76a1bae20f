mod config;
mod policy;
mod rules;

pub use config::ScoringConfig;
pub use policy::Recommendation;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::domain::{Question, Response};

/// Aggregated result of a completed session, attached to the owning
/// candidate record. Derived once at completion and immutable afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assessment {
    pub overall_technical_score: f64,
    pub overall_behavioral_score: f64,
    pub overall_score: f64,
    pub category_scores: BTreeMap<String, f64>,
    pub recommendation: Recommendation,
    pub technical_responses: Vec<Response>,
    pub behavioral_responses: Vec<Response>,
}

/// Reduce a session's scored responses into an assessment.
///
/// Pure and idempotent: means and the weighted overall are computed in the
/// recorded response order, so the same response set always produces an
/// identical `Assessment`. A kind with no responses reports `0.0` and
/// carries no weight in the overall.
pub fn assess(
    selection: &[Question],
    technical: &[Response],
    behavioral: &[Response],
    config: &ScoringConfig,
) -> Assessment {
    let technical_mean = rules::mean_score(technical);
    let behavioral_mean = rules::mean_score(behavioral);
    let overall_score = rules::weighted_overall(technical_mean, behavioral_mean, config);

    Assessment {
        overall_technical_score: technical_mean.unwrap_or(0.0),
        overall_behavioral_score: behavioral_mean.unwrap_or(0.0),
        overall_score,
        category_scores: rules::category_scores(selection, technical, behavioral),
        recommendation: policy::recommend(overall_score),
        technical_responses: technical.to_vec(),
        behavioral_responses: behavioral.to_vec(),
    }
}
