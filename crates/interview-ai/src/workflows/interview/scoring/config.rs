use serde::{Deserialize, Serialize};

/// Relative weight of each question kind in the overall score.
///
/// Weights are normalized over the kinds that were actually asked, so a
/// session covering a single kind reports that kind's score unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoringConfig {
    pub technical_weight: f64,
    pub behavioral_weight: f64,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            technical_weight: 0.5,
            behavioral_weight: 0.5,
        }
    }
}
