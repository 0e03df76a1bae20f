use serde::{Deserialize, Serialize};

/// Discrete hiring signal derived from the overall score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Recommendation {
    NotRecommended,
    Consider,
    Recommended,
    StronglyRecommended,
}

impl Recommendation {
    pub const fn label(self) -> &'static str {
        match self {
            Self::NotRecommended => "Not Recommended",
            Self::Consider => "Consider",
            Self::Recommended => "Recommended",
            Self::StronglyRecommended => "Strongly Recommended",
        }
    }
}

/// Bucket the overall score. Each bucket is closed below and open above;
/// the top bucket keeps its lower bound, so exactly 0.8 is already a
/// strong recommendation.
pub(crate) fn recommend(overall_score: f64) -> Recommendation {
    if overall_score >= 0.8 {
        Recommendation::StronglyRecommended
    } else if overall_score >= 0.65 {
        Recommendation::Recommended
    } else if overall_score >= 0.5 {
        Recommendation::Consider
    } else {
        Recommendation::NotRecommended
    }
}
