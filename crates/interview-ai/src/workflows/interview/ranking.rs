use std::cmp::Ordering;

use serde::Serialize;

use super::domain::CandidateId;
use super::repository::CandidateRecord;
use super::scoring::Recommendation;

/// Order assessed candidates by overall score, best first.
///
/// Candidates without an assessment are excluded, not sorted last. The
/// sort is stable by contract: equal overall scores keep their input
/// order, which for repository listings is registration order.
pub fn rank(candidates: Vec<CandidateRecord>) -> Vec<CandidateRecord> {
    let mut assessed: Vec<CandidateRecord> = candidates
        .into_iter()
        .filter(|candidate| candidate.assessment.is_some())
        .collect();

    assessed.sort_by(|left, right| {
        let left_score = overall(left);
        let right_score = overall(right);
        right_score
            .partial_cmp(&left_score)
            .unwrap_or(Ordering::Equal)
    });
    assessed
}

fn overall(candidate: &CandidateRecord) -> f64 {
    candidate
        .assessment
        .as_ref()
        .map(|assessment| assessment.overall_score)
        .unwrap_or(0.0)
}

/// Dashboard row with rounded percentage scores.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankingEntry {
    pub candidate_id: CandidateId,
    pub name: String,
    pub position: String,
    pub technical_score_pct: u8,
    pub behavioral_score_pct: u8,
    pub overall_score_pct: u8,
    pub recommendation: Recommendation,
}

/// Ranked presentation rows over every assessed candidate.
pub fn leaderboard(candidates: Vec<CandidateRecord>) -> Vec<RankingEntry> {
    rank(candidates)
        .into_iter()
        .filter_map(|record| {
            let assessment = record.assessment?;
            Some(RankingEntry {
                candidate_id: record.id,
                name: record.name,
                position: record.position,
                technical_score_pct: as_pct(assessment.overall_technical_score),
                behavioral_score_pct: as_pct(assessment.overall_behavioral_score),
                overall_score_pct: as_pct(assessment.overall_score),
                recommendation: assessment.recommendation,
            })
        })
        .collect()
}

fn as_pct(score: f64) -> u8 {
    (score * 100.0).round() as u8
}
