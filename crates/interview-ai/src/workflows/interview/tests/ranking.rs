use super::common::*;
use crate::workflows::interview::ranking::{leaderboard, rank};
use crate::workflows::interview::scoring::Recommendation;

#[test]
fn orders_by_overall_score_descending() {
    let candidates = vec![
        assessed_record("cand-a", "Ada", 0.61),
        assessed_record("cand-b", "Grace", 0.93),
        assessed_record("cand-c", "Edsger", 0.77),
    ];

    let ranked = rank(candidates);

    let names: Vec<&str> = ranked.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["Grace", "Edsger", "Ada"]);
}

#[test]
fn equal_scores_keep_input_order() {
    let candidates = vec![
        assessed_record("cand-a", "Ada", 0.7),
        assessed_record("cand-b", "Grace", 0.7),
        assessed_record("cand-c", "Edsger", 0.9),
        assessed_record("cand-d", "Barbara", 0.7),
    ];

    let ranked = rank(candidates);

    let names: Vec<&str> = ranked.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["Edsger", "Ada", "Grace", "Barbara"]);
}

#[test]
fn unassessed_candidates_are_excluded() {
    let candidates = vec![
        pending_record("cand-a", "Ada"),
        assessed_record("cand-b", "Grace", 0.4),
        pending_record("cand-c", "Edsger"),
    ];

    let ranked = rank(candidates);

    assert_eq!(ranked.len(), 1);
    assert_eq!(ranked[0].name, "Grace");
}

#[test]
fn leaderboard_rounds_percentages_and_labels() {
    let mut strong = assessed_record("cand-a", "Grace", 0.8);
    if let Some(assessment) = strong.assessment.as_mut() {
        assessment.recommendation = Recommendation::StronglyRecommended;
    }
    let candidates = vec![strong, assessed_record("cand-b", "Ada", 0.649999)];

    let entries = leaderboard(candidates);

    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].overall_score_pct, 80);
    assert_eq!(
        entries[0].recommendation,
        Recommendation::StronglyRecommended
    );
    assert_eq!(entries[1].overall_score_pct, 65);
    assert_eq!(entries[1].name, "Ada");
}

#[test]
fn leaderboard_is_empty_without_assessments() {
    let entries = leaderboard(vec![
        pending_record("cand-a", "Ada"),
        pending_record("cand-b", "Grace"),
    ]);
    assert!(entries.is_empty());
}
