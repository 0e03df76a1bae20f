use std::collections::BTreeMap;

use super::super::domain::{Question, QuestionId, Response};
use super::config::ScoringConfig;

/// Mean score over the recorded response order. Summation follows that
/// order so reruns over the same responses are bit-identical.
pub(crate) fn mean_score(responses: &[Response]) -> Option<f64> {
    if responses.is_empty() {
        return None;
    }
    let sum: f64 = responses.iter().map(|response| response.score).sum();
    Some(sum / responses.len() as f64)
}

/// Per-category mean scores, technical responses first, then behavioral.
/// Source pools never reuse a category across kinds, so merging into one
/// map cannot collide.
pub(crate) fn category_scores(
    selection: &[Question],
    technical: &[Response],
    behavioral: &[Response],
) -> BTreeMap<String, f64> {
    let categories: BTreeMap<&QuestionId, &str> = selection
        .iter()
        .map(|question| (&question.id, question.category.as_str()))
        .collect();

    let mut sums: BTreeMap<String, (f64, usize)> = BTreeMap::new();
    for response in technical.iter().chain(behavioral.iter()) {
        let Some(category) = categories.get(&response.question_id) else {
            continue;
        };
        let entry = sums.entry((*category).to_string()).or_insert((0.0, 0));
        entry.0 += response.score;
        entry.1 += 1;
    }

    sums.into_iter()
        .map(|(category, (sum, count))| (category, sum / count as f64))
        .collect()
}

/// Weight-normalized overall score. A kind that was never asked
/// contributes neither score nor weight; with a single kind present the
/// overall equals that kind's score exactly.
pub(crate) fn weighted_overall(
    technical: Option<f64>,
    behavioral: Option<f64>,
    config: &ScoringConfig,
) -> f64 {
    match (technical, behavioral) {
        (None, None) => 0.0,
        (Some(score), None) | (None, Some(score)) => score,
        (Some(technical), Some(behavioral)) => {
            let total = config.technical_weight + config.behavioral_weight;
            if total == 0.0 {
                return 0.0;
            }
            (technical * config.technical_weight + behavioral * config.behavioral_weight) / total
        }
    }
}
