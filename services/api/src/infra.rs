use std::collections::{BTreeMap, BTreeSet};
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};

use metrics_exporter_prometheus::PrometheusHandle;

use interview_ai::workflows::interview::{
    CandidateId, CandidateRecord, CandidateRepository, Evaluation, EvaluatorError, Question,
    QuestionKind, RepositoryError, ResponseEvaluator, Sentiment,
};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Keyed by candidate id so `list` returns registration order, which the
/// ranking tie-break relies on.
#[derive(Default, Clone)]
pub(crate) struct InMemoryCandidateRepository {
    records: Arc<Mutex<BTreeMap<CandidateId, CandidateRecord>>>,
}

impl CandidateRepository for InMemoryCandidateRepository {
    fn insert(&self, record: CandidateRecord) -> Result<CandidateRecord, RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        if guard.contains_key(&record.id) {
            return Err(RepositoryError::Conflict);
        }
        guard.insert(record.id.clone(), record.clone());
        Ok(record)
    }

    fn update(&self, record: CandidateRecord) -> Result<(), RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        if guard.contains_key(&record.id) {
            guard.insert(record.id.clone(), record);
            Ok(())
        } else {
            Err(RepositoryError::NotFound)
        }
    }

    fn fetch(&self, id: &CandidateId) -> Result<Option<CandidateRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard.get(id).cloned())
    }

    fn list(&self) -> Result<Vec<CandidateRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard.values().cloned().collect())
    }
}

/// Deterministic lexical evaluator for demos and local runs.
///
/// Scores blend prompt-term coverage with how developed the answer is;
/// behavioral answers also get a keyword-driven sentiment. Deployments
/// swap in a model-backed `ResponseEvaluator` behind the same trait.
#[derive(Default, Clone)]
pub(crate) struct LexicalEvaluator;

const POSITIVE_MARKERS: &[&str] = &[
    "team", "helped", "learned", "improved", "together", "listened", "mentored", "delivered",
    "resolved", "shared",
];

const NEGATIVE_MARKERS: &[&str] = &[
    "blame", "refused", "quit", "angry", "ignored", "failed", "impossible", "never",
];

impl ResponseEvaluator for LexicalEvaluator {
    fn evaluate(
        &self,
        question: &Question,
        response_text: &str,
    ) -> Result<Evaluation, EvaluatorError> {
        let prompt_terms = terms(&question.text);
        let answer_terms = terms(response_text);
        let answer_words = word_count(response_text);

        let coverage = if prompt_terms.is_empty() {
            0.0
        } else {
            let shared = prompt_terms.intersection(&answer_terms).count();
            shared as f64 / prompt_terms.len() as f64
        };
        let depth = (answer_words as f64 / 60.0).min(1.0);
        let score = (0.45 * coverage + 0.55 * depth).clamp(0.0, 1.0);

        let sentiment = match question.kind {
            QuestionKind::Behavioral => Some(sentiment_of(&answer_terms)),
            QuestionKind::Technical => None,
        };

        Ok(Evaluation {
            score,
            feedback: feedback_for(score).to_string(),
            sentiment,
        })
    }
}

fn terms(text: &str) -> BTreeSet<String> {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|word| word.len() > 2)
        .map(|word| word.to_ascii_lowercase())
        .collect()
}

fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

fn feedback_for(score: f64) -> &'static str {
    if score >= 0.8 {
        "Thorough answer that engages directly with the prompt."
    } else if score >= 0.65 {
        "Solid answer; a few aspects of the prompt were left unexplored."
    } else if score >= 0.5 {
        "Partial answer; expand on the specifics the question asks for."
    } else {
        "The answer does not address most of the prompt."
    }
}

fn sentiment_of(answer_terms: &BTreeSet<String>) -> Sentiment {
    let positive = POSITIVE_MARKERS
        .iter()
        .filter(|marker| answer_terms.contains(**marker))
        .count();
    let negative = NEGATIVE_MARKERS
        .iter()
        .filter(|marker| answer_terms.contains(**marker))
        .count();

    if positive + negative == 0 {
        return Sentiment {
            label: "positive".to_string(),
            score: 0.5,
        };
    }

    let (label, dominant) = if positive >= negative {
        ("positive", positive)
    } else {
        ("negative", negative)
    };
    Sentiment {
        label: label.to_string(),
        score: dominant as f64 / (positive + negative) as f64,
    }
}
