use serde::{Deserialize, Serialize};

use super::domain::{Question, QuestionId, QuestionKind};

/// Which question pools a session draws from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FocusAreas {
    pub technical: bool,
    pub behavioral: bool,
}

impl FocusAreas {
    /// Default focus for a candidate's advertised position. Engineering
    /// positions add the technical pool; behavioral questions are asked
    /// regardless of position.
    pub fn for_position(position: &str) -> Self {
        let technical = matches!(
            position,
            "Software Engineer" | "Data Scientist" | "DevOps Engineer"
        );
        Self {
            technical,
            behavioral: true,
        }
    }
}

/// Raised when a selection would contain no questions, either because both
/// focus flags are off or because every selected pool is empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("question selection is empty: enable at least one non-empty pool")]
pub struct EmptySelectionError;

/// Ordered pools of technical and behavioral questions.
///
/// Pool order is fixed at load time and `select` never shuffles, so two
/// sessions with identical focus flags traverse questions identically.
#[derive(Debug, Clone)]
pub struct QuestionBank {
    technical: Vec<Question>,
    behavioral: Vec<Question>,
}

impl QuestionBank {
    /// Partition a flat pool by kind, preserving load order within each pool.
    pub fn new(questions: Vec<Question>) -> Self {
        let (technical, behavioral): (Vec<_>, Vec<_>) = questions
            .into_iter()
            .partition(|question| question.kind == QuestionKind::Technical);
        Self {
            technical,
            behavioral,
        }
    }

    /// The built-in interview pools.
    pub fn standard() -> Self {
        Self::new(standard_questions())
    }

    pub fn technical_pool(&self) -> &[Question] {
        &self.technical
    }

    pub fn behavioral_pool(&self) -> &[Question] {
        &self.behavioral
    }

    /// Build the ordered selection for one session: the technical pool when
    /// `focus.technical` is set, then the behavioral pool when
    /// `focus.behavioral` is set. A selected pool with no questions simply
    /// contributes nothing.
    pub fn select(&self, focus: FocusAreas) -> Result<Vec<Question>, EmptySelectionError> {
        if !focus.technical && !focus.behavioral {
            return Err(EmptySelectionError);
        }

        let mut selection = Vec::new();
        if focus.technical {
            selection.extend(self.technical.iter().cloned());
        }
        if focus.behavioral {
            selection.extend(self.behavioral.iter().cloned());
        }

        if selection.is_empty() {
            return Err(EmptySelectionError);
        }
        Ok(selection)
    }
}

fn question(id: &str, text: &str, category: &str, kind: QuestionKind) -> Question {
    Question {
        id: QuestionId(id.to_string()),
        text: text.to_string(),
        category: category.to_string(),
        kind,
    }
}

fn standard_questions() -> Vec<Question> {
    vec![
        question(
            "tech-01",
            "Walk through how you would find the first non-repeating character in a stream, and give the time complexity of your approach.",
            "algorithms",
            QuestionKind::Technical,
        ),
        question(
            "tech-02",
            "Explain the trade-offs between breadth-first and depth-first traversal when searching a large graph.",
            "algorithms",
            QuestionKind::Technical,
        ),
        question(
            "tech-03",
            "When would you reach for a hash map over a balanced tree, and what do you give up by doing so?",
            "data_structures",
            QuestionKind::Technical,
        ),
        question(
            "tech-04",
            "Design a rate limiter for a public API. What state does it keep, and where does that state live?",
            "system_design",
            QuestionKind::Technical,
        ),
        question(
            "tech-05",
            "A service's tail latency doubled after a deploy that did not touch the hot path. How do you track down the cause?",
            "debugging",
            QuestionKind::Technical,
        ),
        question(
            "tech-06",
            "On a codebase you have just inherited, how do you decide what to cover with unit tests versus integration tests?",
            "testing",
            QuestionKind::Technical,
        ),
        question(
            "behav-01",
            "Tell me about a time you disagreed with a teammate over a technical decision. How was it resolved?",
            "teamwork",
            QuestionKind::Behavioral,
        ),
        question(
            "behav-02",
            "Describe a situation where your team was behind and a teammate was struggling. What did you do?",
            "teamwork",
            QuestionKind::Behavioral,
        ),
        question(
            "behav-03",
            "Tell me about a project you led that fell behind schedule. What did you change to recover it?",
            "leadership",
            QuestionKind::Behavioral,
        ),
        question(
            "behav-04",
            "Describe a time priorities shifted in the middle of a project. How did you adjust your plan?",
            "adaptability",
            QuestionKind::Behavioral,
        ),
        question(
            "behav-05",
            "How do you explain a complex technical trade-off to a non-technical stakeholder? Give a concrete example.",
            "communication",
            QuestionKind::Behavioral,
        ),
    ]
}
