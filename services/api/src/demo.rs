use crate::infra::{InMemoryCandidateRepository, LexicalEvaluator};
use chrono::{Local, NaiveDate};
use clap::Args;
use std::sync::Arc;

use interview_ai::error::AppError;
use interview_ai::workflows::interview::{
    InterviewService, NewCandidate, Question, QuestionBank, ScoringConfig,
};

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Registration date recorded for the demo candidates (YYYY-MM-DD).
    /// Defaults to today.
    #[arg(long)]
    pub(crate) registered_on: Option<NaiveDate>,
    /// Print every question, answer, and per-response feedback.
    #[arg(long)]
    pub(crate) detailed: bool,
}

struct DemoCandidate {
    name: &'static str,
    email: &'static str,
    position: &'static str,
    experience_years: u8,
    style: AnswerStyle,
}

#[derive(Clone, Copy)]
enum AnswerStyle {
    Thorough,
    Adequate,
    Terse,
}

fn demo_candidates() -> Vec<DemoCandidate> {
    vec![
        DemoCandidate {
            name: "Grace Marlow",
            email: "grace.marlow@example.com",
            position: "Software Engineer",
            experience_years: 8,
            style: AnswerStyle::Thorough,
        },
        DemoCandidate {
            name: "Theo Anand",
            email: "theo.anand@example.com",
            position: "Data Scientist",
            experience_years: 4,
            style: AnswerStyle::Adequate,
        },
        DemoCandidate {
            name: "Rosa Delgado",
            email: "rosa.delgado@example.com",
            position: "Product Manager",
            experience_years: 6,
            style: AnswerStyle::Terse,
        },
    ]
}

/// Canned answers keyed off the answer style. Thorough answers echo the
/// prompt's own terms, which the lexical evaluator rewards as coverage.
fn answer_for(question: &Question, style: AnswerStyle) -> String {
    let topic = question.text.trim_end_matches(['?', '.']).to_lowercase();
    match style {
        AnswerStyle::Thorough => format!(
            "Thinking about {topic}: I start by naming the constraint, then lay out the \
             options with their trade-offs. On a recent project the team helped narrow the \
             choices, we improved the plan together, I listened to the pushback, and we \
             delivered a solution we could measure. Afterwards I shared what we learned so \
             the next effort started further ahead."
        ),
        AnswerStyle::Adequate => format!(
            "For {topic}, I would weigh the main trade-offs first and pick the simplest \
             approach that the team delivered against before, then check the result."
        ),
        AnswerStyle::Terse => "I would handle it the usual way.".to_string(),
    }
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs {
        registered_on,
        detailed,
    } = args;

    let registered_on = registered_on.unwrap_or_else(|| Local::now().date_naive());
    let scoring = ScoringConfig::default();

    let service = InterviewService::new(
        Arc::new(InMemoryCandidateRepository::default()),
        Arc::new(LexicalEvaluator),
        QuestionBank::standard(),
        scoring,
    );

    println!("Structured interview demo");
    println!(
        "- scoring weights: technical {:.2} / behavioral {:.2}",
        scoring.technical_weight, scoring.behavioral_weight
    );

    for candidate in demo_candidates() {
        let record = service.register(
            NewCandidate {
                name: candidate.name.to_string(),
                email: candidate.email.to_string(),
                position: candidate.position.to_string(),
                experience_years: candidate.experience_years,
            },
            registered_on,
        )?;

        println!(
            "\nInterviewing {} ({}) — {}",
            record.name, record.id, record.position
        );

        let started = service.start(&record.id, None)?;
        println!("- {} questions selected", started.question_count);

        let mut question = Some(started.first_question);
        while let Some(current) = question {
            let answer = answer_for(&current, candidate.style);
            let outcome = service.submit(&record.id, &answer)?;

            if detailed {
                println!("  [{}] {}", current.kind.label(), current.text);
                println!("  > {answer}");
                println!(
                    "  score {:.2} — {}",
                    outcome.response.score, outcome.response.feedback
                );
                if let Some(sentiment) = &outcome.response.sentiment {
                    println!("  sentiment {} ({:.2})", sentiment.label, sentiment.score);
                }
            }
            question = outcome.next_question;
        }

        let assessment = service.assessment(&record.id)?;
        println!(
            "- technical {:.0}% | behavioral {:.0}% | overall {:.0}% — {}",
            assessment.overall_technical_score * 100.0,
            assessment.overall_behavioral_score * 100.0,
            assessment.overall_score * 100.0,
            assessment.recommendation.label()
        );
        for (category, score) in &assessment.category_scores {
            println!("  {category}: {:.0}%", score * 100.0);
        }
    }

    let rankings = service.rankings()?;
    println!("\nCandidate rankings");
    for (place, entry) in rankings.iter().enumerate() {
        println!(
            "{}. {} ({}) — overall {}% | technical {}% | behavioral {}% — {}",
            place + 1,
            entry.name,
            entry.position,
            entry.overall_score_pct,
            entry.technical_score_pct,
            entry.behavioral_score_pct,
            entry.recommendation.label()
        );
    }

    Ok(())
}
