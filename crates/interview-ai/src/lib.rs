//! Structured interview orchestration for candidate screening.
//!
//! The `workflows::interview` module walks candidates through ordered
//! question selections, records evaluator-scored responses, aggregates
//! per-category and overall assessments, and ranks completed candidates.

pub mod config;
pub mod error;
pub mod telemetry;
pub mod workflows;
