//! mindcare-instruments
//!
//! The MindCare screening questionnaire: item definitions, answer options,
//! response validation, reversal and subscale scoring, plus the guidance
//! tables (interpretation, recommendations, next steps) keyed by severity
//! band. Pure data and pure functions.

pub mod error;
pub mod guidance;
pub mod questionnaire;
pub mod scoring;

pub use questionnaire::questionnaire;
pub use scoring::{FeatureRow, Responses, ScoredResponses};
