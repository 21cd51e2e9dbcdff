pub mod analyze;
pub mod health;
pub mod questionnaire;
pub mod sessions;
