//! mindcare-classifier
//!
//! Severity classification from the scored questionnaire: loading the
//! exported model and label decoder artifacts, the [`SeverityClassifier`]
//! seam, and the analyze pipeline that ties scoring, classification and
//! recommendations together.

pub mod analysis;
pub mod classifier;
pub mod decoder;
pub mod error;
pub mod model;

pub use analysis::analyze;
pub use classifier::{ArtifactClassifier, SeverityClassifier};
