use std::path::PathBuf;

use thiserror::Error;

use mindcare_core::error::CoreError;

#[derive(Debug, Error)]
pub enum ClassifierError {
    #[error("failed to read artifact {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("artifact parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("model expects {expected} features, got {actual}")]
    FeatureCountMismatch { expected: usize, actual: usize },

    #[error("feature name mismatch at column {index}: model expects '{expected}', got '{actual}'")]
    FeatureNameMismatch {
        index: usize,
        expected: String,
        actual: String,
    },

    #[error("malformed model: {0}")]
    MalformedModel(String),

    #[error("class id {class_id} is outside the label decoder's {classes} classes")]
    UnknownClass { class_id: usize, classes: usize },

    #[error("invalid label: {0}")]
    Label(#[from] CoreError),
}
