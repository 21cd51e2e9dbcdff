use std::path::Path;

use serde::{Deserialize, Serialize};

use mindcare_core::models::severity::SeverityLabel;

use crate::error::ClassifierError;

/// Maps encoded class ids back to label strings, like a fitted
/// scikit-learn `LabelEncoder` (`classes_[id]`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LabelDecoder {
    classes: Vec<String>,
}

impl LabelDecoder {
    pub fn new(classes: Vec<String>) -> Result<Self, ClassifierError> {
        if classes.is_empty() {
            return Err(ClassifierError::MalformedModel(
                "label decoder has no classes".to_string(),
            ));
        }
        for class in &classes {
            SeverityLabel::new(class.as_str())?;
        }
        Ok(Self { classes })
    }

    pub fn load(path: &Path) -> Result<Self, ClassifierError> {
        let bytes = std::fs::read(path).map_err(|source| ClassifierError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let raw: LabelDecoder = serde_json::from_slice(&bytes)?;
        let decoder = Self::new(raw.classes)?;
        tracing::info!(
            path = %path.display(),
            classes = ?decoder.classes,
            "label decoder loaded"
        );
        Ok(decoder)
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    pub fn inverse_transform(&self, class_id: usize) -> Result<SeverityLabel, ClassifierError> {
        let class = self
            .classes
            .get(class_id)
            .ok_or(ClassifierError::UnknownClass {
                class_id,
                classes: self.classes.len(),
            })?;
        Ok(SeverityLabel::new(class.as_str())?)
    }
}
