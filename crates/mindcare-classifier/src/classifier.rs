use std::path::Path;

use mindcare_core::models::severity::SeverityLabel;
use mindcare_instruments::FeatureRow;

use crate::decoder::LabelDecoder;
use crate::error::ClassifierError;
use crate::model::ModelArtifact;

/// Turns a post-reversal feature row into a severity label.
///
/// Exactly one production implementation exists ([`ArtifactClassifier`]);
/// tests substitute deterministic stubs.
pub trait SeverityClassifier: Send + Sync {
    fn classify(&self, features: &FeatureRow) -> Result<SeverityLabel, ClassifierError>;
}

/// Classifier backed by the exported model and label decoder artifacts.
#[derive(Debug, Clone)]
pub struct ArtifactClassifier {
    model: ModelArtifact,
    decoder: LabelDecoder,
}

impl ArtifactClassifier {
    /// Pair a model with its decoder, rejecting combinations where the model
    /// could emit a class id the decoder cannot name.
    pub fn new(model: ModelArtifact, decoder: LabelDecoder) -> Result<Self, ClassifierError> {
        if let Some(max) = model.max_class_id()
            && max >= decoder.len()
        {
            return Err(ClassifierError::UnknownClass {
                class_id: max,
                classes: decoder.len(),
            });
        }
        Ok(Self { model, decoder })
    }

    pub fn load(model_path: &Path, decoder_path: &Path) -> Result<Self, ClassifierError> {
        let model = ModelArtifact::load(model_path)?;
        let decoder = LabelDecoder::load(decoder_path)?;
        Self::new(model, decoder)
    }

    pub fn model(&self) -> &ModelArtifact {
        &self.model
    }

    pub fn decoder(&self) -> &LabelDecoder {
        &self.decoder
    }
}

impl SeverityClassifier for ArtifactClassifier {
    fn classify(&self, features: &FeatureRow) -> Result<SeverityLabel, ClassifierError> {
        let class_id = self.model.predict(features)?;
        let label = self.decoder.inverse_transform(class_id)?;
        tracing::debug!(class_id, label = %label, "classified feature row");
        Ok(label)
    }
}
