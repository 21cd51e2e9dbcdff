use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// The classifier's decoded output, kept exactly as the label decoder
/// produced it. Deserializing goes through [`SeverityLabel::new`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, TS)]
#[serde(transparent)]
#[ts(export)]
pub struct SeverityLabel(String);

impl SeverityLabel {
    pub fn new(label: impl Into<String>) -> Result<Self, CoreError> {
        let label = label.into();
        if label.is_empty() {
            return Err(CoreError::EmptyLabel);
        }
        Ok(Self(label))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn band(&self) -> SeverityBand {
        SeverityBand::from_label(&self.0)
    }

    /// Upper-cased form shown as the "Mental Health Status" line.
    pub fn status_text(&self) -> String {
        self.0.to_uppercase()
    }
}

impl<'de> Deserialize<'de> for SeverityLabel {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let label = String::deserialize(deserializer)?;
        Self::new(label).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for SeverityLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Four-way bucket every guidance table is keyed by.
///
/// Only the exact labels `Normal`, `Mild` and `Moderate` map to their own
/// band; every other label the decoder can produce falls into `Severe`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum SeverityBand {
    Normal,
    Mild,
    Moderate,
    Severe,
}

impl SeverityBand {
    pub const ALL: [SeverityBand; 4] = [
        SeverityBand::Normal,
        SeverityBand::Mild,
        SeverityBand::Moderate,
        SeverityBand::Severe,
    ];

    pub fn from_label(label: &str) -> Self {
        match label {
            "Normal" => SeverityBand::Normal,
            "Mild" => SeverityBand::Mild,
            "Moderate" => SeverityBand::Moderate,
            _ => SeverityBand::Severe,
        }
    }
}
