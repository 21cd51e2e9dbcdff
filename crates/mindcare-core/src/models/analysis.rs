use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use super::scores::SubscaleScores;
use super::severity::{SeverityBand, SeverityLabel};

/// Everything one "analyze" action produces. Report rendering and email
/// delivery read from this and nothing else.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AnalysisResult {
    pub label: SeverityLabel,
    pub scores: SubscaleScores,
    /// Label-based items first, then threshold add-ons in subscale order.
    pub recommendations: Vec<String>,
    pub analyzed_at: jiff::Timestamp,
}

impl AnalysisResult {
    pub fn band(&self) -> SeverityBand {
        self.label.band()
    }
}

/// An analysis result together with the session it is stored under.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AnalysisSession {
    pub session_id: Uuid,
    pub result: AnalysisResult,
}
