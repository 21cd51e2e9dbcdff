use serde::Serialize;
use uuid::Uuid;

use mindcare_core::models::analysis::AnalysisResult;
use mindcare_core::models::scores::{SubscaleScores, SUBSCALE_MAX};
use mindcare_instruments::guidance::{clinical_interpretation, next_steps};

use crate::error::ExportError;
use crate::sanitize::sanitize;

pub const REPORT_TITLE: &str = "MindCare AI – Mental Health Assessment Report";
pub const REPORT_SUBTITLE: &str = "Hospital-Style Psychological Screening";

const GENERATED_ON_FORMAT: &str = "%d %b %Y, %I:%M %p";

#[derive(Debug, Clone, Serialize)]
pub struct ScoreRow {
    pub indicator: String,
    pub value: u8,
    pub max: u8,
}

/// Everything the report template reads, already sanitized for the PDF
/// fonts.
#[derive(Debug, Clone, Serialize)]
pub struct ReportContext {
    pub title: String,
    pub subtitle: String,
    pub patient_id: String,
    pub generated_on: String,
    pub status: String,
    pub interpretation: String,
    pub scores: Vec<ScoreRow>,
    pub recommendations: Vec<String>,
    pub next_steps: Vec<String>,
    #[serde(skip)]
    pub chart_scores: SubscaleScores,
}

impl ReportContext {
    /// Build a context for one render.
    ///
    /// The patient id and timestamp are fresh on every call; they label the
    /// printed document only and are not stored anywhere.
    pub fn from_result(result: &AnalysisResult) -> Result<Self, ExportError> {
        let patient_id = Uuid::new_v4().simple().to_string()[..8].to_string();
        let generated_on = jiff::Zoned::now().strftime(GENERATED_ON_FORMAT).to_string();
        Self::with_identity(result, patient_id, generated_on)
    }

    pub fn with_identity(
        result: &AnalysisResult,
        patient_id: String,
        generated_on: String,
    ) -> Result<Self, ExportError> {
        result.scores.validate()?;
        let band = result.band();

        Ok(Self {
            title: sanitize(REPORT_TITLE),
            subtitle: sanitize(REPORT_SUBTITLE),
            patient_id: sanitize(&patient_id),
            generated_on: sanitize(&generated_on),
            status: sanitize(&result.label.status_text()),
            interpretation: sanitize(clinical_interpretation(band)),
            scores: result
                .scores
                .iter()
                .map(|(subscale, value)| ScoreRow {
                    indicator: subscale.name().to_string(),
                    value,
                    max: SUBSCALE_MAX,
                })
                .collect(),
            recommendations: result.recommendations.iter().map(|r| sanitize(r)).collect(),
            next_steps: next_steps(band).iter().map(|s| sanitize(s)).collect(),
            chart_scores: result.scores,
        })
    }
}
