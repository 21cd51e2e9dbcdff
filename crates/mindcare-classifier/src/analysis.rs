use tracing::info;

use mindcare_core::models::analysis::AnalysisResult;
use mindcare_instruments::guidance::recommendations;
use mindcare_instruments::Responses;

use crate::classifier::SeverityClassifier;
use crate::error::ClassifierError;

/// Score the responses, classify them, and attach recommendations.
///
/// Any classifier failure aborts the whole analysis; nothing is retried.
pub fn analyze(
    responses: Responses,
    classifier: &dyn SeverityClassifier,
) -> Result<AnalysisResult, ClassifierError> {
    let scored = responses.score();
    let label = classifier.classify(&scored.features)?;
    let recommendations = recommendations(&label, &scored.scores);

    info!(
        label = %label,
        stress = scored.scores.stress,
        anxiety = scored.scores.anxiety,
        depression = scored.scores.depression,
        recommendations = recommendations.len(),
        "analysis complete"
    );

    Ok(AnalysisResult {
        label,
        scores: scored.scores,
        recommendations,
        analyzed_at: jiff::Timestamp::now(),
    })
}
