use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use serde::Deserialize;

use mindcare_classifier::analyze;
use mindcare_core::models::analysis::AnalysisSession;
use mindcare_instruments::questionnaire::ITEM_COUNT;
use mindcare_instruments::Responses;

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct AnalyzeRequest {
    /// Raw answers in questionnaire order. Wider than `u8` so that negative
    /// or oversized values reach validation instead of failing to parse.
    pub answers: Vec<i64>,
}

/// Score, classify and store one completed questionnaire.
pub async fn analyze_responses(
    State(state): State<AppState>,
    payload: Result<Json<AnalyzeRequest>, JsonRejection>,
) -> Result<Json<AnalysisSession>, ApiError> {
    let Json(req) = payload?;
    let responses = to_responses(&req.answers)?;

    let result = analyze(responses, state.classifier.as_ref())?;
    let session_id = state.sessions.lock().await.insert(result.clone());
    tracing::info!(session_id = %session_id, label = %result.label, "analysis stored");

    Ok(Json(AnalysisSession { session_id, result }))
}

fn to_responses(answers: &[i64]) -> Result<Responses, ApiError> {
    if answers.len() != ITEM_COUNT {
        return Err(ApiError::BadRequest(format!(
            "expected {ITEM_COUNT} answers, got {}",
            answers.len()
        )));
    }

    let values = answers
        .iter()
        .enumerate()
        .map(|(i, &v)| {
            u8::try_from(v).map_err(|_| {
                ApiError::BadRequest(format!("Q{}: answer {v} is outside range [0, 3]", i + 1))
            })
        })
        .collect::<Result<Vec<u8>, _>>()?;

    Ok(Responses::try_from(values)?)
}
