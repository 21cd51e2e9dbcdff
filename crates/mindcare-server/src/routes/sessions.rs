use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::header;
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use mindcare_core::models::analysis::AnalysisResult;
use mindcare_export::{generate_report, REPORT_FILENAME};
use mindcare_mail::message::parse_address;

use crate::error::ApiError;
use crate::state::AppState;

async fn stored_result(state: &AppState, id: Uuid) -> Result<AnalysisResult, ApiError> {
    state
        .sessions
        .lock()
        .await
        .get(&id)
        .cloned()
        .ok_or_else(|| ApiError::NotFound(format!("session not found: {id}")))
}

/// Render the report off the async runtime; layout and chart drawing are
/// CPU bound and touch the filesystem.
async fn render_pdf(state: &AppState, result: AnalysisResult) -> Result<Vec<u8>, ApiError> {
    let styles = state.styles.clone();
    let bytes = tokio::task::spawn_blocking(move || generate_report(&result, &styles)).await??;
    Ok(bytes)
}

pub async fn get_session(
    State(state): State<AppState>,
    path: Result<Path<Uuid>, PathRejection>,
) -> Result<Json<AnalysisResult>, ApiError> {
    let Path(id) = path?;
    Ok(Json(stored_result(&state, id).await?))
}

/// Download a freshly generated PDF report for a session.
pub async fn download_report(
    State(state): State<AppState>,
    path: Result<Path<Uuid>, PathRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Path(id) = path?;
    let result = stored_result(&state, id).await?;
    let bytes = render_pdf(&state, result).await?;

    Ok((
        [
            (header::CONTENT_TYPE, "application/pdf".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{REPORT_FILENAME}\""),
            ),
        ],
        bytes,
    ))
}

#[derive(Deserialize)]
pub struct EmailRequest {
    pub recipient: String,
}

#[derive(Serialize)]
pub struct EmailResponse {
    pub status: &'static str,
}

/// Generate the report and email it to `recipient`.
pub async fn email_report(
    State(state): State<AppState>,
    path: Result<Path<Uuid>, PathRejection>,
    payload: Result<Json<EmailRequest>, JsonRejection>,
) -> Result<Json<EmailResponse>, ApiError> {
    let Path(id) = path?;
    let Json(req) = payload?;
    let result = stored_result(&state, id).await?;

    let mailer = state
        .mailer
        .clone()
        .ok_or_else(|| ApiError::Unavailable("email delivery is not configured".to_string()))?;
    parse_address(&req.recipient)?;

    let bytes = render_pdf(&state, result).await?;
    mailer
        .send_report(&req.recipient, REPORT_FILENAME, bytes)
        .await?;

    tracing::info!(session_id = %id, "report emailed");
    Ok(Json(EmailResponse { status: "sent" }))
}
