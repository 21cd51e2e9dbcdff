use tracing::info;

use mindcare_core::models::analysis::AnalysisResult;

use crate::chart::with_chart;
use crate::context::ReportContext;
use crate::error::ExportError;
use crate::pdf::generate_pdf;
use crate::render::render_report;
use crate::styles::ReportStyles;

/// Attachment and download name of the generated report.
pub const REPORT_FILENAME: &str = "MindCare_AI_Report.pdf";

/// Generate the PDF report for an analysis result.
///
/// Every call stamps a fresh patient id and generation time.
pub fn generate_report(
    result: &AnalysisResult,
    styles: &ReportStyles,
) -> Result<Vec<u8>, ExportError> {
    let context = ReportContext::from_result(result)?;
    generate_report_from_context(&context, styles)
}

/// Generate the PDF report from a prepared context.
pub fn generate_report_from_context(
    context: &ReportContext,
    styles: &ReportStyles,
) -> Result<Vec<u8>, ExportError> {
    let markup = render_report(context)?;
    let scratch_dir = styles.scratch_dir();

    let bytes = with_chart(&context.chart_scores, &scratch_dir, |png| {
        generate_pdf(&markup, png, styles)
    })?;

    info!(
        patient_id = %context.patient_id,
        status = %context.status,
        size = bytes.len(),
        "report generated"
    );
    Ok(bytes)
}
