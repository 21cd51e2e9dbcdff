use std::path::Path;

use mindcare_core::models::analysis::AnalysisResult;
use mindcare_core::models::scores::SubscaleScores;
use mindcare_core::models::severity::SeverityLabel;
use mindcare_export::chart::with_chart;
use mindcare_export::context::ReportContext;
use mindcare_export::error::ExportError;
use mindcare_export::render::render_report;
use mindcare_export::report::generate_report_from_context;
use mindcare_export::styles::ReportStyles;
use mindcare_export::{generate_report, REPORT_FILENAME};
use mindcare_instruments::guidance::recommendations;

fn result(label: &str, stress: u8, anxiety: u8, depression: u8) -> AnalysisResult {
    let label = SeverityLabel::new(label).unwrap();
    let scores = SubscaleScores {
        stress,
        anxiety,
        depression,
    };
    AnalysisResult {
        recommendations: recommendations(&label, &scores),
        label,
        scores,
        analyzed_at: jiff::Timestamp::now(),
    }
}

fn styles_in(dir: &Path) -> ReportStyles {
    ReportStyles {
        scratch_dir: Some(dir.to_path_buf()),
        ..ReportStyles::default()
    }
}

fn is_empty_dir(dir: &Path) -> bool {
    std::fs::read_dir(dir).unwrap().next().is_none()
}

fn page_count(bytes: &[u8]) -> usize {
    lopdf::Document::load_mem(bytes).unwrap().get_pages().len()
}

#[test]
fn report_filename_is_fixed() {
    assert_eq!(REPORT_FILENAME, "MindCare_AI_Report.pdf");
}

#[test]
fn markup_shows_scores_out_of_fifteen() {
    let ctx = ReportContext::with_identity(
        &result("Moderate", 12, 5, 3),
        "a1b2c3d4".to_string(),
        "18 Oct 2026, 09:30 AM".to_string(),
    )
    .unwrap();
    let markup = render_report(&ctx).unwrap();

    assert!(markup.contains("| Stress | 12 / 15 |"));
    assert!(markup.contains("| Anxiety | 5 / 15 |"));
    assert!(markup.contains("| Depression | 3 / 15 |"));
    assert!(markup.contains("Patient ID: a1b2c3d4"));
    assert!(markup.contains("Generated On: 18 Oct 2026, 09:30 AM"));
    assert!(markup.contains("Mental Health Status: MODERATE"));
    assert!(markup.contains("[chart]"));
    assert!(markup.contains("Figure 1: Comparative visualization of mental health indicators."));
    assert!(markup.contains("- Consider professional counseling services."));
    assert!(markup.contains("- High stress detected: prioritize rest and workload management."));
    assert!(markup.contains("- Seek immediate help if symptoms worsen."));
}

#[test]
fn context_replaces_unsupported_characters() {
    let ctx = ReportContext::with_identity(
        &result("Mild", 2, 2, 2),
        "deadbeef".to_string(),
        "now".to_string(),
    )
    .unwrap();

    assert_eq!(ctx.title, "MindCare AI - Mental Health Assessment Report");
    assert!(ctx
        .recommendations
        .contains(&"Practice meditation for 10-15 minutes daily.".to_string()));
}

#[test]
fn context_rejects_out_of_range_scores() {
    let err = ReportContext::with_identity(
        &result("Severe", 16, 0, 0),
        "deadbeef".to_string(),
        "now".to_string(),
    )
    .unwrap_err();
    assert!(matches!(err, ExportError::InvalidResult(_)));
}

#[test]
fn patient_id_is_eight_hex_characters_and_fresh_per_render() {
    let r = result("Normal", 0, 0, 0);
    let first = ReportContext::from_result(&r).unwrap();
    let second = ReportContext::from_result(&r).unwrap();

    assert_eq!(first.patient_id.len(), 8);
    assert!(first.patient_id.chars().all(|c| c.is_ascii_hexdigit()));
    assert_ne!(first.patient_id, second.patient_id);
}

#[test]
fn generates_a_single_page_pdf_and_cleans_up() {
    let dir = tempfile::tempdir().unwrap();
    let bytes = generate_report(&result("Normal", 1, 2, 0), &styles_in(dir.path())).unwrap();

    assert!(bytes.starts_with(b"%PDF-"));
    assert_eq!(page_count(&bytes), 1);
    assert!(is_empty_dir(dir.path()));
}

#[test]
fn long_recommendation_lists_flow_onto_more_pages() {
    let dir = tempfile::tempdir().unwrap();
    let mut r = result("Severe", 15, 15, 15);
    r.recommendations = (1..=60)
        .map(|i| format!("Recommendation number {i} with enough words to fill a line."))
        .collect();

    let ctx = ReportContext::with_identity(&r, "cafebabe".to_string(), "now".to_string()).unwrap();
    let bytes = generate_report_from_context(&ctx, &styles_in(dir.path())).unwrap();

    assert!(page_count(&bytes) > 1);
    assert!(is_empty_dir(dir.path()));
}

#[test]
fn pdf_text_carries_the_three_scores() {
    let dir = tempfile::tempdir().unwrap();
    let bytes = generate_report(&result("Moderate", 12, 5, 3), &styles_in(dir.path())).unwrap();

    let doc = lopdf::Document::load_mem(&bytes).unwrap();
    let pages: Vec<u32> = doc.get_pages().keys().copied().collect();
    let text = doc.extract_text(&pages).unwrap();

    for expected in ["12 / 15", "5 / 15", "3 / 15", "CONFIDENTIAL", "MODERATE"] {
        assert!(text.contains(expected), "missing {expected:?} in {text:?}");
    }
}

#[test]
fn chart_artifact_is_removed_when_embedding_fails() {
    let dir = tempfile::tempdir().unwrap();
    let scores = SubscaleScores {
        stress: 4,
        anxiety: 9,
        depression: 15,
    };

    let err = with_chart(&scores, dir.path(), |png| {
        assert!(png.starts_with(b"\x89PNG"));
        Err::<(), _>(ExportError::Pdf("boom".to_string()))
    })
    .unwrap_err();

    assert!(matches!(err, ExportError::Pdf(_)));
    assert!(is_empty_dir(dir.path()));
}

#[test]
fn missing_scratch_directory_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let styles = styles_in(&dir.path().join("does-not-exist"));

    let err = generate_report(&result("Normal", 0, 0, 0), &styles).unwrap_err();
    assert!(matches!(err, ExportError::Io(_)));
}

#[test]
fn logo_is_drawn_when_present_and_skipped_when_missing() {
    let dir = tempfile::tempdir().unwrap();
    let logo_path = dir.path().join("logo.png");
    let scores = SubscaleScores::default();
    let png = with_chart(&scores, dir.path(), |png| Ok(png.to_vec())).unwrap();
    std::fs::write(&logo_path, png).unwrap();

    let scratch = tempfile::tempdir().unwrap();
    let with_logo = ReportStyles {
        logo_path: Some(logo_path),
        ..styles_in(scratch.path())
    };
    let without_logo = ReportStyles {
        logo_path: Some(dir.path().join("missing.png")),
        ..styles_in(scratch.path())
    };

    let r = result("Mild", 3, 3, 3);
    let a = generate_report(&r, &with_logo).unwrap();
    let b = generate_report(&r, &without_logo).unwrap();

    assert_eq!(page_count(&a), 1);
    assert_eq!(page_count(&b), 1);
    assert!(a.len() > b.len());
}
