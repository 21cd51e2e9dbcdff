//! mindcare-export
//!
//! PDF report generation from an analysis result.
//!
//! The flow is:
//! 1. `AnalysisResult` → sanitized [`context::ReportContext`]
//! 2. Context → line-oriented markup (via Tera)
//! 3. Markup + chart → PDF bytes

pub mod chart;
pub mod context;
pub mod error;
pub mod markup;
pub mod pdf;
pub mod render;
pub mod report;
pub mod sanitize;
pub mod styles;

pub use report::{generate_report, REPORT_FILENAME};
