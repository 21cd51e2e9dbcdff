use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Page geometry and type sizes for the PDF report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportStyles {
    /// Page width in millimetres (A4 by default).
    pub page_width_mm: f32,

    /// Page height in millimetres.
    pub page_height_mm: f32,

    /// Left, right and top margin.
    pub margin_mm: f32,

    /// Content never extends below this distance from the page bottom.
    pub bottom_margin_mm: f32,

    /// Title font size in points.
    pub title_size: f32,

    /// Section heading font size in points.
    pub heading_size: f32,

    /// Subheading and table font size in points.
    pub subheading_size: f32,

    /// Body text font size in points.
    pub body_size: f32,

    /// Caption and disclaimer font size in points.
    pub caption_size: f32,

    /// Logo drawn in the top-left corner when the file exists.
    pub logo_path: Option<PathBuf>,

    /// Where the chart image is written while a report renders.
    /// Defaults to the system temp directory.
    pub scratch_dir: Option<PathBuf>,
}

impl ReportStyles {
    pub fn content_width_mm(&self) -> f32 {
        self.page_width_mm - 2.0 * self.margin_mm
    }

    pub fn scratch_dir(&self) -> PathBuf {
        self.scratch_dir.clone().unwrap_or_else(std::env::temp_dir)
    }
}

impl Default for ReportStyles {
    fn default() -> Self {
        Self {
            page_width_mm: 210.0,
            page_height_mm: 297.0,
            margin_mm: 10.0,
            bottom_margin_mm: 15.0,
            title_size: 16.0,
            heading_size: 13.0,
            subheading_size: 12.0,
            body_size: 11.0,
            caption_size: 10.0,
            logo_path: None,
            scratch_dir: None,
        }
    }
}
