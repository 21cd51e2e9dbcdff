//! PDF layout of rendered report markup.
//!
//! Positions are tracked as millimetres from the top of the page and
//! converted to PDF's bottom-left origin at draw time.

use std::io::BufWriter;

use printpdf::image_crate::{DynamicImage, GenericImageView};
use printpdf::{
    BuiltinFont, Color, Image, ImageTransform, IndirectFontRef, Line, Mm, PdfDocument,
    PdfDocumentReference, PdfLayerReference, Point, Rgb, TextMatrix,
};
use tracing::debug;

use crate::chart::{
    bar_center_fraction, value_fraction_from_top, CHART_WIDTH_PX, Y_TICKS,
};
use crate::error::ExportError;
use crate::markup::{parse, Block};
use crate::styles::ReportStyles;

const PT_TO_MM: f32 = 0.352_778;
const MM_PER_INCH: f32 = 25.4;

const BLACK: (u8, u8, u8) = (0, 0, 0);
const WATERMARK_GRAY: (u8, u8, u8) = (220, 220, 220);

const WATERMARK_TEXT: &str = "CONFIDENTIAL";
const CHART_TITLE: &str = "Mental Health Indicator Levels";
const CHART_BAR_LABELS: [&str; 3] = ["Stress", "Anxiety", "Depression"];

const CHART_X_MM: f32 = 40.0;
const CHART_WIDTH_MM: f32 = 120.0;
const LOGO_WIDTH_MM: f32 = 25.0;
const TABLE_COLUMN_MM: f32 = 60.0;

#[derive(Clone, Copy)]
enum Align {
    Left,
    Center,
}

#[derive(Clone, Copy)]
enum Face {
    Regular,
    Bold,
    Italic,
}

struct Fonts {
    regular: IndirectFontRef,
    bold: IndirectFontRef,
    italic: IndirectFontRef,
}

impl Fonts {
    fn get(&self, face: Face) -> &IndirectFontRef {
        match face {
            Face::Regular => &self.regular,
            Face::Bold => &self.bold,
            Face::Italic => &self.italic,
        }
    }
}

/// Generate the report PDF from rendered markup and the chart PNG.
pub fn generate_pdf(
    rendered: &str,
    chart_png: &[u8],
    styles: &ReportStyles,
) -> Result<Vec<u8>, ExportError> {
    let chart = decode_image(chart_png)?;
    let blocks = parse(rendered);

    let mut writer = PageWriter::new(styles)?;
    writer.watermark();
    writer.logo()?;

    for block in &blocks {
        match block {
            Block::Title(text) => {
                writer.line(text, Face::Bold, styles.title_size, 10.0, Align::Center)
            }
            Block::Subtitle(text) => {
                writer.line(text, Face::Regular, styles.body_size, 8.0, Align::Center)
            }
            Block::Heading(text) => {
                writer.gap(4.0);
                writer.line(text, Face::Bold, styles.heading_size, 10.0, Align::Left);
            }
            Block::Subheading(text) => {
                writer.gap(2.0);
                writer.line(text, Face::Bold, styles.subheading_size, 8.0, Align::Left);
            }
            Block::Paragraph(text) => writer.wrapped(text, Face::Regular, styles.body_size, 7.0),
            Block::Bullet(text) => {
                writer.wrapped(&format!("- {text}"), Face::Regular, styles.subheading_size, 7.0)
            }
            Block::Caption(text) => writer.wrapped(text, Face::Italic, styles.caption_size, 6.0),
            Block::TableRow { cells, header } => writer.table_row(cells, *header),
            Block::Chart => writer.chart(&chart),
            Block::Gap => writer.gap(3.0),
        }
    }

    debug!(pages = writer.pages, blocks = blocks.len(), "report laid out");
    writer.finish()
}

fn decode_image(bytes: &[u8]) -> Result<DynamicImage, ExportError> {
    let image = printpdf::image_crate::load_from_memory(bytes)
        .map_err(|e| ExportError::Image(e.to_string()))?;
    Ok(DynamicImage::ImageRgb8(image.to_rgb8()))
}

struct PageWriter<'a> {
    doc: PdfDocumentReference,
    layer: PdfLayerReference,
    fonts: Fonts,
    styles: &'a ReportStyles,
    /// Distance from the page top to the next free line, in mm.
    cursor: f32,
    pages: usize,
}

impl<'a> PageWriter<'a> {
    fn new(styles: &'a ReportStyles) -> Result<Self, ExportError> {
        let (doc, page, layer) = PdfDocument::new(
            "MindCare AI Report",
            Mm(styles.page_width_mm),
            Mm(styles.page_height_mm),
            "Layer 1",
        );
        let font = |f| doc.add_builtin_font(f).map_err(|e| ExportError::Pdf(e.to_string()));
        let fonts = Fonts {
            regular: font(BuiltinFont::Helvetica)?,
            bold: font(BuiltinFont::HelveticaBold)?,
            italic: font(BuiltinFont::HelveticaOblique)?,
        };
        let layer = doc.get_page(page).get_layer(layer);

        Ok(Self {
            doc,
            layer,
            fonts,
            styles,
            cursor: styles.margin_mm,
            pages: 1,
        })
    }

    fn finish(self) -> Result<Vec<u8>, ExportError> {
        let mut buf = BufWriter::new(Vec::new());
        self.doc
            .save(&mut buf)
            .map_err(|e| ExportError::Pdf(e.to_string()))?;
        buf.into_inner()
            .map_err(|e| ExportError::Pdf(e.to_string()))
    }

    fn bottom_limit(&self) -> f32 {
        self.styles.page_height_mm - self.styles.bottom_margin_mm
    }

    /// Start a new page if `height` mm would cross the bottom margin.
    fn reserve(&mut self, height: f32) {
        if self.cursor + height <= self.bottom_limit() {
            return;
        }
        let (page, layer) = self.doc.add_page(
            Mm(self.styles.page_width_mm),
            Mm(self.styles.page_height_mm),
            format!("Layer {}", self.pages + 1),
        );
        self.layer = self.doc.get_page(page).get_layer(layer);
        self.cursor = self.styles.margin_mm;
        self.pages += 1;
    }

    fn gap(&mut self, height: f32) {
        self.cursor = (self.cursor + height).min(self.bottom_limit());
    }

    fn to_pdf_y(&self, from_top: f32) -> Mm {
        Mm(self.styles.page_height_mm - from_top)
    }

    /// Draw one line of text at absolute coordinates (mm from top-left).
    fn text_at(&self, text: &str, face: Face, size: f32, x: f32, baseline: f32, color: (u8, u8, u8)) {
        self.layer.set_fill_color(rgb(color));
        self.layer
            .use_text(text, size, Mm(x), self.to_pdf_y(baseline), self.fonts.get(face));
    }

    /// A single-line cell `height` mm tall at the cursor.
    fn line(&mut self, text: &str, face: Face, size: f32, height: f32, align: Align) {
        self.reserve(height);
        let x = match align {
            Align::Left => self.styles.margin_mm,
            Align::Center => {
                let width = text_width_mm(text, size);
                self.styles.margin_mm + ((self.styles.content_width_mm() - width) / 2.0).max(0.0)
            }
        };
        self.text_at(text, face, size, x, baseline(self.cursor, height, size), BLACK);
        self.cursor += height;
    }

    /// Word-wrapped text across the content width, one `line_height` per line.
    fn wrapped(&mut self, text: &str, face: Face, size: f32, line_height: f32) {
        for line in wrap(text, size, self.styles.content_width_mm()) {
            self.line(&line, face, size, line_height, Align::Left);
        }
    }

    fn table_row(&mut self, cells: &[String], header: bool) {
        const ROW_HEIGHT: f32 = 8.0;
        const PADDING: f32 = 1.0;

        self.reserve(ROW_HEIGHT);
        let face = if header { Face::Bold } else { Face::Regular };
        let size = self.styles.subheading_size;
        let top = self.cursor;

        for (column, cell) in cells.iter().enumerate() {
            let left = self.styles.margin_mm + TABLE_COLUMN_MM * column as f32;
            self.rectangle(left, top, TABLE_COLUMN_MM, ROW_HEIGHT);
            self.text_at(
                cell,
                face,
                size,
                left + PADDING,
                baseline(top, ROW_HEIGHT, size),
                BLACK,
            );
        }
        self.cursor += ROW_HEIGHT;
    }

    fn chart(&mut self, chart: &DynamicImage) {
        let dpi = CHART_WIDTH_PX as f32 / (CHART_WIDTH_MM / MM_PER_INCH);
        let height = chart.height() as f32 / dpi * MM_PER_INCH;
        let title_height = 8.0;
        let label_height = 6.0;

        self.gap(5.0);
        self.reserve(title_height + height + label_height);

        let title_size = self.styles.subheading_size;
        let title_x =
            CHART_X_MM + ((CHART_WIDTH_MM - text_width_mm(CHART_TITLE, title_size)) / 2.0).max(0.0);
        self.text_at(
            CHART_TITLE,
            Face::Bold,
            title_size,
            title_x,
            baseline(self.cursor, title_height, title_size),
            BLACK,
        );
        self.cursor += title_height;

        let image_top = self.cursor;
        Image::from_dynamic_image(chart).add_to_layer(
            self.layer.clone(),
            ImageTransform {
                translate_x: Some(Mm(CHART_X_MM)),
                translate_y: Some(self.to_pdf_y(image_top + height)),
                dpi: Some(dpi),
                ..Default::default()
            },
        );

        let tick_size = self.styles.caption_size - 1.0;
        for tick in Y_TICKS {
            let label = tick.to_string();
            let y = image_top + height * value_fraction_from_top(tick);
            let x = CHART_X_MM - text_width_mm(&label, tick_size) - 1.0;
            self.text_at(&label, Face::Regular, tick_size, x, y + tick_size * PT_TO_MM / 3.0, BLACK);
        }

        let label_size = self.styles.caption_size;
        let label_baseline = baseline(image_top + height, label_height, label_size);
        for (index, label) in CHART_BAR_LABELS.iter().enumerate() {
            let centre = CHART_X_MM + CHART_WIDTH_MM * bar_center_fraction(index);
            let x = centre - text_width_mm(label, label_size) / 2.0;
            self.text_at(label, Face::Regular, label_size, x, label_baseline, BLACK);
        }

        self.cursor = image_top + height + label_height;
        self.gap(2.0);
    }

    fn rectangle(&self, left: f32, top: f32, width: f32, height: f32) {
        let corners = [
            (left, top),
            (left + width, top),
            (left + width, top + height),
            (left, top + height),
        ];
        self.layer.set_outline_color(rgb(BLACK));
        self.layer.set_outline_thickness(0.5);
        self.layer.add_line(Line {
            points: corners
                .iter()
                .map(|(x, y)| (Point::new(Mm(*x), self.to_pdf_y(*y)), false))
                .collect(),
            is_closed: true,
        });
    }

    fn watermark(&self) {
        let font = self.fonts.get(Face::Bold);
        self.layer.begin_text_section();
        self.layer.set_font(font, 40.0);
        self.layer.set_fill_color(rgb(WATERMARK_GRAY));
        self.layer.set_text_matrix(TextMatrix::TranslateRotate(
            Mm(30.0).into_pt(),
            self.to_pdf_y(190.0).into_pt(),
            45.0,
        ));
        self.layer.write_text(WATERMARK_TEXT, font);
        self.layer.end_text_section();
    }

    /// Draw the configured logo in the top-left corner. A missing file is
    /// skipped; an unreadable one is an error.
    fn logo(&self) -> Result<(), ExportError> {
        let Some(path) = self.styles.logo_path.as_deref() else {
            return Ok(());
        };
        if !path.exists() {
            debug!(path = %path.display(), "logo not found, skipping");
            return Ok(());
        }

        let logo = decode_image(&std::fs::read(path)?)?;
        let dpi = logo.width() as f32 / (LOGO_WIDTH_MM / MM_PER_INCH);
        let height = logo.height() as f32 / dpi * MM_PER_INCH;
        Image::from_dynamic_image(&logo).add_to_layer(
            self.layer.clone(),
            ImageTransform {
                translate_x: Some(Mm(self.styles.margin_mm)),
                translate_y: Some(self.to_pdf_y(8.0 + height)),
                dpi: Some(dpi),
                ..Default::default()
            },
        );
        Ok(())
    }
}

/// Baseline (mm from top) that vertically centres text of `size` points in
/// a cell starting at `top`.
fn baseline(top: f32, height: f32, size: f32) -> f32 {
    top + (height + size * PT_TO_MM * 0.7) / 2.0
}

fn rgb((r, g, b): (u8, u8, u8)) -> Color {
    Color::Rgb(Rgb::new(
        f32::from(r) / 255.0,
        f32::from(g) / 255.0,
        f32::from(b) / 255.0,
        None,
    ))
}

/// Approximate Helvetica advance width in ems.
fn glyph_em(c: char) -> f32 {
    match c {
        'i' | 'j' | 'l' | '.' | ',' | ':' | ';' | '\'' | '!' | '|' => 0.25,
        ' ' | 'f' | 't' | 'r' | 'I' | '-' | '(' | ')' | '/' => 0.33,
        'm' | 'w' | 'M' | 'W' => 0.85,
        c if c.is_ascii_uppercase() => 0.68,
        c if c.is_ascii_digit() => 0.556,
        _ => 0.52,
    }
}

pub fn text_width_mm(text: &str, size: f32) -> f32 {
    text.chars().map(glyph_em).sum::<f32>() * size * PT_TO_MM
}

/// Greedy word wrap to `width` mm. A single word wider than the line is
/// placed on its own line rather than split.
pub fn wrap(text: &str, size: f32, width: f32) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let candidate = if current.is_empty() {
            word.to_string()
        } else {
            format!("{current} {word}")
        };
        if text_width_mm(&candidate, size) <= width || current.is_empty() {
            current = candidate;
        } else {
            lines.push(std::mem::replace(&mut current, word.to_string()));
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}
