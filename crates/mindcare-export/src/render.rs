use tera::{Context, Tera};

use crate::context::ReportContext;
use crate::error::ExportError;

const REPORT_TEMPLATE: &str = include_str!("../templates/report.md.tera");

/// Render a Tera template with a report context.
///
/// The `template_content` is the raw template string (Jinja2 syntax). The
/// context fields become the template variables.
pub fn render_template(
    template_name: &str,
    template_content: &str,
    context: &ReportContext,
) -> Result<String, ExportError> {
    let mut tera = Tera::default();
    tera.add_raw_template(template_name, template_content)
        .map_err(|e| ExportError::TemplateParse(e.to_string()))?;

    let context = Context::from_serialize(context)
        .map_err(|e| ExportError::TemplateRender(e.to_string()))?;

    let rendered = tera.render(template_name, &context)?;
    Ok(rendered)
}

/// Render the built-in report layout to markup.
pub fn render_report(context: &ReportContext) -> Result<String, ExportError> {
    render_template("report.md", REPORT_TEMPLATE, context)
}
