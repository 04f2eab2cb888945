use mindscope_core::models::report::{ReportDocument, ReportSection};
use serde::Serialize;
use tera::{Context, Tera};

use crate::chart::text_chart;
use crate::error::ExportError;
use crate::layout::{Block, section_blocks};

pub const SUMMARY_TEMPLATE_NAME: &str = "summary.md";

/// Plain-text summary used for email bodies and the text preview.
pub const SUMMARY_TEMPLATE: &str = r#"# {{ title }}

Prepared for: {{ respondent }}
Report ID: {{ report_id }}
Date: {{ generated_at }}
{% for section in sections %}
## {{ section.title }}
{% for line in section.bars %}
    {{ line }}
{%- endfor %}
{% for field in section.fields %}
- {{ field }}
{%- endfor %}
{% for paragraph in section.paragraphs %}
{{ paragraph }}
{% endfor %}
{%- endfor %}
"#;

#[derive(Debug, Serialize)]
struct SummaryView<'a> {
    title: &'static str,
    respondent: &'a str,
    report_id: &'a str,
    generated_at: &'a str,
    sections: Vec<SectionView>,
}

#[derive(Debug, Serialize)]
struct SectionView {
    title: &'static str,
    bars: Vec<String>,
    fields: Vec<String>,
    paragraphs: Vec<String>,
}

/// Render a Tera template against a report document.
///
/// The template sees `title`, `respondent`, `report_id`, `generated_at`
/// and `sections`, where each section has `title`, `bars` (text bar
/// lines), `fields` (`Label: value` lines) and `paragraphs`.
pub fn render_template(
    template_name: &str,
    template_content: &str,
    doc: &ReportDocument,
) -> Result<String, ExportError> {
    let mut tera = Tera::default();
    tera.add_raw_template(template_name, template_content)
        .map_err(|e| ExportError::TemplateParse(e.to_string()))?;

    let value = serde_json::to_value(summary_view(doc))?;
    let context =
        Context::from_value(value).map_err(|e| ExportError::TemplateRender(e.to_string()))?;

    let rendered = tera.render(template_name, &context)?;
    Ok(rendered)
}

pub fn render_summary(doc: &ReportDocument) -> Result<String, ExportError> {
    render_template(SUMMARY_TEMPLATE_NAME, SUMMARY_TEMPLATE, doc)
}

fn summary_view(doc: &ReportDocument) -> SummaryView<'_> {
    SummaryView {
        title: "Psychometric Assessment Report",
        respondent: &doc.respondent.name,
        report_id: doc.report_id.as_str(),
        generated_at: &doc.generated_at,
        sections: doc
            .sections
            .iter()
            .filter(|s| !matches!(s, ReportSection::Cover { .. }))
            .map(section_view)
            .collect(),
    }
}

fn section_view(section: &ReportSection) -> SectionView {
    let mut fields = Vec::new();
    let mut paragraphs = Vec::new();
    for block in section_blocks(section) {
        match block {
            Block::Field { label, value } => fields.push(format!("{label}: {value}")),
            Block::Subheading(text) => fields.push(text),
            Block::Paragraph(text) => paragraphs.push(text),
            Block::Title(_) | Block::Heading(_) | Block::Chart(_) => {}
        }
    }
    SectionView {
        title: section.title(),
        bars: text_chart(section),
        fields,
        paragraphs,
    }
}
