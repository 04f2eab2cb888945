use std::io::Cursor;

use docx_rs::{
    AlignmentType, BreakType, Docx, PageMargin, Paragraph, Pic, Run, RunFonts, Style, StyleType,
};
use mindscope_core::models::report::{ChartSlot, ReportDocument};

use crate::chart::{PNG_MEDIA_TYPE, chart_caption, text_bars};
use crate::error::ExportError;
use crate::layout::{Block, paginate};
use crate::styles::DocumentStyles;

/// Render a report document to DOCX bytes.
///
/// The document is laid out with [`paginate`]: the cover, then one page
/// break before every content page. PNG charts are embedded as pictures;
/// any other chart media (and missing charts) are drawn as monospaced text
/// bars.
pub fn generate_docx(doc: &ReportDocument, styles: &DocumentStyles) -> Result<Vec<u8>, ExportError> {
    let margin = styles.margin_twips();
    let mut docx = Docx::new()
        .page_margin(
            PageMargin::new()
                .top(margin)
                .bottom(margin)
                .left(margin)
                .right(margin),
        )
        .add_style(heading_style("Title", "title", styles.title_size))
        .add_style(heading_style("Heading1", "heading 1", styles.heading_size))
        .add_style(heading_style("Heading2", "heading 2", styles.subheading_size));

    for page in paginate(doc) {
        if page.number > 1 {
            docx = docx.add_paragraph(Paragraph::new().add_run(Run::new().add_break(BreakType::Page)));
        }
        for block in &page.blocks {
            for paragraph in block_paragraphs(block, styles) {
                docx = docx.add_paragraph(paragraph);
            }
        }
    }

    let mut buf = Cursor::new(Vec::new());
    docx.build()
        .pack(&mut buf)
        .map_err(|e| ExportError::Docx(e.to_string()))?;

    tracing::debug!(report_id = %doc.report_id, bytes = buf.get_ref().len(), "docx generated");
    Ok(buf.into_inner())
}

fn block_paragraphs(block: &Block, styles: &DocumentStyles) -> Vec<Paragraph> {
    match block {
        Block::Title(text) => vec![
            heading_paragraph(text, "Title", styles.title_size, styles).align(AlignmentType::Center),
        ],
        Block::Heading(text) => vec![heading_paragraph(text, "Heading1", styles.heading_size, styles)],
        Block::Subheading(text) => {
            vec![heading_paragraph(text, "Heading2", styles.subheading_size, styles)]
        }
        Block::Paragraph(text) => vec![
            Paragraph::new()
                .align(AlignmentType::Both)
                .add_run(body_run(text, styles)),
        ],
        Block::Field { label, value } => vec![
            Paragraph::new()
                .add_run(body_run(&format!("{label}: "), styles).bold())
                .add_run(body_run(value, styles)),
        ],
        Block::Chart(slot) => chart_paragraphs(slot, styles),
    }
}

fn chart_paragraphs(slot: &ChartSlot, styles: &DocumentStyles) -> Vec<Paragraph> {
    if let Some(image) = slot.image()
        && image.media_type == PNG_MEDIA_TYPE
    {
        let (w, h) = styles.chart_extent_emu(image.width_px, image.height_px);
        let pic = Pic::new_with_dimensions(image.bytes.clone(), image.width_px, image.height_px)
            .size(w, h);
        return vec![
            Paragraph::new()
                .align(AlignmentType::Center)
                .add_run(Run::new().add_image(pic)),
            Paragraph::new()
                .align(AlignmentType::Center)
                .add_run(body_run(&chart_caption(slot.bars()), styles).italic()),
        ];
    }

    text_bars(slot.bars())
        .into_iter()
        .map(|line| {
            Paragraph::new().add_run(
                Run::new()
                    .add_text(line)
                    .size(styles.body_size * 2)
                    .fonts(RunFonts::new().ascii(&styles.mono_font)),
            )
        })
        .collect()
}

fn heading_style(style_id: &str, name: &str, size_pt: usize) -> Style {
    Style::new(style_id, StyleType::Paragraph)
        .name(name)
        .size(size_pt * 2) // OOXML uses half-points
}

fn heading_paragraph(text: &str, style_id: &str, size_pt: usize, styles: &DocumentStyles) -> Paragraph {
    Paragraph::new().style(style_id).add_run(
        Run::new()
            .add_text(text)
            .bold()
            .size(size_pt * 2)
            .color(&styles.accent_color)
            .fonts(RunFonts::new().ascii(&styles.heading_font)),
    )
}

fn body_run(text: &str, styles: &DocumentStyles) -> Run {
    Run::new()
        .add_text(text)
        .size(styles.body_size * 2)
        .fonts(RunFonts::new().ascii(&styles.body_font))
}
