use mindscope_core::models::interpretation::CategoryInterpretation;
use mindscope_core::models::report::{ChartSlot, ReportDocument, ReportSection};
use mindscope_core::models::respondent::ContactDetails;

/// Pages after the cover never exceed this count.
pub const MAX_CONTENT_PAGES: usize = 4;

/// Renderer-neutral building block of a page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    Title(String),
    Heading(String),
    Subheading(String),
    Paragraph(String),
    Field { label: String, value: String },
    Chart(ChartSlot),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    /// 1-based.
    pub number: usize,
    /// Titles of the sections laid out on this page, in order.
    pub sections: Vec<&'static str>,
    pub blocks: Vec<Block>,
}

/// Split a report into a cover page followed by at most
/// [`MAX_CONTENT_PAGES`] content pages, keeping section order.
pub fn paginate(doc: &ReportDocument) -> Vec<Page> {
    let (cover, rest) = match doc.sections.split_first() {
        Some((first, rest)) if matches!(first, ReportSection::Cover { .. }) => (Some(first), rest),
        _ => (None, doc.sections.as_slice()),
    };

    let mut pages = Vec::new();
    if let Some(cover) = cover {
        pages.push(page(1, std::slice::from_ref(cover)));
    }
    if !rest.is_empty() {
        let per_page = rest.len().div_ceil(MAX_CONTENT_PAGES);
        for chunk in rest.chunks(per_page) {
            pages.push(page(pages.len() + 1, chunk));
        }
    }
    pages
}

fn page(number: usize, sections: &[ReportSection]) -> Page {
    Page {
        number,
        sections: sections.iter().map(ReportSection::title).collect(),
        blocks: sections.iter().flat_map(section_blocks).collect(),
    }
}

pub fn section_blocks(section: &ReportSection) -> Vec<Block> {
    let mut blocks = Vec::new();
    match section {
        ReportSection::Cover {
            title,
            respondent,
            report_id,
            generated_at,
        } => {
            blocks.push(Block::Title(title.clone()));
            blocks.push(Block::Paragraph("Prepared for".to_string()));
            blocks.push(field("Name", &respondent.name));
            if let Some(org) = &respondent.organisation {
                blocks.push(field("Organisation", org));
            }
            blocks.push(field("Report ID", report_id.as_str()));
            blocks.push(field("Date", generated_at));
        }
        ReportSection::Disclaimer {
            paragraphs,
            contact,
        }
        | ReportSection::Closing {
            paragraphs,
            contact,
        } => {
            blocks.push(Block::Heading(section.title().to_string()));
            blocks.extend(paragraphs.iter().cloned().map(Block::Paragraph));
            blocks.push(Block::Subheading("Contact".to_string()));
            contact_blocks(contact, &mut blocks);
        }
        ReportSection::Personality { traits, chart } => {
            blocks.push(Block::Heading(section.title().to_string()));
            blocks.push(Block::Chart(chart.clone()));
            for t in traits {
                blocks.push(Block::Subheading(t.category.label().to_string()));
                result_blocks(t, max_for(chart, t), &mut blocks);
            }
        }
        ReportSection::Stress {
            result,
            max_score,
            chart,
        }
        | ReportSection::Resilience {
            result,
            max_score,
            chart,
        } => {
            blocks.push(Block::Heading(section.title().to_string()));
            blocks.push(Block::Chart(chart.clone()));
            result_blocks(result, *max_score, &mut blocks);
        }
        ReportSection::DecisionStyle { decision, chart } => {
            blocks.push(Block::Heading(section.title().to_string()));
            blocks.push(Block::Chart(chart.clone()));
            for axis in [&decision.rational, &decision.intuitive] {
                blocks.push(field(
                    axis.category.label(),
                    &format!("{} / {} ({})", axis.score, max_for(chart, axis), axis.band),
                ));
            }
            blocks.push(field("Style", decision.style.label()));
            blocks.extend(decision.narrative.iter().cloned().map(Block::Paragraph));
            for axis in [&decision.rational, &decision.intuitive] {
                blocks.extend(axis.narrative.iter().cloned().map(Block::Paragraph));
            }
        }
        ReportSection::SituationalJudgment { results, chart } => {
            blocks.push(Block::Heading(section.title().to_string()));
            blocks.push(Block::Chart(chart.clone()));
            for r in results {
                blocks.push(Block::Subheading(r.category.label().to_string()));
                result_blocks(r, max_for(chart, r), &mut blocks);
            }
        }
    }
    blocks
}

fn result_blocks(result: &CategoryInterpretation, max: u32, blocks: &mut Vec<Block>) {
    blocks.push(field("Score", &format!("{} / {max}", result.score)));
    blocks.push(field("Level", result.band.label()));
    blocks.extend(result.narrative.iter().cloned().map(Block::Paragraph));
}

fn contact_blocks(contact: &ContactDetails, blocks: &mut Vec<Block>) {
    blocks.push(field("Organisation", &contact.organisation));
    blocks.push(field("Email", &contact.email));
    if let Some(phone) = &contact.phone {
        blocks.push(field("Phone", phone));
    }
    if let Some(website) = &contact.website {
        blocks.push(field("Website", website));
    }
}

/// Scale ceiling for `result`, taken from the bar the assembler drew for it.
fn max_for(chart: &ChartSlot, result: &CategoryInterpretation) -> u32 {
    chart
        .bars()
        .iter()
        .find(|bar| bar.label == result.category.label())
        .map_or(0, |bar| bar.max)
}

fn field(label: &str, value: &str) -> Block {
    Block::Field {
        label: label.to_string(),
        value: value.to_string(),
    }
}
