use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use mindscope_core::models::instrument::{Category, Instrument};
use mindscope_core::models::report::{ChartBar, ChartImage, ReportDocument};
use mindscope_core::models::respondent::{ContactDetails, Respondent};
use mindscope_export::assemble::{ReportInput, assemble_report, assemble_report_with};
use mindscope_export::chart::{ChartRenderer, PNG_MEDIA_TYPE, PngChartRenderer, attach_charts};
use mindscope_export::docx::generate_docx;
use mindscope_export::error::ExportError;
use mindscope_export::layout::{MAX_CONTENT_PAGES, paginate};
use mindscope_export::render::render_summary;
use mindscope_export::styles::DocumentStyles;
use mindscope_instruments::catalog::catalog;
use mindscope_instruments::session::Session;
use rand::SeedableRng;
use rand::rngs::StdRng;

fn contact() -> ContactDetails {
    ContactDetails {
        organisation: "Mindscope Assessments".to_string(),
        email: "results@mindscope.test".to_string(),
        phone: Some("+44 20 7946 0000".to_string()),
        website: None,
    }
}

fn completed_report() -> ReportDocument {
    let mut session = Session::new(
        Respondent {
            name: "Alex Morgan".to_string(),
            email: Some("alex@example.com".to_string()),
            organisation: Some("Northwind".to_string()),
        },
        Arc::new(catalog().clone()),
    );
    let questions: Vec<_> = session.catalog().questions().cloned().collect();
    for q in &questions {
        let value = match q.category {
            Category::Intuitive => 5,
            Category::Rational => 1,
            _ => q.scale.max,
        };
        session.record_answer(q.ordinal_position, &q.id, value).unwrap();
    }
    let done = session.complete().unwrap();
    assemble_report_with(
        ReportInput::from_completed(done, contact()),
        &mut StdRng::seed_from_u64(42),
        jiff::civil::date(2026, 10, 16),
    )
}

struct FailingRenderer;

#[async_trait]
impl ChartRenderer for FailingRenderer {
    async fn render(&self, instrument: Instrument, _bars: &[ChartBar]) -> Result<ChartImage, ExportError> {
        Err(ExportError::Chart {
            instrument,
            reason: "renderer offline".to_string(),
        })
    }
}

struct SlowRenderer;

#[async_trait]
impl ChartRenderer for SlowRenderer {
    async fn render(&self, instrument: Instrument, bars: &[ChartBar]) -> Result<ChartImage, ExportError> {
        tokio::time::sleep(Duration::from_secs(5)).await;
        PngChartRenderer::default().render(instrument, bars).await
    }
}

/// 1x1 transparent PNG.
const PIXEL_PNG: &[u8] = &[
    0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, 0x00, 0x00, 0x00, 0x0D, 0x49, 0x48, 0x44, 0x52,
    0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x01, 0x08, 0x06, 0x00, 0x00, 0x00, 0x1F, 0x15, 0xC4,
    0x89, 0x00, 0x00, 0x00, 0x0A, 0x49, 0x44, 0x41, 0x54, 0x78, 0x9C, 0x63, 0x00, 0x01, 0x00, 0x00,
    0x05, 0x00, 0x01, 0x0D, 0x0A, 0x2D, 0xB4, 0x00, 0x00, 0x00, 0x00, 0x49, 0x45, 0x4E, 0x44, 0xAE,
    0x42, 0x60, 0x82,
];

struct PngRenderer;

#[async_trait]
impl ChartRenderer for PngRenderer {
    async fn render(&self, _instrument: Instrument, _bars: &[ChartBar]) -> Result<ChartImage, ExportError> {
        Ok(ChartImage {
            media_type: PNG_MEDIA_TYPE.to_string(),
            width_px: 1,
            height_px: 1,
            bytes: PIXEL_PNG.to_vec(),
        })
    }
}

#[test]
fn report_uses_completed_scores() {
    let doc = completed_report();
    assert_eq!(doc.generated_at, "16-10-2026");
    assert_eq!(doc.respondent.name, "Alex Morgan");
    assert_eq!(doc.scores.decision.intuitive, 25);
    assert_eq!(doc.scores.decision.rational, 5);
    assert_eq!(doc.scores.resilience, 100);
    assert_eq!(doc.sections.len(), 8);
}

#[test]
fn default_assembly_draws_a_fresh_id() {
    let input = ReportInput::new(
        Respondent {
            name: "Pat".to_string(),
            email: None,
            organisation: None,
        },
        Default::default(),
        contact(),
    );
    let doc = assemble_report(input);
    assert_eq!(doc.report_id.as_str().len(), 13);
    assert_eq!(doc.generated_at.len(), 10);
}

#[tokio::test]
async fn rendered_charts_attach_to_every_instrument() {
    let mut doc = completed_report();
    let attached = attach_charts(&mut doc, &PngChartRenderer::default(), Duration::from_secs(1)).await;
    assert_eq!(attached, Instrument::ALL.len());
    for instrument in Instrument::ALL {
        let chart = doc.section(instrument).and_then(|s| s.chart()).unwrap();
        assert!(chart.image().is_some(), "{instrument}");
        assert!(!chart.bars().is_empty(), "{instrument}");
    }
}

#[tokio::test]
async fn failing_renderer_keeps_text_fallback() {
    let mut doc = completed_report();
    let before = doc.clone();
    let attached = attach_charts(&mut doc, &FailingRenderer, Duration::from_secs(1)).await;
    assert_eq!(attached, 0);
    assert_eq!(doc, before);
}

#[tokio::test(start_paused = true)]
async fn slow_renderer_times_out() {
    let mut doc = completed_report();
    let attached = attach_charts(&mut doc, &SlowRenderer, Duration::from_millis(50)).await;
    assert_eq!(attached, 0);
    assert!(doc.section(Instrument::Resilience).and_then(|s| s.chart()).and_then(|c| c.image()).is_none());
}

#[test]
fn pages_are_cover_plus_capped_content() {
    let doc = completed_report();
    let pages = paginate(&doc);
    assert_eq!(pages.len(), 1 + MAX_CONTENT_PAGES);
    assert_eq!(pages[0].sections, ["Psychometric Assessment Report"]);

    let order: Vec<_> = pages.iter().flat_map(|p| p.sections.iter().copied()).collect();
    let expected: Vec<_> = doc.sections.iter().map(|s| s.title()).collect();
    assert_eq!(order, expected);
}

#[test]
fn docx_output_is_a_zip_package() {
    let doc = completed_report();
    let bytes = generate_docx(&doc, &DocumentStyles::default()).unwrap();
    assert!(bytes.starts_with(b"PK"));
    assert!(bytes.windows(17).any(|w| w == b"word/document.xml"));
}

#[tokio::test]
async fn docx_embeds_png_charts() {
    let mut doc = completed_report();
    attach_charts(&mut doc, &PngRenderer, Duration::from_secs(1)).await;
    let bytes = generate_docx(&doc, &DocumentStyles::default()).unwrap();
    assert!(bytes.starts_with(b"PK"));
    assert!(bytes.windows(11).any(|w| w == b"word/media/"));
}

#[tokio::test]
async fn built_in_renderer_charts_reach_the_docx() {
    let mut doc = completed_report();
    let attached = attach_charts(&mut doc, &PngChartRenderer::default(), Duration::from_secs(1)).await;
    assert_eq!(attached, Instrument::ALL.len());
    let bytes = generate_docx(&doc, &DocumentStyles::default()).unwrap();
    assert!(bytes.windows(11).any(|w| w == b"word/media/"));
}

#[test]
fn summary_lists_results_in_report_order() {
    let doc = completed_report();
    let text = render_summary(&doc).unwrap();

    assert!(text.contains("Prepared for: Alex Morgan"));
    assert!(text.contains(doc.report_id.as_str()));
    assert!(text.contains("Date: 16-10-2026"));
    assert!(text.contains("Style: Dominant Intuitive Style"));
    assert!(text.contains("Resilience ####################"));

    let stress = text.find("## Perceived Stress").unwrap();
    let decision = text.find("## Decision-Making Style").unwrap();
    let closing = text.find("## Next Steps").unwrap();
    assert!(stress < decision && decision < closing);
}
