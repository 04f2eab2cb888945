use std::time::Duration;

use async_trait::async_trait;
use mindscope_core::models::instrument::Instrument;
use mindscope_core::models::report::{ChartBar, ChartImage, ReportDocument, ReportSection};

use crate::error::ExportError;

pub const PNG_MEDIA_TYPE: &str = "image/png";

/// Draws the bars of one report section into an image.
#[async_trait]
pub trait ChartRenderer: Send + Sync {
    async fn render(
        &self,
        instrument: Instrument,
        bars: &[ChartBar],
    ) -> Result<ChartImage, ExportError>;
}

/// Horizontal bar charts rasterised to PNG. One bar per row, filled in
/// proportion to `value / max`; labels are captioned by the document.
#[derive(Debug, Clone)]
pub struct PngChartRenderer {
    pub width_px: u32,
    pub bar_height_px: u32,
    pub gap_px: u32,
    pub background: [u8; 3],
    pub bar_color: [u8; 3],
    pub track_color: [u8; 3],
}

impl Default for PngChartRenderer {
    fn default() -> Self {
        Self {
            width_px: 560,
            bar_height_px: 28,
            gap_px: 12,
            background: [0xFF, 0xFF, 0xFF],
            bar_color: [0x2E, 0x6F, 0x9E],
            track_color: [0xE3, 0xE8, 0xEE],
        }
    }
}

impl PngChartRenderer {
    pub fn height_px(&self, bar_count: usize) -> u32 {
        let n = bar_count as u32;
        2 * self.gap_px + n * self.bar_height_px + n.saturating_sub(1) * self.gap_px
    }

    fn track_width(&self) -> u32 {
        self.width_px.saturating_sub(2 * self.gap_px)
    }

    /// Top row of the bar at `index`.
    fn bar_top(&self, index: usize) -> u32 {
        self.gap_px + index as u32 * (self.bar_height_px + self.gap_px)
    }

    /// RGB8 pixels, row-major from the top-left corner.
    pub fn raster(&self, bars: &[ChartBar]) -> Vec<u8> {
        let height = self.height_px(bars.len());
        let track_width = self.track_width();
        let mut pixels = self.background.repeat((self.width_px * height) as usize);

        for (i, bar) in bars.iter().enumerate() {
            let filled = if bar.max == 0 {
                0
            } else {
                track_width * bar.value.min(bar.max) / bar.max
            };
            let top = self.bar_top(i);
            for y in top..top + self.bar_height_px {
                for x in 0..track_width {
                    let color = if x < filled { self.bar_color } else { self.track_color };
                    let at = ((y * self.width_px + self.gap_px + x) * 3) as usize;
                    pixels[at..at + 3].copy_from_slice(&color);
                }
            }
        }
        pixels
    }

    pub fn png(&self, bars: &[ChartBar]) -> Result<Vec<u8>, png::EncodingError> {
        let mut out = Vec::new();
        let mut encoder = png::Encoder::new(&mut out, self.width_px, self.height_px(bars.len()));
        encoder.set_color(png::ColorType::Rgb);
        encoder.set_depth(png::BitDepth::Eight);
        let mut writer = encoder.write_header()?;
        writer.write_image_data(&self.raster(bars))?;
        writer.finish()?;
        Ok(out)
    }
}

#[async_trait]
impl ChartRenderer for PngChartRenderer {
    async fn render(
        &self,
        instrument: Instrument,
        bars: &[ChartBar],
    ) -> Result<ChartImage, ExportError> {
        if bars.is_empty() {
            return Err(ExportError::Chart {
                instrument,
                reason: "no bars to draw".to_string(),
            });
        }
        let bytes = self.png(bars).map_err(|e| ExportError::Chart {
            instrument,
            reason: e.to_string(),
        })?;
        Ok(ChartImage {
            media_type: PNG_MEDIA_TYPE.to_string(),
            width_px: self.width_px,
            height_px: self.height_px(bars.len()),
            bytes,
        })
    }
}

/// Render a chart for every instrument section and swap it in.
///
/// A renderer error or timeout leaves that section's text fallback in
/// place; the document is always usable afterwards. Returns the number of
/// charts attached.
pub async fn attach_charts(
    doc: &mut ReportDocument,
    renderer: &dyn ChartRenderer,
    timeout: Duration,
) -> usize {
    let pending: Vec<(Instrument, Vec<ChartBar>)> = doc
        .sections
        .iter()
        .filter_map(|s| Some((s.instrument()?, s.chart()?.bars().to_vec())))
        .collect();

    let mut attached = 0;
    for (instrument, bars) in pending {
        let result = match tokio::time::timeout(timeout, renderer.render(instrument, &bars)).await {
            Ok(result) => result,
            Err(_) => Err(ExportError::ChartTimeout {
                instrument,
                timeout_ms: timeout.as_millis() as u64,
            }),
        };
        match result {
            Ok(image) => {
                if doc.attach_chart(instrument, image) {
                    attached += 1;
                }
            }
            Err(e) => {
                tracing::warn!(
                    report_id = %doc.report_id,
                    %instrument,
                    error = %e,
                    "chart rendering failed, keeping text fallback"
                );
            }
        }
    }
    attached
}

/// One bar as a fixed-width text line, e.g. `Openness ######---- 6/10`.
pub fn text_bar(bar: &ChartBar, label_width: usize, cells: usize) -> String {
    let filled = if bar.max == 0 {
        0
    } else {
        (bar.value.min(bar.max) as usize * cells).div_ceil(bar.max as usize)
    };
    format!(
        "{label:<label_width$} {fill}{empty} {value}/{max}",
        label = bar.label,
        fill = "#".repeat(filled),
        empty = "-".repeat(cells - filled),
        value = bar.value,
        max = bar.max,
    )
}

/// Text rendering of a bar list, labels aligned.
pub fn text_bars(bars: &[ChartBar]) -> Vec<String> {
    let label_width = bars
        .iter()
        .map(|b| b.label.chars().count())
        .max()
        .unwrap_or(0);
    bars.iter().map(|b| text_bar(b, label_width, 20)).collect()
}

/// Text rendering of a section's chart; empty for sections without one.
pub fn text_chart(section: &ReportSection) -> Vec<String> {
    section
        .chart()
        .map(|chart| text_bars(chart.bars()))
        .unwrap_or_default()
}

/// One-line legend for an image chart, bars in drawing order.
pub fn chart_caption(bars: &[ChartBar]) -> String {
    bars.iter()
        .map(|b| format!("{} {}/{}", b.label, b.value, b.max))
        .collect::<Vec<_>>()
        .join("   ")
}
