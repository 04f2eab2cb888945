use serde::{Deserialize, Serialize};

/// Visual settings for rendered reports.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentStyles {
    pub body_font: String,
    pub heading_font: String,
    /// Used for text-bar chart fallbacks so the bars line up.
    pub mono_font: String,

    /// Sizes in points.
    pub body_size: usize,
    pub title_size: usize,
    pub heading_size: usize,
    pub subheading_size: usize,

    /// Hex RGB without `#`, applied to titles and headings.
    pub accent_color: String,

    /// Page margin in inches (applied uniformly).
    pub margin_inches: f64,

    /// Printed width of embedded chart images; height keeps the aspect ratio.
    pub chart_width_inches: f64,
}

impl Default for DocumentStyles {
    fn default() -> Self {
        Self {
            body_font: "Calibri".to_string(),
            heading_font: "Calibri".to_string(),
            mono_font: "Courier New".to_string(),
            body_size: 11,
            title_size: 26,
            heading_size: 16,
            subheading_size: 12,
            accent_color: "2E6F9E".to_string(),
            margin_inches: 1.0,
            chart_width_inches: 6.0,
        }
    }
}

impl DocumentStyles {
    pub fn margin_twips(&self) -> i32 {
        (self.margin_inches * 1440.0).round() as i32
    }

    /// Width and height in EMU for an image of the given pixel size.
    pub fn chart_extent_emu(&self, width_px: u32, height_px: u32) -> (u32, u32) {
        let width = (self.chart_width_inches * 914_400.0).round() as u32;
        if width_px == 0 {
            return (width, 0);
        }
        let height = (u64::from(width) * u64::from(height_px) / u64::from(width_px)) as u32;
        (width, height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chart_extent_keeps_aspect_ratio() {
        let styles = DocumentStyles::default();
        let (w, h) = styles.chart_extent_emu(600, 300);
        assert_eq!(w, 6 * 914_400);
        assert_eq!(h, 3 * 914_400);
        assert_eq!(styles.margin_twips(), 1440);
    }
}
