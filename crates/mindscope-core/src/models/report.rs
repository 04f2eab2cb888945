use std::fmt;
use std::str::FromStr;

use rand::Rng;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::instrument::Instrument;
use super::interpretation::{CategoryInterpretation, DecisionInterpretation};
use super::respondent::{ContactDetails, Respondent};
use super::scores::ScoreRecord;
use crate::error::CoreError;

/// Human-facing report identifier of the form `ABC-1234-5678`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(transparent)]
#[ts(export)]
pub struct ReportId(String);

impl ReportId {
    /// Draw a fresh identifier. Not checked for collisions.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let letters: String = (0..3)
            .map(|_| char::from(rng.gen_range(b'A'..=b'Z')))
            .collect();
        let first: u16 = rng.gen_range(0..10_000);
        let second: u16 = rng.gen_range(0..10_000);
        Self(format!("{letters}-{first:04}-{second:04}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn is_well_formed(s: &str) -> bool {
        let bytes = s.as_bytes();
        bytes.len() == 13
            && bytes[..3].iter().all(u8::is_ascii_uppercase)
            && bytes[3] == b'-'
            && bytes[4..8].iter().all(u8::is_ascii_digit)
            && bytes[8] == b'-'
            && bytes[9..].iter().all(u8::is_ascii_digit)
    }
}

impl FromStr for ReportId {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if Self::is_well_formed(s) {
            Ok(Self(s.to_string()))
        } else {
            Err(CoreError::InvalidReportId(s.to_string()))
        }
    }
}

impl fmt::Display for ReportId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// An opaque, externally rendered chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ChartImage {
    /// MIME type, e.g. `image/png` or `image/svg+xml`.
    pub media_type: String,
    pub width_px: u32,
    pub height_px: u32,
    pub bytes: Vec<u8>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ChartBar {
    pub label: String,
    pub value: u32,
    pub max: u32,
}

/// Either a rendered chart or the bars a renderer can draw as text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(tag = "kind", rename_all = "snake_case")]
#[ts(export)]
pub enum ChartSlot {
    Image { image: ChartImage, bars: Vec<ChartBar> },
    Fallback { bars: Vec<ChartBar> },
}

impl ChartSlot {
    pub fn bars(&self) -> &[ChartBar] {
        match self {
            ChartSlot::Image { bars, .. } | ChartSlot::Fallback { bars } => bars,
        }
    }

    pub fn image(&self) -> Option<&ChartImage> {
        match self {
            ChartSlot::Image { image, .. } => Some(image),
            ChartSlot::Fallback { .. } => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(tag = "section", rename_all = "snake_case")]
#[ts(export)]
pub enum ReportSection {
    Cover {
        title: String,
        respondent: Respondent,
        report_id: ReportId,
        generated_at: String,
    },
    Disclaimer {
        paragraphs: Vec<String>,
        contact: ContactDetails,
    },
    Personality {
        traits: Vec<CategoryInterpretation>,
        chart: ChartSlot,
    },
    Stress {
        result: CategoryInterpretation,
        max_score: u32,
        chart: ChartSlot,
    },
    DecisionStyle {
        decision: DecisionInterpretation,
        chart: ChartSlot,
    },
    Resilience {
        result: CategoryInterpretation,
        max_score: u32,
        chart: ChartSlot,
    },
    SituationalJudgment {
        results: Vec<CategoryInterpretation>,
        chart: ChartSlot,
    },
    Closing {
        paragraphs: Vec<String>,
        contact: ContactDetails,
    },
}

impl ReportSection {
    pub fn instrument(&self) -> Option<Instrument> {
        match self {
            ReportSection::Personality { .. } => Some(Instrument::BigFive),
            ReportSection::Stress { .. } => Some(Instrument::PerceivedStress),
            ReportSection::DecisionStyle { .. } => Some(Instrument::DecisionStyle),
            ReportSection::Resilience { .. } => Some(Instrument::Resilience),
            ReportSection::SituationalJudgment { .. } => Some(Instrument::SituationalJudgment),
            ReportSection::Cover { .. }
            | ReportSection::Disclaimer { .. }
            | ReportSection::Closing { .. } => None,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            ReportSection::Cover { .. } => "Psychometric Assessment Report",
            ReportSection::Disclaimer { .. } => "About This Report",
            ReportSection::Closing { .. } => "Next Steps",
            other => other.instrument().map(Instrument::name).unwrap_or_default(),
        }
    }

    pub fn chart(&self) -> Option<&ChartSlot> {
        match self {
            ReportSection::Personality { chart, .. }
            | ReportSection::Stress { chart, .. }
            | ReportSection::DecisionStyle { chart, .. }
            | ReportSection::Resilience { chart, .. }
            | ReportSection::SituationalJudgment { chart, .. } => Some(chart),
            _ => None,
        }
    }

    fn chart_mut(&mut self) -> Option<&mut ChartSlot> {
        match self {
            ReportSection::Personality { chart, .. }
            | ReportSection::Stress { chart, .. }
            | ReportSection::DecisionStyle { chart, .. }
            | ReportSection::Resilience { chart, .. }
            | ReportSection::SituationalJudgment { chart, .. } => Some(chart),
            _ => None,
        }
    }
}

/// The assembled, render-ready report for one completed session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ReportDocument {
    pub report_id: ReportId,
    /// Generation date, `DD-MM-YYYY`.
    pub generated_at: String,
    pub respondent: Respondent,
    pub scores: ScoreRecord,
    pub sections: Vec<ReportSection>,
}

impl ReportDocument {
    pub fn section(&self, instrument: Instrument) -> Option<&ReportSection> {
        self.sections
            .iter()
            .find(|s| s.instrument() == Some(instrument))
    }

    /// Swap a rendered chart into the section for `instrument`.
    ///
    /// Returns `false` if the document has no such section. Scores and
    /// narrative are untouched.
    pub fn attach_chart(&mut self, instrument: Instrument, image: ChartImage) -> bool {
        let Some(slot) = self
            .sections
            .iter_mut()
            .find(|s| s.instrument() == Some(instrument))
            .and_then(ReportSection::chart_mut)
        else {
            return false;
        };
        let bars = slot.bars().to_vec();
        *slot = ChartSlot::Image { image, bars };
        true
    }
}
