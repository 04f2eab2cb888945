//! mindscope-instruments
//!
//! Questionnaire definitions and the pure scoring pipeline. No I/O.
//! Defines the question catalog for each instrument, the response ledger a
//! session writes into, and the rules that turn answers into scores and
//! scores into banded interpretations.

pub mod catalog;
pub mod error;
pub mod instruments;
pub mod interpretation;
pub mod ledger;
pub mod narrative;
pub mod scoring;
pub mod session;

use mindscope_core::models::instrument::{Category, Instrument};
use mindscope_core::models::question::{CatalogEntry, Question, ResponseScale, SectionMarker};

/// A single questionnaire item as authored.
#[derive(Debug, Clone, Copy)]
pub struct Item {
    pub id: &'static str,
    pub category: Category,
    pub reversed: bool,
    pub text: &'static str,
    /// Per-item option labels. Empty means the instrument's default scale
    /// labels apply.
    pub options: &'static [&'static str],
}

/// Trait implemented by each psychometric instrument.
pub trait InstrumentDefinition: Send + Sync {
    fn instrument(&self) -> Instrument;

    /// Human-readable name (e.g., "Perceived Stress").
    fn name(&self) -> &str {
        self.instrument().name()
    }

    /// Title of the section marker that opens this instrument.
    fn section_title(&self) -> &str;

    /// The response scale every item of this instrument uses.
    fn scale(&self) -> ResponseScale;

    /// Items in administration order.
    fn items(&self) -> &[Item];

    /// Section marker followed by one question per item. Positions and
    /// display numbers are assigned when the catalog is built.
    fn entries(&self) -> Vec<CatalogEntry> {
        let scale = self.scale();
        let mut entries = Vec::with_capacity(self.items().len() + 1);
        entries.push(CatalogEntry::Section(SectionMarker {
            id: format!("section_{}", section_slug(self.instrument())),
            title: self.section_title().to_string(),
        }));
        for item in self.items() {
            let scale = if item.options.is_empty() {
                scale.clone()
            } else {
                ResponseScale::with_labels(scale.min, scale.max, item.options)
            };
            entries.push(CatalogEntry::Question(Question {
                id: item.id.to_string(),
                instrument: self.instrument(),
                category: item.category,
                reversed: item.reversed,
                scale,
                text: item.text.to_string(),
                ordinal_position: 0,
                display_number: None,
            }));
        }
        entries
    }
}

fn section_slug(instrument: Instrument) -> &'static str {
    match instrument {
        Instrument::BigFive => "personality",
        Instrument::PerceivedStress => "stress",
        Instrument::DecisionStyle => "decision",
        Instrument::Resilience => "resilience",
        Instrument::SituationalJudgment => "situational",
    }
}

/// Return all registered instruments in administration order.
pub fn all_instruments() -> Vec<Box<dyn InstrumentDefinition>> {
    vec![
        Box::new(instruments::big_five::BigFive),
        Box::new(instruments::perceived_stress::PerceivedStress),
        Box::new(instruments::decision_style::DecisionStyle),
        Box::new(instruments::resilience::Resilience),
        Box::new(instruments::situational_judgment::SituationalJudgment),
    ]
}
