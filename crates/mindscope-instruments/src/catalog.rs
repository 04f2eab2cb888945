use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

use mindscope_core::models::instrument::Instrument;
use mindscope_core::models::question::{CatalogEntry, Question};
use serde::{Deserialize, Serialize};

use crate::all_instruments;
use crate::error::InstrumentError;
use crate::scoring::reverse_scored;

/// Version tag of the built-in catalog. Bump when items or scales change.
pub const BUILTIN_VERSION: &str = "2026.1";

static BUILTIN: LazyLock<Catalog> = LazyLock::new(|| {
    let entries = all_instruments()
        .iter()
        .flat_map(|def| def.entries())
        .collect();
    Catalog::assemble(BUILTIN_VERSION.to_string(), entries)
});

/// The built-in questionnaire. Constructed on first use and shared
/// read-only afterwards.
pub fn catalog() -> &'static Catalog {
    &BUILTIN
}

/// On-disk shape of an external catalog file.
#[derive(Debug, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CatalogFile {
    pub version: String,
    pub entries: Vec<CatalogEntry>,
}

/// Immutable, ordered sequence of questions and section markers.
#[derive(Debug, Clone)]
pub struct Catalog {
    version: String,
    entries: Vec<CatalogEntry>,
    by_id: HashMap<String, usize>,
}

/// A named run of questions between two section markers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section<'a> {
    pub title: Option<&'a str>,
    pub positions: Vec<usize>,
}

impl Catalog {
    /// Validate and build a catalog from raw entries.
    pub fn new(version: String, entries: Vec<CatalogEntry>) -> Result<Self, InstrumentError> {
        validate(&entries)?;
        Ok(Self::assemble(version, entries))
    }

    /// Parse an external catalog file (JSON).
    pub fn from_json(json: &str) -> Result<Self, InstrumentError> {
        let file: CatalogFile = serde_json::from_str(json)?;
        Self::new(file.version, file.entries)
    }

    fn assemble(version: String, entries: Vec<CatalogEntry>) -> Self {
        let entries = number_questions(entries);
        let by_id = entries
            .iter()
            .enumerate()
            .filter(|(_, e)| !e.is_section())
            .map(|(pos, e)| (e.id().to_string(), pos))
            .collect();
        Self {
            version,
            entries,
            by_id,
        }
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    /// Number of entries, section markers included.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn entry(&self, position: usize) -> Option<&CatalogEntry> {
        self.entries.get(position)
    }

    pub fn question(&self, position: usize) -> Option<&Question> {
        self.entry(position).and_then(CatalogEntry::as_question)
    }

    pub fn question_by_id(&self, id: &str) -> Option<&Question> {
        self.by_id.get(id).and_then(|&pos| self.question(pos))
    }

    pub fn questions(&self) -> impl Iterator<Item = &Question> {
        self.entries.iter().filter_map(CatalogEntry::as_question)
    }

    pub fn questions_for(&self, instrument: Instrument) -> impl Iterator<Item = &Question> {
        self.questions().filter(move |q| q.instrument == instrument)
    }

    pub fn question_count(&self) -> usize {
        self.by_id.len()
    }

    /// Group question positions under the marker that precedes them.
    /// Questions before the first marker form an untitled section; a marker
    /// followed directly by another marker yields an empty section.
    pub fn sections(&self) -> Vec<Section<'_>> {
        let mut sections: Vec<Section<'_>> = Vec::new();
        for (pos, entry) in self.entries.iter().enumerate() {
            match entry {
                CatalogEntry::Section(marker) => sections.push(Section {
                    title: Some(&marker.title),
                    positions: Vec::new(),
                }),
                CatalogEntry::Question(_) => match sections.last_mut() {
                    Some(section) => section.positions.push(pos),
                    None => sections.push(Section {
                        title: None,
                        positions: vec![pos],
                    }),
                },
            }
        }
        sections
    }
}

/// Assign ordinal positions to every entry and a continuous, 1-based,
/// zero-padded display number to every question. Section markers are
/// skipped and never reset the count.
pub fn number_questions(mut entries: Vec<CatalogEntry>) -> Vec<CatalogEntry> {
    let total = entries.iter().filter(|e| !e.is_section()).count();
    let width = total.to_string().len().max(2);
    let mut number = 0usize;
    for (pos, entry) in entries.iter_mut().enumerate() {
        if let CatalogEntry::Question(q) = entry {
            number += 1;
            q.ordinal_position = pos;
            q.display_number = Some(format!("{number:0width$}"));
        }
    }
    entries
}

fn validate(entries: &[CatalogEntry]) -> Result<(), InstrumentError> {
    let mut seen = HashSet::new();
    for entry in entries {
        if !seen.insert(entry.id()) {
            return Err(InstrumentError::DuplicateQuestionId(entry.id().to_string()));
        }
        let CatalogEntry::Question(q) = entry else {
            continue;
        };
        if q.category.instrument() != q.instrument {
            return Err(InstrumentError::CategoryMismatch {
                question_id: q.id.clone(),
                instrument: q.instrument,
                category: q.category,
            });
        }
        if q.reversed && !reverse_scored(q.instrument) {
            return Err(InstrumentError::ReversalNotAllowed {
                question_id: q.id.clone(),
                instrument: q.instrument,
            });
        }
        if q.scale.min > q.scale.max {
            return Err(InstrumentError::InvalidScale {
                question_id: q.id.clone(),
                min: q.scale.min,
                max: q.scale.max,
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use mindscope_core::models::instrument::Category;
    use mindscope_core::models::question::{ResponseScale, SectionMarker};

    use super::*;

    fn question(id: &str) -> CatalogEntry {
        CatalogEntry::Question(Question {
            id: id.to_string(),
            instrument: Instrument::BigFive,
            category: Category::Openness,
            reversed: false,
            scale: ResponseScale::new(1, 5),
            text: String::new(),
            ordinal_position: 0,
            display_number: None,
        })
    }

    fn marker(id: &str) -> CatalogEntry {
        CatalogEntry::Section(SectionMarker {
            id: id.to_string(),
            title: id.to_uppercase(),
        })
    }

    fn numbers(catalog: &Catalog) -> Vec<String> {
        catalog
            .questions()
            .filter_map(|q| q.display_number.clone())
            .collect()
    }

    #[test]
    fn builtin_catalog_passes_validation() {
        let builtin = catalog();
        let rebuilt = Catalog::new(builtin.version().to_string(), builtin.entries().to_vec());
        assert!(rebuilt.is_ok());
        assert_eq!(builtin.question_count(), 58);
        assert_eq!(builtin.len(), 63);
    }

    #[test]
    fn builtin_instrument_item_counts() {
        let builtin = catalog();
        assert_eq!(builtin.questions_for(Instrument::BigFive).count(), 10);
        assert_eq!(builtin.questions_for(Instrument::PerceivedStress).count(), 10);
        assert_eq!(builtin.questions_for(Instrument::DecisionStyle).count(), 10);
        assert_eq!(builtin.questions_for(Instrument::Resilience).count(), 25);
        assert_eq!(builtin.questions_for(Instrument::SituationalJudgment).count(), 3);
    }

    #[test]
    fn numbering_skips_markers_and_is_continuous() {
        let catalog = Catalog::new(
            "t".to_string(),
            vec![marker("a"), question("q1"), question("q2"), marker("b"), question("q3")],
        )
        .unwrap();
        assert_eq!(numbers(&catalog), ["01", "02", "03"]);
        assert_eq!(catalog.question(4).unwrap().ordinal_position, 4);
    }

    #[test]
    fn adjacent_markers_do_not_perturb_numbering() {
        let catalog = Catalog::new(
            "t".to_string(),
            vec![question("q1"), marker("a"), marker("b"), question("q2")],
        )
        .unwrap();
        assert_eq!(numbers(&catalog), ["01", "02"]);

        let sections = catalog.sections();
        assert_eq!(sections.len(), 3);
        assert_eq!(sections[0].title, None);
        assert!(sections[1].positions.is_empty());
        assert_eq!(sections[2].positions, vec![3]);
    }

    #[test]
    fn padding_widens_past_99_questions() {
        let entries = (0..120).map(|i| question(&format!("q{i}"))).collect();
        let catalog = Catalog::new("t".to_string(), entries).unwrap();
        let numbers = numbers(&catalog);
        assert_eq!(numbers[0], "001");
        assert_eq!(numbers[119], "120");
    }

    #[test]
    fn rejects_duplicate_ids() {
        let err = Catalog::new("t".to_string(), vec![question("q1"), question("q1")]).unwrap_err();
        assert!(matches!(err, InstrumentError::DuplicateQuestionId(id) if id == "q1"));
    }

    #[test]
    fn rejects_reversal_on_unreversed_instrument() {
        let CatalogEntry::Question(mut q) = question("r1") else {
            unreachable!()
        };
        q.instrument = Instrument::Resilience;
        q.category = Category::Resilience;
        q.reversed = true;
        let err = Catalog::new("t".to_string(), vec![CatalogEntry::Question(q)]).unwrap_err();
        assert!(matches!(err, InstrumentError::ReversalNotAllowed { .. }));
    }

    #[test]
    fn from_json_parses_and_validates() {
        let json = r#"{
            "version": "ext-1",
            "entries": [
                {"type": "section", "id": "s", "title": "Stress"},
                {"type": "question", "id": "p1", "instrument": "perceived_stress",
                 "category": "stress", "reversed": true,
                 "scale": {"min": 0, "max": 4}, "text": "On top of things?"}
            ]
        }"#;
        let catalog = Catalog::from_json(json).unwrap();
        assert_eq!(catalog.version(), "ext-1");
        let q = catalog.question_by_id("p1").unwrap();
        assert_eq!(q.ordinal_position, 1);
        assert_eq!(q.display_number.as_deref(), Some("01"));

        let bad = json.replace("\"stress\",", "\"empathy\",");
        assert!(matches!(
            Catalog::from_json(&bad),
            Err(InstrumentError::CategoryMismatch { .. })
        ));
    }
}
