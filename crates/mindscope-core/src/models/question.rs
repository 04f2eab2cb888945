use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::instrument::{Category, Instrument};

/// The ordered set of discrete values a question accepts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ResponseScale {
    pub min: u8,
    pub max: u8,
    /// Option labels, one per value from `min` to `max`. May be empty when
    /// the UI renders a bare numeric scale.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub labels: Vec<String>,
}

impl ResponseScale {
    pub fn new(min: u8, max: u8) -> Self {
        Self {
            min,
            max,
            labels: Vec::new(),
        }
    }

    pub fn with_labels(min: u8, max: u8, labels: &[&str]) -> Self {
        Self {
            min,
            max,
            labels: labels.iter().map(|l| l.to_string()).collect(),
        }
    }

    pub fn contains(&self, value: u8) -> bool {
        self.values().contains(&value)
    }

    pub fn values(&self) -> RangeInclusive<u8> {
        self.min..=self.max
    }

    /// Flip a value to the opposite end of the scale: `max + min - value`.
    ///
    /// Callers must only pass values for which [`contains`](Self::contains)
    /// holds.
    pub fn reverse(&self, value: u8) -> u8 {
        (self.max - value) + self.min
    }

    pub fn label(&self, value: u8) -> Option<&str> {
        if !self.contains(value) {
            return None;
        }
        self.labels
            .get(usize::from(value - self.min))
            .map(String::as_str)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Question {
    pub id: String,
    pub instrument: Instrument,
    pub category: Category,
    #[serde(default)]
    pub reversed: bool,
    pub scale: ResponseScale,
    pub text: String,
    /// Position in the full catalog, section markers included.
    #[serde(default)]
    pub ordinal_position: usize,
    /// 1-based, zero-padded number shown to the respondent.
    #[serde(default)]
    pub display_number: Option<String>,
}

/// Separates the catalog into named sections. Never scored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SectionMarker {
    pub id: String,
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(tag = "type", rename_all = "snake_case")]
#[ts(export)]
pub enum CatalogEntry {
    Question(Question),
    Section(SectionMarker),
}

impl CatalogEntry {
    pub fn id(&self) -> &str {
        match self {
            CatalogEntry::Question(q) => &q.id,
            CatalogEntry::Section(s) => &s.id,
        }
    }

    pub fn as_question(&self) -> Option<&Question> {
        match self {
            CatalogEntry::Question(q) => Some(q),
            CatalogEntry::Section(_) => None,
        }
    }

    pub fn is_section(&self) -> bool {
        matches!(self, CatalogEntry::Section(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reverse_flips_around_the_midpoint() {
        let likert = ResponseScale::new(1, 5);
        assert_eq!(likert.reverse(1), 5);
        assert_eq!(likert.reverse(3), 3);
        assert_eq!(likert.reverse(5), 1);

        let pss = ResponseScale::new(0, 4);
        assert_eq!(pss.reverse(0), 4);
        assert_eq!(pss.reverse(4), 0);
    }

    #[test]
    fn label_lookup_is_offset_by_min() {
        let scale = ResponseScale::with_labels(1, 3, &["Low", "Mid", "High"]);
        assert_eq!(scale.label(1), Some("Low"));
        assert_eq!(scale.label(3), Some("High"));
        assert_eq!(scale.label(0), None);
        assert_eq!(scale.label(4), None);
    }

    #[test]
    fn catalog_entry_is_internally_tagged() {
        let entry = CatalogEntry::Section(SectionMarker {
            id: "intro".to_string(),
            title: "Introduction".to_string(),
        });
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["type"], "section");
        assert_eq!(json["title"], "Introduction");
    }
}
