use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::instrument::Category;

/// Qualitative label assigned to a score range.
///
/// Instruments use different vocabularies: BigFive uses Low/Medium/High,
/// stress and resilience Low/Moderate/High, decision axes Low/Balanced/High
/// and situational judgment Lower/Moderate/Higher.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Band {
    Lower,
    Low,
    Medium,
    Moderate,
    Balanced,
    High,
    Higher,
}

impl Band {
    pub fn label(self) -> &'static str {
        match self {
            Band::Lower => "Lower",
            Band::Low => "Low",
            Band::Medium => "Medium",
            Band::Moderate => "Moderate",
            Band::Balanced => "Balanced",
            Band::High => "High",
            Band::Higher => "Higher",
        }
    }
}

impl fmt::Display for Band {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CategoryInterpretation {
    pub category: Category,
    pub score: u32,
    pub band: Band,
    pub narrative: Vec<String>,
}

/// Combined decision-making style derived from the two axis bands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum DecisionStyleName {
    DominantRational,
    DominantIntuitive,
    Balanced,
    Rational,
    Intuitive,
}

impl DecisionStyleName {
    pub fn label(self) -> &'static str {
        match self {
            DecisionStyleName::DominantRational => "Dominant Rational Style",
            DecisionStyleName::DominantIntuitive => "Dominant Intuitive Style",
            DecisionStyleName::Balanced => "Balanced Style",
            DecisionStyleName::Rational => "Rational Style",
            DecisionStyleName::Intuitive => "Intuitive Style",
        }
    }
}

impl fmt::Display for DecisionStyleName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DecisionInterpretation {
    pub rational: CategoryInterpretation,
    pub intuitive: CategoryInterpretation,
    pub style: DecisionStyleName,
    pub narrative: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct InterpretationRecord {
    pub personality: Vec<CategoryInterpretation>,
    pub stress: CategoryInterpretation,
    pub decision: DecisionInterpretation,
    pub resilience: CategoryInterpretation,
    pub situational: Vec<CategoryInterpretation>,
}
