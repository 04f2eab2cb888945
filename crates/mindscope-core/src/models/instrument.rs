use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// One of the fixed psychometric instruments administered in a session.
///
/// Variant order is the order instruments appear in the questionnaire and
/// in the assembled report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Instrument {
    BigFive,
    PerceivedStress,
    DecisionStyle,
    Resilience,
    SituationalJudgment,
}

impl Instrument {
    pub const ALL: [Instrument; 5] = [
        Instrument::BigFive,
        Instrument::PerceivedStress,
        Instrument::DecisionStyle,
        Instrument::Resilience,
        Instrument::SituationalJudgment,
    ];

    /// Human-readable name used in section headings.
    pub fn name(self) -> &'static str {
        match self {
            Instrument::BigFive => "Personality Profile",
            Instrument::PerceivedStress => "Perceived Stress",
            Instrument::DecisionStyle => "Decision-Making Style",
            Instrument::Resilience => "Resilience",
            Instrument::SituationalJudgment => "Situational Judgment",
        }
    }

    /// The categories this instrument scores into, in report order.
    pub fn categories(self) -> &'static [Category] {
        match self {
            Instrument::BigFive => &[
                Category::Openness,
                Category::Conscientiousness,
                Category::Extraversion,
                Category::Agreeableness,
                Category::Neuroticism,
            ],
            Instrument::PerceivedStress => &[Category::Stress],
            Instrument::DecisionStyle => &[Category::Rational, Category::Intuitive],
            Instrument::Resilience => &[Category::Resilience],
            Instrument::SituationalJudgment => {
                &[Category::Empathy, Category::Emotional, Category::Decision]
            }
        }
    }
}

impl fmt::Display for Instrument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A trait or subscale label within an instrument.
///
/// Single-scalar instruments (stress, resilience) have exactly one category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Category {
    Openness,
    Conscientiousness,
    Extraversion,
    Agreeableness,
    Neuroticism,
    Stress,
    Rational,
    Intuitive,
    Resilience,
    Empathy,
    Emotional,
    Decision,
}

impl Category {
    pub fn instrument(self) -> Instrument {
        match self {
            Category::Openness
            | Category::Conscientiousness
            | Category::Extraversion
            | Category::Agreeableness
            | Category::Neuroticism => Instrument::BigFive,
            Category::Stress => Instrument::PerceivedStress,
            Category::Rational | Category::Intuitive => Instrument::DecisionStyle,
            Category::Resilience => Instrument::Resilience,
            Category::Empathy | Category::Emotional | Category::Decision => {
                Instrument::SituationalJudgment
            }
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Category::Openness => "Openness",
            Category::Conscientiousness => "Conscientiousness",
            Category::Extraversion => "Extraversion",
            Category::Agreeableness => "Agreeableness",
            Category::Neuroticism => "Neuroticism",
            Category::Stress => "Stress",
            Category::Rational => "Rational",
            Category::Intuitive => "Intuitive",
            Category::Resilience => "Resilience",
            Category::Empathy => "Empathy",
            Category::Emotional => "Emotional Regulation",
            Category::Decision => "Decision Making",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
