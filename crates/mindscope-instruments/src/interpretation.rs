use mindscope_core::models::instrument::{Category, Instrument};
use mindscope_core::models::interpretation::{
    Band, CategoryInterpretation, DecisionInterpretation, DecisionStyleName, InterpretationRecord,
};
use mindscope_core::models::scores::ScoreRecord;

use crate::narrative;

/// Perceived stress total (0–40): ≤13 Low, 14–26 Moderate, ≥27 High.
pub fn stress_band(score: u32) -> Band {
    match score {
        0..=13 => Band::Low,
        14..=26 => Band::Moderate,
        _ => Band::High,
    }
}

/// Resilience total (0–100): ≤50 Low, 51–75 Moderate, ≥76 High.
pub fn resilience_band(score: u32) -> Band {
    match score {
        0..=50 => Band::Low,
        51..=75 => Band::Moderate,
        _ => Band::High,
    }
}

/// One decision axis (rational or intuitive): ≤12 Low, 13–20 Balanced,
/// ≥21 High.
pub fn decision_axis_band(score: u32) -> Band {
    match score {
        0..=12 => Band::Low,
        13..=20 => Band::Balanced,
        _ => Band::High,
    }
}

/// BigFive trait (0–10): ≤4 Low, 5–7 Medium, ≥8 High.
pub fn trait_band(score: u32) -> Band {
    match score {
        0..=4 => Band::Low,
        5..=7 => Band::Medium,
        _ => Band::High,
    }
}

/// Situational judgment competency: ≤2 Lower, 3 Moderate, ≥4 Higher.
pub fn situational_band(score: u32) -> Band {
    match score {
        0..=2 => Band::Lower,
        3 => Band::Moderate,
        _ => Band::Higher,
    }
}

pub fn band_for(category: Category, score: u32) -> Band {
    match category.instrument() {
        Instrument::BigFive => trait_band(score),
        Instrument::PerceivedStress => stress_band(score),
        Instrument::DecisionStyle => decision_axis_band(score),
        Instrument::Resilience => resilience_band(score),
        Instrument::SituationalJudgment => situational_band(score),
    }
}

/// Combined style name from the two axis scores.
pub fn decision_style(rational: u32, intuitive: u32) -> DecisionStyleName {
    match (decision_axis_band(rational), decision_axis_band(intuitive)) {
        (Band::High, Band::Low) => DecisionStyleName::DominantRational,
        (Band::Low, Band::High) => DecisionStyleName::DominantIntuitive,
        (Band::Balanced, Band::Balanced) => DecisionStyleName::Balanced,
        _ if rational > intuitive => DecisionStyleName::Rational,
        _ if intuitive > rational => DecisionStyleName::Intuitive,
        _ => DecisionStyleName::Balanced,
    }
}

fn interpret_category(scores: &ScoreRecord, category: Category) -> CategoryInterpretation {
    let score = scores.get(category);
    let band = band_for(category, score);
    CategoryInterpretation {
        category,
        score,
        band,
        narrative: to_owned(narrative::category_narrative(category, band)),
    }
}

fn to_owned(paragraphs: &[&str]) -> Vec<String> {
    paragraphs.iter().map(|p| p.to_string()).collect()
}

/// Band every category and attach its narrative.
pub fn interpret(scores: &ScoreRecord) -> InterpretationRecord {
    let each = |instrument: Instrument| -> Vec<CategoryInterpretation> {
        instrument
            .categories()
            .iter()
            .map(|&c| interpret_category(scores, c))
            .collect()
    };

    let style = decision_style(scores.decision.rational, scores.decision.intuitive);

    InterpretationRecord {
        personality: each(Instrument::BigFive),
        stress: interpret_category(scores, Category::Stress),
        decision: DecisionInterpretation {
            rational: interpret_category(scores, Category::Rational),
            intuitive: interpret_category(scores, Category::Intuitive),
            style,
            narrative: to_owned(narrative::decision_style_narrative(style)),
        },
        resilience: interpret_category(scores, Category::Resilience),
        situational: each(Instrument::SituationalJudgment),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stress_boundaries() {
        assert_eq!(stress_band(0), Band::Low);
        assert_eq!(stress_band(13), Band::Low);
        assert_eq!(stress_band(14), Band::Moderate);
        assert_eq!(stress_band(26), Band::Moderate);
        assert_eq!(stress_band(27), Band::High);
        assert_eq!(stress_band(40), Band::High);
    }

    #[test]
    fn resilience_boundaries() {
        assert_eq!(resilience_band(50), Band::Low);
        assert_eq!(resilience_band(51), Band::Moderate);
        assert_eq!(resilience_band(75), Band::Moderate);
        assert_eq!(resilience_band(76), Band::High);
    }

    #[test]
    fn trait_boundaries() {
        assert_eq!(trait_band(4), Band::Low);
        assert_eq!(trait_band(5), Band::Medium);
        assert_eq!(trait_band(7), Band::Medium);
        assert_eq!(trait_band(8), Band::High);
    }

    #[test]
    fn decision_axis_boundaries() {
        assert_eq!(decision_axis_band(12), Band::Low);
        assert_eq!(decision_axis_band(13), Band::Balanced);
        assert_eq!(decision_axis_band(20), Band::Balanced);
        assert_eq!(decision_axis_band(21), Band::High);
    }

    #[test]
    fn situational_boundaries() {
        assert_eq!(situational_band(2), Band::Lower);
        assert_eq!(situational_band(3), Band::Moderate);
        assert_eq!(situational_band(4), Band::Higher);
    }

    #[test]
    fn decision_style_names() {
        assert_eq!(decision_style(22, 10), DecisionStyleName::DominantRational);
        assert_eq!(decision_style(10, 22), DecisionStyleName::DominantIntuitive);
        assert_eq!(decision_style(16, 16), DecisionStyleName::Balanced);
        assert_eq!(decision_style(22, 10).label(), "Dominant Rational Style");
        assert_eq!(decision_style(10, 22).label(), "Dominant Intuitive Style");
        assert_eq!(decision_style(16, 16).label(), "Balanced Style");
    }

    #[test]
    fn decision_style_falls_back_to_the_higher_axis() {
        // High / Balanced
        assert_eq!(decision_style(23, 15), DecisionStyleName::Rational);
        // Low / Balanced
        assert_eq!(decision_style(8, 14), DecisionStyleName::Intuitive);
        // Both high and tied
        assert_eq!(decision_style(22, 22), DecisionStyleName::Balanced);
    }

    #[test]
    fn every_band_has_narrative() {
        let record = interpret(&ScoreRecord::default());
        assert!(record.personality.iter().all(|t| !t.narrative.is_empty()));
        assert!(!record.stress.narrative.is_empty());
        assert!(!record.decision.narrative.is_empty());
        assert!(!record.resilience.narrative.is_empty());
        assert!(record.situational.iter().all(|t| !t.narrative.is_empty()));
        assert_eq!(record.personality.len(), 5);
        assert_eq!(record.situational.len(), 3);
    }
}
