use mindscope_core::models::instrument::Instrument;
use mindscope_core::models::question::Question;
use mindscope_core::models::scores::ScoreRecord;

use crate::catalog::Catalog;
use crate::ledger::ResponseLedger;

/// Whether items of `instrument` may be reverse-keyed.
///
/// Only the BigFive inventory and the Perceived Stress Scale contain
/// reverse-worded items; the other instruments are plain sums.
pub fn reverse_scored(instrument: Instrument) -> bool {
    matches!(
        instrument,
        Instrument::BigFive | Instrument::PerceivedStress
    )
}

/// Value a single answer adds to its category total.
pub fn contribution(question: &Question, value: u8) -> u8 {
    if question.reversed && reverse_scored(question.instrument) {
        question.scale.reverse(value)
    } else {
        value
    }
}

/// Recompute every score from scratch.
///
/// Pure and total: unanswered questions contribute zero, so a partial
/// ledger yields live in-progress totals.
pub fn score(ledger: &ResponseLedger, catalog: &Catalog) -> ScoreRecord {
    let mut record = ScoreRecord::default();
    for answer in ledger.answers() {
        let Some(question) = catalog.question(answer.position) else {
            continue;
        };
        *record.slot_mut(question.category) += u32::from(contribution(question, answer.value));
    }
    record
}

/// Highest attainable total per category: every question answered at the
/// value contributing most, which is `scale.max` whether or not it is
/// reversed.
pub fn max_scores(catalog: &Catalog) -> ScoreRecord {
    let mut record = ScoreRecord::default();
    for question in catalog.questions() {
        *record.slot_mut(question.category) += u32::from(question.scale.max);
    }
    record
}

#[cfg(test)]
mod tests {
    use mindscope_core::models::instrument::Category;
    use mindscope_core::models::question::ResponseScale;

    use super::*;
    use crate::catalog::catalog;

    fn question(instrument: Instrument, category: Category, reversed: bool, min: u8, max: u8) -> Question {
        Question {
            id: "q".to_string(),
            instrument,
            category,
            reversed,
            scale: ResponseScale::new(min, max),
            text: String::new(),
            ordinal_position: 0,
            display_number: None,
        }
    }

    #[test]
    fn big_five_reversal_is_six_minus_value() {
        let q = question(Instrument::BigFive, Category::Extraversion, true, 1, 5);
        assert_eq!(contribution(&q, 1), 5);
        assert_eq!(contribution(&q, 3), 3);
        assert_eq!(contribution(&q, 5), 1);
    }

    #[test]
    fn pss_reversal_is_four_minus_value() {
        let q = question(Instrument::PerceivedStress, Category::Stress, true, 0, 4);
        assert_eq!(contribution(&q, 0), 4);
        assert_eq!(contribution(&q, 4), 0);
        assert_eq!(contribution(&q, 1), 3);
    }

    #[test]
    fn unreversed_items_pass_through() {
        let q = question(Instrument::BigFive, Category::Openness, false, 1, 5);
        assert_eq!(contribution(&q, 2), 2);
    }

    #[test]
    fn empty_ledger_scores_zero_everywhere() {
        let record = score(&ResponseLedger::new(), catalog());
        assert_eq!(record, ScoreRecord::default());
    }

    #[test]
    fn built_in_maxima_match_documented_ranges() {
        let max = max_scores(catalog());
        for category in Instrument::BigFive.categories() {
            assert_eq!(max.get(*category), 10);
        }
        assert_eq!(max.stress, 40);
        assert_eq!(max.decision.rational, 25);
        assert_eq!(max.decision.intuitive, 25);
        assert_eq!(max.resilience, 100);
        assert_eq!(max.situational.empathy, 5);
        assert_eq!(max.situational.emotional, 5);
        assert_eq!(max.situational.decision, 5);
    }

    #[test]
    fn maxima_follow_the_catalog_in_use() {
        let json = r#"{
            "version": "short",
            "entries": [
                {"type": "question", "id": "s1", "instrument": "perceived_stress",
                 "category": "stress", "scale": {"min": 0, "max": 4}, "text": "a"},
                {"type": "question", "id": "s2", "instrument": "perceived_stress",
                 "category": "stress", "reversed": true,
                 "scale": {"min": 0, "max": 4}, "text": "b"}
            ]
        }"#;
        let short = Catalog::from_json(json).unwrap();
        let max = max_scores(&short);
        assert_eq!(max.stress, 8);
        assert_eq!(max.resilience, 0);
    }

    #[test]
    fn scoring_is_deterministic() {
        let catalog = catalog();
        let mut ledger = ResponseLedger::new();
        for q in catalog.questions() {
            let value = q.scale.min + (q.ordinal_position as u8 % (q.scale.max - q.scale.min + 1));
            ledger
                .record_answer(catalog, q.ordinal_position, &q.id, value)
                .unwrap();
        }
        assert_eq!(score(&ledger, catalog), score(&ledger, catalog));
    }
}
