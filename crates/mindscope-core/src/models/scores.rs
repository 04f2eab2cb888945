use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::instrument::Category;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct BigFiveScores {
    pub openness: u32,
    pub conscientiousness: u32,
    pub extraversion: u32,
    pub agreeableness: u32,
    pub neuroticism: u32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DecisionScores {
    pub rational: u32,
    pub intuitive: u32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SituationalScores {
    pub empathy: u32,
    pub emotional: u32,
    pub decision: u32,
}

/// Accumulated scores for every instrument.
///
/// Always derived from a response ledger and replaced wholesale on each
/// recomputation. `Default` is the zero record of an empty ledger.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScoreRecord {
    pub big_five: BigFiveScores,
    pub stress: u32,
    pub decision: DecisionScores,
    pub resilience: u32,
    pub situational: SituationalScores,
}

impl ScoreRecord {
    pub fn get(&self, category: Category) -> u32 {
        match category {
            Category::Openness => self.big_five.openness,
            Category::Conscientiousness => self.big_five.conscientiousness,
            Category::Extraversion => self.big_five.extraversion,
            Category::Agreeableness => self.big_five.agreeableness,
            Category::Neuroticism => self.big_five.neuroticism,
            Category::Stress => self.stress,
            Category::Rational => self.decision.rational,
            Category::Intuitive => self.decision.intuitive,
            Category::Resilience => self.resilience,
            Category::Empathy => self.situational.empathy,
            Category::Emotional => self.situational.emotional,
            Category::Decision => self.situational.decision,
        }
    }

    /// Mutable slot for a category. Only the scoring engine writes through
    /// this while building a fresh record.
    pub fn slot_mut(&mut self, category: Category) -> &mut u32 {
        match category {
            Category::Openness => &mut self.big_five.openness,
            Category::Conscientiousness => &mut self.big_five.conscientiousness,
            Category::Extraversion => &mut self.big_five.extraversion,
            Category::Agreeableness => &mut self.big_five.agreeableness,
            Category::Neuroticism => &mut self.big_five.neuroticism,
            Category::Stress => &mut self.stress,
            Category::Rational => &mut self.decision.rational,
            Category::Intuitive => &mut self.decision.intuitive,
            Category::Resilience => &mut self.resilience,
            Category::Empathy => &mut self.situational.empathy,
            Category::Emotional => &mut self.situational.emotional,
            Category::Decision => &mut self.situational.decision,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_as_nested_fields_grouped_by_instrument() {
        let mut record = ScoreRecord::default();
        *record.slot_mut(Category::Extraversion) += 7;
        *record.slot_mut(Category::Intuitive) += 12;

        let json = serde_json::to_value(record).unwrap();
        assert_eq!(json["big_five"]["extraversion"], 7);
        assert_eq!(json["decision"]["intuitive"], 12);
        assert_eq!(json["stress"], 0);
        assert_eq!(json["situational"]["empathy"], 0);
    }

    #[test]
    fn get_reads_back_the_slot_written() {
        let mut record = ScoreRecord::default();
        *record.slot_mut(Category::Decision) = 4;
        assert_eq!(record.get(Category::Decision), 4);
        assert_eq!(record.get(Category::Rational), 0);
    }
}
