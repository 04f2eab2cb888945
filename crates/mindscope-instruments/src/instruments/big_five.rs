use mindscope_core::models::instrument::{Category, Instrument};
use mindscope_core::models::question::ResponseScale;

use crate::{InstrumentDefinition, Item};

/// Ten-item Big Five inventory. Two items per trait, one of each pair
/// reverse-keyed. Likert 1–5, trait totals 2–10.
pub struct BigFive;

const ITEMS: &[Item] = &[
    item("bf_01", Category::Extraversion, true, "I see myself as someone who is reserved."),
    item("bf_02", Category::Agreeableness, false, "I see myself as someone who is generally trusting."),
    item("bf_03", Category::Conscientiousness, true, "I see myself as someone who tends to be lazy."),
    item("bf_04", Category::Neuroticism, true, "I see myself as someone who is relaxed and handles stress well."),
    item("bf_05", Category::Openness, true, "I see myself as someone who has few artistic interests."),
    item("bf_06", Category::Extraversion, false, "I see myself as someone who is outgoing and sociable."),
    item("bf_07", Category::Agreeableness, true, "I see myself as someone who tends to find fault with others."),
    item("bf_08", Category::Conscientiousness, false, "I see myself as someone who does a thorough job."),
    item("bf_09", Category::Neuroticism, false, "I see myself as someone who gets nervous easily."),
    item("bf_10", Category::Openness, false, "I see myself as someone who has an active imagination."),
];

const fn item(id: &'static str, category: Category, reversed: bool, text: &'static str) -> Item {
    Item {
        id,
        category,
        reversed,
        text,
        options: &[],
    }
}

impl InstrumentDefinition for BigFive {
    fn instrument(&self) -> Instrument {
        Instrument::BigFive
    }

    fn section_title(&self) -> &str {
        "Part 1: How you see yourself"
    }

    fn scale(&self) -> ResponseScale {
        ResponseScale::with_labels(
            1,
            5,
            &[
                "Disagree strongly",
                "Disagree a little",
                "Neither agree nor disagree",
                "Agree a little",
                "Agree strongly",
            ],
        )
    }

    fn items(&self) -> &[Item] {
        ITEMS
    }
}
