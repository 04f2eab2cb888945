use mindscope_core::models::instrument::{Category, Instrument};
use mindscope_core::models::question::ResponseScale;

use crate::{InstrumentDefinition, Item};

/// Two-axis decision style scale: five rational and five intuitive items,
/// Likert 1–5, no reverse keying.
pub struct DecisionStyle;

const ITEMS: &[Item] = &[
    item("ds_01", Category::Rational, "I prefer to gather all the necessary information before committing to a decision."),
    item("ds_02", Category::Intuitive, "When making decisions, I rely mainly on my gut feelings."),
    item("ds_03", Category::Rational, "I thoroughly evaluate decision alternatives before making a final choice."),
    item("ds_04", Category::Intuitive, "My initial hunch about a decision is generally what I follow."),
    item("ds_05", Category::Rational, "I take time to weigh the pros and cons of a situation before deciding."),
    item("ds_06", Category::Intuitive, "I make decisions based on intuition."),
    item("ds_07", Category::Rational, "Investigating the facts is an important part of how I decide."),
    item("ds_08", Category::Intuitive, "I rely on my first impressions when making decisions."),
    item("ds_09", Category::Rational, "I weigh a number of different factors when making decisions."),
    item("ds_10", Category::Intuitive, "I weigh feelings more than analysis when making decisions."),
];

const fn item(id: &'static str, category: Category, text: &'static str) -> Item {
    Item {
        id,
        category,
        reversed: false,
        text,
        options: &[],
    }
}

impl InstrumentDefinition for DecisionStyle {
    fn instrument(&self) -> Instrument {
        Instrument::DecisionStyle
    }

    fn section_title(&self) -> &str {
        "Part 3: How you make decisions"
    }

    fn scale(&self) -> ResponseScale {
        ResponseScale::with_labels(
            1,
            5,
            &[
                "Strongly disagree",
                "Disagree",
                "Neutral",
                "Agree",
                "Strongly agree",
            ],
        )
    }

    fn items(&self) -> &[Item] {
        ITEMS
    }
}
