use mindscope_core::models::instrument::{Category, Instrument};
use mindscope_core::models::question::ResponseScale;

use crate::{InstrumentDefinition, Item};

/// Perceived Stress Scale, ten items about the last month.
/// Rated 0–4; items 4, 5, 7 and 8 are positively worded and reverse-keyed.
/// Total 0–40.
pub struct PerceivedStress;

const ITEMS: &[Item] = &[
    item("pss_01", false, "In the last month, how often have you been upset because of something that happened unexpectedly?"),
    item("pss_02", false, "In the last month, how often have you felt that you were unable to control the important things in your life?"),
    item("pss_03", false, "In the last month, how often have you felt nervous and stressed?"),
    item("pss_04", true, "In the last month, how often have you felt confident about your ability to handle your personal problems?"),
    item("pss_05", true, "In the last month, how often have you felt that things were going your way?"),
    item("pss_06", false, "In the last month, how often have you found that you could not cope with all the things that you had to do?"),
    item("pss_07", true, "In the last month, how often have you been able to control irritations in your life?"),
    item("pss_08", true, "In the last month, how often have you felt that you were on top of things?"),
    item("pss_09", false, "In the last month, how often have you been angered because of things that were outside of your control?"),
    item("pss_10", false, "In the last month, how often have you felt difficulties were piling up so high that you could not overcome them?"),
];

const fn item(id: &'static str, reversed: bool, text: &'static str) -> Item {
    Item {
        id,
        category: Category::Stress,
        reversed,
        text,
        options: &[],
    }
}

impl InstrumentDefinition for PerceivedStress {
    fn instrument(&self) -> Instrument {
        Instrument::PerceivedStress
    }

    fn section_title(&self) -> &str {
        "Part 2: Your last month"
    }

    fn scale(&self) -> ResponseScale {
        ResponseScale::with_labels(
            0,
            4,
            &["Never", "Almost never", "Sometimes", "Fairly often", "Very often"],
        )
    }

    fn items(&self) -> &[Item] {
        ITEMS
    }
}
