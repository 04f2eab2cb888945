use mindscope_core::models::instrument::{Category, Instrument};
use mindscope_core::models::question::ResponseScale;

use crate::{InstrumentDefinition, Item};

/// 25-item resilience scale. Each item 0–4, single total 0–100.
pub struct Resilience;

const ITEMS: &[Item] = &[
    item("res_01", "I am able to adapt when changes occur."),
    item("res_02", "I have at least one close and secure relationship that helps me when I am stressed."),
    item("res_03", "When there are no clear solutions to my problems, sometimes fate or luck can help."),
    item("res_04", "I can deal with whatever comes my way."),
    item("res_05", "Past successes give me confidence in dealing with new challenges."),
    item("res_06", "I try to see the humorous side of things when I am faced with problems."),
    item("res_07", "Having to cope with stress can make me stronger."),
    item("res_08", "I tend to bounce back after illness, injury or other hardships."),
    item("res_09", "Good or bad, I believe that most things happen for a reason."),
    item("res_10", "I give my best effort no matter what the outcome may be."),
    item("res_11", "I believe I can achieve my goals, even if there are obstacles."),
    item("res_12", "Even when things look hopeless, I don't give up."),
    item("res_13", "During times of stress or crisis, I know where to turn for help."),
    item("res_14", "Under pressure, I stay focused and think clearly."),
    item("res_15", "I prefer to take the lead in solving problems rather than letting others make all the decisions."),
    item("res_16", "I am not easily discouraged by failure."),
    item("res_17", "I think of myself as a strong person when dealing with life's challenges and difficulties."),
    item("res_18", "I can make unpopular or difficult decisions that affect other people, if it is necessary."),
    item("res_19", "I am able to handle unpleasant or painful feelings like sadness, fear and anger."),
    item("res_20", "In dealing with life's problems, sometimes you have to act on a hunch without knowing why."),
    item("res_21", "I have a strong sense of purpose in life."),
    item("res_22", "I feel in control of my life."),
    item("res_23", "I like challenges."),
    item("res_24", "I work to attain my goals no matter what roadblocks I encounter along the way."),
    item("res_25", "I take pride in my achievements."),
];

const fn item(id: &'static str, text: &'static str) -> Item {
    Item {
        id,
        category: Category::Resilience,
        reversed: false,
        text,
        options: &[],
    }
}

impl InstrumentDefinition for Resilience {
    fn instrument(&self) -> Instrument {
        Instrument::Resilience
    }

    fn section_title(&self) -> &str {
        "Part 4: Coping with challenges"
    }

    fn scale(&self) -> ResponseScale {
        ResponseScale::with_labels(
            0,
            4,
            &[
                "Not true at all",
                "Rarely true",
                "Sometimes true",
                "Often true",
                "True nearly all the time",
            ],
        )
    }

    fn items(&self) -> &[Item] {
        ITEMS
    }
}
