use mindscope_core::models::instrument::{Category, Instrument};
use mindscope_core::models::question::ResponseScale;

use crate::{InstrumentDefinition, Item};

/// Situational judgment scenarios (competency-based interpersonal check).
/// One scenario per competency; each response option carries a fixed
/// value from 1 (least effective) to 5 (most effective).
pub struct SituationalJudgment;

const ITEMS: &[Item] = &[
    Item {
        id: "sjt_01",
        category: Category::Empathy,
        reversed: false,
        text: "A colleague who is usually upbeat has been quiet and withdrawn all week, and their work is slipping. What do you do?",
        options: &[
            "Report the drop in performance to your manager without speaking to them.",
            "Ignore it; their personal life is not your concern.",
            "Mention in passing that they seem off and carry on with your work.",
            "Offer to help with their workload so the team is not affected.",
            "Find a private moment to ask how they are and listen without judging.",
        ],
    },
    Item {
        id: "sjt_02",
        category: Category::Emotional,
        reversed: false,
        text: "In a meeting, a peer publicly dismisses an idea you worked hard on. You feel your frustration rising. What do you do?",
        options: &[
            "Respond sharply and point out the flaws in their own work.",
            "Leave the meeting early to avoid saying something you regret.",
            "Stay silent and raise a complaint about them later.",
            "Acknowledge their point and ask to revisit the idea another time.",
            "Take a breath, ask what concerns they have and address them calmly.",
        ],
    },
    Item {
        id: "sjt_03",
        category: Category::Decision,
        reversed: false,
        text: "You must choose between two suppliers by the end of the day, and the information you have is incomplete. What do you do?",
        options: &[
            "Postpone the decision until you have complete information, missing the deadline.",
            "Pick the cheaper supplier without further thought.",
            "Ask a colleague to decide for you.",
            "Go with the supplier you have used before.",
            "Compare the key risks quickly, consult one informed person and decide on time.",
        ],
    },
];

impl InstrumentDefinition for SituationalJudgment {
    fn instrument(&self) -> Instrument {
        Instrument::SituationalJudgment
    }

    fn section_title(&self) -> &str {
        "Part 5: What would you do?"
    }

    fn scale(&self) -> ResponseScale {
        ResponseScale::new(1, 5)
    }

    fn items(&self) -> &[Item] {
        ITEMS
    }
}
