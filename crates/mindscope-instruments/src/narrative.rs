//! Canned interpretation text, keyed by category and band.

use mindscope_core::models::instrument::Category;
use mindscope_core::models::interpretation::{Band, DecisionStyleName};

pub fn category_narrative(category: Category, band: Band) -> &'static [&'static str] {
    use Band::*;
    use Category::*;

    match (category, band) {
        (Openness, High) => &[
            "You are curious and drawn to new ideas, experiences and ways of thinking.",
            "Creative and abstract tasks tend to energise you, and you are comfortable with change.",
        ],
        (Openness, Medium) => &[
            "You balance curiosity with practicality, open to new ideas when they have a clear purpose.",
        ],
        (Openness, Low) => &[
            "You prefer the familiar and the proven, and value concrete, practical approaches.",
            "Routine and clear expectations help you perform at your best.",
        ],
        (Conscientiousness, High) => &[
            "You are organised, dependable and persistent in reaching your goals.",
            "Others can rely on you to follow through; watch that high standards do not turn into perfectionism.",
        ],
        (Conscientiousness, Medium) => &[
            "You are reasonably organised and reliable while remaining flexible when plans change.",
        ],
        (Conscientiousness, Low) => &[
            "You prefer spontaneity to detailed planning and adapt easily to shifting circumstances.",
            "Simple structures such as lists and reminders can help you keep longer-term goals on track.",
        ],
        (Extraversion, High) => &[
            "You draw energy from people and activity and are at ease in social settings.",
            "You are likely to speak up readily and enjoy collaborative work.",
        ],
        (Extraversion, Medium) => &[
            "You are comfortable both in company and on your own, adjusting to what the situation needs.",
        ],
        (Extraversion, Low) => &[
            "You tend to be reserved and recharge through time alone or with a few close people.",
            "You are likely to think before you speak and prefer focused, independent work.",
        ],
        (Agreeableness, High) => &[
            "You are warm, cooperative and considerate of other people's needs.",
            "You build trust easily; make sure your own needs are voiced as well.",
        ],
        (Agreeableness, Medium) => &[
            "You are generally cooperative while still willing to challenge others when it matters.",
        ],
        (Agreeableness, Low) => &[
            "You are direct and sceptical, comfortable with debate and with holding your ground.",
            "Your candour can be valuable; pairing it with acknowledgement of others helps it land well.",
        ],
        (Neuroticism, High) => &[
            "You experience emotions intensely and may be more sensitive to stress and worry.",
            "Recognising early signs of strain and having routines for recovery can be especially helpful.",
        ],
        (Neuroticism, Medium) => &[
            "You feel stress in demanding situations but usually regain your balance in reasonable time.",
        ],
        (Neuroticism, Low) => &[
            "You are generally calm and emotionally steady, even under pressure.",
        ],
        (Stress, High) => &[
            "Your responses suggest a high level of perceived stress over the last month.",
            "Consider which demands can be reduced or shared, and speak with a trusted person or professional if this persists.",
        ],
        (Stress, Moderate) => &[
            "Your responses suggest a moderate level of perceived stress, which is common during busy periods.",
            "Regular rest, exercise and boundaries around work can help keep it from building up.",
        ],
        (Stress, Low) => &[
            "Your responses suggest a low level of perceived stress; you currently feel largely in control of your life.",
        ],
        (Rational, High) => &[
            "You rely strongly on analysis, gathering information and weighing alternatives before deciding.",
        ],
        (Rational, Balanced) => &[
            "You use analysis when it matters but do not insist on complete information before acting.",
        ],
        (Rational, Low) => &[
            "You seldom rely on structured analysis when making decisions.",
        ],
        (Intuitive, High) => &[
            "You rely strongly on gut feeling and first impressions, and decide quickly.",
        ],
        (Intuitive, Balanced) => &[
            "You take your instincts into account without letting them override the facts.",
        ],
        (Intuitive, Low) => &[
            "You seldom let hunches or feelings drive your decisions.",
        ],
        (Resilience, High) => &[
            "You show strong resilience: you adapt to change, recover from setbacks and keep going under pressure.",
        ],
        (Resilience, Moderate) => &[
            "You show a solid base of resilience and cope with most setbacks, though some situations test you more.",
            "Building on existing support networks and past successes can strengthen this further.",
        ],
        (Resilience, Low) => &[
            "Your responses suggest that setbacks and pressure currently take a considerable toll.",
            "Resilience can be developed: small achievable goals, supportive relationships and reflection on past challenges all help.",
        ],
        (Empathy, Higher) => &[
            "You respond to others' difficulties with sensitivity, choosing to listen and understand first.",
        ],
        (Empathy, Moderate) => &[
            "You notice when others struggle and respond practically, though you may not always explore how they feel.",
        ],
        (Empathy, Lower) => &[
            "You may overlook the personal side of a colleague's difficulties; asking and listening is a good first step.",
        ],
        (Emotional, Higher) => &[
            "You manage strong emotions well under pressure and keep conversations constructive.",
        ],
        (Emotional, Moderate) => &[
            "You usually keep your emotions in check, though you may avoid addressing tension directly.",
        ],
        (Emotional, Lower) => &[
            "Under provocation you may react in ways you later regret; pausing before responding can help.",
        ],
        (Decision, Higher) => &[
            "You make timely, well-reasoned decisions even when information is incomplete.",
        ],
        (Decision, Moderate) => &[
            "You reach decisions, but may lean on others or on habit rather than weighing the risks yourself.",
        ],
        (Decision, Lower) => &[
            "Under time pressure you may delay or make choices without enough consideration.",
        ],
        _ => &[],
    }
}

pub fn decision_style_narrative(style: DecisionStyleName) -> &'static [&'static str] {
    match style {
        DecisionStyleName::DominantRational => &[
            "Your decision making is clearly analytical. You are thorough and methodical, which serves you well on complex or high-stakes choices.",
            "In fast-moving situations, allowing some room for intuition can prevent analysis from slowing you down.",
        ],
        DecisionStyleName::DominantIntuitive => &[
            "Your decision making is clearly intuitive. You decide quickly and trust your experience and instincts.",
            "For important or unfamiliar decisions, a short, structured check of the facts can complement your instincts.",
        ],
        DecisionStyleName::Balanced => &[
            "You draw on both analysis and intuition, switching between them depending on the situation.",
        ],
        DecisionStyleName::Rational => &[
            "You lean towards analysis, while still giving some weight to your instincts.",
        ],
        DecisionStyleName::Intuitive => &[
            "You lean towards intuition, while still giving some weight to the facts.",
        ],
    }
}

#[cfg(test)]
mod tests {
    use mindscope_core::models::instrument::Instrument;

    use super::*;
    use crate::interpretation::band_for;

    #[test]
    fn every_reachable_band_has_text() {
        for instrument in Instrument::ALL {
            for &category in instrument.categories() {
                for score in 0..=100 {
                    let band = band_for(category, score);
                    assert!(
                        !category_narrative(category, band).is_empty(),
                        "{category:?} {band:?}"
                    );
                }
            }
        }
    }

    #[test]
    fn unrelated_bands_have_no_text() {
        assert!(category_narrative(Category::Stress, Band::Medium).is_empty());
    }
}
