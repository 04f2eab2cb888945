use mindscope_core::models::instrument::{Category, Instrument};
use mindscope_core::models::interpretation::{CategoryInterpretation, InterpretationRecord};
use mindscope_core::models::report::{ChartBar, ChartSlot, ReportDocument, ReportId, ReportSection};
use mindscope_core::models::respondent::{ContactDetails, Respondent};
use mindscope_core::models::scores::ScoreRecord;
use mindscope_instruments::catalog::catalog;
use mindscope_instruments::interpretation::interpret;
use mindscope_instruments::scoring::max_scores;
use mindscope_instruments::session::CompletedSession;
use rand::Rng;

const DISCLAIMER: &[&str] = &[
    "This report summarises your responses to a set of self-report questionnaires. It describes tendencies and preferences, not fixed characteristics, and is not a clinical diagnosis.",
    "Scores reflect how you answered at one point in time and may change with circumstances. Read the results alongside your own experience and, where useful, discuss them with a qualified professional.",
    "Your answers and this report are confidential and are shared only with the contact named below.",
];

const CLOSING: &[&str] = &[
    "Thank you for completing the assessment. Consider which results matched your own view of yourself and which surprised you.",
    "If you would like to talk through your results or arrange a feedback session, please get in touch using the details below.",
];

/// Everything needed to build a report. Only obtainable from a finished
/// session or from an explicit score record.
#[derive(Debug, Clone)]
pub struct ReportInput {
    pub respondent: Respondent,
    pub scores: ScoreRecord,
    /// Scale ceilings printed next to each score.
    pub max_scores: ScoreRecord,
    pub interpretation: InterpretationRecord,
    pub contact: ContactDetails,
}

impl ReportInput {
    /// Input for scores taken against the built-in catalog.
    pub fn new(respondent: Respondent, scores: ScoreRecord, contact: ContactDetails) -> Self {
        Self {
            respondent,
            interpretation: interpret(&scores),
            scores,
            max_scores: max_scores(catalog()),
            contact,
        }
    }

    pub fn from_completed(session: CompletedSession, contact: ContactDetails) -> Self {
        Self {
            respondent: session.respondent,
            scores: session.scores,
            max_scores: session.max_scores,
            interpretation: session.interpretation,
            contact,
        }
    }
}

/// Build a report with a fresh report id and today's local date.
pub fn assemble_report(input: ReportInput) -> ReportDocument {
    let today = jiff::Zoned::now().date();
    assemble_report_with(input, &mut rand::thread_rng(), today)
}

/// Build a report with an explicit id source and date.
///
/// Every instrument section starts with a textual chart fallback; charts
/// are swapped in afterwards with [`ReportDocument::attach_chart`].
pub fn assemble_report_with<R: Rng + ?Sized>(
    input: ReportInput,
    rng: &mut R,
    date: jiff::civil::Date,
) -> ReportDocument {
    let report_id = ReportId::random(rng);
    let generated_at = date.strftime("%d-%m-%Y").to_string();
    let ReportInput {
        respondent,
        scores,
        max_scores,
        interpretation,
        contact,
    } = input;

    let max = |category: Category| max_scores.get(category);
    let fallback = |results: &[&CategoryInterpretation]| ChartSlot::Fallback {
        bars: results
            .iter()
            .map(|r| ChartBar {
                label: r.category.label().to_string(),
                value: r.score,
                max: max(r.category),
            })
            .collect(),
    };

    let personality_chart = fallback(&interpretation.personality.iter().collect::<Vec<_>>());
    let stress_chart = fallback(&[&interpretation.stress]);
    let decision_chart = fallback(&[
        &interpretation.decision.rational,
        &interpretation.decision.intuitive,
    ]);
    let resilience_chart = fallback(&[&interpretation.resilience]);
    let situational_chart = fallback(&interpretation.situational.iter().collect::<Vec<_>>());

    let sections = vec![
        ReportSection::Cover {
            title: "Psychometric Assessment Report".to_string(),
            respondent: respondent.clone(),
            report_id: report_id.clone(),
            generated_at: generated_at.clone(),
        },
        ReportSection::Disclaimer {
            paragraphs: to_owned(DISCLAIMER),
            contact: contact.clone(),
        },
        ReportSection::Personality {
            traits: interpretation.personality,
            chart: personality_chart,
        },
        ReportSection::Stress {
            max_score: max(Category::Stress),
            result: interpretation.stress,
            chart: stress_chart,
        },
        ReportSection::DecisionStyle {
            decision: interpretation.decision,
            chart: decision_chart,
        },
        ReportSection::Resilience {
            max_score: max(Category::Resilience),
            result: interpretation.resilience,
            chart: resilience_chart,
        },
        ReportSection::SituationalJudgment {
            results: interpretation.situational,
            chart: situational_chart,
        },
        ReportSection::Closing {
            paragraphs: to_owned(CLOSING),
            contact,
        },
    ];

    tracing::info!(
        report_id = %report_id,
        sections = sections.len(),
        "report assembled"
    );

    ReportDocument {
        report_id,
        generated_at,
        respondent,
        scores,
        sections,
    }
}

/// Instruments whose sections carry a chart, in report order.
pub fn charted_instruments(doc: &ReportDocument) -> Vec<Instrument> {
    doc.sections.iter().filter_map(ReportSection::instrument).collect()
}

fn to_owned(paragraphs: &[&str]) -> Vec<String> {
    paragraphs.iter().map(|p| p.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;
    use crate::layout::{Block, section_blocks};

    fn input() -> ReportInput {
        let mut scores = ScoreRecord::default();
        scores.big_five.openness = 9;
        scores.stress = 20;
        scores.decision.rational = 22;
        scores.decision.intuitive = 10;
        scores.resilience = 80;
        ReportInput::new(
            Respondent {
                name: "Sam Taylor".to_string(),
                email: None,
                organisation: Some("Acme".to_string()),
            },
            scores,
            ContactDetails {
                organisation: "Mindscope".to_string(),
                email: "hello@mindscope.test".to_string(),
                phone: None,
                website: None,
            },
        )
    }

    fn date() -> jiff::civil::Date {
        jiff::civil::date(2026, 3, 7)
    }

    #[test]
    fn sections_follow_fixed_order() {
        let doc = assemble_report_with(input(), &mut StdRng::seed_from_u64(1), date());
        let titles: Vec<_> = doc.sections.iter().map(ReportSection::title).collect();
        assert_eq!(
            titles,
            [
                "Psychometric Assessment Report",
                "About This Report",
                "Personality Profile",
                "Perceived Stress",
                "Decision-Making Style",
                "Resilience",
                "Situational Judgment",
                "Next Steps",
            ]
        );
        assert_eq!(charted_instruments(&doc), Instrument::ALL);
    }

    #[test]
    fn date_is_day_month_year() {
        let doc = assemble_report_with(input(), &mut StdRng::seed_from_u64(1), date());
        assert_eq!(doc.generated_at, "07-03-2026");
    }

    #[test]
    fn report_id_is_well_formed_and_seeded() {
        let a = assemble_report_with(input(), &mut StdRng::seed_from_u64(7), date());
        let b = assemble_report_with(input(), &mut StdRng::seed_from_u64(7), date());
        assert_eq!(a.report_id, b.report_id);
        assert!(a.report_id.as_str().parse::<ReportId>().is_ok());
    }

    #[test]
    fn instrument_sections_start_with_text_fallback() {
        let doc = assemble_report_with(input(), &mut StdRng::seed_from_u64(1), date());
        for instrument in Instrument::ALL {
            let chart = doc.section(instrument).and_then(ReportSection::chart).unwrap();
            assert!(chart.image().is_none(), "{instrument}");
            assert!(!chart.bars().is_empty(), "{instrument}");
        }

        let Some(ReportSection::Stress { result, max_score, chart }) =
            doc.section(Instrument::PerceivedStress)
        else {
            panic!("missing stress section");
        };
        assert_eq!(result.score, 20);
        assert_eq!(*max_score, 40);
        assert_eq!(chart.bars()[0].max, 40);
    }

    #[test]
    fn maxima_come_from_the_input() {
        let mut input = input();
        input.max_scores.stress = 8;
        input.max_scores.big_five.openness = 15;
        let doc = assemble_report_with(input, &mut StdRng::seed_from_u64(1), date());

        let stress = doc.section(Instrument::PerceivedStress).unwrap();
        assert_eq!(stress.chart().unwrap().bars()[0].max, 8);

        let blocks = section_blocks(doc.section(Instrument::BigFive).unwrap());
        assert!(blocks.contains(&Block::Field {
            label: "Score".to_string(),
            value: "9 / 15".to_string(),
        }));
    }

    #[test]
    fn decision_section_carries_style_name() {
        let doc = assemble_report_with(input(), &mut StdRng::seed_from_u64(1), date());
        let Some(ReportSection::DecisionStyle { decision, chart }) =
            doc.section(Instrument::DecisionStyle)
        else {
            panic!("missing decision section");
        };
        assert_eq!(decision.style.label(), "Dominant Rational Style");
        assert_eq!(chart.bars().len(), 2);
    }
}
