use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// A respondent's raw choice for the question at `position`.
///
/// `value` is stored exactly as chosen; reversal happens during scoring.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Answer {
    pub question_id: String,
    pub value: u8,
    pub position: usize,
}
