use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use super::report::ReportId;
use super::respondent::Respondent;
use super::scores::ScoreRecord;

/// A completed session as persisted for the admin listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Submission {
    pub id: Uuid,
    pub report_id: ReportId,
    pub respondent: Respondent,
    pub scores: ScoreRecord,
    pub submitted_at: jiff::Timestamp,
}
