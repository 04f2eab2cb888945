//! Document store key conventions.
//!
//! Pure string functions, no I/O. These define the canonical layout of
//! objects under the store root.

use uuid::Uuid;

use crate::models::report::ReportId;

pub const SUBMISSIONS_PREFIX: &str = "submissions/";

pub const OUTBOX_PREFIX: &str = "outbox/";

pub fn submission(id: Uuid) -> String {
    format!("submissions/{id}.json")
}

/// Every object belonging to one report lives under this prefix.
pub fn report_prefix(id: &ReportId) -> String {
    format!("reports/{id}/")
}

pub fn report_document(id: &ReportId) -> String {
    format!("{}report.json", report_prefix(id))
}

pub fn report_docx(id: &ReportId) -> String {
    format!("{}report.docx", report_prefix(id))
}

pub fn outbox_message(id: Uuid) -> String {
    format!("outbox/{id}.json")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_keys_share_a_prefix() {
        let id: ReportId = "QRS-0042-9000".parse().unwrap();
        assert_eq!(report_document(&id), "reports/QRS-0042-9000/report.json");
        assert_eq!(report_docx(&id), "reports/QRS-0042-9000/report.docx");
        assert!(report_document(&id).starts_with(&report_prefix(&id)));
    }

    #[test]
    fn submission_keys_live_under_the_listing_prefix() {
        let key = submission(Uuid::nil());
        assert!(key.starts_with(SUBMISSIONS_PREFIX));
        assert!(key.ends_with(".json"));
    }
}
