use mindscope_core::models::report::{ReportDocument, ReportId};
use mindscope_core::models::submission::Submission;
use mindscope_core::store_keys;
use uuid::Uuid;

use crate::error::StorageError;
use crate::objects;
use crate::state::{load_state, load_state_opt, save_state};
use crate::store::DocumentStore;

pub async fn save_submission(store: &DocumentStore, submission: &Submission) -> Result<(), StorageError> {
    save_state(store, &store_keys::submission(submission.id), submission).await?;
    tracing::info!(
        submission_id = %submission.id,
        report_id = %submission.report_id,
        "submission saved"
    );
    Ok(())
}

/// All stored submissions, newest first. Unreadable entries are skipped
/// with a warning so one bad file cannot hide the rest.
pub async fn list_submissions(store: &DocumentStore) -> Result<Vec<Submission>, StorageError> {
    let keys = objects::list_objects(store, store_keys::SUBMISSIONS_PREFIX).await?;
    let mut submissions = Vec::with_capacity(keys.len());
    for key in keys {
        match load_state::<Submission>(store, &key).await {
            Ok(submission) => submissions.push(submission),
            Err(e) => tracing::warn!(key, error = %e, "skipping unreadable submission"),
        }
    }
    submissions.sort_by(|a, b| b.submitted_at.cmp(&a.submitted_at));
    Ok(submissions)
}

/// Remove a submission together with every stored object of its report.
///
/// Returns the removed submission, or `None` when there was nothing to delete.
pub async fn delete_submission(store: &DocumentStore, id: Uuid) -> Result<Option<Submission>, StorageError> {
    let key = store_keys::submission(id);
    let Some(submission) = load_state_opt::<Submission>(store, &key).await? else {
        return Ok(None);
    };
    let removed = objects::delete_objects_by_prefix(store, &store_keys::report_prefix(&submission.report_id)).await?;
    objects::delete_object(store, &key).await?;
    tracing::info!(
        submission_id = %id,
        report_id = %submission.report_id,
        report_objects = removed,
        "submission deleted"
    );
    Ok(Some(submission))
}

/// Persist the report JSON and, when available, its DOCX rendering.
pub async fn save_report(
    store: &DocumentStore,
    doc: &ReportDocument,
    docx: Option<&[u8]>,
) -> Result<(), StorageError> {
    save_state(store, &store_keys::report_document(&doc.report_id), doc).await?;
    if let Some(bytes) = docx {
        objects::put_object(store, &store_keys::report_docx(&doc.report_id), bytes.to_vec()).await?;
    }
    Ok(())
}

pub async fn load_report(store: &DocumentStore, id: &ReportId) -> Result<ReportDocument, StorageError> {
    load_state(store, &store_keys::report_document(id)).await
}

pub async fn load_report_docx(store: &DocumentStore, id: &ReportId) -> Result<Vec<u8>, StorageError> {
    Ok(objects::get_object(store, &store_keys::report_docx(id)).await?.body)
}
