use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("invalid report id '{0}': expected AAA-0000-0000")]
    InvalidReportId(String),
}
