use mindscope_core::models::instrument::Instrument;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("template rendering failed: {0}")]
    TemplateRender(String),

    #[error("template parse error: {0}")]
    TemplateParse(String),

    #[error("chart rendering failed for {instrument}: {reason}")]
    Chart {
        instrument: Instrument,
        reason: String,
    },

    #[error("chart rendering for {instrument} timed out after {timeout_ms} ms")]
    ChartTimeout {
        instrument: Instrument,
        timeout_ms: u64,
    },

    #[error("DOCX generation failed: {0}")]
    Docx(String),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl From<tera::Error> for ExportError {
    fn from(e: tera::Error) -> Self {
        ExportError::TemplateRender(e.to_string())
    }
}
