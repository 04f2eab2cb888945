use mindscope_core::models::instrument::{Category, Instrument};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum InstrumentError {
    #[error("duplicate question id: {0}")]
    DuplicateQuestionId(String),

    #[error("question '{question_id}': category {category:?} does not belong to {instrument:?}")]
    CategoryMismatch {
        question_id: String,
        instrument: Instrument,
        category: Category,
    },

    #[error("question '{question_id}': {instrument:?} items are never reverse-scored")]
    ReversalNotAllowed {
        question_id: String,
        instrument: Instrument,
    },

    #[error("question '{question_id}': invalid scale [{min}, {max}]")]
    InvalidScale { question_id: String, min: u8, max: u8 },

    #[error("catalog parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("session incomplete: {answered} of {required} questions answered")]
    IncompleteSession { answered: usize, required: usize },
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LedgerError {
    #[error("invalid answer value {value} for '{question_id}': min: {min}, max: {max}")]
    InvalidResponseValue {
        question_id: String,
        value: u8,
        min: u8,
        max: u8,
    },

    #[error("position {position} is outside the catalog (length {len})")]
    PositionOutOfRange { position: usize, len: usize },

    #[error("position {position} is a section marker, not a question")]
    NotAQuestion { position: usize },

    #[error("position {position} holds '{expected}', not '{actual}'")]
    QuestionMismatch {
        position: usize,
        expected: String,
        actual: String,
    },

    #[error("position {position} skips unanswered position {next_open}")]
    OutOfOrder { position: usize, next_open: usize },
}
