//! mindscope-core
//!
//! Pure domain types and document-store key conventions. No I/O. This is the
//! shared vocabulary of the assessment pipeline: instruments, questions,
//! answers, score records, interpretations and report documents.

pub mod error;
pub mod models;
pub mod store_keys;
