//! mindscope-export
//!
//! Report assembly and rendering: structured report documents, charts,
//! page layout, DOCX output and plain-text summaries.

pub mod assemble;
pub mod chart;
pub mod docx;
pub mod error;
pub mod layout;
pub mod render;
pub mod styles;
