//! mindscope-storage
//!
//! Filesystem document store. Objects are addressed by slash-separated
//! keys (see `mindscope_core::store_keys`) relative to a root directory.

pub mod error;
pub mod objects;
pub mod state;
pub mod store;
pub mod submissions;
