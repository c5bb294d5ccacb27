//! Core module - Business logic
//!
//! Record framing, the flat-file store, and the error side-record.

pub mod error_log;
pub mod note;
pub mod store;
