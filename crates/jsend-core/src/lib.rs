// Rust guideline compliant 2026-10-19

//! JSend Core Library
//!
//! This crate builds JSend response envelopes:
//! - Outcome classification from HTTP status codes (success, fail, error)
//! - Envelope assembly with per-outcome key presence rules
//! - Deterministic JSON serialization with sorted keys
//! - Error types and result handling
//! - Optional configuration for the default error message and content type

pub mod config;
pub mod envelope;
pub mod error;
pub mod outcome;

pub use config::Config;
pub use envelope::{Envelope, EnvelopeRequest, Rendered, DEFAULT_STATUS_CODE};
pub use error::{Error, ErrorKind, Result};
pub use outcome::{Outcome, STATUS_ERROR, STATUS_FAIL, STATUS_SUCCESS};
