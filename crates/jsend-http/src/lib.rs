// Rust guideline compliant 2026-10-19

//! Response writing for JSend envelopes.
//!
//! This crate takes a rendered envelope from `jsend-core` and performs the
//! externally visible write against a [`ResponseSink`]: content type header,
//! status, then body.

pub mod sink;
pub mod writer;

pub use jsend_core::{Config, EnvelopeRequest, Error, Outcome, Result};
pub use sink::{RawHttpSink, ResponseSink};
pub use writer::{write, write_with};
