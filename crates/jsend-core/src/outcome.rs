// Rust guideline compliant 2026-10-19

//! Outcome classification for JSend responses.
//!
//! The outcome is derived from the effective HTTP status code and is never
//! stored independently:
//!
//! - `status < 400` → Success
//! - `400 <= status < 500` → Fail
//! - `status >= 500` → Error

use serde::{Deserialize, Serialize};
use std::fmt;

/// Wire value of the `status` key for successful responses.
pub const STATUS_SUCCESS: &str = "success";

/// Wire value of the `status` key for client-side failures.
pub const STATUS_FAIL: &str = "fail";

/// Wire value of the `status` key for server-side errors.
pub const STATUS_ERROR: &str = "error";

/// Outcome kind of a JSend response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    /// The request was handled successfully.
    Success,
    /// The request was rejected because of client-supplied data.
    Fail,
    /// The server failed while handling the request.
    Error,
}

impl Outcome {
    /// Classifies an HTTP status code.
    ///
    /// The mapping is total: every `u16` yields exactly one outcome. Callers
    /// are expected to normalize an unset status to 200 beforehand.
    ///
    /// # Arguments
    ///
    /// * `status` - The effective HTTP status code
    ///
    /// # Returns
    ///
    /// The outcome kind for the status code.
    #[must_use]
    pub fn from_status(status: u16) -> Self {
        match status {
            500.. => Outcome::Error,
            400..=499 => Outcome::Fail,
            _ => Outcome::Success,
        }
    }

    /// Returns the wire name used for the `status` key.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Outcome::Success => STATUS_SUCCESS,
            Outcome::Fail => STATUS_FAIL,
            Outcome::Error => STATUS_ERROR,
        }
    }

    /// Whether the `data` key must be present even when there is no payload.
    #[must_use]
    pub fn requires_data(&self) -> bool {
        !matches!(self, Outcome::Error)
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
