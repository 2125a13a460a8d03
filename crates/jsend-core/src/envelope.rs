// Rust guideline compliant 2026-10-19

//! Envelope assembly and serialization.
//!
//! An [`EnvelopeRequest`] collects the optional inputs of a single response.
//! Rendering it normalizes the status code, classifies the outcome, applies
//! the key presence rules for that outcome and encodes the result as compact
//! JSON with keys in ascending order.

use crate::{Config, Error, Outcome, Result};
use serde::Serialize;
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// Status code used when none is supplied or when zero is supplied.
pub const DEFAULT_STATUS_CODE: u16 = 200;

/// Builder for a single JSend response.
///
/// Every field is optional. A request is consumed by value through its
/// setters and rendered with [`EnvelopeRequest::render`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EnvelopeRequest {
    data: Option<Map<String, Value>>,
    message: Option<String>,
    code: Option<i64>,
    status_code: Option<u16>,
    payload_error: Option<String>,
}

/// Assembled JSend envelope.
///
/// Fields are declared in ascending key order so the serialized form is
/// stable. `data` is `Some(None)` when the key must be present as `null`.
///
/// Payload objects are re-inserted in ascending key order at every depth
/// during assembly. `serde_json::Map` keeps insertion order once any crate
/// in the build enables serde_json's `preserve_order` feature, so the order
/// is not left to the map type.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Envelope {
    /// Application code, only for error outcomes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<i64>,
    /// Payload, explicit `null`, or omitted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Option<Map<String, Value>>>,
    /// Human-readable message.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Outcome kind.
    pub status: Outcome,
}

/// Serialized envelope ready to be written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendered {
    /// Compact JSON body.
    pub body: Vec<u8>,
    /// Effective HTTP status code.
    pub status: u16,
    /// Outcome the status code classified to.
    pub outcome: Outcome,
}

impl EnvelopeRequest {
    /// Creates an empty request (status 200, no payload, no message).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a success request carrying `data`.
    #[must_use]
    pub fn success(data: Map<String, Value>) -> Self {
        Self::new().status_code(200).data(data)
    }

    /// Creates a fail request (status 400) carrying `data`.
    #[must_use]
    pub fn fail(data: Map<String, Value>) -> Self {
        Self::new().status_code(400).data(data)
    }

    /// Creates an error request (status 500) carrying `message`.
    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self::new().status_code(500).message(message)
    }

    /// Sets the payload.
    #[must_use]
    pub fn data(mut self, data: Map<String, Value>) -> Self {
        self.data = Some(data);
        self.payload_error = None;
        self
    }

    /// Sets the payload from any serializable value.
    ///
    /// The value must serialize to a JSON object; `null` counts as no
    /// payload. Conversion failures are kept and reported as
    /// [`Error::Serialization`] when the request is rendered.
    #[must_use]
    pub fn data_from<T: Serialize + ?Sized>(mut self, payload: &T) -> Self {
        self.data = None;
        self.payload_error = match serde_json::to_value(payload) {
            Ok(Value::Object(map)) => {
                self.data = Some(map);
                None
            }
            Ok(Value::Null) => None,
            Ok(other) => Some(format!(
                "payload must serialize to a JSON object, got {}",
                json_type_name(&other)
            )),
            Err(err) => Some(err.to_string()),
        };
        self
    }

    /// Sets the message.
    #[must_use]
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Sets the application code.
    #[must_use]
    pub fn code(mut self, code: i64) -> Self {
        self.code = Some(code);
        self
    }

    /// Sets the HTTP status code. Zero means "use the default".
    #[must_use]
    pub fn status_code(mut self, status_code: u16) -> Self {
        self.status_code = Some(status_code);
        self
    }

    /// Returns the status code that will be sent.
    #[must_use]
    pub fn effective_status(&self) -> u16 {
        match self.status_code {
            None | Some(0) => DEFAULT_STATUS_CODE,
            Some(code) => code,
        }
    }

    /// Returns the outcome kind for the effective status code.
    #[must_use]
    pub fn outcome(&self) -> Outcome {
        Outcome::from_status(self.effective_status())
    }

    /// Assembles the envelope for this request.
    ///
    /// # Arguments
    ///
    /// * `config` - Supplies the substitute message for error outcomes
    ///
    /// # Returns
    ///
    /// The envelope with keys present according to the outcome.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Serialization`] if a payload set through
    /// [`EnvelopeRequest::data_from`] could not be converted.
    pub fn envelope(&self, config: &Config) -> Result<Envelope> {
        if let Some(reason) = &self.payload_error {
            tracing::debug!(error = %reason, "payload could not be converted to a JSON object");
            return Err(Error::Serialization(serde::ser::Error::custom(reason)));
        }

        let outcome = self.outcome();
        let payload = self
            .data
            .as_ref()
            .filter(|map| !map.is_empty())
            .map(|map| sorted_map(map.clone()));
        let message = self.message.as_ref().filter(|m| !m.is_empty()).cloned();

        let data = if outcome.requires_data() {
            Some(payload)
        } else {
            payload.map(Some)
        };
        let envelope = match outcome {
            Outcome::Success | Outcome::Fail => Envelope {
                code: None,
                data,
                message,
                status: outcome,
            },
            Outcome::Error => Envelope {
                code: self.code.filter(|code| *code > 0),
                data,
                message: Some(message.unwrap_or_else(|| config.default_error_message.clone())),
                status: outcome,
            },
        };

        tracing::trace!(
            outcome = %outcome,
            status = self.effective_status(),
            "assembled envelope"
        );
        Ok(envelope)
    }

    /// Renders the request with the default configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Serialization`] if the envelope cannot be encoded.
    pub fn render(&self) -> Result<Rendered> {
        self.render_with(&Config::default())
    }

    /// Renders the request into a JSON body and the status code to send.
    ///
    /// Rendering is pure: identical requests produce byte-identical bodies.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Serialization`] if the envelope cannot be encoded.
    pub fn render_with(&self, config: &Config) -> Result<Rendered> {
        let envelope = self.envelope(config)?;
        let body = envelope.to_vec()?;
        Ok(Rendered {
            body,
            status: self.effective_status(),
            outcome: envelope.status,
        })
    }
}

impl Envelope {
    /// Encodes the envelope as compact JSON.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Serialization`] if encoding fails.
    pub fn to_vec(&self) -> Result<Vec<u8>> {
        Ok(serde_json::to_vec(self)?)
    }
}

/// Rebuilds a map with keys in ascending order, recursing into nested values.
fn sorted_map(map: Map<String, Value>) -> Map<String, Value> {
    map.into_iter()
        .map(|(key, value)| (key, sorted_value(value)))
        .collect::<BTreeMap<_, _>>()
        .into_iter()
        .collect()
}

fn sorted_value(value: Value) -> Value {
    match value {
        Value::Object(map) => Value::Object(sorted_map(map)),
        Value::Array(items) => Value::Array(items.into_iter().map(sorted_value).collect()),
        other => other,
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
