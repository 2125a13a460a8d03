// Rust guideline compliant 2026-10-19

//! Writes rendered JSend envelopes to a response sink.

use crate::sink::ResponseSink;
use http::header::CONTENT_TYPE;
use jsend_core::{Config, EnvelopeRequest, Error, Result};

/// Writes a JSend response using the default configuration.
///
/// # Arguments
///
/// * `sink` - Destination for the response
/// * `request` - Optional envelope inputs
///
/// # Returns
///
/// The number of body bytes written.
///
/// # Errors
///
/// Returns [`Error::Serialization`] before touching the sink if the envelope
/// cannot be encoded, or [`Error::Write`] if the sink fails.
pub fn write<S: ResponseSink + ?Sized>(sink: &mut S, request: &EnvelopeRequest) -> Result<usize> {
    write_with(sink, request, &Config::default())
}

/// Writes a JSend response: content type header, status, then body.
///
/// The envelope is fully rendered before the first sink call, so a
/// serialization failure leaves the sink untouched. Sink failures are not
/// rolled back; a header or status may already be out when the body write
/// fails.
///
/// # Arguments
///
/// * `sink` - Destination for the response
/// * `request` - Optional envelope inputs
/// * `config` - Content type and default error message
///
/// # Returns
///
/// The number of body bytes written.
///
/// # Errors
///
/// Returns [`Error::Serialization`] if the envelope cannot be encoded, or
/// [`Error::Write`] carrying the sink's IO error unchanged.
pub fn write_with<S: ResponseSink + ?Sized>(
    sink: &mut S,
    request: &EnvelopeRequest,
    config: &Config,
) -> Result<usize> {
    let rendered = request.render_with(config)?;

    let written = send(sink, rendered.status, &rendered.body, &config.content_type).map_err(
        |err| {
            tracing::debug!(status = rendered.status, error = %err, "response sink write failed");
            Error::Write(err)
        },
    )?;

    tracing::debug!(
        status = rendered.status,
        outcome = %rendered.outcome,
        bytes = written,
        "wrote jsend response"
    );
    Ok(written)
}

fn send<S: ResponseSink + ?Sized>(
    sink: &mut S,
    status: u16,
    body: &[u8],
    content_type: &str,
) -> std::io::Result<usize> {
    sink.set_header(CONTENT_TYPE.as_str(), content_type)?;
    sink.write_status(status)?;
    sink.write_body(body)
}
