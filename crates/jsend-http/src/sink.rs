// Rust guideline compliant 2026-10-19

//! Response sinks that receive headers, a status and a body.

use http::header::{HeaderName, HeaderValue};
use http::{Response, StatusCode};
use std::io::{self, Write};

/// Destination for a single HTTP response.
///
/// Implementations own buffering and blocking behavior. Errors are returned
/// as-is and surface to callers of [`crate::write`] without modification.
pub trait ResponseSink {
    /// Sets a response header, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns an error if the header cannot be recorded.
    fn set_header(&mut self, name: &str, value: &str) -> io::Result<()>;

    /// Writes the response status.
    ///
    /// # Errors
    ///
    /// Returns an error if the status is invalid or the write fails.
    fn write_status(&mut self, status: u16) -> io::Result<()>;

    /// Writes body bytes and returns how many were written.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails.
    fn write_body(&mut self, body: &[u8]) -> io::Result<usize>;
}

impl<S: ResponseSink + ?Sized> ResponseSink for &mut S {
    fn set_header(&mut self, name: &str, value: &str) -> io::Result<()> {
        (**self).set_header(name, value)
    }

    fn write_status(&mut self, status: u16) -> io::Result<()> {
        (**self).write_status(status)
    }

    fn write_body(&mut self, body: &[u8]) -> io::Result<usize> {
        (**self).write_body(body)
    }
}

/// In-memory sink backed by an `http::Response`.
impl ResponseSink for Response<Vec<u8>> {
    fn set_header(&mut self, name: &str, value: &str) -> io::Result<()> {
        let name = HeaderName::from_bytes(name.as_bytes()).map_err(invalid_input)?;
        let value = HeaderValue::from_str(value).map_err(invalid_input)?;
        self.headers_mut().insert(name, value);
        Ok(())
    }

    fn write_status(&mut self, status: u16) -> io::Result<()> {
        *self.status_mut() = StatusCode::from_u16(status).map_err(invalid_input)?;
        Ok(())
    }

    fn write_body(&mut self, body: &[u8]) -> io::Result<usize> {
        self.body_mut().extend_from_slice(body);
        Ok(body.len())
    }
}

/// Sink that writes HTTP/1.1 response framing to a byte stream.
///
/// The status line and headers are held until the body is written, then go
/// out together with a `Content-Length` matching that body. The body must be
/// written in a single call; a response without a body is completed with
/// [`RawHttpSink::finish`], which sends `Content-Length: 0`. Writing a body
/// without a status implies 200, and a second status write is ignored.
#[derive(Debug)]
pub struct RawHttpSink<W: Write> {
    writer: W,
    headers: Vec<(String, String)>,
    status: Option<u16>,
    head_sent: bool,
}

impl<W: Write> RawHttpSink<W> {
    /// Creates a sink over `writer`.
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            headers: Vec::new(),
            status: None,
            head_sent: false,
        }
    }

    /// Returns the headers recorded so far.
    pub fn headers(&self) -> &[(String, String)] {
        &self.headers
    }

    /// Returns the status recorded for this response, if any.
    pub fn status(&self) -> Option<u16> {
        self.status
    }

    /// Whether the status line and headers have gone out.
    pub fn head_sent(&self) -> bool {
        self.head_sent
    }

    /// Completes the response and returns the underlying writer.
    ///
    /// If no body was written, the head is sent with `Content-Length: 0`.
    ///
    /// # Errors
    ///
    /// Returns an error if writing or flushing the head fails.
    pub fn finish(mut self) -> io::Result<W> {
        if !self.head_sent {
            self.send_head(0)?;
            self.writer.flush()?;
        }
        Ok(self.writer)
    }

    /// Consumes the sink and returns the underlying writer as-is.
    pub fn into_inner(self) -> W {
        self.writer
    }

    fn send_head(&mut self, content_length: usize) -> io::Result<()> {
        let status = self.status.unwrap_or(200);
        let reason = StatusCode::from_u16(status)
            .ok()
            .and_then(|code| code.canonical_reason())
            .unwrap_or("");

        let mut head = Vec::with_capacity(128);
        write!(head, "HTTP/1.1 {} {}\r\n", status, reason)?;
        for (name, value) in &self.headers {
            if name.eq_ignore_ascii_case("content-length")
                || name.eq_ignore_ascii_case("transfer-encoding")
            {
                continue;
            }
            write!(head, "{}: {}\r\n", name, value)?;
        }
        write!(head, "Content-Length: {}\r\n\r\n", content_length)?;

        self.head_sent = true;
        self.writer.write_all(&head)
    }
}

impl<W: Write> ResponseSink for RawHttpSink<W> {
    fn set_header(&mut self, name: &str, value: &str) -> io::Result<()> {
        if self.head_sent {
            tracing::debug!(header = name, "headers already sent, ignoring");
            return Ok(());
        }
        HeaderName::from_bytes(name.as_bytes()).map_err(invalid_input)?;
        HeaderValue::from_str(value).map_err(invalid_input)?;

        match self
            .headers
            .iter_mut()
            .find(|(existing, _)| existing.eq_ignore_ascii_case(name))
        {
            Some(entry) => entry.1 = value.to_string(),
            None => self.headers.push((name.to_string(), value.to_string())),
        }
        Ok(())
    }

    fn write_status(&mut self, status: u16) -> io::Result<()> {
        if self.head_sent || self.status.is_some() {
            tracing::debug!(status, "status already set, ignoring");
            return Ok(());
        }
        self.status = Some(status);
        Ok(())
    }

    fn write_body(&mut self, body: &[u8]) -> io::Result<usize> {
        if self.head_sent {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                "response body already written",
            ));
        }
        if self.status.is_none() {
            self.status = Some(200);
        }
        self.send_head(body.len())?;
        self.writer.write_all(body)?;
        self.writer.flush()?;
        Ok(body.len())
    }
}

fn invalid_input<E>(err: E) -> io::Error
where
    E: std::error::Error + Send + Sync + 'static,
{
    io::Error::new(io::ErrorKind::InvalidInput, err)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_sink_framing() {
        let mut sink = RawHttpSink::new(Vec::new());
        sink.set_header("Content-Type", "application/json").unwrap();
        sink.write_status(404).unwrap();
        assert!(!sink.head_sent());
        sink.write_body(b"{}").unwrap();

        let out = String::from_utf8(sink.into_inner()).unwrap();
        assert_eq!(
            out,
            "HTTP/1.1 404 Not Found\r\nContent-Type: application/json\r\nContent-Length: 2\r\n\r\n{}"
        );
    }

    #[test]
    fn test_raw_sink_body_implies_ok() {
        let mut sink = RawHttpSink::new(Vec::new());
        sink.write_body(b"x").unwrap();
        sink.write_status(500).unwrap();

        let out = String::from_utf8(sink.into_inner()).unwrap();
        assert_eq!(out, "HTTP/1.1 200 OK\r\nContent-Length: 1\r\n\r\nx");
    }

    #[test]
    fn test_raw_sink_second_status_ignored() {
        let mut sink = RawHttpSink::new(Vec::new());
        sink.write_status(201).unwrap();
        sink.write_status(500).unwrap();
        assert_eq!(sink.status(), Some(201));
    }

    #[test]
    fn test_raw_sink_finish_without_body() {
        let mut sink = RawHttpSink::new(Vec::new());
        sink.write_status(204).unwrap();

        let out = String::from_utf8(sink.finish().unwrap()).unwrap();
        assert_eq!(out, "HTTP/1.1 204 No Content\r\nContent-Length: 0\r\n\r\n");
    }

    #[test]
    fn test_raw_sink_caller_length_replaced() {
        let mut sink = RawHttpSink::new(Vec::new());
        sink.set_header("Content-Length", "999").unwrap();
        sink.set_header("Transfer-Encoding", "chunked").unwrap();
        sink.write_body(b"abc").unwrap();

        let out = String::from_utf8(sink.into_inner()).unwrap();
        assert_eq!(out, "HTTP/1.1 200 OK\r\nContent-Length: 3\r\n\r\nabc");
    }

    #[test]
    fn test_raw_sink_single_body_write() {
        let mut sink = RawHttpSink::new(Vec::new());
        sink.write_body(b"a").unwrap();
        let err = sink.write_body(b"b").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidInput);
    }

    #[test]
    fn test_raw_sink_header_after_head_dropped() {
        let mut sink = RawHttpSink::new(Vec::new());
        sink.write_body(b"{}").unwrap();
        sink.set_header("X-Late", "1").unwrap();
        assert!(sink.headers().is_empty());

        let out = String::from_utf8(sink.into_inner()).unwrap();
        assert!(!out.contains("X-Late"));
    }

    #[test]
    fn test_raw_sink_header_replaced_case_insensitively() {
        let mut sink = RawHttpSink::new(Vec::new());
        sink.set_header("content-type", "text/plain").unwrap();
        sink.set_header("Content-Type", "application/json").unwrap();
        assert_eq!(
            sink.headers(),
            &[("content-type".to_string(), "application/json".to_string())]
        );
    }

    #[test]
    fn test_raw_sink_rejects_invalid_header() {
        let mut sink = RawHttpSink::new(Vec::new());
        let err = sink.set_header("Bad Header", "x").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidInput);
    }

    #[test]
    fn test_response_sink_rejects_invalid_status() {
        let mut response = Response::new(Vec::new());
        let err = response.write_status(42).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidInput);
    }

    #[test]
    fn test_response_sink_records_everything() {
        let mut response = Response::new(Vec::new());
        response.set_header("Content-Type", "application/json").unwrap();
        response.write_status(201).unwrap();
        assert_eq!(response.write_body(b"abc").unwrap(), 3);

        assert_eq!(response.status(), StatusCode::CREATED);
        assert_eq!(response.headers()["content-type"], "application/json");
        assert_eq!(response.body(), b"abc");
    }
}
