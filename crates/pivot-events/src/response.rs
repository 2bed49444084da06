//! Network response model

use http::header::{HeaderName, HeaderValue};
use http::{HeaderMap, StatusCode};
use percent_encoding::percent_decode_str;

/// The response behind a partial navigation. Only the status, a handful of
/// custom headers, and the fragment body matter to the enhancer.
#[derive(Debug, Clone)]
pub struct Response {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: String,
}

impl Response {
    pub fn new(status: StatusCode) -> Self {
        Self {
            status,
            headers: HeaderMap::new(),
            body: String::new(),
        }
    }

    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    /// Attach a header. Malformed names or values are dropped with a warning
    /// rather than failing the whole response.
    pub fn with_header(mut self, name: &str, value: &str) -> Self {
        match (
            HeaderName::from_bytes(name.as_bytes()),
            HeaderValue::from_str(value),
        ) {
            (Ok(parsed_name), Ok(parsed_value)) => {
                self.headers.insert(parsed_name, parsed_value);
            }
            _ => {
                tracing::warn!(header = %name, "Dropping malformed header");
            }
        }
        self
    }

    /// Raw header value, if present and readable as a string.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name)?.to_str().ok()
    }

    /// Header value with the server's query escaping reversed: `+` becomes
    /// a space, percent escapes are decoded.
    pub fn decoded_header(&self, name: &str) -> Option<String> {
        let raw = self.header(name)?;
        let unplussed = raw.replace('+', " ");
        Some(percent_decode_str(&unplussed).decode_utf8_lossy().into_owned())
    }
}
