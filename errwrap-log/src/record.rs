//! One annotated log line

use std::fmt;

/// What a single `wrap_log` call writes to a sink.
///
/// Rendered as `{message} request: {request} Error: {error}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    message: String,
    request: String,
    error: String,
}

impl Record {
    /// Create a record from already rendered parts
    pub fn new(
        message: impl Into<String>,
        request: impl Into<String>,
        error: impl Into<String>,
    ) -> Self {
        Self {
            message: message.into(),
            request: request.into(),
            error: error.into(),
        }
    }

    /// The combined context message
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The request, rendered with `Debug`
    pub fn request(&self) -> &str {
        &self.request
    }

    /// The original error's text
    pub fn error(&self) -> &str {
        &self.error
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} request: {} Error: {}", self.message, self.request, self.error)
    }
}
