//! The textual Error type produced by wrapping

use std::fmt;

/// A plain textual error.
///
/// This is the only error shape `errwrap` produces:
/// - `message`: the human-readable text, including any flattened context
/// - `source`: an underlying error, only when a caller attached one
///
/// Wrapping never sets `source`; the previous error is folded into `message`.
///
/// # Example
///
/// ```rust
/// use errwrap::Error;
///
/// let io = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
/// let err = Error::new("config.json not found").set_source(io);
///
/// assert_eq!(err.message(), "config.json not found");
/// assert!(err.source_ref().is_some());
/// ```
pub struct Error {
    message: String,
    source: Option<anyhow::Error>,
}

impl Error {
    /// Create a new error with the given message and no source
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            source: None,
        }
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Get the source error (if any)
    pub fn source_ref(&self) -> Option<&anyhow::Error> {
        self.source.as_ref()
    }

    /// Set the source error.
    ///
    /// # Panics (debug only)
    /// Panics in debug mode if source was already set.
    pub fn set_source(mut self, source: impl Into<anyhow::Error>) -> Self {
        debug_assert!(self.source.is_none(), "source error already set");
        self.source = Some(source.into());
        self
    }

    /// Consume the error, returning its message
    pub fn into_message(self) -> String {
        self.message
    }
}

// Display is the message alone; it is what the next wrap folds in.
impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)?;

        if let Some(source) = &self.source {
            writeln!(f)?;
            writeln!(f)?;
            write!(f, "    Source: {:?}", source)?;
        }

        Ok(())
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_deref()
            .map(|e| e as &(dyn std::error::Error + 'static))
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::new(err.to_string()).set_source(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_error_creation() {
        let err = Error::new("page 'context' not found");
        assert_eq!(err.message(), "page 'context' not found");
        assert!(err.source_ref().is_none());
        assert!(err.source().is_none());
    }

    #[test]
    fn test_display_is_message_only() {
        let io_err = std::io::Error::new(std::io::ErrorKind::Other, "disk full");
        let err = Error::new("write failed").set_source(io_err);

        assert_eq!(err.to_string(), "write failed");
    }

    #[test]
    fn test_debug_includes_source() {
        let io_err = std::io::Error::new(std::io::ErrorKind::Other, "disk full");
        let err = Error::new("write failed").set_source(io_err);

        let debug = format!("{:?}", err);
        assert!(debug.starts_with("write failed"));
        assert!(debug.contains("Source:"));
        assert!(debug.contains("disk full"));

        assert_eq!(format!("{:?}", Error::new("plain")), "plain");
    }

    #[test]
    fn test_set_source() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err = Error::new("config.json not found").set_source(io_err);

        assert!(err.source_ref().is_some());
        assert_eq!(err.source().map(|s| s.to_string()), Some("file not found".to_string()));
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: Error = io_err.into();

        assert_eq!(err.message(), "denied");
        assert!(err.source().is_some());
    }

    #[test]
    fn test_into_message() {
        assert_eq!(Error::new("boom").into_message(), "boom");
    }
}
