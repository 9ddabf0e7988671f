//! Walking an error's cause chain

use crate::fragment::DELIMITER;
use std::error::Error as StdError;
use std::iter::FusedIterator;

/// Return the error that `err` directly wraps, if it exposes one.
///
/// The capability is [`std::error::Error::source`]. Errors that don't
/// override it, including aggregates holding several errors, yield `None`.
pub fn unwrap<'a>(err: &'a (dyn StdError + 'static)) -> Option<&'a (dyn StdError + 'static)> {
    err.source()
}

/// Iterate from `err` down to its root cause, unwrapping one step at a time.
///
/// ```rust
/// use errwrap::{chain, Error};
///
/// let io = std::io::Error::new(std::io::ErrorKind::Other, "disk full");
/// let err = Error::new("save failed").set_source(io);
///
/// let texts: Vec<String> = chain(&err).map(|e| e.to_string()).collect();
/// assert_eq!(texts, ["save failed", "disk full"]);
/// ```
pub fn chain<'a>(err: &'a (dyn StdError + 'static)) -> Chain<'a> {
    Chain { next: Some(err) }
}

/// The last error in `err`'s chain; `err` itself when it wraps nothing.
pub fn root_cause<'a>(err: &'a (dyn StdError + 'static)) -> &'a (dyn StdError + 'static) {
    let mut current = err;
    while let Some(next) = unwrap(current) {
        current = next;
    }
    current
}

/// The text of every error in `err`'s chain, newest first, joined with
/// [`DELIMITER`].
///
/// A link whose text is empty or repeats the previous link is skipped, so
/// errors that already print their source don't show it twice.
///
/// ```rust
/// use errwrap::{flatten, Error};
///
/// let io = std::io::Error::new(std::io::ErrorKind::Other, "disk full");
/// let err = Error::new("write failed").set_source(io);
/// assert_eq!(flatten(&err), "write failed--->disk full");
/// ```
pub fn flatten(err: &(dyn StdError + 'static)) -> String {
    let mut text = String::new();
    let mut previous: Option<String> = None;
    for link in chain(err) {
        let current = link.to_string();
        if current.is_empty() || previous.as_deref() == Some(current.as_str()) {
            continue;
        }
        if !text.is_empty() {
            text.push_str(DELIMITER);
        }
        text.push_str(&current);
        previous = Some(current);
    }
    text
}

/// Iterator returned by [`chain`]
#[derive(Clone)]
pub struct Chain<'a> {
    next: Option<&'a (dyn StdError + 'static)>,
}

impl<'a> Iterator for Chain<'a> {
    type Item = &'a (dyn StdError + 'static);

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = unwrap(current);
        Some(current)
    }
}

impl FusedIterator for Chain<'_> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{wrap, Error};
    use std::fmt;

    /// Holds several errors but exposes none of them as a source
    #[derive(Debug)]
    struct Joined(Vec<Error>);

    impl fmt::Display for Joined {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            for (i, err) in self.0.iter().enumerate() {
                if i > 0 {
                    write!(f, "; ")?;
                }
                write!(f, "{}", err)?;
            }
            Ok(())
        }
    }

    impl StdError for Joined {}

    #[test]
    fn test_unwrap_without_source() {
        let err = Error::new("leaf");
        assert!(unwrap(&err).is_none());
    }

    #[test]
    fn test_unwrap_returns_source() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err = Error::new("open failed").set_source(io_err);

        let inner = unwrap(&err).expect("source should be exposed");
        assert_eq!(inner.to_string(), "missing");
        assert!(inner.downcast_ref::<std::io::Error>().is_some());
    }

    #[test]
    fn test_unwrap_aggregate_is_none() {
        let err = Joined(vec![Error::new("a"), Error::new("b")]);
        assert_eq!(err.to_string(), "a; b");
        assert!(unwrap(&err).is_none());
    }

    #[test]
    fn test_unwrap_after_wrap_is_none() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let mut err = Some(Error::new("open failed").set_source(io_err));

        let wrapped = wrap(&mut err, &[&"load"]).expect("error should still be present");
        assert!(unwrap(wrapped).is_none());
    }

    #[test]
    fn test_unwrap_third_party_error() {
        let parse_err = serde_json::from_str::<u8>("{").unwrap_err();
        assert!(unwrap(&parse_err).is_none());
    }

    #[test]
    fn test_chain_and_root_cause() {
        let io_err = std::io::Error::new(std::io::ErrorKind::Other, "disk full");
        let middle = Error::new("flush").set_source(io_err);
        let top = Error::new("save").set_source(middle);

        let texts: Vec<String> = chain(&top).map(|e| e.to_string()).collect();
        assert_eq!(texts, ["save", "flush", "disk full"]);
        assert_eq!(root_cause(&top).to_string(), "disk full");
    }

    #[test]
    fn test_flatten_walks_sources() {
        let io_err = std::io::Error::new(std::io::ErrorKind::Other, "disk full");
        let middle = Error::new("flush").set_source(io_err);
        let top = Error::new("save").set_source(middle);

        assert_eq!(flatten(&top), "save--->flush--->disk full");
        assert_eq!(flatten(&Error::new("leaf")), "leaf");
    }

    #[test]
    fn test_flatten_skips_repeated_text() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = Error::from(io_err);

        assert_eq!(flatten(&err), "denied");
    }

    #[test]
    fn test_root_cause_of_leaf_is_itself() {
        let err = Error::new("leaf");
        assert_eq!(root_cause(&err).to_string(), "leaf");
        assert_eq!(chain(&err).count(), 1);
    }
}
