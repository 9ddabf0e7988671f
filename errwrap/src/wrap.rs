//! Wrapping errors with context
//!
//! Wrapping flattens: the new error's text is the combined context, the
//! delimiter, then the old error's text including its causes. Nothing
//! structural is kept, so [`unwrap`](crate::unwrap) on a wrapped error yields
//! `None`.

use crate::fragment::{combine, Fragment, DELIMITER};
use crate::unwrap::flatten;
use crate::Error;
use std::fmt;

/// An error type that can stand in for a freshly wrapped error.
///
/// `from_text` must build a leaf error carrying exactly `text`.
pub trait Wrappable: fmt::Display + Sized {
    /// Build a new error whose text is `text`
    fn from_text(text: String) -> Self;

    /// The text folded into the wrapping error, causes included
    fn flat_text(&self) -> String {
        self.to_string()
    }
}

impl Wrappable for Error {
    fn from_text(text: String) -> Self {
        Error::new(text)
    }

    fn flat_text(&self) -> String {
        flatten(self)
    }
}

impl Wrappable for anyhow::Error {
    fn from_text(text: String) -> Self {
        anyhow::Error::new(Error::new(text))
    }

    fn flat_text(&self) -> String {
        flatten(&**self)
    }
}

impl Wrappable for Box<dyn std::error::Error + Send + Sync> {
    fn from_text(text: String) -> Self {
        Box::new(Error::new(text))
    }

    fn flat_text(&self) -> String {
        flatten(&**self)
    }
}

/// Wrap the error held in `err` with the given messages.
///
/// - If `err` is `None`, returns `None` and leaves the slot alone.
/// - If the combined message is empty, the slot keeps its original error.
/// - Otherwise the slot is replaced with a new error reading
///   `combined--->original`.
///
/// Returns the error now held in the slot.
///
/// ```rust
/// use errwrap::{wrap, Error};
///
/// let mut err = Some(Error::new("connection refused"));
/// wrap(&mut err, &[&"fetch user", &7u32]);
///
/// assert_eq!(err.unwrap().message(), "fetch user--->7--->connection refused");
/// ```
pub fn wrap<'e, E: Wrappable>(err: &'e mut Option<E>, msgs: &[&dyn Fragment]) -> Option<&'e E> {
    if let Some(original) = err.as_ref() {
        let message = combine(msgs);
        if !message.is_empty() {
            let text = format!("{}{}{}", message, DELIMITER, original.flat_text());
            *err = Some(E::from_text(text));
        }
    }
    err.as_ref()
}

/// Return-based form of [`wrap`]: `err = wrapped(err, ..)`.
pub fn wrapped<E: Wrappable>(mut err: Option<E>, msgs: &[&dyn Fragment]) -> Option<E> {
    wrap(&mut err, msgs);
    err
}

/// Wrap a present error by value.
pub fn annotate<E: Wrappable>(err: E, msgs: &[&dyn Fragment]) -> E {
    let message = combine(msgs);
    if message.is_empty() {
        return err;
    }
    E::from_text(format!("{}{}{}", message, DELIMITER, err.flat_text()))
}

/// Wrapping on the error arm of a `Result`.
pub trait ResultExt<T, E> {
    /// Annotate the error, if any, with the given messages
    fn wrap_err(self, msgs: &[&dyn Fragment]) -> Result<T, E>;
}

impl<T, E: Wrappable> ResultExt<T, E> for Result<T, E> {
    fn wrap_err(self, msgs: &[&dyn Fragment]) -> Result<T, E> {
        self.map_err(|err| annotate(err, msgs))
    }
}
