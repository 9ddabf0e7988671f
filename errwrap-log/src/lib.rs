//! # errwrap-log
//!
//! Log an error with context and the request that triggered it, without
//! touching the error itself.
//!
//! `wrap_log` is a sibling of [`errwrap::wrap`], not a composition: it builds
//! the same combined message, writes one [`Record`] to a [`Sink`], and leaves
//! the caller's error as it was. Callers that want both effects call both.
//!
//! ## Usage
//!
//! ```rust
//! use errwrap::Error;
//! use errwrap_log::{wrap_log_to, MemorySink};
//!
//! let sink = MemorySink::new();
//! let err = Some(Error::new("card declined"));
//!
//! wrap_log_to(&sink, err.as_ref(), &"order 9", &[&"charge", &"retry 2"]);
//!
//! let records = sink.records();
//! assert_eq!(records.len(), 1);
//! assert_eq!(
//!     records[0].to_string(),
//!     r#"charge--->retry 2 request: "order 9" Error: card declined"#
//! );
//! assert_eq!(err.unwrap().message(), "card declined");
//! ```

mod record;
mod sink;

pub use errwrap::Fragment;
pub use record::Record;
pub use sink::{LogSink, MemorySink, Sink, SinkConfig, DEFAULT_TARGET};

use std::fmt;

/// Write one record describing `err` to `sink`.
///
/// Does nothing when `err` is `None`. The request is rendered with `Debug`,
/// the error with `Display`. Wrap the request in [`plain`] to render it with
/// `Display` instead.
pub fn wrap_log_to<E>(
    sink: &dyn Sink,
    err: Option<&E>,
    request: &dyn fmt::Debug,
    msgs: &[&dyn Fragment],
) where
    E: fmt::Display + ?Sized,
{
    let Some(err) = err else {
        return;
    };

    let message = errwrap::combine(msgs);
    sink.record(Record::new(message, format!("{:?}", request), err.to_string()));
}

/// [`wrap_log_to`] using the global `log` facade through [`LogSink::default`].
pub fn wrap_log<E>(err: Option<&E>, request: &dyn fmt::Debug, msgs: &[&dyn Fragment])
where
    E: fmt::Display + ?Sized,
{
    wrap_log_to(&LogSink::default(), err, request, msgs);
}

/// Request adapter whose `Debug` output is the value's `Display` output
#[derive(Clone, Copy)]
pub struct Plain<T>(pub T);

impl<T: fmt::Display> fmt::Debug for Plain<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// Log `value` unquoted, the way it displays.
///
/// ```rust
/// use errwrap::Error;
/// use errwrap_log::{plain, wrap_log_to, MemorySink};
///
/// let sink = MemorySink::new();
/// wrap_log_to(&sink, Some(&Error::new("declined")), &plain("order 9"), &[&"charge"]);
/// assert_eq!(sink.records()[0].to_string(), "charge request: order 9 Error: declined");
/// ```
pub fn plain<T: fmt::Display>(value: T) -> Plain<T> {
    Plain(value)
}

/// Variadic front-end for [`wrap_log_to`] and [`wrap_log`].
///
/// ```rust
/// use errwrap::Error;
/// use errwrap_log::MemorySink;
///
/// let sink = MemorySink::new();
/// let err = Error::new("timeout");
/// let user_id = 7u64;
///
/// errwrap_log::wrap_log!(&sink => Some(&err), "GET /users", "fetch user", user_id);
/// assert_eq!(sink.records()[0].message(), "fetch user--->7");
/// ```
#[macro_export]
macro_rules! wrap_log {
    ($sink:expr => $err:expr, $req:expr $(, $msg:expr)* $(,)?) => {
        $crate::wrap_log_to($sink, $err, &$req, &[$(&$msg as &dyn $crate::Fragment),*])
    };
    ($err:expr, $req:expr $(, $msg:expr)* $(,)?) => {
        $crate::wrap_log($err, &$req, &[$(&$msg as &dyn $crate::Fragment),*])
    };
}
