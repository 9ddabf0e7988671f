//! # errwrap
//!
//! Annotate errors with context, flattening the chain into the message text.
//!
//! ## Design Philosophy
//!
//! - **Wrap**: prepend context to an error held in a slot; an empty slot stays empty
//! - **Unwrap**: read the single cause an error exposes through `source()`
//! - **Flattened text**: a wrapped error reads `newest--->older--->root`, causes
//!   included, and keeps no structural link to what it wrapped
//!
//! ## Usage
//!
//! ```rust
//! use errwrap::{wrap, unwrap, Error};
//!
//! fn read_config() -> errwrap::Result<String> {
//!     Err(Error::new("permission denied"))
//! }
//!
//! let mut err = read_config().err();
//! wrap!(&mut err, "load settings", "config.toml");
//!
//! let err = err.unwrap();
//! assert_eq!(err.message(), "load settings--->config.toml--->permission denied");
//! assert!(unwrap(&err).is_none());
//! ```
//!
//! ## Principles
//!
//! - Wrapping a `None` is always safe, so it can follow any fallible step
//! - Absent and empty fragments contribute nothing, not even a delimiter
//! - Attach structural causes explicitly with [`Error::set_source`]

mod error;
mod fragment;
mod macros;
mod unwrap;
mod wrap;

pub use error::Error;
pub use fragment::{combine, display, Displayed, Fragment, DELIMITER};
pub use unwrap::{chain, flatten, root_cause, unwrap, Chain};
pub use wrap::{annotate, wrap, wrapped, ResultExt, Wrappable};

/// Result type alias using errwrap Error
pub type Result<T> = std::result::Result<T, Error>;
