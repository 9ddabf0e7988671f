//! Message fragments and how they combine

use std::borrow::Cow;
use std::fmt;

/// Separator placed between fragments, and between the context and the
/// wrapped error's text.
pub const DELIMITER: &str = "--->";

/// A piece of context attached to an error.
///
/// `text` returns `None` when the fragment is absent; absent fragments are
/// skipped entirely when messages are combined. Values that are not covered
/// by an impl here can go through [`display`].
pub trait Fragment {
    /// The fragment's text, or `None` if it is absent
    fn text(&self) -> Option<Cow<'_, str>>;
}

impl Fragment for str {
    fn text(&self) -> Option<Cow<'_, str>> {
        Some(Cow::Borrowed(self))
    }
}

impl Fragment for String {
    fn text(&self) -> Option<Cow<'_, str>> {
        Some(Cow::Borrowed(self.as_str()))
    }
}

impl Fragment for Cow<'_, str> {
    fn text(&self) -> Option<Cow<'_, str>> {
        Some(Cow::Borrowed(self.as_ref()))
    }
}

impl Fragment for fmt::Arguments<'_> {
    fn text(&self) -> Option<Cow<'_, str>> {
        Some(match self.as_str() {
            Some(s) => Cow::Borrowed(s),
            None => Cow::Owned(self.to_string()),
        })
    }
}

macro_rules! impl_fragment_via_display {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Fragment for $ty {
                fn text(&self) -> Option<Cow<'_, str>> {
                    Some(Cow::Owned(self.to_string()))
                }
            }
        )*
    };
}

impl_fragment_via_display!(
    char, bool, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64,
    crate::Error, anyhow::Error,
);

impl<T: Fragment> Fragment for Option<T> {
    fn text(&self) -> Option<Cow<'_, str>> {
        self.as_ref().and_then(Fragment::text)
    }
}

impl<T: Fragment + ?Sized> Fragment for &T {
    fn text(&self) -> Option<Cow<'_, str>> {
        (**self).text()
    }
}

impl<T: Fragment + ?Sized> Fragment for Box<T> {
    fn text(&self) -> Option<Cow<'_, str>> {
        (**self).text()
    }
}

/// Adapter that makes any `Display` value usable as a [`Fragment`]
#[derive(Debug, Clone, Copy)]
pub struct Displayed<T>(pub T);

impl<T: fmt::Display> Fragment for Displayed<T> {
    fn text(&self) -> Option<Cow<'_, str>> {
        Some(Cow::Owned(self.0.to_string()))
    }
}

/// Wrap a `Display` value so it can be passed as a fragment.
///
/// ```rust
/// use std::path::Path;
///
/// let path = Path::new("/etc/app.toml");
/// let fragment = errwrap::display(path.display());
/// assert_eq!(errwrap::combine(&[&"open", &fragment]), "open--->/etc/app.toml");
/// ```
pub fn display<T: fmt::Display>(value: T) -> Displayed<T> {
    Displayed(value)
}

/// Join the text of every present, non-empty fragment with [`DELIMITER`],
/// in the order given.
pub fn combine(msgs: &[&dyn Fragment]) -> String {
    let mut message = String::new();
    for text in msgs.iter().filter_map(|msg| msg.text()) {
        if text.is_empty() {
            continue;
        }
        if !message.is_empty() {
            message.push_str(DELIMITER);
        }
        message.push_str(&text);
    }
    message
}
