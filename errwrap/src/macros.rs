//! Variadic front-ends for the wrapping functions

/// Wrap the error in a slot with any number of fragments.
///
/// Expands to [`wrap`](crate::wrap()) with the fragments collected into a
/// `&[&dyn Fragment]`, so fragments may have different types.
///
/// ```rust
/// use errwrap::Error;
///
/// let user_id = 7u64;
/// let mut err = Some(Error::new("timeout"));
/// errwrap::wrap!(&mut err, "fetch user", user_id, None::<&str>);
///
/// assert_eq!(err.unwrap().message(), "fetch user--->7--->timeout");
/// ```
#[macro_export]
macro_rules! wrap {
    ($err:expr $(, $msg:expr)* $(,)?) => {
        $crate::wrap($err, &[$(&$msg as &dyn $crate::Fragment),*])
    };
}

/// Return-based variant of [`wrap!`]: evaluates to the wrapped `Option`.
#[macro_export]
macro_rules! wrapped {
    ($err:expr $(, $msg:expr)* $(,)?) => {
        $crate::wrapped($err, &[$(&$msg as &dyn $crate::Fragment),*])
    };
}

#[cfg(test)]
mod tests {
    use crate::Error;

    #[test]
    fn test_wrap_macro() {
        let attempt = 2u8;
        let mut err = Some(Error::new("refused"));
        crate::wrap!(&mut err, "connect", format!("attempt {}", attempt),);

        assert_eq!(
            err.map(|e| e.into_message()).as_deref(),
            Some("connect--->attempt 2--->refused")
        );
    }

    #[test]
    fn test_wrap_macro_no_messages() {
        let mut err = Some(Error::new("refused"));
        let current = crate::wrap!(&mut err).map(|e| e.to_string());
        assert_eq!(current.as_deref(), Some("refused"));

        let mut none: Option<Error> = None;
        assert!(crate::wrap!(&mut none, "ignored").is_none());
    }

    #[test]
    fn test_wrapped_macro() {
        let err = crate::wrapped!(Some(Error::new("eof")), "read", None::<&str>, "header");
        assert_eq!(err.map(|e| e.into_message()).as_deref(), Some("read--->header--->eof"));
    }
}
