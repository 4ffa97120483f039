//! Required-value helpers for `Option`

// Standard library
use std::borrow::Cow;

// Internal crates
use crate::fault::Fault;

const ABSENT_VALUE: &str = "a required value was absent";

/// Extension trait turning absent values into [`Fault`]s.
///
/// # Examples
///
/// ```
/// use kitbag::{Fault, OptionExt};
///
/// fn port(config: Option<u16>) -> Result<u16, Fault> {
///     config.require_with(|| "port was not configured")
/// }
///
/// assert_eq!(port(Some(8080)).unwrap(), 8080);
/// assert_eq!(port(None).unwrap_err().message(), "port was not configured");
/// ```
pub trait OptionExt<T> {
    /// Unwrap the value, producing a [`Fault`] with a default message
    /// and the caller's site when absent.
    #[track_caller]
    fn require(self) -> Result<T, Fault>;

    /// Unwrap the value, producing a [`Fault`] with a lazily built
    /// message when absent.
    #[track_caller]
    fn require_with<F, M>(self, message: F) -> Result<T, Fault>
    where
        F: FnOnce() -> M,
        M: Into<Cow<'static, str>>;

    /// Pass the value through, asserting in debug builds when absent.
    ///
    /// Release builds return the absent value silently.
    #[track_caller]
    fn assert_present(self) -> Self;
}

impl<T> OptionExt<T> for Option<T> {
    #[inline]
    fn require(self) -> Result<T, Fault> {
        match self {
            Some(value) => Ok(value),
            None => Err(Fault::new(ABSENT_VALUE)),
        }
    }

    #[inline]
    fn require_with<F, M>(self, message: F) -> Result<T, Fault>
    where
        F: FnOnce() -> M,
        M: Into<Cow<'static, str>>,
    {
        match self {
            Some(value) => Ok(value),
            None => Err(Fault::new(message())),
        }
    }

    #[inline]
    fn assert_present(self) -> Self {
        debug_assert!(self.is_some(), "{ABSENT_VALUE}");
        self
    }
}
