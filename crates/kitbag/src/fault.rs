//! Message-plus-call-site error type

// Standard library
use std::borrow::Cow;
use std::fmt;
use std::panic::Location;

/// Source location captured at the point a fault was produced.
///
/// Columns are 1-based, matching the compiler's own diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CallSite {
    /// The file containing the call site
    pub file: Cow<'static, str>,
    /// The line number of the call site
    pub line: u32,
    /// The column number of the call site
    pub column: u32,
}

impl CallSite {
    /// Capture the caller's location.
    ///
    /// Walks up through `#[track_caller]` frames, so a helper that is
    /// itself `#[track_caller]` reports its own caller instead.
    #[must_use]
    #[track_caller]
    pub fn here() -> Self {
        Location::caller().into()
    }
}

impl From<&'static Location<'static>> for CallSite {
    fn from(location: &'static Location<'static>) -> Self {
        Self {
            file: Cow::Borrowed(location.file()),
            line: location.line(),
            column: location.column(),
        }
    }
}

impl fmt::Display for CallSite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.file, self.line, self.column)
    }
}

/// A reusable error carrying a human-readable message and the call site
/// where it was produced.
///
/// `Display` renders the message alone; `Debug` prefixes it with the
/// call site for diagnostics:
///
/// ```
/// use kitbag::Fault;
///
/// let fault = Fault::new("connection refused");
/// assert_eq!(fault.to_string(), "connection refused");
/// assert!(format!("{fault:?}").contains("connection refused"));
/// ```
#[derive(Clone, PartialEq, Eq, Hash, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[error("{message}")]
pub struct Fault {
    message: Cow<'static, str>,
    site: CallSite,
}

impl Fault {
    /// Create a fault with the given message, capturing the caller's site.
    #[must_use]
    #[track_caller]
    pub fn new(message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            message: message.into(),
            site: CallSite::here(),
        }
    }

    /// Create a fault with a generic message, for cases where only the
    /// call site matters.
    #[must_use]
    #[track_caller]
    pub fn unspecified() -> Self {
        Self::new("an error occurred")
    }

    /// The error message
    #[must_use]
    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The call site where the fault was produced
    #[must_use]
    #[inline]
    pub fn site(&self) -> &CallSite {
        &self.site
    }
}

impl fmt::Debug for Fault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.site, self.message)
    }
}
