//! User-facing error with optional explanatory parts

// Standard library
use std::borrow::Cow;

/// An error for user-facing contexts, carrying up to four optional
/// pieces of text: what happened, why it failed, how one might recover,
/// and where to read more.
///
/// All parts default to absent; `Display` falls back to a generic
/// sentence so the type is always printable:
///
/// ```
/// use kitbag::Diagnostic;
///
/// let diagnostic = Diagnostic::new("base64 decode failed")
///     .with_reason("invalid padding")
///     .with_suggestion("check the input was not truncated");
/// assert_eq!(diagnostic.to_string(), "base64 decode failed");
/// assert_eq!(diagnostic.reason(), Some("invalid padding"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, thiserror::Error)]
#[error("{}", .summary.as_deref().unwrap_or("an unknown error occurred"))]
pub struct Diagnostic {
    summary: Option<Cow<'static, str>>,
    reason: Option<Cow<'static, str>>,
    suggestion: Option<Cow<'static, str>>,
    help: Option<Cow<'static, str>>,
}

impl Diagnostic {
    /// Create a diagnostic with the given summary.
    #[must_use]
    pub fn new(summary: impl Into<Cow<'static, str>>) -> Self {
        Self {
            summary: Some(summary.into()),
            ..Self::default()
        }
    }

    /// Set the reason the operation failed.
    #[must_use]
    pub fn with_reason(mut self, reason: impl Into<Cow<'static, str>>) -> Self {
        self.reason = Some(reason.into());
        self
    }

    /// Set a suggestion for how one might recover from the failure.
    #[must_use]
    pub fn with_suggestion(mut self, suggestion: impl Into<Cow<'static, str>>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// Set help text for when the user asks for more.
    #[must_use]
    pub fn with_help(mut self, help: impl Into<Cow<'static, str>>) -> Self {
        self.help = Some(help.into());
        self
    }

    /// A message describing what error occurred
    #[must_use]
    #[inline]
    pub fn summary(&self) -> Option<&str> {
        self.summary.as_deref()
    }

    /// A message describing the reason for the failure
    #[must_use]
    #[inline]
    pub fn reason(&self) -> Option<&str> {
        self.reason.as_deref()
    }

    /// A message describing how one might recover from the failure
    #[must_use]
    #[inline]
    pub fn suggestion(&self) -> Option<&str> {
        self.suggestion.as_deref()
    }

    /// A message providing "help" text if the user requests help
    #[must_use]
    #[inline]
    pub fn help(&self) -> Option<&str> {
        self.help.as_deref()
    }
}
