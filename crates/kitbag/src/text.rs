//! Text helpers: base64 transport encoding and case conversion

// Standard library
use std::sync::LazyLock;

// External crates
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use regex::Regex;

// Internal crates
use crate::diagnostic::Diagnostic;

/// Uppercase run followed by the start of a new word ("HTTPResponse").
static ACRONYM_BOUNDARY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([A-Z]+)([A-Z][a-z]|[0-9])").unwrap());

/// Lowercase or digit followed by an uppercase letter ("userID").
static CASE_BOUNDARY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([a-z0-9])([A-Z])").unwrap());

/// Encode raw bytes with the standard base64 alphabet.
///
/// # Examples
///
/// ```
/// assert_eq!(kitbag::to_base64("hello"), "aGVsbG8=");
/// ```
#[must_use]
pub fn to_base64(bytes: impl AsRef<[u8]>) -> String {
    STANDARD.encode(bytes)
}

/// Decode standard-alphabet base64 into a UTF-8 string.
///
/// Fails with a [`Diagnostic`] describing what was wrong with the
/// input: either the encoding itself or the decoded bytes not forming
/// valid UTF-8.
///
/// # Examples
///
/// ```
/// assert_eq!(kitbag::from_base64("aGVsbG8=").unwrap(), "hello");
/// assert!(kitbag::from_base64("not base64!").is_err());
/// ```
pub fn from_base64(encoded: &str) -> Result<String, Diagnostic> {
    let bytes = STANDARD.decode(encoded).map_err(|error| {
        Diagnostic::new("could not decode base64 input")
            .with_reason(error.to_string())
            .with_suggestion("check that the input uses the standard base64 alphabet with padding")
    })?;
    String::from_utf8(bytes).map_err(|error| {
        Diagnostic::new("decoded base64 input is not valid UTF-8")
            .with_reason(error.to_string())
    })
}

/// Case-conversion methods for string slices.
pub trait StrExt {
    /// Convert `camelCase`, `PascalCase`, or acronym-heavy names to
    /// `snake_case`.
    ///
    /// # Examples
    ///
    /// ```
    /// use kitbag::StrExt;
    ///
    /// assert_eq!("requestTimeout".to_snake_case(), "request_timeout");
    /// assert_eq!("HTTPResponse".to_snake_case(), "http_response");
    /// ```
    fn to_snake_case(&self) -> String;
}

impl StrExt for str {
    fn to_snake_case(&self) -> String {
        let split = ACRONYM_BOUNDARY.replace_all(self, "${1}_${2}");
        let split = CASE_BOUNDARY.replace_all(&split, "${1}_${2}");
        split.to_lowercase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_base64_known_vector() {
        assert_eq!(to_base64("hello"), "aGVsbG8=");
        assert_eq!(to_base64([0xffu8, 0x00]), "/wA=");
    }

    #[test]
    fn test_base64_round_trip() {
        let original = "kitbag: utilities & more";
        let encoded = to_base64(original);
        assert_eq!(from_base64(&encoded).unwrap(), original);
    }

    #[test]
    fn test_base64_round_trip_empty() {
        assert_eq!(to_base64(""), "");
        assert_eq!(from_base64("").unwrap(), "");
    }

    #[test]
    fn test_from_base64_rejects_bad_alphabet() {
        let error = from_base64("not base64!").unwrap_err();
        assert_eq!(error.summary(), Some("could not decode base64 input"));
        assert!(error.reason().is_some());
        assert!(error.suggestion().is_some());
    }

    #[test]
    fn test_from_base64_rejects_non_utf8_payload() {
        // 0xff 0xfe decodes fine but is not a UTF-8 sequence.
        let error = from_base64("//4=").unwrap_err();
        assert_eq!(
            error.summary(),
            Some("decoded base64 input is not valid UTF-8")
        );
        assert!(error.reason().is_some());
    }

    #[test]
    fn test_to_snake_case() {
        let cases = [
            ("requestTimeout", "request_timeout"),
            ("PascalCase", "pascal_case"),
            ("HTTPResponse", "http_response"),
            ("userID", "user_id"),
            ("parseJSONBody", "parse_json_body"),
            ("already_snake", "already_snake"),
            ("simple", "simple"),
            ("Simple", "simple"),
            ("", ""),
        ];
        for (input, expected) in cases {
            assert_eq!(input.to_snake_case(), expected, "input: {input:?}");
        }
    }

    #[test]
    fn test_to_snake_case_with_digits() {
        assert_eq!("retryCount2".to_snake_case(), "retry_count2");
        assert_eq!("HTTP2Settings".to_snake_case(), "http_2_settings");
    }
}
