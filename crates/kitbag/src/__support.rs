//! Runtime support for the validated-literal macros
//!
//! Not public API. The macros in `kitbag-macros` expand to calls into
//! this module after validating their input, so the conversions here
//! cannot fail for code that compiled.

// External crates
use chrono::NaiveDate;
use url::Url;

/// Re-parse a URL literal that was already validated when the macro
/// expanded.
#[must_use]
pub fn prevalidated_url(text: &str) -> Url {
    Url::parse(text).expect("url literal was validated when the macro expanded")
}

/// Rebuild a date literal that was already validated when the macro
/// expanded.
#[must_use]
pub fn prevalidated_date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day)
        .expect("date literal was validated when the macro expanded")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prevalidated_url_parses() {
        let url = prevalidated_url("https://example.com/path?q=1");
        assert_eq!(url.scheme(), "https");
        assert_eq!(url.host_str(), Some("example.com"));
    }

    #[test]
    fn test_prevalidated_date_builds() {
        let date = prevalidated_date(2024, 2, 29);
        assert_eq!(date.to_string(), "2024-02-29");
    }

    #[test]
    #[should_panic(expected = "date literal was validated")]
    fn test_prevalidated_date_panics_on_impossible_input() {
        let _ = prevalidated_date(2023, 2, 29);
    }
}
