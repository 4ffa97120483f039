//! # kitbag-macros
//!
//! Validated literal macros for the kitbag utility crate.
//!
//! Each macro takes a single string literal, validates it while the
//! crate compiles, and expands to a ready-made value. A malformed
//! literal is a compile error, so code that builds cannot fail at run
//! time on these values.
//!
//! | Macro | Produces | Accepts |
//! |-------|----------|---------|
//! | [`url!`] | `kitbag::Url` | any absolute URL |
//! | [`link!`] | `kitbag::Url` | an http or https URL |
//! | [`mailto!`] | `kitbag::Url` | an email address, prefixed with `mailto:` |
//! | [`date!`] | `kitbag::NaiveDate` | a calendar date in a supported layout |
//!
//! ## Examples
//!
//! ```ignore
//! use kitbag::{date, link, mailto, url};
//!
//! let custom = url!("app://internal/route");
//! let web = link!("https://example.com/docs");
//! let contact = mailto!("team@example.com");
//! let released = date!("2024-02-29");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

extern crate proc_macro;

use proc_macro::TokenStream;

mod date;
mod link;
mod mailto;
mod support;
mod url;

/// Produce a `kitbag::Url` from a string literal.
///
/// Any absolute URL is accepted; the literal is parsed when the macro
/// expands and a parse failure is reported as a compile error.
///
/// # Example
///
/// ```ignore
/// let homepage = kitbag::url!("https://example.com");
/// assert_eq!(homepage.scheme(), "https");
/// ```
#[proc_macro]
pub fn url(input: TokenStream) -> TokenStream {
    match self::url::expand(input.into()) {
        Ok(expanded) => expanded.into(),
        Err(error) => support::diag::to_compile_error(error),
    }
}

/// Produce a linkable `kitbag::Url` from a string literal.
///
/// Stricter than [`url!`]: the literal must parse and use the `http`
/// or `https` scheme, so the result is something a browser can open.
///
/// # Example
///
/// ```ignore
/// let docs = kitbag::link!("https://example.com/docs");
/// assert_eq!(docs.host_str(), Some("example.com"));
/// ```
#[proc_macro]
pub fn link(input: TokenStream) -> TokenStream {
    match self::link::expand(input.into()) {
        Ok(expanded) => expanded.into(),
        Err(error) => support::diag::to_compile_error(error),
    }
}

/// Produce a `mailto:` `kitbag::Url` from an email address literal.
///
/// The literal is the bare address; the macro validates its shape and
/// prepends the `mailto:` scheme.
///
/// # Example
///
/// ```ignore
/// let contact = kitbag::mailto!("team@example.com");
/// assert_eq!(contact.as_str(), "mailto:team@example.com");
/// ```
#[proc_macro]
pub fn mailto(input: TokenStream) -> TokenStream {
    match self::mailto::expand(input.into()) {
        Ok(expanded) => expanded.into(),
        Err(error) => support::diag::to_compile_error(error),
    }
}

/// Produce a `kitbag::NaiveDate` from a date literal.
///
/// Accepted layouts, tried in order: `%Y-%m-%d`, `%Y/%m/%d`,
/// `%m-%d-%Y`, `%m/%d/%Y`. Impossible dates (such as February 29th of
/// a non-leap year) are compile errors.
///
/// # Example
///
/// ```ignore
/// let released = kitbag::date!("2024-02-29");
/// assert_eq!(released.to_string(), "2024-02-29");
/// ```
#[proc_macro]
pub fn date(input: TokenStream) -> TokenStream {
    match self::date::expand(input.into()) {
        Ok(expanded) => expanded.into(),
        Err(error) => support::diag::to_compile_error(error),
    }
}
