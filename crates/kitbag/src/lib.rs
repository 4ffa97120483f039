//! # kitbag
//!
//! Small, sharp conveniences for everyday Rust: error values that
//! carry their call site, checked downcasts, bounds-checked indexing
//! and keyed sorting, base64 and case-conversion helpers, typed
//! environment access, and validated literal macros.
//!
//! ## Quick Start
//!
//! ```rust
//! use kitbag::prelude::*;
//!
//! fn lookup(values: &[i32], index: usize) -> Result<i32, Fault> {
//!     values.at(index).copied().require()
//! }
//!
//! assert_eq!(lookup(&[1, 2, 3], 1).unwrap(), 2);
//!
//! let error = lookup(&[1, 2, 3], 9).unwrap_err();
//! assert_eq!(error.message(), "a required value was absent");
//! ```
//!
//! ## Validated Literals
//!
//! With the `macros` feature (on by default), URL, link, mailto, and
//! date literals are rejected while the crate compiles instead of at
//! run time:
//!
//! ```rust
//! let homepage = kitbag::url!("https://example.com");
//! assert_eq!(homepage.scheme(), "https");
//!
//! let released = kitbag::date!("2024-02-29");
//! assert_eq!(released.to_string(), "2024-02-29");
//! ```

#[doc(hidden)]
pub mod __support;
pub mod cast;
pub mod diagnostic;
pub mod env;
pub mod fault;
mod macros;
pub mod option;
pub mod prelude;
pub mod sequence;
pub mod text;

pub use crate::cast::{cast, cast_boxed, cast_mut, cast_or_assert, cast_or_assert_with, cast_with};
pub use crate::diagnostic::Diagnostic;
pub use crate::env::{Environment, Kind, Setting, Settings, Typed, Value, arguments};
pub use crate::fault::{CallSite, Fault};
pub use crate::option::OptionExt;
pub use crate::sequence::{Compact, Order, SliceExt};
pub use crate::text::{StrExt, from_base64, to_base64};

/// Validated literal macros, expanded and checked at build time.
#[cfg(feature = "macros")]
pub use kitbag_macros::{date, link, mailto, url};

// Re-exported so macro expansions and callers agree on these types.
pub use ::chrono::NaiveDate;
pub use ::url::Url;
