//! Prelude module for convenient imports.
//!
//! Provides a single `use kitbag::prelude::*;` import that brings in
//! the extension traits and the types they hand back.
//!
//! # Examples
//!
//! ```rust
//! use kitbag::prelude::*;
//!
//! let shortest_first = ["carol", "bob"].sorted_on(|name| name.len(), Order::Forward);
//! assert_eq!(shortest_first, ["bob", "carol"]);
//!
//! let missing: Option<u32> = None;
//! assert!(missing.require().is_err());
//! ```

// ============================================================================
// FAULTS: error values and call sites
// ============================================================================

pub use crate::diagnostic::Diagnostic;
pub use crate::fault::{CallSite, Fault};
pub use crate::{bail, ensure, fault};

// ============================================================================
// CASTING: checked downcasts
// ============================================================================

pub use crate::cast::{cast, cast_boxed, cast_mut, cast_or_assert, cast_or_assert_with, cast_with};

// ============================================================================
// OPTIONS: presence requirements
// ============================================================================

pub use crate::option::OptionExt;

// ============================================================================
// SEQUENCES: indexing, sorting, compaction
// ============================================================================

pub use crate::sequence::{Compact, Order, SliceExt};

// ============================================================================
// TEXT: base64 and case conversion
// ============================================================================

pub use crate::text::{StrExt, from_base64, to_base64};

// ============================================================================
// ENVIRONMENT: typed variable access
// ============================================================================

pub use crate::env::{Environment, Kind, Setting, Settings, Typed, Value, arguments};

// ============================================================================
// MACROS-GATED: validated literals
// ============================================================================

#[cfg(feature = "macros")]
pub use kitbag_macros::{date, link, mailto, url};
