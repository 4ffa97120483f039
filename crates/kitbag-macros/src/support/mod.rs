//! Internal support utilities for the literal macros.

pub mod diag;
