//! Convenient fault-construction macros
//!
//! These expand at the call site, so the captured [`CallSite`](crate::CallSite)
//! points at the macro invocation rather than library internals.

/// Create a [`Fault`](crate::Fault) with an optional formatted message.
///
/// # Examples
///
/// ```rust
/// use kitbag::fault;
///
/// let plain = fault!("config missing");
/// let formatted = fault!("config missing at {}", "/etc/app.toml");
/// let generic = fault!();
/// ```
#[macro_export]
macro_rules! fault {
    () => {
        $crate::Fault::unspecified()
    };
    ($msg:literal) => {
        $crate::Fault::new($msg)
    };
    ($fmt:expr, $($arg:tt)*) => {
        $crate::Fault::new(format!($fmt, $($arg)*))
    };
}

/// Ensure a condition holds or return a [`Fault`](crate::Fault) from the
/// enclosing function.
///
/// The fault is passed through `Into`, so the enclosing function may
/// return any error type convertible from `Fault`.
///
/// # Examples
///
/// ```rust
/// use kitbag::{Fault, ensure};
///
/// fn validate_age(age: u32) -> Result<(), Fault> {
///     ensure!(age >= 18, "age must be at least 18, got {}", age);
///     Ok(())
/// }
///
/// assert!(validate_age(20).is_ok());
/// assert!(validate_age(16).is_err());
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $msg:literal) => {
        if !($cond) {
            return Err($crate::fault!($msg).into());
        }
    };
    ($cond:expr, $fmt:expr, $($arg:tt)*) => {
        if !($cond) {
            return Err($crate::fault!($fmt, $($arg)*).into());
        }
    };
}

/// Return a [`Fault`](crate::Fault) from the enclosing function.
///
/// Equivalent to `return Err(fault!(...).into())`.
///
/// # Examples
///
/// ```rust
/// use kitbag::{Fault, bail};
///
/// fn load(path: &str) -> Result<String, Fault> {
///     if path.is_empty() {
///         bail!("path must not be empty");
///     }
///     Ok(path.to_owned())
/// }
///
/// assert!(load("").is_err());
/// ```
#[macro_export]
macro_rules! bail {
    ($msg:literal) => {
        return Err($crate::fault!($msg).into())
    };
    ($fmt:expr, $($arg:tt)*) => {
        return Err($crate::fault!($fmt, $($arg)*).into())
    };
}
