//! Safe dynamic casting helpers
//!
//! Downcasts over `dyn Any` that report failure as a [`Fault`] naming
//! the target type, instead of a bare `None`.

// Standard library
use std::any::{Any, type_name};
use std::borrow::Cow;

// Internal crates
use crate::fault::Fault;

/// Cast the value to a reference of the given type.
///
/// # Examples
///
/// ```
/// use std::any::Any;
/// use kitbag::cast;
///
/// let value: Box<dyn Any> = Box::new(42_u32);
/// let number: &u32 = cast(value.as_ref())?;
/// assert_eq!(*number, 42);
/// # Ok::<(), kitbag::Fault>(())
/// ```
#[track_caller]
pub fn cast<T: Any>(value: &dyn Any) -> Result<&T, Fault> {
    match value.downcast_ref::<T>() {
        Some(cast) => Ok(cast),
        None => Err(Fault::new(mismatch_message::<T>())),
    }
}

/// Cast the value to a reference of the given type, with a lazily
/// built message replacing the default mismatch text on failure.
///
/// # Examples
///
/// ```
/// use std::any::Any;
/// use kitbag::cast_with;
///
/// let value: Box<dyn Any> = Box::new("text");
/// let fault = cast_with::<u32, _, _>(value.as_ref(), || "expected a count").unwrap_err();
/// assert_eq!(fault.message(), "expected a count");
/// ```
#[track_caller]
pub fn cast_with<T, F, M>(value: &dyn Any, message: F) -> Result<&T, Fault>
where
    T: Any,
    F: FnOnce() -> M,
    M: Into<Cow<'static, str>>,
{
    match value.downcast_ref::<T>() {
        Some(cast) => Ok(cast),
        None => Err(Fault::new(message())),
    }
}

/// Cast the value to a mutable reference of the given type.
#[track_caller]
pub fn cast_mut<T: Any>(value: &mut dyn Any) -> Result<&mut T, Fault> {
    match value.downcast_mut::<T>() {
        Some(cast) => Ok(cast),
        None => Err(Fault::new(mismatch_message::<T>())),
    }
}

/// Cast the boxed value to a box of the given type.
///
/// On failure the value is dropped; use [`cast`] first when the original
/// must survive a failed attempt.
#[track_caller]
pub fn cast_boxed<T: Any>(value: Box<dyn Any>) -> Result<Box<T>, Fault> {
    match value.downcast::<T>() {
        Ok(cast) => Ok(cast),
        Err(_) => Err(Fault::new(mismatch_message::<T>())),
    }
}

/// Cast the value to a reference of the given type, or assert.
///
/// Failed casts halt debug builds with an assertion and silently produce
/// `None` in release builds.
#[track_caller]
pub fn cast_or_assert<T: Any>(value: &dyn Any) -> Option<&T> {
    let cast = value.downcast_ref::<T>();
    debug_assert!(cast.is_some(), "{}", mismatch_message::<T>());
    cast
}

/// Cast the value to a reference of the given type, or assert with a
/// lazily built message.
///
/// Like [`cast_or_assert`], but a failed cast reports `message` instead
/// of the default mismatch text. The message is only built on failure.
#[track_caller]
pub fn cast_or_assert_with<T, F, M>(value: &dyn Any, message: F) -> Option<&T>
where
    T: Any,
    F: FnOnce() -> M,
    M: Into<Cow<'static, str>>,
{
    let cast = value.downcast_ref::<T>();
    debug_assert!(cast.is_some(), "{}", message().into());
    cast
}

fn mismatch_message<T>() -> String {
    format!("could not cast value to type `{}`", type_name::<T>())
}
