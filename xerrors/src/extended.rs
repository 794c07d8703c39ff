//! The generic extension wrapper

use crate::{chain, BoxError};
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::error::Error;
use std::fmt;

/// An error carrying one extra payload of type `T`.
///
/// This wrapper provides:
/// - `cause`: the wrapped error, reported through `source()`
/// - `data`: the attached payload
///
/// Both are fixed at construction. Display is transparent: the wrapper
/// renders exactly as its cause does, so attaching data never changes an
/// error's message.
///
/// Each instantiation is its own type. `ExtendedError<A>` never matches a
/// search for `ExtendedError<B>`, even when `A` and `B` share a layout.
///
/// # Example
///
/// ```rust
/// use std::error::Error;
/// use xerrors::ExtendedError;
///
/// let io = std::io::Error::new(std::io::ErrorKind::NotFound, "config.toml");
/// let err = ExtendedError::new("retry-budget-3", io);
///
/// assert_eq!(err.to_string(), "config.toml");
/// assert_eq!(*err.data(), "retry-budget-3");
/// assert_eq!(err.source().unwrap().to_string(), "config.toml");
/// ```
#[derive(Debug)]
pub struct ExtendedError<T> {
    cause: BoxError,
    data: T,
}

impl<T> ExtendedError<T> {
    /// Wrap `err` together with `data`
    pub fn new(data: T, err: impl Into<BoxError>) -> Self {
        Self {
            cause: err.into(),
            data,
        }
    }

    /// Get the attached payload
    pub fn data(&self) -> &T {
        &self.data
    }

    /// Get the wrapped error
    pub fn cause(&self) -> &(dyn Error + Send + Sync + 'static) {
        &*self.cause
    }

    /// Split into the payload and the wrapped error
    pub fn into_parts(self) -> (T, BoxError) {
        (self.data, self.cause)
    }
}

impl<T> fmt::Display for ExtendedError<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.cause, f)
    }
}

impl<T: fmt::Debug> Error for ExtendedError<T> {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(&*self.cause)
    }
}

/// Grouped structured view: `{"error": <cause message>, "data": <data>}`.
impl<T: Serialize> Serialize for ExtendedError<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(2))?;
        map.serialize_entry("error", &self.cause.to_string())?;
        map.serialize_entry("data", &self.data)?;
        map.end()
    }
}

/// Wrap `err` with `data`, returning the new outermost error.
///
/// There is no "absent error" to pass here; to extend an error that may not
/// exist, go through [`ResultExt::extend_err`] or `Option::map`.
pub fn extend<T, E>(data: T, err: E) -> BoxError
where
    T: fmt::Debug + Send + Sync + 'static,
    E: Into<BoxError>,
{
    Box::new(ExtendedError::new(data, err))
}

/// Find the nearest payload of type `T` attached anywhere in the chain.
///
/// Walks from `err` toward the root cause and stops at the first
/// `ExtendedError<T>`. If the same error was extended with `T` more than
/// once, only the outermost value is returned; inner ones stay in the chain
/// but are shadowed. Links of any other type are skipped.
pub fn extract<'a, T>(err: &'a (dyn Error + 'static)) -> Option<&'a T>
where
    T: fmt::Debug + 'static,
{
    chain::find::<ExtendedError<T>>(err).map(ExtendedError::data)
}

/// Like [`extract`], but returns an owned copy of the payload.
pub fn extract_cloned<T>(err: &(dyn Error + 'static)) -> Option<T>
where
    T: fmt::Debug + Clone + 'static,
{
    extract::<T>(err).cloned()
}

/// Extension methods for attaching data to the error side of a `Result`.
///
/// `Ok` values pass through untouched: extending "no error" is "no error".
pub trait ResultExt<V> {
    /// Attach `data` to the error, if there is one
    fn extend_err<T>(self, data: T) -> Result<V, BoxError>
    where
        T: fmt::Debug + Send + Sync + 'static;

    /// Attach lazily computed data to the error, if there is one
    fn extend_err_with<T, F>(self, f: F) -> Result<V, BoxError>
    where
        T: fmt::Debug + Send + Sync + 'static,
        F: FnOnce() -> T;
}

impl<V, E: Into<BoxError>> ResultExt<V> for Result<V, E> {
    fn extend_err<T>(self, data: T) -> Result<V, BoxError>
    where
        T: fmt::Debug + Send + Sync + 'static,
    {
        self.map_err(|err| extend(data, err))
    }

    fn extend_err_with<T, F>(self, f: F) -> Result<V, BoxError>
    where
        T: fmt::Debug + Send + Sync + 'static,
        F: FnOnce() -> T,
    {
        self.map_err(|err| extend(f(), err))
    }
}
