//! Attaching context to errors

use crate::Context;
use serde_json::Value;
use std::error::Error;
use xerrors::BoxError;

/// Attach key-value pairs to `err` as logging context.
///
/// - No pairs: `err` is returned unchanged.
/// - `err` already carries a [`Context`]: the pairs are merged into that map
///   in place (last write wins) and `err` is returned unchanged, so repeated
///   calls never stack extra layers.
/// - Otherwise `err` is extended with a fresh [`Context`].
pub fn add<E, I, K, V>(err: E, attrs: I) -> BoxError
where
    E: Into<BoxError>,
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<Value>,
{
    let err = err.into();
    let mut attrs = attrs.into_iter().peekable();
    if attrs.peek().is_none() {
        return err;
    }

    if let Some(existing) = get(&*err) {
        existing.merge(attrs);
        tracing::trace!(keys = existing.len(), "merged into existing error context");
        return err;
    }

    xerrors::extend(attrs.collect::<Context>(), err)
}

/// The nearest [`Context`] attached to `err`, if any.
///
/// The returned handle shares its map with the error.
pub fn get(err: &(dyn Error + 'static)) -> Option<Context> {
    xerrors::extract::<Context>(err).cloned()
}

/// Context methods for the error side of a `Result`.
///
/// `Ok` values pass through untouched.
pub trait ContextExt<T> {
    /// Attach key-value pairs to the error, if there is one
    fn add_context<I, K, V>(self, attrs: I) -> Result<T, BoxError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>;
}

impl<T, E: Into<BoxError>> ContextExt<T> for Result<T, E> {
    fn add_context<I, K, V>(self, attrs: I) -> Result<T, BoxError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        self.map_err(|err| add(err, attrs))
    }
}
