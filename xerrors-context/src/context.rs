//! The key-value map attached to errors

use parking_lot::RwLock;
use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

/// Structured logging context: string keys mapped to JSON values.
///
/// A `Context` is a handle. Clones share the same underlying map, so
/// mutations through one handle are visible through every other, including
/// the one attached to an error. Keys are kept sorted.
#[derive(Clone, Default)]
pub struct Context {
    inner: Arc<RwLock<BTreeMap<String, Value>>>,
}

impl Context {
    /// Create an empty context
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `key` to `value`, returning the previous value if any
    pub fn insert(&self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.inner.write().insert(key.into(), value.into())
    }

    /// Insert every pair from `attrs`. Later duplicates overwrite earlier ones.
    pub fn merge<I, K, V>(&self, attrs: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        let mut map = self.inner.write();
        for (key, value) in attrs {
            map.insert(key.into(), value.into());
        }
    }

    /// Get a copy of the value stored under `key`
    pub fn get(&self, key: &str) -> Option<Value> {
        self.inner.read().get(key).cloned()
    }

    /// Number of keys
    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    /// Check if no keys are set
    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }

    /// Snapshot of all pairs, sorted by key
    pub fn flatten(&self) -> Vec<(String, Value)> {
        self.inner
            .read()
            .iter()
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect()
    }

    /// Check if both handles point at the same map
    pub fn ptr_eq(&self, other: &Context) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl<K, V> FromIterator<(K, V)> for Context
where
    K: Into<String>,
    V: Into<Value>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let context = Context::new();
        context.merge(iter);
        context
    }
}

impl fmt::Debug for Context {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.inner.read().iter()).finish()
    }
}

/// `key=value` pairs in key order, separated by spaces.
impl fmt::Display for Context {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (key, value)) in self.inner.read().iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}={}", key, value)?;
        }
        Ok(())
    }
}

/// A map in key order, or `null` when empty.
impl Serialize for Context {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let map = self.inner.read();
        if map.is_empty() {
            return serializer.serialize_none();
        }
        let mut out = serializer.serialize_map(Some(map.len()))?;
        for (key, value) in map.iter() {
            out.serialize_entry(key, value)?;
        }
        out.end()
    }
}
