//! Severity classes for errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// The severity classification of an error.
///
/// Variants are ordered: a later variant is always more severe than an
/// earlier one, so classes compare with `<` and `>` directly.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
#[repr(i8)]
pub enum Class {
    /// No error at all
    Nil = -1,

    /// An error that has not been classified
    #[default]
    Unknown = 0,

    /// A temporary failure that may succeed on retry
    Transient = 1,

    /// A permanent failure that will not resolve on retry
    Persistent = 2,

    /// A failure resulting from a recovered panic
    Panic = 3,
}

impl Class {
    /// Returns the class as a static lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            Class::Nil => "nil",
            Class::Unknown => "unknown",
            Class::Transient => "transient",
            Class::Persistent => "persistent",
            Class::Panic => "panic",
        }
    }

    /// Check if an error of this class is worth retrying
    pub fn is_retryable(&self) -> bool {
        matches!(self, Class::Transient)
    }
}

impl fmt::Display for Class {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
