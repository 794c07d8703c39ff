//! # xerrors
//!
//! Attach arbitrary typed data to an error without losing source-chain
//! inspection.
//!
//! ## Design Philosophy
//!
//! - **ExtendedError<T>**: one generic wrapper, keyed by the payload type
//! - **extend**: wrap an error with a payload; the original error becomes the `source()`
//! - **extract**: walk the chain and return the nearest payload of the requested type
//! - **chain**: the walking primitives everything else is built on
//!
//! ## Usage
//!
//! ```rust
//! use xerrors::{extend, extract, ResultExt};
//!
//! #[derive(Debug, Clone, PartialEq)]
//! struct RequestId(u64);
//!
//! fn fetch() -> Result<(), std::io::Error> {
//!     Err(std::io::Error::new(std::io::ErrorKind::TimedOut, "upstream timed out"))
//! }
//!
//! let err = fetch().extend_err(RequestId(42)).unwrap_err();
//! assert_eq!(err.to_string(), "upstream timed out");
//! assert_eq!(extract::<RequestId>(&*err), Some(&RequestId(42)));
//!
//! // Extending twice with the same type: the outermost value wins.
//! let err = extend(RequestId(43), err);
//! assert_eq!(extract::<RequestId>(&*err), Some(&RequestId(43)));
//! ```
//!
//! ## Principles
//!
//! - Extending "no error" yields "no error": `Ok` values pass through [`ResultExt`]
//! - A missing payload is `None`, never an error
//! - Wrappers are immutable once built; mutable payloads bring their own locking
//! - Any wrapper that reports its cause through `source()` may sit in the same chain
//!
//! ## Limitations
//!
//! Errors that aggregate several independent branches can expose only one
//! of them through `source()`. Extraction from such a value sees whichever
//! branch that error chooses to report, and no other. This is not resolved
//! here on purpose: doing so would change matching semantics for every
//! wrapper type, not just this one.

pub mod chain;
mod extended;

pub use chain::{chain, find, is, root_cause, Chain};
pub use extended::{extend, extract, extract_cloned, ExtendedError, ResultExt};

/// Owned, type-erased error value used throughout the xerrors crates.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;
