//! # xerrors-context
//!
//! Structured logging context for errors, attached with [`xerrors::extend`].
//!
//! ## Usage
//!
//! ```rust
//! use serde_json::json;
//! use xerrors_context::{add, get};
//!
//! let err = add(std::fmt::Error, [("user", json!("alice"))]);
//! let err = add(err, [("attempt", json!(2))]);
//!
//! // The second call merged into the first map instead of wrapping again.
//! assert_eq!(
//!     get(&*err).unwrap().flatten(),
//!     vec![("attempt".to_string(), json!(2)), ("user".to_string(), json!("alice"))],
//! );
//! ```
//!
//! ## Concurrency
//!
//! The map behind a [`Context`] is shared by every handle to it and guarded
//! by a lock. Handing an error with context to several threads is safe, but
//! the order in which their writes land is up to the caller.

mod attach;
mod context;
pub mod report;

pub use attach::{add, get, ContextExt};
pub use context::Context;
pub use serde_json::Value;
