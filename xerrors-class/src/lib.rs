//! # xerrors-class
//!
//! Severity classification for errors, attached with [`xerrors::extend`].
//!
//! ```rust
//! use xerrors_class::{ClassifyExt, Class};
//!
//! fn connect() -> Result<(), std::io::Error> {
//!     Err(std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "refused"))
//! }
//!
//! let err = connect().classify(Class::Transient).unwrap_err();
//! assert!(Class::of(&*err).is_retryable());
//! ```

mod class;
mod wrap;

pub use class::Class;
pub use wrap::{get_class, wrap_as, wrap_as_with, ClassifyExt, Restriction, WrapOptions};
