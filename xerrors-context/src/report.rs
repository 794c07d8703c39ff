//! Emitting errors as tracing events

use crate::get;
use serde_json::Value;
use std::error::Error;
use tracing::Level;

/// Emit one event at `level` describing `err`.
///
/// The event carries the error message as `error` and the attached
/// context as `context`, a JSON object with one member per key in key
/// order (`null` when the error has no context).
pub fn log(level: Level, err: &(dyn Error + 'static), message: &str) {
    let context = match get(err) {
        Some(ctx) => Value::Object(ctx.flatten().into_iter().collect()),
        None => Value::Null,
    };

    macro_rules! emit {
        ($lvl:expr) => {
            tracing::event!($lvl, error = %err, context = %context, "{}", message)
        };
    }

    if level == Level::ERROR {
        emit!(Level::ERROR)
    } else if level == Level::WARN {
        emit!(Level::WARN)
    } else if level == Level::INFO {
        emit!(Level::INFO)
    } else if level == Level::DEBUG {
        emit!(Level::DEBUG)
    } else {
        emit!(Level::TRACE)
    }
}

/// Shorthand for [`log`] at [`Level::ERROR`].
pub fn error(err: &(dyn Error + 'static), message: &str) {
    log(Level::ERROR, err, message)
}

/// Shorthand for [`log`] at [`Level::WARN`].
pub fn warn(err: &(dyn Error + 'static), message: &str) {
    log(Level::WARN, err, message)
}
