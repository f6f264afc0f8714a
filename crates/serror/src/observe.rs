//! Structured logging of error chains through `tracing`.
//!
//! # Architecture
//!
//! ```text
//! trace_error(&err)
//!       │
//!       ▼  status_code(err) → severity
//! 5xx → ERROR   4xx → WARN   other → DEBUG
//!       │
//!       ▼  SError → details(): ops, kind, error, data
//! tracing event with one field per detail
//! ```

use std::error::Error;

use tracing::Level;

use crate::lookup::{status_code, what_kind};
use crate::SError;

/// Log level for an error, from its resolved status code.
pub fn severity(err: &(dyn Error + 'static)) -> Level {
    match status_code(err) {
        500.. => Level::ERROR,
        400..=499 => Level::WARN,
        _ => Level::DEBUG,
    }
}

/// Emit one `tracing` event describing `err`.
///
/// `SError`s log their [`details`](SError::details); other errors log
/// their rendering, resolved kind and status.
pub fn trace_error(err: &(dyn Error + 'static)) {
    let status = u64::from(status_code(err));
    let (error, ops, kind, data) = match err.downcast_ref::<SError>() {
        Some(e) => {
            let d = e.details();
            (d.error, d.ops, d.kind, d.data.map(|v| v.to_string()))
        }
        None => (err.to_string(), Vec::new(), what_kind(err), None),
    };

    macro_rules! emit {
        ($level:ident) => {
            tracing::$level!(
                error = %error,
                kind = kind.code,
                status,
                ops = ?ops,
                data = data.as_deref(),
                "error observed"
            )
        };
    }

    let level = severity(err);
    if level == Level::ERROR {
        emit!(error);
    } else if level == Level::WARN {
        emit!(warn);
    } else {
        emit!(debug);
    }
}
