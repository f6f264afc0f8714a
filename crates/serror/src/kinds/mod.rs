//! Predeclared [`Kind`] values and lookup tables.
//!
//! Codes and their default HTTP status:
//!
//! | Kind                  | Code                  | Status |
//! |-----------------------|-----------------------|--------|
//! | `UNKNOWN`             | `""`                  | `0`    |
//! | `INVALID_INPUT`       | `INVALID_INPUT`       | 400    |
//! | `UNAUTHENTICATED`     | `UNAUTHENTICATED`     | 401    |
//! | `PERMISSION_DENIED`   | `PERMISSION_DENIED`   | 403    |
//! | `NOT_FOUND`           | `NOT_FOUND`           | 404    |
//! | `CONFLICT`            | `CONFLICT`            | 409    |
//! | `FAILED_PRECONDITION` | `FAILED_PRECONDITION` | 412    |
//! | `RESOURCE_EXHAUSTED`  | `RESOURCE_EXHAUSTED`  | 429    |
//! | `INTERNAL`            | `INTERNAL`            | 500    |
//! | `CANCELED`            | `CANCELED`            | 500    |
//! | `UNIMPLEMENTED`       | `UNIMPLEMENTED`       | 501    |
//! | `UNAVAILABLE`         | `UNAVAILABLE`         | 503    |
//! | `DEADLINE_EXCEEDED`   | `DEADLINE_EXCEEDED`   | 503    |
//!
//! The list is not closed. Declare application kinds with [`Kind::new`];
//! the lookup tables here only know about the kinds above.
//!
//! ```rust
//! use serror::kinds::{self, NOT_FOUND};
//!
//! assert_eq!(kinds::from_status(404), NOT_FOUND);
//! assert_eq!(kinds::from_code("NOT_FOUND"), NOT_FOUND);
//! assert!(kinds::from_status(418).is_unknown());
//! ```

mod io;
mod status;

pub use io::from_io;
pub use status::{from_code, from_status};

use crate::Kind;

/// Unclassified. Same value as [`Kind::UNKNOWN`].
pub const UNKNOWN: Kind = Kind::UNKNOWN;

// ── Client errors ─────────────────────────────────────────────────

/// Client specified an invalid input, regardless of system state
/// (e.g. a malformed file name). Compare [`FAILED_PRECONDITION`].
pub const INVALID_INPUT: Kind = Kind::new("INVALID_INPUT", 400);

/// The request lacks valid authentication credentials.
pub const UNAUTHENTICATED: Kind = Kind::new("UNAUTHENTICATED", 401);

/// The caller is identified but not allowed to run the operation. Not
/// for exhausted quotas ([`RESOURCE_EXHAUSTED`]) or unidentified
/// callers ([`UNAUTHENTICATED`]).
pub const PERMISSION_DENIED: Kind = Kind::new("PERMISSION_DENIED", 403);

/// Some requested entity was not found.
pub const NOT_FOUND: Kind = Kind::new("NOT_FOUND", 404);

/// The request conflicts with the current state of the server.
pub const CONFLICT: Kind = Kind::new("CONFLICT", 409);

/// The system is not in the state the operation requires, e.g. removing
/// a non-empty directory. The client should not retry until the state
/// has been fixed; use [`UNAVAILABLE`] when a plain retry may succeed.
pub const FAILED_PRECONDITION: Kind = Kind::new("FAILED_PRECONDITION", 412);

/// A quota or some other resource ran out.
pub const RESOURCE_EXHAUSTED: Kind = Kind::new("RESOURCE_EXHAUSTED", 429);

// ── Server errors ─────────────────────────────────────────────────

/// An invariant of the underlying system is broken.
pub const INTERNAL: Kind = Kind::new("INTERNAL", 500);

/// The operation was canceled, typically by the caller.
pub const CANCELED: Kind = Kind::new("CANCELED", 500);

/// The operation is not implemented or not enabled.
pub const UNIMPLEMENTED: Kind = Kind::new("UNIMPLEMENTED", 501);

/// The service is currently unavailable. Usually transient; retrying
/// with backoff may help, but not every operation is safe to repeat.
pub const UNAVAILABLE: Kind = Kind::new("UNAVAILABLE", 503);

/// The operation expired before completion. State changing operations
/// may still have completed.
pub const DEADLINE_EXCEEDED: Kind = Kind::new("DEADLINE_EXCEEDED", 503);

/// Every predeclared kind except [`UNKNOWN`], in table order.
pub const ALL: [Kind; 12] = [
    INVALID_INPUT,
    UNAUTHENTICATED,
    PERMISSION_DENIED,
    NOT_FOUND,
    CONFLICT,
    FAILED_PRECONDITION,
    RESOURCE_EXHAUSTED,
    INTERNAL,
    CANCELED,
    UNIMPLEMENTED,
    UNAVAILABLE,
    DEADLINE_EXCEEDED,
];
