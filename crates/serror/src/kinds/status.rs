//! HTTP status and code string lookups.

use crate::Kind;

use super::*;

/// Kind for an HTTP status code.
///
/// 422 folds into [`INVALID_INPUT`]. Statuses shared by several kinds map
/// to the most general one (500 → [`INTERNAL`], 503 → [`UNAVAILABLE`]).
/// Anything else, including application kinds, yields [`UNKNOWN`].
pub fn from_status(status: u16) -> Kind {
    match status {
        400 | 422 => INVALID_INPUT,
        401 => UNAUTHENTICATED,
        403 => PERMISSION_DENIED,
        404 => NOT_FOUND,
        409 => CONFLICT,
        412 => FAILED_PRECONDITION,
        429 => RESOURCE_EXHAUSTED,
        500 => INTERNAL,
        501 => UNIMPLEMENTED,
        503 => UNAVAILABLE,
        _ => UNKNOWN,
    }
}

/// Kind for one of the predeclared code strings, [`UNKNOWN`] otherwise.
pub fn from_code(code: &str) -> Kind {
    match code {
        "INVALID_INPUT" => INVALID_INPUT,
        "UNAUTHENTICATED" => UNAUTHENTICATED,
        "PERMISSION_DENIED" => PERMISSION_DENIED,
        "NOT_FOUND" => NOT_FOUND,
        "CONFLICT" => CONFLICT,
        "FAILED_PRECONDITION" => FAILED_PRECONDITION,
        "RESOURCE_EXHAUSTED" => RESOURCE_EXHAUSTED,
        "INTERNAL" => INTERNAL,
        "CANCELED" => CANCELED,
        "UNIMPLEMENTED" => UNIMPLEMENTED,
        "UNAVAILABLE" => UNAVAILABLE,
        "DEADLINE_EXCEEDED" => DEADLINE_EXCEEDED,
        _ => UNKNOWN,
    }
}
