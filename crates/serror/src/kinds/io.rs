use std::io;

use crate::Kind;

use super::*;

/// Classify an `io::ErrorKind`.
///
/// Transport level failures count as [`UNAVAILABLE`]; kinds without an
/// obvious counterpart stay [`UNKNOWN`].
pub fn from_io(kind: io::ErrorKind) -> Kind {
    match kind {
        io::ErrorKind::NotFound          => NOT_FOUND,
        io::ErrorKind::PermissionDenied  => PERMISSION_DENIED,
        io::ErrorKind::AlreadyExists     => CONFLICT,
        io::ErrorKind::InvalidInput      => INVALID_INPUT,
        io::ErrorKind::InvalidData       => INVALID_INPUT,
        io::ErrorKind::TimedOut          => DEADLINE_EXCEEDED,
        io::ErrorKind::Interrupted       => CANCELED,
        io::ErrorKind::Unsupported       => UNIMPLEMENTED,
        io::ErrorKind::ConnectionRefused => UNAVAILABLE,
        io::ErrorKind::ConnectionReset   => UNAVAILABLE,
        io::ErrorKind::ConnectionAborted => UNAVAILABLE,
        io::ErrorKind::NotConnected      => UNAVAILABLE,
        io::ErrorKind::BrokenPipe        => UNAVAILABLE,
        io::ErrorKind::WouldBlock        => UNAVAILABLE,
        io::ErrorKind::OutOfMemory       => RESOURCE_EXHAUSTED,
        _                                => UNKNOWN,
    }
}
