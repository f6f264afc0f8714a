use std::io;

use crate::{kinds, Opt, SError, SResult};

// ── From<io::Error> ───────────────────────────────────────────────

impl From<io::Error> for SError {
    /// Classify an `io::Error` by its [`io::ErrorKind`] and keep it as the
    /// cause, so `?` works on io results inside functions returning
    /// [`SResult`].
    fn from(err: io::Error) -> Self {
        let kind = kinds::from_io(err.kind());
        SError::build([Opt::Kind(kind), Opt::cause(err)])
    }
}

// ── Into<io::Error> ───────────────────────────────────────────────

impl From<SError> for io::Error {
    fn from(err: SError) -> Self {
        io::Error::new(io::ErrorKind::Other, err)
    }
}

// ── ResultExt: wrap errors on Results ─────────────────────────────

/// Extension trait for wrapping any error into an `SError` while it
/// propagates.
///
/// ```
/// use serror::{kinds, ResultExt, SResult};
///
/// fn load() -> SResult<Vec<u8>> {
///     std::fs::read("/definitely/not/here").serr_with(kinds::UNAVAILABLE)
/// }
///
/// let err = load().unwrap_err();
/// assert_eq!(err.kind(), kinds::UNAVAILABLE);
/// ```
pub trait ResultExt<T> {
    /// Wrap the error with an operation label.
    fn serr_op(self, op: &str) -> SResult<T>;

    /// Wrap the error with an arbitrary option.
    fn serr_with(self, opt: impl Into<Opt>) -> SResult<T>;
}

impl<T, E> ResultExt<T> for Result<T, E>
where
    E: std::error::Error + Send + Sync + 'static,
{
    fn serr_op(self, op: &str) -> SResult<T> {
        self.map_err(|e| SError::build([Opt::op(op), Opt::cause(e)]))
    }

    fn serr_with(self, opt: impl Into<Opt>) -> SResult<T> {
        self.map_err(|e| SError::build([opt.into(), Opt::cause(e)]))
    }
}
