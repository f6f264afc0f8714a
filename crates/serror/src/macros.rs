/// Construct an `SError` from one or more options.
///
/// Each argument is anything that converts into an [`Opt`](crate::Opt):
/// an `Opt`, a [`Kind`](crate::Kind), a [`Fields`](crate::Fields) bundle,
/// a [`Cause`](crate::Cause) or a `Vec<Opt>`. At least one argument is
/// required.
///
/// ```
/// use serror::{kinds, serr, Opt};
///
/// let e = serr!(Opt::op("user.Get"), kinds::NOT_FOUND);
/// assert_eq!(e.to_string(), "user.Get: not found");
/// ```
#[macro_export]
macro_rules! serr {
    ($opt:expr $(, $rest:expr)* $(,)?) => {
        $crate::SError::build([
            $crate::Opt::from($opt)
            $(, $crate::Opt::from($rest))*
        ])
    };
}

/// Early-return if a condition is false.
///
/// ```
/// use serror::{ensure, kinds, Opt, SResult};
///
/// fn check(id: i64) -> SResult<()> {
///     ensure!(id > 0, Opt::op("user.Get"), kinds::INVALID_INPUT, Opt::text("bad user id"));
///     Ok(())
/// }
///
/// assert!(check(5).is_ok());
/// assert_eq!(check(-1).unwrap_err().kind(), kinds::INVALID_INPUT);
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($opt:expr),+ $(,)?) => {
        if !$cond {
            return Err($crate::serr!($($opt),+).into());
        }
    };
}
