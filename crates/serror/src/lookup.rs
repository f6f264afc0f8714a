//! Chain lookups for kind, status and user message.
//!
//! Each lookup walks from the given error towards the root cause and
//! stops at the first link that answers. `SError` links answer from their
//! own fields, [`Cause::Classified`] links answer through [`Classify`],
//! and every other link is passed over via [`Error::source`].

use std::error::Error;

use crate::cause::Cause;
use crate::{Kind, SError};

/// Capability reported by errors that know their own classification.
///
/// Both methods default to "no answer", so a type only overrides what it
/// knows. Wrap a value with [`Cause::classified`] or
/// [`Opt::classified_cause`](crate::Opt::classified_cause) to make the
/// lookups see it.
pub trait Classify: Send + Sync {
    /// The error's kind, [`Kind::UNKNOWN`] if it has none.
    fn get_kind(&self) -> Kind {
        Kind::UNKNOWN
    }

    /// HTTP status, `0` to defer to the next link.
    fn status_code(&self) -> u16 {
        0
    }
}

impl Classify for SError {
    fn get_kind(&self) -> Kind {
        self.kind
    }

    fn status_code(&self) -> u16 {
        if self.kind == Kind::UNKNOWN {
            0
        } else {
            self.kind.status
        }
    }
}

/// One step of the cause chain.
#[derive(Clone, Copy)]
pub(crate) enum Link<'a> {
    Ours(&'a SError),
    Classified(&'a (dyn Error + 'static), &'a dyn Classify),
    Plain(&'a (dyn Error + 'static)),
}

impl<'a> Link<'a> {
    fn of(err: &'a (dyn Error + 'static)) -> Self {
        match err.downcast_ref::<SError>() {
            Some(e) => Link::Ours(e),
            None => Link::Plain(err),
        }
    }

    fn of_cause(cause: &'a Cause) -> Self {
        if let Some(e) = cause.as_structured() {
            return Link::Ours(e);
        }
        match cause {
            Cause::Structured(e) => Link::Ours(&**e),
            Cause::Classified { error, class } => Link::Classified(&**error, &**class),
            Cause::Foreign(e) => Link::of(&**e),
        }
    }

    fn next(self) -> Option<Link<'a>> {
        match self {
            Link::Ours(e) => e.cause.as_ref().map(Link::of_cause),
            Link::Classified(err, _) | Link::Plain(err) => err.source().map(Link::of),
        }
    }

    fn kind(self) -> Kind {
        match self {
            Link::Ours(e) => e.get_kind(),
            Link::Classified(_, c) => c.get_kind(),
            Link::Plain(_) => Kind::UNKNOWN,
        }
    }

    fn status(self) -> u16 {
        match self {
            Link::Ours(e) => Classify::status_code(e),
            Link::Classified(_, c) => c.status_code(),
            Link::Plain(_) => 0,
        }
    }

    fn user_msg(self) -> &'a str {
        match self {
            Link::Ours(e) => &e.user_msg,
            _ => "",
        }
    }
}

pub(crate) fn chain<'a>(err: &'a (dyn Error + 'static)) -> impl Iterator<Item = Link<'a>> {
    std::iter::successors(Some(Link::of(err)), |l| l.next())
}

/// First kind found along the chain, [`Kind::UNKNOWN`] if none.
pub fn what_kind(err: &(dyn Error + 'static)) -> Kind {
    chain(err)
        .map(Link::kind)
        .find(|k| *k != Kind::UNKNOWN)
        .unwrap_or(Kind::UNKNOWN)
}

/// First non-zero status found along the chain, `500` if none.
pub fn status_code(err: &(dyn Error + 'static)) -> u16 {
    chain(err)
        .map(Link::status)
        .find(|s| *s != 0)
        .unwrap_or(500)
}

/// First non-empty user message found along the chain, `""` if none.
pub fn user_msg<'a>(err: &'a (dyn Error + 'static)) -> &'a str {
    chain(err)
        .map(Link::user_msg)
        .find(|m| !m.is_empty())
        .unwrap_or("")
}

#[cfg(test)]
mod tests {
    use std::fmt;
    use std::io;

    use super::*;
    use crate::kinds::*;
    use crate::{serr, Opt};

    #[derive(Debug)]
    struct Throttled;

    impl fmt::Display for Throttled {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("throttled")
        }
    }

    impl Error for Throttled {}

    impl Classify for Throttled {
        fn get_kind(&self) -> Kind {
            RESOURCE_EXHAUSTED
        }
        fn status_code(&self) -> u16 {
            429
        }
    }

    /// Only knows its status.
    #[derive(Debug)]
    struct Gone;

    impl fmt::Display for Gone {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("gone")
        }
    }

    impl Error for Gone {}

    impl Classify for Gone {
        fn status_code(&self) -> u16 {
            410
        }
    }

    /// A foreign wrapper that exposes its inner error only as a source.
    #[derive(Debug)]
    struct Wrapped(SError);

    impl fmt::Display for Wrapped {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "wrapped: {}", self.0)
        }
    }

    impl Error for Wrapped {
        fn source(&self) -> Option<&(dyn Error + 'static)> {
            Some(&self.0)
        }
    }

    fn io_err() -> io::Error {
        io::Error::new(io::ErrorKind::Other, "boom")
    }

    #[test]
    fn what_kind_walks_chain() {
        let cases: Vec<(SError, Kind)> = vec![
            (serr!(Opt::cause(io_err())), Kind::UNKNOWN),
            (serr!(INVALID_INPUT), INVALID_INPUT),
            (serr!(Opt::op("Get"), Opt::cause(serr!(NOT_FOUND))), NOT_FOUND),
            (
                serr!(Opt::op("Op1"), Opt::cause(serr!(Opt::op("Op2"), Opt::cause(serr!(CONFLICT))))),
                CONFLICT,
            ),
            (serr!(Opt::op("Get"), Opt::classified_cause(Throttled)), RESOURCE_EXHAUSTED),
        ];
        for (e, want) in cases {
            assert_eq!(what_kind(&e), want, "{:?}", e);
        }
        assert_eq!(what_kind(&io_err()), Kind::UNKNOWN);
        // Seen bare, a foreign type is opaque; only a classified cause answers.
        assert_eq!(what_kind(&Throttled), Kind::UNKNOWN);
    }

    #[test]
    fn what_kind_through_foreign_source() {
        let e = Wrapped(serr!(PERMISSION_DENIED));
        assert_eq!(what_kind(&e), PERMISSION_DENIED);

        let e = serr!(Opt::op("Get"), Opt::cause(Wrapped(serr!(UNAVAILABLE))));
        assert_eq!(what_kind(&e), UNAVAILABLE);
    }

    #[test]
    fn status_code_walks_chain() {
        let conflict = Kind::new("CONFLICT", 0);
        let cases: Vec<(SError, u16)> = vec![
            (serr!(Opt::text("plain")), 500),
            (serr!(Opt::cause(io_err())), 500),
            (serr!(NOT_FOUND), 404),
            (serr!(Opt::op("Get"), Opt::cause(serr!(NOT_FOUND))), 404),
            (serr!(conflict), 500),
            (serr!(conflict, Opt::cause(serr!(Opt::op("x"), INVALID_INPUT))), 400),
            (serr!(Opt::op("Get"), Opt::classified_cause(Gone)), 410),
            (serr!(Opt::op("Get"), Opt::classified_cause(Throttled)), 429),
        ];
        for (e, want) in cases {
            assert_eq!(status_code(&e), want, "{:?}", e);
        }
        assert_eq!(status_code(&io_err()), 500);
    }

    #[test]
    fn user_msg_walks_chain() {
        let cases: Vec<(SError, &str)> = vec![
            (serr!(Opt::text("no msg")), ""),
            (serr!(Opt::user_msg("Deal with it!")), "Deal with it!"),
            (
                serr!(Opt::op("Get"), Opt::cause(serr!(Opt::op("Select"), Opt::user_msg("inner")))),
                "inner",
            ),
            (
                serr!(
                    Opt::user_msg("outer"),
                    Opt::cause(serr!(Opt::op("Select"), Opt::user_msg("inner")))
                ),
                "outer",
            ),
        ];
        for (e, want) in cases {
            assert_eq!(user_msg(&e), want, "{:?}", e);
        }
        assert_eq!(user_msg(&io_err()), "");
        assert_eq!(user_msg(&Wrapped(serr!(Opt::user_msg("hidden")))), "hidden");
    }

    #[test]
    fn classify_for_serror() {
        assert_eq!(Classify::status_code(&serr!(NOT_FOUND)), 404);
        assert_eq!(Classify::status_code(&serr!(Opt::op("Get"))), 0);
        assert_eq!(serr!(CANCELED).get_kind(), CANCELED);
    }

    fn outer_message(err: &SError) -> &str {
        user_msg(err)
    }

    #[test]
    fn user_msg_borrows_from_chain() {
        let e = serr!(Opt::op("Get"), Opt::cause(serr!(Opt::op("Select"), Opt::user_msg("try later"))));
        assert_eq!(outer_message(&e), "try later");
    }

    #[test]
    fn user_msg_through_tagged_serror_causes() {
        let inner = serr!(Opt::op("Inner"), Opt::user_msg("hello"));
        for cause in [
            Cause::classified(inner.clone()),
            Cause::Foreign(std::sync::Arc::new(inner.clone())),
        ] {
            let e = SError {
                op: "Outer".to_string(),
                cause: Some(cause),
                ..SError::default()
            };
            assert_eq!(user_msg(&e), "hello");
        }
    }
}
