use std::any::Any;
use std::error::Error;
use std::fmt;
use std::sync::Arc;

use crate::lookup::Classify;
use crate::SError;

/// The error wrapped by an [`SError`].
///
/// Structured causes take part in field promotion and are followed by
/// [`SError::ops`] and the renderer. The other two variants are opaque
/// except through [`Error::source`] and, for `Classified`, the
/// [`Classify`] lookups.
#[derive(Clone)]
pub enum Cause {
    /// Another `SError`, owned by the wrapper.
    Structured(Box<SError>),
    /// A foreign error that reports its own kind or status.
    Classified {
        error: Arc<dyn Error + Send + Sync>,
        class: Arc<dyn Classify>,
    },
    /// Any other error.
    Foreign(Arc<dyn Error + Send + Sync>),
}

impl Cause {
    /// Wrap an arbitrary error. An `SError` is recognised and stored as
    /// [`Cause::Structured`].
    pub fn new<E>(err: E) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        Self::from_boxed(Box::new(err))
    }

    /// Same as [`Cause::new`] for an already boxed error.
    pub fn from_boxed(err: Box<dyn Error + Send + Sync>) -> Self {
        match err.downcast::<SError>() {
            Ok(e) => Cause::Structured(e),
            Err(other) => Cause::Foreign(Arc::from(other)),
        }
    }

    /// Wrap a foreign error whose kind and status should be visible to
    /// [`what_kind`](crate::what_kind) and [`status_code`](crate::status_code).
    /// An `SError` is stored as [`Cause::Structured`].
    pub fn classified<E>(err: E) -> Self
    where
        E: Error + Classify + 'static,
    {
        let err = Arc::new(err);
        let any: Arc<dyn Any + Send + Sync> = err.clone();
        if let Ok(e) = any.downcast::<SError>() {
            return Cause::Structured(Box::new((*e).clone()));
        }
        Cause::Classified {
            error: err.clone(),
            class: err,
        }
    }

    /// Re-tag a classified or foreign cause that holds an `SError` as
    /// [`Cause::Structured`]. Other causes are returned unchanged.
    pub fn normalized(self) -> Self {
        match self {
            Cause::Structured(_) => self,
            other => match other.as_error().downcast_ref::<SError>() {
                Some(e) => Cause::Structured(Box::new(e.clone())),
                None => other,
            },
        }
    }

    /// The cause as a plain error trait object.
    pub fn as_error(&self) -> &(dyn Error + 'static) {
        match self {
            Cause::Structured(e) => &**e,
            Cause::Classified { error, .. } => &**error,
            Cause::Foreign(e) => &**e,
        }
    }

    /// The cause as an `SError`, if it is one.
    pub fn as_structured(&self) -> Option<&SError> {
        match self {
            Cause::Structured(e) => Some(&**e),
            other => other.as_error().downcast_ref::<SError>(),
        }
    }
}

impl From<SError> for Cause {
    fn from(err: SError) -> Self {
        Cause::Structured(Box::new(err))
    }
}

impl fmt::Display for Cause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.as_error(), f)
    }
}

impl fmt::Debug for Cause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cause::Structured(e) => fmt::Debug::fmt(e, f),
            Cause::Classified { error, .. } => fmt::Debug::fmt(error, f),
            Cause::Foreign(e) => fmt::Debug::fmt(e, f),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io;

    use super::*;
    use crate::{kinds, serr, Kind, Opt};

    #[derive(Debug)]
    struct Teapot;

    impl fmt::Display for Teapot {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("short and stout")
        }
    }

    impl Error for Teapot {}

    impl Classify for Teapot {
        fn get_kind(&self) -> Kind {
            Kind::new("TEAPOT", 418)
        }
    }

    #[test]
    fn recognises_structured() {
        let c = Cause::new(serr!(Opt::op("Get")));
        assert!(matches!(c, Cause::Structured(_)));
        assert_eq!(c.as_structured().map(SError::op), Some("Get"));
    }

    #[test]
    fn foreign_stays_foreign() {
        let c = Cause::new(io::Error::new(io::ErrorKind::Other, "disk on fire"));
        assert!(matches!(c, Cause::Foreign(_)));
        assert!(c.as_structured().is_none());
        assert_eq!(c.to_string(), "disk on fire");
    }

    #[test]
    fn foreign_holding_structured() {
        let c = Cause::Foreign(Arc::new(serr!(kinds::NOT_FOUND)));
        assert_eq!(c.as_structured().map(SError::kind), Some(kinds::NOT_FOUND));
    }

    #[test]
    fn classified_keeps_both_views() {
        let c = Cause::classified(Teapot);
        match &c {
            Cause::Classified { class, .. } => assert_eq!(class.get_kind().status, 418),
            other => panic!("unexpected {:?}", other),
        }
        assert!(c.as_error().downcast_ref::<Teapot>().is_some());
        assert_eq!(c.to_string(), "short and stout");
    }

    #[test]
    fn classified_serror_is_structured() {
        let c = Cause::classified(serr!(Opt::op("Get"), kinds::NOT_FOUND));
        assert!(matches!(c, Cause::Structured(_)));
    }

    #[test]
    fn normalized_retags_serror() {
        let c = Cause::Foreign(Arc::new(serr!(Opt::op("Get")))).normalized();
        assert!(matches!(&c, Cause::Structured(e) if e.op() == "Get"));
        let c = Cause::new(io::Error::other("disk")).normalized();
        assert!(matches!(c, Cause::Foreign(_)));
    }
}
