use core::fmt;

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

use crate::kinds;

/// The class of an error: a stable code string paired with the HTTP
/// status it maps to by default.
///
/// Equality is structural. Applications declare their own kinds the same
/// way the predeclared ones in [`kinds`](crate::kinds) are declared:
///
/// ```
/// use serror::Kind;
/// const ALREADY_EXISTS: Kind = Kind::new("ALREADY_EXISTS", 409);
///
/// assert_eq!(ALREADY_EXISTS.to_string(), "already exists");
/// ```
///
/// | Field    | Purpose                                         |
/// |----------|-------------------------------------------------|
/// | `code`   | Machine readable, `SCREAMING_SNAKE_CASE` string |
/// | `status` | HTTP status used for responses, `0` if none     |
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Kind {
    pub code: &'static str,
    pub status: u16,
}

impl Kind {
    /// Construct a new Kind.
    pub const fn new(code: &'static str, status: u16) -> Self {
        Self { code, status }
    }

    /// Sentinel for unclassified errors. Distinct from every declared kind.
    pub const UNKNOWN: Kind = Kind::new("", 0);

    /// True for the unclassified sentinel.
    #[inline]
    pub const fn is_unknown(&self) -> bool {
        self.code.is_empty() && self.status == 0
    }
}

impl fmt::Debug for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_unknown() {
            return f.write_str("Kind(UNKNOWN)");
        }
        write!(f, "Kind({}, {})", self.code, self.status)
    }
}

/// Human readable form: `NOT_FOUND` renders as `not found`.
impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if *self == Kind::UNKNOWN {
            return f.write_str("unknown error");
        }
        if *self == kinds::INTERNAL {
            return f.write_str("internal error");
        }
        for c in self.code.chars() {
            if c == '_' {
                f.write_str(" ")?;
            } else {
                for lower in c.to_lowercase() {
                    write!(f, "{}", lower)?;
                }
            }
        }
        Ok(())
    }
}

impl Serialize for Kind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut s = serializer.serialize_struct("Kind", 2)?;
        s.serialize_field("code", self.code)?;
        s.serialize_field("status", &self.status)?;
        s.end()
    }
}
