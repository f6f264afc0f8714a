use std::error::Error;
use std::fmt;
use std::mem;

use serde_json::Value;

use crate::cause::Cause;
use crate::json::JsonFn;
use crate::{Kind, Opt};

/// Structured Error: an operation label, a [`Kind`], internal text, a
/// message for the end user, an arbitrary payload and an optional cause.
///
/// Every field may be left unset. Only the fields that are set show up
/// when the error is printed, and an error with nothing set prints as
/// `no error`.
///
/// Build values with [`serr!`](crate::serr) or [`SError::build`]; there
/// is no way to modify an error afterwards, wrap it instead:
///
/// ```
/// use serror::{kinds, serr, Opt};
///
/// let inner = serr!(Opt::op("db.Select"), kinds::NOT_FOUND, Opt::text("no rows"));
/// let outer = serr!(Opt::op("svc.GetUser"), Opt::user_msg("No such user"), Opt::cause(inner));
///
/// // The kind was pulled up from the cause, the user message stays on top.
/// assert_eq!(outer.kind(), kinds::NOT_FOUND);
/// assert_eq!(outer.to_string(), "svc.GetUser: not found: db.Select: no rows");
/// ```
///
/// # Field promotion
///
/// When the cause is itself an `SError`, construction reshapes the pair
/// so the chain carries no duplicates:
///
/// 1. op, kind, user message and text that equal the outer value are
///    cleared on the cause;
/// 2. op, kind, user message, data and the JSON override missing on the
///    outer value are moved up from the cause;
/// 3. if the cause still has an op or a kind it keeps its identity and
///    nothing else moves; otherwise its text moves up when the outer text
///    is empty;
/// 4. a cause left with nothing is dropped, a cause left with only its
///    own cause is replaced by that cause.
///
/// Promotion runs once per construction and only touches the immediate
/// cause, which is always a private copy.
#[derive(Clone, Default)]
pub struct SError {
    pub(crate) op: String,
    pub(crate) kind: Kind,
    pub(crate) text: String,
    pub(crate) user_msg: String,
    pub(crate) data: Option<Value>,
    pub(crate) cause: Option<Cause>,
    pub(crate) to_json: Option<JsonFn>,
}

/// Convenience Result alias.
pub type SResult<T> = Result<T, SError>;

// ── Construction ──────────────────────────────────────────────────

impl SError {
    /// Build an error by applying the options in order, then promoting
    /// fields out of the cause.
    ///
    /// Later options win over earlier ones that target the same field.
    /// Never fails; with no options the result is the empty error.
    pub fn build<I>(opts: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Opt>,
    {
        let mut e = SError::default();
        for opt in opts {
            opt.into().apply(&mut e);
        }
        e.promote_fields();
        e
    }

    fn promote_fields(&mut self) {
        self.cause = self.cause.take().map(Cause::normalized);
        let Some(Cause::Structured(prev)) = &mut self.cause else {
            return;
        };

        if prev.op == self.op {
            prev.op.clear();
        }
        if prev.kind == self.kind {
            prev.kind = Kind::UNKNOWN;
        }
        if prev.user_msg == self.user_msg {
            prev.user_msg.clear();
        }
        if prev.text == self.text {
            prev.text.clear();
        }

        if self.op.is_empty() {
            self.op = mem::take(&mut prev.op);
        }
        if self.kind == Kind::UNKNOWN {
            self.kind = mem::take(&mut prev.kind);
        }
        if self.user_msg.is_empty() {
            self.user_msg = mem::take(&mut prev.user_msg);
        }
        if self.data.is_none() {
            self.data = prev.data.take();
        }
        if self.to_json.is_none() {
            self.to_json = prev.to_json.take();
        }

        // An op or kind on the cause marks a distinct layer.
        if !prev.op.is_empty() || prev.kind != Kind::UNKNOWN {
            return;
        }
        if self.text.is_empty() {
            self.text = mem::take(&mut prev.text);
        }

        if prev.is_zero() {
            self.cause = None;
        } else if prev.has_only_cause() {
            self.cause = prev.cause.take();
        }
    }

    /// True if no field at all is set.
    pub fn is_zero(&self) -> bool {
        self.cause.is_none() && self.has_only_cause()
    }

    fn has_only_cause(&self) -> bool {
        self.op.is_empty()
            && self.kind == Kind::UNKNOWN
            && self.text.is_empty()
            && self.user_msg.is_empty()
            && self.data.is_none()
            && self.to_json.is_none()
    }
}

// ── Accessors ─────────────────────────────────────────────────────

impl SError {
    /// Operation being performed, usually `package.Method`.
    #[inline]
    pub fn op(&self) -> &str {
        &self.op
    }

    /// Kind set on this layer. [`what_kind`](crate::what_kind) resolves
    /// it along the chain.
    #[inline]
    pub fn kind(&self) -> Kind {
        self.kind
    }

    /// Internal diagnostic text. Not for end users.
    #[inline]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Message for the end user set on this layer.
    /// [`user_msg`](crate::user_msg) resolves it along the chain.
    #[inline]
    pub fn user_msg(&self) -> &str {
        &self.user_msg
    }

    /// Payload attached to this layer.
    #[inline]
    pub fn data(&self) -> Option<&Value> {
        self.data.as_ref()
    }

    /// The wrapped error, if any.
    #[inline]
    pub fn cause(&self) -> Option<&Cause> {
        self.cause.as_ref()
    }

    /// True if a JSON override is attached.
    #[inline]
    pub fn has_json_override(&self) -> bool {
        self.to_json.is_some()
    }

    /// Operations from outermost to innermost, skipping layers without one.
    ///
    /// Only follows causes that are themselves `SError`s.
    pub fn ops(&self) -> Vec<&str> {
        self.layers()
            .map(SError::op)
            .filter(|op| !op.is_empty())
            .collect()
    }

    /// This error followed by every directly nested `SError` cause.
    pub(crate) fn layers(&self) -> impl Iterator<Item = &SError> {
        std::iter::successors(Some(self), |e| e.cause.as_ref()?.as_structured())
    }
}

// ── std::error::Error ─────────────────────────────────────────────

impl Error for SError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.cause.as_ref().map(Cause::as_error)
    }
}

// ── Display ───────────────────────────────────────────────────────

/// Writes segments joined by `": "`.
struct Segments<'a, 'b> {
    f: &'a mut fmt::Formatter<'b>,
    empty: bool,
}

impl Segments<'_, '_> {
    fn push(&mut self, s: impl fmt::Display) -> fmt::Result {
        if !self.empty {
            self.f.write_str(": ")?;
        }
        self.empty = false;
        write!(self.f, "{}", s)
    }

    fn push_str(&mut self, s: &str) -> fmt::Result {
        if s.is_empty() {
            return Ok(());
        }
        self.push(s)
    }
}

impl fmt::Display for SError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = Segments { f, empty: true };

        out.push_str(&self.op)?;
        if self.kind != Kind::UNKNOWN {
            out.push_str(&self.kind.to_string())?;
        }
        out.push_str(&self.text)?;
        if let Some(cause) = &self.cause {
            out.push_str(&cause.to_string())?;
        }

        if out.empty {
            out.f.write_str("no error")?;
        }
        Ok(())
    }
}

// ── Debug ─────────────────────────────────────────────────────────

impl fmt::Debug for SError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut d = f.debug_struct("SError");
        if !self.op.is_empty() {
            d.field("op", &self.op);
        }
        if self.kind != Kind::UNKNOWN {
            d.field("kind", &self.kind);
        }
        if !self.text.is_empty() {
            d.field("text", &self.text);
        }
        if !self.user_msg.is_empty() {
            d.field("user_msg", &self.user_msg);
        }
        if let Some(data) = &self.data {
            d.field("data", data);
        }
        if let Some(cause) = &self.cause {
            d.field("cause", cause);
        }
        if self.to_json.is_some() {
            d.field("to_json", &"<fn>");
        }
        d.finish()
    }
}
