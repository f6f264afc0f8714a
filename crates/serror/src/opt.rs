use std::error::Error;
use std::fmt;
use std::sync::Arc;

use serde_json::Value;

use crate::cause::Cause;
use crate::fields::Fields;
use crate::json::JsonFn;
use crate::lookup::Classify;
use crate::{Kind, SError};

/// A single construction option.
///
/// Options are applied in order, so a later option targeting the same
/// field overwrites an earlier one. A [`Kind`] or a [`Fields`] bundle
/// converts into an option directly:
///
/// ```
/// use serror::{kinds, serr, Opt};
///
/// let e = serr!(Opt::op("Get"), kinds::NOT_FOUND, Opt::textf(format_args!("id {}", 7)));
/// assert_eq!(e.to_string(), "Get: not found: id 7");
/// ```
#[derive(Clone)]
pub enum Opt {
    /// Operation label.
    Op(String),
    /// Classification.
    Kind(Kind),
    /// Internal diagnostic text.
    Text(String),
    /// Message for the end user.
    UserMsg(String),
    /// Payload; `null` clears it.
    Data(Value),
    /// Wrapped error.
    Cause(Cause),
    /// Replaces the default JSON projection.
    ToJson(JsonFn),
    /// Applies only the non-default fields of the bundle.
    Fields(Fields),
    /// Applies each nested option in order.
    Options(Vec<Opt>),
    /// Arbitrary mutation of the error under construction.
    Func(Arc<dyn Fn(&mut SError) + Send + Sync>),
}

impl Opt {
    /// Operation label, usually `package.Method`.
    pub fn op(op: impl Into<String>) -> Self {
        Opt::Op(op.into())
    }

    /// Internal text.
    pub fn text(text: impl Into<String>) -> Self {
        Opt::Text(text.into())
    }

    /// Text from format arguments, `Opt::textf(format_args!(...))`.
    pub fn textf(args: fmt::Arguments<'_>) -> Self {
        Opt::Text(fmt::format(args))
    }

    /// Message safe to show to end users.
    pub fn user_msg(msg: impl Into<String>) -> Self {
        Opt::UserMsg(msg.into())
    }

    /// Attach a payload. `null` counts as no payload.
    pub fn data(value: impl Into<Value>) -> Self {
        Opt::Data(value.into())
    }

    /// Wrap an error. An `SError` becomes a structured cause and takes
    /// part in field promotion.
    pub fn cause<E>(err: E) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        Opt::Cause(Cause::new(err))
    }

    /// Wrap a foreign error that reports its own kind or status.
    pub fn classified_cause<E>(err: E) -> Self
    where
        E: Error + Classify + 'static,
    {
        Opt::Cause(Cause::classified(err))
    }

    /// Override the JSON projection of the error.
    pub fn to_json<F>(f: F) -> Self
    where
        F: Fn(&SError) -> Value + Send + Sync + 'static,
    {
        Opt::ToJson(Arc::new(f))
    }

    /// Group several options so they can be passed around as one.
    pub fn options(opts: impl IntoIterator<Item = Opt>) -> Self {
        Opt::Options(opts.into_iter().collect())
    }

    /// Adapt a plain function into an option.
    pub fn func<F>(f: F) -> Self
    where
        F: Fn(&mut SError) + Send + Sync + 'static,
    {
        Opt::Func(Arc::new(f))
    }

    pub(crate) fn apply(self, e: &mut SError) {
        match self {
            Opt::Op(op) => e.op = op,
            Opt::Kind(kind) => e.kind = kind,
            Opt::Text(text) => e.text = text,
            Opt::UserMsg(msg) => e.user_msg = msg,
            Opt::Data(Value::Null) => e.data = None,
            Opt::Data(data) => e.data = Some(data),
            Opt::Cause(cause) => e.cause = Some(cause),
            Opt::ToJson(f) => e.to_json = Some(f),
            Opt::Fields(fields) => fields.apply(e),
            Opt::Options(opts) => {
                for opt in opts {
                    opt.apply(e);
                }
            }
            Opt::Func(f) => f(e),
        }
    }
}

impl From<Kind> for Opt {
    fn from(kind: Kind) -> Self {
        Opt::Kind(kind)
    }
}

impl From<Fields> for Opt {
    fn from(fields: Fields) -> Self {
        Opt::Fields(fields)
    }
}

impl From<Cause> for Opt {
    fn from(cause: Cause) -> Self {
        Opt::Cause(cause)
    }
}

impl From<Vec<Opt>> for Opt {
    fn from(opts: Vec<Opt>) -> Self {
        Opt::Options(opts)
    }
}

impl fmt::Debug for Opt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Opt::Op(op) => f.debug_tuple("Op").field(op).finish(),
            Opt::Kind(kind) => f.debug_tuple("Kind").field(kind).finish(),
            Opt::Text(text) => f.debug_tuple("Text").field(text).finish(),
            Opt::UserMsg(msg) => f.debug_tuple("UserMsg").field(msg).finish(),
            Opt::Data(data) => f.debug_tuple("Data").field(data).finish(),
            Opt::Cause(cause) => f.debug_tuple("Cause").field(cause).finish(),
            Opt::ToJson(_) => f.write_str("ToJson(<fn>)"),
            Opt::Fields(fields) => f.debug_tuple("Fields").field(fields).finish(),
            Opt::Options(opts) => f.debug_tuple("Options").field(opts).finish(),
            Opt::Func(_) => f.write_str("Func(<fn>)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::kinds::*;
    use crate::serr;

    #[test]
    fn grouped_options_apply_in_order() {
        let common = Opt::options([Opt::op("Get"), Opt::from(INVALID_INPUT)]);
        let e = serr!(common.clone(), Opt::text("boom"));
        assert_eq!(e.to_string(), "Get: invalid input: boom");

        // Later options still win over a group.
        let e = serr!(common, Opt::op("Put"));
        assert_eq!(e.op(), "Put");
    }

    #[test]
    fn nested_groups() {
        let e = serr!(Opt::options([
            Opt::op("Get"),
            Opt::options([Opt::from(NOT_FOUND), Opt::options([Opt::text("deep")])]),
        ]));
        assert_eq!(e.to_string(), "Get: not found: deep");
    }

    #[test]
    fn func_option() {
        let shout = Opt::func(|e| {
            let loud = e.text().to_uppercase();
            e.text = loud;
        });
        let e = serr!(Opt::text("quiet"), shout);
        assert_eq!(e.text(), "QUIET");
    }

    #[test]
    fn null_data_is_absent() {
        let e = serr!(Opt::data(1), Opt::data(Value::Null));
        assert!(e.data().is_none());
    }

    #[test]
    fn data_accepts_json_values() {
        let e = serr!(Opt::data(json!({"id": 7, "tags": ["a", "b"]})));
        assert_eq!(e.data(), Some(&json!({"id": 7, "tags": ["a", "b"]})));

        let e = serr!(Opt::data(vec![1, 2, 3]));
        assert_eq!(e.data(), Some(&json!([1, 2, 3])));
    }

    #[test]
    fn vec_converts_to_group() {
        let e = serr!(vec![Opt::op("Get"), Opt::text("boom")]);
        assert_eq!(e.to_string(), "Get: boom");
    }

    #[test]
    fn debug_names_variant() {
        assert_eq!(format!("{:?}", Opt::op("Get")), r#"Op("Get")"#);
        assert_eq!(format!("{:?}", Opt::to_json(|_| Value::Null)), "ToJson(<fn>)");
    }
}
