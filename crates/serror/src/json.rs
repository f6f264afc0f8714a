use std::sync::Arc;

use serde::{Serialize, Serializer};
use serde_json::{json, Value};

use crate::lookup::{user_msg, what_kind};
use crate::SError;

/// Replacement for the default JSON projection of an [`SError`].
pub type JsonFn = Arc<dyn Fn(&SError) -> Value + Send + Sync>;

/// Types that can present themselves to API clients as JSON.
pub trait ToJson {
    fn to_json_value(&self) -> Value;
}

impl SError {
    /// Client facing JSON form.
    ///
    /// Uses the override set with [`Opt::to_json`](crate::Opt::to_json)
    /// if there is one, otherwise
    /// `{"code": <kind code>, "error": <kind text>, "msg": <user message>}`
    /// with kind and message resolved along the chain.
    pub fn json(&self) -> Value {
        if let Some(f) = &self.to_json {
            return f(self);
        }
        let kind = what_kind(self);
        json!({
            "code": kind.code,
            "error": kind.to_string(),
            "msg": user_msg(self),
        })
    }
}

impl ToJson for SError {
    fn to_json_value(&self) -> Value {
        self.json()
    }
}

/// Serializes as [`SError::json`], ready to be used as a response body.
impl Serialize for SError {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.json().serialize(serializer)
    }
}

#[cfg(test)]
mod tests {
    use std::io;

    use super::*;
    use crate::kinds::*;
    use crate::{serr, Kind, Opt};

    #[test]
    fn default_projection() {
        let cases: Vec<(SError, Value)> = vec![
            (
                serr!(Opt::cause(io::Error::new(io::ErrorKind::Other, "boom"))),
                json!({"code": "", "error": "unknown error", "msg": ""}),
            ),
            (
                serr!(NOT_FOUND, Opt::user_msg("No such user")),
                json!({"code": "NOT_FOUND", "error": "not found", "msg": "No such user"}),
            ),
            (
                serr!(INTERNAL, Opt::text("secret detail")),
                json!({"code": "INTERNAL", "error": "internal error", "msg": ""}),
            ),
        ];
        for (e, want) in cases {
            assert_eq!(e.json(), want, "{:?}", e);
        }
    }

    #[test]
    fn resolves_along_chain() {
        let e = serr!(
            Opt::op("Get"),
            Opt::text("outer"),
            Opt::cause(serr!(
                Opt::op("Select"),
                PERMISSION_DENIED,
                Opt::user_msg("Go away"),
            )),
        );
        // Kind and message were both pulled up, the chain still answers.
        assert_eq!(
            e.json(),
            json!({"code": "PERMISSION_DENIED", "error": "permission denied", "msg": "Go away"})
        );
    }

    #[test]
    fn override_wins() {
        let e = serr!(
            Opt::op("Get"),
            Opt::data(42),
            Opt::to_json(|e| json!({"answer": e.data().cloned()})),
        );
        assert_eq!(e.json(), json!({"answer": 42}));
        assert_eq!(e.to_json_value(), json!({"answer": 42}));
    }

    #[test]
    fn override_from_cause() {
        let e = serr!(
            Opt::op("Get"),
            Opt::cause(serr!(
                Opt::cause(serr!(Opt::to_json(|_| json!("custom_json_output")))),
            )),
        );
        assert_eq!(e.json(), json!("custom_json_output"));
    }

    #[test]
    fn custom_kind() {
        let e = serr!(Kind::new("CONFLICT", 0));
        assert_eq!(e.json(), json!({"code": "CONFLICT", "error": "conflict", "msg": ""}));
    }

    #[test]
    fn serialize_matches_json() {
        let e = serr!(NOT_FOUND, Opt::user_msg("nope"));
        let s = serde_json::to_string(&e).unwrap();
        let back: Value = serde_json::from_str(&s).unwrap();
        assert_eq!(back, e.json());
    }
}
