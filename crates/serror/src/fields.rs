use core::fmt;

use serde_json::Value;

use crate::cause::Cause;
use crate::json::JsonFn;
use crate::{Kind, SError};

/// Bundle of field values applied as one option.
///
/// Fields left at their default are skipped, so a bundle never clears
/// what an earlier option set.
#[derive(Clone, Default)]
pub struct Fields {
    // ── Identity ──────────────────────────────────────────────
    pub op:       String,
    pub kind:     Kind,

    // ── Messages ──────────────────────────────────────────────
    pub text:     String,
    pub user_msg: String,

    // ── Payload ───────────────────────────────────────────────
    pub data:     Option<Value>,
    pub cause:    Option<Cause>,
    pub to_json:  Option<JsonFn>,
}

impl Fields {
    pub(crate) fn apply(self, e: &mut SError) {
        if !self.op.is_empty() {
            e.op = self.op;
        }
        if self.kind != Kind::UNKNOWN {
            e.kind = self.kind;
        }
        if !self.text.is_empty() {
            e.text = self.text;
        }
        if !self.user_msg.is_empty() {
            e.user_msg = self.user_msg;
        }
        if let Some(data) = self.data.filter(|d| !d.is_null()) {
            e.data = Some(data);
        }
        if let Some(cause) = self.cause {
            e.cause = Some(cause);
        }
        if let Some(f) = self.to_json {
            e.to_json = Some(f);
        }
    }
}

impl fmt::Debug for Fields {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut d = f.debug_struct("Fields");
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
