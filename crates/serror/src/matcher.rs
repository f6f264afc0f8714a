//! Template matching.
//!
//! A template is an `SError` with only the fields a caller cares about.
//! Unset fields match anything, at every level of nesting:
//!
//! ```
//! use serror::{kinds, matches, serr, Opt};
//!
//! let err = serr!(Opt::op("svc.MakeBooking"), kinds::PERMISSION_DENIED, Opt::text("role=guest"));
//! assert!(matches(&serr!(Opt::op("svc.MakeBooking"), kinds::PERMISSION_DENIED), &err));
//! ```

use std::error::Error;

use crate::cause::Cause;
use crate::{Kind, SError};

/// True if every field set on `template` equals the field on `candidate`.
///
/// Both arguments must be `SError`s.
pub fn matches(template: &(dyn Error + 'static), candidate: &(dyn Error + 'static)) -> bool {
    diff(template, candidate).is_empty()
}

/// Discrepancies between `template` and `candidate`, one line each.
///
/// Lines read `field: want X, got Y`. Discrepancies found under a
/// structured cause follow a `cause:` line, indented two spaces per
/// level of nesting.
pub fn diff(template: &(dyn Error + 'static), candidate: &(dyn Error + 'static)) -> Vec<String> {
    let mut out = Vec::new();
    match (template.downcast_ref::<SError>(), candidate.downcast_ref::<SError>()) {
        (Some(t), Some(c)) => diff_into(t, c, &mut out),
        (None, _) => out.push(format!("template: want SError, got {:?}", template.to_string())),
        (_, None) => out.push(format!("candidate: want SError, got {:?}", candidate.to_string())),
    }
    out
}

fn diff_into(t: &SError, c: &SError, out: &mut Vec<String>) {
    diff_str(out, "op", &t.op, &c.op);
    if t.kind != Kind::UNKNOWN && t.kind != c.kind {
        out.push(format!("kind: want {:?}, got {:?}", t.kind, c.kind));
    }
    diff_str(out, "text", &t.text, &c.text);
    diff_str(out, "user_msg", &t.user_msg, &c.user_msg);
    if let Some(want) = &t.data {
        match &c.data {
            Some(got) if got == want => {}
            Some(got) => out.push(format!("data: want {}, got {}", want, got)),
            None => out.push(format!("data: want {}, got none", want)),
        }
    }

    let Some(want) = &t.cause else {
        return;
    };
    match want.as_structured() {
        Some(nested) => {
            let mut lines = Vec::new();
            match c.cause.as_ref() {
                Some(got) => match got.as_structured() {
                    Some(got) => diff_into(nested, got, &mut lines),
                    None => lines.push(format!("candidate: want SError, got {:?}", got.to_string())),
                },
                None => lines.push("candidate: want SError, got none".to_string()),
            }
            if !lines.is_empty() {
                out.push("cause:".to_string());
                out.extend(lines.into_iter().map(|l| format!("  {}", l)));
            }
        }
        None => {
            let want = want.to_string();
            match c.cause.as_ref().map(Cause::to_string) {
                Some(got) if got == want => {}
                Some(got) => out.push(format!("cause: want {:?}, got {:?}", want, got)),
                None => out.push(format!("cause: want {:?}, got none", want)),
            }
        }
    }
}

fn diff_str(out: &mut Vec<String>, field: &str, want: &str, got: &str) {
    if !want.is_empty() && want != got {
        out.push(format!("{}: want {:?}, got {:?}", field, want, got));
    }
}
