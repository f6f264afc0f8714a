//! Property tests for promotion, matching and the op trail.

use proptest::prelude::*;
use serror::{kinds, matches, serr, Kind, Opt, SError};

fn label() -> impl Strategy<Value = String> {
    "[A-Za-z][A-Za-z0-9.]{0,11}"
}

fn kind() -> impl Strategy<Value = Kind> {
    proptest::sample::select(kinds::ALL.to_vec())
}

/// One field set on an otherwise empty error, plus its rendering.
fn single_field() -> impl Strategy<Value = (Opt, String)> {
    prop_oneof![
        label().prop_map(|s| (Opt::op(s.clone()), s)),
        label().prop_map(|s| (Opt::text(s.clone()), s)),
        kind().prop_map(|k| (Opt::from(k), k.to_string())),
    ]
}

fn layered(fields: &[(String, Option<Kind>, Option<String>)]) -> SError {
    let mut err: Option<SError> = None;
    for (op, kind, text) in fields.iter().rev() {
        let mut opts = vec![Opt::op(op.clone())];
        if let Some(k) = kind {
            opts.push(Opt::from(*k));
        }
        if let Some(t) = text {
            opts.push(Opt::text(t.clone()));
        }
        if let Some(inner) = err.take() {
            opts.push(Opt::cause(inner));
        }
        err = Some(SError::build(opts));
    }
    err.unwrap_or_default()
}

proptest! {
    #[test]
    fn duplicate_field_rendered_once((opt, want) in single_field()) {
        let e = serr!(opt.clone(), Opt::cause(serr!(opt)));
        prop_assert_eq!(e.to_string(), want);
        prop_assert!(e.cause().is_none());
    }

    #[test]
    fn data_is_pulled_up(op in label(), n in any::<i64>()) {
        let e = serr!(Opt::op(op.clone()), Opt::cause(serr!(Opt::data(n))));
        prop_assert_eq!(e.to_string(), op);
        prop_assert!(e.cause().is_none());
        prop_assert_eq!(e.details().data, Some(serde_json::json!(n)));
    }

    #[test]
    fn match_is_reflexive(
        layers in proptest::collection::vec(
            (label(), proptest::option::of(kind()), proptest::option::of(label())),
            1..5,
        )
    ) {
        let e = layered(&layers);
        prop_assert!(matches(&e, &e));
        prop_assert!(matches(&SError::default(), &e));
    }

    #[test]
    fn op_trail_in_order(ops in proptest::collection::hash_set(label(), 1..6)) {
        let ops: Vec<String> = ops.into_iter().collect();
        let layers: Vec<_> = ops.iter().map(|op| (op.clone(), None, None)).collect();
        let e = layered(&layers);
        prop_assert_eq!(e.ops(), ops.iter().map(String::as_str).collect::<Vec<_>>());
    }

    #[test]
    fn rendering_never_panics_and_is_non_empty(
        layers in proptest::collection::vec(
            (label(), proptest::option::of(kind()), proptest::option::of(label())),
            0..5,
        )
    ) {
        let e = layered(&layers);
        prop_assert!(!e.to_string().is_empty());
        prop_assert!(serror::status_code(&e) >= 400);
    }
}
