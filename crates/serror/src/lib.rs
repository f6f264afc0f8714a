//! # serror: Structured Error
//!
//! An error value that carries an operation label, a [`Kind`], internal
//! text, a message fit for end users, an arbitrary JSON payload and the
//! error it wraps.
//!
//! ## Design
//!
//! Errors are built from an ordered list of [`Opt`]ions; later options win.
//! When the wrapped error is itself an [`SError`], construction promotes
//! fields out of it: duplicates are dropped, missing op, kind, user message,
//! data and JSON override move up, and layers left empty collapse. A chain
//! built by wrapping at every call site therefore renders without
//! repetition:
//!
//! ```text
//! Get: internal error: beat dead horse: Select: not found: sql: no rows in result set
//! └op┘ └──── kind ──┘ └─── text ────┘ └─── cause, rendered the same way ────────────┘
//! ```
//!
//! Kind, HTTP status and user message are resolved by walking the chain
//! ([`what_kind`], [`status_code`], [`user_msg`]), so the outermost layer
//! only needs what it adds.
//!
//! ## Quick Start
//!
//! ```rust
//! use serror::{kinds, serr, status_code, Opt, SResult};
//!
//! fn select(id: u64) -> SResult<String> {
//!     Err(serr!(
//!         Opt::op("db.Select"),
//!         kinds::NOT_FOUND,
//!         Opt::textf(format_args!("no row with id {}", id)),
//!     ))
//! }
//!
//! fn get_user(id: u64) -> SResult<String> {
//!     select(id).map_err(|e| serr!(Opt::op("svc.GetUser"), Opt::user_msg("No such user"), Opt::cause(e)))
//! }
//!
//! let err = get_user(7).unwrap_err();
//! assert_eq!(err.to_string(), "svc.GetUser: not found: db.Select: no row with id 7");
//! assert_eq!(err.ops(), vec!["svc.GetUser", "db.Select"]);
//! assert_eq!(status_code(&err), 404);
//! assert_eq!(
//!     err.json(),
//!     serde_json::json!({"code": "NOT_FOUND", "error": "not found", "msg": "No such user"}),
//! );
//! ```
//!
//! ## Matching in tests
//!
//! [`matches`] and [`diff`] compare an error against a template that only
//! sets the fields a test cares about.
//!
//! ## Feature Flags
//!
//! | Flag   | Effect |
//! |--------|--------|
//! | `http` | `From<http::StatusCode>` for `Kind`, `Kind::http_status`, `Opt::response` (default) |

mod kind;
pub mod kinds;
mod cause;
mod fields;
mod opt;
mod error;
mod lookup;
mod json;
mod details;
mod matcher;
#[macro_use]
mod macros;
mod convert;
pub mod observe;

#[cfg(feature = "http")]
mod response;

// ── Public API ────────────────────────────────────────────────────

pub use kind::Kind;
pub use cause::Cause;
pub use fields::Fields;
pub use opt::Opt;
pub use error::{SError, SResult};
pub use lookup::{status_code, user_msg, what_kind, Classify};
pub use json::{JsonFn, ToJson};
pub use details::InternalDetails;
pub use matcher::{diff, matches};
pub use convert::ResultExt;
