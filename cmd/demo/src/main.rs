//! serror walkthrough
//!
//! Builds a few error chains the way a small service would, then prints
//! each one in every form the crate offers: the rendered string, the op
//! trail, the resolved status, the client JSON and the internal details.
//! Every error is also logged through `tracing`.
//!
//! See `env.rs` for the environment variables.
// SERROR_DEMO_USER_ID=0 RUST_LOG=debug cargo run -p serror-demo

mod env;

use http::{header, Method, Response, Uri};
use serde_json::Value;
use serror::observe::trace_error;
use serror::{ensure, kinds, serr, status_code, Kind, Opt, ResultExt, SError, SResult};
use tracing_subscriber::EnvFilter;

use crate::env::DemoConfig;

const ALREADY_EXISTS: Kind = Kind::new("ALREADY_EXISTS", 409);

// ── Simulated service ─────────────────────────────────────────────

fn select_user(id: i64) -> SResult<String> {
    if id == 42 {
        return Ok("Arthur Dent".to_string());
    }
    Err(serr!(
        Opt::op("db.SelectUser"),
        kinds::NOT_FOUND,
        Opt::text("select name from users where id = ?"),
        Opt::data(id),
        Opt::cause(std::io::Error::new(std::io::ErrorKind::NotFound, "sql: no rows in result set")),
    ))
}

fn get_user(id: i64) -> SResult<String> {
    ensure!(
        id > 0,
        Opt::op("svc.GetUser"),
        kinds::INVALID_INPUT,
        Opt::textf(format_args!("id must be positive, got {}", id)),
        Opt::user_msg("The user id is invalid."),
    );
    select_user(id).map_err(|e| {
        serr!(
            Opt::op("svc.GetUser"),
            Opt::user_msg("We could not find that user."),
            Opt::cause(e),
        )
    })
}

fn create_user(name: &str) -> SResult<()> {
    Err(serr!(
        Opt::op("svc.CreateUser"),
        ALREADY_EXISTS,
        Opt::textf(format_args!("name {:?} taken", name)),
        Opt::user_msg("Pick another name."),
    ))
}

fn load_config(path: &str) -> SResult<Vec<u8>> {
    let raw = std::fs::read(path)?;
    Ok(raw)
}

fn call_billing() -> SResult<()> {
    let uri: Uri = "https://billing.internal/v1/invoices?user=7"
        .parse()
        .map_err(|e| serr!(Opt::op("billing.Invoices"), Opt::cause(e)))?;
    let resp = Response::builder()
        .status(503)
        .header(header::CONTENT_TYPE, "application/problem+json")
        .body(r#"{"title":"maintenance","retry_after":30}"#)
        .map_err(|e| serr!(Opt::op("billing.Invoices"), Opt::cause(e)))?;

    Err(serr!(
        Opt::op("billing.Invoices"),
        Opt::response(&Method::GET, &uri, &resp),
    ))
}

// ── Output ────────────────────────────────────────────────────────

fn print_json(label: &str, value: &Value, pretty: bool) {
    let text = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    };
    match text {
        Ok(text) => println!("  {:<8} {}", label, text.replace('\n', "\n           ")),
        Err(e) => println!("  {:<8} <{}>", label, e),
    }
}

fn report(title: &str, err: &SError, cfg: &DemoConfig) {
    println!("── {} ──", title);
    println!("  {:<8} {}", "error", err);
    println!("  {:<8} {:?}", "ops", err.ops());
    println!("  {:<8} {}", "status", status_code(err));
    print_json("json", &err.json(), cfg.pretty);
    match serde_json::to_value(err.details()) {
        Ok(details) => print_json("details", &details, cfg.pretty),
        Err(e) => println!("  {:<8} <{}>", "details", e),
    }
    println!();
    trace_error(err);
}

fn init_tracing(cfg: &DemoConfig) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    if cfg.json_log {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn main() {
    let cfg = DemoConfig::from_env();
    init_tracing(&cfg);
    tracing::info!(?cfg, "starting serror demo");

    println!("=== serror demo ===\n");

    match get_user(cfg.user_id) {
        Ok(name) => println!("── get user ──\n  found {}\n", name),
        Err(e) => report("get user", &e, &cfg),
    }
    if let Err(e) = create_user("zaphod") {
        report("create user", &e, &cfg);
    }
    if let Err(e) = load_config(&cfg.config_path).serr_op("config.Load") {
        report("load config", &e, &cfg);
    }
    if let Err(e) = call_billing() {
        report("call billing", &e, &cfg);
    }

    println!("=== demo complete ===");
}
