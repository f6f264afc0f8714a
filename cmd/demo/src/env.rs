//! Environment variable configuration for the demo.
//!
//! | Variable               | Default           | Meaning                              |
//! |------------------------|-------------------|--------------------------------------|
//! | `SERROR_DEMO_USER_ID`  | `7`               | Id looked up by the user scenario    |
//! | `SERROR_DEMO_CONFIG`   | `/etc/serror.toml`| File read by the io scenario         |
//! | `SERROR_DEMO_JSON_LOG` | off               | Emit logs as JSON lines              |
//! | `SERROR_DEMO_PRETTY`   | on                | Pretty print JSON output             |
//!
//! `RUST_LOG` filters the logs, `info` if unset.

use std::str::FromStr;

/// Get environment variable parsed as type T, or return default.
#[inline]
pub fn env_get<T>(key: &str, default: T) -> T
where
    T: FromStr,
{
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

/// Get environment variable as boolean.
///
/// Accepts: "1", "true", "yes", "on" (case-insensitive) as true.
/// Everything else set returns false, unset returns the default.
pub fn env_get_bool(key: &str, default: bool) -> bool {
    match std::env::var(key) {
        Ok(val) => matches!(val.to_lowercase().as_str(), "1" | "true" | "yes" | "on"),
        Err(_) => default,
    }
}

#[derive(Debug, Clone)]
pub struct DemoConfig {
    pub user_id: i64,
    pub config_path: String,
    pub json_log: bool,
    pub pretty: bool,
}

impl DemoConfig {
    pub fn from_env() -> Self {
        Self {
            user_id: env_get("SERROR_DEMO_USER_ID", 7),
            config_path: env_get("SERROR_DEMO_CONFIG", "/etc/serror.toml".to_string()),
            json_log: env_get_bool("SERROR_DEMO_JSON_LOG", false),
            pretty: env_get_bool("SERROR_DEMO_PRETTY", true),
        }
    }
}
