//! Startup configuration resolved from the process environment.
//!
//! # Responsibility
//! - Resolve database location, logging settings and match policy once.
//!
//! # Invariants
//! - Missing or blank variables fall back to defaults; resolution never fails.

use empdesk_core::{default_log_level, MatchPolicy};
use std::path::PathBuf;

pub const DB_PATH_VAR: &str = "EMPDESK_DB_PATH";
pub const LOG_LEVEL_VAR: &str = "EMPDESK_LOG_LEVEL";
pub const LOG_DIR_VAR: &str = "EMPDESK_LOG_DIR";
pub const STRICT_VAR: &str = "EMPDESK_STRICT";

const DEFAULT_DB_FILE_NAME: &str = "empdesk.sqlite3";
const DEFAULT_LOG_DIR_NAME: &str = "empdesk-logs";

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub db_path: PathBuf,
    pub log_level: String,
    /// Must be absolute; `init_logging` rejects relative paths.
    pub log_dir: PathBuf,
    pub match_policy: MatchPolicy,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolves configuration through `lookup`, which maps a variable name to
    /// its raw value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let value = |key: &str| {
            lookup(key)
                .map(|raw| raw.trim().to_string())
                .filter(|trimmed| !trimmed.is_empty())
        };

        let db_path = value(DB_PATH_VAR)
            .map(PathBuf::from)
            .unwrap_or_else(|| std::env::temp_dir().join(DEFAULT_DB_FILE_NAME));
        let log_level = value(LOG_LEVEL_VAR).unwrap_or_else(|| default_log_level().to_string());
        let log_dir = value(LOG_DIR_VAR)
            .map(PathBuf::from)
            .unwrap_or_else(|| std::env::temp_dir().join(DEFAULT_LOG_DIR_NAME));
        let match_policy = if value(STRICT_VAR).is_some_and(|raw| parse_flag(&raw)) {
            MatchPolicy::Strict
        } else {
            MatchPolicy::Lenient
        };

        Self {
            db_path,
            log_level,
            log_dir,
            match_policy,
        }
    }
}

fn parse_flag(raw: &str) -> bool {
    matches!(
        raw.to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
