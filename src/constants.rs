//! App-wide constants.
//!
//! Centralises the tool name, config paths, environment variable names,
//! and endpoint URLs so a rename only requires changing this file.

/// Display name of the tool (lowercase).
pub const APP_NAME: &str = "issuemill";

/// Crate version, shown by `--version` and the banner.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Local config filename (e.g. `.issuemill.toml` in the scanned root).
pub const CONFIG_FILENAME: &str = ".issuemill.toml";

/// Directory name under `~/.config/` for global config.
pub const CONFIG_DIR: &str = "issuemill";

/// Issue-tracker GraphQL endpoint (Linear).
pub const TRACKER_URL: &str = "https://api.linear.app/graphql";

// ── Environment variable names ──────────────────────────────────────

pub const ENV_PROVIDER: &str = "ISSUEMILL_PROVIDER";
pub const ENV_MODEL: &str = "ISSUEMILL_MODEL";
pub const ENV_API_KEY: &str = "ISSUEMILL_API_KEY";
pub const ENV_BASE_URL: &str = "ISSUEMILL_BASE_URL";
pub const ENV_TRACKER_API_KEY: &str = "ISSUEMILL_TRACKER_API_KEY";
pub const ENV_TEAM: &str = "ISSUEMILL_TEAM";

// Fallbacks honoured for compatibility with existing Linear setups.
pub const ENV_TRACKER_API_KEY_FALLBACK: &str = "LINEAR_API_KEY";
pub const ENV_TEAM_FALLBACK: &str = "LINEAR_TEAM_NAME";
