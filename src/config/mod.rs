//! Configuration loading and layering.
//!
//! Handles `.issuemill.toml` loading, environment variable resolution,
//! and CLI flag merging with proper priority ordering.

pub mod env;
pub mod loader;

pub use env::Env;
pub use loader::{Config, ProviderConfig, ScanConfig, TrackerConfig};
