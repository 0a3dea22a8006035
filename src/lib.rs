//! issuemill — AI code review that files the findings as tracker issues
//! (library crate).
//!
//! Re-exports public modules for integration tests and external use.

pub mod approval;
pub mod config;
pub mod constants;
pub mod extract;
pub mod models;
pub mod output;
pub mod pipeline;
pub mod prompts;
pub mod providers;
pub mod scanner;
pub mod tracker;
