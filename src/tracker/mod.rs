//! Issue-tracker integration.
//!
//! The `IssueTracker` trait decouples the pipeline from the GraphQL
//! transport; `LinearTracker` is the production implementation.

pub mod linear;

pub use linear::LinearTracker;

use async_trait::async_trait;
use thiserror::Error;

use crate::models::{CreatedIssue, Priority, Team};

/// Errors from the issue tracker.
#[derive(Error, Debug)]
pub enum TrackerError {
    #[error("tracker transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("tracker API error: {0}")]
    Api(String),

    #[error("team not found: '{0}'")]
    TeamNotFound(String),

    #[error("malformed tracker response: {0}")]
    MalformedResponse(String),
}

/// Input for the issue-creation mutation.
///
/// `priority` is forwarded to the tracker uninterpreted — no range
/// validation happens on this side.
#[derive(Debug, Clone)]
pub struct IssueDraft {
    pub title: String,
    pub description: String,
    pub priority: Priority,
    pub team_id: String,
}

/// Trait for the two remote tracker operations.
#[async_trait]
pub trait IssueTracker: Send + Sync {
    /// Resolve a team by exact name match. Zero matches is an explicit
    /// [`TrackerError::TeamNotFound`], never a placeholder id.
    async fn resolve_team(&self, name: &str) -> Result<Team, TrackerError>;

    /// Create one issue. The returned URL is exposed unchanged.
    async fn create_issue(&self, draft: &IssueDraft) -> Result<CreatedIssue, TrackerError>;
}
