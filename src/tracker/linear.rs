//! Linear GraphQL client.
//!
//! Two operations: team lookup by exact name, and issue creation.
//! Retry policy is keyed by idempotency — the lookup (a read) retries
//! transport failures up to [`READ_RETRIES`] times, while the creation
//! mutation is sent at most once so a network blip can never file the
//! same issue twice.

use std::time::Duration;

use serde_json::{json, Value};

use crate::models::{CreatedIssue, Team};

use super::{IssueDraft, IssueTracker, TrackerError};

/// Transport attempts for read operations.
const READ_RETRIES: u32 = 3;

/// Delay between read retry attempts.
const RETRY_DELAY: Duration = Duration::from_secs(2);

const TEAM_QUERY: &str = r"
query GetTeam($teamName: String!) {
    teams(filter: { name: { eq: $teamName } }) {
        nodes {
            id
            name
        }
    }
}
";

const ISSUE_CREATE_MUTATION: &str = r"
mutation IssueCreate($input: IssueCreateInput!) {
    issueCreate(input: $input) {
        success
        issue {
            id
            title
            url
            team {
                name
            }
        }
    }
}
";

/// reqwest-based Linear GraphQL client.
pub struct LinearTracker {
    http: reqwest::Client,
    endpoint: String,
    api_key: String,
}

impl LinearTracker {
    pub fn new(endpoint: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: endpoint.into(),
            api_key: api_key.into(),
        }
    }

    /// Execute one GraphQL request and return the `data` payload.
    ///
    /// A response carrying an `errors` array maps to [`TrackerError::Api`].
    async fn execute(&self, query: &str, variables: Value) -> Result<Value, TrackerError> {
        let response = self
            .http
            .post(&self.endpoint)
            .header(reqwest::header::AUTHORIZATION, &self.api_key)
            .json(&json!({ "query": query, "variables": variables }))
            .send()
            .await?
            .error_for_status()?;

        let body: Value = response.json().await?;

        if let Some(errors) = body.get("errors").and_then(Value::as_array) {
            let messages: Vec<&str> = errors
                .iter()
                .filter_map(|e| e.get("message").and_then(Value::as_str))
                .collect();
            return Err(TrackerError::Api(messages.join("; ")));
        }

        body.get("data")
            .cloned()
            .ok_or_else(|| TrackerError::MalformedResponse("response has no data field".into()))
    }

    /// Execute a read query, retrying transport failures.
    async fn execute_read(&self, query: &str, variables: Value) -> Result<Value, TrackerError> {
        let mut last_err = None;

        for attempt in 0..READ_RETRIES {
            match self.execute(query, variables.clone()).await {
                Ok(data) => return Ok(data),
                Err(TrackerError::Transport(e)) if attempt + 1 < READ_RETRIES => {
                    last_err = Some(TrackerError::Transport(e));
                    tokio::time::sleep(RETRY_DELAY).await;
                }
                Err(e) => return Err(e),
            }
        }

        Err(last_err.unwrap_or_else(|| TrackerError::Api("retries exhausted".into())))
    }
}

#[async_trait::async_trait]
impl IssueTracker for LinearTracker {
    async fn resolve_team(&self, name: &str) -> Result<Team, TrackerError> {
        let data = self
            .execute_read(TEAM_QUERY, json!({ "teamName": name }))
            .await?;
        parse_team_response(&data, name)
    }

    async fn create_issue(&self, draft: &IssueDraft) -> Result<CreatedIssue, TrackerError> {
        let input = json!({
            "title": draft.title,
            "description": draft.description,
            "teamId": draft.team_id,
            "priority": draft.priority,
        });
        // At most once: creation is not idempotent, so no retry here.
        let data = self
            .execute(ISSUE_CREATE_MUTATION, json!({ "input": input }))
            .await?;
        parse_create_response(&data)
    }
}

/// Pull the first (exact-match) team out of a lookup response.
fn parse_team_response(data: &Value, name: &str) -> Result<Team, TrackerError> {
    let nodes = data
        .pointer("/teams/nodes")
        .and_then(Value::as_array)
        .ok_or_else(|| TrackerError::MalformedResponse("missing teams.nodes".into()))?;

    let node = nodes
        .first()
        .ok_or_else(|| TrackerError::TeamNotFound(name.to_string()))?;

    serde_json::from_value(node.clone())
        .map_err(|e| TrackerError::MalformedResponse(format!("bad team node: {e}")))
}

/// Pull the created issue out of a mutation response.
fn parse_create_response(data: &Value) -> Result<CreatedIssue, TrackerError> {
    let payload = data
        .get("issueCreate")
        .ok_or_else(|| TrackerError::MalformedResponse("missing issueCreate".into()))?;

    if payload.get("success").and_then(Value::as_bool) != Some(true) {
        return Err(TrackerError::Api("issueCreate reported failure".into()));
    }

    let issue = payload
        .get("issue")
        .ok_or_else(|| TrackerError::MalformedResponse("missing issueCreate.issue".into()))?;

    serde_json::from_value(issue.clone())
        .map_err(|e| TrackerError::MalformedResponse(format!("bad issue payload: {e}")))
}
