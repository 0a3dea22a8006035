//! Issue types produced by the extraction stage.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Issue priority as used by the tracker.
///
/// Documented values: 0 none, 1 urgent, 2 high, 3 medium, 4 low.
/// A newtype rather than a closed enum: out-of-range values coming back
/// from the LLM are forwarded to the tracker uninterpreted.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
    JsonSchema,
)]
#[serde(transparent)]
pub struct Priority(pub u8);

impl Priority {
    pub const NONE: Priority = Priority(0);
    pub const URGENT: Priority = Priority(1);
    pub const HIGH: Priority = Priority(2);
    pub const MEDIUM: Priority = Priority(3);
    pub const LOW: Priority = Priority(4);

    /// Human-readable label for the documented range.
    pub fn label(self) -> &'static str {
        match self.0 {
            0 => "none",
            1 => "urgent",
            2 => "high",
            3 => "medium",
            4 => "low",
            _ => "unknown",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.0, self.label())
    }
}

/// A single actionable issue extracted from a review document.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct Issue {
    /// Short title summarizing the action item.
    pub title: String,
    /// Detailed explanation of what should change and why.
    pub description: String,
    /// Tracker priority. Defaults to 0 when the model omits it.
    #[serde(default)]
    pub priority: Priority,
}

/// The wrapper object the extraction call is instructed to return.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct IssueList {
    pub issues: Vec<Issue>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn priority_labels() {
        assert_eq!(Priority::NONE.label(), "none");
        assert_eq!(Priority::URGENT.label(), "urgent");
        assert_eq!(Priority::HIGH.label(), "high");
        assert_eq!(Priority::MEDIUM.label(), "medium");
        assert_eq!(Priority::LOW.label(), "low");
    }

    #[test]
    fn priority_out_of_range_passes_through() {
        let p: Priority = serde_json::from_str("7").unwrap();
        assert_eq!(p, Priority(7));
        assert_eq!(p.label(), "unknown");
        assert_eq!(serde_json::to_string(&p).unwrap(), "7");
    }

    #[test]
    fn priority_display() {
        assert_eq!(Priority::HIGH.to_string(), "2 (high)");
        assert_eq!(Priority::NONE.to_string(), "0 (none)");
    }

    #[test]
    fn issue_missing_priority_defaults_to_zero() {
        let issue: Issue =
            serde_json::from_str(r#"{"title": "T", "description": "D"}"#).unwrap();
        assert_eq!(issue.priority, Priority::NONE);
    }

    #[test]
    fn issue_list_deserializes_wrapper() {
        let list: IssueList = serde_json::from_str(
            r#"{"issues": [{"title": "T", "description": "D", "priority": 2}]}"#,
        )
        .unwrap();
        assert_eq!(list.issues.len(), 1);
        assert_eq!(list.issues[0].priority, Priority::HIGH);
    }
}
