//! Story change history
//!
//! Actions and references differ per entity type, so they stay as raw JSON.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use super::{datetime, nullable};

/// One change event on a story
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoryHistory {
    pub id: Uuid,

    #[serde(default, with = "datetime::optional", skip_serializing_if = "Option::is_none")]
    pub changed_at: Option<DateTime<Utc>>,

    /// Story the change belongs to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary_id: Option<i64>,

    /// Member who made the change; absent for automation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub member_id: Option<Uuid>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub webhook_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    #[serde(default, deserialize_with = "nullable::vec")]
    pub actions: Vec<Value>,

    #[serde(default, deserialize_with = "nullable::vec")]
    pub references: Vec<Value>,
}

impl StoryHistory {
    /// `action` field of each recorded action (`create`, `update`, ...)
    pub fn action_kinds(&self) -> impl Iterator<Item = &str> {
        self.actions.iter().filter_map(|a| a.get("action").and_then(Value::as_str))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Record;
    use serde_json::json;

    #[test]
    fn test_story_history_actions() {
        let history = StoryHistory::from_json(json!({
            "id": "12345678-1234-1234-1234-123456789012",
            "changed_at": "2023-03-01T10:00:00Z",
            "primary_id": 42,
            "version": "v1",
            "actions": [
                {"id": 42, "action": "update", "entity_type": "story", "changes": {"name": {"old": "a", "new": "b"}}},
                {"id": 7, "action": "create", "entity_type": "story-task"}
            ],
            "references": null
        }))
        .unwrap();

        assert_eq!(history.action_kinds().collect::<Vec<_>>(), vec!["update", "create"]);
        assert!(history.references.is_empty());
        assert!(history.member_id.is_none());
    }
}
