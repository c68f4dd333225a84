//! Workflows and their states
//!
//! Story workflows (`/workflows`) and the single workspace epic workflow
//! (`/epic-workflow`) share the same state categories.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{datetime, nullable};

string_enum! {
    /// Category of a workflow state
    WorkflowStateType {
        Unstarted => "unstarted",
        Started => "started",
        Done => "done",
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Workflow {
    pub id: i64,
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_state_id: Option<i64>,

    #[serde(default, deserialize_with = "nullable::vec")]
    pub states: Vec<WorkflowState>,

    #[serde(default, deserialize_with = "nullable::vec")]
    pub project_ids: Vec<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team_id: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auto_assign_owner: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entity_type: Option<String>,

    #[serde(default, with = "datetime::optional", skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(default, with = "datetime::optional", skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Workflow {
    /// Looks up a state by name, ignoring case.
    pub fn state_named(&self, name: &str) -> Option<&WorkflowState> {
        self.states.iter().find(|s| s.name.eq_ignore_ascii_case(name))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkflowState {
    pub id: i64,
    pub name: String,

    #[serde(rename = "type")]
    pub state_type: WorkflowStateType,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<i64>,

    /// Verb shown in the activity feed, e.g. "start"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verb: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub num_stories: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub global_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entity_type: Option<String>,

    #[serde(default, with = "datetime::optional", skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(default, with = "datetime::optional", skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Workspace-wide workflow for epics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EpicWorkflow {
    pub id: i64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_epic_state_id: Option<i64>,

    #[serde(default, deserialize_with = "nullable::vec")]
    pub epic_states: Vec<EpicState>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entity_type: Option<String>,

    #[serde(default, with = "datetime::optional", skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(default, with = "datetime::optional", skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EpicState {
    pub id: i64,
    pub name: String,

    #[serde(rename = "type")]
    pub state_type: WorkflowStateType,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub global_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entity_type: Option<String>,

    #[serde(default, with = "datetime::optional", skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(default, with = "datetime::optional", skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Record;
    use serde_json::json;

    fn engineering() -> Workflow {
        Workflow::from_json(json!({
            "id": 500000,
            "name": "Engineering",
            "default_state_id": 500001,
            "states": [
                {"id": 500001, "name": "Unstarted", "type": "unstarted", "position": 1},
                {"id": 500002, "name": "In Progress", "type": "started", "position": 2},
                {"id": 500003, "name": "Done", "type": "done", "position": 3}
            ]
        }))
        .unwrap()
    }

    #[test]
    fn test_workflow_states() {
        let workflow = engineering();
        assert_eq!(workflow.states.len(), 3);
        assert_eq!(workflow.states[1].state_type, WorkflowStateType::Started);
    }

    #[test]
    fn test_state_named() {
        let workflow = engineering();
        assert_eq!(workflow.state_named("in progress").map(|s| s.id), Some(500002));
        assert!(workflow.state_named("Review").is_none());
    }

    #[test]
    fn test_state_requires_type() {
        let err = Workflow::from_json(json!({
            "id": 1,
            "name": "W",
            "states": [{"id": 2, "name": "S"}]
        }));
        assert!(err.is_err());
    }
}
