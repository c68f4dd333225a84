//! Epic types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{datetime, nullable};
use super::{CreateLabelInput, Label};

string_enum! {
    /// Legacy epic state. Workspaces with an epic workflow also report
    /// `epic_state_id`, see [`super::EpicWorkflow`].
    EpicStatus {
        ToDo => "to do",
        InProgress => "in progress",
        Done => "done",
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Epic {
    pub id: i64,
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub global_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub app_url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<EpicStatus>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub epic_state_id: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub milestone_id: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub requested_by_id: Option<Uuid>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_id: Option<Uuid>,

    #[serde(default, deserialize_with = "nullable::vec")]
    pub group_ids: Vec<Uuid>,

    #[serde(default, deserialize_with = "nullable::vec")]
    pub owner_ids: Vec<Uuid>,

    #[serde(default, deserialize_with = "nullable::vec")]
    pub follower_ids: Vec<Uuid>,

    #[serde(default, deserialize_with = "nullable::vec")]
    pub objective_ids: Vec<i64>,

    #[serde(default, deserialize_with = "nullable::vec")]
    pub project_ids: Vec<i64>,

    #[serde(default, deserialize_with = "nullable::vec")]
    pub label_ids: Vec<i64>,

    #[serde(default, deserialize_with = "nullable::vec")]
    pub labels: Vec<Label>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub archived: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub started: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub productboard_url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entity_type: Option<String>,

    #[serde(default, with = "datetime::optional", skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(default, with = "datetime::optional", skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,

    #[serde(default, with = "datetime::optional", skip_serializing_if = "Option::is_none")]
    pub deadline: Option<DateTime<Utc>>,

    #[serde(default, with = "datetime::optional", skip_serializing_if = "Option::is_none")]
    pub planned_start_date: Option<DateTime<Utc>>,

    #[serde(default, with = "datetime::optional", skip_serializing_if = "Option::is_none")]
    pub started_at: Option<DateTime<Utc>>,

    #[serde(default, with = "datetime::optional", skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Utc>>,
}

/// One page of `GET /epics/paginated`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EpicPage {
    #[serde(default, deserialize_with = "nullable::vec")]
    pub data: Vec<Epic>,

    /// Number of the following page, absent on the last one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total: Option<i64>,
}

/// Body of `POST /epics`
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CreateEpicInput {
    pub name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<EpicStatus>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub epic_state_id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub requested_by_id: Option<Uuid>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_ids: Option<Vec<Uuid>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner_ids: Option<Vec<Uuid>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub follower_ids: Option<Vec<Uuid>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub objective_ids: Option<Vec<i64>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub labels: Option<Vec<CreateLabelInput>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_id: Option<String>,

    #[serde(with = "datetime::optional", skip_serializing_if = "Option::is_none")]
    pub deadline: Option<DateTime<Utc>>,

    #[serde(with = "datetime::optional", skip_serializing_if = "Option::is_none")]
    pub planned_start_date: Option<DateTime<Utc>>,
}

impl CreateEpicInput {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_objective_ids(mut self, objective_ids: Vec<i64>) -> Self {
        self.objective_ids = Some(objective_ids);
        self
    }

    pub fn with_group_ids(mut self, group_ids: Vec<Uuid>) -> Self {
        self.group_ids = Some(group_ids);
        self
    }
}

/// Body of `PUT /epics/{id}`
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct UpdateEpicInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<EpicStatus>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub epic_state_id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub archived: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub requested_by_id: Option<Uuid>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_ids: Option<Vec<Uuid>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner_ids: Option<Vec<Uuid>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub follower_ids: Option<Vec<Uuid>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub objective_ids: Option<Vec<i64>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub labels: Option<Vec<CreateLabelInput>>,

    #[serde(with = "datetime::optional", skip_serializing_if = "Option::is_none")]
    pub deadline: Option<DateTime<Utc>>,

    #[serde(with = "datetime::optional", skip_serializing_if = "Option::is_none")]
    pub planned_start_date: Option<DateTime<Utc>>,
}
