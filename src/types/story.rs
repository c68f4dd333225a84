//! Story types
//!
//! A story is the unit of work in Shortcut. Stories reference their
//! workflow state, project, epic and iteration by id only.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{datetime, nullable};
use super::{CreateLabelInput, CreateTaskInput, Label, StoryComment, StoryLink, StoryTask};

string_enum! {
    /// Kind of story
    StoryType {
        Feature => "feature",
        Chore => "chore",
        Bug => "bug",
    }
}

/// A story as returned by the API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Story {
    // ==================== IDENTITY ====================
    pub id: i64,
    pub name: String,
    pub story_type: StoryType,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub global_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub app_url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entity_type: Option<String>,

    // ==================== REFERENCES ====================
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub workflow_id: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub workflow_state_id: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_id: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub epic_id: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iteration_id: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_id: Option<Uuid>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub requested_by_id: Option<Uuid>,

    #[serde(default, deserialize_with = "nullable::vec")]
    pub owner_ids: Vec<Uuid>,

    #[serde(default, deserialize_with = "nullable::vec")]
    pub follower_ids: Vec<Uuid>,

    #[serde(default, deserialize_with = "nullable::vec")]
    pub label_ids: Vec<i64>,

    #[serde(default, deserialize_with = "nullable::vec")]
    pub labels: Vec<Label>,

    #[serde(default, deserialize_with = "nullable::vec")]
    pub external_links: Vec<String>,

    // ==================== STATE ====================
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimate: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub archived: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub started: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blocked: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blocker: Option<bool>,

    // ==================== DATES ====================
    #[serde(default, with = "datetime::optional", skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(default, with = "datetime::optional", skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,

    #[serde(default, with = "datetime::optional", skip_serializing_if = "Option::is_none")]
    pub moved_at: Option<DateTime<Utc>>,

    #[serde(default, with = "datetime::optional", skip_serializing_if = "Option::is_none")]
    pub deadline: Option<DateTime<Utc>>,

    #[serde(default, with = "datetime::optional", skip_serializing_if = "Option::is_none")]
    pub started_at: Option<DateTime<Utc>>,

    #[serde(default, with = "datetime::optional", skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Utc>>,

    // ==================== NESTED ====================
    #[serde(default, deserialize_with = "nullable::vec")]
    pub comments: Vec<StoryComment>,

    #[serde(default, deserialize_with = "nullable::vec")]
    pub tasks: Vec<StoryTask>,

    #[serde(default, deserialize_with = "nullable::vec")]
    pub story_links: Vec<StoryLink>,
}

/// Body of `POST /stories`
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CreateStoryInput {
    pub name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub story_type: Option<StoryType>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Required by the API unless `project_id` or `workflow_id` resolve a default state
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workflow_state_id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub epic_id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub iteration_id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_id: Option<Uuid>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub requested_by_id: Option<Uuid>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimate: Option<i64>,

    #[serde(with = "datetime::optional", skip_serializing_if = "Option::is_none")]
    pub deadline: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner_ids: Option<Vec<Uuid>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub follower_ids: Option<Vec<Uuid>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub labels: Option<Vec<CreateLabelInput>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub tasks: Option<Vec<CreateTaskInput>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_links: Option<Vec<String>>,
}

impl CreateStoryInput {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_workflow_state_id(mut self, workflow_state_id: i64) -> Self {
        self.workflow_state_id = Some(workflow_state_id);
        self
    }

    pub fn with_story_type(mut self, story_type: StoryType) -> Self {
        self.story_type = Some(story_type);
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_project_id(mut self, project_id: i64) -> Self {
        self.project_id = Some(project_id);
        self
    }

    pub fn with_epic_id(mut self, epic_id: i64) -> Self {
        self.epic_id = Some(epic_id);
        self
    }

    pub fn with_iteration_id(mut self, iteration_id: i64) -> Self {
        self.iteration_id = Some(iteration_id);
        self
    }

    pub fn with_owner_ids(mut self, owner_ids: Vec<Uuid>) -> Self {
        self.owner_ids = Some(owner_ids);
        self
    }

    pub fn with_labels(mut self, labels: Vec<CreateLabelInput>) -> Self {
        self.labels = Some(labels);
        self
    }

    pub fn with_tasks(mut self, tasks: Vec<CreateTaskInput>) -> Self {
        self.tasks = Some(tasks);
        self
    }

    pub fn with_deadline(mut self, deadline: DateTime<Utc>) -> Self {
        self.deadline = Some(deadline);
        self
    }
}

/// Body of `PUT /stories/{id}`. Only set fields are changed.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct UpdateStoryInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub story_type: Option<StoryType>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub workflow_state_id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub epic_id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub iteration_id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_id: Option<Uuid>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub requested_by_id: Option<Uuid>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimate: Option<i64>,

    #[serde(with = "datetime::optional", skip_serializing_if = "Option::is_none")]
    pub deadline: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner_ids: Option<Vec<Uuid>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub follower_ids: Option<Vec<Uuid>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub labels: Option<Vec<CreateLabelInput>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub archived: Option<bool>,
}
