//! Project types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{datetime, nullable};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: i64,
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub abbreviation: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub app_url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub archived: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team_id: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub workflow_id: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iteration_length: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_thermometer: Option<bool>,

    #[serde(default, deserialize_with = "nullable::vec")]
    pub follower_ids: Vec<Uuid>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub global_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entity_type: Option<String>,

    #[serde(default, with = "datetime::optional", skip_serializing_if = "Option::is_none")]
    pub start_time: Option<DateTime<Utc>>,

    #[serde(default, with = "datetime::optional", skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(default, with = "datetime::optional", skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Body of `POST /projects`
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CreateProjectInput {
    pub name: String,
    pub team_id: i64,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub abbreviation: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub iteration_length: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub follower_ids: Option<Vec<Uuid>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_id: Option<String>,

    #[serde(with = "datetime::optional", skip_serializing_if = "Option::is_none")]
    pub start_time: Option<DateTime<Utc>>,
}

impl CreateProjectInput {
    pub fn new(name: impl Into<String>, team_id: i64) -> Self {
        Self {
            name: name.into(),
            team_id,
            ..Default::default()
        }
    }

    pub fn with_abbreviation(mut self, abbreviation: impl Into<String>) -> Self {
        self.abbreviation = Some(abbreviation.into());
        self
    }
}

/// Body of `PUT /projects/{id}`
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct UpdateProjectInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub abbreviation: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub archived: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub team_id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub follower_ids: Option<Vec<Uuid>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_thermometer: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_create_project_input() {
        let input = CreateProjectInput::new("Mobile", 2).with_abbreviation("MOB");
        assert_eq!(
            serde_json::to_value(&input).unwrap(),
            json!({"name": "Mobile", "team_id": 2, "abbreviation": "MOB"})
        );
    }
}
