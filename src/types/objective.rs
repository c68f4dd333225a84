//! Objectives and their key results

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{datetime, nullable};
use super::{Category, CreateCategoryInput};

string_enum! {
    ObjectiveState {
        ToDo => "to do",
        InProgress => "in progress",
        Done => "done",
    }
}

string_enum! {
    KeyResultType {
        Percent => "percent",
        Boolean => "boolean",
        Numeric => "numeric",
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Objective {
    pub id: i64,
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<ObjectiveState>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub app_url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub archived: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub started: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<i64>,

    #[serde(default, deserialize_with = "nullable::vec")]
    pub categories: Vec<Category>,

    #[serde(default, deserialize_with = "nullable::vec")]
    pub key_result_ids: Vec<Uuid>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub global_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entity_type: Option<String>,

    #[serde(default, with = "datetime::optional", skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(default, with = "datetime::optional", skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,

    #[serde(default, with = "datetime::optional", skip_serializing_if = "Option::is_none")]
    pub started_at: Option<DateTime<Utc>>,

    #[serde(default, with = "datetime::optional", skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Utc>>,
}

/// Body of `POST /objectives`
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CreateObjectiveInput {
    pub name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<ObjectiveState>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub categories: Option<Vec<CreateCategoryInput>>,

    #[serde(with = "datetime::optional", skip_serializing_if = "Option::is_none")]
    pub started_at_override: Option<DateTime<Utc>>,

    #[serde(with = "datetime::optional", skip_serializing_if = "Option::is_none")]
    pub completed_at_override: Option<DateTime<Utc>>,
}

impl CreateObjectiveInput {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_state(mut self, state: ObjectiveState) -> Self {
        self.state = Some(state);
        self
    }
}

/// Body of `PUT /objectives/{id}`
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct UpdateObjectiveInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<ObjectiveState>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub archived: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub categories: Option<Vec<CreateCategoryInput>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub before_id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub after_id: Option<i64>,
}

/// Milestones are the legacy name of objectives; `/milestones` serves the
/// same shape.
pub type Milestone = Objective;
pub type CreateMilestoneInput = CreateObjectiveInput;
pub type UpdateMilestoneInput = UpdateObjectiveInput;

/// Observed or target value of a key result. Exactly one side is set,
/// depending on the key result type.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyResultValue {
    /// Decimal as sent by the API, e.g. `"12.5"`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub numeric_value: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub boolean_value: Option<bool>,
}

impl KeyResultValue {
    pub fn numeric(value: impl Into<String>) -> Self {
        Self {
            numeric_value: Some(value.into()),
            boolean_value: None,
        }
    }

    pub fn boolean(value: bool) -> Self {
        Self {
            numeric_value: None,
            boolean_value: Some(value),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeyResult {
    pub id: Uuid,
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub objective_id: Option<i64>,

    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub result_type: Option<KeyResultType>,

    /// Completion percentage, 0 to 100
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub progress: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub initial_observed_value: Option<KeyResultValue>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_observed_value: Option<KeyResultValue>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_target_value: Option<KeyResultValue>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entity_type: Option<String>,
}

/// Body of `PUT /key-results/{id}`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct UpdateKeyResultInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub initial_observed_value: Option<KeyResultValue>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub observed_value: Option<KeyResultValue>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_value: Option<KeyResultValue>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Record;
    use serde_json::json;

    #[test]
    fn test_objective_embeds_categories() {
        let objective = Objective::from_json(json!({
            "id": 11,
            "name": "Ship v2",
            "state": "done",
            "categories": [{"id": 1, "name": "Infra"}],
            "key_result_ids": ["12345678-1234-1234-1234-123456789012"]
        }))
        .unwrap();
        assert_eq!(objective.state, Some(ObjectiveState::Done));
        assert_eq!(objective.categories[0].name, "Infra");
        assert_eq!(objective.key_result_ids.len(), 1);
    }

    #[test]
    fn test_key_result_values() {
        let kr = KeyResult::from_json(json!({
            "id": "12345678-1234-1234-1234-123456789012",
            "name": "Latency under 200ms",
            "type": "numeric",
            "progress": 40,
            "current_observed_value": {"numeric_value": "250"},
            "current_target_value": {"numeric_value": "200"}
        }))
        .unwrap();
        assert_eq!(kr.result_type, Some(KeyResultType::Numeric));
        assert_eq!(kr.current_target_value, Some(KeyResultValue::numeric("200")));
    }

    #[test]
    fn test_update_key_result_input() {
        let input = UpdateKeyResultInput {
            observed_value: Some(KeyResultValue::boolean(true)),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_value(&input).unwrap(),
            json!({"observed_value": {"boolean_value": true}})
        );
    }
}
