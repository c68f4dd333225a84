//! Iteration (sprint) types
//!
//! Iteration boundaries are calendar dates, not timestamps.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{datetime, nullable};
use super::{CreateLabelInput, Label};

string_enum! {
    IterationStatus {
        Unstarted => "unstarted",
        Started => "started",
        Done => "done",
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Iteration {
    pub id: i64,
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub global_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<IterationStatus>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, with = "datetime::optional_date", skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,

    #[serde(default, with = "datetime::optional_date", skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub app_url: Option<String>,

    #[serde(default, deserialize_with = "nullable::vec")]
    pub follower_ids: Vec<Uuid>,

    #[serde(default, deserialize_with = "nullable::vec")]
    pub group_ids: Vec<Uuid>,

    #[serde(default, deserialize_with = "nullable::vec")]
    pub label_ids: Vec<i64>,

    #[serde(default, deserialize_with = "nullable::vec")]
    pub labels: Vec<Label>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entity_type: Option<String>,

    #[serde(default, with = "datetime::optional", skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(default, with = "datetime::optional", skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Body of `POST /iterations`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreateIterationInput {
    pub name: String,

    #[serde(with = "datetime::date")]
    pub start_date: NaiveDate,

    #[serde(with = "datetime::date")]
    pub end_date: NaiveDate,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub follower_ids: Option<Vec<Uuid>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_ids: Option<Vec<Uuid>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub labels: Option<Vec<CreateLabelInput>>,
}

impl CreateIterationInput {
    pub fn new(name: impl Into<String>, start_date: NaiveDate, end_date: NaiveDate) -> Self {
        Self {
            name: name.into(),
            start_date,
            end_date,
            description: None,
            follower_ids: None,
            group_ids: None,
            labels: None,
        }
    }
}

/// Body of `PUT /iterations/{id}`
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct UpdateIterationInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(with = "datetime::optional_date", skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,

    #[serde(with = "datetime::optional_date", skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub follower_ids: Option<Vec<Uuid>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_ids: Option<Vec<Uuid>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub labels: Option<Vec<CreateLabelInput>>,
}
