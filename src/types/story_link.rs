//! Story links (relationships between two stories)
//!
//! A link reads as "subject <verb> object", e.g. story 1 *blocks* story 2.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::datetime;

string_enum! {
    StoryLinkVerb {
        Blocks => "blocks",
        Duplicates => "duplicates",
        RelatesTo => "relates to",
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoryLink {
    pub id: i64,
    pub subject_id: i64,
    pub object_id: i64,
    pub verb: StoryLinkVerb,

    /// `subject` or `object`, relative to the story the link was read from
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub link_type: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entity_type: Option<String>,

    #[serde(default, with = "datetime::optional", skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(default, with = "datetime::optional", skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Body of `POST /story-links`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreateStoryLinkInput {
    pub subject_id: i64,
    pub object_id: i64,
    pub verb: StoryLinkVerb,
}

impl CreateStoryLinkInput {
    pub fn new(subject_id: i64, verb: StoryLinkVerb, object_id: i64) -> Self {
        Self {
            subject_id,
            object_id,
            verb,
        }
    }
}

/// Body of `PUT /story-links/{id}`
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct UpdateStoryLinkInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject_id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub object_id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub verb: Option<StoryLinkVerb>,
}
