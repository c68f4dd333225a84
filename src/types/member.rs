//! Workspace members

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{datetime, nullable};

string_enum! {
    MemberRole {
        Owner => "owner",
        Admin => "admin",
        Member => "member",
        Observer => "observer",
    }
}

string_enum! {
    MemberState {
        Full => "full",
        Partial => "partial",
        Imported => "imported",
        Disabled => "disabled",
    }
}

/// A person in the workspace. `GET /member` returns the token owner in the
/// same shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Member {
    pub id: Uuid,
    pub profile: Profile,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<MemberRole>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<MemberState>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disabled: Option<bool>,

    #[serde(default, deserialize_with = "nullable::vec")]
    pub group_ids: Vec<Uuid>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub global_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entity_type: Option<String>,

    #[serde(default, with = "datetime::optional", skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(default, with = "datetime::optional", skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Member {
    pub fn mention_name(&self) -> &str {
        &self.profile.mention_name
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub mention_name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email_address: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deactivated: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_owner: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub two_factor_auth_activated: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gravatar_hash: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entity_type: Option<String>,
}
