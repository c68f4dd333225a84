//! Shared helpers for the HTTP-level tests
//!
//! Resource shapes are described by a small schema (field name, kind,
//! whether the API always sends it) from which valid response bodies are
//! generated, so each test only spells out the fields it cares about.

#![allow(dead_code)]

use httpmock::MockServer;
use serde_json::{json, Map, Value};
use shortcut_api::{ClientConfig, ShortcutClient};

pub const TOKEN: &str = "test-token";
pub const API_PREFIX: &str = "/api/v3";
pub const MEMBER_ID: &str = "12345678-1234-1234-1234-123456789012";
pub const GROUP_ID: &str = "87654321-4321-4321-4321-210987654321";

pub enum Kind {
    Int,
    Uuid,
    Text,
    Bool,
    DateTime,
    Date,
    Enum(&'static [&'static str]),
    IntList,
    UuidList,
}

pub struct Field {
    pub name: &'static str,
    pub kind: Kind,
    pub required: bool,
}

const fn req(name: &'static str, kind: Kind) -> Field {
    Field { name, kind, required: true }
}

const fn opt(name: &'static str, kind: Kind) -> Field {
    Field { name, kind, required: false }
}

pub type Schema = &'static [Field];

pub const STORY: Schema = &[
    req("id", Kind::Int),
    req("name", Kind::Text),
    req("story_type", Kind::Enum(&["feature", "bug", "chore"])),
    opt("description", Kind::Text),
    opt("workflow_state_id", Kind::Int),
    opt("epic_id", Kind::Int),
    opt("group_id", Kind::Uuid),
    opt("owner_ids", Kind::UuidList),
    opt("label_ids", Kind::IntList),
    opt("archived", Kind::Bool),
    opt("created_at", Kind::DateTime),
    opt("deadline", Kind::DateTime),
];

pub const EPIC: Schema = &[
    req("id", Kind::Int),
    req("name", Kind::Text),
    opt("state", Kind::Enum(&["to do", "in progress", "done"])),
    opt("description", Kind::Text),
    opt("group_ids", Kind::UuidList),
    opt("objective_ids", Kind::IntList),
    opt("planned_start_date", Kind::DateTime),
];

pub const ITERATION: Schema = &[
    req("id", Kind::Int),
    req("name", Kind::Text),
    opt("status", Kind::Enum(&["unstarted", "started", "done"])),
    opt("start_date", Kind::Date),
    opt("end_date", Kind::Date),
    opt("follower_ids", Kind::UuidList),
];

pub const LABEL: Schema = &[
    req("id", Kind::Int),
    req("name", Kind::Text),
    opt("color", Kind::Text),
    opt("archived", Kind::Bool),
];

pub const GROUP: Schema = &[
    req("id", Kind::Uuid),
    req("name", Kind::Text),
    opt("mention_name", Kind::Text),
    opt("member_ids", Kind::UuidList),
    opt("workflow_ids", Kind::IntList),
];

pub const PROJECT: Schema = &[
    req("id", Kind::Int),
    req("name", Kind::Text),
    opt("team_id", Kind::Int),
    opt("abbreviation", Kind::Text),
    opt("follower_ids", Kind::UuidList),
];

pub const OBJECTIVE: Schema = &[
    req("id", Kind::Int),
    req("name", Kind::Text),
    opt("state", Kind::Enum(&["to do", "in progress", "done"])),
    opt("key_result_ids", Kind::UuidList),
];

pub const KEY_RESULT: Schema = &[
    req("id", Kind::Uuid),
    req("name", Kind::Text),
    opt("objective_id", Kind::Int),
    opt("type", Kind::Enum(&["percent", "boolean", "numeric"])),
    opt("progress", Kind::Int),
];

pub const CATEGORY: Schema = &[
    req("id", Kind::Int),
    req("name", Kind::Text),
    opt("color", Kind::Text),
    opt("type", Kind::Text),
];

pub const LINKED_FILE: Schema = &[
    req("id", Kind::Int),
    req("name", Kind::Text),
    req("url", Kind::Text),
    opt("type", Kind::Enum(&["google", "url", "dropbox", "box", "onedrive"])),
    opt("story_ids", Kind::IntList),
];

pub const FILE: Schema = &[
    req("id", Kind::Int),
    req("name", Kind::Text),
    opt("size", Kind::Int),
    opt("content_type", Kind::Text),
    opt("story_ids", Kind::IntList),
];

pub const REPOSITORY: Schema = &[
    req("id", Kind::Int),
    opt("name", Kind::Text),
    opt("full_name", Kind::Text),
    opt("type", Kind::Text),
];

pub const STORY_LINK: Schema = &[
    req("id", Kind::Int),
    req("subject_id", Kind::Int),
    req("object_id", Kind::Int),
    req("verb", Kind::Enum(&["blocks", "duplicates", "relates to"])),
];

pub const COMMENT: Schema = &[
    req("id", Kind::Int),
    opt("text", Kind::Text),
    opt("author_id", Kind::Uuid),
    opt("story_id", Kind::Int),
];

pub const TASK: Schema = &[
    req("id", Kind::Int),
    req("description", Kind::Text),
    opt("complete", Kind::Bool),
    opt("story_id", Kind::Int),
];

pub const THREADED_COMMENT: Schema = &[
    req("id", Kind::Int),
    opt("text", Kind::Text),
    opt("author_id", Kind::Uuid),
    opt("member_mention_ids", Kind::UuidList),
    opt("created_at", Kind::DateTime),
];

pub const CUSTOM_FIELD: Schema = &[
    req("id", Kind::Uuid),
    req("name", Kind::Text),
    opt("field_type", Kind::Text),
    opt("enabled", Kind::Bool),
    opt("position", Kind::Int),
];

pub const DOC: Schema = &[
    req("id", Kind::Uuid),
    opt("title", Kind::Text),
    opt("content_markdown", Kind::Text),
    opt("app_url", Kind::Text),
    opt("created_at", Kind::DateTime),
];

pub const HEALTH: Schema = &[
    req("id", Kind::Uuid),
    opt("status", Kind::Enum(&["On Track", "At Risk", "Off Track", "No Health"])),
    opt("text", Kind::Text),
    opt("epic_id", Kind::Int),
    opt("created_at", Kind::DateTime),
];

pub const ENTITY_TEMPLATE: Schema = &[
    req("id", Kind::Uuid),
    req("name", Kind::Text),
    opt("author_id", Kind::Uuid),
    opt("last_used_at", Kind::DateTime),
];

pub const STORY_HISTORY: Schema = &[
    req("id", Kind::Uuid),
    opt("changed_at", Kind::DateTime),
    opt("primary_id", Kind::Int),
    opt("member_id", Kind::Uuid),
    opt("version", Kind::Text),
];

fn sample(field: &Field, seed: i64) -> Value {
    match &field.kind {
        Kind::Int => json!(seed),
        Kind::Uuid => json!(MEMBER_ID),
        Kind::Text => json!(format!("{} {}", field.name, seed)),
        Kind::Bool => json!(seed % 2 == 0),
        Kind::DateTime => json!("2023-01-01T00:00:00Z"),
        Kind::Date => json!("2023-01-02"),
        Kind::Enum(values) => json!(values[seed as usize % values.len()]),
        Kind::IntList => json!([seed, seed + 1]),
        Kind::UuidList => json!([MEMBER_ID, GROUP_ID]),
    }
}

/// Body with every schema field set
pub fn full_body(schema: Schema, seed: i64) -> Value {
    build(schema, seed, |_| true)
}

/// Body with only the fields the API always sends
pub fn minimal_body(schema: Schema, seed: i64) -> Value {
    build(schema, seed, |f| f.required)
}

/// Full body with `missing` left out
pub fn body_without(schema: Schema, seed: i64, missing: &str) -> Value {
    build(schema, seed, |f| f.name != missing)
}

/// Sets `overrides` on top of a full body
pub fn body_with(schema: Schema, seed: i64, overrides: Value) -> Value {
    let mut body = full_body(schema, seed);
    if let (Some(target), Value::Object(extra)) = (body.as_object_mut(), overrides) {
        target.extend(extra);
    }
    body
}

fn build(schema: Schema, seed: i64, keep: impl Fn(&Field) -> bool) -> Value {
    let object: Map<String, Value> = schema
        .iter()
        .filter(|f| keep(f))
        .map(|f| {
            let value = if f.name == "id" { id_value(f, seed) } else { sample(f, seed) };
            (f.name.to_string(), value)
        })
        .collect();
    Value::Object(object)
}

fn id_value(field: &Field, seed: i64) -> Value {
    match field.kind {
        Kind::Uuid => json!(MEMBER_ID),
        _ => json!(seed),
    }
}

pub fn required_fields(schema: Schema) -> impl Iterator<Item = &'static str> {
    schema.iter().filter(|f| f.required).map(|f| f.name)
}

pub fn path(endpoint: &str) -> String {
    format!("{}{}", API_PREFIX, endpoint)
}

pub fn client(server: &MockServer) -> ShortcutClient {
    let config = ClientConfig::new(TOKEN).with_base_url(server.url(API_PREFIX));
    ShortcutClient::with_config(config).expect("client")
}
