//! Story comments and threaded epic comments

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{datetime, nullable};

/// A comment on a story
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoryComment {
    pub id: i64,

    /// `None` once the comment has been deleted
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author_id: Option<Uuid>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub story_id: Option<i64>,

    /// Set on replies
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub app_url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deleted: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blocker: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unblocks_parent: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entity_type: Option<String>,

    #[serde(default, deserialize_with = "nullable::vec")]
    pub member_mention_ids: Vec<Uuid>,

    #[serde(default, deserialize_with = "nullable::vec")]
    pub group_mention_ids: Vec<Uuid>,

    #[serde(default, deserialize_with = "nullable::vec")]
    pub reactions: Vec<Reaction>,

    #[serde(default, with = "datetime::optional", skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(default, with = "datetime::optional", skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// An emoji reaction and the members who left it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reaction {
    pub emoji: String,

    #[serde(default, deserialize_with = "nullable::vec")]
    pub permission_ids: Vec<Uuid>,
}

/// Body of `POST /stories/{id}/comments`, also used for epic comments
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CreateStoryCommentInput {
    pub text: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub author_id: Option<Uuid>,

    /// Reply to an existing comment
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub blocker: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_id: Option<String>,

    #[serde(with = "datetime::optional", skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl CreateStoryCommentInput {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Default::default()
        }
    }

    pub fn reply_to(mut self, parent_id: i64) -> Self {
        self.parent_id = Some(parent_id);
        self
    }
}

/// Body of `PUT /stories/{id}/comments/{comment_id}` and its epic counterpart
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpdateStoryCommentInput {
    pub text: String,
}

impl UpdateStoryCommentInput {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

/// A comment on an epic. Replies are nested under `comments`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThreadedComment {
    pub id: i64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author_id: Option<Uuid>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub app_url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deleted: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entity_type: Option<String>,

    #[serde(default, deserialize_with = "nullable::vec")]
    pub member_mention_ids: Vec<Uuid>,

    #[serde(default, deserialize_with = "nullable::vec")]
    pub group_mention_ids: Vec<Uuid>,

    #[serde(default, deserialize_with = "nullable::vec")]
    pub comments: Vec<ThreadedComment>,

    #[serde(default, with = "datetime::optional", skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(default, with = "datetime::optional", skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl ThreadedComment {
    /// Number of comments in this thread, the root included
    pub fn thread_len(&self) -> usize {
        1 + self.comments.iter().map(ThreadedComment::thread_len).sum::<usize>()
    }
}

/// Body of the story comment reaction endpoints
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReactionInput {
    /// Emoji shortcode such as `:thumbsup:`
    pub emoji: String,
}

impl ReactionInput {
    pub fn new(emoji: impl Into<String>) -> Self {
        Self { emoji: emoji.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Record;
    use serde_json::json;

    #[test]
    fn test_comment_with_reactions() {
        let comment = StoryComment::from_json(json!({
            "id": 123,
            "text": "This is a test comment",
            "author_id": "12345678-1234-1234-1234-123456789012",
            "story_id": 456,
            "parent_id": null,
            "created_at": "2023-01-01T00:00:00Z",
            "reactions": [
                {"emoji": ":+1:", "permission_ids": ["87654321-4321-4321-4321-210987654321"]}
            ]
        }))
        .unwrap();

        assert_eq!(comment.text.as_deref(), Some("This is a test comment"));
        assert_eq!(comment.story_id, Some(456));
        assert_eq!(comment.reactions.len(), 1);
        assert_eq!(comment.reactions[0].emoji, ":+1:");
    }

    #[test]
    fn test_reply_input() {
        let input = CreateStoryCommentInput::new("Agreed").reply_to(123);
        assert_eq!(serde_json::to_value(&input).unwrap(), json!({"text": "Agreed", "parent_id": 123}));
    }

    #[test]
    fn test_threaded_comment_nesting() {
        let comment = ThreadedComment::from_json(json!({
            "id": 789,
            "text": "Epic discussion comment",
            "entity_type": "epic-comment",
            "comments": [
                {"id": 790, "text": "Nested reply", "comments": [{"id": 791, "comments": null}]}
            ]
        }))
        .unwrap();

        assert_eq!(comment.comments[0].text.as_deref(), Some("Nested reply"));
        assert!(comment.comments[0].comments[0].comments.is_empty());
        assert_eq!(comment.thread_len(), 3);
    }
}
