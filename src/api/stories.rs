//! Stories, their comments, tasks and links

use reqwest::Method;
use serde_json::Value;

use crate::client::ShortcutClient;
use crate::error::Result;
use crate::types::id::resource_path;
use crate::types::{
    CreateStoryCommentInput, CreateStoryFromTemplateInput, CreateStoryInput, CreateStoryLinkInput, CreateTaskInput,
    ReactionInput, Story, StoryComment, StoryHistory, StoryLink, StoryTask, UpdateStoryCommentInput,
    UpdateStoryInput, UpdateStoryLinkInput, UpdateTaskInput,
};

impl ShortcutClient {
    // ==================== STORIES ====================

    /// Creates a story. `workflow_state_id` (or a project) is required by the
    /// API; it answers 400 otherwise.
    pub fn create_story(&self, input: &CreateStoryInput) -> Result<Story> {
        let story: Story = self.post("/stories", input)?;
        tracing::debug!("Created story {} ({})", story.id, story.name);
        Ok(story)
    }

    /// Creates a story from an entity template. Fields set on `input`
    /// override the template's.
    pub fn create_story_from_template(&self, input: &CreateStoryFromTemplateInput) -> Result<Story> {
        self.post("/stories/from-template", input)
    }

    pub fn get_story(&self, story_id: i64) -> Result<Story> {
        self.get(&resource_path("stories", story_id))
    }

    /// Only fields set on `input` are sent; `Some(vec![])` clears a list
    pub fn update_story(&self, story_id: i64, input: &UpdateStoryInput) -> Result<Story> {
        self.put(&resource_path("stories", story_id), input)
    }

    pub fn delete_story(&self, story_id: i64) -> Result<()> {
        self.delete(&resource_path("stories", story_id))
    }

    /// Stories carrying a given external link
    ///
    /// # API endpoint
    ///
    /// `GET /external-link/stories?external_link=...`
    ///
    /// # Arguments
    ///
    /// - `external_link`: full URL as stored in the story's `external_links`.
    ///   Matching is exact on the server side; it is sent query-encoded, unchanged.
    ///
    /// # Returns
    ///
    /// - `Ok(Vec<Story>)`: matching stories, empty when none match
    ///
    /// # Errors
    ///
    /// - **ValidationFailed**: the server rejects values that are not URLs
    pub fn get_external_link_stories(&self, external_link: &str) -> Result<Vec<Story>> {
        self.get_query(
            "/external-link/stories",
            vec![("external_link".to_string(), external_link.to_string())],
        )
    }

    /// Change events of a story, oldest first
    pub fn get_story_history(&self, story_id: i64) -> Result<Vec<StoryHistory>> {
        self.get(&format!("{}/history", resource_path("stories", story_id)))
    }

    /// Sub-task stories of a parent story
    pub fn list_story_sub_tasks(&self, story_id: i64) -> Result<Vec<Story>> {
        self.get(&format!("{}/sub-tasks", resource_path("stories", story_id)))
    }

    // ==================== COMMENTS ====================

    pub fn list_story_comments(&self, story_id: i64) -> Result<Vec<StoryComment>> {
        self.get(&comments_path(story_id))
    }

    /// Comments on a story. Set `parent_id` to reply in a thread.
    pub fn create_story_comment(&self, story_id: i64, input: &CreateStoryCommentInput) -> Result<StoryComment> {
        self.post(&comments_path(story_id), input)
    }

    pub fn get_story_comment(&self, story_id: i64, comment_id: i64) -> Result<StoryComment> {
        self.get(&comment_path(story_id, comment_id))
    }

    /// Replaces the comment text
    pub fn update_story_comment(
        &self,
        story_id: i64,
        comment_id: i64,
        input: &UpdateStoryCommentInput,
    ) -> Result<StoryComment> {
        self.put(&comment_path(story_id, comment_id), input)
    }

    pub fn delete_story_comment(&self, story_id: i64, comment_id: i64) -> Result<()> {
        self.delete(&comment_path(story_id, comment_id))
    }

    /// Adds an emoji reaction to a story comment
    ///
    /// # Arguments
    ///
    /// - `emoji`: shortcode with colons, e.g. `:thumbsup:`
    pub fn create_story_reaction(&self, story_id: i64, comment_id: i64, emoji: &str) -> Result<()> {
        let path = format!("{}/reactions", comment_path(story_id, comment_id));
        self.send_unit(Method::POST, &path, Some(&ReactionInput::new(emoji)))
    }

    /// Removes the caller's reaction. The emoji travels in the DELETE body.
    pub fn delete_story_reaction(&self, story_id: i64, comment_id: i64, emoji: &str) -> Result<()> {
        let path = format!("{}/reactions", comment_path(story_id, comment_id));
        self.send_unit(Method::DELETE, &path, Some(&ReactionInput::new(emoji)))
    }

    /// Stops syncing a comment thread with its Slack thread
    pub fn unlink_comment_thread_from_slack(&self, story_id: i64, comment_id: i64) -> Result<()> {
        let path = format!("{}/unlink-from-slack", comment_path(story_id, comment_id));
        self.send_unit(Method::POST, &path, None::<&Value>)
    }

    // ==================== TASKS ====================

    /// Checklist tasks of a story, in display order
    pub fn list_story_tasks(&self, story_id: i64) -> Result<Vec<StoryTask>> {
        self.get(&tasks_path(story_id))
    }

    pub fn create_story_task(&self, story_id: i64, input: &CreateTaskInput) -> Result<StoryTask> {
        self.post(&tasks_path(story_id), input)
    }

    pub fn get_story_task(&self, story_id: i64, task_id: i64) -> Result<StoryTask> {
        self.get(&task_path(story_id, task_id))
    }

    /// Renames, reorders or completes a task
    pub fn update_story_task(&self, story_id: i64, task_id: i64, input: &UpdateTaskInput) -> Result<StoryTask> {
        self.put(&task_path(story_id, task_id), input)
    }

    pub fn delete_story_task(&self, story_id: i64, task_id: i64) -> Result<()> {
        self.delete(&task_path(story_id, task_id))
    }

    // ==================== STORY LINKS ====================

    /// Links two stories. Returns the single created link.
    pub fn create_story_link(&self, input: &CreateStoryLinkInput) -> Result<StoryLink> {
        self.post("/story-links", input)
    }

    pub fn get_story_link(&self, story_link_id: i64) -> Result<StoryLink> {
        self.get(&resource_path("story-links", story_link_id))
    }

    /// Changes the verb or the linked stories
    pub fn update_story_link(&self, story_link_id: i64, input: &UpdateStoryLinkInput) -> Result<StoryLink> {
        self.put(&resource_path("story-links", story_link_id), input)
    }

    pub fn delete_story_link(&self, story_link_id: i64) -> Result<()> {
        self.delete(&resource_path("story-links", story_link_id))
    }
}

fn comments_path(story_id: i64) -> String {
    format!("{}/comments", resource_path("stories", story_id))
}

fn comment_path(story_id: i64, comment_id: i64) -> String {
    format!("{}/{}", comments_path(story_id), comment_id)
}

fn tasks_path(story_id: i64) -> String {
    format!("{}/tasks", resource_path("stories", story_id))
}

fn task_path(story_id: i64, task_id: i64) -> String {
    format!("{}/{}", tasks_path(story_id), task_id)
}
