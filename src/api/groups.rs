use uuid::Uuid;

use crate::client::ShortcutClient;
use crate::error::Result;
use crate::types::id::resource_path;
use crate::types::{CreateGroupInput, Group, Story, UpdateGroupInput};

impl ShortcutClient {
    /// All groups (teams), archived ones included
    pub fn list_groups(&self) -> Result<Vec<Group>> {
        self.get("/groups")
    }

    pub fn get_group(&self, group_id: Uuid) -> Result<Group> {
        self.get(&resource_path("groups", group_id))
    }

    /// Creates a group. `mention_name` must be unique in the workspace.
    pub fn create_group(&self, input: &CreateGroupInput) -> Result<Group> {
        self.post("/groups", input)
    }

    pub fn update_group(&self, group_id: Uuid, input: &UpdateGroupInput) -> Result<Group> {
        self.put(&resource_path("groups", group_id), input)
    }

    /// Groups cannot be deleted through the API once they own stories; the
    /// server answers 422 and this returns `ValidationFailed`.
    pub fn delete_group(&self, group_id: Uuid) -> Result<()> {
        self.delete(&resource_path("groups", group_id))
    }

    /// Stories owned by a group (team)
    ///
    /// # API endpoint
    ///
    /// `GET /groups/{group_id}/stories?limit=..&offset=..`
    ///
    /// # Arguments
    ///
    /// - `group_id`: UUID of the group
    /// - `limit`: most stories to return; the server default applies when `None`
    /// - `offset`: stories to skip before the first one returned, for walking
    ///   the list in windows of `limit`
    ///
    /// # Returns
    ///
    /// - `Ok(Vec<Story>)`: one window; shorter than `limit` on the last one
    pub fn list_group_stories(&self, group_id: Uuid, limit: Option<u32>, offset: Option<u32>) -> Result<Vec<Story>> {
        let mut query = Vec::new();
        if let Some(limit) = limit {
            query.push(("limit".to_string(), limit.to_string()));
        }
        if let Some(offset) = offset {
            query.push(("offset".to_string(), offset.to_string()));
        }
        self.get_query(&format!("{}/stories", resource_path("groups", group_id)), query)
    }
}
