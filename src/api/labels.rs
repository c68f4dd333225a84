use crate::api::description_query;
use crate::client::ShortcutClient;
use crate::error::Result;
use crate::types::id::resource_path;
use crate::types::{CreateLabelInput, Epic, Label, Story, UpdateLabelInput};

impl ShortcutClient {
    pub fn list_labels(&self) -> Result<Vec<Label>> {
        self.get("/labels")
    }

    pub fn get_label(&self, label_id: i64) -> Result<Label> {
        self.get(&resource_path("labels", label_id))
    }

    /// Creates a label. Names are unique in the workspace.
    pub fn create_label(&self, input: &CreateLabelInput) -> Result<Label> {
        self.post("/labels", input)
    }

    pub fn update_label(&self, label_id: i64, input: &UpdateLabelInput) -> Result<Label> {
        self.put(&resource_path("labels", label_id), input)
    }

    /// Deletes a label and removes it from every story and epic
    pub fn delete_label(&self, label_id: i64) -> Result<()> {
        self.delete(&resource_path("labels", label_id))
    }

    /// Stories carrying a label. Descriptions are left out unless asked for.
    pub fn list_label_stories(&self, label_id: i64, includes_description: Option<bool>) -> Result<Vec<Story>> {
        let path = format!("{}/stories", resource_path("labels", label_id));
        self.get_query(&path, description_query(includes_description))
    }

    /// Epics carrying a label
    pub fn list_label_epics(&self, label_id: i64) -> Result<Vec<Epic>> {
        self.get(&format!("{}/epics", resource_path("labels", label_id)))
    }
}
