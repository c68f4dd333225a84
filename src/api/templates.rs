//! Entity templates
//!
//! Stories are created from a template with
//! [`ShortcutClient::create_story_from_template`].

use reqwest::Method;
use serde_json::Value;
use uuid::Uuid;

use crate::client::ShortcutClient;
use crate::error::Result;
use crate::types::id::resource_path;
use crate::types::{CreateEntityTemplateInput, EntityTemplate, UpdateEntityTemplateInput};

impl ShortcutClient {
    pub fn list_entity_templates(&self) -> Result<Vec<EntityTemplate>> {
        self.get("/entity-templates")
    }

    pub fn get_entity_template(&self, template_id: Uuid) -> Result<EntityTemplate> {
        self.get(&resource_path("entity-templates", template_id))
    }

    pub fn create_entity_template(&self, input: &CreateEntityTemplateInput) -> Result<EntityTemplate> {
        self.post("/entity-templates", input)
    }

    pub fn update_entity_template(
        &self,
        template_id: Uuid,
        input: &UpdateEntityTemplateInput,
    ) -> Result<EntityTemplate> {
        self.put(&resource_path("entity-templates", template_id), input)
    }

    pub fn delete_entity_template(&self, template_id: Uuid) -> Result<()> {
        self.delete(&resource_path("entity-templates", template_id))
    }

    /// Turns story templates on for the workspace
    pub fn enable_story_templates(&self) -> Result<()> {
        self.send_unit(Method::PUT, "/entity-templates/enable", None::<&Value>)
    }

    /// Turns story templates off. Templates are kept.
    pub fn disable_story_templates(&self) -> Result<()> {
        self.send_unit(Method::PUT, "/entity-templates/disable", None::<&Value>)
    }
}
