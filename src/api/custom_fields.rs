//! Custom fields
//!
//! Field definitions are created in the Shortcut UI. The API reads them,
//! edits them and deletes them. Ids are UUIDs.

use uuid::Uuid;

use crate::client::ShortcutClient;
use crate::error::Result;
use crate::types::id::resource_path;
use crate::types::{CustomField, UpdateCustomFieldInput};

impl ShortcutClient {
    /// Every custom field, enabled or not
    pub fn list_custom_fields(&self) -> Result<Vec<CustomField>> {
        self.get("/custom-fields")
    }

    pub fn get_custom_field(&self, custom_field_id: Uuid) -> Result<CustomField> {
        self.get(&resource_path("custom-fields", custom_field_id))
    }

    /// Updates a custom field
    ///
    /// # API endpoint
    ///
    /// `PUT /custom-fields/{custom_field_id}`
    ///
    /// # Arguments
    ///
    /// - `custom_field_id`: UUID of the field
    /// - `input`: only set fields are sent. A `values` list replaces the
    ///   field's values, so existing values must be listed by id to survive.
    ///
    /// # Errors
    ///
    /// - **ValidationFailed**: e.g. both `before_id` and `after_id` set
    pub fn update_custom_field(&self, custom_field_id: Uuid, input: &UpdateCustomFieldInput) -> Result<CustomField> {
        self.put(&resource_path("custom-fields", custom_field_id), input)
    }

    /// Deletes the field and clears it on every story
    pub fn delete_custom_field(&self, custom_field_id: Uuid) -> Result<()> {
        self.delete(&resource_path("custom-fields", custom_field_id))
    }
}
